//! The ordered working table.

use crate::{ItemContext, TableSchema, WorkItem, is_error_marked};
use diarist_error::{BatchError, BatchErrorKind, DiaristResult, StorageError, StorageErrorKind};

/// Ordered sequence of rows plus the header they were read with.
///
/// The header always contains the schema's prompt and result columns. Row ids
/// are `0..len` in insertion order and never change, so the table itself is
/// the progress record of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingTable {
    schema: TableSchema,
    columns: Vec<String>,
    items: Vec<WorkItem>,
}

impl WorkingTable {
    /// Build a table from a header and raw records.
    ///
    /// `source` names the artifact for error messages. A header without the
    /// prompt column is rejected; a header without the result column gets it
    /// appended and every row starts pending. Short records are padded with
    /// empty cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use diarist_core::{TableSchema, WorkingTable};
    ///
    /// let header = vec!["日付".to_string(), "生成プロンプト".to_string()];
    /// let records = vec![vec!["2024/04/01".to_string(), "P1".to_string()]];
    /// let table = WorkingTable::from_records(TableSchema::default(), header, records, "prompts.csv")?;
    ///
    /// assert_eq!(table.columns().last().map(String::as_str), Some("生成結果"));
    /// assert!(table.items()[0].is_pending());
    /// # Ok::<(), diarist_error::DiaristError>(())
    /// ```
    pub fn from_records(
        schema: TableSchema,
        header: Vec<String>,
        records: Vec<Vec<String>>,
        source: &str,
    ) -> DiaristResult<Self> {
        let prompt_index = header
            .iter()
            .position(|c| c == schema.prompt_column())
            .ok_or_else(|| {
                StorageError::new(StorageErrorKind::MissingColumn {
                    column: schema.prompt_column().clone(),
                    path: source.to_string(),
                })
            })?;
        let result_index = header.iter().position(|c| c == schema.result_column());

        let header_len = header.len();
        let mut columns = header;
        if result_index.is_none() {
            columns.push(schema.result_column().clone());
        }

        let mut items = Vec::with_capacity(records.len());
        for (id, mut record) in records.into_iter().enumerate() {
            if record.len() > header_len {
                return Err(StorageError::new(StorageErrorKind::Parse(format!(
                    "{}: row {} has {} cells but the header has {}",
                    source,
                    id + 1,
                    record.len(),
                    header_len
                )))
                .into());
            }
            record.resize(columns.len(), String::new());
            let prompt = Some(record[prompt_index].clone());
            let result = result_index.map(|i| record[i].clone());
            let context = columns
                .iter()
                .zip(record)
                .enumerate()
                .filter(|(i, _)| *i != prompt_index && Some(*i) != result_index)
                .filter(|(_, (name, _))| *name != schema.result_column())
                .map(|(_, (name, value))| (name.clone(), value))
                .collect();
            items.push(WorkItem::new(id, prompt, result, ItemContext::new(context)));
        }

        Ok(Self {
            schema,
            columns,
            items,
        })
    }

    /// Render every row as a record aligned with [`columns`](Self::columns).
    ///
    /// Missing prompts and pending results render as empty cells.
    pub fn records(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.items.iter().map(|item| {
            self.columns
                .iter()
                .map(|column| {
                    if column == self.schema.prompt_column() {
                        item.prompt().clone().unwrap_or_default()
                    } else if column == self.schema.result_column() {
                        item.result().clone().unwrap_or_default()
                    } else {
                        item.context().get(column).unwrap_or_default().to_string()
                    }
                })
                .collect()
        })
    }

    /// Column layout the table was built with.
    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// Header in persisted order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in insertion order.
    pub fn items(&self) -> &[WorkItem] {
        &self.items
    }

    /// Row by id.
    pub fn get(&self, id: usize) -> Option<&WorkItem> {
        self.items.get(id)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Store `text` as the result of row `id`.
    pub fn set_result(&mut self, id: usize, text: impl Into<String>) -> DiaristResult<()> {
        let item = self
            .items
            .get_mut(id)
            .ok_or_else(|| BatchError::new(BatchErrorKind::UnknownRow(id)))?;
        item.set_result(text.into());
        Ok(())
    }

    /// Rows with a stored result, including error markers.
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|i| !i.is_pending()).count()
    }

    /// Rows still waiting for generation.
    pub fn pending_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_pending()).count()
    }

    /// Rows whose stored result is an error marker.
    pub fn error_marked_count(&self) -> usize {
        self.items
            .iter()
            .filter_map(|i| i.result().as_deref())
            .filter(|r| is_error_marked(r))
            .count()
    }
}
