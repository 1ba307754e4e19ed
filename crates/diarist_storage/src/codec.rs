//! CSV encoding and atomic file writes.

use diarist_core::{TableSchema, WorkingTable};
use diarist_error::{DiaristResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Parse CSV bytes into a table.
///
/// `source` names the artifact in error messages.
///
/// # Examples
///
/// ```
/// use diarist_core::TableSchema;
/// use diarist_storage::decode_table;
///
/// let csv = "生成プロンプト,生成結果\nP1,\nP2,done\n";
/// let table = decode_table(csv.as_bytes(), TableSchema::default(), "inline")?;
/// assert_eq!(table.pending_count(), 1);
/// # Ok::<(), diarist_error::DiaristError>(())
/// ```
pub fn decode_table(bytes: &[u8], schema: TableSchema, source: &str) -> DiaristResult<WorkingTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let header: Vec<String> = reader
        .headers()
        .map_err(|e| parse_error(source, e))?
        .iter()
        .map(String::from)
        .collect();

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| parse_error(source, e))?;
        records.push(record.iter().map(String::from).collect());
    }

    WorkingTable::from_records(schema, header, records, source)
}

/// Render a table as CSV bytes, header first.
pub fn encode_table(table: &WorkingTable) -> DiaristResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());

    writer.write_record(table.columns()).map_err(write_error)?;
    for record in table.records() {
        writer.write_record(&record).map_err(write_error)?;
    }

    writer
        .into_inner()
        .map_err(|e| StorageError::new(StorageErrorKind::FileWrite(e.to_string())).into())
}

/// Read and parse the table at `path`, or `None` if the file does not exist.
#[tracing::instrument(skip(schema), fields(path = %path.display()))]
pub async fn read_table(path: &Path, schema: &TableSchema) -> DiaristResult<Option<WorkingTable>> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into());
        }
    };

    let table = decode_table(&bytes, schema.clone(), &path.display().to_string())?;
    tracing::debug!(rows = table.len(), columns = table.columns().len(), "Read table");
    Ok(Some(table))
}

/// Write `table` to `path` through a sibling temp file and a rename.
#[tracing::instrument(skip(table), fields(path = %path.display(), rows = table.len()))]
pub async fn write_table_atomic(path: &Path, table: &WorkingTable) -> DiaristResult<()> {
    let data = encode_table(table)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                parent.display(),
                e
            )))
        })?;
    }

    let temp_path = temp_path_for(path);
    let file_error = |e: std::io::Error| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            temp_path.display(),
            e
        )))
    };

    let mut file = tokio::fs::File::create(&temp_path).await.map_err(file_error)?;
    file.write_all(&data).await.map_err(file_error)?;
    file.sync_all().await.map_err(file_error)?;
    drop(file);

    tokio::fs::rename(&temp_path, path).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "rename {} to {}: {}",
            temp_path.display(),
            path.display(),
            e
        )))
    })?;

    tracing::debug!(bytes = data.len(), "Wrote table");
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn parse_error(source: &str, e: csv::Error) -> StorageError {
    StorageError::new(StorageErrorKind::Parse(format!("{}: {}", source, e)))
}

fn write_error(e: csv::Error) -> StorageError {
    StorageError::new(StorageErrorKind::FileWrite(e.to_string()))
}
