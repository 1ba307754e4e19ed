//! Shared fixtures for batch runner tests.

#![allow(dead_code)]

use async_trait::async_trait;
use diarist_batch::BatchRunner;
use diarist_core::{ItemContext, REMOTE_ERROR_PREFIX, TableSchema, WorkingTable};
use diarist_error::{DiaristResult, StorageError, StorageErrorKind};
use diarist_interface::{DiaryGenerator, GenerationOutcome};
use diarist_rate_limit::Pacing;
use diarist_storage::{BackupManager, CsvRowStore, TableStore};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Generator that records prompts and fails on selected ones.
#[derive(Debug, Default)]
pub struct MockGenerator {
    prompts: Mutex<Vec<String>>,
    fail_on: HashSet<String>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(prompts: &[&str]) -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            fail_on: prompts.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl DiaryGenerator for MockGenerator {
    async fn generate(&self, prompt: &str, _context: &ItemContext) -> GenerationOutcome {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if self.fail_on.contains(prompt) {
            GenerationOutcome::failed(REMOTE_ERROR_PREFIX, "simulated outage")
        } else {
            GenerationOutcome::Generated(format!("diary:{}", prompt))
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Row store that records the done count at every save and can be told to
/// fail from the Nth save on.
#[derive(Debug)]
pub struct RecordingStore {
    inner: CsvRowStore,
    saves: Mutex<Vec<usize>>,
    fail_from_save: Option<usize>,
    attempts: AtomicUsize,
}

impl RecordingStore {
    pub fn new(inner: CsvRowStore) -> Self {
        Self {
            inner,
            saves: Mutex::new(Vec::new()),
            fail_from_save: None,
            attempts: AtomicUsize::new(0),
        }
    }

    /// Fail the `n`th save (1-based) and every one after it.
    pub fn failing_from(inner: CsvRowStore, n: usize) -> Self {
        Self {
            fail_from_save: Some(n),
            ..Self::new(inner)
        }
    }

    /// Done-row counts at each successful save, in order.
    pub fn saved_done_counts(&self) -> Vec<usize> {
        self.saves.lock().unwrap().clone()
    }
}

#[async_trait]
impl TableStore for RecordingStore {
    async fn load(&self) -> DiaristResult<WorkingTable> {
        self.inner.load().await
    }

    async fn save(&self, table: &WorkingTable) -> DiaristResult<()> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_from_save.is_some_and(|n| attempt >= n) {
            return Err(StorageError::new(StorageErrorKind::FileWrite(
                "simulated disk full".to_string(),
            ))
            .into());
        }
        self.inner.save(table).await?;
        self.saves.lock().unwrap().push(table.completed_count());
        Ok(())
    }
}

/// Artifact paths inside a temp directory.
pub struct Workspace {
    pub input: PathBuf,
    pub output: PathBuf,
    pub backup: PathBuf,
}

impl Workspace {
    pub fn new(dir: &Path) -> Self {
        Self {
            input: dir.join("prompts.csv"),
            output: dir.join("results.csv"),
            backup: dir.join("backup.csv"),
        }
    }

    pub fn store(&self) -> CsvRowStore {
        CsvRowStore::new(&self.input, &self.output, TableSchema::default())
    }

    pub fn backup_manager(&self) -> BackupManager {
        BackupManager::new(&self.backup, &self.output, TableSchema::default())
    }

    pub fn runner<G: DiaryGenerator>(
        &self,
        generator: G,
        checkpoint_interval: usize,
    ) -> BatchRunner<G, CsvRowStore> {
        BatchRunner::new(
            generator,
            self.store(),
            self.backup_manager(),
            Pacing::unthrottled(checkpoint_interval).unwrap(),
        )
    }

    /// Write an input artifact with one row per prompt.
    pub async fn write_prompts(&self, prompts: &[&str]) {
        let mut csv = String::from("日付,生成プロンプト\n");
        for (i, prompt) in prompts.iter().enumerate() {
            csv.push_str(&format!("2024/04/{:02},{}\n", i + 1, prompt));
        }
        tokio::fs::write(&self.input, csv).await.unwrap();
    }

    /// Result cells of the output artifact, in row order.
    pub async fn output_results(&self) -> Vec<Option<String>> {
        let table = self.store().load().await.unwrap();
        table.items().iter().map(|item| item.result().clone()).collect()
    }
}
