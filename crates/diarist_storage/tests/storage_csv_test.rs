//! Tests for the CSV row store and backup manager.

use diarist_core::TableSchema;
use diarist_error::{DiaristErrorKind, StorageErrorKind};
use diarist_storage::{BackupManager, CsvRowStore, TableStore};
use tempfile::TempDir;

const INPUT: &str = "日付,エピソード,生成プロンプト\n\
2024/04/01,File 1,P1\n\
2024/04/02,File 2,P2\n\
2024/04/03,File 3,\n";

fn storage_kind(err: &diarist_error::DiaristError) -> Option<&StorageErrorKind> {
    match err.kind() {
        DiaristErrorKind::Storage(e) => Some(&e.kind),
        _ => None,
    }
}

#[tokio::test]
async fn test_fresh_load_appends_result_column() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("prompts.csv");
    tokio::fs::write(&input, INPUT).await?;

    let store = CsvRowStore::new(&input, dir.path().join("results.csv"), TableSchema::default());
    let table = store.load().await?;

    assert_eq!(table.len(), 3);
    assert_eq!(
        table.columns(),
        &["日付", "エピソード", "生成プロンプト", "生成結果"]
    );
    assert_eq!(table.pending_count(), 3);
    assert!(table.items()[2].prompt().is_none());
    assert_eq!(table.items()[0].context().get("エピソード"), Some("File 1"));
    Ok(())
}

#[tokio::test]
async fn test_output_takes_precedence_over_input() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("prompts.csv");
    let output = dir.path().join("results.csv");
    tokio::fs::write(&input, INPUT).await?;
    tokio::fs::write(&output, "生成プロンプト,生成結果\nP1,done\nP2,\n").await?;

    let store = CsvRowStore::new(&input, &output, TableSchema::default());
    let table = store.load().await?;

    assert_eq!(table.len(), 2);
    assert_eq!(table.items()[0].result().as_deref(), Some("done"));
    assert!(table.items()[1].is_pending());
    Ok(())
}

#[tokio::test]
async fn test_save_then_load_preserves_rows_and_order() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("prompts.csv");
    let output = dir.path().join("nested/out/results.csv");
    tokio::fs::write(&input, INPUT).await?;

    let store = CsvRowStore::new(&input, &output, TableSchema::default());
    let mut table = store.load().await?;
    table.set_result(0, "2026年10月16日\n一行目\n二行目")?;
    store.save(&table).await?;

    assert!(!dir.path().join("nested/out/results.csv.tmp").exists());

    let reloaded = store.load().await?;
    assert_eq!(reloaded, table);
    assert_eq!(reloaded.columns(), table.columns());
    Ok(())
}

#[tokio::test]
async fn test_missing_artifacts_is_not_found() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = CsvRowStore::new(
        dir.path().join("missing.csv"),
        dir.path().join("results.csv"),
        TableSchema::default(),
    );

    let err = store.load().await.unwrap_err();
    match storage_kind(&err) {
        Some(StorageErrorKind::NotFound(path)) => assert!(path.contains("missing.csv")),
        other => panic!("unexpected error kind: {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_missing_prompt_column_rejected() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("prompts.csv");
    tokio::fs::write(&input, "日付,メモ\n2024/04/01,x\n").await?;

    let store = CsvRowStore::new(&input, dir.path().join("results.csv"), TableSchema::default());
    let err = store.load().await.unwrap_err();
    assert!(matches!(
        storage_kind(&err),
        Some(StorageErrorKind::MissingColumn { column, .. }) if column == "生成プロンプト"
    ));
    Ok(())
}

#[tokio::test]
async fn test_backup_snapshot_and_restore() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("prompts.csv");
    let output = dir.path().join("results.csv");
    let backup = dir.path().join("backup.csv");
    tokio::fs::write(&input, INPUT).await?;

    let store = CsvRowStore::new(&input, &output, TableSchema::default());
    let manager = BackupManager::new(&backup, &output, TableSchema::default());
    assert!(!manager.has_backup().await);

    let original = store.load().await?;
    manager.snapshot(&original).await?;
    assert!(manager.has_backup().await);

    let mut mutated = original.clone();
    mutated.set_result(1, "partial")?;
    store.save(&mutated).await?;

    let restored = manager.restore().await?;
    assert_eq!(restored, original);
    assert_eq!(store.load().await?, original);
    Ok(())
}

#[tokio::test]
async fn test_restore_without_backup_fails() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let manager = BackupManager::new(
        dir.path().join("backup.csv"),
        dir.path().join("results.csv"),
        TableSchema::default(),
    );

    let err = manager.restore().await.unwrap_err();
    assert!(matches!(storage_kind(&err), Some(StorageErrorKind::NoBackup(_))));
    assert!(!dir.path().join("results.csv").exists());
    Ok(())
}
