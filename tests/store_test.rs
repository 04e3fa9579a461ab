//! Tests for single-slot persistence: stores, backends, publish side effects

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use alarm_slot::{
    AlarmRecord, AlarmStore, ChangeNotifier, FileStorage, MemoryStorage, StorageBackend,
};
use common::{FailingStorage, init_tracing, local_time, settle};

fn store_over(backend: Arc<dyn StorageBackend>) -> AlarmStore {
    init_tracing();
    AlarmStore::new(backend, ChangeNotifier::new())
}

#[tokio::test]
async fn test_save_then_load_round_trips() {
    let store = store_over(Arc::new(MemoryStorage::new()));
    let record = AlarmRecord::new(local_time(2030, 1, 1, 7, 0));

    store.save(&record).await.expect("save succeeds");
    assert_eq!(store.load().await, Some(record));
}

#[tokio::test]
async fn test_empty_slot_loads_none() {
    let store = store_over(Arc::new(MemoryStorage::new()));
    assert_eq!(store.load().await, None);
}

#[tokio::test]
async fn test_save_overwrites_previous_record() {
    let store = store_over(Arc::new(MemoryStorage::new()));
    let first = AlarmRecord::new(local_time(2030, 1, 1, 7, 0));
    let second = AlarmRecord::new(local_time(2030, 2, 2, 8, 30));

    store.save(&first).await.expect("first save");
    store.save(&second).await.expect("second save");
    assert_eq!(store.load().await, Some(second));
}

#[tokio::test]
async fn test_clear_is_idempotent() {
    let store = store_over(Arc::new(MemoryStorage::new()));
    let record = AlarmRecord::new(local_time(2030, 1, 1, 7, 0));
    store.save(&record).await.expect("save");

    store.clear().await.expect("first clear");
    assert_eq!(store.load().await, None);
    store.clear().await.expect("clearing an empty slot");
    assert_eq!(store.load().await, None);
}

#[tokio::test]
async fn test_corrupt_slot_loads_as_none() {
    let backend = Arc::new(MemoryStorage::new());
    backend
        .write(b"{ definitely not an alarm".to_vec())
        .await
        .expect("raw write");

    let store = store_over(backend);
    assert_eq!(store.load().await, None);
}

#[tokio::test]
async fn test_save_and_clear_publish_exactly_once_each() {
    let notifier = ChangeNotifier::new();
    let publishes = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&publishes);
    let _token = notifier.subscribe(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let store = AlarmStore::new(Arc::new(MemoryStorage::new()), notifier);
    let record = AlarmRecord::new(local_time(2030, 1, 1, 7, 0));

    store.save(&record).await.expect("save");
    settle().await;
    assert_eq!(publishes.load(Ordering::SeqCst), 1);

    store.clear().await.expect("clear");
    settle().await;
    assert_eq!(publishes.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_failed_write_publishes_nothing() {
    let notifier = ChangeNotifier::new();
    let publishes = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&publishes);
    let _token = notifier.subscribe(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let store = AlarmStore::new(Arc::new(FailingStorage), notifier);
    let record = AlarmRecord::new(local_time(2030, 1, 1, 7, 0));

    assert!(store.save(&record).await.is_err());
    settle().await;
    assert_eq!(publishes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_file_storage_survives_restart() {
    let dir = tempfile::tempdir().expect("temp dir");
    let record = AlarmRecord::new(local_time(2030, 1, 1, 7, 0));

    {
        let store = store_over(Arc::new(FileStorage::in_dir(dir.path())));
        store.save(&record).await.expect("save");
    }

    // A fresh store over the same directory sees the same record.
    let reopened = store_over(Arc::new(FileStorage::in_dir(dir.path())));
    assert_eq!(reopened.load().await, Some(record));
}

#[tokio::test]
async fn test_file_storage_missing_file_reads_none() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = store_over(Arc::new(FileStorage::in_dir(dir.path())));
    assert_eq!(store.load().await, None);
}

#[tokio::test]
async fn test_file_storage_delete_is_idempotent() {
    let dir = tempfile::tempdir().expect("temp dir");
    let backend = FileStorage::in_dir(dir.path());

    backend.delete().await.expect("deleting absent slot");
    backend.write(b"bytes".to_vec()).await.expect("write");
    backend.delete().await.expect("delete");
    backend.delete().await.expect("second delete");
    assert_eq!(backend.read().await.expect("read"), None);
}

#[tokio::test]
async fn test_file_storage_uses_conventional_slot_name() {
    let dir = tempfile::tempdir().expect("temp dir");
    let backend = FileStorage::in_dir(dir.path());
    assert_eq!(backend.path(), dir.path().join("ScheduledAlarm"));

    backend.write(b"bytes".to_vec()).await.expect("write");
    assert!(dir.path().join("ScheduledAlarm").exists());
}

#[tokio::test]
async fn test_file_storage_corrupt_file_loads_as_none() {
    let dir = tempfile::tempdir().expect("temp dir");
    let backend = Arc::new(FileStorage::in_dir(dir.path()));
    backend
        .write(b"\xff\xfe garbage".to_vec())
        .await
        .expect("raw write");

    let store = store_over(backend);
    assert_eq!(store.load().await, None);
}
