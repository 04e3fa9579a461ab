//! Shared fixtures for the alarm scheduler tests
#![allow(dead_code)]

use std::sync::{Arc, Once};
use std::time::Duration;

use alarm_slot::{
    AlarmError, AlarmResult, AlarmScheduler, MemoryCenter, MemoryStorage, StorageBackend,
};
use chrono::{DateTime, Local, TimeZone};

static TRACING: Once = Once::new();

/// Route the crate's tracing output through the test harness
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// Build a local wall-clock time, panicking on invalid fields
pub fn local_time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("unambiguous local time")
}

/// A scheduler wired to the given center over in-memory storage
pub fn scheduler_with(
    center: Arc<MemoryCenter>,
    storage: Arc<MemoryStorage>,
) -> AlarmScheduler {
    init_tracing();
    AlarmScheduler::builder()
        .service(center)
        .storage(storage)
        .build()
        .expect("scheduler assembles")
}

/// Give spawned observer tasks a turn to run
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(25)).await;
}

/// Storage whose reads succeed but whose writes and deletes always fail
#[derive(Default)]
pub struct FailingStorage;

impl StorageBackend for FailingStorage {
    fn read(
        &self,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = AlarmResult<Option<Vec<u8>>>> + Send + '_>>
    {
        Box::pin(async move { Ok(None) })
    }

    fn write(
        &self,
        _bytes: Vec<u8>,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = AlarmResult<()>> + Send + '_>> {
        Box::pin(async move { Err(AlarmError::Storage("write refused".to_string())) })
    }

    fn delete(
        &self,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = AlarmResult<()>> + Send + '_>> {
        Box::pin(async move { Err(AlarmError::Storage("delete refused".to_string())) })
    }
}
