//! In-memory slot storage
//!
//! Ephemeral backend for tests and hosts that do not want durability. The
//! whole slot lives behind one mutex, which trivially satisfies the
//! atomic-overwrite contract.

use parking_lot::Mutex;

use crate::components::AlarmResult;
use crate::components::store::StorageBackend;

/// Volatile single-slot storage backend
#[derive(Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the slot currently holds bytes
    pub fn is_empty(&self) -> bool {
        self.slot.lock().is_none()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(
        &self,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = AlarmResult<Option<Vec<u8>>>> + Send + '_>>
    {
        Box::pin(async move { Ok(self.slot.lock().clone()) })
    }

    fn write(
        &self,
        bytes: Vec<u8>,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = AlarmResult<()>> + Send + '_>> {
        Box::pin(async move {
            *self.slot.lock() = Some(bytes);
            Ok(())
        })
    }

    fn delete(
        &self,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = AlarmResult<()>> + Send + '_>> {
        Box::pin(async move {
            *self.slot.lock() = None;
            Ok(())
        })
    }
}
