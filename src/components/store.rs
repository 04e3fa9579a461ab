//! Durable single-slot persistence for the scheduled alarm
//!
//! The store is the only writer of the durable slot. Reads degrade
//! gracefully: an unreadable or corrupt slot loads as "no alarm pending"
//! rather than crashing the caller. Writes and clears that succeed announce
//! themselves through the [`ChangeNotifier`].

use std::sync::Arc;

use crate::components::notifier::ChangeNotifier;
use crate::components::record::AlarmRecord;
use crate::components::AlarmResult;

/// Byte-level persistence of a single named resource
///
/// Implementations must provide atomic-overwrite semantics: a concurrent
/// reader never observes a half-written slot.
pub trait StorageBackend: Send + Sync {
    /// Read the slot's current contents, `None` when absent
    fn read(
        &self,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = AlarmResult<Option<Vec<u8>>>> + Send + '_>>;

    /// Overwrite the slot atomically
    fn write(
        &self,
        bytes: Vec<u8>,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = AlarmResult<()>> + Send + '_>>;

    /// Remove the slot; deleting an absent slot is not an error
    fn delete(
        &self,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = AlarmResult<()>> + Send + '_>>;
}

/// Single-slot store for at most one [`AlarmRecord`]
pub struct AlarmStore {
    backend: Arc<dyn StorageBackend>,
    notifier: ChangeNotifier,
}

impl AlarmStore {
    pub fn new(backend: Arc<dyn StorageBackend>, notifier: ChangeNotifier) -> Self {
        Self { backend, notifier }
    }

    /// The notifier announcing this store's slot changes
    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    /// The current record, or `None` when the slot is absent, unreadable,
    /// or undecodable
    ///
    /// Corruption is not an error here: a malformed slot means "no alarm
    /// pending", logged for diagnostics and otherwise absorbed.
    pub async fn load(&self) -> Option<AlarmRecord> {
        let bytes = match self.backend.read().await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "alarm slot unreadable, treating as empty");
                return None;
            },
        };

        match AlarmRecord::from_bytes(&bytes) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(error = %e, "alarm slot corrupt, treating as empty");
                None
            },
        }
    }

    /// Overwrite the slot with `record` and publish the change
    ///
    /// Publishes only after the backend write succeeds; a failed write
    /// surfaces as a storage error and observers hear nothing.
    pub async fn save(&self, record: &AlarmRecord) -> AlarmResult<()> {
        let bytes = record.to_bytes()?;
        self.backend.write(bytes).await?;
        self.notifier.publish();
        Ok(())
    }

    /// Empty the slot and publish the change; idempotent
    pub async fn clear(&self) -> AlarmResult<()> {
        self.backend.delete().await?;
        self.notifier.publish();
        Ok(())
    }
}

impl std::fmt::Debug for AlarmStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlarmStore")
            .field("subscribers", &self.notifier.subscriber_count())
            .finish()
    }
}
