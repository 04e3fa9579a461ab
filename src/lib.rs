//! Single-slot persistent alarm scheduler
//!
//! This crate owns at most one pending alarm at a time: scheduling a new
//! alarm replaces the old one, the pending alarm survives process restarts
//! through a durable storage slot, scheduling is gated on the host's
//! notification authorization, and observers are told whenever the stored
//! alarm changes.
//!
//! The host platform's notification center and the storage medium are both
//! injected collaborators, so the scheduler runs unchanged against the real
//! platform or against the in-process fakes in [`backends`].
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use alarm_slot::{AlarmScheduler, FileStorage, MemoryCenter};
//! use chrono::Local;
//!
//! # async fn demo() -> alarm_slot::AlarmResult<()> {
//! let scheduler = AlarmScheduler::builder()
//!     .service(Arc::new(MemoryCenter::authorized()))
//!     .storage(Arc::new(FileStorage::in_dir("/var/lib/myapp")))
//!     .build()?;
//!
//! let set = scheduler.schedule(Local::now() + chrono::Duration::minutes(10)).await;
//! assert!(set);
//! scheduler.unschedule().await;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

pub mod backends;
pub mod components;

// Re-export all components for convenience
pub use backends::*;
pub use components::*;

/// Builder for assembling an [`AlarmScheduler`] with its collaborators
///
/// The builder is the composition root: it wires the notification service,
/// the storage backend, the change notifier, and the alert content together,
/// and registers the alarm category with the service exactly once.
pub struct AlarmSchedulerBuilder {
    service: Option<Arc<dyn NotificationService>>,
    storage: Option<Arc<dyn StorageBackend>>,
    content: Option<AlarmContent>,
    notifier: Option<ChangeNotifier>,
}

impl AlarmSchedulerBuilder {
    pub fn new() -> Self {
        Self {
            service: None,
            storage: None,
            content: None,
            notifier: None,
        }
    }

    /// The host notification service; required
    pub fn service(mut self, service: Arc<dyn NotificationService>) -> Self {
        self.service = Some(service);
        self
    }

    /// The durable slot backend; required
    pub fn storage(mut self, storage: Arc<dyn StorageBackend>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Alert payload for fired alarms; defaults to [`AlarmContent::default`]
    pub fn content(mut self, content: AlarmContent) -> Self {
        self.content = Some(content);
        self
    }

    /// Share an existing notifier with other observers; defaults to a fresh
    /// one reachable through [`AlarmStore::notifier`]
    pub fn notifier(mut self, notifier: ChangeNotifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Assemble the scheduler and register the alarm category
    pub fn build(self) -> AlarmResult<AlarmScheduler> {
        let service = self.service.ok_or_else(|| {
            AlarmError::Configuration("a notification service is required".to_string())
        })?;
        let storage = self
            .storage
            .ok_or_else(|| AlarmError::Configuration("a storage backend is required".to_string()))?;

        service.set_categories(vec![alarm_category()]);

        Ok(AlarmScheduler::new(
            service,
            storage,
            self.notifier.unwrap_or_default(),
            self.content.unwrap_or_default(),
        ))
    }
}

impl Default for AlarmSchedulerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
