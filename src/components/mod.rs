// Core components of the single-slot alarm scheduler
// Each module owns one concern; the scheduler orchestrates them

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod authorization;
pub mod content;
pub mod notifier;
pub mod record;
pub mod scheduler;
pub mod service;
pub mod store;
pub mod trigger;

pub use authorization::AuthorizationGate;
pub use content::{
    ALARM_CATEGORY_ID, ActionOptions, AlarmContent, AlertSound, CategoryOptions,
    NotificationAction, NotificationCategory, SNOOZE_ACTION_ID, alarm_category,
};
pub use notifier::{ChangeNotifier, SubscriptionToken};
pub use record::AlarmRecord;
pub use scheduler::AlarmScheduler;
pub use service::{
    AuthorizationOptions, AuthorizationStatus, NotificationRequest, NotificationService,
};
pub use store::{AlarmStore, StorageBackend};
pub use trigger::{CalendarFields, CalendarTrigger, truncate_to_minute};

/// Stable identifier correlating a stored alarm with its registered trigger
///
/// Generated once at record creation and immutable afterwards, so a pending
/// registration can always be canceled by id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(String);

impl NotificationId {
    /// Generate a fresh randomized identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error types for comprehensive error handling
///
/// Nothing in this taxonomy crosses the public `schedule`/`unschedule`
/// boundary; those operations absorb failures into boolean outcomes or
/// logged no-ops.
#[derive(Debug, thiserror::Error)]
pub enum AlarmError {
    /// Scheduler builder misuse (missing collaborator)
    #[error("scheduler configuration error: {0}")]
    Configuration(String),
    /// Transport failure while requesting authorization from the host service
    #[error("authorization request failed: {0}")]
    Authorization(String),
    /// The host service rejected the trigger registration
    #[error("notification registration rejected: {0}")]
    Registration(String),
    /// Storage backend read/write/delete failure
    #[error("storage backend error: {0}")]
    Storage(String),
    /// The persisted slot could not be encoded or decoded
    #[error("record encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Type alias for alarm results with comprehensive error handling
pub type AlarmResult<T> = Result<T, AlarmError>;
