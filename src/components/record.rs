//! The persisted alarm entity and its wire encoding
//!
//! An `AlarmRecord` is an immutable value: a changed alarm is a new record.
//! The durable slot stores at most one of these at a time, encoded as a JSON
//! object `{"triggerTime": <RFC 3339>, "notificationId": <string>}`.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::components::{AlarmResult, NotificationId};

/// One scheduled alarm: an absolute trigger time plus a stable identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmRecord {
    #[serde(rename = "triggerTime")]
    trigger_time: DateTime<Local>,
    #[serde(rename = "notificationId")]
    id: NotificationId,
}

impl AlarmRecord {
    /// Create a record with a freshly generated identifier
    pub fn new(trigger_time: DateTime<Local>) -> Self {
        Self {
            trigger_time,
            id: NotificationId::generate(),
        }
    }

    /// Rebuild a record whose identifier is already known
    pub fn with_id(trigger_time: DateTime<Local>, id: NotificationId) -> Self {
        Self { trigger_time, id }
    }

    /// The moment the alarm should fire
    pub fn trigger_time(&self) -> DateTime<Local> {
        self.trigger_time
    }

    pub fn id(&self) -> &NotificationId {
        &self.id
    }

    /// Encode for the durable slot
    pub fn to_bytes(&self) -> AlarmResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode the durable slot's contents
    pub fn from_bytes(bytes: &[u8]) -> AlarmResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
