//! End-to-end schedule/unschedule orchestration
//!
//! The scheduler is the only component that talks to the notification
//! service. It owns a single-slot model: scheduling while an alarm is
//! already pending replaces it, canceling the old registration before the
//! new one goes live so a superseded trigger can never fire.

use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::components::authorization::AuthorizationGate;
use crate::components::content::AlarmContent;
use crate::components::notifier::ChangeNotifier;
use crate::components::record::AlarmRecord;
use crate::components::service::{NotificationRequest, NotificationService};
use crate::components::store::{AlarmStore, StorageBackend};
use crate::components::trigger::{CalendarFields, CalendarTrigger, truncate_to_minute};

/// Orchestrates gate -> register/cancel -> store for the single alarm slot
///
/// Failures below the `schedule`/`unschedule` boundary are absorbed: callers
/// observe boolean success or a completed no-op, never an error. Both
/// operations complete on the caller's task, so completion lands on a
/// single, consistent execution context.
pub struct AlarmScheduler {
    service: Arc<dyn NotificationService>,
    gate: AuthorizationGate,
    store: AlarmStore,
    content: AlarmContent,
    // Serializes schedule/unschedule so cancel-old-before-register-new
    // sequencing holds even when callers race.
    op_guard: tokio::sync::Mutex<()>,
}

impl AlarmScheduler {
    pub fn new(
        service: Arc<dyn NotificationService>,
        storage: Arc<dyn StorageBackend>,
        notifier: ChangeNotifier,
        content: AlarmContent,
    ) -> Self {
        Self {
            gate: AuthorizationGate::new(Arc::clone(&service)),
            store: AlarmStore::new(storage, notifier),
            service,
            content,
            op_guard: tokio::sync::Mutex::new(()),
        }
    }

    /// Builder-style construction; see [`crate::AlarmSchedulerBuilder`]
    pub fn builder() -> crate::AlarmSchedulerBuilder {
        crate::AlarmSchedulerBuilder::new()
    }

    /// Schedule the alarm for `trigger_time`, replacing any pending alarm
    ///
    /// `trigger_time` is truncated to the minute before anything else
    /// happens, so the stored record and the registered trigger always
    /// agree. Returns `false` when authorization is refused or registration
    /// fails; in both cases the store is left untouched.
    pub async fn schedule(&self, trigger_time: DateTime<Local>) -> bool {
        let _guard = self.op_guard.lock().await;

        let trigger_time = truncate_to_minute(trigger_time);
        let pending = self.store.load().await;
        let record = match &pending {
            Some(previous) => AlarmRecord::with_id(trigger_time, previous.id().clone()),
            None => AlarmRecord::new(trigger_time),
        };

        if !self.gate.ensure_authorized().await {
            tracing::debug!("schedule refused, notifications not authorized");
            return false;
        }

        // Cancel the superseded registration before the replacement goes
        // live; otherwise a stale trigger can fire after being logically
        // replaced.
        if let Some(previous) = &pending {
            self.service
                .remove_pending(vec![previous.id().clone()])
                .await;
        }

        let trigger = CalendarTrigger::once(CalendarFields::from_datetime(&trigger_time));
        let request = NotificationRequest {
            id: record.id().clone(),
            content: self.content.clone(),
            trigger,
        };

        if let Err(e) = self.service.add_request(request).await {
            tracing::error!(error = %e, "alarm registration rejected");
            return false;
        }

        // The trigger is live at this point; a failed slot write is logged
        // and tolerated rather than unwinding the registration.
        if let Err(e) = self.store.save(&record).await {
            tracing::warn!(error = %e, id = %record.id(), "failed to persist scheduled alarm");
        }

        tracing::info!(
            id = %record.id(),
            trigger_time = %record.trigger_time(),
            "alarm scheduled"
        );
        true
    }

    /// Cancel the pending alarm, if any; idempotent
    ///
    /// Best-effort: the external cancellation is fire-and-forget and the
    /// local slot always clears, so the caller's view of "no alarm" holds
    /// even when the service is unreachable.
    pub async fn unschedule(&self) {
        let _guard = self.op_guard.lock().await;

        if let Some(record) = self.store.load().await {
            self.service
                .remove_pending(vec![record.id().clone()])
                .await;
        }

        if let Err(e) = self.store.clear().await {
            tracing::warn!(error = %e, "failed to clear alarm slot");
        }

        tracing::info!("alarm unscheduled");
    }

    /// The store owning the durable slot
    pub fn store(&self) -> &AlarmStore {
        &self.store
    }

    /// Shorthand for loading the currently pending record
    pub async fn pending(&self) -> Option<AlarmRecord> {
        self.store.load().await
    }
}
