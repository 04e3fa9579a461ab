//! In-process notification center
//!
//! A scriptable [`NotificationService`] standing in for the host platform's
//! notification center. Tests drive the authorization state machine and the
//! pending-request table directly; the prompt counter lets them assert the
//! at-most-one-prompt rule.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use chrono::{DateTime, Local};
use dashmap::DashMap;
use parking_lot::Mutex;

use crate::components::content::NotificationCategory;
use crate::components::service::{
    AuthorizationOptions, AuthorizationStatus, NotificationRequest, NotificationService,
};
use crate::components::{AlarmError, AlarmResult, NotificationId};

/// Scriptable in-process [`NotificationService`]
pub struct MemoryCenter {
    status: Mutex<AuthorizationStatus>,
    grant_on_prompt: AtomicBool,
    fail_registration: AtomicBool,
    prompt_count: AtomicUsize,
    pending: DashMap<NotificationId, NotificationRequest>,
    categories: Mutex<Vec<NotificationCategory>>,
}

impl MemoryCenter {
    pub fn new(status: AuthorizationStatus) -> Self {
        Self {
            status: Mutex::new(status),
            grant_on_prompt: AtomicBool::new(true),
            fail_registration: AtomicBool::new(false),
            prompt_count: AtomicUsize::new(0),
            pending: DashMap::new(),
            categories: Mutex::new(Vec::new()),
        }
    }

    /// A center that already holds authorization
    pub fn authorized() -> Self {
        Self::new(AuthorizationStatus::Authorized)
    }

    pub fn set_status(&self, status: AuthorizationStatus) {
        *self.status.lock() = status;
    }

    pub fn status(&self) -> AuthorizationStatus {
        *self.status.lock()
    }

    /// Script the user's answer to the one-time permission prompt
    pub fn set_grant_on_prompt(&self, granted: bool) {
        self.grant_on_prompt.store(granted, Ordering::Relaxed);
    }

    /// Force subsequent registrations to be rejected
    pub fn set_fail_registration(&self, fail: bool) {
        self.fail_registration.store(fail, Ordering::Relaxed);
    }

    /// How many times the permission prompt was shown
    pub fn prompt_count(&self) -> usize {
        self.prompt_count.load(Ordering::Relaxed)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn pending_ids(&self) -> Vec<NotificationId> {
        self.pending.iter().map(|e| e.key().clone()).collect()
    }

    pub fn pending_request(&self, id: &NotificationId) -> Option<NotificationRequest> {
        self.pending.get(id).map(|e| e.value().clone())
    }

    pub fn categories(&self) -> Vec<NotificationCategory> {
        self.categories.lock().clone()
    }

    /// The earliest instant at which any pending registration would fire
    ///
    /// `None` when nothing is pending or no pending trigger's fields map to
    /// a representable local time.
    pub fn next_fire_date(&self) -> Option<DateTime<Local>> {
        self.pending
            .iter()
            .filter_map(|entry| entry.value().trigger.fire_date())
            .min()
    }
}

impl NotificationService for MemoryCenter {
    fn authorization_status(
        &self,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = AuthorizationStatus> + Send + '_>> {
        Box::pin(async move { self.status() })
    }

    fn request_authorization(
        &self,
        _options: AuthorizationOptions,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = AlarmResult<bool>> + Send + '_>> {
        Box::pin(async move {
            self.prompt_count.fetch_add(1, Ordering::Relaxed);
            let granted = self.grant_on_prompt.load(Ordering::Relaxed);
            // The host records the decision as the new determined status.
            *self.status.lock() = if granted {
                AuthorizationStatus::Authorized
            } else {
                AuthorizationStatus::Denied
            };
            Ok(granted)
        })
    }

    fn add_request(
        &self,
        request: NotificationRequest,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = AlarmResult<()>> + Send + '_>> {
        Box::pin(async move {
            if self.fail_registration.load(Ordering::Relaxed) {
                return Err(AlarmError::Registration(
                    "center configured to reject registrations".to_string(),
                ));
            }
            // Insert overwrites any existing registration under the same id.
            self.pending.insert(request.id.clone(), request);
            Ok(())
        })
    }

    fn remove_pending(
        &self,
        ids: Vec<NotificationId>,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send + '_>> {
        Box::pin(async move {
            for id in ids {
                self.pending.remove(&id);
            }
        })
    }

    fn set_categories(&self, categories: Vec<NotificationCategory>) {
        *self.categories.lock() = categories;
    }
}
