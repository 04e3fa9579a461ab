//! The notification service boundary
//!
//! The host platform's notification center is modeled as an injected trait
//! object so the scheduler never reaches for a process-wide singleton and
//! tests can substitute an in-process fake.

use crate::components::content::{AlarmContent, NotificationCategory};
use crate::components::trigger::CalendarTrigger;
use crate::components::{AlarmResult, NotificationId};

/// Authorization status as reported by the host service
///
/// Only `NotDetermined` permits prompting the user; every other determined
/// state is final until the user changes it in system settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationStatus {
    NotDetermined,
    Authorized,
    Denied,
    /// Quiet delivery without an explicit grant
    Provisional,
    /// Short-lived authorization for app-clip style hosts
    Ephemeral,
}

/// Capabilities requested from the one-time authorization prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorizationOptions {
    pub alert: bool,
    pub sound: bool,
    pub badge: bool,
}

impl Default for AuthorizationOptions {
    /// Alarms need an alert and a sound; badges are not requested
    fn default() -> Self {
        Self {
            alert: true,
            sound: true,
            badge: false,
        }
    }
}

/// A pending registration: trigger plus content under a stable id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub id: NotificationId,
    pub content: AlarmContent,
    pub trigger: CalendarTrigger,
}

/// Host notification service trait for abstraction
pub trait NotificationService: Send + Sync {
    /// Query the current authorization status; the host reports a status,
    /// it does not fail
    fn authorization_status(
        &self,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = AuthorizationStatus> + Send + '_>>;

    /// Issue the one-time permission prompt; only valid from `NotDetermined`
    fn request_authorization(
        &self,
        options: AuthorizationOptions,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = AlarmResult<bool>> + Send + '_>>;

    /// Register a pending request; an existing registration under the same
    /// id is overwritten
    fn add_request(
        &self,
        request: NotificationRequest,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = AlarmResult<()>> + Send + '_>>;

    /// Cancel pending registrations by id; absent ids are a no-op
    fn remove_pending(
        &self,
        ids: Vec<NotificationId>,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send + '_>>;

    /// Replace the service's registered categories
    fn set_categories(&self, categories: Vec<NotificationCategory>);
}
