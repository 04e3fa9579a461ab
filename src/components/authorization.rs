//! Authorization gating for user-visible alerts

use std::sync::Arc;

use crate::components::service::{AuthorizationOptions, AuthorizationStatus, NotificationService};

/// Decides whether scheduling may proceed, prompting the user at most when
/// no prior decision exists
///
/// The gate holds no state of its own: every call re-queries the host
/// service, since the status can change between calls (the user may flip the
/// permission in system settings at any time).
pub struct AuthorizationGate {
    service: Arc<dyn NotificationService>,
}

impl AuthorizationGate {
    pub fn new(service: Arc<dyn NotificationService>) -> Self {
        Self { service }
    }

    /// Resolve whether alerts are currently allowed
    ///
    /// `Authorized` resolves `true` immediately. `NotDetermined` issues
    /// exactly one permission request and resolves with the user's decision;
    /// this is the only path that may suspend pending user interaction.
    /// Every other determined state resolves `false` without prompting:
    /// re-prompting a user who already decided is disallowed by the host
    /// platform.
    pub async fn ensure_authorized(&self) -> bool {
        match self.service.authorization_status().await {
            AuthorizationStatus::Authorized => true,
            AuthorizationStatus::NotDetermined => {
                match self
                    .service
                    .request_authorization(AuthorizationOptions::default())
                    .await
                {
                    Ok(granted) => {
                        tracing::debug!(granted, "authorization prompt resolved");
                        granted
                    },
                    Err(e) => {
                        tracing::warn!(error = %e, "authorization request failed");
                        false
                    },
                }
            },
            status => {
                tracing::debug!(status = ?status, "notifications not authorized");
                false
            },
        }
    }
}
