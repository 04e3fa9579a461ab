//! Alert payload and category definitions
//!
//! The content a fired alarm displays, plus the category grouping that
//! attaches the snooze action. Categories are registered with the
//! notification service once, when the scheduler is built; the effect of the
//! snooze action itself belongs to the host application.

use serde::{Deserialize, Serialize};

/// Category identifier every alarm notification is filed under
pub const ALARM_CATEGORY_ID: &str = "AlarmNotification";

/// Action identifier for the snooze button attached to the alarm category
pub const SNOOZE_ACTION_ID: &str = "snooze";

/// Sound played when the alert fires
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertSound {
    /// The platform's default alert sound
    #[default]
    Default,
    /// A named sound resource bundled with the host application
    Named(String),
    /// No sound
    Silent,
}

/// The user-visible payload registered alongside an alarm trigger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmContent {
    pub title: String,
    pub body: String,
    pub sound: AlertSound,
    pub category_id: String,
}

impl Default for AlarmContent {
    fn default() -> Self {
        Self {
            title: "Alarm".to_string(),
            body: "Beep Beep".to_string(),
            sound: AlertSound::Default,
            category_id: ALARM_CATEGORY_ID.to_string(),
        }
    }
}

impl AlarmContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_sound(mut self, sound: AlertSound) -> Self {
        self.sound = sound;
        self
    }

    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = category_id.into();
        self
    }
}

/// A button the platform renders on notifications of a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationAction {
    pub identifier: String,
    pub title: String,
    pub options: ActionOptions,
}

impl NotificationAction {
    pub fn new(identifier: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            title: title.into(),
            options: ActionOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ActionOptions) -> Self {
        self.options = options;
        self
    }
}

/// Action behavior options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOptions {
    pub destructive: bool,
    pub foreground: bool,
}

/// Category behavior options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOptions {
    /// Report explicit dismissal of the alert back to the application
    pub custom_dismiss_action: bool,
}

/// A named grouping of notifications with shared actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationCategory {
    pub identifier: String,
    pub actions: Vec<NotificationAction>,
    pub options: CategoryOptions,
}

impl NotificationCategory {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            actions: Vec::new(),
            options: CategoryOptions::default(),
        }
    }

    pub fn with_action(mut self, action: NotificationAction) -> Self {
        self.actions.push(action);
        self
    }

    pub fn with_options(mut self, options: CategoryOptions) -> Self {
        self.options = options;
        self
    }
}

/// The alarm category: a snooze action and a custom dismiss action
pub fn alarm_category() -> NotificationCategory {
    NotificationCategory::new(ALARM_CATEGORY_ID)
        .with_action(NotificationAction::new(SNOOZE_ACTION_ID, "Snooze"))
        .with_options(CategoryOptions {
            custom_dismiss_action: true,
        })
}
