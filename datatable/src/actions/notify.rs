//! Notification collaborator interface.

use serde::{Deserialize, Serialize};

/// How long a notification stays on screen unless overridden.
pub const DEFAULT_DURATION_MS: u64 = 3000;

/// Notification level (affects styling).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Info,
    Warning,
    Success,
    Error,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Info => "info",
            Category::Warning => "warning",
            Category::Success => "success",
            Category::Error => "error",
        };
        f.write_str(name)
    }
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Title to display (single line)
    pub title: String,
    pub category: Category,
    /// How long to show the notification
    pub duration_ms: u64,
}

impl Notification {
    pub fn new(title: impl Into<String>, category: Category) -> Self {
        Self {
            title: title.into(),
            category,
            duration_ms: DEFAULT_DURATION_MS,
        }
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(title, Category::Info)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(title, Category::Warning)
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title, Category::Success)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(title, Category::Error)
    }

    /// Set custom duration
    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

/// Anything that can show a notification to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
