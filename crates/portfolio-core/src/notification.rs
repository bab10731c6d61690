//! Toast notifications.
//!
//! At most one toast is visible. Showing a new one replaces the current one;
//! an expiry timer only dismisses the toast it was scheduled for.

use std::fmt;

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn class(&self) -> &'static str {
        match self {
            Severity::Success => "notification notification-success",
            Severity::Error => "notification notification-error",
            Severity::Info => "notification notification-info",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            Severity::Success => "linear-gradient(135deg, #4CAF50, #45a049)",
            Severity::Error => "linear-gradient(135deg, #f44336, #da190b)",
            Severity::Info => "linear-gradient(135deg, #ff69b4, #ff1493)",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        };
        f.write_str(name)
    }
}

/// Identity of one shown toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
}

/// Holds the single visible toast.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    current: Option<Toast>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is showing with a new toast.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        let toast = Toast {
            id,
            message: message.into(),
            severity,
        };
        tracing::debug!(severity = %severity, message = %toast.message, "Showing toast");
        if let Some(previous) = self.current.replace(toast) {
            tracing::trace!(replaced = ?previous.id, "Toast replaced");
        }
        id
    }

    /// Remove the toast if it is still the one showing.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        if self.current.as_ref().is_some_and(|toast| toast.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}
