//! Dismissible, severity-tagged user notifications for persistence
//! failures.

use crate::api::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// One notification shown to the user; save failures never discard the
/// local scene, so the message always allows a retry.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
    pub dismissed: bool,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self::tagged(Severity::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::tagged(Severity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::tagged(Severity::Error, message)
    }

    fn tagged(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            dismissed: false,
        }
    }

    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    pub fn from_store_error(error: &StoreError) -> Self {
        match error {
            StoreError::NotFound { .. } => Self::warning(error.to_string()),
            _ => Self::error(error.to_string()),
        }
    }
}
