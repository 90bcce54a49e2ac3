//! Toast notifications.
//!
//! The services report outcomes; routes turn them into toasts rendered as
//! HTML fragments and swapped out-of-band into the page's `#toasts`
//! container. The notification is fire-and-forget: nothing reads it back.

use serde::{Deserialize, Serialize};

/// Severity of a toast message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    Success,
    Info,
    Error,
}

impl std::fmt::Display for ToastLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Error => "error",
        })
    }
}

/// A user-visible notification message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Info,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display_matches_css_suffix() {
        assert_eq!(ToastLevel::Success.to_string(), "success");
        assert_eq!(ToastLevel::Info.to_string(), "info");
        assert_eq!(ToastLevel::Error.to_string(), "error");
    }

    #[test]
    fn test_constructors_set_level() {
        assert_eq!(Toast::success("ok").level, ToastLevel::Success);
        assert_eq!(Toast::info("fyi").level, ToastLevel::Info);
        assert_eq!(Toast::error("no").level, ToastLevel::Error);
    }
}
