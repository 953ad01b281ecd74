//! User-facing operation notices
//!
//! Command handlers attach a notice to their response so the presentation
//! layer can show a transient notification without inventing its own wording.

use serde::{Deserialize, Serialize};

/// Category of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    /// A mutation succeeded
    Success,
    /// Routine confirmation of a completed operation
    Info,
    /// The operation ran but something deserves attention
    Warning,
    /// A failure inside an otherwise completed operation; failed requests
    /// themselves carry the error response body instead
    Error,
}

/// Transient notification for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    /// Category the presentation layer styles the notification by
    pub level: NoticeLevel,
    /// Human-readable message
    pub message: String,
}

impl Notice {
    /// Build a success notice
    pub fn success(message: String) -> Self {
        Self {
            level: NoticeLevel::Success,
            message,
        }
    }

    /// Build an info notice
    pub fn info(message: String) -> Self {
        Self {
            level: NoticeLevel::Info,
            message,
        }
    }

    /// Build a warning notice
    pub fn warning(message: String) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message,
        }
    }

    /// Build an error notice
    pub fn error(message: String) -> Self {
        Self {
            level: NoticeLevel::Error,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_serializes_with_lowercase_level() {
        let notice = Notice::success("Agent 'Researcher' created".to_string());
        let value = serde_json::to_value(&notice).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "level": "success",
                "message": "Agent 'Researcher' created",
            })
        );
    }

    #[test]
    fn test_constructors_set_levels() {
        assert_eq!(
            Notice::info("x".to_string()).level,
            NoticeLevel::Info
        );
        assert_eq!(
            Notice::warning("x".to_string()).level,
            NoticeLevel::Warning
        );
        assert_eq!(
            Notice::error("x".to_string()).level,
            NoticeLevel::Error
        );
    }
}
