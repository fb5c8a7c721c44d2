use thiserror::Error;

/// Failure of an asynchronous clipboard write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard API is not available")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid render config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_error_messages() {
        assert_eq!(
            ClipboardError::Unavailable.to_string(),
            "clipboard API is not available"
        );
        assert_eq!(
            ClipboardError::Rejected("NotAllowedError".to_string()).to_string(),
            "clipboard write rejected: NotAllowedError"
        );
    }
}
