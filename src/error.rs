//! Terminal failure classification for a sync run
//!
//! Every failure is terminal - there are no retries and no partial recovery.
//! The variants exist so the final console line and the log can say what kind
//! of failure ended the run; they all map to exit code 1.

use std::fmt;

#[derive(Debug)]
pub enum SyncError {
    /// Upstream fetch failed (theme download)
    Network(anyhow::Error),
    /// Theme JSON could not be parsed, even after trailing-comma repair
    Parse(anyhow::Error),
    /// Merged document contains style keys the schema does not recognize
    Validation(String),
    /// Run aborted by the user before any write happened
    Interrupted,
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::Network(err) => write!(f, "network error: {err:#}"),
            SyncError::Parse(err) => write!(f, "parse error: {err:#}"),
            SyncError::Validation(msg) => write!(f, "validation error: {msg}"),
            SyncError::Interrupted => write!(f, "interrupted"),
        }
    }
}

impl std::error::Error for SyncError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_classification() {
        let err = SyncError::Network(anyhow::anyhow!("connection refused"));
        assert!(err.to_string().starts_with("network error:"));

        let err = SyncError::Validation("unknown key".to_string());
        assert_eq!(err.to_string(), "validation error: unknown key");

        assert_eq!(SyncError::Interrupted.to_string(), "interrupted");
    }
}
