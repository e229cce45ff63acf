//! Error handling for cukai
//!
//! Defines the typed caller-input errors raised at the engine boundary and
//! the anyhow-backed Result alias used by the binary for context chaining.

use thiserror::Error;

/// Errors raised while turning user input into an engine call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaxError {
    #[error("invalid entity type: {0} (expected one of: sdn_bhd, enterprise, berhad)")]
    InvalidEntityType(String),

    #[error("invalid profit value: {0}")]
    InvalidProfitValue(String),

    #[error("config error: {0}")]
    Config(String),
}

/// Result type alias for CLI operations
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_formatting_is_readable() {
        let err = TaxError::InvalidProfitValue("abc".to_string());
        assert_eq!(err.to_string(), "invalid profit value: abc");
    }

    #[test]
    fn test_invalid_entity_lists_choices() {
        let err = TaxError::InvalidEntityType("llp".to_string());
        let msg = err.to_string();
        assert!(msg.starts_with("invalid entity type: llp"));
        assert!(msg.contains("sdn_bhd"));
        assert!(msg.contains("berhad"));
    }

    #[test]
    fn test_anyhow_context_chains_errors() {
        use anyhow::Context;
        let result: Result<()> = Err(TaxError::Config("bad toml".to_string()))
            .context("failed to load configuration");
        match result {
            Err(e) => {
                assert!(e.to_string().contains("failed to load configuration"));
                let debug_msg = format!("{:?}", e);
                assert!(debug_msg.contains("bad toml"));
            }
            Ok(_) => panic!("expected error"),
        }
    }
}
