//! Boundary error types for portfolio input handling.
//!
//! The core pipeline itself has no fatal states (every division is
//! zero-guarded), so errors only arise at the I/O boundary: reading the
//! input file, parsing it, and the caller-side minimum-batch gate. Commands
//! bubble these up through `anyhow::Result`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("failed to read portfolio input {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid portfolio input {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The collection step should gather at least `minimum` initiatives
    /// before a portfolio run; the core never enforces this itself.
    #[error("portfolio run needs at least {minimum} initiatives, got {actual}")]
    BatchTooSmall { minimum: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_gate_message_names_both_counts() {
        let err = PortfolioError::BatchTooSmall {
            minimum: 5,
            actual: 2,
        };
        let message = err.to_string();
        assert!(message.contains('5'));
        assert!(message.contains('2'));
    }
}
