//! Typed failure raised by asynchronous host operations.

use thiserror::Error;

/// Failure reported by an asynchronous host query or command.
///
/// Queries answer "what is the current state" and consumers are expected to recover from
/// their failures with a documented fallback. Commands change host state on behalf of the
/// caller and their failures propagate unmodified.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    /// A host state query could not be answered.
    #[error("host query failed: {reason}")]
    Query {
        /// Host-reported failure cause.
        reason: String,
    },
    /// An explicit host command was rejected.
    #[error("host command failed: {reason}")]
    Command {
        /// Host-reported failure cause.
        reason: String,
    },
}

impl HostError {
    /// Builds a query failure from a host-reported cause.
    pub fn query(reason: impl Into<String>) -> Self {
        Self::Query {
            reason: reason.into(),
        }
    }

    /// Builds a command failure from a host-reported cause.
    pub fn command(reason: impl Into<String>) -> Self {
        Self::Command {
            reason: reason.into(),
        }
    }
}
