//! Error types and exit codes for graphkit
//!
//! Exit codes:
//! - 0: Success
//! - 1: Algorithm failure (negative cycle, negative edge, cyclic graph)
//! - 2: Usage error (bad flags/args, bad configuration)
//! - 3: Data error (unparseable input, unknown node reference)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

use crate::node::NodeId;

/// Exit codes for the graphkit binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Algorithm failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed input, unknown node (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Coarse classification of a [`GraphError`].
///
/// Callers that only care whether the graph was cyclic, or whether they
/// passed bad input, can match on this instead of individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A node ID the store does not know about
    InvalidReference,
    /// The algorithm was applied to a graph of the wrong shape
    PreconditionViolation,
    /// The graph's cycles make the requested result meaningless
    Structural,
    /// Input text, files or configuration could not be used
    Input,
}

/// Errors that can occur during graph construction or algorithm runs
#[derive(Error, Debug)]
pub enum GraphError {
    // Invalid references
    #[error("invalid node ID - {id}")]
    InvalidReference { id: NodeId },

    #[error("node ID {id} out of range (capacity {capacity})")]
    OutOfRange { id: NodeId, capacity: usize },

    #[error("graph of {size} nodes is too large to store")]
    TooLarge { size: usize },

    // Precondition violations
    #[error("negative edge weight - {weight} on ({from}, {to})")]
    NegativeEdge {
        from: NodeId,
        to: NodeId,
        weight: String,
    },

    #[error("graph must be directed")]
    NotDirected,

    #[error("path weight overflows at ({from}, {to})")]
    WeightOverflow { from: NodeId, to: NodeId },

    // Structural failures
    #[error("graph contains negative-weight cycle")]
    NegativeCycle,

    #[error("graph contains cycle")]
    Cycle,

    // Input failures
    #[error("parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("couldn't open file {path:?}: {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("{0}")]
    UsageError(String),
}

impl GraphError {
    /// Create an error for a weight that failed a sign check
    pub fn negative_edge(from: NodeId, to: NodeId, weight: impl std::fmt::Display) -> Self {
        GraphError::NegativeEdge {
            from,
            to,
            weight: weight.to_string(),
        }
    }

    /// Create a parse error at a given 1-based input line
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        GraphError::Parse {
            line,
            reason: reason.into(),
        }
    }

    /// Create an error for an unreadable or malformed configuration file
    pub fn config(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        GraphError::Config {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::InvalidReference { .. } | GraphError::OutOfRange { .. } => {
                ErrorKind::InvalidReference
            }
            GraphError::NegativeEdge { .. }
            | GraphError::NotDirected
            | GraphError::WeightOverflow { .. } => ErrorKind::PreconditionViolation,
            GraphError::NegativeCycle | GraphError::Cycle => ErrorKind::Structural,
            GraphError::Parse { .. }
            | GraphError::TooLarge { .. }
            | GraphError::OpenFile { .. }
            | GraphError::Io(_)
            | GraphError::Config { .. }
            | GraphError::UsageError(_) => ErrorKind::Input,
        }
    }

    /// Whether this error reports a cycle of any sort
    pub fn is_cyclic(&self) -> bool {
        self.kind() == ErrorKind::Structural
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UsageError(_) | GraphError::Config { .. } => ExitCode::Usage,

            GraphError::InvalidReference { .. }
            | GraphError::OutOfRange { .. }
            | GraphError::TooLarge { .. }
            | GraphError::Parse { .. }
            | GraphError::OpenFile { .. }
            | GraphError::Io(_) => ExitCode::Data,

            GraphError::NegativeEdge { .. }
            | GraphError::NotDirected
            | GraphError::WeightOverflow { .. }
            | GraphError::NegativeCycle
            | GraphError::Cycle => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GraphError::InvalidReference { .. } => "invalid_reference",
            GraphError::OutOfRange { .. } => "out_of_range",
            GraphError::TooLarge { .. } => "too_large",
            GraphError::NegativeEdge { .. } => "negative_edge",
            GraphError::NotDirected => "not_directed",
            GraphError::WeightOverflow { .. } => "weight_overflow",
            GraphError::NegativeCycle => "negative_cycle",
            GraphError::Cycle => "cycle",
            GraphError::Parse { .. } => "parse_error",
            GraphError::OpenFile { .. } => "open_file",
            GraphError::Io(_) => "io_error",
            GraphError::Config { .. } => "config_error",
            GraphError::UsageError(_) => "usage_error",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphkit operations
pub type Result<T> = std::result::Result<T, GraphError>;
