//! Error handling module for the PyInstaller action
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Validation failures have their own type in [`crate::validate`]; everything
//! else the library can fail with is an [`ActionError`].

use thiserror::Error;

use crate::validate::ValidationError;

/// Main error type for the PyInstaller action
#[derive(Error, Debug)]
pub enum ActionError {
    /// Inputs file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Inputs file could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// One or more inputs failed validation
    #[error("Invalid inputs: {}", format_violations(.0))]
    Validation(Vec<ValidationError>),

    /// A downstream tool (pip, pyi-makespec, pyinstaller) exited non-zero.
    ///
    /// `code` is `None` when the tool was terminated by a signal.
    #[error("{tool} failed with exit code {}", .code.map_or_else(|| "signal".to_string(), |c| c.to_string()))]
    Tool { tool: String, code: Option<i32> },

    /// Workflow output could not be written
    #[error("Output error: {0}")]
    Output(String),
}

/// Result type alias for action operations
pub type Result<T> = std::result::Result<T, ActionError>;

fn format_violations(violations: &[ValidationError]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ActionError {
    /// Create an output error
    pub fn output(msg: impl Into<String>) -> Self {
        Self::Output(msg.into())
    }

    /// Create a downstream tool failure
    pub fn tool(tool: impl Into<String>, code: Option<i32>) -> Self {
        Self::Tool {
            tool: tool.into(),
            code,
        }
    }

    /// Process exit code to use when this error terminates the run.
    ///
    /// Tool failures pass the child's own code through untouched.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Tool { code: Some(code), .. } if *code != 0 => *code,
            _ => 1,
        }
    }
}
