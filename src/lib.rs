//! PyInstaller Action Library
//!
//! Core of the PyInstaller GitHub Action: input validation, option
//! normalization, spec path derivation and the build driver.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod github;
pub mod options;
pub mod plan;
pub mod shell;
pub mod spec_path;
pub mod tool_runner;
pub mod tool_traits;
pub mod tools;
pub mod types;
pub mod upload;
pub mod validate;

// Re-export main types for convenience
pub use config::ActionInputs;
pub use error::ActionError;
pub use github::{Annotation, Workflow};
pub use options::NormalizedOptions;
pub use plan::{BuildPlan, BuildStep};
pub use spec_path::{SpecTarget, derive_spec_path};
pub use tool_runner::{ToolOutput, run_tool};
pub use tool_traits::ToolArgs;
pub use types::{PythonArch, UploadOutcome};
pub use upload::UploadStatus;
pub use validate::{ValidatedInputs, ValidationError, validate};
