//! Artifact upload reporting.
//!
//! The upload itself is done by `actions/upload-artifact` with
//! `continue-on-error`; this turns its outcome into the `is_uploaded` output.
//! A failed upload never fails the job: the executable was built either way.

use std::fmt;

use tracing::{info, warn};

use crate::error::Result;
use crate::github::Workflow;
use crate::types::UploadOutcome;

/// What happened to the upload, as far as the caller is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadStatus {
    /// No artifact name was given
    NotRequested,
    Uploaded { name: String },
    /// Requested but did not complete (failed or cancelled)
    Failed { name: String, outcome: UploadOutcome },
}

impl UploadStatus {
    /// Classify an upload step outcome.
    ///
    /// `skipped` with a name set means the step condition did not hold
    /// (usually an earlier failure), which is treated as not uploaded.
    pub fn classify(upload_name: Option<&str>, outcome: UploadOutcome) -> Self {
        match upload_name {
            None => Self::NotRequested,
            Some(name) if outcome.is_uploaded() => Self::Uploaded {
                name: name.to_string(),
            },
            Some(name) => Self::Failed {
                name: name.to_string(),
                outcome,
            },
        }
    }

    pub fn is_uploaded(&self) -> bool {
        matches!(self, Self::Uploaded { .. })
    }
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRequested => write!(f, "Artifact upload not requested"),
            Self::Uploaded { name } => write!(f, "Uploaded artifact '{}'", name),
            Self::Failed { name, outcome } => {
                write!(f, "Artifact '{}' was not uploaded (upload step {})", name, outcome)
            }
        }
    }
}

/// Publish `is_uploaded` and, on failure, an advisory warning.
pub fn report(workflow: &Workflow, status: &UploadStatus) -> Result<()> {
    workflow.set_output("is_uploaded", &status.is_uploaded().to_string())?;

    match status {
        UploadStatus::Failed { .. } => {
            warn!("{}", status);
            workflow.warning(&status.to_string());
            workflow.append_summary(&format!("> [!WARNING]\n> {}", status))?;
        }
        _ => info!("{}", status),
    }
    Ok(())
}
