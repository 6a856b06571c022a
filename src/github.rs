//! GitHub Actions runner I/O.
//!
//! - Step outputs go to the file named by `$GITHUB_OUTPUT`
//! - Markdown appended to `$GITHUB_STEP_SUMMARY` shows on the run page
//! - `::error::` / `::warning::` lines on stdout become annotations

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ActionError, Result};

pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";
pub const GITHUB_STEP_SUMMARY_ENV: &str = "GITHUB_STEP_SUMMARY";

/// Annotation level of a workflow command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation {
    Error,
    Warning,
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Annotation::Error => "error",
            Annotation::Warning => "warning",
        };
        f.write_str(name)
    }
}

/// Escape a message so the runner keeps it on one annotation.
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// `::<level>::<message>` with the message escaped.
pub fn format_annotation(level: Annotation, message: &str) -> String {
    format!("::{}::{}", level, escape_data(message))
}

/// Render one `$GITHUB_OUTPUT` entry.
///
/// Single-line values use `name=value`. Multi-line values use the heredoc
/// form with a delimiter that does not occur in the value.
pub fn format_output(name: &str, value: &str) -> String {
    if !value.contains('\n') && !value.contains('\r') {
        return format!("{}={}\n", name, value);
    }
    let mut delimiter = format!("ghadelimiter_{}", std::process::id());
    while value.contains(&delimiter) {
        delimiter.push('_');
    }
    format!("{}<<{}\n{}\n{}\n", name, delimiter, value, delimiter)
}

/// Handle on the runner's output channels.
///
/// With no output file (running outside Actions) outputs are printed to
/// stdout in the same `name=value` form.
#[derive(Debug, Clone, Default)]
pub struct Workflow {
    output_file: Option<PathBuf>,
    summary_file: Option<PathBuf>,
}

impl Workflow {
    pub fn new(output_file: Option<PathBuf>, summary_file: Option<PathBuf>) -> Self {
        Self {
            output_file,
            summary_file,
        }
    }

    /// Pick up `$GITHUB_OUTPUT` and `$GITHUB_STEP_SUMMARY`.
    pub fn from_env() -> Self {
        let path_from = |key: &str| {
            std::env::var_os(key)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        };
        Self::new(
            path_from(GITHUB_OUTPUT_ENV),
            path_from(GITHUB_STEP_SUMMARY_ENV),
        )
    }

    /// Set a step output.
    pub fn set_output(&self, name: &str, value: &str) -> Result<()> {
        debug!("output {}={:?}", name, value);
        let entry = format_output(name, value);
        match self.output_file {
            Some(ref path) => append(path, &entry)
                .map_err(|e| ActionError::output(format!("{}: {}", path.display(), e))),
            None => {
                print!("{}", entry);
                Ok(())
            }
        }
    }

    /// Append markdown to the step summary; no-op outside Actions.
    pub fn append_summary(&self, markdown: &str) -> Result<()> {
        let Some(ref path) = self.summary_file else {
            return Ok(());
        };
        let mut text = markdown.to_string();
        if !text.ends_with('\n') {
            text.push('\n');
        }
        append(path, &text)
            .map_err(|e| ActionError::output(format!("{}: {}", path.display(), e)))
    }

    /// Emit an annotation on stdout.
    pub fn annotate(&self, level: Annotation, message: &str) {
        println!("{}", format_annotation(level, message));
    }

    pub fn error(&self, message: &str) {
        self.annotate(Annotation::Error, message);
    }

    pub fn warning(&self, message: &str) {
        self.annotate(Annotation::Warning, message);
    }
}

fn append(path: &Path, text: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(text.as_bytes())
}
