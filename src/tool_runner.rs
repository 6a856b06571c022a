//! Tool execution
//!
//! `run_tool` is the only place the action spawns child processes. Output is
//! inherited so pip and PyInstaller logs stream straight into the job log.

use anyhow::{Context, Result};
use std::process::{Command, Stdio};
use tracing::{info, warn};

use crate::error::ActionError;
use crate::tool_traits::ToolArgs;

/// Result of running (or skipping) a tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// Name the tool is reported under
    pub tool: &'static str,
    /// Exit code (None if terminated by signal or not run)
    pub exit_code: Option<i32>,
    /// Whether the tool exited successfully (exit code 0)
    pub success: bool,
}

impl ToolOutput {
    /// Turn a failed run into the error that carries its exit code.
    pub fn ensure_success(&self) -> std::result::Result<(), ActionError> {
        if self.success {
            Ok(())
        } else {
            Err(ActionError::tool(self.tool, self.exit_code))
        }
    }
}

/// Execute a tool with type-safe arguments.
///
/// In dry-run mode the command line is printed and nothing is spawned.
/// Spawn failures (tool not on `PATH`) are errors; a non-zero exit is
/// reported through [`ToolOutput`] so the caller decides what it means.
pub fn run_tool<T: ToolArgs>(args: &T, dry_run: bool) -> Result<ToolOutput> {
    let program = args.program();
    let cli_args = args.to_cli_args();
    let env_vars = args.get_env_vars();

    info!("run_tool: {}", args.command_line());

    if dry_run {
        println!("[DRY RUN] {}", args.command_line());
        return Ok(ToolOutput {
            tool: args.tool_name(),
            exit_code: Some(0),
            success: true,
        });
    }

    let mut cmd = Command::new(program);
    cmd.args(&cli_args)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    for (key, value) in &env_vars {
        cmd.env(key, value);
    }

    let status = cmd
        .status()
        .with_context(|| format!("Failed to spawn {}", program))?;

    let exit_code = status.code();
    if status.success() {
        info!("{} finished successfully", args.tool_name());
    } else {
        warn!(
            "{} failed with exit code {}",
            args.tool_name(),
            exit_code.unwrap_or(-1)
        );
    }

    Ok(ToolOutput {
        tool: args.tool_name(),
        exit_code,
        success: status.success(),
    })
}
