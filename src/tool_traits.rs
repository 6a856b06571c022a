//! Type-safe tool argument contracts.
//!
//! Every external tool the action drives (pip, pyi-makespec, pyinstaller) is
//! described by a struct implementing [`ToolArgs`]. The struct is the
//! contract: flags are spelled in exactly one place and the runner never
//! assembles argument vectors from loose strings.

use crate::shell;

/// Trait for typed tool arguments.
///
/// # Invariants
///
/// - `to_cli_args()` returns argv entries exactly as the tool expects them;
///   they are passed to the child directly, never through a shell.
/// - `program()` is resolved through `PATH` at execution time.
pub trait ToolArgs {
    /// Executable to spawn (e.g. `"pyinstaller"`).
    fn program(&self) -> &'static str;

    /// Convert struct fields to CLI arguments.
    fn to_cli_args(&self) -> Vec<String>;

    /// Extra environment variables for the child.
    fn get_env_vars(&self) -> Vec<(String, String)> {
        vec![]
    }

    /// Name used in logs and failure messages.
    fn tool_name(&self) -> &'static str {
        self.program()
    }

    /// The invocation as a shell-safe command line, for logs and dry runs.
    fn command_line(&self) -> String {
        let args = self.to_cli_args();
        if args.is_empty() {
            self.program().to_string()
        } else {
            format!("{} {}", self.program(), shell::join(&args))
        }
    }
}
