//! Build plan
//!
//! Translates validated inputs into the ordered tool invocations that produce
//! the executable:
//!
//! | Spec input | Steps generated |
//! |------------|-----------------|
//! | `app.spec` | InstallPyInstaller → [InstallRequirements] → Build |
//! | `app.py`   | InstallPyInstaller → [InstallRequirements] → MakeSpec → Build |
//!
//! Generating the plan is pure; [`BuildPlan::execute`] runs it.

use anyhow::Result;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

use crate::spec_path::{BUILD_DIR, SpecTarget};
use crate::tool_runner::run_tool;
use crate::tool_traits::ToolArgs;
use crate::tools::pip::PipInstallArgs;
use crate::tools::pyinstaller::{BuildArgs, MakeSpecArgs};
use crate::validate::ValidatedInputs;

/// A single tool invocation in the plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildStep {
    InstallPyInstaller(PipInstallArgs),
    InstallRequirements(PipInstallArgs),
    /// Generate a spec file from an entry script
    MakeSpec(MakeSpecArgs),
    Build(BuildArgs),
}

impl BuildStep {
    fn args(&self) -> &dyn ToolArgs {
        match self {
            Self::InstallPyInstaller(args) | Self::InstallRequirements(args) => args,
            Self::MakeSpec(args) => args,
            Self::Build(args) => args,
        }
    }
}

impl ToolArgs for BuildStep {
    fn program(&self) -> &'static str {
        self.args().program()
    }

    fn to_cli_args(&self) -> Vec<String> {
        self.args().to_cli_args()
    }

    fn get_env_vars(&self) -> Vec<(String, String)> {
        self.args().get_env_vars()
    }

    fn tool_name(&self) -> &'static str {
        self.args().tool_name()
    }
}

impl fmt::Display for BuildStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InstallPyInstaller(_) => "InstallPyInstaller",
            Self::InstallRequirements(_) => "InstallRequirements",
            Self::MakeSpec(_) => "MakeSpec",
            Self::Build(_) => "Build",
        };
        write!(f, "{}: {}", label, self.command_line())
    }
}

/// Ordered tool invocations for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    pub steps: Vec<BuildStep>,
    /// Directory the executable ends up in
    pub dist_path: PathBuf,
}

impl BuildPlan {
    pub fn from_inputs(inputs: &ValidatedInputs) -> Self {
        let mut steps = vec![BuildStep::InstallPyInstaller(PipInstallArgs::pyinstaller(
            inputs.pyinstaller_ver.as_deref(),
        ))];

        if let Some(ref requirements) = inputs.requirements {
            steps.push(BuildStep::InstallRequirements(PipInstallArgs::requirements(
                requirements.clone(),
            )));
        }

        if let SpecTarget::Script { ref script, .. } = inputs.target {
            steps.push(BuildStep::MakeSpec(MakeSpecArgs {
                script: script.clone(),
                spec_dir: PathBuf::from(BUILD_DIR),
                options: inputs.options.clone(),
            }));
        }

        steps.push(BuildStep::Build(BuildArgs {
            spec_path: inputs.target.spec_path().to_path_buf(),
            dist_path: inputs.exe_path.clone(),
            clean: true,
            spec_options: inputs.spec_options.clone(),
        }));

        Self {
            steps,
            dist_path: inputs.exe_path.clone(),
        }
    }

    /// Run every step in order, stopping at the first failure.
    ///
    /// A failing tool surfaces as [`crate::ActionError::Tool`] carrying the
    /// tool's own exit code.
    pub fn execute(&self, dry_run: bool) -> Result<()> {
        let total = self.steps.len();
        for (i, step) in self.steps.iter().enumerate() {
            info!("[{}/{}] {}", i + 1, total, step);
            run_tool(step, dry_run)?.ensure_success()?;
        }
        Ok(())
    }
}

/// Warning text when `options` is set but nothing will consume it.
///
/// Options only reach `pyi-makespec`, which is skipped for a `.spec` input.
pub fn ignored_options_warning(inputs: &ValidatedInputs) -> Option<String> {
    if inputs.target.is_script() || inputs.options.is_empty() {
        return None;
    }
    Some(format!(
        "Input 'options' ({}) is ignored because 'spec' is already a .spec file; \
         use 'spec_options' to pass values to the spec file",
        inputs.options
    ))
}

impl fmt::Display for BuildPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, step)?;
        }
        Ok(())
    }
}
