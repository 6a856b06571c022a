//! Subcommand implementations.
//!
//! Each function is one step of `action.yml`; `run` chains the ones that
//! need no external actions in between, for local use.

use anyhow::Result;
use tracing::{error, info, warn};

use crate::config::ActionInputs;
use crate::error::ActionError;
use crate::github::Workflow;
use crate::plan::{BuildPlan, ignored_options_warning};
use crate::types::UploadOutcome;
use crate::upload::{self, UploadStatus};
use crate::validate::{ValidatedInputs, validate};

/// Output names published to later steps
pub mod outputs {
    pub const OPTIONS: &str = "options";
    pub const SPEC_OPTIONS: &str = "spec_options";
    pub const SPEC_PATH: &str = "spec_path";
    pub const IS_SCRIPT: &str = "is_script";
    /// Trimmed artifact name; empty when no upload was requested
    pub const UPLOAD_NAME: &str = "upload_name";
    pub const EXECUTABLE_PATH: &str = "executable_path";
}

/// Validate inputs, annotating every violation.
///
/// Failure is reported as `::error::` lines plus a summary section, then
/// returned so the process exits non-zero.
pub fn validate_inputs(workflow: &Workflow, inputs: &ActionInputs) -> Result<ValidatedInputs> {
    match validate(inputs) {
        Ok(valid) => {
            info!("Inputs validated");
            Ok(valid)
        }
        Err(violations) => {
            let mut summary = String::from("### PyInstaller action: invalid inputs\n");
            for violation in &violations {
                error!("{}", violation);
                workflow.error(&violation.to_string());
                summary.push_str(&format!("- {}\n", violation));
            }
            workflow.append_summary(&summary)?;
            Err(ActionError::Validation(violations).into())
        }
    }
}

/// Publish the normalized option strings, the spec path and the artifact name.
pub fn write_normalized(workflow: &Workflow, inputs: &ValidatedInputs) -> Result<()> {
    let spec_path = inputs.target.spec_path().to_string_lossy();
    info!(
        "options={:?} spec_options={:?} spec_path={}",
        inputs.options.entries(),
        inputs.spec_options.entries(),
        spec_path
    );

    workflow.set_output(outputs::OPTIONS, &inputs.options.to_shell_string())?;
    workflow.set_output(outputs::SPEC_OPTIONS, &inputs.spec_options.to_shell_string())?;
    workflow.set_output(outputs::SPEC_PATH, &spec_path)?;
    workflow.set_output(outputs::IS_SCRIPT, &inputs.target.is_script().to_string())?;
    workflow.set_output(
        outputs::UPLOAD_NAME,
        inputs.upload_name.as_deref().unwrap_or_default(),
    )?;
    Ok(())
}

/// Install PyInstaller and requirements, then build.
///
/// Downstream failures propagate with the tool's exit code.
pub fn build(workflow: &Workflow, inputs: &ValidatedInputs, dry_run: bool) -> Result<()> {
    if let Some(message) = ignored_options_warning(inputs) {
        warn!("{}", message);
        workflow.warning(&message);
    }

    let plan = BuildPlan::from_inputs(inputs);
    info!("Build plan:\n{}", plan);

    if let Err(e) = plan.execute(dry_run) {
        workflow.append_summary(&format!("### PyInstaller action: build failed\n{}", e))?;
        return Err(e);
    }

    workflow.set_output(
        outputs::EXECUTABLE_PATH,
        &plan.dist_path.to_string_lossy(),
    )?;
    Ok(())
}

/// Report the upload step's outcome. Never fails on upload failure.
pub fn report_upload(
    workflow: &Workflow,
    inputs: &ActionInputs,
    outcome: UploadOutcome,
) -> Result<()> {
    let name = inputs.upload_exe_with_name.trim();
    let name = (!name.is_empty()).then_some(name);
    let status = UploadStatus::classify(name, outcome);
    upload::report(workflow, &status)?;
    Ok(())
}

/// Validate, normalize and build in one go.
pub fn run(workflow: &Workflow, inputs: &ActionInputs, dry_run: bool) -> Result<()> {
    let valid = validate_inputs(workflow, inputs)?;
    write_normalized(workflow, &valid)?;
    build(workflow, &valid, dry_run)
}

/// Exit code for an error escaping `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<ActionError>()
        .map_or(1, ActionError::exit_code)
}
