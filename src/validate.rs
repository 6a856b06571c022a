//! Input validation
//!
//! Runs before any environment setup so a bad input costs seconds, not a
//! Python install. Every violation is collected so the caller sees all of
//! them in one failed run.

use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::config::ActionInputs;
use crate::options::NormalizedOptions;
use crate::spec_path::SpecTarget;
use crate::types::{PythonArch, parse_flag};

/// Characters `actions/upload-artifact` refuses in an artifact name
pub const INVALID_ARTIFACT_CHARS: &[char] = &['"', ':', '<', '>', '|', '*', '?', '\r', '\n', '\\', '/'];

/// Highest zlib level accepted by `actions/upload-artifact`
pub const MAX_COMPRESSION_LEVEL: u8 = 9;

/// A single input violation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required input is empty
    #[error("Required input '{name}' is empty")]
    MissingInput { name: String },

    /// Artifact name contains a character upload-artifact rejects
    #[error("Artifact name '{name}' contains invalid character {found:?}")]
    InvalidUploadName { name: String, found: char },

    /// Spec input is neither a script nor a spec file
    #[error("Input 'spec' must end in .py, .pyw or .spec, got '{value}'")]
    UnsupportedSpec { value: String },

    /// Input has a value outside its accepted set
    #[error("Input '{name}' has invalid value '{value}': {reason}")]
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },
}

impl ValidationError {
    fn invalid(name: &str, value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Inputs after validation, in the types the rest of the action works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInputs {
    pub target: SpecTarget,
    pub options: NormalizedOptions,
    pub spec_options: NormalizedOptions,
    pub requirements: Option<PathBuf>,
    pub python_ver: String,
    pub python_arch: PythonArch,
    pub pyinstaller_ver: Option<String>,
    pub exe_path: PathBuf,
    pub upload_name: Option<String>,
    pub clean_checkout: bool,
    pub lfs: bool,
    pub compression_level: u8,
}

/// Check an artifact name against upload-artifact's rules.
pub fn check_upload_name(name: &str) -> Result<(), ValidationError> {
    match name.chars().find(|c| INVALID_ARTIFACT_CHARS.contains(c)) {
        Some(found) => Err(ValidationError::InvalidUploadName {
            name: name.to_string(),
            found,
        }),
        None => Ok(()),
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn check_flag(name: &str, value: &str, errors: &mut Vec<ValidationError>) -> bool {
    match parse_flag(value) {
        Some(flag) => flag,
        None => {
            errors.push(ValidationError::invalid(name, value, "expected true or false"));
            false
        }
    }
}

/// Validate raw inputs.
///
/// Returns every violation found, or the typed inputs when there are none.
pub fn validate(inputs: &ActionInputs) -> Result<ValidatedInputs, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let spec = inputs.spec.trim();
    let target = if spec.is_empty() {
        errors.push(ValidationError::MissingInput {
            name: "spec".to_string(),
        });
        None
    } else {
        let target = SpecTarget::resolve(spec);
        if target.is_none() {
            errors.push(ValidationError::UnsupportedSpec {
                value: spec.to_string(),
            });
        }
        target
    };

    let upload_name = non_empty(&inputs.upload_exe_with_name);
    if let Some(ref name) = upload_name {
        if let Err(e) = check_upload_name(name) {
            errors.push(e);
        }
    }

    let python_ver = non_empty(&inputs.python_ver);
    if python_ver.is_none() {
        errors.push(ValidationError::MissingInput {
            name: "python_ver".to_string(),
        });
    }

    let python_arch = match inputs.python_arch.trim().parse::<PythonArch>() {
        Ok(arch) => arch,
        Err(_) => {
            errors.push(ValidationError::invalid(
                "python_arch",
                &inputs.python_arch,
                "expected one of x64, x86, arm64",
            ));
            PythonArch::default()
        }
    };

    let pyinstaller_ver = non_empty(&inputs.pyinstaller_ver);
    if let Some(ref ver) = pyinstaller_ver {
        if ver.contains(char::is_whitespace) || ver.contains(',') {
            errors.push(ValidationError::invalid(
                "pyinstaller_ver",
                ver,
                "expected a single version such as 6.3.0",
            ));
        }
    }

    let exe_path = non_empty(&inputs.exe_path);
    if exe_path.is_none() {
        errors.push(ValidationError::MissingInput {
            name: "exe_path".to_string(),
        });
    }

    let compression_level = match inputs.compression_level.trim().parse::<u8>() {
        Ok(level) if level <= MAX_COMPRESSION_LEVEL => level,
        _ => {
            errors.push(ValidationError::invalid(
                "compression_level",
                &inputs.compression_level,
                format!("expected an integer from 0 to {}", MAX_COMPRESSION_LEVEL),
            ));
            0
        }
    };

    let clean_checkout = check_flag("clean_checkout", &inputs.clean_checkout, &mut errors);
    let lfs = check_flag("lfs", &inputs.lfs, &mut errors);

    match target {
        Some(target) if errors.is_empty() => {
            debug!("Inputs valid: spec={:?}", target.spec_path());
            Ok(ValidatedInputs {
                target,
                options: NormalizedOptions::parse(&inputs.options),
                spec_options: NormalizedOptions::parse(&inputs.spec_options),
                requirements: non_empty(&inputs.requirements).map(PathBuf::from),
                python_ver: python_ver.unwrap_or_default(),
                python_arch,
                pyinstaller_ver,
                exe_path: exe_path.map(PathBuf::from).unwrap_or_default(),
                upload_name,
                clean_checkout,
                lfs,
                compression_level,
            })
        }
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn inputs_with_spec(spec: &str) -> ActionInputs {
        ActionInputs {
            spec: spec.to_string(),
            ..ActionInputs::default()
        }
    }

    #[test]
    fn test_minimal_valid_inputs() {
        let valid = validate(&inputs_with_spec("app.py")).unwrap();
        assert!(valid.target.is_script());
        assert_eq!(valid.target.spec_path(), Path::new("build").join("app.spec"));
        assert_eq!(valid.python_ver, "3.10");
        assert_eq!(valid.python_arch, PythonArch::X64);
        assert_eq!(valid.exe_path, PathBuf::from("./dist"));
        assert_eq!(valid.compression_level, 6);
        assert!(valid.clean_checkout);
        assert!(!valid.lfs);
        assert!(valid.upload_name.is_none());
        assert!(valid.requirements.is_none());
        assert!(valid.pyinstaller_ver.is_none());
    }

    #[test]
    fn test_empty_spec_fails() {
        let errors = validate(&inputs_with_spec("")).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::MissingInput {
                name: "spec".to_string()
            }]
        );
    }

    #[test]
    fn test_whitespace_spec_fails() {
        let errors = validate(&inputs_with_spec("   ")).unwrap_err();
        assert!(matches!(errors[0], ValidationError::MissingInput { .. }));
    }

    #[test]
    fn test_unsupported_spec_extension() {
        let errors = validate(&inputs_with_spec("main.rb")).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::UnsupportedSpec {
                value: "main.rb".to_string()
            }]
        );
    }

    #[test]
    fn test_upload_name_with_path_separator_fails() {
        for (name, found) in [("dist/app", '/'), ("dist\\app", '\\')] {
            let mut inputs = inputs_with_spec("app.py");
            inputs.upload_exe_with_name = name.to_string();
            let errors = validate(&inputs).unwrap_err();
            assert_eq!(
                errors,
                vec![ValidationError::InvalidUploadName {
                    name: name.to_string(),
                    found
                }]
            );
        }
    }

    #[test]
    fn test_upload_name_valid() {
        let mut inputs = inputs_with_spec("app.spec");
        inputs.upload_exe_with_name = "  my-app (linux) ".to_string();
        let valid = validate(&inputs).unwrap();
        assert_eq!(valid.upload_name.as_deref(), Some("my-app (linux)"));
    }

    #[test]
    fn test_check_upload_name_rejects_each_char() {
        for c in INVALID_ARTIFACT_CHARS {
            let name = format!("app{}x", c);
            assert!(check_upload_name(&name).is_err(), "{:?} should be rejected", c);
        }
        assert!(check_upload_name("app-1.0_win").is_ok());
    }

    #[test]
    fn test_collects_all_violations() {
        let inputs = ActionInputs {
            spec: String::new(),
            upload_exe_with_name: "a:b".to_string(),
            python_arch: "mips".to_string(),
            compression_level: "11".to_string(),
            lfs: "maybe".to_string(),
            ..ActionInputs::default()
        };
        let errors = validate(&inputs).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(matches!(errors[0], ValidationError::MissingInput { .. }));
        assert!(matches!(errors[1], ValidationError::InvalidUploadName { found: ':', .. }));
    }

    #[test]
    fn test_compression_level_bounds() {
        let mut inputs = inputs_with_spec("app.py");
        inputs.compression_level = "0".to_string();
        assert_eq!(validate(&inputs).unwrap().compression_level, 0);

        inputs.compression_level = "9".to_string();
        assert_eq!(validate(&inputs).unwrap().compression_level, 9);

        inputs.compression_level = "-1".to_string();
        assert!(validate(&inputs).is_err());
    }

    #[test]
    fn test_pyinstaller_version_with_spaces_fails() {
        let mut inputs = inputs_with_spec("app.py");
        inputs.pyinstaller_ver = "6.3 --index-url x".to_string();
        let errors = validate(&inputs).unwrap_err();
        assert!(matches!(
            &errors[0],
            ValidationError::InvalidValue { name, .. } if name == "pyinstaller_ver"
        ));
    }

    #[test]
    fn test_options_normalized_on_success() {
        let mut inputs = inputs_with_spec("app.py");
        inputs.options = "--onedir, -F".to_string();
        inputs.spec_options = " , --debug ,".to_string();
        inputs.requirements = "requirements.txt".to_string();
        let valid = validate(&inputs).unwrap();
        assert_eq!(valid.options.to_shell_string(), "--onedir -F");
        assert_eq!(valid.spec_options.entries(), ["--debug"]);
        assert_eq!(valid.requirements, Some(PathBuf::from("requirements.txt")));
    }
}
