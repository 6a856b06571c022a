//! Typed values for the action's enumerated inputs
//!
//! Inputs arrive as strings; these enums give them exhaustive matching once
//! validated.

use strum::{Display, EnumIter, EnumString};

/// Python interpreter architecture passed to `actions/setup-python`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum PythonArch {
    #[default]
    #[strum(serialize = "x64")]
    X64,
    #[strum(serialize = "x86")]
    X86,
    #[strum(serialize = "arm64")]
    Arm64,
}

/// Outcome of the artifact upload step, as reported by `steps.<id>.outcome`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum UploadOutcome {
    Success,
    Failure,
    Cancelled,
    Skipped,
}

impl UploadOutcome {
    /// Whether the artifact actually reached storage
    pub fn is_uploaded(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Parse a workflow boolean (`true`/`false`, any case).
///
/// Action inputs are always strings; YAML booleans arrive as `"true"`/`"false"`.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_python_arch_parse_case_insensitive() {
        assert_eq!("X64".parse::<PythonArch>().unwrap(), PythonArch::X64);
        assert_eq!("arm64".parse::<PythonArch>().unwrap(), PythonArch::Arm64);
        assert!("ppc".parse::<PythonArch>().is_err());
    }

    #[test]
    fn test_python_arch_roundtrip() {
        for arch in PythonArch::iter() {
            assert_eq!(arch.to_string().parse::<PythonArch>().unwrap(), arch);
        }
    }

    #[test]
    fn test_upload_outcome_is_uploaded() {
        assert!(UploadOutcome::Success.is_uploaded());
        assert!(!UploadOutcome::Failure.is_uploaded());
        assert!(!UploadOutcome::Cancelled.is_uploaded());
        assert!(!UploadOutcome::Skipped.is_uploaded());
        assert_eq!(UploadOutcome::Cancelled.to_string(), "cancelled");
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag(" False "), Some(false));
        assert_eq!(parse_flag("yes"), None);
        assert_eq!(parse_flag(""), None);
    }
}
