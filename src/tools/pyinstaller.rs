//! Type-safe arguments for `pyi-makespec` and `pyinstaller`.
//!
//! # Flag mapping
//!
//! | Struct            | Field          | Flag                         |
//! |-------------------|----------------|------------------------------|
//! | `MakeSpecArgs`    | `spec_dir`     | `--specpath`                 |
//! | `MakeSpecArgs`    | `options`      | passed through, in order     |
//! | `BuildArgs`       | `dist_path`    | `--distpath`                 |
//! | `BuildArgs`       | `clean`        | `--clean`                    |
//! | `BuildArgs`       | `spec_options` | after `--`, read by the spec file |

use std::path::PathBuf;

use crate::options::NormalizedOptions;
use crate::tool_traits::ToolArgs;

/// Type-safe arguments for `pyi-makespec`.
///
/// Generates `<spec_dir>/<script stem>.spec` from an entry script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MakeSpecArgs {
    pub script: PathBuf,
    pub spec_dir: PathBuf,
    pub options: NormalizedOptions,
}

impl ToolArgs for MakeSpecArgs {
    fn program(&self) -> &'static str {
        "pyi-makespec"
    }

    fn to_cli_args(&self) -> Vec<String> {
        let mut args = vec![
            "--specpath".to_string(),
            self.spec_dir.to_string_lossy().into_owned(),
        ];
        args.extend(self.options.argv());
        args.push(self.script.to_string_lossy().into_owned());
        args
    }
}

/// Type-safe arguments for `pyinstaller <spec>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildArgs {
    pub spec_path: PathBuf,
    pub dist_path: PathBuf,
    /// Remove PyInstaller's cache before building
    pub clean: bool,
    /// Forwarded to the spec file, which reads them from `sys.argv`
    pub spec_options: NormalizedOptions,
}

impl ToolArgs for BuildArgs {
    fn program(&self) -> &'static str {
        "pyinstaller"
    }

    fn to_cli_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.clean {
            args.push("--clean".to_string());
        }
        args.push("--noconfirm".to_string());
        args.push("--distpath".to_string());
        args.push(self.dist_path.to_string_lossy().into_owned());
        args.push(self.spec_path.to_string_lossy().into_owned());
        if !self.spec_options.is_empty() {
            args.push("--".to_string());
            args.extend(self.spec_options.argv());
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_makespec_args() {
        let args = MakeSpecArgs {
            script: PathBuf::from("src/app.py"),
            spec_dir: PathBuf::from("build"),
            options: NormalizedOptions::parse("--onefile, --name My App"),
        };
        assert_eq!(
            args.to_cli_args(),
            ["--specpath", "build", "--onefile", "--name", "My App", "src/app.py"]
        );
        assert_eq!(
            args.command_line(),
            "pyi-makespec --specpath build --onefile --name 'My App' src/app.py"
        );
    }

    #[test]
    fn test_build_args_without_spec_options() {
        let args = BuildArgs {
            spec_path: PathBuf::from("build/app.spec"),
            dist_path: PathBuf::from("./dist"),
            clean: true,
            spec_options: NormalizedOptions::default(),
        };
        assert_eq!(
            args.to_cli_args(),
            ["--clean", "--noconfirm", "--distpath", "./dist", "build/app.spec"]
        );
    }

    #[test]
    fn test_build_args_forward_spec_options() {
        let args = BuildArgs {
            spec_path: PathBuf::from("app.spec"),
            dist_path: PathBuf::from("out"),
            clean: false,
            spec_options: NormalizedOptions::parse("--debug, --variant pro"),
        };
        assert_eq!(
            args.to_cli_args(),
            [
                "--noconfirm",
                "--distpath",
                "out",
                "app.spec",
                "--",
                "--debug",
                "--variant",
                "pro"
            ]
        );
        assert_eq!(args.tool_name(), "pyinstaller");
    }
}
