//! Type-safe arguments for `python -m pip install`.

use std::path::PathBuf;

use crate::tool_traits::ToolArgs;

/// Requirement string for PyInstaller, pinned when a version is given.
pub fn pyinstaller_requirement(version: Option<&str>) -> String {
    match version {
        Some(v) => format!("pyinstaller=={}", v),
        None => "pyinstaller".to_string(),
    }
}

/// What a single pip invocation installs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipInstall {
    /// Named packages (`pip install <pkg>...`)
    Packages(Vec<String>),
    /// A requirements file (`pip install -r <file>`)
    Requirements(PathBuf),
}

/// Type-safe arguments for `python -m pip install`.
///
/// Invoked through the interpreter so the packages land in the Python that
/// `setup-python` put first on `PATH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipInstallArgs {
    pub install: PipInstall,
}

impl PipInstallArgs {
    pub fn pyinstaller(version: Option<&str>) -> Self {
        Self {
            install: PipInstall::Packages(vec![pyinstaller_requirement(version)]),
        }
    }

    pub fn requirements(path: impl Into<PathBuf>) -> Self {
        Self {
            install: PipInstall::Requirements(path.into()),
        }
    }
}

impl ToolArgs for PipInstallArgs {
    fn program(&self) -> &'static str {
        "python"
    }

    fn to_cli_args(&self) -> Vec<String> {
        let mut args = vec!["-m".to_string(), "pip".to_string(), "install".to_string()];
        match self.install {
            PipInstall::Packages(ref packages) => args.extend(packages.iter().cloned()),
            PipInstall::Requirements(ref path) => {
                args.push("-r".to_string());
                args.push(path.to_string_lossy().into_owned());
            }
        }
        args
    }

    fn get_env_vars(&self) -> Vec<(String, String)> {
        vec![("PIP_DISABLE_PIP_VERSION_CHECK".to_string(), "1".to_string())]
    }

    fn tool_name(&self) -> &'static str {
        "pip"
    }
}
