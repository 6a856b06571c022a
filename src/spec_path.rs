//! Resolution of the `spec` input to the spec file PyInstaller builds from.

use std::path::{Path, PathBuf};

/// Directory `pyi-makespec` writes generated spec files into
pub const BUILD_DIR: &str = "build";

/// Extensions treated as Python entry scripts
pub const SCRIPT_EXTENSIONS: &[&str] = &["py", "pyw"];

/// Extension of a pre-built spec file
pub const SPEC_EXTENSION: &str = "spec";

/// What the `spec` input points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecTarget {
    /// A spec file the caller already has; built as-is.
    SpecFile(PathBuf),
    /// An entry script; a spec file is generated at `spec_path` first.
    Script { script: PathBuf, spec_path: PathBuf },
}

impl SpecTarget {
    /// Classify `spec` by extension. `None` for anything unrecognised.
    pub fn resolve(spec: &str) -> Option<Self> {
        let path = Path::new(spec.trim());
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();

        if ext == SPEC_EXTENSION {
            return Some(Self::SpecFile(path.to_path_buf()));
        }
        if SCRIPT_EXTENSIONS.contains(&ext.as_str()) {
            let spec_path = derive_spec_path(path)?;
            return Some(Self::Script {
                script: path.to_path_buf(),
                spec_path,
            });
        }
        None
    }

    /// Spec file the build step consumes.
    pub fn spec_path(&self) -> &Path {
        match self {
            Self::SpecFile(path) => path,
            Self::Script { spec_path, .. } => spec_path,
        }
    }

    pub fn is_script(&self) -> bool {
        matches!(self, Self::Script { .. })
    }
}

/// `<BUILD_DIR>/<stem>.spec` for a script path.
///
/// Only the base name matters: `src/tools/app.py` and `app.py` both map to
/// `build/app.spec`, which is where `pyi-makespec --specpath build` puts it.
pub fn derive_spec_path(script: &Path) -> Option<PathBuf> {
    let stem = script.file_stem()?;
    let mut file_name = stem.to_os_string();
    file_name.push(".");
    file_name.push(SPEC_EXTENSION);
    Some(Path::new(BUILD_DIR).join(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_derives_build_spec() {
        let target = SpecTarget::resolve("app.py").unwrap();
        assert!(target.is_script());
        assert_eq!(target.spec_path(), Path::new("build").join("app.spec"));
    }

    #[test]
    fn test_nested_script_uses_base_name() {
        let target = SpecTarget::resolve("src/tools/cli.pyw").unwrap();
        assert_eq!(
            target,
            SpecTarget::Script {
                script: PathBuf::from("src/tools/cli.pyw"),
                spec_path: Path::new("build").join("cli.spec"),
            }
        );
    }

    #[test]
    fn test_spec_file_passes_through() {
        let target = SpecTarget::resolve("packaging/app.spec").unwrap();
        assert!(!target.is_script());
        assert_eq!(target.spec_path(), Path::new("packaging/app.spec"));
    }

    #[test]
    fn test_extension_case_insensitive() {
        assert!(SpecTarget::resolve("App.PY").unwrap().is_script());
        assert!(!SpecTarget::resolve("App.Spec").unwrap().is_script());
    }

    #[test]
    fn test_dotted_stem() {
        let target = SpecTarget::resolve("my.app.py").unwrap();
        assert_eq!(target.spec_path(), Path::new("build").join("my.app.spec"));
    }

    #[test]
    fn test_unrecognised_inputs() {
        assert_eq!(SpecTarget::resolve(""), None);
        assert_eq!(SpecTarget::resolve("app"), None);
        assert_eq!(SpecTarget::resolve("app.txt"), None);
        assert_eq!(SpecTarget::resolve("build/"), None);
    }
}
