//! Action input loading.
//!
//! GitHub exposes every `with:` input to a step as an `INPUT_<NAME>`
//! environment variable. Inputs can also be supplied as a JSON file (handy for
//! running the binary locally); environment values take precedence over file
//! values.

use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Default interpreter version installed by `actions/setup-python`
pub const DEFAULT_PYTHON_VER: &str = "3.10";
/// Default directory PyInstaller writes executables to
pub const DEFAULT_EXE_PATH: &str = "./dist";
/// Default artifact compression level (matches `actions/upload-artifact`)
pub const DEFAULT_COMPRESSION_LEVEL: &str = "6";

/// Raw action inputs, exactly as the caller supplied them.
///
/// Values stay as strings here; [`crate::validate::validate`] turns them into
/// typed values and reports every violation at once.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ActionInputs {
    /// Script (`.py`/`.pyw`) or spec file (`.spec`) to build
    pub spec: String,
    /// Optional requirements file installed before the build
    pub requirements: String,
    /// Comma-separated options for `pyi-makespec`
    pub options: String,
    /// Comma-separated options forwarded to the spec file after `--`
    pub spec_options: String,
    pub python_ver: String,
    pub python_arch: String,
    /// Empty means latest
    pub pyinstaller_ver: String,
    pub exe_path: String,
    /// Artifact name; empty disables upload
    pub upload_exe_with_name: String,
    pub clean_checkout: String,
    pub lfs: String,
    pub compression_level: String,
}

impl Default for ActionInputs {
    fn default() -> Self {
        Self {
            spec: String::new(),
            requirements: String::new(),
            options: String::new(),
            spec_options: String::new(),
            python_ver: DEFAULT_PYTHON_VER.to_string(),
            python_arch: "x64".to_string(),
            pyinstaller_ver: String::new(),
            exe_path: DEFAULT_EXE_PATH.to_string(),
            upload_exe_with_name: String::new(),
            clean_checkout: "true".to_string(),
            lfs: "false".to_string(),
            compression_level: DEFAULT_COMPRESSION_LEVEL.to_string(),
        }
    }
}

/// Environment variable GitHub uses for an input name.
pub fn input_env_name(input: &str) -> String {
    format!("INPUT_{}", input.replace(' ', "_").to_uppercase())
}

impl ActionInputs {
    /// Names of every input, in the order they are declared in `action.yml`.
    pub const NAMES: [&'static str; 12] = [
        "spec",
        "requirements",
        "options",
        "spec_options",
        "python_ver",
        "python_arch",
        "pyinstaller_ver",
        "exe_path",
        "upload_exe_with_name",
        "clean_checkout",
        "lfs",
        "compression_level",
    ];

    /// Read inputs through an arbitrary lookup (process env, test maps).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut inputs = Self::default();
        inputs.apply_lookup(lookup);
        inputs
    }

    /// Overlay values found through `lookup` on top of the current ones.
    pub fn apply_lookup<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        for name in Self::NAMES {
            if let Some(value) = lookup(&input_env_name(name)) {
                if let Some(slot) = self.field_mut(name) {
                    *slot = value;
                }
            }
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        let slot = match name {
            "spec" => &mut self.spec,
            "requirements" => &mut self.requirements,
            "options" => &mut self.options,
            "spec_options" => &mut self.spec_options,
            "python_ver" => &mut self.python_ver,
            "python_arch" => &mut self.python_arch,
            "pyinstaller_ver" => &mut self.pyinstaller_ver,
            "exe_path" => &mut self.exe_path,
            "upload_exe_with_name" => &mut self.upload_exe_with_name,
            "clean_checkout" => &mut self.clean_checkout,
            "lfs" => &mut self.lfs,
            "compression_level" => &mut self.compression_level,
            _ => return None,
        };
        Some(slot)
    }

    /// Load inputs from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let inputs: Self = serde_json::from_str(&content)?;
        Ok(inputs)
    }

    /// Load inputs: optional JSON file first, then `INPUT_*` overrides.
    pub fn load(file: Option<&Path>) -> anyhow::Result<Self> {
        let mut inputs = match file {
            Some(path) => Self::load_from_file(path)
                .with_context(|| format!("Failed to load inputs from {:?}", path))?,
            None => Self::default(),
        };
        inputs.apply_lookup(|key| std::env::var(key).ok());
        Ok(inputs)
    }
}
