use std::path::Path;

use serde::Deserialize;

/// Directory names that are never descended into, regardless of configuration.
/// Dependency and VCS directories dominate walk time on real projects; the
/// `.import-graph` store directory keeps the graph from indexing itself on
/// rebuild.
pub const BUILTIN_DIR_BLACKLIST: &[&str] =
    &["node_modules", ".git", "__pycache__", ".import-graph"];

/// Configuration loaded from `import-graph.toml` at the project root.
#[derive(Debug, Deserialize, Default)]
pub struct ImportGraphConfig {
    /// Directory-name patterns to prune during discovery (matched against the
    /// bare directory name, not the full path).
    pub exclude_dirs: Option<Vec<String>>,
    /// File-name patterns to skip during discovery (matched against the bare
    /// file name).
    pub exclude_files: Option<Vec<String>>,
}

impl ImportGraphConfig {
    /// Load configuration from `import-graph.toml` in the given root directory.
    ///
    /// Returns a default (empty) configuration if the file does not exist or
    /// cannot be parsed.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join("import-graph.toml");

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str::<Self>(&contents) {
                Ok(config) => config,
                Err(err) => {
                    eprintln!("warning: failed to parse import-graph.toml: {err}. Using defaults.");
                    Self::default()
                }
            },
            Err(err) => {
                eprintln!("warning: failed to read import-graph.toml: {err}. Using defaults.");
                Self::default()
            }
        }
    }

    /// All directory-name patterns: built-in blacklist plus configured extras.
    pub fn dir_patterns(&self) -> Vec<String> {
        let mut patterns: Vec<String> = BUILTIN_DIR_BLACKLIST
            .iter()
            .map(|s| s.to_string())
            .collect();
        if let Some(extra) = &self.exclude_dirs {
            patterns.extend(extra.iter().cloned());
        }
        patterns
    }

    /// All file-name patterns from configuration.
    pub fn file_patterns(&self) -> Vec<String> {
        self.exclude_files.clone().unwrap_or_default()
    }
}
