//! Configuration for colon alignment.
//!
//! Configuration is written in TOML. Every key is optional:
//!
//! ```toml
//! [align]
//! # Turn the feature off without uninstalling it.
//! enabled = true
//! # Grammar scopes of documents the feature attaches to.
//! grammars = ["source.objc", "source.objcpp"]
//! # Rows searched above the typed colon.
//! search-lines = 25
//! ```
//!
//! # Configuration Files
//!
//! [`Config::discover`] looks for `$XDG_CONFIG_HOME/kwalign/config.toml`
//! (or the platform equivalent) and falls back to defaults when absent.

pub mod error;

use std::path::{Path, PathBuf};

pub use error::{ConfigError, Result};
use kwalign_indent::SEARCH_WINDOW_LINES;
use serde::Deserialize;

/// Grammar scopes enabled when none are configured.
pub const DEFAULT_GRAMMARS: [&str; 2] = ["source.objc", "source.objcpp"];

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Colon alignment settings.
	pub align: AlignConfig,
}

/// The `[align]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct AlignConfig {
	pub enabled: bool,
	pub grammars: Vec<String>,
	pub search_lines: usize,
}

impl Default for AlignConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			grammars: DEFAULT_GRAMMARS.iter().map(|g| g.to_string()).collect(),
			search_lines: SEARCH_WINDOW_LINES,
		}
	}
}

impl AlignConfig {
	/// Returns true if documents with `scope` get colon alignment.
	pub fn matches_grammar(&self, scope: &str) -> bool {
		self.grammars.iter().any(|g| g == scope)
	}
}

impl Config {
	/// Parse and validate a TOML string.
	pub fn parse(input: &str) -> Result<Self> {
		let config: Config = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Load the user configuration file if one exists, else defaults.
	pub fn discover() -> Result<Self> {
		match default_path() {
			Some(path) if path.is_file() => {
				tracing::debug!(path = %path.display(), "loading config");
				Self::load(path)
			}
			_ => Ok(Self::default()),
		}
	}

	/// Rejects values that parse but cannot work.
	pub fn validate(&self) -> Result<()> {
		if self.align.search_lines == 0 {
			return Err(ConfigError::Invalid {
				key: "align.search-lines",
				reason: "must be at least 1".to_string(),
			});
		}
		if let Some(pos) = self.align.grammars.iter().position(|g| g.trim().is_empty()) {
			return Err(ConfigError::Invalid {
				key: "align.grammars",
				reason: format!("entry {pos} is empty"),
			});
		}
		Ok(())
	}
}

/// Path of the user configuration file, if a config directory is known.
pub fn default_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join("kwalign").join("config.toml"))
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	#[test]
	fn test_empty_file_uses_defaults() {
		let config = Config::parse("").expect("empty config is valid");
		assert_eq!(config, Config::default());
		assert!(config.align.enabled);
		assert_eq!(config.align.search_lines, 25);
		assert!(config.align.matches_grammar("source.objc"));
		assert!(config.align.matches_grammar("source.objcpp"));
		assert!(!config.align.matches_grammar("source.rust"));
	}

	#[test]
	fn test_partial_table_keeps_other_defaults() {
		let config = Config::parse("[align]\nsearch-lines = 40\n").expect("valid");
		assert_eq!(config.align.search_lines, 40);
		assert!(config.align.enabled);
		assert_eq!(config.align.grammars.len(), 2);
	}

	#[test]
	fn test_full_table() {
		let input = r#"
[align]
enabled = false
grammars = ["source.objc"]
search-lines = 10
"#;
		let config = Config::parse(input).expect("valid");
		assert_eq!(
			config.align,
			AlignConfig {
				enabled: false,
				grammars: vec!["source.objc".to_string()],
				search_lines: 10,
			}
		);
		assert!(!config.align.matches_grammar("source.objcpp"));
	}

	#[test]
	fn test_unknown_key_is_rejected() {
		let err = Config::parse("[align]\nsearch_lines = 3\n").expect_err("snake case is not a key");
		assert!(matches!(err, ConfigError::Parse(_)));
	}

	#[test]
	fn test_zero_window_is_invalid() {
		let err = Config::parse("[align]\nsearch-lines = 0\n").expect_err("zero rows");
		assert!(matches!(err, ConfigError::Invalid { key: "align.search-lines", .. }));
	}

	#[test]
	fn test_blank_grammar_is_invalid() {
		let err = Config::parse("[align]\ngrammars = [\"source.objc\", \" \"]\n").expect_err("blank scope");
		assert_eq!(err.to_string(), "invalid value for 'align.grammars': entry 1 is empty");
	}

	#[test]
	fn test_load_from_file() {
		let mut file = tempfile::NamedTempFile::new().expect("temp file");
		writeln!(file, "[align]\nenabled = false").expect("write config");
		let config = Config::load(file.path()).expect("valid file");
		assert!(!config.align.enabled);
	}

	#[test]
	fn test_load_missing_file_reports_path() {
		let dir = tempfile::tempdir().expect("temp dir");
		let path = dir.path().join("nope.toml");
		let err = Config::load(&path).expect_err("missing file");
		match err {
			ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
			other => panic!("unexpected error: {other}"),
		}
	}
}
