use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::format::Format;

/// Configuration loaded from a TOML file.
///
/// ```toml
/// format = "informal"
/// dictionary = "/usr/share/keigo/verb_dict.kytea"
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Output format.
    #[serde(default)]
    pub format: Option<Format>,
    /// Path to the pattern dictionary.
    #[serde(default)]
    pub dictionary: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).with_context(|| anyhow!("{}", path.display()))?;
        Self::parse(&data).with_context(|| anyhow!("{}", path.display()))
    }

    /// Parse configuration from a TOML string.
    pub fn parse(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }
}
