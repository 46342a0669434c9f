//! Brain configuration, loadable from TOML.
//!
//! Every field has a default, so a config file only needs to name what it
//! overrides. Omitted vocabulary lists and template sets keep their defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::{ResponseTemplates, Vocabulary};

pub const DEFAULT_NAME: &str = "Tinimsiz AGI";
pub const DEFAULT_VERSION: &str = "1.1";
pub const DEFAULT_MEMORY_CAPACITY: usize = 10;
pub const DEFAULT_CONTEXT_WINDOW: usize = 3;

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("vocabulary list `{field}` must not be empty")]
    EmptyList { field: &'static str },

    #[error("template set `{set}` must not be empty")]
    EmptyTemplates { set: &'static str },

    #[error("template set `{set}` needs at least one template without keyword placeholders")]
    NoKeywordFreeTemplate { set: &'static str },

    #[error("memory capacity must be at least 1")]
    ZeroCapacity,
}

/// Configuration for a single brain instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrainConfig {
    pub name: String,
    pub version: String,

    /// Maximum number of exchanges kept in working memory.
    pub memory_capacity: usize,

    /// Number of recent exchanges handed to the response generator.
    pub context_window: usize,

    pub vocabulary: Vocabulary,
    pub templates: ResponseTemplates,
}

impl Default for BrainConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            version: DEFAULT_VERSION.to_string(),
            memory_capacity: DEFAULT_MEMORY_CAPACITY,
            context_window: DEFAULT_CONTEXT_WINDOW,
            vocabulary: Vocabulary::default(),
            templates: ResponseTemplates::default(),
        }
    }
}

impl BrainConfig {
    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Check the invariants the pipeline relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.memory_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }

        if let Some(field) = self.vocabulary.empty_required_lists().into_iter().next() {
            return Err(ConfigError::EmptyList { field });
        }

        for (set, templates) in self.templates.sets() {
            if templates.is_empty() {
                return Err(ConfigError::EmptyTemplates { set });
            }
        }

        // Questions and commands may arrive without keywords.
        for (set, templates) in [
            ("question_miss", &self.templates.question_miss),
            ("command", &self.templates.command),
        ] {
            if crate::keyword_free(templates).is_empty() {
                return Err(ConfigError::NoKeywordFreeTemplate { set });
            }
        }

        Ok(())
    }
}
