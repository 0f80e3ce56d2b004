//! JSON configuration.
//!
//! Every section is optional; a missing section or field keeps its default.
//!
//! ```json
//! {
//!   "language": null,
//!   "detection": { "min_confidence": 0.0, "allowlist": [], "function_words": true },
//!   "tokenizer": { "normalize_unicode": false },
//!   "triggers": {
//!     "builtin": true,
//!     "files": ["extra.tsv"],
//!     "words": { "fr": ["et", "Et", "si", "Si"] }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::language::DetectorConfig;
use crate::triggers::{TriggerTable, TriggerTableBuilder};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Skip detection and always use this language code
    pub language: Option<String>,
    pub detection: DetectorConfig,
    pub tokenizer: TokenizerConfig,
    pub triggers: TriggersConfig,
}

/// Tokenizer settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// NFC-normalize the input before tokenizing. Output may then differ from
    /// the input even where no break is inserted.
    pub normalize_unicode: bool,
}

/// Trigger table settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggersConfig {
    /// Start from the built-in table
    pub builtin: bool,
    /// TSV files to load on top (code\tword\tword...)
    pub files: Vec<PathBuf>,
    /// Extra words per language code
    pub words: BTreeMap<String, Vec<String>>,
}

impl Default for TriggersConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            files: Vec::new(),
            words: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Parse a configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config = Self::from_json_str(&content)?;

        // Trigger files are relative to the configuration file
        if let Some(dir) = path.parent() {
            for file in config.triggers.files.iter_mut() {
                if file.is_relative() {
                    *file = dir.join(&*file);
                }
            }
        }

        Ok(config)
    }

    /// Build the trigger table this configuration describes
    pub fn trigger_table(&self) -> Result<TriggerTable> {
        let mut builder = if self.triggers.builtin {
            TriggerTableBuilder::with_defaults()
        } else {
            TriggerTableBuilder::new()
        };

        for file in &self.triggers.files {
            let content = fs::read_to_string(file)?;
            builder.load_tsv(&content);
            log::info!("loaded trigger words from {}", file.display());
        }

        for (code, words) in &self.triggers.words {
            for word in words {
                builder.add(code, word);
            }
        }

        Ok(builder.build())
    }
}
