//! Configuration Settings
//!
//! Defines the structures read from `pomfold.toml`.

use std::fs;
use std::io;
use std::path::Path;

use pomfold_core::ElementKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tower_lsp::lsp_types::Url;

/// Name of the configuration file looked up in the workspace root
pub const CONFIG_FILE: &str = "pomfold.toml";

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file exists but could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid TOML for [`Settings`]
    #[error("Invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Top-level settings structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Which documents are treated as POM files
    pub documents: DocumentSettings,
    /// Folding range settings
    pub folding: FoldingSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load `pomfold.toml` from `root`, falling back to defaults when absent
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.display().to_string(),
                    source,
                })
            }
        };
        Ok(Self::from_toml_str(&content)?)
    }
}

/// Document selection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DocumentSettings {
    /// File names (last path segment) handled as POM documents
    pub file_names: Vec<String>,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            file_names: vec!["pom.xml".to_string()],
        }
    }
}

impl DocumentSettings {
    /// Check whether a document URI names a POM file
    pub fn matches(&self, uri: &Url) -> bool {
        let file_name = uri
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or_default();
        self.file_names.iter().any(|name| name == file_name)
    }
}

/// Folding range configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FoldingSettings {
    /// Show the element label (e.g. `g:a:1.0`) when a region is folded
    pub collapsed_text: bool,
    /// Minimum number of lines between a region's first and last line.
    /// Single-line regions never fold, so values below 1 act as 1.
    pub min_lines: u32,
    /// Element kinds that never produce a folding range
    pub exclude: Vec<ElementKind>,
}

impl Default for FoldingSettings {
    fn default() -> Self {
        Self {
            collapsed_text: true,
            min_lines: 1,
            exclude: Vec::new(),
        }
    }
}

impl FoldingSettings {
    /// Whether regions of `kind` are folded
    pub fn folds(&self, kind: ElementKind) -> bool {
        !self.exclude.contains(&kind)
    }
}
