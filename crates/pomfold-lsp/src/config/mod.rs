//! Configuration Engine
//!
//! Settings are loaded from `pomfold.toml` in the workspace root:
//!
//! ```toml
//! [documents]
//! file_names = ["pom.xml", ".flattened-pom.xml"]
//!
//! [folding]
//! collapsed_text = true
//! min_lines = 2
//! exclude = ["exclusion"]
//! ```

mod settings;

#[cfg(test)]
mod tests;

pub use settings::{ConfigError, DocumentSettings, FoldingSettings, Settings, CONFIG_FILE};
