//! pomfold Language Server Protocol implementation
//!
//! This library provides folding ranges for Maven `pom.xml` files. Every
//! parent, profile, build extension, dependency, exclusion and plugin becomes
//! a foldable region whose collapsed text is its coordinates, for example
//! `org.apache.maven.plugins:maven-compiler-plugin:3.11.0`.
//!
//! # Library Usage
//!
//! ```
//! use pomfold_lsp::structural::FoldingAnalyzer;
//!
//! let pom = "<project>\n  <parent>\n    <groupId>g</groupId>\n  </parent>\n</project>";
//! let ranges = FoldingAnalyzer::generate_ranges(pom);
//! assert_eq!(ranges[0].start_line, 1);
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Start the language server (typically called by an editor)
//! pomfold-lsp
//!
//! # With debug logging
//! RUST_LOG=debug pomfold-lsp
//! ```

pub mod config;
pub mod server;
pub mod structural;

// Re-export main entry point
pub use server::{run_server, Backend};

// Re-export commonly used types
pub use config::Settings;
pub use structural::FoldingAnalyzer;
