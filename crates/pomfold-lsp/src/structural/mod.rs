//! Structural intelligence for pomfold LSP
//!
//! Turns the tagged regions of a POM document into editor folding ranges.

pub mod folding;
pub mod line_index;

pub use folding::FoldingAnalyzer;
pub use line_index::LineIndex;
