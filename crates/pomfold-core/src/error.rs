//! Error types for POM tagging

use thiserror::Error;

/// The document could not be tokenized.
///
/// Malformed nesting is recovered by the tagger and never surfaces here; this
/// error only covers input the XML tokenizer itself gives up on (an unclosed
/// tag at end of input, a broken comment, and so on).
#[derive(Error, Debug)]
#[error("XML parsing error at byte {position}: {source}")]
pub struct ParseError {
    /// Byte offset at which the tokenizer failed
    pub position: usize,
    /// Underlying tokenizer error
    #[source]
    pub source: quick_xml::Error,
}

impl ParseError {
    pub(crate) fn new(position: usize, source: quick_xml::Error) -> Self {
        Self { position, source }
    }
}

/// Result type for tagging operations
pub type Result<T> = std::result::Result<T, ParseError>;
