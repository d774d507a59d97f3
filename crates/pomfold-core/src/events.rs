//! Scan events over raw XML text
//!
//! Wraps the `quick-xml` tokenizer and reduces its output to the three events
//! the tagger cares about, each carrying the byte offset it occurred at.
//! The tokenizer is configured to be lenient: mismatched or unmatched end
//! tags are reported as-is and left to the tagger to reconcile.

use std::iter::FusedIterator;

use quick_xml::events::Event;
use quick_xml::name::LocalName;
use quick_xml::Reader;

use crate::error::ParseError;

/// A tokenizer event relevant to structural tagging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// An opening tag begins at `offset` (the `<`)
    OpenTagStart { name: String, offset: usize },
    /// Character data between tags
    Text(String),
    /// A closing tag ends at `offset` (just past the `>`)
    CloseTag { name: String, offset: usize },
}

impl ScanEvent {
    /// Byte offset of tag events
    pub fn offset(&self) -> Option<usize> {
        match self {
            ScanEvent::OpenTagStart { offset, .. } | ScanEvent::CloseTag { offset, .. } => {
                Some(*offset)
            }
            ScanEvent::Text(_) => None,
        }
    }
}

/// Lazy, single-pass stream of [`ScanEvent`]s over a document.
///
/// Self-closing elements produce an open event immediately followed by a
/// close event. Comments, processing instructions and declarations produce
/// nothing. After a tokenizer error the stream yields that error once and
/// then ends.
pub struct ScanEvents<'a> {
    reader: Reader<&'a [u8]>,
    /// Length of a leading byte order mark, which the reader skips silently
    bom_len: usize,
    pending_close: Option<ScanEvent>,
    done: bool,
}

impl<'a> ScanEvents<'a> {
    /// Start scanning `text`
    pub fn new(text: &'a str) -> Self {
        let mut reader = Reader::from_str(text);
        let config = reader.config_mut();
        config.trim_text(false);
        config.check_end_names = false;
        config.allow_unmatched_ends = true;
        config.expand_empty_elements = false;

        let bom_len = if text.starts_with('\u{FEFF}') {
            '\u{FEFF}'.len_utf8()
        } else {
            0
        };

        Self {
            reader,
            bom_len,
            pending_close: None,
            done: false,
        }
    }

    /// Offset into the original text, byte order mark included
    fn byte_position(&self) -> usize {
        self.reader.buffer_position() as usize + self.bom_len
    }
}

impl Iterator for ScanEvents<'_> {
    type Item = Result<ScanEvent, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(event) = self.pending_close.take() {
            return Some(Ok(event));
        }
        if self.done {
            return None;
        }

        loop {
            let offset = self.byte_position();
            match self.reader.read_event() {
                Ok(Event::Start(e)) => {
                    return Some(Ok(ScanEvent::OpenTagStart {
                        name: local_name(e.local_name()),
                        offset,
                    }));
                }
                Ok(Event::Empty(e)) => {
                    let name = local_name(e.local_name());
                    self.pending_close = Some(ScanEvent::CloseTag {
                        name: name.clone(),
                        offset: self.byte_position(),
                    });
                    return Some(Ok(ScanEvent::OpenTagStart { name, offset }));
                }
                Ok(Event::End(e)) => {
                    return Some(Ok(ScanEvent::CloseTag {
                        name: local_name(e.local_name()),
                        offset: self.byte_position(),
                    }));
                }
                Ok(Event::Text(e)) => {
                    let text = match e.unescape() {
                        Ok(text) => text.into_owned(),
                        // Undeclared entities are common in the wild; keep the raw text
                        Err(_) => String::from_utf8_lossy(&e).into_owned(),
                    };
                    return Some(Ok(ScanEvent::Text(text)));
                }
                Ok(Event::CData(e)) => {
                    return Some(Ok(ScanEvent::Text(
                        String::from_utf8_lossy(&e).into_owned(),
                    )));
                }
                Ok(Event::Eof) => {
                    self.done = true;
                    return None;
                }
                Ok(_) => continue,
                Err(err) => {
                    self.done = true;
                    let position = self.reader.error_position() as usize + self.bom_len;
                    return Some(Err(ParseError::new(position, err)));
                }
            }
        }
    }
}

impl FusedIterator for ScanEvents<'_> {}

fn local_name(name: LocalName<'_>) -> String {
    String::from_utf8_lossy(name.as_ref()).into_owned()
}
