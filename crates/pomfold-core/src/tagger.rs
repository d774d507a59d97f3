//! Streaming structural tagger
//!
//! A single forward pass over [`ScanEvent`]s. The tagger keeps a stack of
//! open elements; when an element whose path is in the [`Taxonomy`] closes,
//! it becomes a [`StructuralRegion`]. Leaf children named in the taxonomy
//! entry have their text captured onto the enclosing significant element.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::element::ElementKind;
use crate::error::Result;
use crate::events::{ScanEvent, ScanEvents};
use crate::region::StructuralRegion;
use crate::taxonomy::{child_path, Taxonomy};

/// Tag every significant element of `text`.
///
/// Malformed nesting is recovered silently; only a tokenizer failure is
/// returned as an error.
///
/// # Example
///
/// ```
/// let text = "<project><parent><groupId>g</groupId><artifactId>a</artifactId>\
///             <version>1.0</version></parent></project>";
/// let regions = pomfold_core::tag(text).unwrap();
///
/// assert_eq!(regions.len(), 1);
/// assert_eq!(regions[0].label.as_deref(), Some("g:a:1.0"));
/// assert!(regions[0].slice(text).unwrap().starts_with("<parent>"));
/// ```
pub fn tag(text: &str) -> Result<Vec<StructuralRegion>> {
    let mut tagger = StructuralTagger::new();
    for event in ScanEvents::new(text) {
        tagger.feed(event?);
    }
    Ok(tagger.finish())
}

/// Tag `text`, keeping the regions found before any tokenizer failure
pub fn tag_lenient(text: &str) -> Vec<StructuralRegion> {
    let mut tagger = StructuralTagger::new();
    for event in ScanEvents::new(text) {
        match event {
            Ok(event) => tagger.feed(event),
            Err(e) => {
                warn!("Stopped tagging at byte {}: {}", e.position, e.source);
                break;
            }
        }
    }
    tagger.finish()
}

/// Properties being captured for an open significant element
#[derive(Debug)]
struct Capture {
    kind: ElementKind,
    expected: &'static [&'static str],
    properties: HashMap<String, String>,
}

impl Capture {
    fn expects(&self, name: &str) -> bool {
        self.expected.contains(&name)
    }
}

/// An element that has been opened but not yet closed
#[derive(Debug)]
struct ElementContext {
    name: String,
    path: String,
    start: usize,
    capture: Option<Capture>,
}

impl ElementContext {
    fn is_significant(&self) -> bool {
        self.capture.is_some()
    }
}

/// Event-driven tagger state.
///
/// Captured property values are the text seen between the child's own tags,
/// with fragments split by comments or CDATA joined and surrounding
/// whitespace trimmed: `<id> a<!--c-->b </id>` is captured as `"ab"`.
pub struct StructuralTagger<'t> {
    taxonomy: &'t Taxonomy,
    stack: Vec<ElementContext>,
    /// Text seen since the most recent opening tag
    text: Option<String>,
    regions: Vec<StructuralRegion>,
    /// Offset of the most recent tag event
    last_offset: usize,
}

impl StructuralTagger<'static> {
    /// Tagger over the POM taxonomy
    pub fn new() -> Self {
        Self::with_taxonomy(Taxonomy::global())
    }
}

impl Default for StructuralTagger<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> StructuralTagger<'t> {
    /// Tagger over an explicit taxonomy
    pub fn with_taxonomy(taxonomy: &'t Taxonomy) -> Self {
        Self {
            taxonomy,
            stack: Vec::new(),
            text: None,
            regions: Vec::new(),
            last_offset: 0,
        }
    }

    /// Apply one scan event
    pub fn feed(&mut self, event: ScanEvent) {
        if let Some(offset) = event.offset() {
            self.last_offset = offset;
        }
        match event {
            ScanEvent::OpenTagStart { name, offset } => self.open(name, offset),
            ScanEvent::Text(content) => {
                self.text.get_or_insert_with(String::new).push_str(&content);
            }
            ScanEvent::CloseTag { name, offset } => self.close(name, offset),
        }
    }

    /// Current nesting depth
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Regions completed so far, in close order
    pub fn regions(&self) -> &[StructuralRegion] {
        &self.regions
    }

    /// Consume the tagger and return its regions
    pub fn finish(self) -> Vec<StructuralRegion> {
        if !self.stack.is_empty() {
            debug!(
                "{} element(s) left unclosed after byte {}",
                self.stack.len(),
                self.last_offset
            );
        }
        self.regions
    }

    fn open(&mut self, name: String, start: usize) {
        let path = child_path(self.stack.last().map(|c| c.path.as_str()), &name);
        let capture = self.taxonomy.lookup(&path).and_then(|expected| {
            ElementKind::from_name(&name).map(|kind| Capture {
                kind,
                expected,
                properties: HashMap::new(),
            })
        });

        self.text = None;
        self.stack.push(ElementContext {
            name,
            path,
            start,
            capture,
        });
    }

    fn close(&mut self, name: String, end: usize) {
        let Some(context) = self.stack.pop() else {
            debug!("Ignoring </{}> with no open element", name);
            return;
        };
        if context.name != name {
            debug!(
                "Discarding <{}> at byte {} (significant: {}): closed by </{}>",
                context.name,
                context.start,
                context.is_significant(),
                name
            );
            return;
        }

        if let Some(capture) = context.capture {
            self.regions.push(StructuralRegion::new(
                capture.kind,
                context.name,
                context.start,
                end,
                capture.properties,
            ));
            return;
        }

        let text = self.text.take();
        if let Some(capture) = self.stack.last_mut().and_then(|parent| parent.capture.as_mut()) {
            if capture.expects(&name) {
                let value = text.map(|t| t.trim().to_string()).unwrap_or_default();
                capture.properties.insert(name, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(name: &str, offset: usize) -> ScanEvent {
        ScanEvent::OpenTagStart {
            name: name.to_string(),
            offset,
        }
    }

    fn close(name: &str, offset: usize) -> ScanEvent {
        ScanEvent::CloseTag {
            name: name.to_string(),
            offset,
        }
    }

    fn text(content: &str) -> ScanEvent {
        ScanEvent::Text(content.to_string())
    }

    #[test]
    fn test_feed_events_directly() {
        let mut tagger = StructuralTagger::new();
        for event in [
            open("project", 0),
            open("profiles", 9),
            open("profile", 19),
            open("id", 28),
            text("ci"),
            close("id", 37),
            close("profile", 47),
            close("profiles", 58),
            close("project", 68),
        ] {
            tagger.feed(event);
        }

        let regions = tagger.finish();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].kind, ElementKind::Profile);
        assert_eq!((regions[0].start, regions[0].end), (19, 47));
        assert_eq!(regions[0].label.as_deref(), Some("ci"));
    }

    #[test]
    fn test_depth_tracks_stack() {
        let mut tagger = StructuralTagger::new();
        tagger.feed(open("project", 0));
        tagger.feed(open("parent", 9));
        assert_eq!(tagger.depth(), 2);
        tagger.feed(close("parent", 26));
        assert_eq!(tagger.depth(), 1);
        assert_eq!(tagger.regions().len(), 1);
    }

    #[test]
    fn test_mismatched_close_pops_without_region() {
        let mut tagger = StructuralTagger::new();
        tagger.feed(open("project", 0));
        tagger.feed(open("parent", 9));
        tagger.feed(close("project", 30));

        assert_eq!(tagger.depth(), 1);
        assert!(tagger.regions().is_empty());
    }

    #[test]
    fn test_close_on_empty_stack_ignored() {
        let mut tagger = StructuralTagger::new();
        tagger.feed(close("project", 10));
        assert_eq!(tagger.depth(), 0);
        assert!(tagger.finish().is_empty());
    }

    #[test]
    fn test_text_fragments_join_within_leaf() {
        let mut tagger = StructuralTagger::new();
        for event in [
            open("project", 0),
            open("profiles", 1),
            open("profile", 2),
            open("id", 3),
            text(" rel"),
            text("ease "),
            close("id", 4),
            close("profile", 5),
        ] {
            tagger.feed(event);
        }
        assert_eq!(tagger.regions()[0].property("id"), Some("release"));
    }

    #[test]
    fn test_text_reset_on_open() {
        let mut tagger = StructuralTagger::new();
        for event in [
            open("project", 0),
            open("profiles", 1),
            open("profile", 2),
            text("stale"),
            open("id", 3),
            close("id", 4),
            close("profile", 5),
        ] {
            tagger.feed(event);
        }
        let region = &tagger.regions()[0];
        assert_eq!(region.property("id"), Some(""));
        assert_eq!(region.label, None);
    }

    #[test]
    fn test_comment_split_text_joined_and_trimmed() {
        let text = "<project><profiles><profile><id> a<!--c-->b </id></profile></profiles></project>";
        let regions = crate::tag(text).unwrap();
        assert_eq!(regions[0].property("id"), Some("ab"));
    }

    #[test]
    fn test_custom_taxonomy() {
        let taxonomy = Taxonomy::default();
        let mut tagger = StructuralTagger::with_taxonomy(&taxonomy);
        tagger.feed(open("project", 0));
        tagger.feed(open("parent", 9));
        tagger.feed(close("parent", 26));
        assert!(tagger.finish().is_empty());
    }
}
