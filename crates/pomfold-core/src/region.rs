//! Structural regions emitted by the tagger

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::element::{ElementKind, PomElement};

/// One significant element of a POM document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralRegion {
    /// Kind of the element
    pub kind: ElementKind,
    /// Local tag name
    pub name: String,
    /// Byte offset of the opening `<`
    pub start: usize,
    /// Byte offset just past the closing `>`
    pub end: usize,
    /// Colon-joined description, if the identifying properties were present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Captured child properties
    pub properties: HashMap<String, String>,
}

impl StructuralRegion {
    /// Build a region and derive its label from the captured properties
    pub fn new(
        kind: ElementKind,
        name: impl Into<String>,
        start: usize,
        end: usize,
        properties: HashMap<String, String>,
    ) -> Self {
        let label = PomElement::from_properties(kind, &properties).describe();
        Self {
            kind,
            name: name.into(),
            start,
            end,
            label,
            properties,
        }
    }

    /// Typed view of the captured properties
    pub fn element(&self) -> PomElement {
        PomElement::from_properties(self.kind, &self.properties)
    }

    /// Source text covered by this region.
    ///
    /// Returns `None` if `text` is not the document the region came from.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.start..self.end)
    }

    /// Captured property value
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }
}
