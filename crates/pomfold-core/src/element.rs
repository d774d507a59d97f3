//! Typed views over significant POM elements
//!
//! Each significant element kind has a small struct holding the properties
//! captured for it. [`PomElement`] is the closed set of those views and is
//! built from a captured property map by [`PomElement::from_properties`].
//! Labels are colon-joined coordinates such as `org.junit:junit:4.13`.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between label parts
pub const PART_SEPARATOR: char = ':';

/// Kind of a significant element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Parent,
    Profile,
    Extension,
    Dependency,
    Exclusion,
    Plugin,
}

impl ElementKind {
    /// Map a local tag name to its kind
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "parent" => Some(ElementKind::Parent),
            "profile" => Some(ElementKind::Profile),
            "extension" => Some(ElementKind::Extension),
            "dependency" => Some(ElementKind::Dependency),
            "exclusion" => Some(ElementKind::Exclusion),
            "plugin" => Some(ElementKind::Plugin),
            _ => None,
        }
    }

    /// The tag name of this kind
    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Parent => "parent",
            ElementKind::Profile => "profile",
            ElementKind::Extension => "extension",
            ElementKind::Dependency => "dependency",
            ElementKind::Exclusion => "exclusion",
            ElementKind::Plugin => "plugin",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `<parent>` coordinates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parent {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
}

/// `<profile>` identity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub id: Option<String>,
}

/// `<extension>` coordinates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extension {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
}

/// `<dependency>` coordinates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dependency {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub dependency_type: Option<String>,
    pub classifier: Option<String>,
    pub scope: Option<String>,
}

/// `<exclusion>` coordinates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exclusion {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
}

/// `<plugin>` coordinates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plugin {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
}

/// A significant element with its captured properties
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PomElement {
    Parent(Parent),
    Profile(Profile),
    Extension(Extension),
    Dependency(Dependency),
    Exclusion(Exclusion),
    Plugin(Plugin),
}

impl PomElement {
    /// Build the typed view for `kind` from a captured property map.
    ///
    /// Empty values are treated as missing.
    pub fn from_properties(kind: ElementKind, properties: &HashMap<String, String>) -> Self {
        let get = |key: &str| {
            properties
                .get(key)
                .filter(|value| !value.is_empty())
                .cloned()
        };

        match kind {
            ElementKind::Parent => PomElement::Parent(Parent {
                group_id: get("groupId"),
                artifact_id: get("artifactId"),
                version: get("version"),
            }),
            ElementKind::Profile => PomElement::Profile(Profile { id: get("id") }),
            ElementKind::Extension => PomElement::Extension(Extension {
                group_id: get("groupId"),
                artifact_id: get("artifactId"),
                version: get("version"),
            }),
            ElementKind::Dependency => PomElement::Dependency(Dependency {
                group_id: get("groupId"),
                artifact_id: get("artifactId"),
                version: get("version"),
                dependency_type: get("type"),
                classifier: get("classifier"),
                scope: get("scope"),
            }),
            ElementKind::Exclusion => PomElement::Exclusion(Exclusion {
                group_id: get("groupId"),
                artifact_id: get("artifactId"),
            }),
            ElementKind::Plugin => PomElement::Plugin(Plugin {
                group_id: get("groupId"),
                artifact_id: get("artifactId"),
                version: get("version"),
            }),
        }
    }

    /// The kind of this element
    pub fn kind(&self) -> ElementKind {
        match self {
            PomElement::Parent(_) => ElementKind::Parent,
            PomElement::Profile(_) => ElementKind::Profile,
            PomElement::Extension(_) => ElementKind::Extension,
            PomElement::Dependency(_) => ElementKind::Dependency,
            PomElement::Exclusion(_) => ElementKind::Exclusion,
            PomElement::Plugin(_) => ElementKind::Plugin,
        }
    }

    /// Human-readable label, or `None` when identifying fields are missing
    pub fn describe(&self) -> Option<String> {
        match self {
            PomElement::Parent(parent) => {
                let group_id = parent.group_id.as_deref()?;
                let artifact_id = parent.artifact_id.as_deref()?;
                let version = parent.version.as_deref()?;
                Some(join_parts(&[Some(group_id), Some(artifact_id), Some(version)]))
            }
            PomElement::Profile(profile) => profile.id.clone(),
            PomElement::Extension(extension) => describe_build_artifact(
                extension.group_id.as_deref(),
                extension.artifact_id.as_deref(),
                extension.version.as_deref(),
            ),
            PomElement::Dependency(dependency) => {
                let group_id = dependency.group_id.as_deref()?;
                let artifact_id = dependency.artifact_id.as_deref()?;
                Some(join_parts(&[
                    Some(group_id),
                    Some(artifact_id),
                    dependency.dependency_type.as_deref(),
                    dependency.classifier.as_deref(),
                    dependency.version.as_deref(),
                    dependency.scope.as_deref(),
                ]))
            }
            PomElement::Exclusion(exclusion) => {
                let group_id = exclusion.group_id.as_deref()?;
                let artifact_id = exclusion.artifact_id.as_deref()?;
                Some(join_parts(&[Some(group_id), Some(artifact_id)]))
            }
            PomElement::Plugin(plugin) => describe_build_artifact(
                plugin.group_id.as_deref(),
                plugin.artifact_id.as_deref(),
                plugin.version.as_deref(),
            ),
        }
    }
}

/// Plugins and extensions may omit `groupId` (Maven supplies a default)
fn describe_build_artifact(
    group_id: Option<&str>,
    artifact_id: Option<&str>,
    version: Option<&str>,
) -> Option<String> {
    let artifact_id = artifact_id?;
    Some(join_parts(&[group_id, Some(artifact_id), version]))
}

/// Join the present, non-empty parts with [`PART_SEPARATOR`]
fn join_parts(parts: &[Option<&str>]) -> String {
    let mut label = String::new();
    for part in parts.iter().flatten().filter(|part| !part.is_empty()) {
        if !label.is_empty() {
            label.push(PART_SEPARATOR);
        }
        label.push_str(part);
    }
    label
}
