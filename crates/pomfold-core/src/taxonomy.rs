//! Path-keyed registry of significant POM elements
//!
//! Maps the full slash-separated path of an element (root included, e.g.
//! `project/build/plugins/plugin`) to the child elements whose text is
//! captured as properties of that element.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Path separator used when joining element names
pub const PATH_SEPARATOR: char = '/';

const COORDINATES: &[&str] = &["groupId", "artifactId", "version"];
const DEPENDENCY_PROPERTIES: &[&str] = &[
    "groupId",
    "artifactId",
    "version",
    "type",
    "classifier",
    "scope",
];
const PROFILE_PROPERTIES: &[&str] = &["id"];

/// Registry of significant element paths
#[derive(Debug, Default)]
pub struct Taxonomy {
    entries: HashMap<String, &'static [&'static str]>,
}

impl Taxonomy {
    /// The process-wide taxonomy for the POM schema
    pub fn global() -> &'static Taxonomy {
        static TAXONOMY: OnceLock<Taxonomy> = OnceLock::new();
        TAXONOMY.get_or_init(Taxonomy::pom)
    }

    /// Build the POM taxonomy
    fn pom() -> Self {
        let mut taxonomy = Taxonomy::default();
        let root = "project";

        taxonomy.insert(format!("{root}/parent"), COORDINATES);
        taxonomy.add_model_base(root);

        let profile = format!("{root}/profiles/profile");
        taxonomy.insert(profile.clone(), PROFILE_PROPERTIES);
        taxonomy.add_model_base(&profile);

        taxonomy.insert(format!("{root}/build/extensions/extension"), COORDINATES);
        taxonomy
    }

    /// Sections shared by `project` and `project/profiles/profile`
    fn add_model_base(&mut self, prefix: &str) {
        self.add_dependencies(prefix);
        self.add_dependencies(&format!("{prefix}/dependencyManagement"));
        self.add_plugins(&format!("{prefix}/build"));
        self.add_plugins(&format!("{prefix}/build/pluginManagement"));
    }

    fn add_dependencies(&mut self, prefix: &str) {
        let dependency = format!("{prefix}/dependencies/dependency");
        self.insert(format!("{dependency}/exclusions/exclusion"), COORDINATES);
        self.insert(dependency, DEPENDENCY_PROPERTIES);
    }

    fn add_plugins(&mut self, prefix: &str) {
        let plugin = format!("{prefix}/plugins/plugin");
        self.add_dependencies(&plugin);
        self.insert(plugin, COORDINATES);
    }

    fn insert(&mut self, path: String, properties: &'static [&'static str]) {
        self.entries.insert(path, properties);
    }

    /// Expected child properties for the element at `path`, if significant
    pub fn lookup(&self, path: &str) -> Option<&'static [&'static str]> {
        self.entries.get(path).copied()
    }

    /// Whether the element at `path` is significant
    pub fn is_significant(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// All significant paths, in no particular order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of significant paths
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the taxonomy has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Join a parent path and a child element name
pub fn child_path(parent: Option<&str>, name: &str) -> String {
    match parent {
        Some(parent) => {
            let mut path = String::with_capacity(parent.len() + 1 + name.len());
            path.push_str(parent);
            path.push(PATH_SEPARATOR);
            path.push_str(name);
            path
        }
        None => name.to_string(),
    }
}
