//! pomfold-core - structural regions for Maven POM documents
//!
//! Scans a `pom.xml` once and reports the elements an editor should offer to
//! fold: the parent, profiles, build extensions, dependencies, exclusions and
//! plugins. Each region carries its byte span and a label such as
//! `org.junit.jupiter:junit-jupiter:5.10.0:test`.
//!
//! # Example
//!
//! ```
//! use pomfold_core::{tag, ElementKind};
//!
//! let pom = r#"<project>
//!   <build>
//!     <plugins>
//!       <plugin>
//!         <groupId>org.apache.maven.plugins</groupId>
//!         <artifactId>maven-surefire-plugin</artifactId>
//!       </plugin>
//!     </plugins>
//!   </build>
//! </project>"#;
//!
//! let regions = tag(pom).unwrap();
//! assert_eq!(regions[0].kind, ElementKind::Plugin);
//! assert_eq!(
//!     regions[0].label.as_deref(),
//!     Some("org.apache.maven.plugins:maven-surefire-plugin")
//! );
//! ```

pub mod element;
pub mod error;
pub mod events;
pub mod region;
pub mod tagger;
pub mod taxonomy;

// Re-export main types and functions
pub use element::{
    Dependency, ElementKind, Exclusion, Extension, Parent, Plugin, PomElement, Profile,
};
pub use error::{ParseError, Result};
pub use events::{ScanEvent, ScanEvents};
pub use region::StructuralRegion;
pub use tagger::{tag, tag_lenient, StructuralTagger};
pub use taxonomy::Taxonomy;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
