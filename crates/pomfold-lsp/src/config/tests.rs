//! Tests for the configuration engine

use super::*;
use pomfold_core::ElementKind;
use tower_lsp::lsp_types::Url;

// ==================== SETTINGS PARSING TESTS ====================

mod parsing_tests {
    use super::*;

    /// Test 1: Load configuration from TOML
    #[test]
    fn test_load_config_from_toml() {
        let toml = r#"
[documents]
file_names = ["pom.xml", "pom.template.xml"]

[folding]
collapsed_text = false
min_lines = 3
exclude = ["exclusion", "profile"]
"#;

        let settings = Settings::from_toml_str(toml).unwrap();

        assert_eq!(settings.documents.file_names.len(), 2);
        assert!(!settings.folding.collapsed_text);
        assert_eq!(settings.folding.min_lines, 3);
        assert!(!settings.folding.folds(ElementKind::Exclusion));
        assert!(!settings.folding.folds(ElementKind::Profile));
        assert!(settings.folding.folds(ElementKind::Dependency));
    }

    /// Test 2: Missing sections fall back to defaults
    #[test]
    fn test_partial_config() {
        let toml = r#"
[folding]
min_lines = 0
"#;

        let settings = Settings::from_toml_str(toml).unwrap();

        assert_eq!(settings.documents, DocumentSettings::default());
        assert!(settings.folding.collapsed_text);
        assert_eq!(settings.folding.min_lines, 0);
    }

    /// Test 3: Empty file is the default configuration
    #[test]
    fn test_empty_config() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    /// Test 4: Unknown element kinds are rejected
    #[test]
    fn test_invalid_kind() {
        let toml = r#"
[folding]
exclude = ["module"]
"#;

        assert!(Settings::from_toml_str(toml).is_err());
    }

    /// Test 5: Invalid TOML is rejected
    #[test]
    fn test_invalid_toml() {
        assert!(Settings::from_toml_str("[folding\nmin_lines = ").is_err());
    }
}

// ==================== FILE LOADING TESTS ====================

mod loading_tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_workspace_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[folding]\ncollapsed_text = false\n",
        )
        .unwrap();

        let settings = Settings::load(dir.path()).unwrap();
        assert!(!settings.folding.collapsed_text);
    }

    #[test]
    fn test_load_reports_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "min_lines = [").unwrap();

        let err = Settings::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}

// ==================== DOCUMENT SELECTION TESTS ====================

mod selection_tests {
    use super::*;

    #[test]
    fn test_default_matches_pom() {
        let documents = DocumentSettings::default();
        assert!(documents.matches(&Url::parse("file:///work/app/pom.xml").unwrap()));
        assert!(!documents.matches(&Url::parse("file:///work/app/web.xml").unwrap()));
        assert!(!documents.matches(&Url::parse("file:///work/app/pom.xml.bak").unwrap()));
    }

    #[test]
    fn test_custom_file_names() {
        let documents = DocumentSettings {
            file_names: vec![".flattened-pom.xml".to_string()],
        };
        assert!(documents.matches(&Url::parse("file:///a/.flattened-pom.xml").unwrap()));
        assert!(!documents.matches(&Url::parse("file:///a/pom.xml").unwrap()));
    }

    #[test]
    fn test_untitled_document() {
        let documents = DocumentSettings::default();
        assert!(!documents.matches(&Url::parse("untitled:Untitled-1").unwrap()));
    }
}
