//! Folding range generation for POM documents
//!
//! Generates one LSP folding range per tagged element (parent, profiles,
//! extensions, dependencies, exclusions and plugins), using the element
//! label as the collapsed text.

use pomfold_core::{tag_lenient, StructuralRegion};
use tower_lsp::lsp_types::{FoldingRange, FoldingRangeKind};
use tracing::debug;

use super::line_index::LineIndex;
use crate::config::FoldingSettings;

/// Analyzer for generating folding ranges
pub struct FoldingAnalyzer;

impl FoldingAnalyzer {
    /// Generate folding ranges with default settings
    pub fn generate_ranges(text: &str) -> Vec<FoldingRange> {
        Self::generate_ranges_with(text, &FoldingSettings::default())
    }

    /// Generate folding ranges for the entire document
    pub fn generate_ranges_with(text: &str, settings: &FoldingSettings) -> Vec<FoldingRange> {
        let regions = tag_lenient(text);
        if regions.is_empty() {
            return Vec::new();
        }

        let lines = LineIndex::new(text);
        let ranges: Vec<FoldingRange> = regions
            .iter()
            .filter(|region| settings.folds(region.kind))
            .filter_map(|region| Self::to_range(region, &lines, settings))
            .collect();

        debug!(
            "{} region(s), {} folding range(s) over {} line(s)",
            regions.len(),
            ranges.len(),
            lines.line_count()
        );
        ranges
    }

    /// Convert one region, or `None` if it spans too few lines
    pub fn to_range(
        region: &StructuralRegion,
        lines: &LineIndex,
        settings: &FoldingSettings,
    ) -> Option<FoldingRange> {
        let start_line = lines.line_of(region.start);
        // `end` is exclusive; the closing `>` decides the last line
        let end_line = lines.line_of(region.end.saturating_sub(1));

        if end_line.saturating_sub(start_line) < settings.min_lines.max(1) {
            return None;
        }

        Some(FoldingRange {
            start_line,
            end_line,
            kind: Some(FoldingRangeKind::Region),
            start_character: None,
            end_character: None,
            collapsed_text: if settings.collapsed_text {
                region.label.clone()
            } else {
                None
            },
        })
    }
}
