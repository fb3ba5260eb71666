// crates/usecase/src/dto.rs
use serde::Serialize;

use cloc_lines_domain::{
    analytics::{LanguageTotals, Totals},
    model::FileSummaryCollection,
    options::{AnalysisOptions, LanguageSortKey},
};

/// Per-run settings that are not part of file enumeration.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisRequest {
    pub options: AnalysisOptions,
    pub sort: LanguageSortKey,
}

/// Result of one run: per-file summaries in presentation order plus totals.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub files: FileSummaryCollection,
    pub languages: Vec<LanguageTotals>,
    pub totals: Totals,
}
