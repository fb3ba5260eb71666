// crates/usecase/src/orchestrator.rs
use cloc_lines_domain::{
    analytics::{Totals, aggregate_by_language, sort_languages},
    model::FileSummaryCollection,
};
use cloc_lines_ports::{
    analysis::SourceAnalyzer,
    filesystem::{FileEnumerationPlan, FileEnumerator},
};
use cloc_lines_shared_kernel::{ApplicationError, Result};

use crate::dto::{AnalysisReport, AnalysisRequest};

pub struct AnalyzePaths<'a> {
    enumerator: &'a dyn FileEnumerator,
    analyzer: &'a dyn SourceAnalyzer,
}

impl<'a> AnalyzePaths<'a> {
    pub fn new(enumerator: &'a dyn FileEnumerator, analyzer: &'a dyn SourceAnalyzer) -> Self {
        Self { enumerator, analyzer }
    }

    pub fn run(&self, plan: &FileEnumerationPlan, request: &AnalysisRequest) -> Result<AnalysisReport> {
        let entries = self.enumerator.collect(plan).map_err(|e| ApplicationError::FileCollectionFailed {
            reason: format!("{} roots", plan.roots.len()),
            source: Some(Box::new(e)),
        })?;

        let summaries = self.analyzer.analyze_batch(&entries, &request.options).map_err(|e| {
            ApplicationError::MeasurementFailed { reason: format!("{} files", entries.len()), source: Some(Box::new(e)) }
        })?;

        let files: FileSummaryCollection = summaries.into_iter().collect();
        let mut languages = aggregate_by_language(&files);
        sort_languages(&mut languages, request.sort);
        let totals = Totals::from_summaries(&files);

        log::debug!("analyzed {} files in {} languages", files.len(), languages.len());
        Ok(AnalysisReport { files, languages, totals })
    }
}
