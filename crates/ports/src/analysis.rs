// crates/ports/src/analysis.rs
use cloc_lines_domain::{model::FileSummary, options::AnalysisOptions};
use cloc_lines_shared_kernel::Result;

use crate::filesystem::SourceEntry;

/// Port for classifying the lines of many files.
///
/// Returns one summary per entry, in entry order. A file that cannot be read
/// yields a zero summary rather than an error; `Err` is reserved for failures
/// of the batch machinery itself.
pub trait SourceAnalyzer: Send + Sync {
    fn analyze_batch(&self, entries: &[SourceEntry], options: &AnalysisOptions) -> Result<Vec<FileSummary>>;
}
