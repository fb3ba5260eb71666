// crates/infra/src/measurement/batch.rs
//! 複数ファイルの一括計測

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use cloc_lines_domain::{model::FileSummary, options::AnalysisOptions};
#[cfg(feature = "parallel")]
use cloc_lines_shared_kernel::InfrastructureError;
use cloc_lines_ports::{analysis::SourceAnalyzer, filesystem::SourceEntry};
use cloc_lines_shared_kernel::Result;

use super::analyzer::{FileAnalyzer, LineBuffer};

/// これ未満の件数ではスレッドプールを作らない
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 10;

/// 1ファイル1分類器で計測し、入力順に結果を返す
pub struct BatchAnalyzer<'a> {
    files: FileAnalyzer<'a>,
    jobs: usize,
}

impl<'a> BatchAnalyzer<'a> {
    pub fn new(files: FileAnalyzer<'a>, jobs: usize) -> Self {
        Self { files, jobs: jobs.max(1) }
    }

    #[inline]
    pub fn jobs(&self) -> usize {
        self.jobs
    }

    fn analyze_sequential(&self, entries: &[SourceEntry], options: &AnalysisOptions) -> Vec<FileSummary> {
        let mut buffer = LineBuffer::new();
        entries.iter().map(|entry| self.files.analyze_entry(entry, options, &mut buffer)).collect()
    }

    #[cfg(feature = "parallel")]
    fn analyze_parallel(&self, entries: &[SourceEntry], options: &AnalysisOptions) -> Result<Vec<FileSummary>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| InfrastructureError::ThreadPoolCreation { details: e.to_string() })?;

        Ok(pool.install(|| {
            entries
                .par_iter()
                .map_init(LineBuffer::new, |buffer, entry| self.files.analyze_entry(entry, options, buffer))
                .collect()
        }))
    }
}

impl SourceAnalyzer for BatchAnalyzer<'_> {
    #[cfg(feature = "parallel")]
    fn analyze_batch(&self, entries: &[SourceEntry], options: &AnalysisOptions) -> Result<Vec<FileSummary>> {
        log::debug!("analyzing {} files with {} jobs", entries.len(), self.jobs);
        if entries.len() < PARALLEL_THRESHOLD || self.jobs == 1 {
            return Ok(self.analyze_sequential(entries, options));
        }
        self.analyze_parallel(entries, options)
    }

    #[cfg(not(feature = "parallel"))]
    fn analyze_batch(&self, entries: &[SourceEntry], options: &AnalysisOptions) -> Result<Vec<FileSummary>> {
        log::debug!("analyzing {} files sequentially", entries.len());
        Ok(self.analyze_sequential(entries, options))
    }
}
