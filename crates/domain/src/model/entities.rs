// crates/domain/src/model/entities.rs
pub mod collection;
pub mod file_summary;

pub use collection::{FileSummaryCollection, compare_summaries};
pub use file_summary::FileSummary;
