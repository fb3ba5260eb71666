// crates/infra/src/measurement.rs
pub mod analyzer;
pub mod batch;
pub mod classifier;

pub use analyzer::{FileAnalyzer, LineBuffer, analyze_reader};
pub use batch::BatchAnalyzer;
pub use classifier::{LineClassifier, LineTrace, ScanState};
