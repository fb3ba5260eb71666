// crates/domain/src/model.rs
pub mod entities;
pub mod value_objects;

pub use entities::{FileSummary, FileSummaryCollection, compare_summaries};
pub use value_objects::{LineKind, LineTally};
