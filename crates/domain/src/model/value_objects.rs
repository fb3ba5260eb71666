// crates/domain/src/model/value_objects.rs
pub mod line_kind;
pub mod tally;

pub use line_kind::LineKind;
pub use tally::LineTally;
