// crates/domain/src/analytics.rs
pub mod aggregate;
pub mod sort;

pub use aggregate::{LanguageTotals, Totals, aggregate_by_language};
pub use sort::sort_languages;
