// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod file_name;

pub use counts::{FileCount, LineCount};
pub use file_name::FileName;
