// crates/infra/src/persistence.rs
pub mod definitions;
pub mod file_reader;

pub use definitions::load_definitions;
pub use file_reader::{FileReader, FsSourceOpener};
