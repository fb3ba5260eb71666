// crates/ports/src/source.rs
use std::io::{self, Read};

/// Port for turning a named resource into a readable byte stream.
///
/// Implementations report acquisition failures as `io::Error`; callers decide
/// whether that is fatal.
pub trait SourceOpener: Send + Sync {
    fn open(&self, name: &str) -> io::Result<Box<dyn Read + Send>>;
}
