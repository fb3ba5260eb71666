// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::{self, File},
    io::{self, Read},
    path::Path,
};

use cloc_lines_ports::source::SourceOpener;

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`. Directories are rejected up front instead of
    /// failing on the first read.
    pub fn open(path: &Path) -> io::Result<File> {
        let file = File::open(path)?;
        if file.metadata()?.is_dir() {
            return Err(io::Error::new(io::ErrorKind::IsADirectory, format!("{} is a directory", path.display())));
        }
        Ok(file)
    }

    /// Read the entire file as UTF-8 text.
    pub fn read_to_string(path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

/// Opens summary names as local filesystem paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSourceOpener;

impl SourceOpener for FsSourceOpener {
    fn open(&self, name: &str) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(FileReader::open(Path::new(name))?))
    }
}
