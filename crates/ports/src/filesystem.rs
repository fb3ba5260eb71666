// crates/ports/src/filesystem.rs
use std::path::PathBuf;

use cloc_lines_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Input parameters controlling file enumeration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileEnumerationPlan {
    pub roots: Vec<PathBuf>,
    pub follow_links: bool,
    pub include_hidden: bool,
    /// Language ids to keep; empty keeps every known language.
    pub include_langs: Vec<String>,
    pub exclude_exts: Vec<String>,
    /// File-name regular expressions.
    pub match_file: Option<String>,
    pub not_match_file: Option<String>,
    /// Directory-name regular expressions. `match_dir` keeps a file when any
    /// directory between the root and the file matches; `not_match_dir` prunes.
    pub match_dir: Option<String>,
    pub not_match_dir: Option<String>,
}

/// A file selected for analysis together with the language it was detected as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEntry {
    pub path: PathBuf,
    pub language_id: String,
}

impl SourceEntry {
    pub fn new(path: impl Into<PathBuf>, language_id: impl Into<String>) -> Self {
        Self { path: path.into(), language_id: language_id.into() }
    }

    /// Name reported in summaries: the path exactly as enumerated.
    pub fn display_name(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

/// Port for enumerating source files.
pub trait FileEnumerator: Send + Sync {
    fn collect(&self, plan: &FileEnumerationPlan) -> Result<Vec<SourceEntry>>;
}
