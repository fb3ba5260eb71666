// crates/domain/src/options.rs
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use cloc_lines_shared_kernel::DomainError;

/// 行分類器の設定
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// 1行ごとの分類トレースを出す
    pub debug_trace: bool,
}

impl AnalysisOptions {
    pub fn with_debug_trace(mut self, enabled: bool) -> Self {
        self.debug_trace = enabled;
        self
    }
}

/// Output format options for the tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
    Xml,
}

/// 言語別集計表の並び順キー
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageSortKey {
    Name,
    Files,
    Blank,
    Comment,
    #[default]
    Code,
}

impl FromStr for LanguageSortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "files" => Ok(Self::Files),
            "blank" | "blanks" => Ok(Self::Blank),
            "comment" | "comments" => Ok(Self::Comment),
            "code" => Ok(Self::Code),
            _ => Err(DomainError::InvalidSortSpec { spec: s.to_string() }),
        }
    }
}
