// crates/domain/src/model/value_objects/line_kind.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// 1行の分類結果。全ての物理行はこのいずれか1つに分類される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Blank,
    Comment,
    Code,
}

impl LineKind {
    /// トレース出力用の4文字ラベル
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blank => "BLNK",
            Self::Comment => "COMM",
            Self::Code => "CODE",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
