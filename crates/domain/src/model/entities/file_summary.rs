// crates/domain/src/model/entities/file_summary.rs
use serde::Serialize;

use cloc_lines_shared_kernel::{FileName, LineCount};

use crate::model::LineTally;

/// 1ファイル分の集計結果
///
/// 走査完了後に [`FileSummary::from_tally`] で確定し、以降は変更しない。
/// 直列化は出力専用（NaN の複雑度は JSON では `null` になり、読み取り失敗と区別できない）。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileSummary {
    name: FileName,
    language: String,
    code: LineCount,
    comments: LineCount,
    blanks: LineCount,
    /// 読み取れなかったファイルでは `None`。コード行 0 の場合は NaN を含む `Some`。
    complexity: Option<f64>,
}

impl FileSummary {
    pub fn from_tally(name: impl Into<FileName>, language: impl Into<String>, tally: &LineTally) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
            code: tally.code(),
            comments: tally.comments(),
            blanks: tally.blanks(),
            complexity: Some(tally.complexity()),
        }
    }

    /// 開けなかったファイル用。名前と言語ラベル以外は全てゼロ。
    pub fn unreadable(name: impl Into<FileName>, language: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
            code: LineCount::ZERO,
            comments: LineCount::ZERO,
            blanks: LineCount::ZERO,
            complexity: None,
        }
    }

    #[inline]
    pub fn name(&self) -> &FileName {
        &self.name
    }

    #[inline]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[inline]
    pub fn code(&self) -> LineCount {
        self.code
    }

    #[inline]
    pub fn comments(&self) -> LineCount {
        self.comments
    }

    #[inline]
    pub fn blanks(&self) -> LineCount {
        self.blanks
    }

    #[inline]
    pub fn complexity(&self) -> Option<f64> {
        self.complexity
    }

    /// 有限な複雑度のみを返す（コード行 0 や読み取り失敗を除外）
    pub fn finite_complexity(&self) -> Option<f64> {
        self.complexity.filter(|c| c.is_finite())
    }

    pub fn total_lines(&self) -> usize {
        self.code.value() + self.comments.value() + self.blanks.value()
    }
}
