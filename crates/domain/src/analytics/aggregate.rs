// crates/domain/src/analytics/aggregate.rs
use std::collections::BTreeMap;

use serde::Serialize;

use cloc_lines_shared_kernel::{FileCount, LineCount};

use crate::model::FileSummary;

/// 1言語分の合計
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LanguageTotals {
    pub language: String,
    pub files: FileCount,
    pub blanks: LineCount,
    pub comments: LineCount,
    pub code: LineCount,
}

impl LanguageTotals {
    fn new(language: String) -> Self {
        Self { language, ..Self::default() }
    }

    fn add(&mut self, summary: &FileSummary) {
        self.files.increment();
        self.blanks += summary.blanks();
        self.comments += summary.comments();
        self.code += summary.code();
    }
}

/// 全ファイルの合計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub files: FileCount,
    pub blanks: LineCount,
    pub comments: LineCount,
    pub code: LineCount,
}

impl Totals {
    pub fn from_summaries<'a, I>(summaries: I) -> Self
    where
        I: IntoIterator<Item = &'a FileSummary>,
    {
        summaries.into_iter().fold(Self::default(), |mut acc, s| {
            acc.files.increment();
            acc.blanks += s.blanks();
            acc.comments += s.comments();
            acc.code += s.code();
            acc
        })
    }

    pub fn from_languages(languages: &[LanguageTotals]) -> Self {
        languages.iter().fold(Self::default(), |mut acc, l| {
            acc.files += l.files;
            acc.blanks += l.blanks;
            acc.comments += l.comments;
            acc.code += l.code;
            acc
        })
    }
}

/// 言語ラベルごとに集計する（読み取り失敗のファイルもファイル数に含める）
///
/// 戻り値は言語名の昇順。表示順は [`super::sort_languages`] で決める。
pub fn aggregate_by_language<'a, I>(summaries: I) -> Vec<LanguageTotals>
where
    I: IntoIterator<Item = &'a FileSummary>,
{
    let mut map: BTreeMap<&str, LanguageTotals> = BTreeMap::new();
    for summary in summaries {
        map.entry(summary.language())
            .or_insert_with(|| LanguageTotals::new(summary.language().to_string()))
            .add(summary);
    }
    map.into_values().collect()
}
