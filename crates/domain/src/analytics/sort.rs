// crates/domain/src/analytics/sort.rs
use std::cmp::Ordering;

use crate::{analytics::LanguageTotals, options::LanguageSortKey};

impl LanguageSortKey {
    /// 数値キーは降順、名前は昇順。同値は言語名で決める。
    pub fn compare(self, a: &LanguageTotals, b: &LanguageTotals) -> Ordering {
        let primary = match self {
            Self::Name => Ordering::Equal,
            Self::Files => b.files.cmp(&a.files),
            Self::Blank => b.blanks.cmp(&a.blanks),
            Self::Comment => b.comments.cmp(&a.comments),
            Self::Code => b.code.cmp(&a.code),
        };
        primary.then_with(|| a.language.cmp(&b.language))
    }
}

/// 言語別集計を指定キーで並べ替える（インプレース）
pub fn sort_languages(languages: &mut [LanguageTotals], key: LanguageSortKey) {
    languages.sort_by(|a, b| key.compare(a, b));
}
