// crates/domain/src/model/entities/collection.rs
use std::cmp::Ordering;

use serde::Serialize;

use super::FileSummary;

/// コード行数の降順、同数ならファイル名の昇順
pub fn compare_summaries(a: &FileSummary, b: &FileSummary) -> Ordering {
    b.code().cmp(&a.code()).then_with(|| a.name().cmp(b.name()))
}

/// 常に [`compare_summaries`] の順序を保つファイル集計の列
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FileSummaryCollection {
    summaries: Vec<FileSummary>,
}

impl FileSummaryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 整列位置に挿入する
    pub fn insert(&mut self, summary: FileSummary) {
        let idx = self
            .summaries
            .partition_point(|existing| compare_summaries(existing, &summary) != Ordering::Greater);
        self.summaries.insert(idx, summary);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileSummary> {
        self.summaries.iter()
    }

    pub fn as_slice(&self) -> &[FileSummary] {
        &self.summaries
    }

    pub fn into_vec(self) -> Vec<FileSummary> {
        self.summaries
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

impl FromIterator<FileSummary> for FileSummaryCollection {
    fn from_iter<I: IntoIterator<Item = FileSummary>>(iter: I) -> Self {
        let mut summaries: Vec<_> = iter.into_iter().collect();
        summaries.sort_by(compare_summaries);
        Self { summaries }
    }
}

impl Extend<FileSummary> for FileSummaryCollection {
    fn extend<I: IntoIterator<Item = FileSummary>>(&mut self, iter: I) {
        self.summaries.extend(iter);
        self.summaries.sort_by(compare_summaries);
    }
}

impl<'a> IntoIterator for &'a FileSummaryCollection {
    type Item = &'a FileSummary;
    type IntoIter = std::slice::Iter<'a, FileSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.summaries.iter()
    }
}

impl IntoIterator for FileSummaryCollection {
    type Item = FileSummary;
    type IntoIter = std::vec::IntoIter<FileSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.summaries.into_iter()
    }
}
