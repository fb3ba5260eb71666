// crates/domain/src/model/value_objects/tally.rs
use cloc_lines_shared_kernel::LineCount;

/// 走査中に積み上げるカウンタとインデント累計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineTally {
    code: LineCount,
    comments: LineCount,
    blanks: LineCount,
    indent: i64,
}

impl LineTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: super::LineKind) {
        match kind {
            super::LineKind::Blank => self.blanks.increment(),
            super::LineKind::Comment => self.comments.increment(),
            super::LineKind::Code => self.code.increment(),
        }
    }

    /// コード行のインデント量を加算する
    pub fn add_indent(&mut self, amount: i64) {
        self.indent = self.indent.saturating_add(amount);
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
    pub fn indent(&self) -> i64 {
        self.indent
    }

    pub fn total(&self) -> usize {
        self.code.value() + self.comments.value() + self.blanks.value()
    }

    /// インデント累計 / コード行数。コード行が 0 の場合は NaN になる（呼び出し側でガードする）。
    #[allow(clippy::cast_precision_loss)]
    pub fn complexity(&self) -> f64 {
        self.indent as f64 / self.code.value() as f64
    }
}
