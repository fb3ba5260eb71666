// crates/infra/src/measurement/classifier/line.rs
//! 分類前の行の前処理

use std::borrow::Cow;

/// タブを置き換える空白
const TAB_AS_SPACES: &str = "    ";
/// インデント量の計算に使う論理インデント幅
const LOGIC_INDENT_SIZE: usize = 4;
const BYTE_ORDER_MARK: char = '\u{feff}';

/// タブ展開済みの行と、比較に使うトリム済みの形
pub(super) struct PreparedLine<'a> {
    expanded: Cow<'a, str>,
}

impl<'a> PreparedLine<'a> {
    /// `first_line` のときだけ先頭の BOM を取り除く
    pub(super) fn new(raw: &'a str, first_line: bool) -> Self {
        let raw = if first_line { raw.strip_prefix(BYTE_ORDER_MARK).unwrap_or(raw) } else { raw };
        let expanded = if raw.contains('\t') { Cow::Owned(raw.replace('\t', TAB_AS_SPACES)) } else { Cow::Borrowed(raw) };
        Self { expanded }
    }

    #[inline]
    pub(super) fn trimmed(&self) -> &str {
        self.expanded.trim()
    }

    /// 行全体の長さ - トリム後の長さ / 4（いずれもバイト長）
    #[allow(clippy::cast_possible_wrap)]
    pub(super) fn indent_measure(&self) -> i64 {
        self.expanded.len() as i64 - (self.trimmed().len() / LOGIC_INDENT_SIZE) as i64
    }
}
