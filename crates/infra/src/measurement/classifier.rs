// crates/infra/src/measurement/classifier.rs
//! 1パスの行分類器
//!
//! 文法（行コメントのプレフィックス集合とブロックコメントの区切りペア列）だけを
//! 頼りに、物理行を空行/コメント/コードのいずれかに分類する。字句解析はしない。

mod line;
mod scan_state;
mod trace;

use cloc_lines_domain::{
    language::{BlockDelimiter, LanguageGrammar},
    model::{FileSummary, LineKind, LineTally},
    options::AnalysisOptions,
};
use cloc_lines_shared_kernel::FileName;
use memchr::memmem;

use self::line::PreparedLine;
pub use self::{
    scan_state::ScanState,
    trace::{LineTrace, TRACE_TARGET},
};

const SHEBANG: &str = "#!";

/// 1ファイル分の走査器。ファイルごとに作り直す。
#[derive(Debug, Clone)]
pub struct LineClassifier<'g> {
    grammar: &'g LanguageGrammar,
    options: AnalysisOptions,
    state: ScanState,
    first_line: bool,
    shebang_pending: bool,
    tally: LineTally,
}

/// 区切りペアの評価結果
enum DelimiterHit {
    Miss,
    Comment,
    /// 同じ行でブロックを閉じて開き直すコード行
    Code,
}

impl<'g> LineClassifier<'g> {
    pub fn new(grammar: &'g LanguageGrammar) -> Self {
        Self::with_options(grammar, AnalysisOptions::default())
    }

    pub fn with_options(grammar: &'g LanguageGrammar, options: AnalysisOptions) -> Self {
        Self {
            grammar,
            options,
            state: ScanState::Outside,
            first_line: true,
            shebang_pending: true,
            tally: LineTally::new(),
        }
    }

    /// 改行を除いた1物理行を分類し、カウンタに反映する
    pub fn classify(&mut self, raw: &str) -> LineKind {
        let prepared = PreparedLine::new(raw, self.first_line);
        self.first_line = false;

        let kind = self.step(&prepared);
        self.tally.record(kind);

        if self.options.debug_trace {
            self.emit_trace(kind, raw);
        }
        kind
    }

    #[inline]
    pub fn state(&self) -> ScanState {
        self.state
    }

    #[inline]
    pub fn tally(&self) -> &LineTally {
        &self.tally
    }

    /// 走査を終えて集計結果を確定する
    pub fn finish(self, name: impl Into<FileName>, language: impl Into<String>) -> FileSummary {
        FileSummary::from_tally(name, language, &self.tally)
    }

    fn step(&mut self, line: &PreparedLine<'_>) -> LineKind {
        let trimmed = line.trimmed();

        if trimmed.is_empty() {
            return LineKind::Blank;
        }

        if std::mem::take(&mut self.shebang_pending) && trimmed.starts_with(SHEBANG) {
            return LineKind::Code;
        }

        if !self.state.is_in_block() && self.grammar.line_comments().iter().any(|p| trimmed.starts_with(p.as_str())) {
            return LineKind::Comment;
        }

        if let DelimiterHit::Code = self.scan_delimiters(trimmed) {
            return LineKind::Code;
        }

        if let Some(idx) = self.state.active_delimiter() {
            self.continue_block(idx, trimmed);
            return LineKind::Comment;
        }

        self.tally.add_indent(line.indent_measure());
        LineKind::Code
    }

    /// ブロックコメントへの突入判定。ブロック内では開始に使ったペアだけを見る。
    fn scan_delimiters(&mut self, trimmed: &str) -> DelimiterHit {
        let grammar = self.grammar;
        let delimiters = grammar.block_comments();
        let (skip, take) = match self.state.active_delimiter() {
            Some(idx) => (idx, 1),
            None => (0, delimiters.len()),
        };

        for (idx, delimiter) in delimiters.iter().enumerate().skip(skip).take(take) {
            let (start, end) = (delimiter.start(), delimiter.end());
            // 開始トークンが空のペアは「ブロックコメントなし」を表す
            if start.is_empty() {
                continue;
            }

            if trimmed.starts_with(start) || trimmed.ends_with(end) {
                self.state = self.state.enter(idx);
                return DelimiterHit::Comment;
            }

            if opens_unclosed(trimmed, delimiter) {
                self.state = self.state.enter(idx);
                if !delimiter.is_symmetric() && (trimmed.ends_with(start) || trimmed.starts_with(end)) {
                    return DelimiterHit::Code;
                }
                return DelimiterHit::Comment;
            }
        }
        DelimiterHit::Miss
    }

    fn continue_block(&mut self, idx: usize, trimmed: &str) {
        let Some(delimiter) = self.grammar.block_comments().get(idx) else {
            self.state = ScanState::Outside;
            return;
        };

        if delimiter.is_symmetric() {
            let occurrences = count_occurrences(trimmed, delimiter.start());
            self.state = self.state.after_symmetric(occurrences);
        } else if trimmed.contains(delimiter.end()) {
            self.state = ScanState::Outside;
        }
    }

    fn emit_trace(&self, kind: LineKind, raw: &str) {
        let record = LineTrace {
            kind,
            code: self.tally.code(),
            comments: self.tally.comments(),
            blanks: self.tally.blanks(),
            in_block: self.state.is_in_block(),
            parity: self.state.parity(),
            text: raw,
        };
        log::debug!(target: TRACE_TARGET, "{record}");
    }
}

/// 行内で開始トークンが閉じられずに残るか
///
/// 開始で +1、終了で -1（0 未満にはしない）として左から数える。開始=終了の
/// ペアでは1回でも現れれば真。
fn opens_unclosed(line: &str, delimiter: &BlockDelimiter) -> bool {
    let (start, end) = (delimiter.start().as_bytes(), delimiter.end().as_bytes());
    if start == end {
        return memmem::find(line.as_bytes(), start).is_some();
    }

    let bytes = line.as_bytes();
    let mut depth = 0usize;
    let mut pos = 0;
    while pos < bytes.len() {
        let rest = &bytes[pos..];
        if rest.starts_with(start) {
            depth += 1;
            pos += start.len();
        } else if !end.is_empty() && rest.starts_with(end) {
            depth = depth.saturating_sub(1);
            pos += end.len();
        } else {
            pos += 1;
        }
    }
    depth != 0
}

fn count_occurrences(line: &str, token: &str) -> usize {
    memmem::find_iter(line.as_bytes(), token.as_bytes()).count()
}
