// crates/infra/src/measurement/classifier/trace.rs
use std::fmt;

use serde::Serialize;

use cloc_lines_domain::model::LineKind;
use cloc_lines_shared_kernel::LineCount;

/// トレース出力の log ターゲット
pub const TRACE_TARGET: &str = "cloc_lines::trace";

/// 1行分の分類トレース
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineTrace<'a> {
    pub kind: LineKind,
    pub code: LineCount,
    pub comments: LineCount,
    pub blanks: LineCount,
    pub in_block: bool,
    pub parity: bool,
    pub text: &'a str,
}

impl fmt::Display for LineTrace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},cd:{},cm:{},bk:{},iscm:{},iscms:{}] {}",
            self.kind, self.code, self.comments, self.blanks, self.in_block, self.parity, self.text
        )
    }
}
