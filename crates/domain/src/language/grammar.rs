// crates/domain/src/language/grammar.rs
use serde::{Deserialize, Serialize};

use cloc_lines_shared_kernel::{DomainError, DomainResult};

/// ブロックコメントの開始/終了トークン
///
/// `start == end` も許容する（Python の `"""` など）。この場合は出現回数の
/// 偶奇で開閉を判定する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockDelimiter {
    start: String,
    end: String,
}

impl BlockDelimiter {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self { start: start.into(), end: end.into() }
    }

    #[inline]
    pub fn start(&self) -> &str {
        &self.start
    }

    #[inline]
    pub fn end(&self) -> &str {
        &self.end
    }

    /// 開始トークンと終了トークンが同一か
    #[inline]
    pub fn is_symmetric(&self) -> bool {
        self.start == self.end
    }
}

impl<S: Into<String>, E: Into<String>> From<(S, E)> for BlockDelimiter {
    fn from((start, end): (S, E)) -> Self {
        Self::new(start, end)
    }
}

/// 1言語分のコメント構文
///
/// 行コメントのプレフィックス集合と、ブロックコメントの区切りペア列を持つ。
/// どちらも順序付きで、先にマッチしたものが採用される。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageGrammar {
    #[serde(default)]
    line_comments: Vec<String>,
    #[serde(default)]
    block_comments: Vec<BlockDelimiter>,
}

impl LanguageGrammar {
    pub fn new(line_comments: Vec<String>, block_comments: Vec<BlockDelimiter>) -> Self {
        Self { line_comments, block_comments }
    }

    /// コメント構文を持たない言語（全ての非空行がコード）
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn with_line_comment(mut self, prefix: impl Into<String>) -> Self {
        self.line_comments.push(prefix.into());
        self
    }

    pub fn with_block_comment(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.block_comments.push(BlockDelimiter::new(start, end));
        self
    }

    #[inline]
    pub fn line_comments(&self) -> &[String] {
        &self.line_comments
    }

    #[inline]
    pub fn block_comments(&self) -> &[BlockDelimiter] {
        &self.block_comments
    }

    /// 空文字のトークンは全行にマッチしてしまうため拒否する
    pub fn validate(&self, id: &str) -> DomainResult<()> {
        if self.line_comments.iter().any(String::is_empty) {
            return Err(DomainError::InvalidLanguageDefinition {
                id: id.to_string(),
                reason: "empty line comment prefix".to_string(),
            });
        }
        if self.block_comments.iter().any(|d| d.start.is_empty() || d.end.is_empty()) {
            return Err(DomainError::InvalidLanguageDefinition {
                id: id.to_string(),
                reason: "empty block comment delimiter".to_string(),
            });
        }
        Ok(())
    }
}

/// 登録表の1エントリ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageDefinition {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub file_names: Vec<String>,
    #[serde(flatten)]
    pub grammar: LanguageGrammar,
}

impl LanguageDefinition {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, grammar: LanguageGrammar) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            extensions: Vec::new(),
            file_names: Vec::new(),
            grammar,
        }
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions.extend(extensions.into_iter().map(Into::into));
        self
    }

    pub fn with_file_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file_names.extend(names.into_iter().map(Into::into));
        self
    }

    /// 表示名（未設定なら id）
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() { &self.id } else { &self.display_name }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.id.trim().is_empty() {
            return Err(DomainError::InvalidLanguageDefinition {
                id: self.id.clone(),
                reason: "language id must not be empty".to_string(),
            });
        }
        self.grammar.validate(&self.id)
    }
}
