// crates/domain/src/language/registry.rs
//! 言語 ID / 拡張子 / ファイル名から文法を引く登録表
//!
//! 起動時に一度だけ構築し、以降は読み取り専用で共有する。

use std::{
    collections::{HashMap, HashSet},
    path::Path,
    sync::OnceLock,
};

use cloc_lines_shared_kernel::{DomainError, DomainResult};

use super::{builtin, grammar::LanguageDefinition};

#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    definitions: Vec<LanguageDefinition>,
    by_id: HashMap<String, usize>,
    by_extension: HashMap<String, usize>,
    by_file_name: HashMap<String, usize>,
}

impl LanguageRegistry {
    /// 組み込み定義の登録表（プロセス内で共有）
    pub fn builtin() -> &'static Self {
        static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            // 組み込み表は重複 ID を含まない
            Self::index(builtin::definitions())
        })
    }

    /// 定義列から登録表を作る。ID の重複や空トークンはエラー。
    pub fn from_definitions(definitions: Vec<LanguageDefinition>) -> DomainResult<Self> {
        let mut seen = HashSet::new();
        for def in &definitions {
            def.validate()?;
            if !seen.insert(def.id.to_ascii_lowercase()) {
                return Err(DomainError::InvalidLanguageDefinition {
                    id: def.id.clone(),
                    reason: "duplicate language id".to_string(),
                });
            }
        }
        Ok(Self::index(definitions))
    }

    /// 追加定義を優先して合成した新しい登録表を返す
    ///
    /// 追加側と同じ ID の既存定義は置き換えられ、拡張子/ファイル名の衝突は追加側が勝つ。
    pub fn with_overrides(&self, extra: Vec<LanguageDefinition>) -> DomainResult<Self> {
        let overrides = Self::from_definitions(extra)?;
        let mut merged = overrides.definitions;
        merged.extend(
            self.definitions
                .iter()
                .filter(|def| !overrides.by_id.contains_key(&def.id.to_ascii_lowercase()))
                .cloned(),
        );
        Ok(Self::index(merged))
    }

    fn index(definitions: Vec<LanguageDefinition>) -> Self {
        let mut by_id = HashMap::new();
        let mut by_extension = HashMap::new();
        let mut by_file_name = HashMap::new();

        for (idx, def) in definitions.iter().enumerate() {
            by_id.entry(def.id.to_ascii_lowercase()).or_insert(idx);
            for ext in &def.extensions {
                by_extension.entry(normalize_extension(ext)).or_insert(idx);
            }
            for name in &def.file_names {
                by_file_name.entry(name.clone()).or_insert(idx);
            }
        }

        Self { definitions, by_id, by_extension, by_file_name }
    }

    pub fn get(&self, id: &str) -> Option<&LanguageDefinition> {
        self.by_id.get(&id.to_ascii_lowercase()).map(|&idx| &self.definitions[idx])
    }

    /// ID から引き、見つからなければエラー
    pub fn require(&self, id: &str) -> DomainResult<&LanguageDefinition> {
        self.get(id).ok_or_else(|| DomainError::UnknownLanguage { id: id.to_string() })
    }

    pub fn by_extension(&self, ext: &str) -> Option<&LanguageDefinition> {
        self.by_extension.get(&normalize_extension(ext)).map(|&idx| &self.definitions[idx])
    }

    pub fn by_file_name(&self, name: &str) -> Option<&LanguageDefinition> {
        self.by_file_name.get(name).map(|&idx| &self.definitions[idx])
    }

    /// パスから言語を推定する（ファイル名一致が拡張子より優先）
    pub fn detect(&self, path: &Path) -> Option<&LanguageDefinition> {
        let file_name = path.file_name().and_then(|n| n.to_str());
        if let Some(def) = file_name.and_then(|n| self.by_file_name(n)) {
            return Some(def);
        }
        path.extension().and_then(|e| e.to_str()).and_then(|e| self.by_extension(e))
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageDefinition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_ascii_lowercase()
}
