// crates/infra/src/persistence/definitions.rs
//! 追加の言語定義ファイル（YAML / JSON）の読み込み

use std::path::Path;

use serde::Deserialize;

use cloc_lines_domain::language::LanguageDefinition;
use cloc_lines_shared_kernel::{ErrorContext, InfrastructureError, Result};

use super::file_reader::FileReader;

#[derive(Debug, Deserialize)]
struct DefinitionFile {
    #[serde(default)]
    languages: Vec<LanguageDefinition>,
}

/// `languages:` 配下の定義を読み込み、1件ずつ検証して返す
///
/// 拡張子が `yml` / `yaml` なら YAML、それ以外は JSON として解釈する。
pub fn load_definitions(path: &Path) -> Result<Vec<LanguageDefinition>> {
    let text = FileReader::read_to_string(path)
        .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;

    let parsed = if is_yaml(path) { parse_yaml(&text) } else { serde_json::from_str::<DefinitionFile>(&text).map_err(Into::into) };
    let file = parsed.with_context(|| format!("language definitions in {}", path.display()))?;

    for definition in &file.languages {
        definition.validate()?;
    }
    log::debug!("loaded {} language definitions from {}", file.languages.len(), path.display());
    Ok(file.languages)
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yml") || e.eq_ignore_ascii_case("yaml"))
}

#[cfg(feature = "yaml")]
fn parse_yaml(text: &str) -> Result<DefinitionFile> {
    Ok(serde_yaml::from_str(text)?)
}

#[cfg(not(feature = "yaml"))]
fn parse_yaml(_text: &str) -> Result<DefinitionFile> {
    Err(InfrastructureError::SerializationError {
        format: "YAML".to_string(),
        details: "built without the `yaml` feature".to_string(),
    }
    .into())
}
