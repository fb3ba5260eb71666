// src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum, ValueHint};
use cloc_lines_domain::options::{LanguageSortKey, OutputFormat};

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Table,
    Json,
    Yaml,
    Xml,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Yaml => OutputFormat::Yaml,
            CliOutputFormat::Xml => OutputFormat::Xml,
        }
    }
}

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(name = "cloc_lines", version = crate::VERSION, about = "ソースコードの空行/コメント行/コード行の集計ツール")]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 走査するファイルまたはディレクトリ
    #[arg(value_hint = ValueHint::AnyPath, default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// 言語別ではなくファイル単位で出力
    #[arg(long, help_heading = "出力")]
    pub by_file: bool,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// 言語別集計の並び順 (name, files, blank, comment, code)
    #[arg(long, default_value = "code", help_heading = "出力")]
    pub sort: LanguageSortKey,

    /// 集計する言語 ID（カンマ区切り/複数指定可, 例: rust,go）
    #[arg(long, value_delimiter = ',', help_heading = "フィルタ")]
    pub include_lang: Vec<String>,

    /// 除外する拡張子（カンマ区切り/複数指定可）
    #[arg(long, value_delimiter = ',', help_heading = "フィルタ")]
    pub exclude_ext: Vec<String>,

    /// ファイル名がこの正規表現に一致するものだけを含める
    #[arg(long = "match", value_name = "REGEX", help_heading = "フィルタ")]
    pub match_file: Option<String>,

    /// ファイル名がこの正規表現に一致するものを除外
    #[arg(long = "not-match", value_name = "REGEX", help_heading = "フィルタ")]
    pub not_match_file: Option<String>,

    /// ディレクトリ名がこの正規表現に一致する配下だけを含める
    #[arg(long, value_name = "REGEX", help_heading = "フィルタ")]
    pub match_dir: Option<String>,

    /// ディレクトリ名がこの正規表現に一致するものは降下しない
    #[arg(long, value_name = "REGEX", help_heading = "フィルタ")]
    pub not_match_dir: Option<String>,

    /// 隠しファイル/ディレクトリも走査
    #[arg(long, help_heading = "走査/入力")]
    pub hidden: bool,

    /// シンボリックリンクをたどる
    #[arg(long, help_heading = "走査/入力")]
    pub follow: bool,

    /// 追加の言語定義ファイル (YAML / JSON)
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "走査/入力")]
    pub definitions: Option<PathBuf>,

    /// 並列ワーカー数（既定: CPU 数）
    #[arg(long, short = 'j', help_heading = "実行")]
    pub jobs: Option<usize>,

    /// 対応言語の一覧を表示して終了
    #[arg(long, help_heading = "実行")]
    pub show_lang: bool,

    /// 1行ごとの分類トレースを標準エラーに出す
    #[arg(long, help_heading = "実行")]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_filters_and_defaults() {
        let args = Args::try_parse_from([
            "cloc_lines",
            "--include-lang",
            "rust,go",
            "--exclude-ext",
            "md",
            "--match",
            "\\.rs$",
            "--sort",
            "files",
            "src",
        ])
        .expect("valid arguments");

        assert_eq!(args.paths, [PathBuf::from("src")]);
        assert_eq!(args.include_lang, ["rust", "go"]);
        assert_eq!(args.exclude_ext, ["md"]);
        assert_eq!(args.match_file.as_deref(), Some("\\.rs$"));
        assert_eq!(args.sort, LanguageSortKey::Files);
        assert!(matches!(args.format, CliOutputFormat::Table));

        let args = Args::try_parse_from(["cloc_lines"]).expect("defaults");
        assert_eq!(args.paths, [PathBuf::from(".")]);
        assert_eq!(args.sort, LanguageSortKey::Code);
    }

    #[test]
    fn rejects_unknown_sort_key() {
        assert!(Args::try_parse_from(["cloc_lines", "--sort", "size"]).is_err());
    }
}
