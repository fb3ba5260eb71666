// src/presentation.rs
//! 集計結果の出力（表 / JSON / YAML / XML）

use std::io::Write;

use serde::Serialize;

use cloc_lines_domain::{
    analytics::{LanguageTotals, Totals},
    language::LanguageRegistry,
    model::FileSummaryCollection,
    options::OutputFormat,
};
use cloc_lines_shared_kernel::{InfrastructureError, Result};
use cloc_lines_usecase::AnalysisReport;

const ROW_WIDTH: usize = 79;
const NAME_WIDTH: usize = 27;
const FILES_WIDTH: usize = 6;
const COUNT_WIDTH: usize = 14;

#[derive(Serialize)]
struct LanguageView<'a> {
    languages: &'a [LanguageTotals],
    total: &'a Totals,
}

#[derive(Serialize)]
struct FileView<'a> {
    files: &'a FileSummaryCollection,
    total: &'a Totals,
}

/// cloc 互換の XML（`<results>` 直下に `files` か `languages` のどちらか一方）
#[derive(Serialize)]
struct XmlReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    files: Option<XmlFiles<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    languages: Option<XmlLanguages<'a>>,
}

#[derive(Serialize)]
struct XmlFiles<'a> {
    file: Vec<XmlFile<'a>>,
    total: XmlTotal,
}

#[derive(Serialize)]
struct XmlFile<'a> {
    #[serde(rename = "@name")]
    name: &'a str,
    #[serde(rename = "@blank")]
    blank: usize,
    #[serde(rename = "@comment")]
    comment: usize,
    #[serde(rename = "@code")]
    code: usize,
    #[serde(rename = "@complexity", skip_serializing_if = "Option::is_none")]
    complexity: Option<f64>,
    #[serde(rename = "@language")]
    language: &'a str,
}

#[derive(Serialize)]
struct XmlLanguages<'a> {
    language: Vec<XmlLanguage<'a>>,
    total: XmlTotal,
}

#[derive(Serialize)]
struct XmlLanguage<'a> {
    #[serde(rename = "@name")]
    name: &'a str,
    #[serde(rename = "@files_count")]
    files_count: usize,
    #[serde(rename = "@blank")]
    blank: usize,
    #[serde(rename = "@comment")]
    comment: usize,
    #[serde(rename = "@code")]
    code: usize,
}

#[derive(Serialize)]
struct XmlTotal {
    #[serde(rename = "@sum_files")]
    sum_files: usize,
    #[serde(rename = "@blank")]
    blank: usize,
    #[serde(rename = "@comment")]
    comment: usize,
    #[serde(rename = "@code")]
    code: usize,
}

impl From<&Totals> for XmlTotal {
    fn from(t: &Totals) -> Self {
        Self { sum_files: t.files.value(), blank: t.blanks.value(), comment: t.comments.value(), code: t.code.value() }
    }
}

pub fn render<W: Write>(report: &AnalysisReport, format: OutputFormat, by_file: bool, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Table if by_file => write_file_table(report, out),
        OutputFormat::Table => write_language_table(report, out),
        OutputFormat::Json if by_file => write_json(&FileView { files: &report.files, total: &report.totals }, out),
        OutputFormat::Json => write_json(&LanguageView { languages: &report.languages, total: &report.totals }, out),
        OutputFormat::Yaml if by_file => write_yaml(&FileView { files: &report.files, total: &report.totals }, out),
        OutputFormat::Yaml => write_yaml(&LanguageView { languages: &report.languages, total: &report.totals }, out),
        OutputFormat::Xml => write_xml(report, by_file, out),
    }
}

fn write_language_table<W: Write>(report: &AnalysisReport, out: &mut W) -> Result<()> {
    let rule = "-".repeat(ROW_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(
        out,
        "{:<NAME_WIDTH$} {:>FILES_WIDTH$} {:>COUNT_WIDTH$} {:>COUNT_WIDTH$} {:>COUNT_WIDTH$}",
        "Language", "files", "blank", "comment", "code"
    )?;
    writeln!(out, "{rule}")?;
    for lang in &report.languages {
        writeln!(
            out,
            "{:<NAME_WIDTH$} {:>FILES_WIDTH$} {:>COUNT_WIDTH$} {:>COUNT_WIDTH$} {:>COUNT_WIDTH$}",
            lang.language, lang.files, lang.blanks, lang.comments, lang.code
        )?;
    }
    writeln!(out, "{rule}")?;
    let t = &report.totals;
    writeln!(
        out,
        "{:<NAME_WIDTH$} {:>FILES_WIDTH$} {:>COUNT_WIDTH$} {:>COUNT_WIDTH$} {:>COUNT_WIDTH$}",
        "TOTAL", t.files, t.blanks, t.comments, t.code
    )?;
    writeln!(out, "{rule}")?;
    Ok(())
}

fn write_file_table<W: Write>(report: &AnalysisReport, out: &mut W) -> Result<()> {
    let name_width = report.files.iter().map(|s| s.name().chars().count()).max().unwrap_or(0).max(NAME_WIDTH);
    let rule = "-".repeat((name_width + 3 * (COUNT_WIDTH + 1)).max(ROW_WIDTH));

    writeln!(out, "{rule}")?;
    writeln!(
        out,
        "{:<name_width$} {:>COUNT_WIDTH$} {:>COUNT_WIDTH$} {:>COUNT_WIDTH$}",
        "File", "blank", "comment", "code"
    )?;
    writeln!(out, "{rule}")?;
    for file in &report.files {
        writeln!(
            out,
            "{:<name_width$} {:>COUNT_WIDTH$} {:>COUNT_WIDTH$} {:>COUNT_WIDTH$}",
            file.name(),
            file.blanks(),
            file.comments(),
            file.code()
        )?;
    }
    writeln!(out, "{rule}")?;
    let t = &report.totals;
    writeln!(
        out,
        "{:<name_width$} {:>COUNT_WIDTH$} {:>COUNT_WIDTH$} {:>COUNT_WIDTH$}",
        "TOTAL", t.blanks, t.comments, t.code
    )?;
    writeln!(out, "{rule}")?;
    Ok(())
}

fn write_json<W: Write, T: Serialize>(view: &T, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, view)?;
    writeln!(out)?;
    Ok(())
}

fn write_yaml<W: Write, T: Serialize>(view: &T, out: &mut W) -> Result<()> {
    serde_yaml::to_writer(&mut *out, view)?;
    Ok(())
}

fn write_xml<W: Write>(report: &AnalysisReport, by_file: bool, out: &mut W) -> Result<()> {
    let total = XmlTotal::from(&report.totals);
    let view = if by_file {
        let file = report
            .files
            .iter()
            .map(|s| XmlFile {
                name: s.name().as_str(),
                blank: s.blanks().value(),
                comment: s.comments().value(),
                code: s.code().value(),
                complexity: s.finite_complexity(),
                language: s.language(),
            })
            .collect();
        XmlReport { files: Some(XmlFiles { file, total }), languages: None }
    } else {
        let language = report
            .languages
            .iter()
            .map(|l| XmlLanguage {
                name: &l.language,
                files_count: l.files.value(),
                blank: l.blanks.value(),
                comment: l.comments.value(),
                code: l.code.value(),
            })
            .collect();
        XmlReport { files: None, languages: Some(XmlLanguages { language, total }) }
    };

    let body = quick_xml::se::to_string_with_root("results", &view).map_err(|e| {
        InfrastructureError::SerializationError { format: "XML".to_string(), details: e.to_string() }
    })?;
    writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(out, "{body}")?;
    Ok(())
}

/// `--show-lang` 用の一覧（表示名の昇順）
pub fn write_languages<W: Write>(registry: &LanguageRegistry, out: &mut W) -> Result<()> {
    let mut defs: Vec<_> = registry.iter().collect();
    defs.sort_by_key(|d| d.label().to_ascii_lowercase());

    for def in defs {
        let mut matchers: Vec<String> = def.extensions.iter().map(|e| format!(".{e}")).collect();
        matchers.extend(def.file_names.iter().cloned());
        writeln!(out, "{:<NAME_WIDTH$}{:<16}{}", def.label(), def.id, matchers.join(", "))?;
    }
    Ok(())
}
