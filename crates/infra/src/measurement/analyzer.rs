// crates/infra/src/measurement/analyzer.rs
//! ファイル取得と行読み出し
//!
//! 開けないファイルはバッチを止めず、名前だけを持つゼロ集計として返す。

use std::io::{BufRead, BufReader};

use cloc_lines_domain::{
    language::{LanguageGrammar, LanguageRegistry},
    model::FileSummary,
    options::AnalysisOptions,
};
use cloc_lines_ports::{filesystem::SourceEntry, source::SourceOpener};

use super::classifier::LineClassifier;

/// 行バッファの初期容量。これより長い行が来れば伸びる。
const INITIAL_LINE_CAPACITY: usize = 64 * 1024;
/// 1ファイルの走査後に保持し続ける容量の上限
const RETAINED_LINE_CAPACITY: usize = 4 * 1024 * 1024;
const READ_BUFFER_CAPACITY: usize = 64 * 1024;

/// ファイル間で使い回す行バッファ（ワーカーごとに1つ）
#[derive(Debug)]
pub struct LineBuffer {
    bytes: Vec<u8>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self { bytes: Vec::with_capacity(INITIAL_LINE_CAPACITY) }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    fn release_excess(&mut self) {
        self.bytes.clear();
        if self.bytes.capacity() > RETAINED_LINE_CAPACITY {
            self.bytes.shrink_to(INITIAL_LINE_CAPACITY);
        }
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// ストリームを最後まで1度だけ読み、1ファイル分の集計を返す
///
/// 末尾に改行のない行も1行として数える。途中で読み込みに失敗した場合は
/// それまでに分類した行で集計を確定する。
pub fn analyze_reader<R: BufRead>(
    name: &str,
    language: &str,
    grammar: &LanguageGrammar,
    mut reader: R,
    options: &AnalysisOptions,
    buffer: &mut LineBuffer,
) -> FileSummary {
    let mut classifier = LineClassifier::with_options(grammar, *options);

    loop {
        buffer.bytes.clear();
        match reader.read_until(b'\n', &mut buffer.bytes) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(strip_line_ending(&buffer.bytes));
                classifier.classify(&line);
            }
            Err(err) => {
                log::warn!("{name}: read failed after {} lines: {err}", classifier.tally().total());
                break;
            }
        }
    }

    buffer.release_excess();
    classifier.finish(name, language)
}

fn strip_line_ending(bytes: &[u8]) -> &[u8] {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    bytes.strip_suffix(b"\r").unwrap_or(bytes)
}

/// 登録表から文法を引き、ファイルを開いて分類器に流す
#[derive(Clone, Copy)]
pub struct FileAnalyzer<'a> {
    registry: &'a LanguageRegistry,
    opener: &'a dyn SourceOpener,
}

impl<'a> FileAnalyzer<'a> {
    pub fn new(registry: &'a LanguageRegistry, opener: &'a dyn SourceOpener) -> Self {
        Self { registry, opener }
    }

    pub fn analyze_entry(&self, entry: &SourceEntry, options: &AnalysisOptions, buffer: &mut LineBuffer) -> FileSummary {
        let name = entry.display_name();

        let Some(definition) = self.registry.get(&entry.language_id) else {
            log::warn!("{name}: unknown language '{}'", entry.language_id);
            return FileSummary::unreadable(name, entry.language_id.as_str());
        };

        match self.opener.open(&name) {
            Ok(stream) => {
                let reader = BufReader::with_capacity(READ_BUFFER_CAPACITY, stream);
                analyze_reader(&name, definition.label(), &definition.grammar, reader, options, buffer)
            }
            Err(err) => {
                log::warn!("{name}: cannot open: {err}");
                FileSummary::unreadable(name, definition.label())
            }
        }
    }
}
