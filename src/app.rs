// src/app.rs
use std::{
    borrow::Cow,
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};
use cloc_lines_domain::language::LanguageRegistry;
use cloc_lines_infra::{
    filesystem::WalkFileEnumerator,
    measurement::{BatchAnalyzer, FileAnalyzer},
    persistence::{FsSourceOpener, load_definitions},
};
use cloc_lines_usecase::AnalyzePaths;

use crate::{config::RunConfig, presentation};

pub fn run(config: RunConfig) -> Result<()> {
    let registry = load_registry(config.definitions.as_deref())?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if config.show_lang {
        presentation::write_languages(&registry, &mut out)?;
        out.flush()?;
        return Ok(());
    }

    let enumerator = WalkFileEnumerator::new(&registry);
    let opener = FsSourceOpener;
    let analyzer = BatchAnalyzer::new(FileAnalyzer::new(&registry, &opener), config.jobs);

    let report = AnalyzePaths::new(&enumerator, &analyzer)
        .run(&config.plan, &config.request)
        .context("failed to analyze sources")?;

    presentation::render(&report, config.format, config.by_file, &mut out).context("failed to emit output")?;
    out.flush()?;
    Ok(())
}

/// 組み込み定義に `--definitions` の内容を重ねた登録表
fn load_registry(definitions: Option<&Path>) -> Result<Cow<'static, LanguageRegistry>> {
    let builtin = LanguageRegistry::builtin();
    let Some(path) = definitions else {
        return Ok(Cow::Borrowed(builtin));
    };

    let extra = load_definitions(path).with_context(|| format!("failed to load {}", path.display()))?;
    let merged = builtin.with_overrides(extra).with_context(|| format!("invalid definitions in {}", path.display()))?;
    log::debug!("language registry: {} definitions after merging {}", merged.len(), path.display());
    Ok(Cow::Owned(merged))
}
