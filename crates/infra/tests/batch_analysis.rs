// crates/infra/tests/batch_analysis.rs
use std::fs;

use cloc_lines_domain::{language::LanguageRegistry, model::FileSummaryCollection, options::AnalysisOptions};
use cloc_lines_infra::{
    measurement::{BatchAnalyzer, FileAnalyzer},
    persistence::FsSourceOpener,
};
use cloc_lines_ports::{analysis::SourceAnalyzer, filesystem::SourceEntry};

#[test]
fn unopenable_file_is_kept_and_sorted_last() {
    let dir = tempfile::tempdir().expect("tempdir");
    let main = dir.path().join("main.go");
    let util = dir.path().join("util.go");
    fs::write(&main, "package main\n\n// entry\nfunc main() {\n\tprintln(1)\n}\n").expect("write");
    fs::write(&util, "package main\n/* helpers\n */\n").expect("write");

    let entries = vec![
        SourceEntry::new(dir.path().join("absent.go"), "go"),
        SourceEntry::new(&util, "go"),
        SourceEntry::new(&main, "go"),
    ];

    let registry = LanguageRegistry::builtin();
    let analyzer = BatchAnalyzer::new(FileAnalyzer::new(registry, &FsSourceOpener), 1);
    let summaries = analyzer.analyze_batch(&entries, &AnalysisOptions::default()).expect("batch");

    assert_eq!(summaries.len(), 3);
    assert_eq!(summaries[0].complexity(), None);
    assert_eq!(summaries[0].total_lines(), 0);

    let collection: FileSummaryCollection = summaries.into_iter().collect();
    let order: Vec<_> = collection.iter().map(|s| s.name().as_str().to_string()).collect();
    assert_eq!(
        order,
        [main.display().to_string(), util.display().to_string(), dir.path().join("absent.go").display().to_string()]
    );

    let first = &collection.as_slice()[0];
    assert_eq!((first.code().value(), first.comments().value(), first.blanks().value()), (4, 1, 1));
    assert_eq!(first.language(), "Go");
}

#[test]
fn parallel_batch_preserves_input_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let entries: Vec<_> = (0..32)
        .map(|i| {
            let path = dir.path().join(format!("f{i:02}.py"));
            let body = "x = 1\n".repeat(i + 1);
            fs::write(&path, body).expect("write");
            SourceEntry::new(path, "python")
        })
        .collect();

    let registry = LanguageRegistry::builtin();
    let analyzer = BatchAnalyzer::new(FileAnalyzer::new(registry, &FsSourceOpener), 4);
    let summaries = analyzer.analyze_batch(&entries, &AnalysisOptions::default()).expect("batch");

    for (i, (summary, entry)) in summaries.iter().zip(&entries).enumerate() {
        assert_eq!(summary.name().as_str(), entry.display_name());
        assert_eq!(summary.code(), i + 1);
    }
}

#[test]
fn empty_batch_is_empty() {
    let analyzer = BatchAnalyzer::new(FileAnalyzer::new(LanguageRegistry::builtin(), &FsSourceOpener), 0);
    assert_eq!(analyzer.jobs(), 1);
    assert!(analyzer.analyze_batch(&[], &AnalysisOptions::default()).expect("batch").is_empty());
}
