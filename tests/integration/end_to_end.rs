// tests/integration/end_to_end.rs
use cloc_lines_domain::{
    language::LanguageRegistry,
    options::{AnalysisOptions, LanguageSortKey},
};
use cloc_lines_infra::{
    filesystem::WalkFileEnumerator,
    measurement::{BatchAnalyzer, FileAnalyzer},
    persistence::FsSourceOpener,
};
use cloc_lines_ports::filesystem::FileEnumerationPlan;
use cloc_lines_usecase::{AnalysisReport, AnalysisRequest, AnalyzePaths};

#[path = "../common/mod.rs"]
mod common;
use common::Workspace;

fn analyze(plan: &FileEnumerationPlan, jobs: usize) -> AnalysisReport {
    let registry = LanguageRegistry::builtin();
    let enumerator = WalkFileEnumerator::new(registry);
    let analyzer = BatchAnalyzer::new(FileAnalyzer::new(registry, &FsSourceOpener), jobs);
    let request = AnalysisRequest { options: AnalysisOptions::default(), sort: LanguageSortKey::Code };
    AnalyzePaths::new(&enumerator, &analyzer).run(plan, &request).expect("analysis succeeds")
}

#[test]
fn sample_project_counts() {
    let ws = Workspace::sample();
    let plan = FileEnumerationPlan { roots: vec![ws.path().to_path_buf()], ..FileEnumerationPlan::default() };
    let report = analyze(&plan, 1);

    assert_eq!(report.files.len(), 2);
    let first = &report.files.as_slice()[0];
    assert!(first.name().ends_with("util.py"));
    assert_eq!((first.code().value(), first.comments().value(), first.blanks().value()), (3, 3, 1));

    let second = &report.files.as_slice()[1];
    assert!(second.name().ends_with("main.rs"));
    assert_eq!((second.code().value(), second.comments().value(), second.blanks().value()), (3, 2, 0));

    let languages: Vec<_> = report.languages.iter().map(|l| l.language.as_str()).collect();
    assert_eq!(languages, ["Python", "Rust"]);
    assert_eq!(report.totals.code.value(), 6);
    assert_eq!(report.totals.comments.value(), 5);
    assert_eq!(report.totals.blanks.value(), 1);
}

#[test]
fn missing_root_is_reported_last_with_zero_counts() {
    let ws = Workspace::sample();
    let missing = ws.path().join("missing.go");
    let plan = FileEnumerationPlan {
        roots: vec![ws.path().join("src"), missing.clone()],
        ..FileEnumerationPlan::default()
    };
    let report = analyze(&plan, 1);

    assert_eq!(report.files.len(), 2);
    let last = &report.files.as_slice()[1];
    assert_eq!(last.name().as_str(), missing.to_string_lossy());
    assert_eq!(last.total_lines(), 0);
    assert_eq!(last.complexity(), None);
    assert_eq!(report.totals.files.value(), 2);
}

#[test]
fn parallel_and_sequential_reports_agree() {
    let ws = Workspace::new();
    for i in 0..40 {
        ws.write_file(&format!("pkg/m{i}.go"), &"// c\nfunc f() {}\n\n".repeat(i % 5 + 1));
    }
    let plan = FileEnumerationPlan { roots: vec![ws.path().to_path_buf()], ..FileEnumerationPlan::default() };

    let sequential = analyze(&plan, 1);
    let parallel = analyze(&plan, 4);
    assert_eq!(sequential.files, parallel.files);
    assert_eq!(sequential.totals, parallel.totals);
}
