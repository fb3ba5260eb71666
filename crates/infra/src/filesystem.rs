// crates/infra/src/filesystem.rs
use std::{
    collections::HashSet,
    path::{Component, Path},
    sync::Arc,
};

use cloc_lines_domain::language::{LanguageDefinition, LanguageRegistry};
use cloc_lines_ports::filesystem::{FileEnumerationPlan, FileEnumerator, SourceEntry};
use cloc_lines_shared_kernel::{DomainError, Result};
use ignore::WalkBuilder;
use regex::Regex;

/// `ignore` でディレクトリを走査し、言語が判定できたファイルだけを返す
pub struct WalkFileEnumerator<'r> {
    registry: &'r LanguageRegistry,
}

impl<'r> WalkFileEnumerator<'r> {
    pub fn new(registry: &'r LanguageRegistry) -> Self {
        Self { registry }
    }

    fn collect_root(
        &self,
        root: &Path,
        plan: &FileEnumerationPlan,
        matcher: &Arc<PlanMatcher>,
        entries: &mut Vec<SourceEntry>,
    ) {
        let Ok(metadata) = std::fs::metadata(root) else {
            // 存在しないルートも集計対象に残し、ゼロ件の行として報告させる
            log::warn!("{}: no such file or directory", root.display());
            if let Some(def) = self.registry.detect(root).filter(|d| matcher.accepts_language(d)) {
                entries.push(SourceEntry::new(root, def.id.as_str()));
            }
            return;
        };

        if !metadata.is_dir() {
            if let Some(def) = self.accept(root, None, matcher) {
                entries.push(SourceEntry::new(root, def.id.as_str()));
            }
            return;
        }

        let mut builder = WalkBuilder::new(root);
        builder.follow_links(plan.follow_links);
        builder.hidden(!plan.include_hidden);
        builder.git_ignore(true);
        builder.git_global(true);
        builder.git_exclude(true);
        builder.ignore(true);

        let matcher_for_dirs = Arc::clone(matcher);
        builder.filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            if !is_dir || entry.depth() == 0 {
                return true;
            }
            entry.file_name().to_str().is_none_or(|name| matcher_for_dirs.should_visit_dir(name))
        });

        for result in builder.build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("{}: {err}", root.display());
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            let path = entry.into_path();
            if let Some(def) = self.accept(&path, Some(root), matcher) {
                entries.push(SourceEntry::new(&path, def.id.as_str()));
            }
        }
    }

    fn accept(&self, path: &Path, root: Option<&Path>, matcher: &PlanMatcher) -> Option<&'r LanguageDefinition> {
        let def = self.registry.detect(path)?;
        let accepted = matcher.accepts_language(def)
            && matcher.accepts_file(path)
            && root.is_none_or(|root| matcher.accepts_parents(path, root));
        accepted.then_some(def)
    }
}

impl FileEnumerator for WalkFileEnumerator<'_> {
    fn collect(&self, plan: &FileEnumerationPlan) -> Result<Vec<SourceEntry>> {
        for id in &plan.include_langs {
            self.registry.require(id)?;
        }
        let matcher = Arc::new(PlanMatcher::new(plan)?);
        let mut entries = Vec::new();

        for root in &plan.roots {
            self.collect_root(root, plan, &matcher, &mut entries);
        }

        entries.sort_by(|a, b| a.path.cmp(&b.path));
        entries.dedup_by(|a, b| a.path == b.path);
        log::debug!("enumerated {} source files under {} roots", entries.len(), plan.roots.len());
        Ok(entries)
    }
}

/// 列挙プランのフィルタ群（正規表現は構築時に一度だけコンパイル）
#[derive(Debug)]
struct PlanMatcher {
    include_langs: HashSet<String>,
    exclude_exts: HashSet<String>,
    match_file: Option<Regex>,
    not_match_file: Option<Regex>,
    match_dir: Option<Regex>,
    not_match_dir: Option<Regex>,
}

impl PlanMatcher {
    fn new(plan: &FileEnumerationPlan) -> Result<Self> {
        Ok(Self {
            include_langs: plan.include_langs.iter().map(|l| l.to_ascii_lowercase()).collect(),
            exclude_exts: plan.exclude_exts.iter().map(|e| e.trim_start_matches('.').to_ascii_lowercase()).collect(),
            match_file: compile_pattern(plan.match_file.as_deref())?,
            not_match_file: compile_pattern(plan.not_match_file.as_deref())?,
            match_dir: compile_pattern(plan.match_dir.as_deref())?,
            not_match_dir: compile_pattern(plan.not_match_dir.as_deref())?,
        })
    }

    fn should_visit_dir(&self, name: &str) -> bool {
        !self.not_match_dir.as_ref().is_some_and(|re| re.is_match(name))
    }

    fn accepts_language(&self, def: &LanguageDefinition) -> bool {
        self.include_langs.is_empty() || self.include_langs.contains(&def.id.to_ascii_lowercase())
    }

    fn accepts_file(&self, path: &Path) -> bool {
        let ext = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
        if ext.is_some_and(|e| self.exclude_exts.contains(&e)) {
            return false;
        }

        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        if self.match_file.as_ref().is_some_and(|re| !re.is_match(name)) {
            return false;
        }
        !self.not_match_file.as_ref().is_some_and(|re| re.is_match(name))
    }

    /// ルートからファイルまでのディレクトリ名のいずれかが `match_dir` に一致するか
    fn accepts_parents(&self, path: &Path, root: &Path) -> bool {
        let Some(re) = &self.match_dir else {
            return true;
        };
        let relative = path.strip_prefix(root).unwrap_or(path);
        relative
            .parent()
            .into_iter()
            .flat_map(Path::components)
            .filter_map(|c| match c {
                Component::Normal(name) => name.to_str(),
                _ => None,
            })
            .any(|name| re.is_match(name))
    }
}

fn compile_pattern(pattern: Option<&str>) -> Result<Option<Regex>> {
    pattern
        .map(|p| {
            Regex::new(p).map_err(|e| {
                DomainError::InvalidPattern { pattern: p.to_string(), details: e.to_string(), source: Some(Box::new(e)) }
                    .into()
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use cloc_lines_shared_kernel::ClocError;

    use super::*;

    fn touch(root: &Path, rel: &str) -> PathBuf {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create dirs");
        }
        fs::write(&path, "x\n").expect("write file");
        path
    }

    fn plan_for(root: &Path) -> FileEnumerationPlan {
        FileEnumerationPlan { roots: vec![root.to_path_buf()], ..FileEnumerationPlan::default() }
    }

    fn names(entries: &[SourceEntry], root: &Path) -> Vec<String> {
        entries
            .iter()
            .map(|e| e.path.strip_prefix(root).unwrap_or(&e.path).to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn walks_known_languages_in_sorted_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        touch(dir.path(), "src/main.rs");
        touch(dir.path(), "b.py");
        touch(dir.path(), "a.go");
        touch(dir.path(), "LICENSE");
        touch(dir.path(), "image.png");

        let enumerator = WalkFileEnumerator::new(LanguageRegistry::builtin());
        let entries = enumerator.collect(&plan_for(dir.path())).expect("walk");

        assert_eq!(names(&entries, dir.path()), ["a.go", "b.py", "src/main.rs"]);
        assert_eq!(entries[2].language_id, "rust");
    }

    #[test]
    fn hidden_files_need_opt_in() {
        let dir = tempfile::tempdir().expect("tempdir");
        touch(dir.path(), ".hidden/x.rs");
        touch(dir.path(), "y.rs");

        let enumerator = WalkFileEnumerator::new(LanguageRegistry::builtin());
        let entries = enumerator.collect(&plan_for(dir.path())).expect("walk");
        assert_eq!(names(&entries, dir.path()), ["y.rs"]);

        let plan = FileEnumerationPlan { include_hidden: true, ..plan_for(dir.path()) };
        let entries = enumerator.collect(&plan).expect("walk");
        assert_eq!(names(&entries, dir.path()), [".hidden/x.rs", "y.rs"]);
    }

    #[test]
    fn language_and_extension_filters() {
        let dir = tempfile::tempdir().expect("tempdir");
        touch(dir.path(), "a.rs");
        touch(dir.path(), "b.py");
        touch(dir.path(), "c.h");

        let enumerator = WalkFileEnumerator::new(LanguageRegistry::builtin());

        let plan = FileEnumerationPlan { include_langs: vec!["Python".into()], ..plan_for(dir.path()) };
        assert_eq!(names(&enumerator.collect(&plan).expect("walk"), dir.path()), ["b.py"]);

        let plan = FileEnumerationPlan { exclude_exts: vec![".H".into(), "py".into()], ..plan_for(dir.path()) };
        assert_eq!(names(&enumerator.collect(&plan).expect("walk"), dir.path()), ["a.rs"]);
    }

    #[test]
    fn regex_filters_on_files_and_dirs() {
        let dir = tempfile::tempdir().expect("tempdir");
        touch(dir.path(), "src/lib.rs");
        touch(dir.path(), "src/lib_test.rs");
        touch(dir.path(), "vendor/dep.rs");

        let enumerator = WalkFileEnumerator::new(LanguageRegistry::builtin());

        let plan = FileEnumerationPlan { not_match_file: Some("_test\\.rs$".into()), ..plan_for(dir.path()) };
        assert_eq!(names(&enumerator.collect(&plan).expect("walk"), dir.path()), ["src/lib.rs", "vendor/dep.rs"]);

        let plan = FileEnumerationPlan { not_match_dir: Some("^vendor$".into()), ..plan_for(dir.path()) };
        assert_eq!(
            names(&enumerator.collect(&plan).expect("walk"), dir.path()),
            ["src/lib.rs", "src/lib_test.rs"]
        );

        let plan = FileEnumerationPlan { match_dir: Some("vend".into()), ..plan_for(dir.path()) };
        assert_eq!(names(&enumerator.collect(&plan).expect("walk"), dir.path()), ["vendor/dep.rs"]);

        let plan = FileEnumerationPlan { match_file: Some("^lib".into()), ..plan_for(dir.path()) };
        assert_eq!(
            names(&enumerator.collect(&plan).expect("walk"), dir.path()),
            ["src/lib.rs", "src/lib_test.rs"]
        );
    }

    #[test]
    fn invalid_regex_is_a_domain_error() {
        let plan = FileEnumerationPlan { match_file: Some("(".into()), ..FileEnumerationPlan::default() };
        let err = WalkFileEnumerator::new(LanguageRegistry::builtin()).collect(&plan).unwrap_err();
        assert!(matches!(err, ClocError::Domain(DomainError::InvalidPattern { .. })));
    }

    #[test]
    fn unknown_included_language_is_rejected() {
        let plan = FileEnumerationPlan { include_langs: vec!["klingon".into()], ..FileEnumerationPlan::default() };
        let err = WalkFileEnumerator::new(LanguageRegistry::builtin()).collect(&plan).unwrap_err();
        assert!(matches!(err, ClocError::Domain(DomainError::UnknownLanguage { .. })));
    }

    #[test]
    fn explicit_and_missing_roots_are_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = touch(dir.path(), "one.c");
        let missing = dir.path().join("gone.c");

        let plan = FileEnumerationPlan {
            roots: vec![missing.clone(), file.clone(), file.clone(), dir.path().join("gone.unknown")],
            ..FileEnumerationPlan::default()
        };
        let entries = WalkFileEnumerator::new(LanguageRegistry::builtin()).collect(&plan).expect("walk");

        let paths: Vec<_> = entries.iter().map(|e| e.path.clone()).collect();
        assert_eq!(paths, [missing, file]);
        assert!(entries.iter().all(|e| e.language_id == "c"));
    }
}
