// src/config.rs
//! CLI 引数から実行設定を組み立てる

use std::path::PathBuf;

use cloc_lines_domain::options::{AnalysisOptions, OutputFormat};
use cloc_lines_ports::filesystem::FileEnumerationPlan;
use cloc_lines_shared_kernel::PresentationError;
use cloc_lines_usecase::AnalysisRequest;
use regex::Regex;

use crate::args::Args;

/// 1回の実行に必要な設定一式
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub plan: FileEnumerationPlan,
    pub request: AnalysisRequest,
    pub format: OutputFormat,
    pub by_file: bool,
    pub jobs: usize,
    pub definitions: Option<PathBuf>,
    pub show_lang: bool,
}

impl TryFrom<Args> for RunConfig {
    type Error = PresentationError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let jobs = match args.jobs {
            Some(0) => {
                return Err(PresentationError::InvalidValue {
                    flag: "--jobs".to_string(),
                    value: "0".to_string(),
                    reason: "must be at least 1".to_string(),
                });
            }
            Some(n) => n,
            None => num_cpus::get(),
        };

        for (flag, pattern) in [
            ("--match", &args.match_file),
            ("--not-match", &args.not_match_file),
            ("--match-dir", &args.match_dir),
            ("--not-match-dir", &args.not_match_dir),
        ] {
            validate_regex(flag, pattern.as_deref())?;
        }

        let plan = FileEnumerationPlan {
            roots: args.paths,
            follow_links: args.follow,
            include_hidden: args.hidden,
            include_langs: args.include_lang,
            exclude_exts: args.exclude_ext,
            match_file: args.match_file,
            not_match_file: args.not_match_file,
            match_dir: args.match_dir,
            not_match_dir: args.not_match_dir,
        };

        Ok(Self {
            plan,
            request: AnalysisRequest {
                options: AnalysisOptions::default().with_debug_trace(args.debug),
                sort: args.sort,
            },
            format: args.format.into(),
            by_file: args.by_file,
            jobs,
            definitions: args.definitions,
            show_lang: args.show_lang,
        })
    }
}

fn validate_regex(flag: &str, pattern: Option<&str>) -> Result<(), PresentationError> {
    let Some(pattern) = pattern else {
        return Ok(());
    };
    Regex::new(pattern).map(drop).map_err(|e| PresentationError::InvalidValue {
        flag: flag.to_string(),
        value: pattern.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use cloc_lines_domain::options::LanguageSortKey;

    use super::*;

    fn config(argv: &[&str]) -> Result<RunConfig, PresentationError> {
        let mut full = vec!["cloc_lines"];
        full.extend_from_slice(argv);
        RunConfig::try_from(Args::try_parse_from(full).expect("valid arguments"))
    }

    #[test]
    fn maps_arguments_into_plan_and_request() {
        let cfg = config(&["--hidden", "--follow", "--debug", "--jobs", "3", "--format", "json", "--sort", "name", "a"])
            .expect("valid config");

        assert!(cfg.plan.include_hidden);
        assert!(cfg.plan.follow_links);
        assert_eq!(cfg.plan.roots, [PathBuf::from("a")]);
        assert!(cfg.request.options.debug_trace);
        assert_eq!(cfg.request.sort, LanguageSortKey::Name);
        assert_eq!(cfg.format, OutputFormat::Json);
        assert_eq!(cfg.jobs, 3);
    }

    #[test]
    fn default_jobs_follow_cpu_count() {
        let cfg = config(&[]).expect("valid config");
        assert_eq!(cfg.jobs, num_cpus::get());
        assert!(!cfg.request.options.debug_trace);
    }

    #[test]
    fn rejects_zero_jobs_and_bad_regex() {
        assert!(matches!(config(&["--jobs", "0"]), Err(PresentationError::InvalidValue { .. })));

        let err = config(&["--not-match-dir", "[unclosed"]).unwrap_err();
        assert!(err.to_string().contains("--not-match-dir"));
    }
}
