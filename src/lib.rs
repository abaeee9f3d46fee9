#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some common patterns that are fine in this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod location;
pub mod models;
pub mod noqa;
pub mod rules;

use anyhow::Result;
use rayon::prelude::*;
use rustpython_ast::Mod;
use rustpython_parser::{parse, Mode};
use std::fs;
use std::path::{Path, PathBuf};

use crate::location::LineIndex;
use crate::noqa::NoqaMap;
use models::{RuleContext, Violation};
use rules::base::LintRule;

/// Options for the linter
#[derive(Clone, Default)]
pub struct LinterOptions {
    /// Worker threads; 0 lets rayon decide
    pub threads: usize,
    /// Rule IDs to skip
    pub disable: Vec<String>,
    /// Path patterns to skip during file discovery
    pub skip_patterns: Vec<String>,
}

/// Result of linting
pub struct LintResult {
    pub violations: Vec<(PathBuf, Vec<Violation>)>,
    pub files_analyzed: usize,
    pub files_with_errors: usize,
    pub parse_errors: usize,
}

/// Run every rule over one parsed module.
///
/// This is the analysis entry point: pure, no I/O, and total — a valid
/// tree always produces a (possibly empty) violation list, in source
/// order.
pub fn check_module(
    ast: &Mod,
    file_path: &str,
    rules: &[Box<dyn LintRule>],
) -> Vec<Violation> {
    let mut violations = Vec::new();

    if let Mod::Module(module) = ast {
        for stmt in &module.body {
            let context = RuleContext { stmt, file_path };
            for rule in rules {
                violations.extend(rule.check(&context));
            }
        }
    }

    violations
}

/// Analyze a single file: read, parse, check, apply noqa suppressions
fn analyze_file(path: &Path, rules: &[Box<dyn LintRule>]) -> Result<Vec<Violation>> {
    let content = fs::read_to_string(path)?;
    let file_path = path.to_string_lossy();
    let ast = parse(&content, Mode::Module, &file_path)?;

    let mut violations = check_module(&ast, &file_path, rules);

    let noqa = NoqaMap::from_source(&content);
    if !noqa.is_empty() {
        let line_index = LineIndex::new(&content);
        violations.retain(|violation| {
            let (line, _) = line_index.get_location(violation.offset);
            !noqa.is_suppressed(line, &violation.rule_id)
        });
    }

    Ok(violations)
}

/// Find all Python files in a directory
pub fn find_python_files(path: &Path, skip_patterns: &[String]) -> Vec<PathBuf> {
    use walkdir::{DirEntry, WalkDir};

    let is_excluded = |entry: &DirEntry| -> bool {
        entry.path().components().any(|component| {
            component
                .as_os_str()
                .to_str()
                .is_some_and(|name| skip_patterns.iter().any(|pattern| name == pattern))
        })
    };

    let walker = WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| !is_excluded(entry));

    let mut files = Vec::new();
    for entry in walker.filter_map(std::result::Result::ok) {
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("py") {
            files.push(path.to_path_buf());
        }
    }

    files
}

/// Main linting function
pub fn lint_path(path: &Path, options: &LinterOptions) -> Result<LintResult> {
    if options.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(options.threads)
            .build_global()?;
    }

    let files = if path.is_file() {
        vec![path.to_path_buf()]
    } else {
        find_python_files(path, &options.skip_patterns)
    };

    let files_analyzed = files.len();

    let rules: Vec<_> = rules::get_all_rules()
        .into_iter()
        .filter(|rule| !options.disable.iter().any(|id| id == rule.rule_id()))
        .collect();

    let results: Vec<_> = files
        .par_iter()
        .map(|file| (file.clone(), analyze_file(file, &rules)))
        .collect();

    let mut violations = Vec::new();
    let mut files_with_errors = 0;
    let mut parse_errors = 0;

    for (file, result) in results {
        match result {
            Ok(file_violations) => {
                if !file_violations.is_empty() {
                    violations.push((file, file_violations));
                }
            }
            Err(error) => {
                eprintln!("Error analyzing {}: {}", file.display(), error);
                files_with_errors += 1;
                if error.downcast_ref::<rustpython_parser::ParseError>().is_some() {
                    parse_errors += 1;
                }
            }
        }
    }

    Ok(LintResult {
        violations,
        files_analyzed,
        files_with_errors,
        parse_errors,
    })
}
