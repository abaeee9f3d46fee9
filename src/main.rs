use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::Path;
use std::process;
use std::time::Instant;

use no_private_methods::config::{find_config_pyproject_toml, load_config, merge_config};
use no_private_methods::location::LineIndex;
use no_private_methods::models::Violation;
use no_private_methods::{find_python_files, lint_path, LinterOptions};

#[derive(ValueEnum, Clone, Debug)]
enum OutputFormat {
    Terminal,
    Json,
    Github,
}

/// Exit codes used by the linter
mod exit_codes {
    pub const SUCCESS: i32 = 0; // No violations found
    pub const VIOLATIONS_FOUND: i32 = 1; // Violations found
    pub const FILE_ERROR: i32 = 3; // File not found or I/O error
    pub const PARSE_ERROR: i32 = 4; // Failed to parse Python files
}

#[derive(Parser, Debug)]
#[command(
    name = "no-private-methods",
    author,
    version,
    about = "Check Python classes for private (leading-underscore) methods",
    long_about = "Check Python classes for private (leading-underscore) methods.\n\nIf no paths are provided, the current directory is checked recursively."
)]
struct Args {
    /// Paths to analyze (files or directories)
    ///
    /// Examples: no-private-methods (current dir), no-private-methods src/, no-private-methods file.py
    #[arg(default_value = ".")]
    paths: Vec<String>,

    /// Path to a pyproject.toml to read configuration from
    #[arg(short = 'c', long = "config")]
    config: Option<String>,

    /// Output format
    ///
    /// Example: -f json (for CI/CD), -f github (for GitHub Actions)
    #[arg(
        short = 'f',
        long = "output-format",
        value_enum,
        default_value = "terminal"
    )]
    output_format: OutputFormat,

    /// Disable specific rules (can be used multiple times)
    ///
    /// Example: -d NPM100
    #[arg(short = 'd', long = "disable")]
    disable: Vec<String>,

    /// Disable parallel processing
    #[arg(long = "no-parallel")]
    no_parallel: bool,

    /// Show source code in violations
    #[arg(long = "show-source", default_value = "true")]
    show_source: bool,

    /// Disable source code in violations
    #[arg(long = "no-show-source", conflicts_with = "show_source")]
    no_show_source: bool,

    /// Enable colored output
    #[arg(long = "color", default_value = "true")]
    color: bool,

    /// Disable colored output
    #[arg(long = "no-color", conflicts_with = "color")]
    no_color: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Number of threads to use (0 = auto)
    #[arg(short = 'j', long = "threads", default_value = "0", hide = true)]
    threads: usize,

    /// Skip files matching pattern
    #[arg(long = "skip", hide = true)]
    skip: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let start = Instant::now();

    let mut had_file_errors = false;
    let mut had_parse_errors = false;

    let show_source = !args.no_show_source && args.show_source;
    let use_color = !args.no_color && args.color;

    // Load configuration from pyproject.toml
    let config = if let Some(config_path) = &args.config {
        load_config(Some(Path::new(config_path)))
    } else {
        let start_path = Path::new(&args.paths[0]);
        let abs_path = start_path
            .canonicalize()
            .unwrap_or_else(|_| start_path.to_path_buf());
        if let Some(pyproject) = find_config_pyproject_toml(&abs_path) {
            if args.verbose {
                eprintln!(
                    "Found pyproject.toml with [tool.no-private-methods] at: {}",
                    pyproject.display()
                );
            }
            load_config(Some(&pyproject))
        } else {
            load_config(None)
        }
    };

    let (disable, skip_patterns) = merge_config(config.as_ref(), &args.disable, &args.skip);

    if args.verbose {
        eprintln!("Registered rules:");
        for rule in no_private_methods::rules::get_all_rules() {
            eprintln!("  {}: {}", rule.rule_id(), rule.description());
        }
        if !disable.is_empty() {
            eprintln!("Disabled rules: {disable:?}");
        }
        eprintln!("Exclude patterns: {skip_patterns:?}");
    }

    let options = LinterOptions {
        threads: if args.no_parallel { 1 } else { args.threads },
        disable,
        skip_patterns: skip_patterns.clone(),
    };

    let mut all_violations = Vec::new();
    let mut total_files = 0;

    for path_str in &args.paths {
        let path = Path::new(path_str);

        if !path.exists() {
            eprintln!("Error: Path not found: {}", path.display());
            had_file_errors = true;
            continue;
        }

        if args.verbose && path.is_dir() {
            let files = find_python_files(path, &skip_patterns);
            eprintln!(
                "Found {} Python files to analyze in {}",
                files.len(),
                path.display()
            );
        }

        match lint_path(path, &options) {
            Ok(result) => {
                total_files += result.files_analyzed;

                if result.files_with_errors > 0 {
                    had_file_errors = true;
                }
                if result.parse_errors > 0 {
                    had_parse_errors = true;
                }

                all_violations.extend(result.violations);
            }
            Err(error) => {
                eprintln!("Error processing path {}: {}", path.display(), error);
                had_file_errors = true;
            }
        }
    }

    match args.output_format {
        OutputFormat::Terminal => report_terminal(&all_violations, show_source, use_color),
        OutputFormat::Json => report_json(&all_violations)?,
        OutputFormat::Github => report_github(&all_violations),
    }

    let elapsed = start.elapsed();
    show_statistics(&all_violations, total_files, elapsed.as_secs_f64(), use_color);

    let exit_code = if had_parse_errors {
        exit_codes::PARSE_ERROR
    } else if had_file_errors {
        exit_codes::FILE_ERROR
    } else if all_violations.is_empty() {
        exit_codes::SUCCESS
    } else {
        exit_codes::VIOLATIONS_FOUND
    };

    if exit_code != exit_codes::SUCCESS {
        process::exit(exit_code);
    }

    Ok(())
}

fn show_statistics(
    violations: &[(std::path::PathBuf, Vec<Violation>)],
    total_files: usize,
    elapsed_secs: f64,
    use_color: bool,
) {
    let total_violations: usize = violations.iter().map(|(_, v)| v.len()).sum();

    eprintln!();
    if total_violations == 0 {
        if use_color {
            eprintln!("\x1b[32m✓ No issues found!\x1b[0m");
        } else {
            eprintln!("✓ No issues found!");
        }
    } else if use_color {
        eprintln!("\x1b[31mFound {total_violations} violations\x1b[0m");
    } else {
        eprintln!("Found {total_violations} violations");
    }
    eprintln!(
        "Checked {} file{} in {:.2}s",
        total_files,
        if total_files == 1 { "" } else { "s" },
        elapsed_secs
    );
}

fn report_terminal(
    violations: &[(std::path::PathBuf, Vec<Violation>)],
    show_source: bool,
    use_color: bool,
) {
    // Sort by file path for consistent output
    let mut sorted_violations = violations.to_vec();
    sorted_violations.sort_by(|a, b| a.0.cmp(&b.0));

    for (file, file_violations) in &sorted_violations {
        let Ok(content) = fs::read_to_string(file) else {
            continue;
        };
        let line_index = LineIndex::new(&content);

        let mut sorted_file_violations = file_violations.clone();
        sorted_file_violations.sort_by_key(|violation| violation.offset);

        for violation in &sorted_file_violations {
            let (line, column) = line_index.get_location(violation.offset);

            // Columns are 0-based internally, shown 1-based
            if use_color {
                println!(
                    "{}:{}:{}: \x1b[31m{}\x1b[0m",
                    file.display(),
                    line,
                    column + 1,
                    violation.message
                );
            } else {
                println!(
                    "{}:{}:{}: {}",
                    file.display(),
                    line,
                    column + 1,
                    violation.message
                );
            }

            if show_source {
                if let Some(source_line) = content.lines().nth(line - 1) {
                    println!("    {source_line}");
                    println!("    {}^", " ".repeat(column));
                }
            }
        }
    }
}

fn report_json(violations: &[(std::path::PathBuf, Vec<Violation>)]) -> Result<()> {
    use serde_json::json;

    let mut all_violations = Vec::new();

    for (file, file_violations) in violations {
        if let Ok(content) = fs::read_to_string(file) {
            let line_index = LineIndex::new(&content);

            for violation in file_violations {
                let (line, column) = line_index.get_location(violation.offset);

                all_violations.push(json!({
                    "file": violation.file_path,
                    "line": line,
                    "column": column + 1,
                    "rule": violation.rule_id,
                    "message": violation.message,
                }));
            }
        }
    }

    let output = json!({
        "violations": all_violations,
        "count": all_violations.len(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn report_github(violations: &[(std::path::PathBuf, Vec<Violation>)]) {
    // GitHub Actions annotation format
    for (file, file_violations) in violations {
        if let Ok(content) = fs::read_to_string(file) {
            let line_index = LineIndex::new(&content);

            for violation in file_violations {
                let (line, column) = line_index.get_location(violation.offset);

                // ::error file=app.py,line=1,col=5,title=RULE::message
                println!(
                    "::error file={},line={},col={},title={}::{}",
                    violation.file_path,
                    line,
                    column + 1,
                    violation.rule_id,
                    violation.message
                );
            }
        }
    }
}
