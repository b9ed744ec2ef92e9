use std::env;
use std::path::{Path, PathBuf};
use std::process;

use log::{error, info, LevelFilter};
use tower_lsp::lsp_types::{DiagnosticSeverity, NumberOrString};

use css_lint::config::LintConfig;
use css_lint::css::diagnostics::CssDiagnostics;
use css_lint::css::lint_rules::{LevelMask, LintConfigurationSettings};
use css_lint::css::parser::CssParser;
use css_lint::css::server::start_css_language_server;
use css_lint::css::tree_printer::print_tree_to_stdout;
use css_lint::error::{IoContext, LintError, LintResult};
use css_lint::logging::{self, LogTarget};

/// Exit status when linting found error-level problems
const EXIT_LINT_ERRORS: i32 = 1;
/// Exit status when the tool itself failed
const EXIT_FAILURE: i32 = 2;

struct CheckOptions {
    config: Option<PathBuf>,
    all_levels: bool,
    verbose: bool,
    files: Vec<PathBuf>,
}

fn print_usage(program: &str) {
    eprintln!("Usage:");
    eprintln!("  {} check [--config <file>] [--all] [--verbose] <files...>", program);
    eprintln!("      Lint stylesheets and print problems");
    eprintln!("  {} tree <file>", program);
    eprintln!("      Print the syntax tree of a stylesheet");
    eprintln!("  {} lsp [--config <file>]", program);
    eprintln!("      Start the CSS Language Server on stdio");
    eprintln!("Example: {} check --all src/styles/main.css", program);
}

fn parse_check_options(args: &[String]) -> Option<CheckOptions> {
    let mut options = CheckOptions {
        config: None,
        all_levels: false,
        verbose: false,
        files: Vec::new(),
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => options.config = Some(PathBuf::from(iter.next()?)),
            "--all" => options.all_levels = true,
            "--verbose" => options.verbose = true,
            flag if flag.starts_with("--") => {
                eprintln!("Unknown option: {}", flag);
                return None;
            }
            file => options.files.push(PathBuf::from(file)),
        }
    }

    (!options.files.is_empty()).then_some(options)
}

fn current_dir() -> LintResult<PathBuf> {
    env::current_dir().with_io_context("Failed to get current directory")
}

fn level_name(severity: Option<DiagnosticSeverity>) -> &'static str {
    match severity {
        Some(DiagnosticSeverity::ERROR) => "error",
        Some(DiagnosticSeverity::WARNING) => "warning",
        _ => "hint",
    }
}

/// Lint every file, returning whether any error-level problem was found
fn run_check(options: &CheckOptions) -> LintResult<bool> {
    let config = LintConfig::resolve(options.config.as_deref(), &current_dir()?)?;
    let diagnostics = CssDiagnostics::with_data(config.build_data_manager()?);
    let settings = LintConfigurationSettings::new(&config.lint);
    let mask = if options.all_levels {
        LevelMask::ALL
    } else {
        LevelMask::default()
    };

    let mut parser = CssParser::new()?;
    let mut found_errors = false;

    for path in &options.files {
        let content = std::fs::read_to_string(path)
            .with_io_context(&format!("Failed to read {}", path.display()))?;
        let tree = parser
            .parse(&content, None)
            .ok_or_else(|| LintError::Parse { path: path.clone() })?;

        let results = diagnostics.analyze_with_mask(&tree, &content, &settings, mask);
        info!("{}: {} problems", path.display(), results.len());

        for diagnostic in results {
            let code = match &diagnostic.code {
                Some(NumberOrString::String(code)) => code.clone(),
                Some(NumberOrString::Number(code)) => code.to_string(),
                None => String::new(),
            };
            found_errors |= diagnostic.severity == Some(DiagnosticSeverity::ERROR);
            println!(
                "{}:{}:{}: {}: {} [{}]",
                path.display(),
                diagnostic.range.start.line + 1,
                diagnostic.range.start.character + 1,
                level_name(diagnostic.severity),
                diagnostic.message,
                code
            );
        }
    }

    Ok(found_errors)
}

fn run_tree(path: &Path) -> LintResult<()> {
    let content = std::fs::read_to_string(path)
        .with_io_context(&format!("Failed to read {}", path.display()))?;
    let mut parser = CssParser::new()?;
    let tree = parser
        .parse(&content, None)
        .ok_or_else(|| LintError::Parse {
            path: path.to_path_buf(),
        })?;

    print_tree_to_stdout(tree.root_node(), &content);
    Ok(())
}

async fn run_lsp(config_path: Option<&Path>) -> LintResult<()> {
    let config = LintConfig::resolve(config_path, &current_dir()?)?;
    let diagnostics = CssDiagnostics::with_data(config.build_data_manager()?);

    info!("Starting CSS Language Server");
    start_css_language_server(diagnostics, config.lint).await?;
    info!("CSS Language Server stopped");
    Ok(())
}

fn init_logger(target: LogTarget, level: LevelFilter) {
    if let Err(e) = logging::init_logger(target, level) {
        eprintln!("Failed to initialize logger: {}", e);
        process::exit(EXIT_FAILURE);
    }
}

fn exit_on_error<T>(result: LintResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            process::exit(EXIT_FAILURE);
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("css_lint");

    match args.get(1).map(String::as_str) {
        Some("check") => {
            let Some(options) = parse_check_options(&args[2..]) else {
                print_usage(program);
                process::exit(EXIT_FAILURE);
            };
            let level = if options.verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Warn
            };
            init_logger(LogTarget::Stderr, level);

            if exit_on_error(run_check(&options)) {
                process::exit(EXIT_LINT_ERRORS);
            }
        }
        Some("tree") if args.len() == 3 => {
            init_logger(LogTarget::Stderr, LevelFilter::Warn);
            exit_on_error(run_tree(Path::new(&args[2])));
        }
        Some("lsp") => {
            let config_path = match &args[2..] {
                [] => None,
                [flag, path] if flag == "--config" => Some(PathBuf::from(path)),
                _ => {
                    print_usage(program);
                    process::exit(EXIT_FAILURE);
                }
            };

            // stdout carries the protocol, so log to a file
            init_logger(LogTarget::File, LevelFilter::Info);
            info!("Command line arguments: {:?}", args);
            exit_on_error(run_lsp(config_path.as_deref()).await);
        }
        _ => {
            print_usage(program);
            process::exit(EXIT_FAILURE);
        }
    }
}
