mod analyze;
mod cli;
mod config;
mod correctness;
mod error;
mod input;
mod langtool;
mod nlp;
mod report;
mod types;
mod vocabulary;

use clap::Parser;

use crate::error::GaugeError;
use crate::input::TextInput;
use crate::types::config::GaugeConfig;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, GaugeError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(&cwd)?;
    if let Some(cfg) = &loaded {
        cfg.validate()?;
    } else {
        tracing::warn!("no {} found; using defaults", config::DEFAULT_CONFIG_FILE);
    }

    match cli.command {
        cli::Commands::Analyze(cmd) => {
            let inputs = gather_inputs(&cmd.input)?;
            if inputs.is_empty() {
                println!("analyze: no text files found");
                return Ok(exit_code::WARNINGS);
            }

            let lang = resolve_lang(&cmd.input, loaded.as_ref());
            let (evaluator, correctness) = analyze::build_checkers(loaded.as_ref(), &lang)?;

            let mut entries = Vec::with_capacity(inputs.len());
            for text_input in &inputs {
                let text_report =
                    analyze::analyze(&text_input.text, &evaluator, &correctness, loaded.as_ref())?;
                entries.push(report::BatchEntry {
                    name: text_input.name.clone(),
                    report: text_report,
                });
            }

            let format = output_format(&cmd.format);
            let rendered = if entries.len() == 1 {
                report::render(&entries[0].report, format)?
            } else {
                report::render_batch(&entries, format)?
            };
            println!("{rendered}");

            let has_blocking = entries
                .iter()
                .any(|entry| entry.report.has_blocking_findings());
            let has_warnings = entries.iter().any(|entry| !entry.report.findings.is_empty());

            if has_blocking {
                Ok(exit_code::BLOCKING)
            } else if has_warnings {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Vocabulary(cmd) => {
            let inputs = gather_inputs(&cmd.input)?;
            if inputs.is_empty() {
                println!("vocabulary: no text files found");
                return Ok(exit_code::WARNINGS);
            }

            let lang = resolve_lang(&cmd.input, loaded.as_ref());
            let (evaluator, _) = analyze::build_checkers(loaded.as_ref(), &lang)?;

            for text_input in &inputs {
                let result = evaluator.evaluate(&text_input.text)?;
                let rendered = match cmd.format {
                    cli::ReportFormat::Json => report::json::vocabulary_to_json(&result)?,
                    cli::ReportFormat::Md => report::md::vocabulary_to_markdown(&result),
                };
                if inputs.len() > 1 {
                    println!("## {}", text_input.name);
                }
                println!("{rendered}");
            }

            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Correctness(cmd) => {
            let inputs = gather_inputs(&cmd.input)?;
            if inputs.is_empty() {
                println!("correctness: no text files found");
                return Ok(exit_code::WARNINGS);
            }

            let lang = resolve_lang(&cmd.input, loaded.as_ref());
            let (_, correctness) = analyze::build_checkers(loaded.as_ref(), &lang)?;

            for text_input in &inputs {
                let result = correctness.evaluate(&text_input.text)?;
                let rendered = match cmd.format {
                    cli::ReportFormat::Json => report::json::correctness_to_json(&result)?,
                    cli::ReportFormat::Md => report::md::correctness_to_markdown(&result),
                };
                if inputs.len() > 1 {
                    println!("## {}", text_input.name);
                }
                println!("{rendered}");
            }

            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Lint(cmd) => {
            let inputs = gather_inputs(&cmd.input)?;
            if inputs.is_empty() {
                println!("lint: no text files found");
                return Ok(exit_code::WARNINGS);
            }

            let lang = resolve_lang(&cmd.input, loaded.as_ref());
            let (evaluator, correctness) = analyze::build_checkers(loaded.as_ref(), &lang)?;

            let mut findings = Vec::new();
            for text_input in &inputs {
                let text_report =
                    analyze::analyze(&text_input.text, &evaluator, &correctness, loaded.as_ref())?;
                findings.extend(text_report.findings);
            }

            if findings.is_empty() {
                println!("lint: no findings");
                return Ok(exit_code::SUCCESS);
            }

            for finding in &findings {
                let level = if finding.blocking { "BLOCKING" } else { "WARN" };
                println!("[{}] {}: {}", level, finding.id, finding.title);
                println!("  {}", finding.body);
            }

            if findings.iter().any(|finding| finding.blocking) {
                Ok(exit_code::BLOCKING)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
    }
}

fn gather_inputs(args: &cli::InputArgs) -> Result<Vec<TextInput>, GaugeError> {
    if let Some(text) = &args.text {
        return Ok(vec![TextInput {
            name: "<inline>".to_string(),
            text: text.clone(),
        }]);
    }
    match &args.path {
        Some(path) => input::collect_inputs(path),
        None => Ok(Vec::new()),
    }
}

fn resolve_lang(args: &cli::InputArgs, config: Option<&GaugeConfig>) -> String {
    args.lang
        .clone()
        .unwrap_or_else(|| {
            config
                .map(GaugeConfig::language_tag)
                .unwrap_or(types::config::DEFAULT_LANGUAGE_TAG)
                .to_string()
        })
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let directive = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
