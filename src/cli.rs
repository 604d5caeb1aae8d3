use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "textgauge",
    version,
    about = "Text quality analysis and vocabulary scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Full analysis: vocabulary, correctness, and the global score
    Analyze(AnalyzeCommand),
    /// Vocabulary evaluation only
    Vocabulary(VocabularyCommand),
    /// Correctness evaluation only
    Correctness(CorrectnessCommand),
    /// Print findings only
    Lint(LintCommand),
}

#[derive(Args)]
pub struct InputArgs {
    /// Text file or directory of .txt/.md files
    #[arg(required_unless_present = "text", conflicts_with = "text")]
    pub path: Option<PathBuf>,

    /// Analyze this string instead of reading a file
    #[arg(long)]
    pub text: Option<String>,

    /// Language tag override (e.g. en-US)
    #[arg(short, long)]
    pub lang: Option<String>,
}

#[derive(Args)]
pub struct AnalyzeCommand {
    #[command(flatten)]
    pub input: InputArgs,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct VocabularyCommand {
    #[command(flatten)]
    pub input: InputArgs,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct CorrectnessCommand {
    #[command(flatten)]
    pub input: InputArgs,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct LintCommand {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
