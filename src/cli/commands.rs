use clap::{Args, Parser, Subcommand, ValueEnum};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("BUILD_TIMESTAMP"),
    ")"
);

#[derive(Parser)]
#[command(name = "echoreport", version, long_version = LONG_VERSION, about = "Level 1 echo report entry and training summaries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// YAML configuration file (default: ./echoreport.yaml if present)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// SQLite database path, overrides the config file
    #[arg(long, global = true)]
    pub db: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the database and apply the schema
    Init,
    /// Save one or more report submissions
    Submit(SubmitArgs),
    /// Check a submission without saving it
    Validate(ValidateArgs),
    /// Print a submission pre-filled with the form defaults
    Template(TemplateArgs),
    /// List the options offered for every categorical field
    Options(OutputArgs),
    /// Show a stored report
    Show(ShowArgs),
    /// List stored reports, newest first
    List(ListArgs),
    /// Number of reports stored
    Count(OutputArgs),
    /// Scans still needed to reach the training target
    Remaining(RemainingArgs),
    /// Count abnormal findings across all reports
    Summary(OutputArgs),
    /// Scan quality per month
    Trends(OutputArgs),
    /// Progress, pathology summary and quality trends together
    Dashboard(RemainingArgs),
}

#[derive(Args, Clone)]
pub struct SubmitArgs {
    /// Submission files (YAML or JSON)
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Save even if the form checks report problems
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Submission file to check
    pub file: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TemplateFormat {
    Yaml,
    Json,
}

#[derive(Args, Clone)]
pub struct TemplateArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "yaml")]
    pub format: TemplateFormat,
}

#[derive(Args, Clone)]
pub struct OutputArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ShowArgs {
    /// Report id
    pub id: i64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ListArgs {
    /// Maximum number of reports
    #[arg(long, default_value = "20")]
    pub limit: usize,

    /// Reports to skip
    #[arg(long, default_value = "0")]
    pub offset: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct RemainingArgs {
    /// Training target, overrides the config file
    #[arg(long)]
    pub target: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
