use clap::{Args, Parser, Subcommand, ValueEnum};
use ocean_health::types::weights::WeightAssignment;
use ocean_health::HealthStatus;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ocean-health",
    version,
    about = "Ocean health scoring and simulated marine species classification"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors; reports and check results still go to stdout
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Load exactly this config file instead of the layered lookup
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score observations and render a health report
    Score(ScoreCommand),
    /// Validate observation data without scoring
    Check(CheckCommand),
    /// Show the resolved weight vector after rebalancing
    Weights(WeightsCommand),
    /// Run the simulated species classifier on an image
    Classify(ClassifyCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Data file or directory; the built-in sample is used when omitted
    pub path: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Rebalance one weight, e.g. `--set ph=0.5`; repeatable, applied in order
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment)]
    pub assignments: Vec<WeightAssignment>,
    /// Exit with code 2 when any observation is classified at or below this status
    #[arg(long, value_enum)]
    pub fail_on: Option<StatusArg>,
    /// Write a JSON snapshot of the report
    #[arg(long)]
    pub save: bool,
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

#[derive(Args)]
pub struct CheckCommand {
    pub path: Option<PathBuf>,
}

#[derive(Args)]
pub struct WeightsCommand {
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment)]
    pub assignments: Vec<WeightAssignment>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: WeightsFormat,
}

#[derive(Args)]
pub struct ClassifyCommand {
    pub image: PathBuf,
    /// Seed the label and delay choice for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Csv,
}

#[derive(Clone, ValueEnum)]
pub enum WeightsFormat {
    Json,
    Md,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StatusArg {
    Healthy,
    Moderate,
    Poor,
    Critical,
}

impl From<StatusArg> for HealthStatus {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::Healthy => HealthStatus::Healthy,
            StatusArg::Moderate => HealthStatus::Moderate,
            StatusArg::Poor => HealthStatus::Poor,
            StatusArg::Critical => HealthStatus::Critical,
        }
    }
}

fn parse_assignment(raw: &str) -> Result<WeightAssignment, String> {
    raw.parse::<WeightAssignment>().map_err(|e| e.to_string())
}
