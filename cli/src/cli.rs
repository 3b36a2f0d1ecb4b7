use std::path::PathBuf;

/// Wyoming Rule apportionment CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "wyoming-rule", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// JSON file overriding national population, House size and electoral constants
    #[arg(long, global = true, env = "WYOMING_RULE_CONFIG", value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// State-by-state comparison of current seats against the divisor rule
    Compare(CompareArgs),

    /// National overview: current House, rule House, and the difference
    Summary(SummaryArgs),

    /// National House size and electoral totals across a range of divisors
    Sweep(SweepArgs),
}

/// How the divisor is chosen; at most one may be given, the config default applies otherwise.
#[derive(clap::Args, Debug, Default)]
#[group(multiple = false)]
pub struct DivisorArgs {
    /// People per seat, defaults to Wyoming's 2020 population
    #[arg(short, long, allow_negative_numbers = true)]
    pub divisor: Option<i64>,

    /// Use the average district size of a House with this many seats
    #[arg(long)]
    pub house_size: Option<u32>,
}

#[derive(clap::Args, Debug)]
pub struct CompareArgs {
    /// Region dataset (.csv or .json), defaults to the built-in 2020 census data
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub regions: Option<PathBuf>,

    #[command(flatten)]
    pub divisor: DivisorArgs,

    /// Output file (.csv or .json); prints a table when omitted
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file
    #[arg(long)]
    pub force: bool,

    /// Show every region instead of the ten largest changes
    #[arg(long)]
    pub all: bool,
}

#[derive(clap::Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub divisor: DivisorArgs,

    /// Output file (.json); prints the overview when omitted
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args, Debug)]
pub struct SweepArgs {
    /// First divisor
    #[arg(long, allow_negative_numbers = true)]
    pub from: i64,

    /// Last divisor (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub to: i64,

    /// Step between divisors
    #[arg(long, default_value_t = 25_000, allow_negative_numbers = true)]
    pub step: i64,

    /// Output file (.csv or .json); prints a table when omitted
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file
    #[arg(long)]
    pub force: bool,
}
