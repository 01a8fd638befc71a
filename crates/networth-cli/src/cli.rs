use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use networth_core::VERSION;

/// Networth - track net worth, salary and savings from the terminal
#[derive(Parser)]
#[command(name = "networth")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the ledger file
    #[arg(short, long, global = true, env = "NETWORTH_PATH")]
    pub ledger: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols and table borders only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Output selection shared by listing and report commands
#[derive(Args, Clone, Default)]
pub struct OutputArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain, json)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the ledger will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// First year to track (defaults to the current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Replace an existing ledger file
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct YearArgs {
    #[command(subcommand)]
    pub command: YearSubcommand,
}

#[derive(Subcommand)]
pub enum YearSubcommand {
    /// Start tracking a year
    Add(YearAddArgs),
    /// List recorded years, most recent first
    List(OutputArgs),
    /// Delete a year and everything recorded in it
    Remove(YearRemoveArgs),
}

#[derive(Args)]
pub struct YearAddArgs {
    #[arg(value_name = "YEAR")]
    pub year: i32,
}

#[derive(Args)]
pub struct YearRemoveArgs {
    #[arg(value_name = "YEAR")]
    pub year: i32,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

#[derive(Args)]
pub struct AssetArgs {
    #[command(subcommand)]
    pub command: AssetSubcommand,
}

#[derive(Subcommand)]
pub enum AssetSubcommand {
    /// Record an asset
    Add(AssetAddArgs),
    /// List assets for a year
    List(RecordListArgs),
    /// Change an asset
    Edit(AssetEditArgs),
    /// Delete an asset
    Remove(RecordRemoveArgs),
}

#[derive(Args)]
pub struct AssetAddArgs {
    /// Asset category (e.g. "Investments", "cash-and-cash-equivalent")
    #[arg(value_name = "CATEGORY")]
    pub category: String,

    #[arg(value_name = "NAME")]
    pub name: String,

    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    pub value: f64,

    /// Year to record under (defaults to the latest year)
    #[arg(long)]
    pub year: Option<i32>,
}

#[derive(Args)]
pub struct AssetEditArgs {
    /// Asset ID (full or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Year the asset belongs to (defaults to the latest year)
    #[arg(long)]
    pub year: Option<i32>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub value: Option<f64>,
}

#[derive(Args)]
pub struct LiabilityArgs {
    #[command(subcommand)]
    pub command: LiabilitySubcommand,
}

#[derive(Subcommand)]
pub enum LiabilitySubcommand {
    /// Record a liability
    Add(LiabilityAddArgs),
    /// List liabilities for a year
    List(RecordListArgs),
    /// Change a liability
    Edit(LiabilityEditArgs),
    /// Delete a liability
    Remove(RecordRemoveArgs),
}

#[derive(Args)]
pub struct LiabilityAddArgs {
    /// Liability category (e.g. "Mortgages", "credit-card-debt")
    #[arg(value_name = "CATEGORY")]
    pub category: String,

    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    pub value: f64,

    /// Year to record under (defaults to the latest year)
    #[arg(long)]
    pub year: Option<i32>,
}

#[derive(Args)]
pub struct LiabilityEditArgs {
    /// Liability ID (full or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Year the liability belongs to (defaults to the latest year)
    #[arg(long)]
    pub year: Option<i32>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub value: Option<f64>,
}

#[derive(Args)]
pub struct RecordListArgs {
    /// Year to list (defaults to the latest year)
    #[arg(long)]
    pub year: Option<i32>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct RecordRemoveArgs {
    /// Record ID (full or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Year the record belongs to (defaults to the latest year)
    #[arg(long)]
    pub year: Option<i32>,
}

/// Arguments for the `summary` command
#[derive(Args)]
pub struct SummaryArgs {
    /// Year to summarize (defaults to the latest year)
    #[arg(long)]
    pub year: Option<i32>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `benchmark` command
#[derive(Args)]
pub struct BenchmarkArgs {
    /// Annual rate of the lower series (e.g. 0.07)
    #[arg(long, allow_negative_numbers = true)]
    pub low_rate: Option<f64>,

    /// Annual rate of the higher series (e.g. 0.10)
    #[arg(long, allow_negative_numbers = true)]
    pub high_rate: Option<f64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct MilestoneArgs {
    #[command(subcommand)]
    pub command: MilestoneSubcommand,
}

#[derive(Subcommand)]
pub enum MilestoneSubcommand {
    /// Add a net-worth target
    Add(MilestoneAddArgs),
    /// List milestones, smallest target first
    List(OutputArgs),
    /// Change a milestone
    Edit(MilestoneEditArgs),
    /// Delete a milestone
    Remove(IdArgs),
}

#[derive(Args)]
pub struct MilestoneAddArgs {
    #[arg(value_name = "AMOUNT", allow_negative_numbers = true)]
    pub amount: f64,

    #[arg(value_name = "NAME")]
    pub name: String,
}

#[derive(Args)]
pub struct MilestoneEditArgs {
    /// Milestone ID (full or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    #[arg(long, allow_negative_numbers = true)]
    pub amount: Option<f64>,

    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Args)]
pub struct IdArgs {
    /// Record ID (full or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,
}

#[derive(Args)]
pub struct SalaryArgs {
    #[command(subcommand)]
    pub command: SalarySubcommand,
}

#[derive(Subcommand)]
pub enum SalarySubcommand {
    /// Record a salary
    Add(SalaryAddArgs),
    /// List salaries, most recent first
    List(OutputArgs),
    /// Change a salary entry
    Edit(SalaryEditArgs),
    /// Delete a salary entry
    Remove(IdArgs),
    /// Salary over time, oldest first
    Chart(OutputArgs),
}

#[derive(Args)]
pub struct SalaryAddArgs {
    /// Month the salary started (YYYY-MM or M/YYYY)
    #[arg(value_name = "DATE")]
    pub date: String,

    #[arg(value_name = "COMPANY")]
    pub company: String,

    /// Annual amount
    #[arg(value_name = "AMOUNT", allow_negative_numbers = true)]
    pub amount: f64,
}

#[derive(Args)]
pub struct SalaryEditArgs {
    /// Salary entry ID (full or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    #[arg(long)]
    pub date: Option<String>,

    #[arg(long)]
    pub company: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub amount: Option<f64>,
}

#[derive(Args)]
pub struct SavingsArgs {
    #[command(subcommand)]
    pub command: SavingsSubcommand,
}

#[derive(Subcommand)]
pub enum SavingsSubcommand {
    /// Record an amount saved
    Add(SavingsAddArgs),
    /// List savings, most recent first
    List(OutputArgs),
    /// Change a savings entry
    Edit(SavingsEditArgs),
    /// Delete a savings entry
    Remove(IdArgs),
    /// Totals by category, monthly average and savings rate
    Report(SavingsReportArgs),
}

#[derive(Args)]
pub struct SavingsAddArgs {
    /// Date saved (YYYY-MM-DD)
    #[arg(value_name = "DATE")]
    pub date: String,

    #[arg(value_name = "AMOUNT", allow_negative_numbers = true)]
    pub amount: f64,

    /// Savings category
    #[arg(long, default_value = "General Savings")]
    pub category: String,

    #[arg(long, default_value = "")]
    pub notes: String,
}

#[derive(Args)]
pub struct SavingsEditArgs {
    /// Savings entry ID (full or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    #[arg(long)]
    pub date: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub amount: Option<f64>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args)]
pub struct SavingsReportArgs {
    /// Personal pension contribution, % of salary
    #[arg(long, allow_negative_numbers = true)]
    pub personal_pct: Option<f64>,

    /// Employer pension contribution, % of salary
    #[arg(long, allow_negative_numbers = true)]
    pub employer_pct: Option<f64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct EmergencyFundArgs {
    #[command(subcommand)]
    pub command: EmergencyFundSubcommand,
}

#[derive(Subcommand)]
pub enum EmergencyFundSubcommand {
    /// Show the goal, and coverage when expenses are given
    Show(EmergencyFundShowArgs),
    /// Set the goal in months of expenses
    Set(EmergencyFundSetArgs),
}

#[derive(Args)]
pub struct EmergencyFundShowArgs {
    /// Monthly expenses to measure cash holdings against
    #[arg(long, allow_negative_numbers = true)]
    pub monthly_expenses: Option<f64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct EmergencyFundSetArgs {
    #[arg(value_name = "MONTHS", allow_negative_numbers = true)]
    pub months: f64,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,
}

/// Arguments for the `import` command
#[derive(Args)]
pub struct ImportArgs {
    /// Backup file produced by `networth export`
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Replace the ledger without asking
    #[arg(long)]
    pub yes: bool,
}

/// Arguments for the `backup` command
#[derive(Args)]
pub struct BackupArgs {
    /// Destination path
    #[arg(value_name = "DEST")]
    pub destination: String,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a config file and an empty ledger
    Init(InitArgs),

    /// Manage tracked years
    Year(YearArgs),

    /// Manage assets
    Asset(AssetArgs),

    /// Manage liabilities
    Liability(LiabilityArgs),

    /// Totals, debt ratio and category breakdowns for a year
    Summary(SummaryArgs),

    /// Net worth per year with growth
    History(OutputArgs),

    /// Compare net worth with compounding benchmarks
    Benchmark(BenchmarkArgs),

    /// Manage net-worth milestones
    Milestone(MilestoneArgs),

    /// Manage salary history
    Salary(SalaryArgs),

    /// Manage savings history
    Savings(SavingsArgs),

    /// Emergency fund goal and coverage
    #[command(name = "emergency-fund")]
    EmergencyFund(EmergencyFundArgs),

    /// Export the whole ledger as JSON (you own your data)
    Export(ExportArgs),

    /// Replace the ledger with an exported JSON file
    Import(ImportArgs),

    /// Copy the ledger file
    Backup(BackupArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
