use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use expense_cli::cli::{
    handle_budget_command, handle_dashboard_command, handle_insights_command,
    handle_report_command, parse_date, CommandContext, ReportCommands,
};
use expense_cli::config::{paths::ExpensePaths, settings::Settings};
use expense_cli::storage::Snapshot;

#[derive(Parser)]
#[command(
    name = "expense",
    author = "Kaylee Beyene",
    version,
    about = "Spending analytics for your expense tracker",
    long_about = "expense-cli reads a snapshot of your expenses and budget categories \
                  and prints the numbers behind the dashboard: monthly and weekly \
                  totals, spending per category and weekday, budget usage and \
                  month-over-month insights."
)]
struct Cli {
    /// Read expenses from this JSON file instead of the data directory
    #[arg(long, global = true, value_name = "FILE")]
    expenses: Option<PathBuf>,

    /// Read categories from this JSON file instead of the data directory
    #[arg(long, global = true, value_name = "FILE")]
    categories: Option<PathBuf>,

    /// Reference date (YYYY-MM-DD) used instead of today
    #[arg(long, global = true, value_name = "DATE")]
    today: Option<String>,

    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Spending reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Month insights compared with the previous month
    Insights {
        /// Month to analyze (e.g., "2025-10"); defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// This month's overview
    #[command(alias = "dash")]
    Dashboard,

    /// Budget usage per category
    Budget {
        /// Month to check (e.g., "2025-10"); defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Create the data directory with default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let today = match cli.today.as_deref() {
        Some(s) => parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing expense-cli at: {}", paths.base_dir().display());
            Snapshot::initialize(&paths)?;
            if !paths.is_initialized() {
                settings.save(&paths)?;
            }
            println!("Initialization complete!");
            println!();
            println!("Place your expense snapshot in:  {}", paths.expenses_file().display());
            println!("Place your category snapshot in: {}", paths.categories_file().display());
        }
        Some(Commands::Config) => {
            println!("expense-cli Configuration");
            println!("=========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Expenses file:   {}", paths.expenses_file().display());
            println!("Categories file: {}", paths.categories_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Report months:   {}", settings.report_months);
            println!("  Recent count:    {}", settings.recent_count);
            println!("  Date format:     {}", settings.date_format);
        }
        Some(Commands::Report(cmd)) => {
            let snapshot = load_snapshot(&paths, &cli.expenses, &cli.categories)?;
            handle_report_command(&context(&snapshot, &settings, today, cli.json), cmd)?;
        }
        Some(Commands::Insights { month }) => {
            let snapshot = load_snapshot(&paths, &cli.expenses, &cli.categories)?;
            handle_insights_command(&context(&snapshot, &settings, today, cli.json), month)?;
        }
        Some(Commands::Dashboard) => {
            let snapshot = load_snapshot(&paths, &cli.expenses, &cli.categories)?;
            handle_dashboard_command(&context(&snapshot, &settings, today, cli.json))?;
        }
        Some(Commands::Budget { month }) => {
            let snapshot = load_snapshot(&paths, &cli.expenses, &cli.categories)?;
            handle_budget_command(&context(&snapshot, &settings, today, cli.json), month)?;
        }
        None => {
            println!("expense-cli - spending analytics for your expense tracker");
            println!();
            println!("Run 'expense --help' for usage information.");
            println!("Run 'expense dashboard' for this month's overview.");
        }
    }

    Ok(())
}

fn load_snapshot(
    paths: &ExpensePaths,
    expenses: &Option<PathBuf>,
    categories: &Option<PathBuf>,
) -> Result<Snapshot> {
    let snapshot = Snapshot::load_with_overrides(paths, expenses.as_deref(), categories.as_deref())?;
    log::debug!(
        "Loaded snapshot with {} expenses and {} categories",
        snapshot.expenses.len(),
        snapshot.categories.len()
    );
    Ok(snapshot)
}

fn context<'a>(
    snapshot: &'a Snapshot,
    settings: &'a Settings,
    today: NaiveDate,
    json: bool,
) -> CommandContext<'a> {
    CommandContext {
        snapshot,
        settings,
        today,
        json,
    }
}
