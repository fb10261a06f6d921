//! CLI commands for reports
//!
//! Monthly, weekly, category and weekday spending reports, printed as tables,
//! as JSON, or exported to CSV.

use clap::Subcommand;
use std::path::PathBuf;

use super::{create_export_file, print_json, CommandContext};
use crate::analytics::{category_totals, daily_patterns, monthly_totals, weekly_totals};
use crate::display::{format_categories, format_monthly, format_patterns, format_weekly};
use crate::error::ExpenseResult;
use crate::export::{export_categories_csv, export_monthly_csv, export_weekly_csv};

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Total spending for each of the last N months
    Monthly {
        /// Number of months to cover (defaults to the configured report_months)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=120))]
        months: Option<u32>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Spending per calendar week of a month
    Weekly {
        /// Month to report on (e.g., "2025-10"); defaults to the current month
        #[arg(short, long)]
        month: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Spending per category across all expenses
    #[command(alias = "category")]
    Categories {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Spending per day of the week
    #[command(alias = "weekdays")]
    Patterns,
}

/// Handle report commands
pub fn handle_report_command(ctx: &CommandContext, cmd: ReportCommands) -> ExpenseResult<()> {
    match cmd {
        ReportCommands::Monthly { months, output } => handle_monthly_report(ctx, months, output),
        ReportCommands::Weekly { month, output } => handle_weekly_report(ctx, month, output),
        ReportCommands::Categories { output } => handle_categories_report(ctx, output),
        ReportCommands::Patterns => handle_patterns_report(ctx),
    }
}

fn handle_monthly_report(
    ctx: &CommandContext,
    months: Option<u32>,
    output: Option<PathBuf>,
) -> ExpenseResult<()> {
    let month_count = months.unwrap_or(ctx.settings.report_months);
    let totals = monthly_totals(&ctx.snapshot.expenses, month_count, ctx.today);

    if let Some(path) = output {
        let writer = create_export_file(&path)?;
        export_monthly_csv(&totals, writer)?;
        println!("Monthly report exported to: {}", path.display());
    } else if ctx.json {
        print_json(&totals)?;
    } else {
        print!("{}", format_monthly(&totals, ctx.symbol()));
    }

    Ok(())
}

fn handle_weekly_report(
    ctx: &CommandContext,
    month: Option<String>,
    output: Option<PathBuf>,
) -> ExpenseResult<()> {
    let month = ctx.month_or_current(month.as_deref())?;
    let totals = weekly_totals(&ctx.snapshot.expenses, month);

    if let Some(path) = output {
        let writer = create_export_file(&path)?;
        export_weekly_csv(&totals, writer)?;
        println!("Weekly report exported to: {}", path.display());
    } else if ctx.json {
        print_json(&totals)?;
    } else {
        print!("{}", format_weekly(&totals, ctx.symbol()));
    }

    Ok(())
}

fn handle_categories_report(ctx: &CommandContext, output: Option<PathBuf>) -> ExpenseResult<()> {
    let totals = category_totals(&ctx.snapshot.expenses, &ctx.snapshot.categories);

    if let Some(path) = output {
        let writer = create_export_file(&path)?;
        export_categories_csv(&totals, writer)?;
        println!("Category report exported to: {}", path.display());
    } else if ctx.json {
        print_json(&totals)?;
    } else {
        print!("{}", format_categories(&totals, ctx.symbol()));
    }

    Ok(())
}

fn handle_patterns_report(ctx: &CommandContext) -> ExpenseResult<()> {
    let pattern = daily_patterns(&ctx.snapshot.expenses);

    if ctx.json {
        print_json(&pattern)?;
    } else {
        print!("{}", format_patterns(&pattern, ctx.symbol()));
    }

    Ok(())
}
