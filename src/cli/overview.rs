//! CLI commands for the overview screens
//!
//! Dashboard, month insights and budget tracking.

use super::{print_json, CommandContext};
use crate::analytics::{budget_overview, compare_months, dashboard_summary};
use crate::display::{format_budget, format_dashboard, format_insights};
use crate::error::ExpenseResult;

/// Show this month's total, budget usage, recent expenses and the trend
pub fn handle_dashboard_command(ctx: &CommandContext) -> ExpenseResult<()> {
    let summary = dashboard_summary(
        &ctx.snapshot.expenses,
        &ctx.snapshot.categories,
        ctx.today,
        ctx.settings.report_months,
        ctx.settings.recent_count,
    );

    if ctx.json {
        print_json(&summary)?;
    } else {
        print!(
            "{}",
            format_dashboard(&summary, ctx.symbol(), &ctx.settings.date_format)
        );
    }

    Ok(())
}

/// Show a month's insights compared with the month before
pub fn handle_insights_command(ctx: &CommandContext, month: Option<String>) -> ExpenseResult<()> {
    let month = ctx.month_or_current(month.as_deref())?;
    let comparison = compare_months(&ctx.snapshot.expenses, &ctx.snapshot.categories, month);

    if ctx.json {
        print_json(&comparison)?;
    } else {
        print!("{}", format_insights(&comparison, ctx.symbol()));
    }

    Ok(())
}

/// Show budget usage per category for a month
pub fn handle_budget_command(ctx: &CommandContext, month: Option<String>) -> ExpenseResult<()> {
    let month = ctx.month_or_current(month.as_deref())?;
    let overview = budget_overview(&ctx.snapshot.expenses, &ctx.snapshot.categories, month);

    if ctx.json {
        print_json(&overview)?;
    } else {
        print!("{}", format_budget(&overview, ctx.symbol()));
    }

    Ok(())
}
