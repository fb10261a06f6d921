//! Expense analytics
//!
//! Pure aggregation over a snapshot of expenses and categories. Nothing in
//! this module reads the clock or touches the filesystem: callers pass the
//! reference date or month explicitly, and every function returns the same
//! result for the same inputs. Malformed data (unparseable dates, dangling
//! category references, empty collections) produces neutral values instead
//! of errors.
//!
//! - `monthly`: totals for the trailing N calendar months
//! - `weekly`: totals for each Sunday..Saturday row of a month's calendar grid
//! - `category`: totals per resolved category
//! - `efficiency`: budget usage and period-over-period change
//! - `patterns`: totals per weekday
//! - `insights`: headline figures for a month and the previous one
//! - `dashboard`: the overview screen
//! - `budget`: per-category budget tracking

pub mod budget;
pub mod category;
pub mod dashboard;
pub mod efficiency;
pub mod insights;
pub mod monthly;
pub mod patterns;
pub mod resolve;
pub mod weekly;

pub use budget::{budget_overview, BudgetOverview, BudgetRow, BudgetStatus};
pub use category::{category_totals, CategoryTotal, FALLBACK_COLORS};
pub use dashboard::{dashboard_summary, recent_expenses, DashboardSummary, RecentExpense};
pub use efficiency::{budget_efficiency, total_budget, Change, Trend};
pub use insights::{compare_months, month_insights, InsightComparison, MonthInsights};
pub use monthly::{month_total, monthly_totals, trailing_months, MonthlyTotal};
pub use patterns::{daily_patterns, weekday_name, WeekdayPattern, WeekdayTotal};
pub use resolve::{CategoryIndex, Resolved, UNCATEGORIZED};
pub use weekly::{month_grid, weekly_totals, WeeklyTotal};
