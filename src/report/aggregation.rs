//! Totals and chart series for the entries of a month.

use crate::{
    category::Category,
    currency::{Amount, format_brl},
    entry::{Entry, EntryType},
};

/// The title of the chart of revenue per category.
pub const REVENUE_CHART_TITLE: &str = "Revenue Chart";
/// The bar color of the chart of revenue per category.
pub const REVENUE_CHART_COLOR: &str = "#9CCC65";
/// The title of the chart of expenses per category.
pub const EXPENSE_CHART_TITLE: &str = "Expense Chart";
/// The bar color of the chart of expenses per category.
pub const EXPENSE_CHART_COLOR: &str = "#e03131";

/// The revenue and expense totals of a set of entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BalanceSummary {
    pub revenue_total: Amount,
    pub expense_total: Amount,
}

impl BalanceSummary {
    /// Revenue minus expenses.
    pub fn balance(&self) -> Amount {
        self.revenue_total - self.expense_total
    }

    /// The three totals formatted as reais: revenue, expenses and balance.
    pub fn formatted(&self) -> (String, String, String) {
        (
            format_brl(self.revenue_total),
            format_brl(self.expense_total),
            format_brl(self.balance()),
        )
    }
}

/// Sum the revenue and expenses of `entries`.
pub fn calculate_balance(entries: &[Entry]) -> BalanceSummary {
    entries
        .iter()
        .fold(BalanceSummary::default(), |mut summary, entry| {
            match entry.entry_type {
                EntryType::Revenue => summary.revenue_total += entry.amount,
                EntryType::Expense => summary.expense_total += entry.amount,
            }

            summary
        })
}

/// A single series of bars.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    pub label: String,
    pub background_color: String,
    pub data: Vec<Amount>,
}

/// The data of a bar chart with one bar per category.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    /// The category names, one per bar.
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

impl ChartData {
    /// Whether there are no bars to show.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Total the entries of `entry_type` per category.
///
/// Categories keep the order of `categories` and categories without matching
/// entries are left out.
pub fn chart_data(
    categories: &[Category],
    entries: &[Entry],
    entry_type: EntryType,
    title: &str,
    color: &str,
) -> ChartData {
    let (labels, data) = categories
        .iter()
        .filter_map(|category| {
            let mut matching = entries.iter().filter(|entry| {
                Some(entry.category_id) == category.id && entry.entry_type == entry_type
            });

            let first = matching.next()?;
            let total = first.amount + matching.map(|entry| entry.amount).sum::<Amount>();

            Some((category.name.clone(), total))
        })
        .unzip();

    ChartData {
        labels,
        datasets: vec![ChartDataset {
            label: title.to_owned(),
            background_color: color.to_owned(),
            data,
        }],
    }
}

/// Revenue per category.
pub fn revenue_chart_data(categories: &[Category], entries: &[Entry]) -> ChartData {
    chart_data(
        categories,
        entries,
        EntryType::Revenue,
        REVENUE_CHART_TITLE,
        REVENUE_CHART_COLOR,
    )
}

/// Expenses per category.
pub fn expense_chart_data(categories: &[Category], entries: &[Entry]) -> ChartData {
    chart_data(
        categories,
        entries,
        EntryType::Expense,
        EXPENSE_CHART_TITLE,
        EXPENSE_CHART_COLOR,
    )
}
