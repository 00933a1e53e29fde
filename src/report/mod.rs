//! The monthly report: revenue and expense totals, the balance, and charts of
//! the totals per category.

mod aggregation;
mod charts;
mod page;

pub use page::get_reports_page;
