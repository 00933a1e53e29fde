//! The reports page: totals and charts for the entries of a month.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Query;
use maud::{Markup, html};
use serde::Deserialize;
use time::Month;

use crate::{
    AppState,
    alert::Alert,
    category::Category,
    endpoints,
    entry::{Entry, EntryService},
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, HeadElement,
        PAGE_CONTAINER_STYLE, base,
    },
    navigation::NavBar,
    report::{
        aggregation::{BalanceSummary, calculate_balance, expense_chart_data, revenue_chart_data},
        charts::{ECHARTS_SCRIPT_URL, ReportChart, charts_script, charts_view},
    },
    resource::{CrudService, ResourceService, ServiceError},
};

/// Shown until both the month and year have been chosen.
pub const SELECT_PERIOD_MESSAGE: &str =
    "You need to select the month and year to generate the reports";

/// The state needed for the reports page.
#[derive(Debug, Clone)]
pub struct ReportsPageState {
    pub categories: ResourceService<Category>,
    pub entries: EntryService,
}

impl FromRef<AppState> for ReportsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            categories: state.categories.clone(),
            entries: state.entries.clone(),
        }
    }
}

/// The month and year chosen on the reports page.
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    /// 1 to 12.
    pub month: Option<u8>,
    pub year: Option<i32>,
}

impl ReportQuery {
    /// The chosen period, `None` unless both a valid month and a year were given.
    fn period(&self) -> Option<(Month, i32)> {
        let month = Month::try_from(self.month?).ok()?;

        Some((month, self.year?))
    }
}

/// Render the reports page.
///
/// Nothing is fetched from the REST API until both the month and year are
/// given.
pub async fn get_reports_page(
    State(state): State<ReportsPageState>,
    Query(query): Query<ReportQuery>,
) -> Response {
    let Some((month, year)) = query.period() else {
        return reports_view(&query, None, None).into_response();
    };

    match load_report_data(&state, month, year).await {
        Ok((categories, entries)) => {
            let report = Report::new(&categories, &entries);
            reports_view(&query, Some(&report), None).into_response()
        }
        Err(error) => reports_view(
            &query,
            None,
            Some(Alert::Error {
                message: "Could not generate the reports".to_owned(),
                details: error.server_error_messages().join(" "),
            }),
        )
        .into_response(),
    }
}

async fn load_report_data(
    state: &ReportsPageState,
    month: Month,
    year: i32,
) -> Result<(Vec<Category>, Vec<Entry>), ServiceError> {
    let categories = state.categories.get_all().await?;
    let entries = state
        .entries
        .get_by_month_and_year(u8::from(month), year)
        .await?;

    Ok((categories, entries))
}

struct Report {
    summary: BalanceSummary,
    charts: [ReportChart; 2],
}

impl Report {
    fn new(categories: &[Category], entries: &[Entry]) -> Self {
        Self {
            summary: calculate_balance(entries),
            charts: [
                ReportChart::new("revenue-chart", &revenue_chart_data(categories, entries)),
                ReportChart::new("expense-chart", &expense_chart_data(categories, entries)),
            ],
        }
    }
}

fn reports_view(query: &ReportQuery, report: Option<&Report>, alert: Option<Alert>) -> Markup {
    let nav_bar = NavBar::new(endpoints::REPORTS_VIEW).into_html();

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-6 w-full lg:max-w-5xl"
            {
                h1 class="text-xl font-bold" { "Reports" }

                (period_form(query))

                @match report {
                    Some(report) => { (report_view(report)) }
                    None => {
                        p id="select-period" class="text-gray-500 dark:text-gray-400"
                        {
                            (SELECT_PERIOD_MESSAGE)
                        }
                    }
                }
            }
        }
    );

    let head_elements = match report {
        Some(report) => vec![
            HeadElement::ScriptLink(ECHARTS_SCRIPT_URL.to_owned()),
            charts_script(&report.charts),
        ],
        None => Vec::new(),
    };

    base("Reports", &head_elements, &content, alert)
}

fn period_form(query: &ReportQuery) -> Markup {
    let months = (1..=12u8).filter_map(|number| Month::try_from(number).ok());

    html!(
        form
            method="get"
            action=(endpoints::REPORTS_VIEW)
            class="flex flex-wrap items-end gap-4"
        {
            div
            {
                label for="month" class=(FORM_LABEL_STYLE) { "Month" }

                select id="month" name="month" class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" selected[query.month.is_none()] { "Month" }

                    @for month in months {
                        @let number = u8::from(month);

                        option value=(number) selected[query.month == Some(number)]
                        {
                            (month.to_string())
                        }
                    }
                }
            }

            div
            {
                label for="year" class=(FORM_LABEL_STYLE) { "Year" }

                input
                    id="year"
                    type="number"
                    name="year"
                    min="1900"
                    max="9999"
                    placeholder="YYYY"
                    value=[query.year]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Generate reports" }
            }
        }
    )
}

fn report_view(report: &Report) -> Markup {
    let (revenue, expenses, balance) = report.summary.formatted();
    let balance_style = if report.summary.balance().is_negative() {
        "text-red-600 dark:text-red-400"
    } else {
        "text-green-600 dark:text-green-400"
    };

    html!(
        section id="balance" class="grid grid-cols-1 md:grid-cols-3 gap-4"
        {
            (summary_card("revenue-total", "Revenue", &revenue, "text-green-600 dark:text-green-400"))
            (summary_card("expense-total", "Expenses", &expenses, "text-red-600 dark:text-red-400"))
            (summary_card("balance-total", "Balance", &balance, balance_style))
        }

        (charts_view(&report.charts))
    )
}

fn summary_card(id: &str, title: &str, amount: &str, amount_style: &str) -> Markup {
    html!(
        div class="p-4 rounded bg-white dark:bg-gray-800 shadow"
        {
            h2 class="text-sm uppercase text-gray-500 dark:text-gray-400" { (title) }

            p id=(id) class={ "text-2xl font-bold " (amount_style) } { (amount) }
        }
    )
}
