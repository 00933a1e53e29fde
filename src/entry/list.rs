//! Entries listing page.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState,
    alert::Alert,
    currency::format_brl,
    endpoints,
    entry::{Entry, EntryService, EntryType, format_date},
    html::{
        LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        base, edit_delete_action_links,
    },
    navigation::NavBar,
    resource::CrudService,
};

/// The state needed for the entries listing page.
#[derive(Debug, Clone)]
pub struct EntriesPageState {
    pub entries: EntryService,
}

impl FromRef<AppState> for EntriesPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            entries: state.entries.clone(),
        }
    }
}

/// Render the entries listing page.
pub async fn get_entries_page(State(state): State<EntriesPageState>) -> Response {
    match state.entries.get_all().await {
        Ok(entries) => entries_view(&entries, None).into_response(),
        Err(error) => entries_view(
            &[],
            Some(Alert::Error {
                message: "Could not load the entries".to_owned(),
                details: error.server_error_messages().join(" "),
            }),
        )
        .into_response(),
    }
}

fn entries_view(entries: &[Entry], alert: Option<Alert>) -> Markup {
    let new_entry_route = endpoints::NEW_ENTRY_VIEW;
    let nav_bar = NavBar::new(endpoints::ENTRIES_VIEW).into_html();

    let table_row = |entry: &Entry| {
        let Some(id) = entry.id else {
            return html!();
        };
        let edit_url = endpoints::format_endpoint(endpoints::EDIT_ENTRY_VIEW, id);
        let delete_url = endpoints::format_endpoint(endpoints::ENTRY, id);
        let confirm_message = format!("Are you sure you want to delete '{}'?", entry.name);
        let amount_style = match entry.entry_type {
            EntryType::Expense => "text-red-600 dark:text-red-400",
            EntryType::Revenue => "text-green-600 dark:text-green-400",
        };
        let category_name = entry
            .category
            .as_ref()
            .map(|category| category.name.as_str())
            .unwrap_or_default();

        html!(
            tr class=(TABLE_ROW_STYLE)
            {
                td class=(TABLE_CELL_STYLE)
                {
                    (entry.name)

                    @if let Some(description) = &entry.description {
                        p class="text-xs text-gray-400" { (description) }
                    }
                }

                td class=(TABLE_CELL_STYLE) { (format_date(entry.date)) }

                td class=(TABLE_CELL_STYLE) { (category_name) }

                td class={ (TABLE_CELL_STYLE) " " (amount_style) }
                {
                    (format_brl(entry.amount))
                }

                td class=(TABLE_CELL_STYLE) { (entry.paid_label()) }

                td class=(TABLE_CELL_STYLE)
                {
                    (edit_delete_action_links(&edit_url, &delete_url, &confirm_message))
                }
            }
        )
    };

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Entries" }

                    a href=(new_entry_route) class=(LINK_STYLE) { "Create Entry" }
                }

                section class="dark:bg-gray-800 w-full overflow-x-auto"
                {
                    table class="w-full text-sm text-left rtl:text-right
                        text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Name" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Status" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                            }
                        }

                        tbody
                        {
                            @for entry in entries {
                                (table_row(entry))
                            }

                            @if entries.is_empty() {
                                tr
                                {
                                    td
                                        colspan="6"
                                        class="px-6 py-4 text-center
                                            text-gray-500 dark:text-gray-400"
                                    {
                                        "No entries recorded yet. "
                                        a href=(new_entry_route) class=(LINK_STYLE)
                                        {
                                            "Record your first entry"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    );

    base("Entries", &[], &content, alert)
}
