//! The create and edit form for entries.

use async_trait::async_trait;
use maud::{Markup, html};

use crate::{
    AppState, endpoints,
    category::{Category, validate_name},
    currency::Amount,
    entry::{Entry, EntryFormData, EntryService, EntryType, format_date, parse_date},
    form::{FormAction, ResourceForm},
    html::{
        FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE, FORM_RADIO_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE,
    },
    resource::{CrudService, ServiceError},
};

/// Describes the entry form.
pub struct EntryForm;

/// The choices offered by the entry form.
#[derive(Debug, Default)]
pub struct EntryFormOptions {
    /// The categories an entry can be assigned to.
    pub categories: Vec<Category>,
}

#[async_trait]
impl ResourceForm for EntryForm {
    type Resource = Entry;
    type Service = EntryService;
    type FormData = EntryFormData;
    type Options = EntryFormOptions;

    const BASE_PATH: &'static str = endpoints::ENTRIES_VIEW;
    const RESOURCE_NAME: &'static str = "Entry";

    fn creation_page_title() -> String {
        "New Entry".to_owned()
    }

    fn edition_page_title(resource: Option<&Entry>) -> String {
        let name = resource.map(|entry| entry.name.as_str()).unwrap_or_default();

        format!("Editing Entry: {name}")
    }

    fn service(state: &AppState) -> &Self::Service {
        &state.entries
    }

    async fn load_options(state: &AppState) -> Result<EntryFormOptions, ServiceError> {
        Ok(EntryFormOptions {
            categories: state.categories.get_all().await?,
        })
    }

    fn resource_to_form_data(entry: &Entry) -> EntryFormData {
        EntryFormData {
            name: entry.name.clone(),
            description: entry.description.clone(),
            entry_type: entry.entry_type,
            amount: entry.amount.to_string(),
            date: format_date(entry.date),
            paid: entry.paid,
            category_id: Some(entry.category_id),
        }
    }

    fn form_data_to_resource(
        form_data: &EntryFormData,
        action: FormAction,
    ) -> Result<Entry, Vec<String>> {
        let mut messages = Vec::new();

        let name = validate_name(&form_data.name)
            .map_err(|error| messages.push(error.to_string()))
            .ok();
        let amount = form_data
            .amount
            .parse::<Amount>()
            .map_err(|error| messages.push(error.to_string()))
            .ok();
        let date = parse_date(&form_data.date)
            .map_err(|error| messages.push(error.to_string()))
            .ok();
        if form_data.category_id.is_none() {
            messages.push("a category must be selected".to_owned());
        }

        match (name, amount, date, form_data.category_id) {
            (Some(name), Some(amount), Some(date), Some(category_id)) => Ok(Entry {
                id: action.id(),
                name: name.to_owned(),
                description: form_data
                    .description
                    .as_deref()
                    .map(str::trim)
                    .filter(|description| !description.is_empty())
                    .map(str::to_owned),
                entry_type: form_data.entry_type,
                amount,
                date,
                paid: form_data.paid,
                category_id,
                category: None,
            }),
            _ => Err(messages),
        }
    }

    fn build_form_fields(form_data: &EntryFormData, options: &EntryFormOptions) -> Markup {
        html! {
            div
            {
                label for="name" class=(FORM_LABEL_STYLE) { "Name" }

                input
                    id="name"
                    type="text"
                    name="name"
                    placeholder="Entry name"
                    value=(form_data.name)
                    required
                    minlength="2"
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description" }

                input
                    id="description"
                    type="text"
                    name="description"
                    placeholder="Optional description"
                    value=(form_data.description.as_deref().unwrap_or_default())
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            fieldset
            {
                legend class=(FORM_LABEL_STYLE) { "Type" }

                div class=(FORM_RADIO_GROUP_STYLE)
                {
                    @for entry_type in EntryType::ALL {
                        @let id = format!("type-{}", entry_type.as_str());

                        div class="flex items-center gap-3"
                        {
                            input
                                id=(id)
                                type="radio"
                                name="type"
                                value=(entry_type.as_str())
                                checked[form_data.entry_type == entry_type]
                                class=(FORM_RADIO_INPUT_STYLE);

                            label for=(id) class=(FORM_RADIO_LABEL_STYLE)
                            {
                                (entry_type.label())
                            }
                        }
                    }
                }
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                input
                    id="amount"
                    type="text"
                    name="amount"
                    placeholder="0,00"
                    inputmode="decimal"
                    value=(form_data.amount)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Date" }

                input
                    id="date"
                    type="text"
                    name="date"
                    placeholder="DD/MM/YYYY"
                    value=(form_data.date)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            fieldset
            {
                legend class=(FORM_LABEL_STYLE) { "Paid" }

                div class=(FORM_RADIO_GROUP_STYLE)
                {
                    @for (value, label) in [(true, "Paid"), (false, "Pending")] {
                        @let id = format!("paid-{value}");

                        div class="flex items-center gap-3"
                        {
                            input
                                id=(id)
                                type="radio"
                                name="paid"
                                value=(value.to_string())
                                checked[form_data.paid == value]
                                class=(FORM_RADIO_INPUT_STYLE);

                            label for=(id) class=(FORM_RADIO_LABEL_STYLE) { (label) }
                        }
                    }
                }
            }

            div
            {
                label for="category_id" class=(FORM_LABEL_STYLE) { "Category" }

                select
                    id="category_id"
                    name="category_id"
                    required
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" selected[form_data.category_id.is_none()]
                    {
                        "Select a category"
                    }

                    @for category in &options.categories {
                        @if let Some(id) = category.id {
                            option value=(id) selected[form_data.category_id == Some(id)]
                            {
                                (category.name)
                            }
                        }
                    }
                }
            }
        }
    }
}
