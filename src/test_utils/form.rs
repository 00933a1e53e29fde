use scraper::{ElementRef, Html, Selector};

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("form").unwrap())
        .next()
        .expect("No form found")
}

#[track_caller]
pub(crate) fn assert_hx_endpoint(form: &ElementRef<'_>, endpoint: &str, attribute: &str) {
    let got = form
        .value()
        .attr(attribute)
        .unwrap_or_else(|| panic!("{attribute} attribute missing"));

    assert_eq!(
        got, endpoint,
        "want form with attribute {attribute}=\"{endpoint}\", got {got:?}"
    );
}

/// Assert that the form has an input named `name` of type `type_` holding `value`.
///
/// For radio buttons, `value` must belong to the checked option.
#[track_caller]
pub(crate) fn assert_form_input_with_value(
    form: &ElementRef<'_>,
    name: &str,
    type_: &str,
    value: &str,
) {
    let selector = Selector::parse(&format!("input[name=\"{name}\"]")).unwrap();
    let inputs: Vec<_> = form.select(&selector).collect();
    assert!(!inputs.is_empty(), "No input found with name \"{name}\"");

    for input in &inputs {
        let input_type = input.value().attr("type").unwrap_or_default();
        assert_eq!(
            input_type, type_,
            "want input {name} with type \"{type_}\", got {input_type:?}"
        );
    }

    let input = if type_ == "radio" {
        inputs
            .iter()
            .find(|input| input.value().attr("checked").is_some())
            .unwrap_or_else(|| panic!("No checked radio button named \"{name}\""))
    } else {
        &inputs[0]
    };

    let input_value = input.value().attr("value").unwrap_or_default();
    assert_eq!(
        input_value, value,
        "want input {name} with value \"{value}\", got {input_value:?}"
    );
}

/// Assert that the select named `name` has the option with `value` selected.
#[track_caller]
pub(crate) fn assert_selected_option(form: &ElementRef<'_>, name: &str, value: &str) {
    let selector = Selector::parse(&format!("select[name=\"{name}\"] option[selected]")).unwrap();

    let selected: Vec<_> = form
        .select(&selector)
        .map(|option| option.value().attr("value").unwrap_or_default())
        .collect();

    assert_eq!(
        selected,
        vec![value],
        "want option \"{value}\" selected in {name}"
    );
}

#[track_caller]
pub(crate) fn assert_form_submit_button_with_text(form: &ElementRef<'_>, text: &str) {
    let submit_button = form
        .select(&Selector::parse("button[type=submit]").unwrap())
        .next()
        .expect("No submit button found");

    let got_text = submit_button.text().collect::<Vec<_>>().join("");
    assert_eq!(text, got_text.trim());
}

/// Assert the messages listed under the form after a failed submission.
#[track_caller]
pub(crate) fn assert_server_error_messages(form: &ElementRef<'_>, want_messages: &[&str]) {
    let selector = Selector::parse("#server-error-messages li").unwrap();

    let got_messages: Vec<String> = form
        .select(&selector)
        .map(|item| item.text().collect::<String>().trim().to_owned())
        .collect();

    assert_eq!(got_messages, want_messages);
}
