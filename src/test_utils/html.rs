use axum::{body::Body, response::Response};
use scraper::{Html, Selector};

async fn body_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not get response body");

    String::from_utf8_lossy(&body).to_string()
}

pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    Html::parse_document(&body_text(response).await)
}

pub(crate) async fn parse_html_fragment(response: Response<Body>) -> Html {
    Html::parse_fragment(&body_text(response).await)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

#[track_caller]
pub(crate) fn assert_title(html: &Html, want_title: &str) {
    let title = html
        .select(&Selector::parse("title").unwrap())
        .next()
        .expect("No title found")
        .text()
        .collect::<String>();

    assert_eq!(title, format!("{want_title} - Finances"));
}

/// Assert that the document has an alert of `alert_type` ("success" or
/// "error") whose first paragraph is `message`.
#[track_caller]
pub(crate) fn assert_alert(html: &Html, alert_type: &str, message: &str) {
    let selector = Selector::parse(&format!(
        "div[role=alert][data-alert-type=\"{alert_type}\"] p"
    ))
    .unwrap();

    let got_message = html
        .select(&selector)
        .next()
        .unwrap_or_else(|| panic!("No {alert_type} alert found in {}", html.html()))
        .text()
        .collect::<String>();

    assert_eq!(got_message, message);
}
