#![allow(missing_docs)]

pub(crate) mod backend;
pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use backend::{TestBackend, spawn_backend, spawn_router};
pub(crate) use form::{
    assert_form_input_with_value, assert_form_submit_button_with_text, assert_hx_endpoint,
    assert_selected_option, assert_server_error_messages, must_get_form,
};
pub(crate) use html::{
    assert_alert, assert_title, assert_valid_html, parse_html_document, parse_html_fragment,
};
pub(crate) use http::{assert_content_type, assert_hx_redirect, get_header};
