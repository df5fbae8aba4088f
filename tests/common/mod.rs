#![allow(dead_code)]

use gatelink::config::Config;
use gatelink::domain::entities::{
    Customization, FormFieldDef, FormTheme, NewForm, NewLink, NewSubmission, SubmissionData,
};
use gatelink::state::AppContext;

pub fn empty_context() -> AppContext {
    AppContext::empty(&Config::default())
}

pub fn seeded_context() -> AppContext {
    AppContext::seeded(&Config::default()).expect("embedded fixtures must parse")
}

pub fn new_link_payload(url: &str, form_id: i64) -> NewLink {
    NewLink {
        original_url: url.to_string(),
        form_id,
        customization: Customization::default(),
        status: None,
    }
}

pub fn new_form_payload(name: &str) -> NewForm {
    NewForm {
        name: name.to_string(),
        description: String::new(),
        fields: vec![FormFieldDef {
            name: "email".to_string(),
            label: "Email".to_string(),
            field_type: "email".to_string(),
            required: true,
        }],
        theme: FormTheme::default(),
    }
}

pub fn new_submission_payload(link_id: i64, email: &str) -> NewSubmission {
    let mut data = SubmissionData::new();
    data.insert("email".to_string(), email.to_string());

    NewSubmission { link_id, data }
}
