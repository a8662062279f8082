use serde_json::{json, Value};

use crate::models::form::SubmissionEntry;

/// Entry of the contact form as the forms subsystem hands it over
pub fn jane_entry() -> SubmissionEntry {
    [
        ("1", "Jane Doe"),
        ("1.3", "Jane"),
        ("1.6", "Doe"),
        ("2", "jane@example.com"),
        ("3", "Hello"),
    ]
    .into_iter()
    .collect()
}

pub const JANE_BODY: &str =
    r#"{"name":"Jane Doe","name_first":"Jane","name_last":"Doe","email":"jane@example.com","message":"Hello"}"#;

/// Generate a submission-finalized event payload for the given form id
pub fn submission_event(form_id: Value) -> Value {
    json!({
        "form": {
            "id": form_id,
            "title": "Contact"
        },
        "entry": {
            "1": "Jane Doe",
            "1.3": "Jane",
            "1.6": "Doe",
            "2": "jane@example.com",
            "3": "Hello",
            "date_created": "2026-10-18 09:30:00"
        }
    })
}
