//! Text rendering of Close records and search envelopes.
//!
//! Rendering never fails from the caller's point of view: a record whose shape does not match its
//! layout is returned as pretty-printed JSON instead.

mod catalog;
mod layout;

pub use catalog::{
    CALL_ACTIVITY, CONTACT, EMAIL_ACTIVITY, LEAD, OPPORTUNITY, TASK, USER, USER_AVAILABILITY,
};
pub use layout::Layout;

use crate::resource::ResourceKind;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

const RECORD_SEPARATOR: &str = "\n---\n";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("record is {0}, expected an object")]
    NotAnObject(&'static str),
    #[error("field '{path}' is {found}, expected {expected}")]
    Shape {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Layout used for records of `kind`.
#[must_use]
pub fn layout_for(kind: ResourceKind) -> &'static Layout {
    match kind {
        ResourceKind::Lead => &LEAD,
        ResourceKind::Contact => &CONTACT,
        ResourceKind::EmailActivity => &EMAIL_ACTIVITY,
        ResourceKind::Task => &TASK,
        ResourceKind::Opportunity => &OPPORTUNITY,
        ResourceKind::CallActivity => &CALL_ACTIVITY,
        ResourceKind::User => &USER,
    }
}

/// Render one record, falling back to its pretty-printed JSON when the shape is unexpected.
#[must_use]
pub fn render_record(layout: &Layout, record: &Value) -> String {
    match layout::evaluate(layout, record) {
        Ok(text) => text,
        Err(e) => {
            warn!(kind = layout.plural(), error = %e, "falling back to raw JSON");
            pretty_json(record)
        }
    }
}

/// Render a `{ data: [...], total_results, ... }` search envelope.
#[must_use]
pub fn render_envelope(layout: &Layout, envelope: &Value) -> String {
    let records = match envelope.get("data") {
        Some(Value::Array(items)) if !items.is_empty() => items,
        _ => return layout.empty_sentinel(),
    };

    let total = envelope
        .get("total_results")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    let mut out = vec![format!("Found {total} {}", layout.plural())];

    out.extend(layout::aggregate_lines(layout, envelope));

    out.push(String::new());
    out.push(
        records
            .iter()
            .map(|r| render_record(layout, r))
            .collect::<Vec<_>>()
            .join(RECORD_SEPARATOR),
    );
    out.join("\n")
}

/// Pretty-printed JSON; used for payloads without a layout (bulk updates, fallbacks).
#[must_use]
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
