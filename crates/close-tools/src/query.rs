//! QueryFilter serialization.
//!
//! Each search-like operation declares an ordered list of [`FilterField`]s. The serializer walks
//! that list, emits one query entry per field that is *present* in the arguments, and skips the
//! rest. Presence is a key check, so `false` and `0` are emitted like any other value.

use crate::runtime::{CloseError, Result};
use serde_json::{Map, Value};
use url::form_urlencoded;

/// Default page size for search and list operations.
pub const DEFAULT_LIMIT: u32 = 10;

/// Outgoing query key of the page-size field.
pub const LIMIT_KEY: &str = "_limit";

/// Expected JSON shape of a filter argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Integer,
    Boolean,
    /// Emitted as the comma-join of its elements.
    List,
}

/// One declared filter: argument name, outgoing query key and value shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterField {
    pub param: &'static str,
    pub key: &'static str,
    pub kind: ValueKind,
}

impl FilterField {
    pub const LIMIT: Self = Self {
        param: "limit",
        key: LIMIT_KEY,
        kind: ValueKind::Integer,
    };

    #[must_use]
    pub const fn text(name: &'static str) -> Self {
        Self {
            param: name,
            key: name,
            kind: ValueKind::Text,
        }
    }

    #[must_use]
    pub const fn boolean(name: &'static str) -> Self {
        Self {
            param: name,
            key: name,
            kind: ValueKind::Boolean,
        }
    }

    #[must_use]
    pub const fn list(name: &'static str) -> Self {
        Self {
            param: name,
            key: name,
            kind: ValueKind::List,
        }
    }
}

/// Filter declarations per operation, in the order the query string is built.
pub mod fields {
    use super::FilterField;

    const fn t(name: &'static str) -> FilterField {
        FilterField::text(name)
    }

    pub const LEAD_SEARCH: &[FilterField] = &[t("query"), FilterField::LIMIT];

    pub const CONTACT_SEARCH: &[FilterField] = &[t("query"), FilterField::LIMIT];

    pub const EMAIL_SEARCH: &[FilterField] = &[
        t("lead_id"),
        t("user_id"),
        t("date_created__gt"),
        t("date_created__lt"),
        FilterField::LIMIT,
    ];

    pub const TASK_BULK_FILTER: &[FilterField] = &[
        t("id"),
        FilterField::list("id__in"),
        t("_type"),
        t("lead_id"),
        FilterField::boolean("is_complete"),
        t("date__lt"),
        t("date__gt"),
        t("date__lte"),
        t("date__gte"),
        t("date_created__lt"),
        t("date_created__gt"),
        t("date_created__lte"),
        t("date_created__gte"),
        t("assigned_to"),
        t("view"),
        t("_order_by"),
    ];

    pub const TASK_SEARCH: &[FilterField] = &[
        t("id"),
        FilterField::list("id__in"),
        t("_type"),
        t("lead_id"),
        FilterField::boolean("is_complete"),
        t("date__lt"),
        t("date__gt"),
        t("date__lte"),
        t("date__gte"),
        t("date_created__lt"),
        t("date_created__gt"),
        t("date_created__lte"),
        t("date_created__gte"),
        t("assigned_to"),
        t("view"),
        t("_order_by"),
        FilterField::LIMIT,
    ];

    pub const OPPORTUNITY_SEARCH: &[FilterField] = &[
        t("lead_id"),
        t("user_id"),
        t("status_id"),
        t("status_label"),
        t("status_type"),
        t("date_created__lt"),
        t("date_created__gt"),
        t("date_created__lte"),
        t("date_created__gte"),
        t("date_updated__lt"),
        t("date_updated__gt"),
        t("date_updated__lte"),
        t("date_updated__gte"),
        t("date_won__lt"),
        t("date_won__gt"),
        t("date_won__lte"),
        t("date_won__gte"),
        t("value_period"),
        t("query"),
        t("_order_by"),
        t("_group_by"),
        FilterField::list("_fields"),
        t("lead_saved_search_id"),
        FilterField::LIMIT,
    ];

    pub const CALL_SEARCH: &[FilterField] = &[
        t("lead_id"),
        t("user_id"),
        t("date_created__gt"),
        t("date_created__lt"),
        FilterField::LIMIT,
    ];

    pub const USER_LIST: &[FilterField] = &[FilterField::LIMIT];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPair {
    pub key: String,
    pub value: String,
}

/// Ordered, already-stringified query entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFilter {
    pairs: Vec<QueryPair>,
}

impl QueryFilter {
    /// Serialize `args` according to `fields`.
    ///
    /// Arguments that are not declared in `fields` are ignored (they usually belong to a body).
    /// A declared argument that is missing or JSON `null` emits nothing.
    ///
    /// # Errors
    ///
    /// Returns [`CloseError::Validation`] if a present argument does not have the declared shape.
    pub fn from_arguments(fields: &[FilterField], args: &Map<String, Value>) -> Result<Self> {
        let mut pairs = Vec::new();
        for field in fields {
            let Some(value) = args.get(field.param) else {
                continue;
            };
            if value.is_null() {
                continue;
            }
            pairs.push(QueryPair {
                key: field.key.to_string(),
                value: stringify(field, value)?,
            });
        }
        Ok(Self { pairs })
    }

    /// Append `_limit={limit}` unless the caller already supplied one.
    #[must_use]
    pub fn with_default_limit(mut self, limit: u32) -> Self {
        if self.get(LIMIT_KEY).is_none() {
            self.pairs.push(QueryPair {
                key: LIMIT_KEY.to_string(),
                value: limit.to_string(),
            });
        }
        self
    }

    #[must_use]
    pub fn pairs(&self) -> &[QueryPair] {
        &self.pairs
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Form-urlencoded query string (no leading `?`).
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        for p in &self.pairs {
            ser.append_pair(&p.key, &p.value);
        }
        ser.finish()
    }
}

fn stringify(field: &FilterField, value: &Value) -> Result<String> {
    let mismatch = |expected: &str| {
        CloseError::Validation(format!(
            "filter '{}' must be {expected}, got {value}",
            field.param
        ))
    };

    match field.kind {
        ValueKind::Text => value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch("a string")),
        ValueKind::Integer => match value {
            Value::Number(n) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
            _ => Err(mismatch("an integer")),
        },
        ValueKind::Boolean => value
            .as_bool()
            .map(|b| b.to_string())
            .ok_or_else(|| mismatch("a boolean")),
        ValueKind::List => match value {
            Value::Array(items) => {
                let parts = items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => Ok(s.clone()),
                        Value::Number(n) => Ok(n.to_string()),
                        _ => Err(mismatch("a list of strings")),
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(parts.join(","))
            }
            Value::String(s) => Ok(s.clone()),
            _ => Err(mismatch("a list of strings")),
        },
    }
}
