//! Close API resource kinds and their REST paths.

use crate::runtime::{CloseError, Result};
use std::fmt;

/// Connectivity probe and "current user" endpoint.
pub const ME_PATH: &str = "/me/";

/// Availability of every user in the organization.
pub const USER_AVAILABILITY_PATH: &str = "/user/availability/";

/// The fixed set of CRM resources exposed as tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Lead,
    Contact,
    EmailActivity,
    Task,
    Opportunity,
    CallActivity,
    User,
}

impl ResourceKind {
    pub const ALL: [Self; 7] = [
        Self::Lead,
        Self::Contact,
        Self::EmailActivity,
        Self::Task,
        Self::Opportunity,
        Self::CallActivity,
        Self::User,
    ];

    /// Collection path, always with a trailing slash.
    #[must_use]
    pub fn collection_path(self) -> &'static str {
        match self {
            Self::Lead => "/lead/",
            Self::Contact => "/contact/",
            Self::EmailActivity => "/activity/email/",
            Self::Task => "/task/",
            Self::Opportunity => "/opportunity/",
            Self::CallActivity => "/activity/call/",
            Self::User => "/user/",
        }
    }

    /// Path of a single record (`{collection}{id}/`).
    ///
    /// # Errors
    ///
    /// Returns [`CloseError::Validation`] if `id` is empty or would escape its path segment.
    pub fn item_path(self, id: &str) -> Result<String> {
        let id = validate_id(self, id)?;
        Ok(format!("{}{id}/", self.collection_path()))
    }

    /// Human label used in tool messages ("lead", "email activity", ...).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Lead => "lead",
            Self::Contact => "contact",
            Self::EmailActivity => "email activity",
            Self::Task => "task",
            Self::Opportunity => "opportunity",
            Self::CallActivity => "call activity",
            Self::User => "user",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn validate_id(kind: ResourceKind, id: &str) -> Result<&str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(CloseError::Validation(format!("{kind} id must not be empty")));
    }
    if id
        .chars()
        .any(|c| matches!(c, '/' | '?' | '#' | '%') || c.is_whitespace())
    {
        return Err(CloseError::Validation(format!(
            "invalid {kind} id '{id}': ids must be a single path segment"
        )));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::ResourceKind;
    use crate::runtime::CloseError;

    #[test]
    fn every_path_keeps_its_trailing_slash() {
        for kind in ResourceKind::ALL {
            let collection = kind.collection_path();
            assert!(collection.starts_with('/') && collection.ends_with('/'));

            let item = kind.item_path("abc_123").expect("valid id");
            assert_eq!(item, format!("{collection}abc_123/"));
        }
    }

    #[test]
    fn activity_paths_are_nested() {
        assert_eq!(
            ResourceKind::EmailActivity.item_path("acti_1").expect("valid id"),
            "/activity/email/acti_1/"
        );
        assert_eq!(
            ResourceKind::CallActivity.collection_path(),
            "/activity/call/"
        );
    }

    #[test]
    fn item_path_trims_surrounding_whitespace() {
        assert_eq!(
            ResourceKind::Lead.item_path("  lead_9 ").expect("valid id"),
            "/lead/lead_9/"
        );
    }

    #[test]
    fn item_path_rejects_empty_and_multi_segment_ids() {
        for bad in ["", "   ", "lead/1", "a?b=c", "x#y", "two words", "%2F"] {
            let err = ResourceKind::Lead.item_path(bad).expect_err(bad);
            assert!(matches!(err, CloseError::Validation(_)), "{bad}: {err}");
        }
    }
}
