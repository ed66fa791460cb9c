//! Request descriptors for Close API operations.

use crate::query::{DEFAULT_LIMIT, FilterField, QueryFilter};
use crate::resource::{ME_PATH, ResourceKind, USER_AVAILABILITY_PATH};
use crate::runtime::{CloseError, Result};
use reqwest::Method;
use serde_json::{Map, Value};
use url::Url;

/// Operation kinds a tool can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Search,
    List,
    Get,
    Create,
    Update,
    Delete,
    BulkUpdate,
}

impl Operation {
    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Self::Search | Self::List | Self::Get => Method::GET,
            Self::Create => Method::POST,
            Self::Update | Self::BulkUpdate => Method::PUT,
            Self::Delete => Method::DELETE,
        }
    }
}

/// A fully-built HTTP request: method, path, query and optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: QueryFilter,
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Collection `GET` with the declared filters and a default `_limit`.
    ///
    /// # Errors
    ///
    /// Returns [`CloseError::Validation`] if a filter argument has the wrong shape.
    pub fn search(
        kind: ResourceKind,
        fields: &[FilterField],
        args: &Map<String, Value>,
    ) -> Result<Self> {
        let query = QueryFilter::from_arguments(fields, args)?.with_default_limit(DEFAULT_LIMIT);
        Ok(Self {
            method: Operation::Search.method(),
            path: kind.collection_path().to_string(),
            query,
            body: None,
        })
    }

    /// # Errors
    ///
    /// Returns [`CloseError::Validation`] if `id` is not a valid path segment.
    pub fn get(kind: ResourceKind, id: &str) -> Result<Self> {
        Ok(Self {
            method: Operation::Get.method(),
            path: kind.item_path(id)?,
            query: QueryFilter::default(),
            body: None,
        })
    }

    /// # Errors
    ///
    /// Returns [`CloseError::Validation`] if `body` is not a JSON object.
    pub fn create(kind: ResourceKind, body: Value) -> Result<Self> {
        Ok(Self {
            method: Operation::Create.method(),
            path: kind.collection_path().to_string(),
            query: QueryFilter::default(),
            body: Some(require_object(kind, body)?),
        })
    }

    /// # Errors
    ///
    /// Returns [`CloseError::Validation`] if `id` is invalid or `body` is not a JSON object.
    pub fn update(kind: ResourceKind, id: &str, body: Value) -> Result<Self> {
        Ok(Self {
            method: Operation::Update.method(),
            path: kind.item_path(id)?,
            query: QueryFilter::default(),
            body: Some(require_object(kind, body)?),
        })
    }

    /// # Errors
    ///
    /// Returns [`CloseError::Validation`] if `id` is not a valid path segment.
    pub fn delete(kind: ResourceKind, id: &str) -> Result<Self> {
        Ok(Self {
            method: Operation::Delete.method(),
            path: kind.item_path(id)?,
            query: QueryFilter::default(),
            body: None,
        })
    }

    /// Collection `PUT` whose query selects the records to change and whose body holds the change.
    ///
    /// No default `_limit` is added: the filter addresses the whole matching set.
    ///
    /// # Errors
    ///
    /// Returns [`CloseError::Validation`] if a filter has the wrong shape, no filter is given at
    /// all (that would change every record of `kind`), or `body` is not an object.
    pub fn bulk_update(
        kind: ResourceKind,
        fields: &[FilterField],
        filter: &Map<String, Value>,
        body: Value,
    ) -> Result<Self> {
        let query = QueryFilter::from_arguments(fields, filter)?;
        if query.is_empty() {
            return Err(CloseError::Validation(format!(
                "bulk update of {kind} records needs at least one filter"
            )));
        }
        Ok(Self {
            method: Operation::BulkUpdate.method(),
            path: kind.collection_path().to_string(),
            query,
            body: Some(require_object(kind, body)?),
        })
    }

    /// `GET /me/`.
    #[must_use]
    pub fn me() -> Self {
        Self::fixed(ME_PATH)
    }

    /// `GET /user/availability/`.
    #[must_use]
    pub fn user_availability() -> Self {
        Self::fixed(USER_AVAILABILITY_PATH)
    }

    fn fixed(path: &str) -> Self {
        Self {
            method: Method::GET,
            path: path.to_string(),
            query: QueryFilter::default(),
            body: None,
        }
    }

    /// Absolute URL for this request under `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`CloseError::Config`] if the joined URL does not parse.
    pub fn url(&self, base_url: &str) -> Result<Url> {
        let raw = format!("{}{}", base_url.trim_end_matches('/'), self.path);
        let mut url = Url::parse(&raw)
            .map_err(|e| CloseError::Config(format!("Invalid URL '{raw}': {e}")))?;
        if !self.query.is_empty() {
            url.set_query(Some(&self.query.to_query_string()));
        }
        Ok(url)
    }
}

fn require_object(kind: ResourceKind, body: Value) -> Result<Value> {
    match body {
        Value::Object(_) => Ok(body),
        other => Err(CloseError::Validation(format!(
            "{kind} payload must be a JSON object, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiRequest, Operation};
    use crate::query::fields;
    use crate::resource::ResourceKind;
    use crate::runtime::CloseError;
    use reqwest::Method;
    use serde_json::{Map, Value, json};

    fn args(v: Value) -> Map<String, Value> {
        v.as_object().cloned().expect("object")
    }

    #[test]
    fn search_targets_the_collection_with_default_limit() {
        let req = ApiRequest::search(
            ResourceKind::Lead,
            fields::LEAD_SEARCH,
            &args(json!({ "query": "acme" })),
        )
        .expect("valid");
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.path, "/lead/");
        assert_eq!(req.query.to_query_string(), "query=acme&_limit=10");
        assert!(req.body.is_none());
    }

    #[test]
    fn get_and_delete_use_item_paths_without_query_or_body() {
        let get = ApiRequest::get(ResourceKind::Opportunity, "oppo_1").expect("valid");
        assert_eq!(get.method, Method::GET);
        assert_eq!(get.path, "/opportunity/oppo_1/");
        assert!(get.query.is_empty() && get.body.is_none());

        let del = ApiRequest::delete(ResourceKind::Task, "task_1").expect("valid");
        assert_eq!(del.method, Method::DELETE);
        assert_eq!(del.path, "/task/task_1/");
        assert!(del.query.is_empty() && del.body.is_none());
    }

    #[test]
    fn create_posts_the_body_verbatim() {
        let body = json!({ "lead_id": "lead_1", "text": "Call back", "assigned_to": null });
        let req = ApiRequest::create(ResourceKind::Task, body.clone()).expect("valid");
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.path, "/task/");
        assert_eq!(req.body, Some(body));
    }

    #[test]
    fn update_puts_to_the_item_path() {
        let req = ApiRequest::update(
            ResourceKind::EmailActivity,
            "acti_1",
            json!({ "status": "sent" }),
        )
        .expect("valid");
        assert_eq!(req.method, Method::PUT);
        assert_eq!(req.path, "/activity/email/acti_1/");
        assert_eq!(req.body, Some(json!({ "status": "sent" })));
    }

    #[test]
    fn bulk_update_carries_query_and_body_together() {
        let req = ApiRequest::bulk_update(
            ResourceKind::Task,
            fields::TASK_BULK_FILTER,
            &args(json!({ "lead_id": "lead_1", "is_complete": false })),
            json!({ "is_complete": true }),
        )
        .expect("valid");
        assert_eq!(req.method, Method::PUT);
        assert_eq!(req.path, "/task/");
        assert_eq!(
            req.query.to_query_string(),
            "lead_id=lead_1&is_complete=false"
        );
        assert_eq!(req.body, Some(json!({ "is_complete": true })));
    }

    #[test]
    fn bulk_update_without_any_filter_is_rejected() {
        let err = ApiRequest::bulk_update(
            ResourceKind::Task,
            fields::TASK_BULK_FILTER,
            &args(json!({ "assigned_to": null })),
            json!({ "is_complete": true }),
        )
        .expect_err("empty filter");
        assert!(matches!(err, CloseError::Validation(_)));
    }

    #[test]
    fn non_object_bodies_are_rejected_before_building() {
        let err = ApiRequest::create(ResourceKind::Lead, json!(["x"])).expect_err("array");
        assert!(matches!(err, CloseError::Validation(_)));

        let err = ApiRequest::update(ResourceKind::Lead, "lead_1", Value::Null).expect_err("null");
        assert!(matches!(err, CloseError::Validation(_)));
    }

    #[test]
    fn invalid_ids_are_rejected_before_building() {
        let err = ApiRequest::get(ResourceKind::Contact, "cont/../x").expect_err("slash");
        assert!(matches!(err, CloseError::Validation(_)));
    }

    #[test]
    fn url_joins_base_path_and_query() {
        let req = ApiRequest::search(
            ResourceKind::Opportunity,
            fields::OPPORTUNITY_SEARCH,
            &args(json!({ "value_period": "monthly", "limit": 5 })),
        )
        .expect("valid");
        let url = req.url("https://api.close.com/api/v1/").expect("url");
        assert_eq!(
            url.as_str(),
            "https://api.close.com/api/v1/opportunity/?value_period=monthly&_limit=5"
        );

        let me = ApiRequest::me().url("https://api.close.com/api/v1").expect("url");
        assert_eq!(me.as_str(), "https://api.close.com/api/v1/me/");
    }

    #[test]
    fn operation_methods_follow_rest_conventions() {
        assert_eq!(Operation::List.method(), Method::GET);
        assert_eq!(Operation::Create.method(), Method::POST);
        assert_eq!(Operation::BulkUpdate.method(), Method::PUT);
        assert_eq!(Operation::Delete.method(), Method::DELETE);
        assert_eq!(
            ApiRequest::user_availability().path,
            "/user/availability/"
        );
    }
}
