//! MCP ServerHandler exposing the Close CRM.
//!
//! Every tool follows the same pipeline: build one [`ApiRequest`] from typed parameters, send it,
//! render the JSON answer as text. Any failure along the way becomes an error-flagged tool result
//! whose text starts with the tool's `Error ...ing ...` prefix.
//!
//! **Leads / Contacts / Emails / Opportunities / Calls**
//! - `search_*`, `get_*_details`, `create_*`, `update_*`, `delete_*`
//!
//! **Tasks**
//! - the five above plus `bulk_update_tasks` (filter in the query string, change in the body)
//!
//! **Users**
//! - `test_connection`, `get_current_user`, `list_users`, `get_user_details`,
//!   `get_user_availability`

use std::fmt::Display;

use close_mcp_tools::render::{USER, USER_AVAILABILITY};
use close_mcp_tools::runtime::Result as CloseResult;
use close_mcp_tools::{
    ApiRequest, CloseClient, CloseError, FilterField, ResourceKind, fields, layout_for,
    pretty_json, render_envelope, render_record,
};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, ErrorData, Implementation, ProtocolVersion, ServerCapabilities,
    ServerInfo,
};
use rmcp::{ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, error};

use crate::params::*;

pub const CONNECTED_TEXT: &str = "Successfully connected to Close.com API";
pub const CONNECTION_FAILED_TEXT: &str = "Failed to connect to Close.com API";

/// Close CRM MCP server handler.
#[derive(Debug, Clone)]
pub struct CloseMcpServer {
    tool_router: ToolRouter<Self>,
    client: CloseClient,
}

impl CloseMcpServer {
    pub fn new(client: CloseClient) -> Self {
        Self {
            tool_router: Self::tool_router(),
            client,
        }
    }

    pub fn client(&self) -> &CloseClient {
        &self.client
    }

    /// Send `request` and render the answer; the single error boundary for every tool.
    async fn respond(
        &self,
        prefix: &str,
        request: CloseResult<ApiRequest>,
        render: impl FnOnce(&Value) -> String,
    ) -> CallToolResult {
        let outcome = match request {
            Ok(request) => self.client.execute(&request).await,
            Err(e) => Err(e),
        };
        match outcome {
            Ok(body) => success(render(&body)),
            Err(e) => failure(prefix, &e),
        }
    }

    async fn search<P: Serialize>(
        &self,
        kind: ResourceKind,
        filters: &[FilterField],
        params: &P,
        prefix: &str,
    ) -> CallToolResult {
        let request =
            to_arguments(params).and_then(|args| ApiRequest::search(kind, filters, &args));
        self.respond(prefix, request, |body| {
            render_envelope(layout_for(kind), body)
        })
        .await
    }

    async fn details(&self, kind: ResourceKind, id: &str, prefix: &str) -> CallToolResult {
        self.respond(prefix, ApiRequest::get(kind, id), |body| {
            render_record(layout_for(kind), body)
        })
        .await
    }

    async fn create<P: Serialize>(
        &self,
        kind: ResourceKind,
        params: &P,
        prefix: &str,
    ) -> CallToolResult {
        let request = to_body(params).and_then(|body| ApiRequest::create(kind, body));
        self.respond(prefix, request, |body| {
            render_record(layout_for(kind), body)
        })
        .await
    }

    async fn update<P: Serialize>(
        &self,
        kind: ResourceKind,
        id: &str,
        params: &P,
        prefix: &str,
    ) -> CallToolResult {
        let request = to_body(params).and_then(|body| ApiRequest::update(kind, id, body));
        self.respond(prefix, request, |body| {
            render_record(layout_for(kind), body)
        })
        .await
    }

    async fn delete(&self, kind: ResourceKind, id: &str, noun: &str, prefix: &str) -> CallToolResult {
        let id = id.trim();
        self.respond(prefix, ApiRequest::delete(kind, id), |_| {
            format!("{noun} {id} deleted successfully.")
        })
        .await
    }
}

fn success(text: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text)])
}

fn failure(prefix: &str, err: &dyn Display) -> CallToolResult {
    error!(error = %err, "{prefix}");
    CallToolResult::error(vec![Content::text(format!("{prefix}: {err}"))])
}

/// Present parameters as a JSON object; `None` fields are already gone.
fn to_arguments<P: Serialize>(params: &P) -> CloseResult<Map<String, Value>> {
    match serde_json::to_value(params) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(CloseError::Validation(format!(
            "parameters must serialize to an object, got {other}"
        ))),
        Err(e) => Err(CloseError::Validation(e.to_string())),
    }
}

fn to_body<P: Serialize>(params: &P) -> CloseResult<Value> {
    to_arguments(params).map(Value::Object)
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for CloseMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "close-mcp-server".to_string(),
                title: Some("Close CRM MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some("Leads, contacts, activities, tasks, opportunities and users in Close".to_string()),
                icons: None,
                website_url: Some("https://www.close.com".to_string()),
            },
            instructions: Some(
                "Tools for the Close CRM. Start with test_connection if unsure the API key works.\n\
                 Search tools return at most 10 records unless `limit` is given.\n\
                 Ids look like lead_..., cont_..., acti_..., task_..., oppo_..., user_....\n\
                 Opportunity values are in cents; update and delete tools change live CRM data."
                    .to_string(),
            ),
        }
    }
}

#[tool_router(router = tool_router)]
impl CloseMcpServer {
    // ── connectivity / current user ──

    #[tool(
        name = "test_connection",
        description = "Check that the configured API key can reach the Close.com API",
        annotations(read_only_hint = true, idempotent_hint = true, open_world_hint = true)
    )]
    pub async fn test_connection(&self) -> Result<CallToolResult, ErrorData> {
        debug!("probing /me/");
        if self.client.test_connection().await {
            Ok(success(CONNECTED_TEXT.to_string()))
        } else {
            Ok(CallToolResult::error(vec![Content::text(
                CONNECTION_FAILED_TEXT,
            )]))
        }
    }

    #[tool(
        name = "get_current_user",
        description = "Get the Close.com user that owns the API key",
        annotations(read_only_hint = true, idempotent_hint = true, open_world_hint = true)
    )]
    pub async fn get_current_user(&self) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .respond("Error getting current user", Ok(ApiRequest::me()), |body| {
                render_record(&USER, body)
            })
            .await)
    }

    // ── leads ──

    #[tool(
        name = "search_leads",
        description = "Search for leads in Close.com",
        annotations(read_only_hint = true, idempotent_hint = true, open_world_hint = true)
    )]
    pub async fn search_leads(
        &self,
        Parameters(params): Parameters<SearchLeadsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .search(ResourceKind::Lead, fields::LEAD_SEARCH, &params, "Error searching leads")
            .await)
    }

    #[tool(
        name = "get_lead_details",
        description = "Get detailed information about a specific lead, including contacts, addresses and custom fields",
        annotations(read_only_hint = true, idempotent_hint = true, open_world_hint = true)
    )]
    pub async fn get_lead_details(
        &self,
        Parameters(params): Parameters<LeadIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .details(ResourceKind::Lead, &params.lead_id, "Error getting lead details")
            .await)
    }

    #[tool(
        name = "create_lead",
        description = "Create a new lead, optionally with contacts, addresses and custom fields",
        annotations(read_only_hint = false, destructive_hint = false, idempotent_hint = false, open_world_hint = true)
    )]
    pub async fn create_lead(
        &self,
        Parameters(params): Parameters<CreateLeadParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .create(ResourceKind::Lead, &params, "Error creating lead")
            .await)
    }

    #[tool(
        name = "update_lead",
        description = "Update fields of an existing lead; only supplied fields change",
        annotations(read_only_hint = false, destructive_hint = true, idempotent_hint = true, open_world_hint = true)
    )]
    pub async fn update_lead(
        &self,
        Parameters(params): Parameters<UpdateLeadParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .update(ResourceKind::Lead, &params.lead_id, &params, "Error updating lead")
            .await)
    }

    #[tool(
        name = "delete_lead",
        description = "Delete a lead and everything attached to it",
        annotations(read_only_hint = false, destructive_hint = true, idempotent_hint = true, open_world_hint = true)
    )]
    pub async fn delete_lead(
        &self,
        Parameters(params): Parameters<LeadIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .delete(ResourceKind::Lead, &params.lead_id, "Lead", "Error deleting lead")
            .await)
    }

    // ── contacts ──

    #[tool(
        name = "search_contacts",
        description = "Search for contacts in Close.com",
        annotations(read_only_hint = true, idempotent_hint = true, open_world_hint = true)
    )]
    pub async fn search_contacts(
        &self,
        Parameters(params): Parameters<SearchContactsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .search(
                ResourceKind::Contact,
                fields::CONTACT_SEARCH,
                &params,
                "Error searching contacts",
            )
            .await)
    }

    #[tool(
        name = "get_contact_details",
        description = "Get detailed information about a specific contact",
        annotations(read_only_hint = true, idempotent_hint = true, open_world_hint = true)
    )]
    pub async fn get_contact_details(
        &self,
        Parameters(params): Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .details(
                ResourceKind::Contact,
                &params.contact_id,
                "Error getting contact details",
            )
            .await)
    }

    #[tool(
        name = "create_contact",
        description = "Create a contact, attached to an existing lead when lead_id is given",
        annotations(read_only_hint = false, destructive_hint = false, idempotent_hint = false, open_world_hint = true)
    )]
    pub async fn create_contact(
        &self,
        Parameters(params): Parameters<CreateContactParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .create(ResourceKind::Contact, &params, "Error creating contact")
            .await)
    }

    #[tool(
        name = "update_contact",
        description = "Update fields of an existing contact; only supplied fields change",
        annotations(read_only_hint = false, destructive_hint = true, idempotent_hint = true, open_world_hint = true)
    )]
    pub async fn update_contact(
        &self,
        Parameters(params): Parameters<UpdateContactParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .update(
                ResourceKind::Contact,
                &params.contact_id,
                &params,
                "Error updating contact",
            )
            .await)
    }

    #[tool(
        name = "delete_contact",
        description = "Delete a contact",
        annotations(read_only_hint = false, destructive_hint = true, idempotent_hint = true, open_world_hint = true)
    )]
    pub async fn delete_contact(
        &self,
        Parameters(params): Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .delete(
                ResourceKind::Contact,
                &params.contact_id,
                "Contact",
                "Error deleting contact",
            )
            .await)
    }

    // ── email activities ──

    #[tool(
        name = "search_emails",
        description = "Search email activities by lead, user or creation date",
        annotations(read_only_hint = true, idempotent_hint = true, open_world_hint = true)
    )]
    pub async fn search_emails(
        &self,
        Parameters(params): Parameters<SearchEmailsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .search(
                ResourceKind::EmailActivity,
                fields::EMAIL_SEARCH,
                &params,
                "Error searching emails",
            )
            .await)
    }

    #[tool(
        name = "get_email_details",
        description = "Get detailed information about a specific email activity",
        annotations(read_only_hint = true, idempotent_hint = true, open_world_hint = true)
    )]
    pub async fn get_email_details(
        &self,
        Parameters(params): Parameters<EmailIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .details(
                ResourceKind::EmailActivity,
                &params.email_id,
                "Error getting email details",
            )
            .await)
    }

    #[tool(
        name = "create_email",
        description = "Create an email activity (draft, scheduled, outbox or sent) on a lead",
        annotations(read_only_hint = false, destructive_hint = false, idempotent_hint = false, open_world_hint = true)
    )]
    pub async fn create_email(
        &self,
        Parameters(params): Parameters<CreateEmailParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .create(ResourceKind::EmailActivity, &params, "Error creating email")
            .await)
    }

    #[tool(
        name = "update_email",
        description = "Update an email activity; only supplied fields change",
        annotations(read_only_hint = false, destructive_hint = true, idempotent_hint = true, open_world_hint = true)
    )]
    pub async fn update_email(
        &self,
        Parameters(params): Parameters<UpdateEmailParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .update(
                ResourceKind::EmailActivity,
                &params.email_id,
                &params,
                "Error updating email",
            )
            .await)
    }

    #[tool(
        name = "delete_email",
        description = "Delete an email activity",
        annotations(read_only_hint = false, destructive_hint = true, idempotent_hint = true, open_world_hint = true)
    )]
    pub async fn delete_email(
        &self,
        Parameters(params): Parameters<EmailIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .delete(
                ResourceKind::EmailActivity,
                &params.email_id,
                "Email",
                "Error deleting email",
            )
            .await)
    }

    // ── tasks ──

    #[tool(
        name = "search_tasks",
        description = "Search tasks by id, type, lead, completion, dates, assignee or view",
        annotations(read_only_hint = true, idempotent_hint = true, open_world_hint = true)
    )]
    pub async fn search_tasks(
        &self,
        Parameters(params): Parameters<SearchTasksParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .search(ResourceKind::Task, fields::TASK_SEARCH, &params, "Error searching tasks")
            .await)
    }

    #[tool(
        name = "get_task_details",
        description = "Get detailed information about a specific task",
        annotations(read_only_hint = true, idempotent_hint = true, open_world_hint = true)
    )]
    pub async fn get_task_details(
        &self,
        Parameters(params): Parameters<TaskIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .details(ResourceKind::Task, &params.task_id, "Error getting task details")
            .await)
    }

    #[tool(
        name = "create_task",
        description = "Create a lead task due on a given date",
        annotations(read_only_hint = false, destructive_hint = false, idempotent_hint = false, open_world_hint = true)
    )]
    pub async fn create_task(
        &self,
        Parameters(params): Parameters<CreateTaskParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .create(ResourceKind::Task, &params, "Error creating task")
            .await)
    }

    #[tool(
        name = "update_task",
        description = "Update a task's assignee, date, text or completion",
        annotations(read_only_hint = false, destructive_hint = true, idempotent_hint = true, open_world_hint = true)
    )]
    pub async fn update_task(
        &self,
        Parameters(params): Parameters<UpdateTaskParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .update(ResourceKind::Task, &params.task_id, &params, "Error updating task")
            .await)
    }

    #[tool(
        name = "delete_task",
        description = "Delete a task",
        annotations(read_only_hint = false, destructive_hint = true, idempotent_hint = true, open_world_hint = true)
    )]
    pub async fn delete_task(
        &self,
        Parameters(params): Parameters<TaskIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .delete(ResourceKind::Task, &params.task_id, "Task", "Error deleting task")
            .await)
    }

    #[tool(
        name = "bulk_update_tasks",
        description = "Apply one change (assignee, date, completion) to every task matching the filters; at least one filter is required",
        annotations(read_only_hint = false, destructive_hint = true, idempotent_hint = true, open_world_hint = true)
    )]
    pub async fn bulk_update_tasks(
        &self,
        Parameters(params): Parameters<BulkUpdateTasksParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let request = to_arguments(&params.filter).and_then(|filter| {
            ApiRequest::bulk_update(
                ResourceKind::Task,
                fields::TASK_BULK_FILTER,
                &filter,
                to_body(&params.update)?,
            )
        });
        Ok(self
            .respond("Error bulk updating tasks", request, |body| {
                format!("Bulk update applied to tasks.\n{}", pretty_json(body))
            })
            .await)
    }

    // ── opportunities ──

    #[tool(
        name = "search_opportunities",
        description = "Search opportunities; the result includes total values per period",
        annotations(read_only_hint = true, idempotent_hint = true, open_world_hint = true)
    )]
    pub async fn search_opportunities(
        &self,
        Parameters(params): Parameters<SearchOpportunitiesParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .search(
                ResourceKind::Opportunity,
                fields::OPPORTUNITY_SEARCH,
                &params,
                "Error searching opportunities",
            )
            .await)
    }

    #[tool(
        name = "get_opportunity_details",
        description = "Get detailed information about a specific opportunity",
        annotations(read_only_hint = true, idempotent_hint = true, open_world_hint = true)
    )]
    pub async fn get_opportunity_details(
        &self,
        Parameters(params): Parameters<OpportunityIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .details(
                ResourceKind::Opportunity,
                &params.opportunity_id,
                "Error getting opportunity details",
            )
            .await)
    }

    #[tool(
        name = "create_opportunity",
        description = "Create an opportunity; value is in cents",
        annotations(read_only_hint = false, destructive_hint = false, idempotent_hint = false, open_world_hint = true)
    )]
    pub async fn create_opportunity(
        &self,
        Parameters(params): Parameters<CreateOpportunityParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .create(ResourceKind::Opportunity, &params, "Error creating opportunity")
            .await)
    }

    #[tool(
        name = "update_opportunity",
        description = "Update an opportunity; only supplied fields change",
        annotations(read_only_hint = false, destructive_hint = true, idempotent_hint = true, open_world_hint = true)
    )]
    pub async fn update_opportunity(
        &self,
        Parameters(params): Parameters<UpdateOpportunityParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .update(
                ResourceKind::Opportunity,
                &params.opportunity_id,
                &params,
                "Error updating opportunity",
            )
            .await)
    }

    #[tool(
        name = "delete_opportunity",
        description = "Delete an opportunity",
        annotations(read_only_hint = false, destructive_hint = true, idempotent_hint = true, open_world_hint = true)
    )]
    pub async fn delete_opportunity(
        &self,
        Parameters(params): Parameters<OpportunityIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .delete(
                ResourceKind::Opportunity,
                &params.opportunity_id,
                "Opportunity",
                "Error deleting opportunity",
            )
            .await)
    }

    // ── call activities ──

    #[tool(
        name = "search_calls",
        description = "Search call activities by lead, user or creation date",
        annotations(read_only_hint = true, idempotent_hint = true, open_world_hint = true)
    )]
    pub async fn search_calls(
        &self,
        Parameters(params): Parameters<SearchCallsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .search(
                ResourceKind::CallActivity,
                fields::CALL_SEARCH,
                &params,
                "Error searching calls",
            )
            .await)
    }

    #[tool(
        name = "get_call_details",
        description = "Get detailed information about a specific call activity",
        annotations(read_only_hint = true, idempotent_hint = true, open_world_hint = true)
    )]
    pub async fn get_call_details(
        &self,
        Parameters(params): Parameters<CallIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .details(
                ResourceKind::CallActivity,
                &params.call_id,
                "Error getting call details",
            )
            .await)
    }

    #[tool(
        name = "create_call",
        description = "Log a call activity on a lead",
        annotations(read_only_hint = false, destructive_hint = false, idempotent_hint = false, open_world_hint = true)
    )]
    pub async fn create_call(
        &self,
        Parameters(params): Parameters<CreateCallParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .create(ResourceKind::CallActivity, &params, "Error creating call")
            .await)
    }

    #[tool(
        name = "update_call",
        description = "Update a call activity's note, disposition, duration or status",
        annotations(read_only_hint = false, destructive_hint = true, idempotent_hint = true, open_world_hint = true)
    )]
    pub async fn update_call(
        &self,
        Parameters(params): Parameters<UpdateCallParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .update(
                ResourceKind::CallActivity,
                &params.call_id,
                &params,
                "Error updating call",
            )
            .await)
    }

    #[tool(
        name = "delete_call",
        description = "Delete a call activity",
        annotations(read_only_hint = false, destructive_hint = true, idempotent_hint = true, open_world_hint = true)
    )]
    pub async fn delete_call(
        &self,
        Parameters(params): Parameters<CallIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .delete(
                ResourceKind::CallActivity,
                &params.call_id,
                "Call",
                "Error deleting call",
            )
            .await)
    }

    // ── users ──

    #[tool(
        name = "list_users",
        description = "List users in the organization",
        annotations(read_only_hint = true, idempotent_hint = true, open_world_hint = true)
    )]
    pub async fn list_users(
        &self,
        Parameters(params): Parameters<ListUsersParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .search(ResourceKind::User, fields::USER_LIST, &params, "Error listing users")
            .await)
    }

    #[tool(
        name = "get_user_details",
        description = "Get detailed information about a specific user",
        annotations(read_only_hint = true, idempotent_hint = true, open_world_hint = true)
    )]
    pub async fn get_user_details(
        &self,
        Parameters(params): Parameters<UserIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .details(ResourceKind::User, &params.user_id, "Error getting user details")
            .await)
    }

    #[tool(
        name = "get_user_availability",
        description = "Show which users are available and how many calls each is on",
        annotations(read_only_hint = true, idempotent_hint = true, open_world_hint = true)
    )]
    pub async fn get_user_availability(&self) -> Result<CallToolResult, ErrorData> {
        Ok(self
            .respond(
                "Error getting user availability",
                Ok(ApiRequest::user_availability()),
                |body| render_envelope(&USER_AVAILABILITY, body),
            )
            .await)
    }
}

#[cfg(test)]
mod tests {
    use super::{failure, to_arguments};
    use crate::params::{ListUsersParams, SearchEmailsParams};
    use close_mcp_tools::CloseError;
    use serde_json::json;

    #[test]
    fn unset_parameters_serialize_to_an_empty_object() {
        let args = to_arguments(&SearchEmailsParams::default()).expect("object");
        assert!(args.is_empty());

        let args = to_arguments(&ListUsersParams { limit: Some(0) }).expect("object");
        assert_eq!(args.get("limit"), Some(&json!(0)));
    }

    #[test]
    fn failures_are_error_flagged_and_prefixed() {
        let result = failure(
            "Error searching leads",
            &CloseError::Validation("filter 'query' must be a string, got 1".to_string()),
        );
        assert_eq!(result.is_error, Some(true));
        let text = result
            .content
            .first()
            .and_then(|c| c.raw.as_text())
            .map(|t| t.text.clone())
            .expect("text");
        assert_eq!(
            text,
            "Error searching leads: filter 'query' must be a string, got 1"
        );
    }
}
