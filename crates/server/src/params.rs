//! Parameter structs for all MCP tools.
//!
//! Optional fields are skipped when `None`, so serializing a parameter struct yields exactly the
//! keys the caller supplied. Update fields that the Close API accepts as `null` are
//! `Option<Option<T>>`: a missing key stays out of the body, an explicit `null` is sent.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Keeps an explicit `null` as `Some(None)`; pair with `#[serde(default)]` for the missing case.
fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// ── shared enums ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EmailStatus {
    Inbox,
    Draft,
    Scheduled,
    Outbox,
    Sent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaskView {
    Inbox,
    Future,
    Archive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ValuePeriod {
    OneTime,
    Monthly,
    Annual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CallDirection {
    Inbound,
    Outbound,
}

// ── leads ──

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchLeadsParams {
    #[schemars(description = "Search query string (e.g., company name, contact, etc.)")]
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Maximum number of results to return (default: 10)")]
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct LeadIdParams {
    #[schemars(description = "The ID of the lead")]
    pub lead_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateLeadParams {
    #[schemars(description = "Company name of the lead")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Lead status ID")]
    pub status_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Contacts to create with the lead (Close contact objects)")]
    pub contacts: Option<Vec<Map<String, Value>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Addresses (address_1, address_2, city, state, zipcode, country)")]
    pub addresses: Option<Vec<Map<String, Value>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Custom field values keyed by field name or ID")]
    pub custom: Option<Map<String, Value>>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateLeadParams {
    #[serde(skip_serializing)]
    #[schemars(description = "The ID of the lead to update")]
    pub lead_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Lead URL; null clears it")]
    pub url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Lead description; null clears it")]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Map<String, Value>>,
}

// ── contacts ──

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchContactsParams {
    #[schemars(description = "Search query string (e.g., name, email, etc.)")]
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Maximum number of results to return (default: 10)")]
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ContactIdParams {
    #[schemars(description = "The ID of the contact")]
    pub contact_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ContactEmail {
    pub email: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "office, home, direct, mobile, fax or other")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ContactPhone {
    pub phone: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "office, home, direct, mobile, fax or other")]
    pub kind: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateContactParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Lead to attach the contact to; omitted creates a new lead")]
    pub lead_id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<ContactEmail>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phones: Option<Vec<ContactPhone>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Map<String, Value>>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateContactParams {
    #[serde(skip_serializing)]
    #[schemars(description = "The ID of the contact to update")]
    pub contact_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Job title; null clears it")]
    pub title: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Replaces the contact's email list")]
    pub emails: Option<Vec<ContactEmail>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Replaces the contact's phone list")]
    pub phones: Option<Vec<ContactPhone>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Map<String, Value>>,
}

// ── email activities ──

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchEmailsParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Filter by lead ID")]
    pub lead_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Filter by user ID")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Filter by date created after (ISO format)")]
    #[serde(rename = "date_created__gt")]
    pub date_created_gt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Filter by date created before (ISO format)")]
    #[serde(rename = "date_created__lt")]
    pub date_created_lt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Maximum number of results to return (default: 10)")]
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct EmailIdParams {
    #[schemars(description = "The ID of the email activity")]
    pub email_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EmailAttachment {
    pub url: String,
    pub filename: String,
    pub content_type: String,
    pub size: u64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateEmailParams {
    pub lead_id: String,
    pub status: EmailStatus,
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "When to send a scheduled email (ISO format)")]
    pub date_scheduled: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Delay in seconds before sending")]
    pub send_in: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followup_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<EmailAttachment>>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateEmailParams {
    #[serde(skip_serializing)]
    #[schemars(description = "The ID of the email activity to update")]
    pub email_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EmailStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Scheduled send time (ISO format); null unschedules")]
    pub date_scheduled: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Follow-up date (ISO format); null clears it")]
    pub followup_date: Option<Option<String>>,
}

// ── tasks ──

/// Filters shared by `search_tasks` and `bulk_update_tasks`.
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct TaskFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Filter by task ID")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Filter by any of these task IDs")]
    #[serde(rename = "id__in")]
    pub id_in: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Task type (e.g. 'lead', 'incoming_email', 'missed_call')")]
    #[serde(rename = "_type")]
    pub task_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Filter by completion state; false is sent as a filter")]
    pub is_complete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "date__lt")]
    pub date_lt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "date__gt")]
    pub date_gt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "date__lte")]
    pub date_lte: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "date__gte")]
    pub date_gte: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "date_created__lt")]
    pub date_created_lt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "date_created__gt")]
    pub date_created_gt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "date_created__lte")]
    pub date_created_lte: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "date_created__gte")]
    pub date_created_gte: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Filter by assigned user ID")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<TaskView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Sort field, prefixed with '-' for descending")]
    #[serde(rename = "_order_by")]
    pub order_by: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchTasksParams {
    #[serde(flatten)]
    pub filter: TaskFilter,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Maximum number of results to return (default: 10)")]
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct TaskIdParams {
    #[schemars(description = "The ID of the task")]
    pub task_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateTaskParams {
    pub lead_id: String,
    pub text: String,
    #[schemars(description = "Due date (ISO format)")]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "User ID to assign the task to")]
    pub assigned_to: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTaskParams {
    #[serde(skip_serializing)]
    #[schemars(description = "The ID of the task to update")]
    pub task_id: String,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[schemars(description = "User ID to assign; null unassigns")]
    pub assigned_to: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_complete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct TaskChanges {
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[schemars(description = "User ID to assign; null unassigns")]
    pub assigned_to: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_complete: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct BulkUpdateTasksParams {
    #[serde(flatten)]
    pub filter: TaskFilter,
    #[schemars(description = "Changes applied to every matching task")]
    pub update: TaskChanges,
}

// ── opportunities ──

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchOpportunitiesParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "active, won or lost")]
    pub status_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "date_created__lt")]
    pub date_created_lt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "date_created__gt")]
    pub date_created_gt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "date_created__lte")]
    pub date_created_lte: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "date_created__gte")]
    pub date_created_gte: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "date_updated__lt")]
    pub date_updated_lt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "date_updated__gt")]
    pub date_updated_gt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "date_updated__lte")]
    pub date_updated_lte: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "date_updated__gte")]
    pub date_updated_gte: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "date_won__lt")]
    pub date_won_lt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "date_won__gt")]
    pub date_won_gt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "date_won__lte")]
    pub date_won_lte: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "date_won__gte")]
    pub date_won_gte: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_period: Option<ValuePeriod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "_order_by")]
    pub order_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Group aggregates by this field")]
    #[serde(rename = "_group_by")]
    pub group_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Only return these fields")]
    #[serde(rename = "_fields")]
    pub fields: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_saved_search_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Maximum number of results to return (default: 10)")]
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct OpportunityIdParams {
    #[schemars(description = "The ID of the opportunity")]
    pub opportunity_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct CreateOpportunityParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Value in cents (minor currency units)")]
    pub value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_period: Option<ValuePeriod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Win confidence, 0-100")]
    pub confidence: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Map<String, Value>>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateOpportunityParams {
    #[serde(skip_serializing)]
    #[schemars(description = "The ID of the opportunity to update")]
    pub opportunity_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_id: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Value in cents (minor currency units); null clears it")]
    pub value: Option<Option<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_period: Option<ValuePeriod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u8>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub note: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Map<String, Value>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Date won (ISO format); null clears it")]
    pub date_won: Option<Option<String>>,
}

// ── call activities ──

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchCallsParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Filter by lead ID")]
    pub lead_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Filter by user ID")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Filter by date created after (ISO format)")]
    #[serde(rename = "date_created__gt")]
    pub date_created_gt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Filter by date created before (ISO format)")]
    #[serde(rename = "date_created__lt")]
    pub date_created_lt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Maximum number of results to return (default: 10)")]
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CallIdParams {
    #[schemars(description = "The ID of the call activity")]
    pub call_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateCallParams {
    pub lead_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<CallDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Call length in seconds")]
    pub duration: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Call status (e.g. 'completed')")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disposition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateCallParams {
    #[serde(skip_serializing)]
    #[schemars(description = "The ID of the call activity to update")]
    pub call_id: String,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Call note; null clears it")]
    pub note: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disposition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

// ── users ──

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListUsersParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Maximum number of results to return (default: 10)")]
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UserIdParams {
    #[schemars(description = "The ID of the user")]
    pub user_id: String,
}
