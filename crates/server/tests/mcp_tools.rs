mod common;

use close_mcp_test_support::{MockResponse, RecordedRequest};
use serde_json::json;

use common::Harness;

fn close_api(req: &RecordedRequest) -> MockResponse {
    match (req.method.as_str(), req.path.as_str()) {
        ("GET", "/me/") => MockResponse::json(
            200,
            json!({ "id": "user_me", "first_name": "Ada", "last_name": "Lovelace", "email": "ada@example.com" }),
        ),
        ("GET", "/lead/") => MockResponse::json(
            200,
            json!({ "data": [{ "id": "lead_1", "display_name": "Acme" }], "total_results": 1 }),
        ),
        ("GET", "/lead/lead_1/") => MockResponse::json(
            200,
            json!({ "id": "lead_1", "display_name": "Acme", "status_label": "Potential" }),
        ),
        ("GET", "/task/") => MockResponse::json(200, json!({ "data": [], "total_results": 0 })),
        ("PUT", "/task/") => MockResponse::json(200, json!({ "updated": 2 })),
        ("PUT", "/task/task_1/") => MockResponse::json(
            200,
            json!({ "id": "task_1", "text": "Call back", "is_complete": false }),
        ),
        ("DELETE", "/task/task_1/") => MockResponse::empty(200),
        ("POST", "/opportunity/") => {
            let mut body = req.json_body().unwrap_or_else(|| json!({}));
            body["id"] = json!("oppo_new");
            MockResponse::json(200, body)
        }
        ("GET", "/activity/call/") => MockResponse::json(
            200,
            json!({
                "data": [{ "id": "acti_1", "cost": 199, "duration": 60 }, { "id": "acti_2" }],
                "total_results": 2,
                "total_duration": 60,
            }),
        ),
        ("GET", "/user/availability/") => MockResponse::json(
            200,
            json!({ "data": [{ "user_id": "user_me", "status": "available", "active_calls": [] }] }),
        ),
        _ => MockResponse::text(404, "{\"error\":\"Not found\"}"),
    }
}

#[tokio::test]
async fn lists_every_tool_with_method_annotations() -> anyhow::Result<()> {
    let h = Harness::start(close_api).await?;
    let tools = h.tools().await?;
    assert_eq!(tools.len(), 36, "{:?}", tools.iter().map(|t| &t.name).collect::<Vec<_>>());

    let find = |name: &str| {
        tools
            .iter()
            .find(|t| t.name == name)
            .and_then(|t| t.annotations.clone())
            .unwrap_or_else(|| panic!("{name} missing or unannotated"))
    };
    let search = find("search_leads");
    assert_eq!(search.read_only_hint, Some(true));
    assert_eq!(search.open_world_hint, Some(true));

    let create = find("create_task");
    assert_eq!(create.read_only_hint, Some(false));
    assert_eq!(create.destructive_hint, Some(false));
    assert_eq!(create.idempotent_hint, Some(false));

    let delete = find("delete_opportunity");
    assert_eq!(delete.destructive_hint, Some(true));
    assert_eq!(delete.idempotent_hint, Some(true));

    assert!(h.requests().is_empty());
    h.shutdown().await
}

#[tokio::test]
async fn search_leads_adds_default_limit_and_renders_the_envelope() -> anyhow::Result<()> {
    let h = Harness::start(close_api).await?;
    let out = h.call("search_leads", json!({ "query": "acme" })).await?;
    assert!(!out.is_error, "{}", out.text);
    assert!(out.text.starts_with("Found 1 leads\n\nLead ID: lead_1\nCompany Name: Acme"));

    let seen = h.requests();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].path, "/lead/");
    assert_eq!(seen[0].query, "query=acme&_limit=10");
    assert_eq!(seen[0].header("authorization"), Some("Basic YXBpX3Rlc3Q6"));
    h.shutdown().await
}

#[tokio::test]
async fn lead_details_render_section_placeholders() -> anyhow::Result<()> {
    let h = Harness::start(close_api).await?;
    let out = h.call("get_lead_details", json!({ "lead_id": "lead_1" })).await?;
    assert!(!out.is_error);
    assert!(out.text.starts_with("Lead ID: lead_1\nCompany Name: Acme\nStatus: Potential"));
    assert!(out.text.contains("Contacts:\nNo contacts"));
    assert!(out.text.contains("Addresses:\nNo addresses"));
    assert!(out.text.contains("Custom Fields:\nNo custom fields"));
    h.shutdown().await
}

#[tokio::test]
async fn api_errors_become_prefixed_error_results() -> anyhow::Result<()> {
    let h = Harness::start(close_api).await?;
    let out = h.call("get_lead_details", json!({ "lead_id": "lead_gone" })).await?;
    assert!(out.is_error);
    assert_eq!(
        out.text,
        "Error getting lead details: Close.com API error: 404 Not Found - {\"error\":\"Not found\"}"
    );

    // The server keeps serving after a failed call.
    let out = h.call("test_connection", json!({})).await?;
    assert!(!out.is_error);
    assert_eq!(out.text, "Successfully connected to Close.com API");
    h.shutdown().await
}

#[tokio::test]
async fn malformed_ids_are_rejected_before_any_request() -> anyhow::Result<()> {
    let h = Harness::start(close_api).await?;
    let out = h.call("delete_contact", json!({ "contact_id": "cont_1/../x" })).await?;
    assert!(out.is_error);
    assert!(out.text.starts_with("Error deleting contact: "), "{}", out.text);
    assert!(h.requests().is_empty());
    h.shutdown().await
}

#[tokio::test]
async fn unknown_enum_values_are_rejected_by_the_schema_layer() -> anyhow::Result<()> {
    let h = Harness::start(close_api).await?;
    let result = h
        .call("search_opportunities", json!({ "value_period": "weekly" }))
        .await;
    assert!(result.is_err());
    assert!(h.requests().is_empty());
    h.shutdown().await
}

#[tokio::test]
async fn falsy_task_filters_are_sent_and_empty_results_use_the_sentinel() -> anyhow::Result<()> {
    let h = Harness::start(close_api).await?;
    let out = h
        .call(
            "search_tasks",
            json!({ "is_complete": false, "view": "inbox", "limit": 0 }),
        )
        .await?;
    assert!(!out.is_error);
    assert_eq!(out.text, "No tasks found.");
    assert_eq!(
        h.requests()[0].query,
        "is_complete=false&view=inbox&_limit=0"
    );
    h.shutdown().await
}

#[tokio::test]
async fn bulk_update_sends_filter_query_and_change_body() -> anyhow::Result<()> {
    let h = Harness::start(close_api).await?;
    let out = h
        .call(
            "bulk_update_tasks",
            json!({
                "lead_id": "lead_1",
                "id__in": ["task_1", "task_2"],
                "update": { "is_complete": true, "assigned_to": null },
            }),
        )
        .await?;
    assert!(!out.is_error, "{}", out.text);
    assert_eq!(
        out.text,
        "Bulk update applied to tasks.\n{\n  \"updated\": 2\n}"
    );

    let r = &h.requests()[0];
    assert_eq!(r.method, "PUT");
    assert_eq!(r.path, "/task/");
    assert_eq!(r.query, "id__in=task_1%2Ctask_2&lead_id=lead_1");
    assert_eq!(
        r.json_body(),
        Some(json!({ "is_complete": true, "assigned_to": null }))
    );
    h.shutdown().await
}

#[tokio::test]
async fn update_sends_only_supplied_fields() -> anyhow::Result<()> {
    let h = Harness::start(close_api).await?;
    let out = h
        .call(
            "update_task",
            json!({ "task_id": "task_1", "assigned_to": null, "is_complete": false }),
        )
        .await?;
    assert!(!out.is_error, "{}", out.text);
    assert!(out.text.starts_with("Task:\nID: task_1\n"));
    assert!(out.text.contains("Status: Incomplete"));

    let r = &h.requests()[0];
    assert_eq!(r.method, "PUT");
    assert_eq!(r.path, "/task/task_1/");
    assert_eq!(
        r.json_body(),
        Some(json!({ "assigned_to": null, "is_complete": false }))
    );
    h.shutdown().await
}

#[tokio::test]
async fn delete_reports_the_removed_id() -> anyhow::Result<()> {
    let h = Harness::start(close_api).await?;
    let out = h.call("delete_task", json!({ "task_id": "task_1" })).await?;
    assert!(!out.is_error);
    assert_eq!(out.text, "Task task_1 deleted successfully.");
    assert_eq!(h.requests()[0].method, "DELETE");
    h.shutdown().await
}

#[tokio::test]
async fn delete_trims_the_id_in_path_and_message() -> anyhow::Result<()> {
    let h = Harness::start(close_api).await?;
    let out = h.call("delete_task", json!({ "task_id": "  task_1 " })).await?;
    assert!(!out.is_error, "{}", out.text);
    assert_eq!(out.text, "Task task_1 deleted successfully.");
    assert_eq!(h.requests()[0].path, "/task/task_1/");
    h.shutdown().await
}

#[tokio::test]
async fn bulk_update_without_filters_is_refused_before_any_request() -> anyhow::Result<()> {
    let h = Harness::start(close_api).await?;
    let out = h
        .call("bulk_update_tasks", json!({ "update": { "is_complete": true } }))
        .await?;
    assert!(out.is_error);
    assert!(out.text.starts_with("Error bulk updating tasks: "), "{}", out.text);
    assert!(out.text.contains("at least one filter"), "{}", out.text);
    assert!(h.requests().is_empty());
    h.shutdown().await
}

#[tokio::test]
async fn create_opportunity_posts_the_body_and_renders_major_units() -> anyhow::Result<()> {
    let h = Harness::start(close_api).await?;
    let out = h
        .call(
            "create_opportunity",
            json!({ "lead_id": "lead_1", "value": 250_000, "confidence": 0 }),
        )
        .await?;
    assert!(!out.is_error, "{}", out.text);
    assert!(out.text.contains("ID: oppo_new"));
    assert!(out.text.contains("Value: 2500 one_time"));
    assert!(out.text.contains("Confidence: 0%"));

    let r = &h.requests()[0];
    assert_eq!(r.method, "POST");
    assert_eq!(
        r.json_body(),
        Some(json!({ "lead_id": "lead_1", "value": 250_000, "confidence": 0 }))
    );
    h.shutdown().await
}

#[tokio::test]
async fn call_search_renders_costs_and_present_aggregates() -> anyhow::Result<()> {
    let h = Harness::start(close_api).await?;
    let out = h
        .call("search_calls", json!({ "lead_id": "lead_1", "limit": 2 }))
        .await?;
    assert!(!out.is_error);
    assert!(out.text.starts_with("Found 2 calls\nTotal Duration: 60s\n\nCall Activity:\n"));
    assert!(out.text.contains("Cost: $1.99"));
    assert!(out.text.contains("\n---\nCall Activity:\nID: acti_2\n"));
    assert!(out.text.contains("Cost: N/A"));
    assert_eq!(h.requests()[0].query, "lead_id=lead_1&_limit=2");
    h.shutdown().await
}

#[tokio::test]
async fn user_tools_render_users_and_availability() -> anyhow::Result<()> {
    let h = Harness::start(close_api).await?;
    let me = h.call("get_current_user", json!({})).await?;
    assert!(me.text.starts_with("User:\nID: user_me\nName: Ada Lovelace\nEmail: ada@example.com"));

    let availability = h.call("get_user_availability", json!({})).await?;
    assert!(!availability.is_error);
    assert!(availability.text.starts_with("Found 0 user availability records\n\nUser ID: user_me"));
    assert!(availability.text.contains("Status: available"));
    assert!(availability.text.contains("Active Calls: 0"));

    let paths: Vec<String> = h.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(paths, ["/me/", "/user/availability/"]);
    h.shutdown().await
}
