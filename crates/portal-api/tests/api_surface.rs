//! End-to-end tests over the router: identity, role gates, provisioning,
//! CRUD and the query surfaces, all against an in-memory database.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use portal_api::{build_router, AppState};
use portal_core::model::{Metadata, Role};
use portal_core::ops::member_ops::{create_member, MemberDraft};
use portal_core::Store;
use rusqlite::Connection;
use serde_json::{json, Value};
use tower::ServiceExt;

struct TestApp {
    router: Router,
    admin_id: String,
    member_id: String,
}

fn draft(name: &str, email: &str, role: Role, department: &str) -> MemberDraft {
    MemberDraft {
        name: name.to_string(),
        email: email.to_string(),
        role,
        department: Some(department.to_string()),
        phone: None,
        join_date: None,
        metadata: Metadata::new(),
    }
}

fn test_app() -> TestApp {
    let mut conn = Connection::open_in_memory().unwrap();
    portal_store::migrations::apply_migrations(&mut conn).unwrap();

    let mut store = Store::new();
    let admin_id = create_member(
        &mut store,
        draft("Asha Rao", "asha@example.com", Role::Admin, "Management"),
    )
    .unwrap();
    let member_id = create_member(
        &mut store,
        draft("Vikram Iyer", "vikram@example.com", Role::Member, "Research"),
    )
    .unwrap();

    TestApp {
        router: build_router(AppState::new(store, conn)),
        admin_id,
        member_id,
    }
}

impl TestApp {
    async fn request(
        &self,
        method: &str,
        uri: &str,
        identity: Option<(&str, &str)>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some((id, role)) = identity {
            builder = builder.header("x-user-id", id).header("x-user-role", role);
        }
        let request = match body {
            Some(value) => builder
                .header("content-type", "application/json")
                .body(Body::from(value.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn as_admin(&self) -> Option<(&str, &str)> {
        Some((self.admin_id.as_str(), "admin"))
    }

    fn as_member(&self) -> Option<(&str, &str)> {
        Some((self.member_id.as_str(), "member"))
    }

    async fn provision(&self) -> Value {
        let input = json!({
            "clientName": "Meera Traders",
            "clientEmail": "accounts@meeratraders.example",
            "projectName": "Inventory Portal",
            "dueDate": "2026-12-15",
            "assignedMembers": [self.member_id],
            "paymentAmount": 50000.0,
            "taxRate": 18.0,
        });
        let (status, body) = self
            .request("POST", "/api/projects", self.as_admin(), Some(input))
            .await;
        assert_eq!(status, StatusCode::OK, "provisioning failed: {body}");
        body
    }
}

#[tokio::test]
async fn test_health_needs_no_identity() {
    let app = test_app();
    let (status, body) = app.request("GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_missing_identity_is_unauthorised() {
    let app = test_app();
    let (status, body) = app.request("GET", "/api/users", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_unknown_role_is_unauthorised() {
    let app = test_app();
    let (status, _) = app
        .request("GET", "/api/users", Some((app.admin_id.as_str(), "root")), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_member_cannot_provision() {
    let app = test_app();
    let input = json!({
        "clientName": "Meera Traders",
        "clientEmail": "accounts@meeratraders.example",
        "projectName": "Inventory Portal",
        "dueDate": "2026-12-15",
    });
    let (status, _) = app
        .request("POST", "/api/projects", app.as_member(), Some(input))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_provisioning_creates_the_full_batch() {
    let app = test_app();
    let body = app.provision().await;

    let receipt = &body["receipt"];
    assert!(receipt["clientId"].is_string());
    assert!(receipt["invoiceId"].is_string());
    assert_eq!(receipt["taskIds"].as_array().unwrap().len(), 1);
    assert_eq!(body["project"]["name"], "Inventory Portal");

    // The assignee got a kickoff task and a notification
    let task_id = receipt["taskIds"][0].as_str().unwrap();
    let (status, task) = app
        .request("GET", &format!("/api/tasks/{task_id}"), app.as_member(), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(task["task"]["assignedTo"], json!(app.member_id));

    let uri = format!("/api/notifications/user/{}", app.member_id);
    let (status, feed) = app.request("GET", &uri, app.as_member(), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(feed["unreadCount"], 1);
}

#[tokio::test]
async fn test_invalid_provisioning_input_is_bad_request() {
    let app = test_app();
    let input = json!({
        "clientName": "Meera Traders",
        "clientEmail": "not-an-email",
        "projectName": "Inventory Portal",
        "dueDate": "2026-12-15",
    });
    let (status, body) = app
        .request("POST", "/api/projects", app.as_admin(), Some(input))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"]["code"].is_string());
}

#[tokio::test]
async fn test_task_assign_and_filter() {
    let app = test_app();

    let (status, created) = app
        .request(
            "POST",
            "/api/tasks",
            app.as_admin(),
            Some(json!({"title": "Prepare quarterly deck", "priority": "high"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "create failed: {created}");
    let task_id = created["task"]["id"].as_str().unwrap().to_string();

    let uri = format!("/api/tasks/{task_id}/assign");
    let (status, assigned) = app
        .request("PATCH", &uri, app.as_admin(), Some(json!({"memberId": app.member_id})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(assigned["task"]["assignedTo"], json!(app.member_id));

    let uri = format!("/api/tasks?assignedTo={}", app.member_id);
    let (status, listed) = app.request("GET", &uri, app.as_member(), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["tasks"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_member_cannot_delete_task() {
    let app = test_app();
    let (_, created) = app
        .request(
            "POST",
            "/api/tasks",
            app.as_admin(),
            Some(json!({"title": "Prepare quarterly deck"})),
        )
        .await;
    let task_id = created["task"]["id"].as_str().unwrap().to_string();

    let (status, _) = app
        .request("DELETE", &format!("/api/tasks/{task_id}"), app.as_member(), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_invoice_mark_paid() {
    let app = test_app();
    let body = app.provision().await;
    let invoice_id = body["receipt"]["invoiceId"].as_str().unwrap().to_string();

    let uri = format!("/api/invoices/{invoice_id}/mark-paid");
    let (status, paid) = app.request("PATCH", &uri, app.as_admin(), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(paid["invoice"]["paymentStatus"], "paid");

    let (status, revenue) = app
        .request("GET", "/api/analytics/revenue", app.as_admin(), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(revenue["revenue"]["paid"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn test_invoice_delete_is_admin_only() {
    let app = test_app();
    let body = app.provision().await;
    let invoice_id = body["receipt"]["invoiceId"].as_str().unwrap().to_string();

    let uri = format!("/api/invoices/{invoice_id}");
    let (status, _) = app
        .request("DELETE", &uri, Some((app.admin_id.as_str(), "teamlead")), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.request("DELETE", &uri, app.as_admin(), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_invoice_is_not_found() {
    let app = test_app();
    let (status, body) = app
        .request("GET", "/api/invoices/invoice:nope", app.as_admin(), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_notifications_are_scoped_to_their_member() {
    let app = test_app();
    app.provision().await;

    // Another member cannot read this feed
    let uri = format!("/api/notifications/user/{}", app.member_id);
    let other = Some(("member:other", "member"));
    let (status, _) = app.request("GET", &uri, other, None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // The owner can, and can clear it
    let clear = format!("/api/notifications/user/{}/read-all", app.member_id);
    let (status, _) = app.request("PATCH", &clear, app.as_member(), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, feed) = app.request("GET", &uri, app.as_member(), None).await;
    assert_eq!(feed["unreadCount"], 0);
}

#[tokio::test]
async fn test_dashboard_and_member_analytics() {
    let app = test_app();
    app.provision().await;

    let (status, body) = app
        .request("GET", "/api/analytics/dashboard", app.as_member(), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["analytics"]["totalMembers"], 2);

    // Self-service member stats are allowed; someone else's are not
    let uri = format!("/api/analytics/member/{}", app.member_id);
    let (status, stats) = app.request("GET", &uri, app.as_member(), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["memberStats"]["totalTasks"], 1);

    let uri = format!("/api/analytics/member/{}", app.admin_id);
    let (status, _) = app.request("GET", &uri, app.as_member(), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_revenue_is_gated_to_managers() {
    let app = test_app();
    let (status, _) = app
        .request("GET", "/api/analytics/revenue", app.as_member(), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_chatbot_records_the_exchange() {
    let app = test_app();
    let (status, body) = app
        .request(
            "POST",
            "/api/chatbot/ask",
            app.as_member(),
            Some(json!({"message": "how do I raise an invoice?"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["reply"].as_str().is_some());
}

#[tokio::test]
async fn test_user_update_is_admin_only() {
    let app = test_app();
    let uri = format!("/api/users/{}", app.member_id);

    let (status, _) = app
        .request("PUT", &uri, app.as_member(), Some(json!({"department": "Design"})))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app
        .request("PUT", &uri, app.as_admin(), Some(json!({"department": "Design"})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["department"], "Design");
}
