//! Router assembly and the serve loop

use std::net::SocketAddr;

use axum::routing::{get, patch, post};
use axum::Router;
use tracing::info;

use crate::handlers;
use crate::state::AppState;

/// Build the full portal router over shared state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/users", get(handlers::users::list_users))
        .route(
            "/api/users/:id",
            get(handlers::users::get_user).put(handlers::users::update_user),
        )
        .route(
            "/api/tasks",
            get(handlers::tasks::list_tasks).post(handlers::tasks::create_task_handler),
        )
        .route(
            "/api/tasks/:id",
            get(handlers::tasks::get_task)
                .put(handlers::tasks::update_task_handler)
                .delete(handlers::tasks::delete_task_handler),
        )
        .route("/api/tasks/:id/assign", patch(handlers::tasks::assign_task_handler))
        .route(
            "/api/invoices",
            get(handlers::invoices::list_invoices).post(handlers::invoices::create_invoice),
        )
        .route(
            "/api/invoices/:id",
            get(handlers::invoices::get_invoice)
                .put(handlers::invoices::update_invoice_handler)
                .delete(handlers::invoices::delete_invoice_handler),
        )
        .route(
            "/api/invoices/:id/mark-paid",
            patch(handlers::invoices::mark_invoice_paid_handler),
        )
        .route(
            "/api/projects",
            get(handlers::projects::list_projects)
                .post(handlers::projects::provision_project_handler),
        )
        .route("/api/projects/:id", get(handlers::projects::get_project))
        .route(
            "/api/notifications",
            post(handlers::notifications::send_notification_handler),
        )
        .route(
            "/api/notifications/user/:id",
            get(handlers::notifications::list_for_member),
        )
        .route(
            "/api/notifications/:id/read",
            patch(handlers::notifications::mark_read),
        )
        .route(
            "/api/notifications/user/:id/read-all",
            patch(handlers::notifications::mark_all_read),
        )
        .route("/api/analytics/dashboard", get(handlers::analytics::dashboard))
        .route("/api/analytics/revenue", get(handlers::analytics::revenue))
        .route("/api/analytics/tasks", get(handlers::analytics::tasks))
        .route("/api/analytics/member/:id", get(handlers::analytics::member))
        .route(
            "/api/analytics/department/:name",
            get(handlers::analytics::department),
        )
        .route("/api/chatbot/ask", post(handlers::chatbot::ask))
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn serve(state: AppState, addr: SocketAddr) -> std::io::Result<()> {
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "portal api listening");
    axum::serve(listener, router).await
}
