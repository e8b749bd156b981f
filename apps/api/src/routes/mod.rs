pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::feedback::handlers as feedback_handlers;
use crate::generation::handlers as generation_handlers;
use crate::interviews::handlers as interview_handlers;
use crate::reports::handlers as report_handlers;
use crate::session::handlers as session_handlers;
use crate::state::AppState;
use crate::users::handlers as user_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Users
        .route("/api/v1/users/sync", post(user_handlers::handle_sync_user))
        // Interviews
        .route(
            "/api/v1/interviews",
            get(interview_handlers::handle_list_interviews),
        )
        .route(
            "/api/v1/interviews/generate",
            post(generation_handlers::handle_generate),
        )
        .route(
            "/api/v1/interviews/:id",
            get(interview_handlers::handle_get_interview)
                .patch(interview_handlers::handle_update_interview)
                .delete(interview_handlers::handle_delete_interview),
        )
        .route(
            "/api/v1/interviews/:id/session",
            post(session_handlers::handle_start_session),
        )
        .route(
            "/api/v1/interviews/:id/feedback",
            post(feedback_handlers::handle_generate_feedback),
        )
        // Reports
        .route("/api/v1/reports", get(report_handlers::handle_list_reports))
        .route(
            "/api/v1/reports/:id",
            get(report_handlers::handle_get_report).delete(report_handlers::handle_delete_report),
        )
        .with_state(state)
}
