use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller::feedback, state::AppState};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Feedback Board API",
        description = "Anonymous feedback submission and moderation"
    ),
    tags(
        (name = "feedback", description = "Submitting, listing and moderating feedback")
    )
)]
pub struct ApiDoc;

/// Builds the API router with its OpenAPI document served at `/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(feedback::list_feedback, feedback::create_feedback))
        .routes(routes!(feedback::get_feedback, feedback::delete_feedback))
        .routes(routes!(feedback::mark_feedback_reviewed))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
}
