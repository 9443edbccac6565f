use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        feedback::{
            CreateFeedbackDto, FeedbackListDto, FeedbackResponseDto, ListFeedbackQueryDto,
        },
    },
    server::{
        data::feedback::FeedbackRepository,
        error::AppError,
        model::feedback::ListFeedbackParams,
        service::feedback::{CreateFeedbackParams, FeedbackService},
        state::AppState,
    },
};

/// Tag for grouping feedback endpoints in OpenAPI documentation
pub static FEEDBACK_TAG: &str = "feedback";

pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";
pub const INVALID_QUERY_MESSAGE: &str = "Invalid query parameters";
pub const SUBMITTED_MESSAGE: &str = "Feedback submitted successfully";
pub const REVIEWED_MESSAGE: &str = "Feedback marked as reviewed";
pub const DELETED_MESSAGE: &str = "Deleted successfully";

/// List feedback.
///
/// Returns one page of feedback records, optionally filtered by category and review
/// state, together with the total number of matches and the number of pages.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Filter, pagination and sort parameters
///
/// # Returns
/// - `200 OK` - Page of records with pagination metadata
/// - `400 Bad Request` - Query string could not be read
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    get,
    path = "/feedback",
    tag = FEEDBACK_TAG,
    params(ListFeedbackQueryDto),
    responses(
        (status = 200, description = "Page of feedback records", body = FeedbackListDto),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 500, description = "Server error while fetching feedback", body = ErrorDto)
    ),
)]
pub async fn list_feedback(
    State(state): State<AppState>,
    query: Result<Query<ListFeedbackQueryDto>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query.map_err(|e| {
        tracing::debug!("Rejected feedback query: {}", e);
        AppError::BadRequest(INVALID_QUERY_MESSAGE.to_string())
    })?;

    let service = FeedbackService::new(FeedbackRepository::new(&state.db));

    let page = service.list(ListFeedbackParams::from_dto(query)).await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Submit feedback.
///
/// Stores a new, unreviewed feedback record. The text is trimmed before it is
/// validated; every violated rule is reported at once.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Feedback text and category
///
/// # Returns
/// - `201 Created` - The stored record
/// - `400 Bad Request` - Missing fields, validation failure or unreadable body
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    post,
    path = "/feedback",
    tag = FEEDBACK_TAG,
    request_body = CreateFeedbackDto,
    responses(
        (status = 201, description = "Feedback submitted successfully", body = FeedbackResponseDto),
        (status = 400, description = "Missing fields, validation error or invalid body", body = ErrorDto),
        (status = 500, description = "Server error while submitting feedback", body = ErrorDto)
    ),
)]
pub async fn create_feedback(
    State(state): State<AppState>,
    payload: Result<Json<CreateFeedbackDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|e| {
        tracing::debug!("Rejected feedback body: {}", e);
        AppError::BadRequest(INVALID_BODY_MESSAGE.to_string())
    })?;

    let service = FeedbackService::new(FeedbackRepository::new(&state.db));

    let record = service
        .create(CreateFeedbackParams {
            feedback: payload.feedback,
            category: payload.category,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(record.into_response_dto(Some(SUBMITTED_MESSAGE))),
    ))
}

/// Get a single feedback record.
///
/// # Returns
/// - `200 OK` - The record
/// - `400 Bad Request` - Malformed id
/// - `404 Not Found` - No record with that id
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    get,
    path = "/feedback/{id}",
    tag = FEEDBACK_TAG,
    params(
        ("id" = String, Path, description = "Feedback record id (UUID)")
    ),
    responses(
        (status = 200, description = "The feedback record", body = FeedbackResponseDto),
        (status = 400, description = "Invalid feedback ID", body = ErrorDto),
        (status = 404, description = "Feedback not found", body = ErrorDto),
        (status = 500, description = "Server error while fetching feedback", body = ErrorDto)
    ),
)]
pub async fn get_feedback(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = FeedbackService::new(FeedbackRepository::new(&state.db));

    let record = service.get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(record.into_response_dto(None))))
}

/// Mark a feedback record as reviewed.
///
/// Idempotent: marking an already reviewed record succeeds again.
///
/// # Returns
/// - `200 OK` - The updated record
/// - `400 Bad Request` - Malformed id, or the stored record no longer validates
/// - `404 Not Found` - No record with that id
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    patch,
    path = "/feedback/{id}/reviewed",
    tag = FEEDBACK_TAG,
    params(
        ("id" = String, Path, description = "Feedback record id (UUID)")
    ),
    responses(
        (status = 200, description = "Feedback marked as reviewed", body = FeedbackResponseDto),
        (status = 400, description = "Invalid feedback ID or validation error", body = ErrorDto),
        (status = 404, description = "Feedback not found", body = ErrorDto),
        (status = 500, description = "Server error while updating feedback", body = ErrorDto)
    ),
)]
pub async fn mark_feedback_reviewed(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = FeedbackService::new(FeedbackRepository::new(&state.db));

    let record = service.mark_reviewed(&id).await?;

    Ok((
        StatusCode::OK,
        Json(record.into_response_dto(Some(REVIEWED_MESSAGE))),
    ))
}

/// Permanently delete a feedback record.
///
/// # Returns
/// - `200 OK` - Record deleted
/// - `400 Bad Request` - Malformed id
/// - `404 Not Found` - No record with that id
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    delete,
    path = "/feedback/{id}",
    tag = FEEDBACK_TAG,
    params(
        ("id" = String, Path, description = "Feedback record id (UUID)")
    ),
    responses(
        (status = 200, description = "Deleted successfully", body = MessageDto),
        (status = 400, description = "Invalid feedback ID", body = ErrorDto),
        (status = 404, description = "Feedback not found", body = ErrorDto),
        (status = 500, description = "Server error while deleting feedback", body = ErrorDto)
    ),
)]
pub async fn delete_feedback(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = FeedbackService::new(FeedbackRepository::new(&state.db));

    service.delete(&id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new(DELETED_MESSAGE))))
}
