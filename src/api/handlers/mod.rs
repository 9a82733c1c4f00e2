use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use uuid::Uuid;

use super::error::ApiError;
use super::AppState;
use crate::identity::Session;
use crate::models::*;

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound("no such endpoint".to_string())
}

// ============================================================
// Tasks
// ============================================================

// Extractors whose rejections answer with the JSON error body.
type TaskId = WithRejection<Path<Uuid>, ApiError>;
type JsonBody<T> = WithRejection<Json<T>, ApiError>;
type ListQuery = WithRejection<Query<TaskListQuery>, ApiError>;

#[derive(Debug, Deserialize)]
pub struct TaskListQuery {
    pub status: Option<String>,
}

fn parse_status(raw: &str) -> Result<TaskStatus, ApiError> {
    TaskStatus::from_str(raw).ok_or_else(|| ApiError::BadRequest(format!("unknown status: {raw}")))
}

fn task_not_found() -> ApiError {
    ApiError::NotFound("Task not found".to_string())
}

/// Trimmed title, rejecting blank ones.
fn validate_title(title: &str) -> Result<String, ApiError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ApiError::BadRequest("title must not be empty".to_string()));
    }
    Ok(trimmed.to_string())
}

pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Query(query), _): ListQuery,
) -> Result<Json<Vec<Task>>, ApiError> {
    let status = query.status.as_deref().map(parse_status).transpose()?;
    let tasks = state.db.list_tasks(session.workspace(), status)?;
    Ok(Json(tasks))
}

pub async fn get_task(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Path(id), _): TaskId,
) -> Result<Json<Task>, ApiError> {
    state
        .db
        .get_task(session.workspace(), id)?
        .map(Json)
        .ok_or_else(task_not_found)
}

pub async fn create_task(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Json(mut input), _): JsonBody<CreateTaskInput>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    input.title = validate_title(&input.title)?;

    let task = state
        .db
        .create_task(session.workspace(), &session.user_id, input)?;
    tracing::info!(task = %task.id, workspace = %task.org_id, "Task created");

    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update_task(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Path(id), _): TaskId,
    WithRejection(Json(mut input), _): JsonBody<UpdateTaskInput>,
) -> Result<Json<Task>, ApiError> {
    if let Some(title) = &input.title {
        input.title = Some(validate_title(title)?);
    }

    state
        .db
        .update_task(session.workspace(), id, input)?
        .map(Json)
        .ok_or_else(task_not_found)
}

pub async fn update_task_status(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Path(id), _): TaskId,
    WithRejection(Json(input), _): JsonBody<TaskStatusUpdate>,
) -> Result<Json<Task>, ApiError> {
    state
        .db
        .set_task_status(session.workspace(), id, input.status)?
        .map(Json)
        .ok_or_else(task_not_found)
}

pub async fn delete_task(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Path(id), _): TaskId,
) -> Result<StatusCode, ApiError> {
    if state.db.delete_task(session.workspace(), id)? {
        tracing::info!(task = %id, "Task deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(task_not_found())
    }
}
