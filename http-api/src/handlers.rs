//! Request handlers for the six task operations.
//!
//! Each handler decodes its request-scoped input, delegates to the
//! repository, and shapes the response: errors carry their status through
//! [`ApiError`], absence and empty search results become 404 here, and
//! decode rejections become 400 with the rejection text in `details`.
//! Handlers never log; the request-logging middleware owns that.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tarefas_core::{
    error::TaskError,
    models::{NewTask, Task},
    repository::TaskRepository,
};

use crate::error::ApiError;

/// Shared state handed to every handler.
pub struct AppState<R> {
    pub repository: Arc<R>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

/// Query parameters accepted by the title search route.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub titulo: String,
}

/// GET `/v1/tarefas/`: every task, possibly an empty array.
pub async fn list_tasks<R: TaskRepository>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state.repository.list().await?;
    Ok(Json(tasks))
}

/// GET `/v1/tarefas/:id`: a single task or 404.
pub async fn get_task<R: TaskRepository>(
    State(state): State<AppState<R>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Task>, ApiError> {
    let Path(id) = id.map_err(|rejection| TaskError::Validation(rejection.body_text()))?;

    match state.repository.get_by_id(id).await? {
        Some(task) => Ok(Json(task)),
        None => Err(TaskError::NotFound.into()),
    }
}

/// GET `/v1/tarefas/busca?titulo=`: title search; an empty result is 404.
pub async fn search_tasks<R: TaskRepository>(
    State(state): State<AppState<R>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state.repository.search_by_title(&params.titulo).await?;

    if tasks.is_empty() {
        return Err(TaskError::NotFound.into());
    }
    Ok(Json(tasks))
}

/// POST `/v1/tarefas/`: create a task, answering 201 with the stored row.
pub async fn create_task<R: TaskRepository>(
    State(state): State<AppState<R>>,
    payload: Result<Json<NewTask>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let Json(payload) =
        payload.map_err(|rejection| TaskError::Validation(rejection.body_text()))?;

    let task = state.repository.create(payload).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// PUT `/v1/tarefas/:id`: overwrite every field of an existing task.
pub async fn update_task<R: TaskRepository>(
    State(state): State<AppState<R>>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<NewTask>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Path(id) = id.map_err(|rejection| TaskError::Validation(rejection.body_text()))?;
    let Json(payload) =
        payload.map_err(|rejection| TaskError::Validation(rejection.body_text()))?;

    state.repository.update(id, payload).await?;
    Ok(Json(json!({ "message": "Task updated successfully" })))
}

/// DELETE `/v1/tarefas/:id`: remove a task.
pub async fn delete_task<R: TaskRepository>(
    State(state): State<AppState<R>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let Path(id) = id.map_err(|rejection| TaskError::Validation(rejection.body_text()))?;

    state.repository.delete(id).await?;
    Ok(Json(json!({ "message": "Task deleted successfully" })))
}
