use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use taskboard_core::{BoardSnapshot, NewTask, TaskId, TaskPatch, TaskView};

use super::AppState;
use super::error::ApiError;

fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    raw.parse::<TaskId>()
        .map_err(|_| ApiError::UnknownTask(raw.to_string()))
}

/// JSON オブジェクト以外（配列・文字列・数値・null）は 400
///
/// derive(Deserialize) の構造体は配列も位置順に受け付けるので、`Value` で形を確認してから変換する。
fn decode_object<T: DeserializeOwned>(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<T, ApiError> {
    let Json(value) = payload?;
    if !value.is_object() {
        return Err(ApiError::BadRequest("expected a JSON object".to_string()));
    }
    serde_json::from_value(value).map_err(|e| ApiError::BadRequest(e.to_string()))
}

pub async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<BoardSnapshot>, ApiError> {
    Ok(Json(state.store.list_all().await?))
}

pub async fn get_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<TaskView>, ApiError> {
    let id = parse_task_id(&raw_id)?;
    Ok(Json(state.store.get_by_id(id).await?))
}

pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let new_task: NewTask = decode_object(payload)?;
    let created = state.store.create(new_task).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<TaskView>, ApiError> {
    let id = parse_task_id(&raw_id)?;
    let patch: TaskPatch = decode_object(payload)?;
    Ok(Json(state.store.update(id, patch).await?))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_task_id(&raw_id)?;
    let removed = state.store.delete(id).await?;
    Ok(Json(json!({
        "message": format!("Task {} deleted successfully", removed.id()),
        "deletedId": removed.id(),
    })))
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
