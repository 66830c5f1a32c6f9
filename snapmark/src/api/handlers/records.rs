//! Persistence handlers: saving OCR results and browsing history. Both
//! require a caller identity.

use axum::extract::State;
use axum::Json;

use crate::api::dto::{HistoryEntry, SaveRecordRequest, SaveRecordResponse};
use crate::api::extractors::{AppJson, Identity};
use crate::api::state::AppState;
use crate::error::{Result, SnapmarkError};
use crate::models::OcrRecord;

/// History responses return at most this many records.
pub const HISTORY_LIMIT: u32 = 50;

/// `POST /save`
#[utoipa::path(
    post,
    path = "/save",
    tag = "records",
    request_body = SaveRecordRequest,
    responses(
        (status = 200, description = "Record created", body = SaveRecordResponse),
        (status = 400, description = "Missing field"),
        (status = 401, description = "Authentication required"),
    )
)]
pub async fn save_record(
    State(state): State<AppState>,
    Identity(user_id): Identity,
    AppJson(req): AppJson<SaveRecordRequest>,
) -> Result<Json<SaveRecordResponse>> {
    if req.image_url.trim().is_empty() || req.markdown.trim().is_empty() {
        return Err(SnapmarkError::Validation(
            "Image URL and markdown are required".to_string(),
        ));
    }

    let record = OcrRecord::new(user_id, req.image_url, req.markdown);
    state.db.create_record(&record).await?;

    tracing::debug!(record_id = %record.id, "OCR record saved");
    Ok(Json(SaveRecordResponse { id: record.id }))
}

/// `GET /history`
#[utoipa::path(
    get,
    path = "/history",
    tag = "records",
    responses(
        (status = 200, description = "Recent records, newest first", body = [HistoryEntry]),
        (status = 401, description = "Authentication required"),
    )
)]
pub async fn history(
    State(state): State<AppState>,
    Identity(user_id): Identity,
) -> Result<Json<Vec<HistoryEntry>>> {
    let records = state.db.list_records(&user_id, HISTORY_LIMIT).await?;

    Ok(Json(records.into_iter().map(HistoryEntry::from).collect()))
}
