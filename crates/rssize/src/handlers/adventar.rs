//! RSS endpoint for Adventar calendars.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use rssize_core::calendar::CalendarId;
use rssize_core::feed::RSS_CONTENT_TYPE;

use super::ApiError;
use crate::state::AppState;

/// GET /api/adventar/{calid} - Render a calendar as RSS 2.0.
///
/// The id is validated before any cache or upstream access; an invalid id is
/// a 404.
#[axum::debug_handler]
pub async fn calendar_feed(
    State(state): State<AppState>,
    Path(calid): Path<String>,
) -> Result<Response, ApiError> {
    let calendar_id = CalendarId::parse(&calid, state.require_numeric_calendar_id).map_err(|e| {
        tracing::debug!(calendar_id = %calid, error = %e, "Rejected calendar id");
        ApiError::NotFound
    })?;

    tracing::debug!(calendar_id = %calendar_id, "Rendering calendar feed");

    let body = state.pipeline.render_feed(&calendar_id).await?;

    Ok(([(header::CONTENT_TYPE, RSS_CONTENT_TYPE)], body).into_response())
}
