//! Contact-form relay endpoint

use axum::{extract::State, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    error::{AppError, Result},
    relay::{self, ContactRequest, MISSING_FIELDS},
    AppState,
};

/// `POST /api/whatsapp/send`. Validation failures return 400 before any
/// outbound call; everything else is a [`relay::RelayOutcome`].
pub async fn handle_send(
    State(state): State<AppState>,
    Json(payload): Json<ContactRequest>,
) -> Result<impl IntoResponse> {
    payload
        .validate()
        .map_err(|_| AppError::BadRequest(MISSING_FIELDS.to_string()))?;

    let outcome = relay::relay_contact(&state.config.whatsapp, &state.whatsapp, &payload).await?;

    Ok(outcome)
}
