//! Contact payload and relay response shapes

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

/// Rejection message for incomplete submissions.
pub const MISSING_FIELDS: &str = "Nombre, contacto y mensaje son requeridos";

/// One contact-form submission. Lives for a single request/response cycle
/// and is never stored or retained.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactRequest {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub name: String,

    /// Free-form email or phone string; no format validation is applied.
    #[serde(default)]
    #[validate(length(min = 1))]
    pub contact: String,

    #[serde(default)]
    #[validate(length(min = 1))]
    pub message: String,
}

/// Every way a well-formed submission can come back from the relay.
///
/// Whenever delivery did not happen, the variant carries a ready-made
/// `wa.me` link so the visitor still has a path to reach the shop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// The Cloud API accepted the message.
    Delivered { message_id: Option<String> },
    /// Credentials are not configured; no delivery was attempted.
    Fallback { link: String },
    /// The Cloud API rejected the send call.
    Rejected { details: String, link: String },
}

impl IntoResponse for RelayOutcome {
    fn into_response(self) -> Response {
        match self {
            RelayOutcome::Delivered { message_id } => {
                let mut body = json!({
                    "success": true,
                    "message": "Mensaje enviado correctamente",
                });
                if let Some(id) = message_id {
                    body["messageId"] = json!(id);
                }
                (StatusCode::OK, Json(body)).into_response()
            }
            RelayOutcome::Fallback { link } => (
                StatusCode::OK,
                Json(json!({
                    "success": false,
                    "fallback": true,
                    "message": "WhatsApp API no configurada. Use el enlace directo.",
                    "whatsappUrl": link,
                })),
            )
                .into_response(),
            RelayOutcome::Rejected { details, link } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Error al enviar mensaje",
                    "details": details,
                    "fallback": true,
                    "whatsappUrl": link,
                })),
            )
                .into_response(),
        }
    }
}
