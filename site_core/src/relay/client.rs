//! Thin client for the WhatsApp Business Cloud API send-message operation

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use crate::config::ApiCredentials;
use crate::error::Result;

pub const DEFAULT_API_BASE: &str = "https://graph.facebook.com/v18.0";

/// Shared outbound client. Cloning is cheap; the underlying connection pool
/// is reused across requests.
#[derive(Debug, Clone)]
pub struct WhatsAppClient {
    http: reqwest::Client,
    api_base: String,
}

#[derive(Debug, Serialize)]
struct SendMessageBody<'a> {
    messaging_product: &'static str,
    recipient_type: &'static str,
    to: &'a str,
    #[serde(rename = "type")]
    message_type: &'static str,
    text: TextBody<'a>,
}

#[derive(Debug, Serialize)]
struct TextBody<'a> {
    preview_url: bool,
    body: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    #[serde(default)]
    messages: Vec<MessageRef>,
}

#[derive(Debug, Deserialize)]
struct MessageRef {
    id: String,
}

/// Provider verdict on one send attempt. Transport and decoding failures
/// surface as [`crate::error::AppError`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Accepted { message_id: Option<String> },
    Rejected { details: String },
}

impl WhatsAppClient {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into(),
        }
    }

    /// Sends `body` as a plain-text individual message to the credential's
    /// business number. At most one outbound call; no retries.
    pub async fn send_text(&self, credentials: &ApiCredentials, body: &str) -> Result<SendOutcome> {
        let url = format!("{}/{}/messages", self.api_base, credentials.phone_number_id);
        let payload = SendMessageBody {
            messaging_product: "whatsapp",
            recipient_type: "individual",
            to: &credentials.business_number,
            message_type: "text",
            text: TextBody {
                preview_url: false,
                body,
            },
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&credentials.access_token)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let data: Value = response.json().await.unwrap_or_default();
            error!(
                status = status.as_u16(),
                body = %data,
                "WhatsApp API rejected the message"
            );
            return Ok(SendOutcome::Rejected {
                details: error_details(&data),
            });
        }

        let data: SendMessageResponse = response.json().await?;
        Ok(SendOutcome::Accepted {
            message_id: data.messages.into_iter().next().map(|m| m.id),
        })
    }
}

/// Best-effort extraction of the provider's error message. The error shape
/// is not guaranteed, so anything unexpected collapses to a fixed string.
fn error_details(data: &Value) -> String {
    data.get("error")
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
        .unwrap_or("Unknown error")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_send_message_body_wire_format() {
        let payload = SendMessageBody {
            messaging_product: "whatsapp",
            recipient_type: "individual",
            to: "5493874857539",
            message_type: "text",
            text: TextBody {
                preview_url: false,
                body: "Nueva consulta desde la web:\n\nNombre: Juan\nContacto: 123\nMensaje: hola",
            },
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "messaging_product": "whatsapp",
                "recipient_type": "individual",
                "to": "5493874857539",
                "type": "text",
                "text": {
                    "preview_url": false,
                    "body": "Nueva consulta desde la web:\n\nNombre: Juan\nContacto: 123\nMensaje: hola",
                },
            })
        );
    }

    #[test]
    fn test_response_without_message_list() {
        let data: SendMessageResponse = serde_json::from_value(json!({})).unwrap();
        assert!(data.messages.is_empty());
    }

    #[test]
    fn test_error_details_extraction() {
        let data = json!({"error": {"message": "Invalid token", "code": 190}});
        assert_eq!(error_details(&data), "Invalid token");
    }

    #[test]
    fn test_error_details_fall_back_on_unknown_shapes() {
        assert_eq!(error_details(&Value::Null), "Unknown error");
        assert_eq!(error_details(&json!({"error": "down"})), "Unknown error");
        assert_eq!(error_details(&json!({"error": {"message": 42}})), "Unknown error");
    }
}
