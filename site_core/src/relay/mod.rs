//! Contact-form relay: forwards submissions to the shop's WhatsApp, or hands
//! the visitor a pre-filled deep link whenever delivery is not possible.

pub mod client;
pub mod link;
pub mod models;

pub use client::{SendOutcome, WhatsAppClient, DEFAULT_API_BASE};
pub use models::{ContactRequest, RelayOutcome, MISSING_FIELDS};

use tracing::warn;

use crate::config::WhatsAppConfig;
use crate::error::Result;

/// Relays one validated submission. Credentials come from the injected
/// config, never from the process environment, so the whole flow is testable
/// without environment mutation.
pub async fn relay_contact(
    config: &WhatsAppConfig,
    client: &WhatsAppClient,
    request: &ContactRequest,
) -> Result<RelayOutcome> {
    let Some(credentials) = config.credentials() else {
        warn!("WhatsApp API not configured, answering with the direct link");
        return Ok(RelayOutcome::Fallback {
            link: link::direct_link(config.fallback_number(), request),
        });
    };

    let outcome = client
        .send_text(&credentials, &link::business_text(request))
        .await?;

    Ok(match outcome {
        SendOutcome::Accepted { message_id } => RelayOutcome::Delivered { message_id },
        SendOutcome::Rejected { details } => RelayOutcome::Rejected {
            details,
            link: link::direct_link(&credentials.business_number, request),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ContactRequest {
        ContactRequest {
            name: "Juan".to_string(),
            contact: "123".to_string(),
            message: "Necesito presupuesto".to_string(),
        }
    }

    #[tokio::test]
    async fn test_unconfigured_relay_uses_default_number() {
        let config = WhatsAppConfig::default();
        let client = WhatsAppClient::new(config.api_base.clone());

        let outcome = relay_contact(&config, &client, &request()).await.unwrap();

        match outcome {
            RelayOutcome::Fallback { link } => {
                assert!(link.starts_with("https://wa.me/5493874857539?text="));
            }
            other => panic!("expected fallback, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_partially_configured_relay_still_falls_back() {
        let config = WhatsAppConfig {
            phone_number_id: Some("12345".to_string()),
            business_number: Some("5493874850000".to_string()),
            ..WhatsAppConfig::default()
        };
        let client = WhatsAppClient::new(config.api_base.clone());

        let outcome = relay_contact(&config, &client, &request()).await.unwrap();

        match outcome {
            RelayOutcome::Fallback { link } => {
                assert!(link.starts_with("https://wa.me/5493874850000?text="));
            }
            other => panic!("expected fallback, got {:?}", other),
        }
    }
}
