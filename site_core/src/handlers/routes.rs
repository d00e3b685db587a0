//! Route table for the JSON API

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

use super::{contact, health};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::handle_health))
        .route("/api/whatsapp/send", post(contact::handle_send))
}
