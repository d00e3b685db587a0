//! HTTP surface of the site

pub mod contact;
pub mod health;
pub mod routes;
