//! Custom axum extractors.

mod body_json;

pub use body_json::BodyJson;
