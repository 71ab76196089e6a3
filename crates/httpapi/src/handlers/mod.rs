//! HTTP handlers.

pub mod ad_handler;
pub mod credential_handler;
pub mod user_handler;

pub use ad_handler::*;
pub use credential_handler::*;
pub use user_handler::*;

use common::{AppError, AppResult};

/// Parse a path or query identifier, mapping failure to a 400 envelope.
fn parse_id(raw: &str, what: &str) -> AppResult<i64> {
    raw.parse()
        .map_err(|_| AppError::bad_request(format!("unparsable {what}")))
}
