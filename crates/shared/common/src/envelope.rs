//! Structured response envelope.

use serde::{Deserialize, Serialize};

/// Wire envelope carrying either a payload or an error message.
///
/// Exactly one side is populated; the other serializes as `null` so
/// clients can branch on a single shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Successful envelope around `value`.
    pub fn data(value: T) -> Self {
        Self {
            data: Some(value),
            error: None,
        }
    }

    /// Failed envelope carrying `message`.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_side_serializes_with_null_error() {
        let json = serde_json::to_value(Envelope::data(5)).unwrap();

        assert_eq!(json, serde_json::json!({ "data": 5, "error": null }));
    }

    #[test]
    fn error_side_serializes_with_null_data() {
        let json = serde_json::to_value(Envelope::<i64>::error("boom")).unwrap();

        assert_eq!(json, serde_json::json!({ "data": null, "error": "boom" }));
    }
}
