//! Raised condition captured at the `try_catch` boundary.

use std::any::Any;
use thiserror::Error;

const OPAQUE_MESSAGE: &str = "panicked with a non-string payload";

/// A panic converted into a controlled value.
///
/// String payloads (from `panic!("...")` with or without formatting) keep
/// their text. Any other payload type is reported as `Opaque`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RaisedCondition {
    #[error("{0}")]
    Message(String),

    #[error("{}", OPAQUE_MESSAGE)]
    Opaque,
}

impl RaisedCondition {
    /// Build a condition from a payload returned by `catch_unwind`.
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        if let Some(message) = payload.downcast_ref::<&str>() {
            return Self::Message((*message).to_string());
        }

        match payload.downcast::<String>() {
            Ok(message) => Self::Message(*message),
            Err(_) => Self::Opaque,
        }
    }

    /// Text describing the condition.
    pub fn message(&self) -> &str {
        match self {
            Self::Message(message) => message,
            Self::Opaque => OPAQUE_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_str_payload_keeps_text() {
        let condition = RaisedCondition::from_payload(Box::new("bad input"));

        assert_eq!(condition, RaisedCondition::Message("bad input".to_string()));
        assert_eq!(condition.message(), "bad input");
    }

    #[test]
    fn string_payload_keeps_text() {
        let condition = RaisedCondition::from_payload(Box::new(format!("code {}", 7)));

        assert_eq!(condition.message(), "code 7");
        assert_eq!(condition.to_string(), "code 7");
    }

    #[test]
    fn other_payloads_are_opaque() {
        let condition = RaisedCondition::from_payload(Box::new(42_u8));

        assert_eq!(condition, RaisedCondition::Opaque);
        assert_eq!(condition.message(), OPAQUE_MESSAGE);
    }
}
