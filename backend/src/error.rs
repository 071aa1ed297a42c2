use axum::{http::StatusCode, Json};
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Missing required fields: {0}")]
    MissingFields(String),
    #[error("Missing configuration: {}", .0.join(", "))]
    MissingConfig(Vec<&'static str>),
    #[error("Airtable returned {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("Failed to reach Airtable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Unexpected Airtable response: {0}")]
    MalformedResponse(String),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::InvalidBody(_) | RelayError::MissingFields(_) => StatusCode::BAD_REQUEST,
            RelayError::MissingConfig(_)
            | RelayError::Upstream { .. }
            | RelayError::Transport(_)
            | RelayError::MalformedResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message shown to the caller. Upstream and transport details never
    /// leave the server.
    pub fn public_message(&self) -> &'static str {
        match self {
            RelayError::MethodNotAllowed => "Method not allowed",
            RelayError::InvalidBody(_) => "Invalid request body",
            RelayError::MissingFields(_) => {
                "Missing required fields: name, email, and message are required"
            }
            RelayError::MissingConfig(_) => "Server configuration error",
            RelayError::Upstream { .. } => "Failed to save data",
            RelayError::Transport(_) | RelayError::MalformedResponse(_) => "Internal server error",
        }
    }
}

impl From<RelayError> for (StatusCode, Json<Value>) {
    fn from(err: RelayError) -> Self {
        match &err {
            RelayError::MethodNotAllowed | RelayError::InvalidBody(_) | RelayError::MissingFields(_) => {
                tracing::debug!("Rejected contact submission: {}", err);
            }
            RelayError::MissingConfig(_) => {
                tracing::error!("Server configuration error: {}", err);
            }
            _ => {
                tracing::error!("Failed to save contact submission: {}", err);
            }
        }
        (err.status(), Json(json!({"error": err.public_message()})))
    }
}

/// Body returned when a handler panics.
pub fn internal_error_body() -> Value {
    json!({"error": "Internal server error"})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_detail_stays_out_of_the_response() {
        let err = RelayError::Upstream {
            status: 422,
            body: "INVALID_VALUE_FOR_COLUMN".to_string(),
        };
        assert!(err.to_string().contains("INVALID_VALUE_FOR_COLUMN"));

        let (status, Json(body)) = err.into();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to save data"}));
    }

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(RelayError::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            RelayError::MissingFields("message".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RelayError::MissingConfig(vec!["AIRTABLE_API_KEY"]).public_message(),
            "Server configuration error"
        );
    }
}
