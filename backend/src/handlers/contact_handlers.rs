use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{Method, StatusCode},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::airtable::{self, ContactFields};
use crate::error::RelayError;
use crate::AppState;

/// Body posted by the contact modal. Every field is optional at the parsing
/// stage so that a missing field is reported as a validation error.
#[derive(Debug, Default, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

impl ContactRequest {
    pub fn validate(self) -> Result<ContactSubmission, RelayError> {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty())
        }

        let name = present(self.name);
        let email = present(self.email);
        let message = present(self.message);

        let missing: Vec<&str> = [("name", &name), ("email", &email), ("message", &message)]
            .into_iter()
            .filter(|(_, v)| v.is_none())
            .map(|(field, _)| field)
            .collect();

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) => Ok(ContactSubmission {
                name,
                email,
                phone: self.phone,
                message,
            }),
            _ => Err(RelayError::MissingFields(missing.join(", "))),
        }
    }
}

impl ContactSubmission {
    pub fn fields(&self) -> ContactFields<'_> {
        ContactFields {
            name: &self.name,
            email: &self.email,
            phone: self.phone.as_deref().unwrap_or(""),
            message: &self.message,
        }
    }
}

pub async fn submit_form(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    // Oversized or unreadable bodies get the same JSON 400 as malformed ones.
    let body = body.map_err(|e| RelayError::InvalidBody(e.body_text()))?;
    let request: ContactRequest = serde_json::from_slice(&body)
        .map_err(|e| RelayError::InvalidBody(e.to_string()))?;
    let submission = request.validate()?;

    let credentials = state
        .airtable
        .credentials()
        .ok_or_else(|| RelayError::MissingConfig(state.airtable.missing()))?;

    let id = airtable::create_record(
        &state.http_client,
        &state.airtable.api_url,
        &credentials,
        &submission.fields(),
    )
    .await?;

    tracing::info!("Saved contact submission from {} as {}", submission.email, id);
    Ok(Json(json!({
        "success": true,
        "id": id,
    })))
}

pub async fn method_not_allowed(method: Method) -> (StatusCode, Json<Value>) {
    tracing::debug!("{} on the contact endpoint", method);
    RelayError::MethodNotAllowed.into()
}
