use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::AirtableCredentials;
use crate::error::RelayError;

/// A contact submission in Airtable's column naming.
#[derive(Debug, Serialize, PartialEq)]
pub struct ContactFields<'a> {
    #[serde(rename = "Name")]
    pub name: &'a str,
    #[serde(rename = "Email")]
    pub email: &'a str,
    #[serde(rename = "Phone")]
    pub phone: &'a str,
    #[serde(rename = "Message")]
    pub message: &'a str,
}

#[derive(Serialize)]
struct CreateRecordRequest<'a> {
    fields: &'a ContactFields<'a>,
}

#[derive(Deserialize)]
struct CreatedRecord {
    id: String,
}

pub fn records_url(api_url: &str, credentials: &AirtableCredentials<'_>) -> String {
    format!(
        "{}/v0/{}/{}",
        api_url.trim_end_matches('/'),
        urlencoding::encode(credentials.base_id),
        urlencoding::encode(credentials.table_name),
    )
}

/// Creates one record and returns its Airtable id. Single attempt, no retry.
pub async fn create_record(
    client: &Client,
    api_url: &str,
    credentials: &AirtableCredentials<'_>,
    fields: &ContactFields<'_>,
) -> Result<String, RelayError> {
    let url = records_url(api_url, credentials);
    tracing::debug!("Creating Airtable record at {}", url);

    let response = client
        .post(&url)
        .bearer_auth(credentials.api_key)
        .json(&CreateRecordRequest { fields })
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(RelayError::Upstream {
            status: status.as_u16(),
            body,
        });
    }

    let record: CreatedRecord = serde_json::from_str(&body)
        .map_err(|e| RelayError::MalformedResponse(format!("{}: {}", e, body)))?;
    Ok(record.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fields_serialize_with_airtable_column_names() {
        let fields = ContactFields {
            name: "Ada",
            email: "ada@example.com",
            phone: "",
            message: "Hello",
        };
        let body = serde_json::to_value(CreateRecordRequest { fields: &fields }).unwrap();
        assert_eq!(
            body,
            json!({"fields": {"Name": "Ada", "Email": "ada@example.com", "Phone": "", "Message": "Hello"}})
        );
    }

    #[test]
    fn records_url_escapes_table_names() {
        let credentials = AirtableCredentials {
            api_key: "key",
            base_id: "appXYZ",
            table_name: "Contact Submissions",
        };
        assert_eq!(
            records_url("https://api.airtable.com/", &credentials),
            "https://api.airtable.com/v0/appXYZ/Contact%20Submissions"
        );
    }
}
