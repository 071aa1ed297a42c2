/// Connection settings for the Airtable base that stores contact submissions.
///
/// The three secrets stay optional here: a missing one fails the request that
/// needs it, not the whole process.
#[derive(Clone, Debug, Default)]
pub struct AirtableConfig {
    pub api_key: Option<String>,
    pub base_id: Option<String>,
    pub table_name: Option<String>,
    pub api_url: String,
}

/// The resolved, complete set of secrets needed for one outbound call.
#[derive(Clone, Debug, PartialEq)]
pub struct AirtableCredentials<'a> {
    pub api_key: &'a str,
    pub base_id: &'a str,
    pub table_name: &'a str,
}

pub const DEFAULT_AIRTABLE_API_URL: &str = "https://api.airtable.com";

impl AirtableConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: non_empty_var("AIRTABLE_API_KEY"),
            base_id: non_empty_var("AIRTABLE_BASE_ID"),
            table_name: non_empty_var("AIRTABLE_TABLE_NAME"),
            api_url: non_empty_var("AIRTABLE_API_URL")
                .unwrap_or_else(|| DEFAULT_AIRTABLE_API_URL.to_string()),
        }
    }

    /// Names of the environment variables that are not set.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.api_key.is_none() {
            missing.push("AIRTABLE_API_KEY");
        }
        if self.base_id.is_none() {
            missing.push("AIRTABLE_BASE_ID");
        }
        if self.table_name.is_none() {
            missing.push("AIRTABLE_TABLE_NAME");
        }
        missing
    }

    pub fn credentials(&self) -> Option<AirtableCredentials<'_>> {
        Some(AirtableCredentials {
            api_key: self.api_key.as_deref()?,
            base_id: self.base_id.as_deref()?,
            table_name: self.table_name.as_deref()?,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
