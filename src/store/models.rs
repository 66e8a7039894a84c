//! Login Models
//!
//! Saved logins as handed out by a login store.

use chrono::{DateTime, Local};
use secrecy::SecretString;
use serde::Deserialize;

/// A saved login.
///
/// Only `hostname` is inspected by the section index; the rest is payload
/// carried through to whoever displays or fills the login.
#[derive(Debug, Clone)]
pub struct LoginRecord {
    pub id: String,
    pub hostname: String,
    pub username: Option<String>,
    pub password: SecretString,
    pub form_submit_url: Option<String>,
    pub http_realm: Option<String>,
    pub created_at: DateTime<Local>,
    pub last_used_at: Option<DateTime<Local>>,
}

impl LoginRecord {
    /// Create a new login with generated ID
    pub fn new(hostname: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            hostname: hostname.into(),
            username: None,
            password: SecretString::from(password.into()),
            form_submit_url: None,
            http_realm: None,
            created_at: Local::now(),
            last_used_at: None,
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Case-insensitive substring match over the searchable fields.
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        let fields = [
            Some(self.hostname.as_str()),
            self.form_submit_url.as_deref(),
            self.username.as_deref(),
        ];

        fields
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// One login as it appears in a JSON export
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginEntry {
    pub hostname: String,
    #[serde(default)]
    pub username: Option<String>,
    pub password: String,
    #[serde(default, rename = "formSubmitURL")]
    pub form_submit_url: Option<String>,
    #[serde(default)]
    pub http_realm: Option<String>,
}

impl From<LoginEntry> for LoginRecord {
    fn from(entry: LoginEntry) -> Self {
        let mut record = LoginRecord::new(entry.hostname, entry.password);
        record.username = entry.username;
        record.form_submit_url = entry.form_submit_url;
        record.http_realm = entry.http_realm;
        record
    }
}
