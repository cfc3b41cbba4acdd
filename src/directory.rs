use crate::error::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// Default font-directory endpoint (Google webfonts API)
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/webfonts/v1/webfonts";

/// Resolved family record: canonical name plus variant -> asset URL map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyRecord {
    pub family: String,
    pub files: HashMap<String, String>,
}

/// Remote font-directory service, queried once per family per run
pub trait FontDirectory {
    /// Resolve a family name to its directory record, or `None` when the
    /// service has no match
    fn resolve(&self, family: &str) -> Result<Option<FamilyRecord>>;
}

/// Normalize a family name for querying: trim and collapse internal
/// whitespace. Percent-encoding is the HTTP client's job.
#[must_use]
pub fn normalize_family(family: &str) -> String {
    family.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Debug, Deserialize)]
struct DirectoryResponse {
    #[serde(default)]
    items: Vec<DirectoryItem>,
}

#[derive(Debug, Deserialize)]
struct DirectoryItem {
    family: String,
    #[serde(default)]
    files: HashMap<String, String>,
}

/// The first record the service lists is authoritative
fn first_match(response: DirectoryResponse) -> Option<FamilyRecord> {
    response.items.into_iter().next().map(|item| FamilyRecord {
        family: item.family,
        files: item.files,
    })
}

/// Google webfonts directory client
pub struct GoogleFonts {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GoogleFonts {
    /// Create a client against the default endpoint. An API key is read
    /// from `FONTPACK_API_KEY` when set and passed as the `key` parameter.
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: std::env::var("FONTPACK_API_KEY").ok().filter(|k| !k.is_empty()),
        })
    }
}

impl FontDirectory for GoogleFonts {
    fn resolve(&self, family: &str) -> Result<Option<FamilyRecord>> {
        let query = normalize_family(family);
        tracing::debug!("Querying font directory for '{query}'");

        let mut request = self
            .client
            .get(&self.endpoint)
            .query(&[("family", query.as_str())]);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key.as_str())]);
        }

        let response: DirectoryResponse =
            request.send()?.error_for_status()?.json()?;

        Ok(first_match(response))
    }
}
