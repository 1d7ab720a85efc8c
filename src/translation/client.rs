use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;

/// Fixed endpoint of the Google Translate v2 REST API.
pub const TRANSLATE_ENDPOINT: &str = "https://www.googleapis.com/language/translate/v2";

#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub key: String,
    pub target: String,
    pub source: Option<String>,
    pub query: String,
}

impl TranslationRequest {
    /// Query parameters in wire order. `source` is omitted when absent so
    /// the service auto-detects the input language.
    pub fn query_params(&self) -> Vec<(&'static str, &str)> {
        let mut params = vec![
            ("key", self.key.as_str()),
            ("target", self.target.as_str()),
        ];
        if let Some(source) = &self.source {
            params.push(("source", source.as_str()));
        }
        params.push(("q", self.query.as_str()));
        params
    }
}

#[derive(Debug, Default, Deserialize)]
struct TranslationResponse {
    #[serde(default)]
    data: TranslationData,
}

#[derive(Debug, Default, Deserialize)]
struct TranslationData {
    #[serde(default)]
    translations: Vec<Translation>,
}

/// One translated string paired with the language the service detected
/// as the input's source.
///
/// `translated_text` may contain HTML entities; callers unescape it
/// before display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Translation {
    pub translated_text: String,
    pub detected_source_language: String,
}

pub struct TranslationClient {
    client: Client,
    endpoint: String,
}

impl TranslationClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    /// Issue the single GET request and decode the response body.
    ///
    /// The body is read to completion before decoding, so transport and
    /// format failures stay distinct. A well-formed body with missing
    /// fields decodes to empty values rather than failing, and the HTTP
    /// status line is not inspected: an error body that parses as JSON
    /// simply yields zero translations.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<Vec<Translation>> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&request.query_params())
            .send()
            .await
            .with_context(|| format!("Failed to reach translation API: {}", self.endpoint))?;

        let body = response
            .text()
            .await
            .context("Failed to read translation API response body")?;

        let decoded: TranslationResponse = serde_json::from_str(&body)
            .context("Failed to decode translation API response as JSON")?;

        Ok(decoded.data.translations)
    }
}
