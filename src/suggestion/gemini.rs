use super::{clean_suggestion, SuggestionAdapter, SuggestionError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

const PROMPT: &str = "Suggest one creative and delicious-sounding Italian dish name. \
                      Only provide the name, with no extra text or quotation marks.";

/// Gemini-backed suggestion adapter.
///
/// The API key is passed in by the caller and sent as the `x-goog-api-key` header.
/// It is never logged.
#[derive(Clone)]
pub struct GeminiSuggester {
    api_key: String,
    model: String,
    base_url: String,
    http: reqwest::Client,
}

impl std::fmt::Debug for GeminiSuggester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiSuggester")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GeminiSuggester {
    pub fn new(api_key: String) -> Self {
        Self::new_with_base_url(
            api_key,
            DEFAULT_GEMINI_MODEL.to_string(),
            DEFAULT_GEMINI_BASE_URL.to_string(),
        )
    }

    pub fn new_with_base_url(api_key: String, model: String, base_url: String) -> Self {
        Self {
            api_key,
            model,
            base_url,
            http: reqwest::Client::new(),
        }
    }

    fn build_generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl SuggestionAdapter for GeminiSuggester {
    fn name(&self) -> &'static str {
        "gemini"
    }

    #[instrument(skip(self), fields(model = %self.model))]
    async fn suggest(&self) -> Result<String, SuggestionError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: PROMPT.to_string(),
                }],
            }],
        };

        let resp = self
            .http
            .post(self.build_generate_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Gemini request failed");
                SuggestionError::Request(e.to_string())
            })?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp
                .json::<ErrorEnvelope>()
                .await
                .ok()
                .map(|envelope| envelope.error.message)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());
            error!(status = status.as_u16(), %message, "Gemini returned an error");
            return Err(SuggestionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = resp.json().await.map_err(|e| {
            error!(error = %e, "Gemini response json decode failed");
            SuggestionError::Request(e.to_string())
        })?;

        let raw = body.first_text();
        debug!(%raw, "Gemini answered");
        clean_suggestion(&raw)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, empty if there is none.
    fn first_text(&self) -> String {
        self.candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_generate_url_trims_trailing_slash() {
        let suggester = GeminiSuggester::new_with_base_url(
            "key".into(),
            "gemini-2.5-flash".into(),
            "http://localhost:8080/".into(),
        );
        assert_eq!(
            suggester.build_generate_url(),
            "http://localhost:8080/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_debug_output_hides_api_key() {
        let suggester = GeminiSuggester::new("super-secret".into());
        assert!(!format!("{suggester:?}").contains("super-secret"));
    }
}
