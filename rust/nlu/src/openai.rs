//! OpenAI chat-completions backend.
//!
//! Blocking HTTP client for the classifier's LLM tiers. The request
//! carries a bounded timeout: the game is strictly sequential, so a
//! hung call must become a backend error (and thus a heuristic
//! classification) instead of stalling the turn forever.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::{BackendError, LanguageBackend};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

pub struct OpenAiBackend {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiBackend {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, BackendError> {
        Self::with_base_url(api_key, model, DEFAULT_BASE_URL)
    }

    /// The base URL is overridable so tests can point the backend at a
    /// local mock server.
    pub fn with_base_url(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, BackendError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }
}

impl LanguageBackend for OpenAiBackend {
    fn complete(&self, prompt: &str) -> Result<String, BackendError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
            temperature: 0.0,
        };
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()?;
        if !response.status().is_success() {
            return Err(BackendError::Status(response.status().as_u16()));
        }
        let value: Value = response.json()?;
        value["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or(BackendError::MissingContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn backend_for(server: &MockServer) -> OpenAiBackend {
        OpenAiBackend::with_base_url("test-key", "test-model", server.base_url())
            .expect("client build")
    }

    #[test]
    fn complete_extracts_the_reply_text() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/chat/completions")
                .header("authorization", "Bearer test-key")
                .json_body_partial(r#"{"model": "test-model", "temperature": 0.0}"#);
            then.status(200).json_body(serde_json::json!({
                "choices": [
                    {"message": {"role": "assistant", "content": "HIT"}}
                ]
            }));
        });

        let backend = backend_for(&server);
        let reply = backend.complete("classify this").unwrap();
        assert_eq!(reply, "HIT");
        mock.assert();
    }

    #[test]
    fn non_success_status_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(401).body("unauthorized");
        });

        let backend = backend_for(&server);
        match backend.complete("classify this") {
            Err(BackendError::Status(401)) => {}
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[test]
    fn malformed_body_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200).json_body(serde_json::json!({"choices": []}));
        });

        let backend = backend_for(&server);
        assert!(matches!(
            backend.complete("classify this"),
            Err(BackendError::MissingContent)
        ));
    }

    #[test]
    fn classifier_falls_back_when_the_server_misbehaves() {
        use crate::{Intent, IntentClassifier};

        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(500).body("boom");
        });

        let classifier = IntentClassifier::new(Some(Box::new(backend_for(&server))));
        assert_eq!(classifier.classify("deal me one"), Intent::Hit);
        assert_eq!(classifier.classify("gibberish"), Intent::Stand);
    }
}
