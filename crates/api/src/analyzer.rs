//! Summarization collaborator client.
//!
//! The knowledge base treats content analysis as an opaque external service:
//! hand it text, get structured JSON back. [`ContentAnalyzer`] is the seam;
//! [`OpenAiAnalyzer`] talks to an OpenAI-compatible chat-completions
//! endpoint, and [`StaticAnalyzer`] stands in when no API key is configured.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::AnalyzerConfig;

/// System prompt for issue content analysis.
const ANALYZE_PROMPT: &str = "Analyze the following content and provide a summary, key facts, \
    and sentiment score (1-5). Return JSON in this format: \
    { \"summary\": string, \"keyFacts\": string[], \"sentiment\": number }";

/// System prompt for solution matching.
const MATCH_PROMPT: &str = "Based on the issue description, suggest potential solutions with \
    confidence scores. Return JSON in format: \
    { \"suggestions\": [{ \"title\": string, \"description\": string, \"confidence\": number }] }";

#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error("analyzer request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("analyzer returned a malformed response: {0}")]
    Malformed(String),
}

/// Structured analysis of an issue's content.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAnalysis {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub key_facts: Vec<String>,
    /// Sentiment score on a 1-5 scale.
    #[serde(default)]
    pub sentiment: f64,
}

/// A candidate solution suggested for a free-text issue description.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionSuggestion {
    pub title: String,
    pub description: String,
    /// Model confidence in the suggestion, 0-1.
    pub confidence: f64,
}

/// Suggestions returned by [`ContentAnalyzer::match_solutions`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolutionMatches {
    #[serde(default)]
    pub suggestions: Vec<SolutionSuggestion>,
}

/// The summarization collaborator interface.
#[async_trait]
pub trait ContentAnalyzer: Send + Sync {
    /// Summarize issue content into key facts and a sentiment score.
    async fn analyze(&self, text: &str) -> Result<ContentAnalysis, AnalyzerError>;

    /// Suggest candidate solutions for a free-text issue description.
    async fn match_solutions(&self, description: &str) -> Result<SolutionMatches, AnalyzerError>;
}

// ---------------------------------------------------------------------------
// OpenAI-compatible implementation
// ---------------------------------------------------------------------------

/// Minimal deserialization target for a chat-completions response.
#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
pub struct OpenAiAnalyzer {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiAnalyzer {
    /// Build from config. Returns `None` when no API key is configured.
    pub fn from_config(config: &AnalyzerConfig) -> Option<Self> {
        let api_key = config.api_key.clone()?;
        Some(Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    /// Run one JSON-mode chat completion and deserialize the message content.
    async fn chat_json<T: serde::de::DeserializeOwned>(
        &self,
        system: &str,
        user: &str,
    ) -> Result<T, AnalyzerError> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user },
            ],
            "response_format": { "type": "json_object" },
        });

        let completion: ChatCompletion = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let content = completion
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| AnalyzerError::Malformed("response contained no choices".into()))?;

        serde_json::from_str(content)
            .map_err(|e| AnalyzerError::Malformed(format!("invalid JSON content: {e}")))
    }
}

#[async_trait]
impl ContentAnalyzer for OpenAiAnalyzer {
    async fn analyze(&self, text: &str) -> Result<ContentAnalysis, AnalyzerError> {
        self.chat_json(ANALYZE_PROMPT, text).await
    }

    async fn match_solutions(&self, description: &str) -> Result<SolutionMatches, AnalyzerError> {
        self.chat_json(MATCH_PROMPT, description).await
    }
}

// ---------------------------------------------------------------------------
// Static fallback
// ---------------------------------------------------------------------------

/// Analyzer used when no API key is configured: empty key facts, no
/// suggestions. Keeps issue creation working without the external service.
#[derive(Debug, Default)]
pub struct StaticAnalyzer;

#[async_trait]
impl ContentAnalyzer for StaticAnalyzer {
    async fn analyze(&self, _text: &str) -> Result<ContentAnalysis, AnalyzerError> {
        Ok(ContentAnalysis {
            summary: String::new(),
            key_facts: Vec::new(),
            sentiment: 3.0,
        })
    }

    async fn match_solutions(&self, _description: &str) -> Result<SolutionMatches, AnalyzerError> {
        Ok(SolutionMatches::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_requires_api_key() {
        let config = AnalyzerConfig {
            api_key: None,
            base_url: "https://api.openai.com/v1".into(),
            model: "gpt-4o".into(),
        };
        assert!(OpenAiAnalyzer::from_config(&config).is_none());

        let config = AnalyzerConfig {
            api_key: Some("sk-test".into()),
            ..config
        };
        assert!(OpenAiAnalyzer::from_config(&config).is_some());
    }

    #[test]
    fn analysis_deserializes_with_missing_fields() {
        // The model occasionally omits fields; defaults must kick in.
        let analysis: ContentAnalysis = serde_json::from_str("{}").unwrap();
        assert!(analysis.key_facts.is_empty());

        let analysis: ContentAnalysis =
            serde_json::from_str(r#"{"summary":"s","keyFacts":["a","b"],"sentiment":4}"#).unwrap();
        assert_eq!(analysis.key_facts.len(), 2);
        assert_eq!(analysis.sentiment, 4.0);
    }

    #[tokio::test]
    async fn static_analyzer_produces_empty_results() {
        let analyzer = StaticAnalyzer;
        let analysis = analyzer.analyze("anything").await.unwrap();
        assert!(analysis.key_facts.is_empty());

        let matches = analyzer.match_solutions("anything").await.unwrap();
        assert!(matches.suggestions.is_empty());
    }
}
