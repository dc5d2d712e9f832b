use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use bw_core::{Article, ArticleSummary, CompletionModel, CompletionRequest, Error, Result};
use crate::prompts::{build_summary_prompt, SUMMARIZER_SYSTEM};
use crate::DEFAULT_SUMMARY_MODEL;

const MAX_RELIABILITY: u8 = 10;

/// Drop a Markdown code fence wrapped around the reply, if there is one.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Skip the info string ("json") on the opening line.
    match body.find('\n') {
        Some(newline) => body[newline + 1..].trim(),
        None => body.trim(),
    }
}

/// Parse a model reply into an [`ArticleSummary`].
pub fn parse_summary(raw: &str) -> Result<ArticleSummary> {
    let json = strip_code_fence(raw);
    let summary: ArticleSummary = serde_json::from_str(json)
        .map_err(|e| Error::Parse(format!("summary is not valid JSON: {}", e)))?;

    if summary.title.trim().is_empty() {
        return Err(Error::Parse("summary has an empty title".to_string()));
    }
    if summary.summary.trim().is_empty() {
        return Err(Error::Parse("summary has an empty summary".to_string()));
    }
    if summary.reliability > MAX_RELIABILITY {
        return Err(Error::Parse(format!(
            "reliability {} is outside 0..={}",
            summary.reliability, MAX_RELIABILITY
        )));
    }

    Ok(summary)
}

#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_SUMMARY_MODEL.to_string(),
            temperature: 0.1,
            max_tokens: 1000,
            timeout: Duration::from_secs(30),
        }
    }
}

pub struct Summarizer {
    model: Arc<dyn CompletionModel>,
    config: SummarizerConfig,
}

impl fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Summarizer")
            .field("model", &self.model.name())
            .field("config", &self.config)
            .finish()
    }
}

impl Summarizer {
    pub fn new(model: Arc<dyn CompletionModel>, config: SummarizerConfig) -> Self {
        Self { model, config }
    }

    pub async fn summarize(&self, article: &Article) -> Result<ArticleSummary> {
        let request = CompletionRequest {
            model: self.config.model.clone(),
            system: SUMMARIZER_SYSTEM.to_string(),
            user: build_summary_prompt(article),
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            timeout: self.config.timeout,
        };
        let raw = self.model.complete(&request).await?;
        parse_summary(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    const VALID: &str = r#"{
        "title": "LLM efficiency",
        "summary": "Researchers cut costs. Models got faster. Accuracy held.",
        "keyFacts": ["2x faster", "same accuracy"],
        "quotes": [{"text": "A big step", "context": "lead author"}],
        "source": "Example News",
        "url": "https://example.com/article1",
        "date": "2025-11-06",
        "reliability": 8
    }"#;

    #[test]
    fn test_parse_valid_summary() {
        let summary = parse_summary(VALID).unwrap();
        assert_eq!(summary.title, "LLM efficiency");
        assert_eq!(summary.key_facts, vec!["2x faster", "same accuracy"]);
        assert_eq!(summary.quotes[0].context, "lead author");
        assert_eq!(summary.reliability, 8);
    }

    #[test]
    fn test_parse_fenced_summary() {
        let fenced = format!("```json\n{}\n```", VALID);
        assert_eq!(parse_summary(&fenced).unwrap().title, "LLM efficiency");

        let bare_fence = format!("  ```\n{}\n```\n", VALID);
        assert_eq!(parse_summary(&bare_fence).unwrap().source, "Example News");
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(matches!(parse_summary("Sure! Here is the summary:"), Err(Error::Parse(_))));
        assert!(matches!(parse_summary(r#"{"title": "x""#), Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_out_of_range_reliability() {
        let too_high = VALID.replace(r#""reliability": 8"#, r#""reliability": 11"#);
        assert!(matches!(parse_summary(&too_high), Err(Error::Parse(_))));

        let negative = VALID.replace(r#""reliability": 8"#, r#""reliability": -1"#);
        assert!(matches!(parse_summary(&negative), Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_empty_summary() {
        let empty = VALID.replace(
            "Researchers cut costs. Models got faster. Accuracy held.",
            " ",
        );
        assert!(matches!(parse_summary(&empty), Err(Error::Parse(_))));
    }

    #[derive(Debug)]
    struct CannedModel {
        reply: String,
        seen: Mutex<Vec<CompletionRequest>>,
    }

    #[async_trait]
    impl CompletionModel for CannedModel {
        fn name(&self) -> &str {
            "Canned"
        }

        async fn complete(&self, request: &CompletionRequest) -> Result<String> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(self.reply.clone())
        }
    }

    #[tokio::test]
    async fn test_summarizer_uses_summary_settings() {
        let model = Arc::new(CannedModel { reply: VALID.to_string(), seen: Mutex::new(vec![]) });
        let summarizer = Summarizer::new(model.clone(), SummarizerConfig::default());
        let article = Article {
            title: "New Breakthrough".to_string(),
            url: "https://example.com/article1".to_string(),
            date: "2025-11-06".to_string(),
            content: "Researchers announced...".to_string(),
        };

        let summary = summarizer.summarize(&article).await.unwrap();
        assert_eq!(summary.url, "https://example.com/article1");

        let seen = model.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].model, "deepseek-reasoner");
        assert_eq!(seen[0].temperature, 0.1);
        assert_eq!(seen[0].max_tokens, 1000);
        assert_eq!(seen[0].timeout, Duration::from_secs(30));
        assert_eq!(seen[0].system, SUMMARIZER_SYSTEM);
        assert!(seen[0].user.contains("Title: New Breakthrough"));
    }

    #[tokio::test]
    async fn test_summarizer_surfaces_parse_failure() {
        let model = Arc::new(CannedModel { reply: "not json".to_string(), seen: Mutex::new(vec![]) });
        let summarizer = Summarizer::new(model, SummarizerConfig::default());
        let article = Article {
            title: "A".to_string(),
            url: "https://example.com/a".to_string(),
            date: String::new(),
            content: String::new(),
        };
        assert!(matches!(summarizer.summarize(&article).await, Err(Error::Parse(_))));
    }
}
