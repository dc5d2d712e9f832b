use chrono::{DateTime, Local};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static CITATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\d+\]").unwrap());

/// A raw source article handed to the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    /// Free-form publication date, passed through to the model untouched.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    #[serde(default)]
    pub context: String,
}

/// Structured summary of one article, as returned by the summarizer model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummary {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub key_facts: Vec<String>,
    #[serde(default)]
    pub quotes: Vec<Quote>,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub date: String,
    pub reliability: u8,
}

/// Everything the composer needs to write one post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchBundle {
    pub generated_date: DateTime<Local>,
    pub generated_date_formatted: String,
    pub topic: String,
    pub sources: Vec<ArticleSummary>,
    pub total_sources: usize,
    pub avg_reliability: f32,
    pub tags: Vec<String>,
}

impl ResearchBundle {
    pub fn new(
        sources: Vec<ArticleSummary>,
        topic: impl Into<String>,
        tags: Vec<String>,
        generated_date: DateTime<Local>,
    ) -> Self {
        let avg_reliability = if sources.is_empty() {
            0.0
        } else {
            sources.iter().map(|s| s.reliability as f32).sum::<f32>() / sources.len() as f32
        };

        Self {
            generated_date_formatted: generated_date.format("%B %d, %Y").to_string(),
            generated_date,
            topic: topic.into(),
            total_sources: sources.len(),
            avg_reliability,
            sources,
            tags,
        }
    }
}

/// Markdown text of a composed post, front matter included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub markdown: String,
}

impl BlogPost {
    pub fn new(markdown: impl Into<String>) -> Self {
        Self { markdown: markdown.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.markdown
    }

    pub fn word_count(&self) -> usize {
        self.markdown.split_whitespace().count()
    }

    /// Number of inline `[N]` citation markers.
    pub fn citation_count(&self) -> usize {
        CITATION.find_iter(&self.markdown).count()
    }
}
