use url::Url;

pub mod models;
pub mod prompts;
pub mod summary;
pub mod composer;

pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/v1";
pub const DEFAULT_SUMMARY_MODEL: &str = "deepseek-reasoner";
pub const DEFAULT_COMPOSE_MODEL: &str = "deepseek-chat";

#[derive(Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: Url,
    pub summary_model: String,
    pub compose_model: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url.as_str())
            .field("summary_model", &self.summary_model)
            .field("compose_model", &self.compose_model)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            // Constant, known to parse.
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            summary_model: DEFAULT_SUMMARY_MODEL.to_string(),
            compose_model: DEFAULT_COMPOSE_MODEL.to_string(),
        }
    }
}

pub mod prelude {
    pub use super::Config;
    pub use super::models::{create_model, DeepSeekModel};
    pub use super::summary::{parse_summary, Summarizer, SummarizerConfig};
    pub use super::composer::{BlogComposer, ComposerConfig};
    pub use bw_core::{Article, ArticleSummary, BlogPost, ResearchBundle, Result, Error};
}

pub use models::create_model;
pub use summary::{parse_summary, Summarizer, SummarizerConfig};
pub use composer::{BlogComposer, ComposerConfig};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.base_url.as_str(), "https://api.deepseek.com/v1");
        assert_eq!(config.summary_model, "deepseek-reasoner");
        assert_eq!(config.compose_model, "deepseek-chat");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config {
            api_key: Some("sk-secret".to_string()),
            ..Config::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
