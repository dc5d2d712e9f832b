use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use bw_core::{BlogPost, CompletionModel, CompletionRequest, Error, ResearchBundle, Result};
use crate::prompts::{build_composition_prompt, WRITER_SYSTEM};
use crate::DEFAULT_COMPOSE_MODEL;

#[derive(Debug, Clone)]
pub struct ComposerConfig {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_COMPOSE_MODEL.to_string(),
            temperature: 0.2,
            max_tokens: 4000,
            timeout: Duration::from_secs(60),
        }
    }
}

/// Turns a research bundle into a full Markdown post with one completion call.
pub struct BlogComposer {
    model: Arc<dyn CompletionModel>,
    config: ComposerConfig,
}

impl fmt::Debug for BlogComposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlogComposer")
            .field("model", &self.model.name())
            .field("config", &self.config)
            .finish()
    }
}

impl BlogComposer {
    pub fn new(model: Arc<dyn CompletionModel>, config: ComposerConfig) -> Self {
        Self { model, config }
    }

    pub async fn compose(&self, bundle: &ResearchBundle) -> Result<BlogPost> {
        let request = CompletionRequest {
            model: self.config.model.clone(),
            system: WRITER_SYSTEM.to_string(),
            user: build_composition_prompt(bundle)?,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            timeout: self.config.timeout,
        };

        let markdown = self.model.complete(&request).await?;
        if markdown.trim().is_empty() {
            return Err(Error::Completion("model returned an empty post".to_string()));
        }
        Ok(BlogPost::new(markdown))
    }
}
