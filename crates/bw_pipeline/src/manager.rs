use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use chrono::{DateTime, Local};
use tracing::{error, info, warn};
use bw_core::{Article, ArticleSummary, CompletionModel, Error, ResearchBundle, Result};
use bw_inference::{BlogComposer, ComposerConfig, Summarizer, SummarizerConfig};
use bw_publish::publisher::DEFAULT_OUTPUT_DIR;
use bw_publish::{quality, Publisher, QualityReport};

pub const DEFAULT_TOPIC: &str = "AI, Machine Learning & Data Science Updates";
pub const DEFAULT_TAGS: [&str; 3] = ["artificial-intelligence", "machine-learning", "data-science"];

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub output_dir: PathBuf,
    pub topic: String,
    pub tags: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            topic: DEFAULT_TOPIC.to_string(),
            tags: DEFAULT_TAGS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Where a run currently is. Only used for progress reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Summarizing { index: usize, total: usize },
    Composing,
    Publishing,
    Done,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Summarizing { index, total } => write!(f, "summarizing {}/{}", index, total),
            Stage::Composing => write!(f, "composing"),
            Stage::Publishing => write!(f, "publishing"),
            Stage::Done => write!(f, "done"),
            Stage::Failed => write!(f, "failed"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub path: PathBuf,
    pub sources: usize,
    pub skipped: usize,
    pub quality: QualityReport,
}

/// Summaries that made it through, plus how many articles were dropped.
#[derive(Debug, Default)]
pub struct SummaryBatch {
    pub summaries: Vec<ArticleSummary>,
    pub skipped: usize,
}

pub struct Pipeline {
    summarizer: Summarizer,
    composer: BlogComposer,
    publisher: Publisher,
    config: PipelineConfig,
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("summarizer", &self.summarizer)
            .field("composer", &self.composer)
            .field("publisher", &self.publisher)
            .field("config", &self.config)
            .finish()
    }
}

impl Pipeline {
    pub fn new(
        model: Arc<dyn CompletionModel>,
        summarizer_config: SummarizerConfig,
        composer_config: ComposerConfig,
        config: PipelineConfig,
    ) -> Self {
        Self {
            summarizer: Summarizer::new(model.clone(), summarizer_config),
            composer: BlogComposer::new(model, composer_config),
            publisher: Publisher::new(config.output_dir.clone()),
            config,
        }
    }

    /// Same as [`Pipeline::new`], taking model names from the inference config.
    pub fn from_config(
        model: Arc<dyn CompletionModel>,
        inference: &bw_inference::Config,
        config: PipelineConfig,
    ) -> Self {
        let summarizer_config = SummarizerConfig {
            model: inference.summary_model.clone(),
            ..SummarizerConfig::default()
        };
        let composer_config = ComposerConfig {
            model: inference.compose_model.clone(),
            ..ComposerConfig::default()
        };
        Self::new(model, summarizer_config, composer_config, config)
    }

    /// Summarize articles one after another. Failures are logged and skipped.
    pub async fn summarize_all(&self, articles: &[Article]) -> SummaryBatch {
        let mut batch = SummaryBatch::default();
        let total = articles.len();

        for (i, article) in articles.iter().enumerate() {
            let stage = Stage::Summarizing { index: i + 1, total };
            info!("📝 [{}] {}", stage, article.title);
            match self.summarizer.summarize(article).await {
                Ok(summary) => {
                    info!("✨ Summarized: {}", summary.title);
                    batch.summaries.push(summary);
                }
                Err(e) => {
                    warn!("⚠️ Skipping \"{}\": {}", article.title, e);
                    batch.skipped += 1;
                }
            }
        }

        batch
    }

    pub fn build_bundle(&self, summaries: Vec<ArticleSummary>, now: DateTime<Local>) -> ResearchBundle {
        ResearchBundle::new(summaries, self.config.topic.clone(), self.config.tags.clone(), now)
    }

    /// Summarize, compose, check and publish. Nothing is written unless composition succeeds.
    pub async fn run(&self, articles: &[Article]) -> Result<RunReport> {
        let now = Local::now();
        info!("🤖 Starting blog generation for {} articles", articles.len());

        let batch = self.summarize_all(articles).await;
        if batch.summaries.is_empty() {
            error!("❌ [{}] No summaries generated", Stage::Failed);
            return Err(Error::NoSources);
        }

        let bundle = self.build_bundle(batch.summaries, now);
        info!("📦 Aggregated {} summaries (avg reliability {:.1})", bundle.total_sources, bundle.avg_reliability);

        info!("✍️ [{}] Generating blog post", Stage::Composing);
        let post = match self.composer.compose(&bundle).await {
            Ok(post) => post,
            Err(e) => {
                error!("❌ [{}] Blog generation failed: {}", Stage::Failed, e);
                return Err(e);
            }
        };

        let report = quality::check(&post);
        info!("📊 Word count: {}, citations: {}", report.word_count, report.citation_count);
        if report.passed() {
            info!("✅ All quality checks passed");
        } else {
            warn!("⚠️ Quality issues: {}", report.issues.join(", "));
        }

        info!("💾 [{}] Saving blog post to {}", Stage::Publishing, self.publisher.output_dir().display());
        let path = self.publisher.publish(&post, now.date_naive()).await?;
        info!("🎉 [{}] Blog post saved: {}", Stage::Done, path.display());

        Ok(RunReport {
            path,
            sources: bundle.total_sources,
            skipped: batch.skipped,
            quality: report,
        })
    }
}
