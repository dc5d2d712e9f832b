use std::path::PathBuf;
use std::sync::Arc;
use clap::Subcommand;
use tokio::io::AsyncReadExt;
use tracing::info;
use bw_core::{Article, CompletionModel, Error, Result};
use bw_publish::publisher::DEFAULT_OUTPUT_DIR;
use crate::manager::{Pipeline, PipelineConfig, DEFAULT_TAGS, DEFAULT_TOPIC};

#[derive(Subcommand, Debug, Clone)]
pub enum PipelineCommands {
    /// Summarize articles, compose a blog post and save it
    Generate {
        /// JSON array of articles (title, url, date, content); `-` reads stdin
        #[arg(long, short)]
        articles: String,
        /// Directory the post is written to
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,
        /// Topic label passed to the writer
        #[arg(long, default_value = DEFAULT_TOPIC)]
        topic: String,
        /// Front-matter tag (repeatable, replaces the defaults)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Summarize articles and print the summaries as JSON
    Summarize {
        /// JSON array of articles; `-` reads stdin
        #[arg(long, short)]
        articles: String,
    },
}

/// Read the article list from a file, or from stdin when `source` is `-`.
pub async fn load_articles(source: &str) -> Result<Vec<Article>> {
    let raw = if source == "-" {
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        buf
    } else {
        tokio::fs::read_to_string(source).await.map_err(|e| {
            Error::Io(std::io::Error::new(e.kind(), format!("{}: {}", source, e)))
        })?
    };

    let articles: Vec<Article> = serde_json::from_str(&raw)?;
    info!("📰 Loaded {} articles from {}", articles.len(), if source == "-" { "stdin" } else { source });
    Ok(articles)
}

pub async fn handle_command(
    command: PipelineCommands,
    model: Arc<dyn CompletionModel>,
    inference: &bw_inference::Config,
) -> Result<()> {
    match command {
        PipelineCommands::Generate { articles, output_dir, topic, tags } => {
            let articles = load_articles(&articles).await?;
            let config = PipelineConfig {
                output_dir,
                topic,
                tags: if tags.is_empty() {
                    DEFAULT_TAGS.iter().map(|t| t.to_string()).collect()
                } else {
                    tags
                },
            };
            let pipeline = Pipeline::from_config(model, inference, config);
            let report = pipeline.run(&articles).await?;

            info!("📄 File: {}", report.path.display());
            info!(
                "📈 Stats: {} words, {} citations, {} sources ({} skipped)",
                report.quality.word_count, report.quality.citation_count, report.sources, report.skipped
            );
        }
        PipelineCommands::Summarize { articles } => {
            let articles = load_articles(&articles).await?;
            let pipeline = Pipeline::from_config(model, inference, PipelineConfig::default());
            let batch = pipeline.summarize_all(&articles).await;
            if batch.summaries.is_empty() {
                return Err(Error::NoSources);
            }
            println!("{}", serde_json::to_string_pretty(&batch.summaries)?);
            info!("✅ {} summarized, {} skipped", batch.summaries.len(), batch.skipped);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_articles_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("articles.json");
        std::fs::write(
            &path,
            r#"[
                {"title": "A", "url": "https://example.com/a", "date": "2025-11-06", "content": "alpha"},
                {"title": "B", "url": "https://example.com/b"}
            ]"#,
        )
        .unwrap();

        let articles = load_articles(path.to_str().unwrap()).await.unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].content, "alpha");
        assert_eq!(articles[1].date, "");
    }

    #[tokio::test]
    async fn test_load_articles_missing_file() {
        let err = load_articles("/definitely/not/here.json").await.unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[tokio::test]
    async fn test_load_articles_rejects_non_array() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("articles.json");
        std::fs::write(&path, r#"{"title": "A"}"#).unwrap();
        let err = load_articles(path.to_str().unwrap()).await.unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
