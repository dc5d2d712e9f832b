use std::io;
use std::path::{Path, PathBuf};
use chrono::NaiveDate;
use bw_core::{BlogPost, Result};
use crate::slug::{compose_filename, extract_title, slugify};

pub const DEFAULT_OUTPUT_DIR: &str = "./content/blog";

fn with_path(err: io::Error, path: &Path) -> io::Error {
    io::Error::new(err.kind(), format!("{}: {}", path.display(), err))
}

/// Writes composed posts as `<date>-<slug>.md` under one directory.
#[derive(Debug, Clone)]
pub struct Publisher {
    output_dir: PathBuf,
}

impl Default for Publisher {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

impl Publisher {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into() }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn path_for(&self, post: &BlogPost, date: NaiveDate) -> PathBuf {
        let slug = slugify(&extract_title(post.as_str()));
        self.output_dir.join(compose_filename(&slug, date))
    }

    /// Save the post, replacing any file with the same name.
    ///
    /// The content is staged in a hidden sibling file and renamed into place,
    /// so concurrent runs end with one complete file (last writer wins).
    pub async fn publish(&self, post: &BlogPost, date: NaiveDate) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| with_path(e, &self.output_dir))?;

        let path = self.path_for(post, date);
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let staging = self.output_dir.join(format!(".{}.{}.tmp", file_name, std::process::id()));

        tokio::fs::write(&staging, post.as_str())
            .await
            .map_err(|e| with_path(e, &staging))?;
        if let Err(e) = tokio::fs::rename(&staging, &path).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(with_path(e, &path).into());
        }

        tracing::debug!("Wrote {} bytes to {}", post.as_str().len(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 6).unwrap()
    }

    #[tokio::test]
    async fn test_publish_creates_nested_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("content").join("blog");
        let publisher = Publisher::new(&dir);
        let post = BlogPost::new("---\ntitle: \"Hello World\"\n---\nBody");

        let path = publisher.publish(&post, date()).await.unwrap();
        assert_eq!(path, dir.join("2025-11-06-hello-world.md"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), post.as_str());

        // Only the published file remains; the staging file was renamed away.
        let entries: Vec<_> = std::fs::read_dir(&dir).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_publish_overwrites_existing_file() {
        let tmp = TempDir::new().unwrap();
        let publisher = Publisher::new(tmp.path());

        let first = BlogPost::new("title: \"Same\"\nfirst");
        let second = BlogPost::new("title: \"Same\"\nsecond");
        let path = publisher.publish(&first, date()).await.unwrap();
        let again = publisher.publish(&second, date()).await.unwrap();

        assert_eq!(path, again);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "title: \"Same\"\nsecond");
    }

    #[tokio::test]
    async fn test_publish_uses_fallback_title() {
        let tmp = TempDir::new().unwrap();
        let publisher = Publisher::new(tmp.path());
        let path = publisher.publish(&BlogPost::new("# No front matter"), date()).await.unwrap();
        assert_eq!(path.file_name().unwrap(), "2025-11-06-ai-research-update.md");
    }

    #[tokio::test]
    async fn test_publish_long_title_stays_within_name_limit() {
        let tmp = TempDir::new().unwrap();
        let publisher = Publisher::new(tmp.path());
        let title = "Large language models ".repeat(12);
        let post = BlogPost::new(format!("---\ntitle: \"{}\"\n---\nBody", title.trim()));

        let path = publisher.publish(&post, date()).await.unwrap();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("2025-11-06-large-language-models"));
        assert!(name.len() <= "2025-11-06-".len() + crate::slug::MAX_SLUG_LEN + ".md".len());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), post.as_str());
    }

    #[tokio::test]
    async fn test_publish_fails_when_output_dir_is_a_file() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blog");
        std::fs::write(&blocker, "not a directory").unwrap();

        let publisher = Publisher::new(&blocker);
        let err = publisher.publish(&BlogPost::new("title: x"), date()).await.unwrap_err();
        assert!(matches!(err, bw_core::Error::Io(_)));
        assert!(err.to_string().contains("blog"));
    }
}
