pub mod models;
pub mod error;
pub mod types;

pub use error::Error;
pub use models::{CompletionModel, CompletionRequest};
pub use types::{Article, ArticleSummary, BlogPost, Quote, ResearchBundle};

pub type Result<T> = std::result::Result<T, Error>;
