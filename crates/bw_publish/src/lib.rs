pub mod slug;
pub mod quality;
pub mod publisher;

pub use slug::{compose_filename, extract_title, slugify, FALLBACK_TITLE, MAX_SLUG_LEN};
pub use quality::QualityReport;
pub use publisher::Publisher;

pub mod prelude {
    pub use super::publisher::Publisher;
    pub use super::quality::{self, QualityReport};
    pub use super::slug::*;
}
