pub mod manager;
pub mod cli;
mod logging;

pub use manager::{Pipeline, PipelineConfig, RunReport, Stage, SummaryBatch};
pub use cli::{handle_command, load_articles, PipelineCommands};
pub use logging::init_logging;

pub mod prelude {
    pub use super::manager::{Pipeline, PipelineConfig, RunReport};
    pub use bw_core::{Article, Result, Error};
}
