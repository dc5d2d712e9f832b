use std::sync::Arc;
use bw_core::{CompletionModel, Result};
use crate::Config;

pub mod deepseek;

pub use deepseek::DeepSeekModel;

pub fn create_model(config: &Config) -> Result<Arc<dyn CompletionModel>> {
    let model = DeepSeekModel::new(config)?;
    tracing::debug!("Created completion model {:?}", model);
    Ok(Arc::new(model))
}
