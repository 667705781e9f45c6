use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::{info, warn};

use crate::config::ModelConfig;
use crate::errors::DeskResult;
use crate::summarizer::http_model::HttpSummaryModel;
use crate::summarizer::traits::SummaryModel;

type Loader = Box<dyn Fn() -> DeskResult<Arc<dyn SummaryModel>> + Send + Sync>;

/// Process-wide handle to the summarization model.
///
/// The model is acquired on first use and at most once, even when several
/// threads ask concurrently. A failed acquisition is remembered, so every
/// later summary goes through the fallback without retrying.
pub struct ModelHandle {
    loader: Option<Loader>,
    model: OnceCell<Option<Arc<dyn SummaryModel>>>,
}

impl ModelHandle {
    /// Defer acquisition to `loader`, run on first `get`
    pub fn lazy<F>(loader: F) -> Self
    where
        F: Fn() -> DeskResult<Arc<dyn SummaryModel>> + Send + Sync + 'static,
    {
        Self {
            loader: Some(Box::new(loader)),
            model: OnceCell::new(),
        }
    }

    /// Lazily connect to the HTTP inference endpoint described by `config`
    pub fn from_config(config: &ModelConfig) -> Self {
        let config = config.clone();
        Self::lazy(move || {
            let model: Arc<dyn SummaryModel> = Arc::new(HttpSummaryModel::connect(&config)?);
            Ok(model)
        })
    }

    /// Wrap an already acquired model
    pub fn ready(model: Arc<dyn SummaryModel>) -> Self {
        Self {
            loader: None,
            model: OnceCell::with_value(Some(model)),
        }
    }

    /// A handle that never yields a model
    pub fn unavailable() -> Self {
        Self {
            loader: None,
            model: OnceCell::with_value(None),
        }
    }

    /// The model, acquiring it first if this is the first call
    pub fn get(&self) -> Option<&dyn SummaryModel> {
        self.model
            .get_or_init(|| {
                let loader = self.loader.as_ref()?;
                match loader() {
                    Ok(model) => {
                        info!(model = %model.name(), "summarization model ready");
                        Some(model)
                    }
                    Err(e) => {
                        warn!(error = %e, "summarization model unavailable, using fallback summaries");
                        None
                    }
                }
            })
            .as_deref()
    }

    #[cfg(test)]
    fn is_initialized(&self) -> bool {
        self.model.get().is_some()
    }
}
