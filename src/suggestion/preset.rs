use super::{SuggestionAdapter, SuggestionError};
use crate::model::PRESET_DISHES;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Offline adapter: hands out the quick-add dishes in turn, wrapping around.
#[derive(Debug, Default)]
pub struct PresetSuggester {
    next: AtomicUsize,
}

impl PresetSuggester {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SuggestionAdapter for PresetSuggester {
    fn name(&self) -> &'static str {
        "preset"
    }

    async fn suggest(&self) -> Result<String, SuggestionError> {
        let index = self.next.fetch_add(1, Ordering::Relaxed) % PRESET_DISHES.len();
        Ok(PRESET_DISHES[index].to_string())
    }
}
