use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::Level;
use crate::render::CellRenderModel;

/// Runtime metrics exposed by the in-engine cell model cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CellModelCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

/// A cached model is only valid for the level and interval set it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) struct CellModelCacheKey {
    pub(super) row: usize,
    pub(super) level: Level,
    pub(super) intervals_generation: u64,
}

#[derive(Debug, Default)]
pub(super) struct CellModelCache {
    entries: HashMap<CellModelCacheKey, CellRenderModel>,
    hits: u64,
    misses: u64,
}

impl CellModelCache {
    // one full day at the finest level, plus padding
    const MAX_ENTRIES: usize = 2048;

    pub(super) fn get(&mut self, key: CellModelCacheKey) -> Option<CellRenderModel> {
        let value = self.entries.get(&key).cloned();
        if value.is_some() {
            self.hits = self.hits.saturating_add(1);
        }
        value
    }

    pub(super) fn insert(&mut self, key: CellModelCacheKey, value: CellRenderModel) {
        self.misses = self.misses.saturating_add(1);
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.clear();
        }
        self.entries.insert(key, value);
    }

    pub(super) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(super) fn stats(&self) -> CellModelCacheStats {
        CellModelCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
        }
    }
}
