use crate::{
    params::model::ParameterSet,
    preset::{id::PresetId, model::AnimationPreset},
    resolve::resolver::{ResolvedDescriptor, resolve},
};

#[derive(Clone, Debug)]
struct CacheEntry {
    preset: PresetId,
    params: ParameterSet,
    resolved: ResolvedDescriptor,
}

/// Remembers the last `(preset id, parameters)` resolution.
///
/// Re-renders with unchanged inputs reuse the previous descriptor. Keyed by
/// preset id, so use one cache per registry.
#[derive(Clone, Debug, Default)]
pub struct ResolveCache {
    entry: Option<CacheEntry>,
    hits: u64,
    misses: u64,
}

impl ResolveCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, preset: &AnimationPreset, params: &ParameterSet) -> &ResolvedDescriptor {
        let hit = matches!(
            &self.entry,
            Some(e) if e.preset == preset.id && e.params == *params
        );

        if hit {
            self.hits += 1;
            tracing::trace!(preset = %preset.id, "resolve cache hit");
        } else {
            self.misses += 1;
            tracing::trace!(preset = %preset.id, "resolve cache miss");
            self.entry = None;
        }

        let entry = self.entry.get_or_insert_with(|| CacheEntry {
            preset: preset.id,
            params: params.clone(),
            resolved: resolve(preset, params),
        });
        &entry.resolved
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/cache.rs"]
mod tests;
