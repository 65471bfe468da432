use std::collections::HashSet;

use crate::{
    foundation::error::{MotionError, MotionResult},
    preset::{catalog::builtin_presets, id::PresetId, model::AnimationPreset},
};

/// Catalog of animation presets, looked up by id.
///
/// Entries are shared read-only templates; resolution always works on a copy.
#[derive(Clone, Debug)]
pub struct PresetRegistry {
    presets: Vec<AnimationPreset>,
}

impl PresetRegistry {
    /// The compiled-in catalog, in [`PresetId::ALL`] order.
    pub fn builtin() -> Self {
        Self {
            presets: builtin_presets(),
        }
    }

    /// Build a registry from explicit presets, validating each one.
    ///
    /// Insertion order is kept for [`Self::list_preset_ids`].
    pub fn from_presets(presets: Vec<AnimationPreset>) -> MotionResult<Self> {
        let mut seen = HashSet::new();
        for preset in &presets {
            preset.validate()?;
            if !seen.insert(preset.id) {
                return Err(MotionError::validation(format!(
                    "duplicate preset id '{}'",
                    preset.id
                )));
            }
        }
        Ok(Self { presets })
    }

    /// Look up a preset by its wire id.
    pub fn get(&self, id: &str) -> MotionResult<&AnimationPreset> {
        let id: PresetId = id.parse()?;
        self.preset(id)
    }

    pub fn preset(&self, id: PresetId) -> MotionResult<&AnimationPreset> {
        self.presets
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| MotionError::unknown_preset(id.as_str()))
    }

    pub fn list_preset_ids(&self) -> Vec<&'static str> {
        self.presets.iter().map(|p| p.id.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnimationPreset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/preset/registry.rs"]
mod tests;
