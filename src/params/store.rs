use std::collections::BTreeMap;

use crate::{
    codec::envelope::{ImportedParameters, ParameterEnvelope, export_parameters},
    foundation::error::MotionResult,
    params::model::{
        BaseParam, OrbitalParams, ParamKey, ParameterSet, SpringField, SpringParams,
        WobbleParams,
    },
    preset::id::PresetId,
};

/// Current parameter values for every preset.
///
/// Constructed once at startup and handed to whoever drives the form. All
/// mutation goes through `&mut self`, so updates apply in call order and the
/// last write to a field wins. Values are stored as given; range clamping is
/// the form's job (see [`crate::SliderConfig::clamp`]).
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterStore {
    params: BTreeMap<PresetId, ParameterSet>,
}

impl ParameterStore {
    /// A store holding a fresh copy of every preset's defaults.
    pub fn new() -> Self {
        Self {
            params: PresetId::ALL
                .into_iter()
                .map(|id| (id, ParameterSet::defaults_for(id)))
                .collect(),
        }
    }

    /// Current parameters for `id`, or its defaults when no entry exists.
    pub fn get_parameters(&self, id: PresetId) -> ParameterSet {
        self.params
            .get(&id)
            .cloned()
            .unwrap_or_else(|| ParameterSet::defaults_for(id))
    }

    pub fn update_parameter(&mut self, id: PresetId, key: BaseParam, value: f64) {
        tracing::trace!(preset = %id, ?key, value, "update parameter");
        self.entry(id).set_base(key, value);
    }

    /// Set one spring field, materializing the spring group from its
    /// category default if the preset has none yet.
    pub fn update_spring_parameter(&mut self, id: PresetId, field: SpringField, value: f64) {
        tracing::trace!(preset = %id, ?field, value, "update spring parameter");
        let spring = self.entry(id).spring.get_or_insert_with(SpringParams::default);
        field.set(spring, value);
    }

    pub fn update_wobble_parameter(&mut self, id: PresetId, wobble_intensity: f64) {
        tracing::trace!(preset = %id, wobble_intensity, "update wobble parameter");
        self.entry(id)
            .wobble
            .get_or_insert_with(WobbleParams::default)
            .wobble_intensity = wobble_intensity;
    }

    pub fn update_orbital_parameter(&mut self, id: PresetId, orbit_distance: f64) {
        tracing::trace!(preset = %id, orbit_distance, "update orbital parameter");
        self.entry(id)
            .orbital
            .get_or_insert_with(OrbitalParams::default)
            .orbit_distance = orbit_distance;
    }

    /// Route a slider change to the matching typed update.
    pub fn update(&mut self, id: PresetId, key: ParamKey, value: f64) {
        match key {
            ParamKey::Base(k) => self.update_parameter(id, k, value),
            ParamKey::Spring(f) => self.update_spring_parameter(id, f, value),
            ParamKey::WobbleIntensity => self.update_wobble_parameter(id, value),
            ParamKey::OrbitDistance => self.update_orbital_parameter(id, value),
        }
    }

    pub fn reset_to_defaults(&mut self, id: PresetId) {
        tracing::debug!(preset = %id, "reset parameters to defaults");
        self.params.insert(id, ParameterSet::defaults_for(id));
    }

    pub fn get_all_parameters(&self) -> BTreeMap<PresetId, ParameterSet> {
        self.params.clone()
    }

    /// Replace the whole map. Entries are taken as-is; presets missing from
    /// `all` fall back to defaults on read.
    pub fn set_all_parameters(&mut self, all: BTreeMap<PresetId, ParameterSet>) {
        tracing::debug!(presets = all.len(), "replace all parameters");
        self.params = all;
    }

    pub fn export(&self, id: PresetId) -> ParameterEnvelope {
        export_parameters(id, &self.get_parameters(id))
    }

    /// Merge an imported envelope into the entry for its `animationType`.
    ///
    /// Returns the preset the caller should make active.
    pub fn apply_import(&mut self, imported: &ImportedParameters) -> MotionResult<PresetId> {
        let id = imported.target_preset()?;
        tracing::debug!(preset = %id, "apply imported parameters");
        imported.parameters.apply_to(self.entry(id));
        Ok(id)
    }

    fn entry(&mut self, id: PresetId) -> &mut ParameterSet {
        self.params
            .entry(id)
            .or_insert_with(|| ParameterSet::defaults_for(id))
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/store.rs"]
mod tests;
