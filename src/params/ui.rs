use crate::{
    params::model::{BaseParam, ParamKey, SpringField},
    preset::id::PresetId,
};

/// Slider group shown in the parameter form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParamCategory {
    Base,
    Spring,
    Wobble,
    Orbital,
}

/// Metadata for one slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderConfig {
    pub key: ParamKey,
    pub label: &'static str,
    pub description: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default_value: f64,
}

impl SliderConfig {
    /// Clamp a raw slider value into `[min, max]`. The store itself never clamps.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

const BASE_SLIDERS: [SliderConfig; 4] = [
    SliderConfig {
        key: ParamKey::Base(BaseParam::DurationScale),
        label: "Duration Scale",
        description: "Multiplier applied to every transition duration",
        min: 0.1,
        max: 3.0,
        step: 0.1,
        default_value: 1.0,
    },
    SliderConfig {
        key: ParamKey::Base(BaseParam::DelayOffset),
        label: "Delay Offset",
        description: "Seconds added to every transition delay",
        min: -0.5,
        max: 1.0,
        step: 0.05,
        default_value: 0.0,
    },
    SliderConfig {
        key: ParamKey::Base(BaseParam::StaggerChildren),
        label: "Stagger Interval",
        description: "Seconds between consecutive layers entering",
        min: 0.0,
        max: 0.5,
        step: 0.01,
        default_value: 0.1,
    },
    SliderConfig {
        key: ParamKey::Base(BaseParam::DelayChildren),
        label: "Initial Delay",
        description: "Seconds before the first layer starts",
        min: 0.0,
        max: 1.0,
        step: 0.05,
        default_value: 0.2,
    },
];

const SPRING_SLIDERS: [SliderConfig; 3] = [
    SliderConfig {
        key: ParamKey::Spring(SpringField::Stiffness),
        label: "Stiffness",
        description: "Spring tension; higher snaps faster",
        min: 10.0,
        max: 1000.0,
        step: 10.0,
        default_value: 200.0,
    },
    SliderConfig {
        key: ParamKey::Spring(SpringField::Damping),
        label: "Damping",
        description: "Opposing force; lower oscillates longer",
        min: 1.0,
        max: 100.0,
        step: 1.0,
        default_value: 15.0,
    },
    SliderConfig {
        key: ParamKey::Spring(SpringField::Mass),
        label: "Mass",
        description: "Weight of the moving element",
        min: 0.1,
        max: 5.0,
        step: 0.1,
        default_value: 1.0,
    },
];

const WOBBLE_SLIDERS: [SliderConfig; 1] = [SliderConfig {
    key: ParamKey::WobbleIntensity,
    label: "Wobble Intensity",
    description: "Scales keyframe overshoot; 0 removes it, 1 is authored",
    min: 0.0,
    max: 3.0,
    step: 0.1,
    default_value: 1.0,
}];

const ORBITAL_SLIDERS: [SliderConfig; 1] = [SliderConfig {
    key: ParamKey::OrbitDistance,
    label: "Orbit Distance",
    description: "Start offset distance; 100 is authored",
    min: 0.0,
    max: 300.0,
    step: 10.0,
    default_value: 100.0,
}];

/// Sliders for `category`, in display order.
pub fn ui_config(category: ParamCategory) -> &'static [SliderConfig] {
    match category {
        ParamCategory::Base => &BASE_SLIDERS,
        ParamCategory::Spring => &SPRING_SLIDERS,
        ParamCategory::Wobble => &WOBBLE_SLIDERS,
        ParamCategory::Orbital => &ORBITAL_SLIDERS,
    }
}

/// Slider categories the form shows for `id`; empty for the identity preset.
pub fn categories_for(id: PresetId) -> Vec<ParamCategory> {
    let caps = id.capabilities();
    if !caps.animated {
        return Vec::new();
    }

    let mut out = vec![ParamCategory::Base];
    if caps.spring {
        out.push(ParamCategory::Spring);
    }
    if caps.wobble {
        out.push(ParamCategory::Wobble);
    }
    if caps.orbital {
        out.push(ParamCategory::Orbital);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/params/ui.rs"]
mod tests;
