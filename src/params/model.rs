use std::fmt;
use std::str::FromStr;

use crate::{
    foundation::error::{MotionError, MotionResult},
    preset::id::PresetId,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringParams {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: 200.0,
            damping: 15.0,
            mass: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WobbleParams {
    /// Multiplier on each keyframe's deviation from unit scale; 1 is a no-op.
    pub wobble_intensity: f64,
}

impl Default for WobbleParams {
    fn default() -> Self {
        Self {
            wobble_intensity: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitalParams {
    /// Positional scale where 100 is the authored distance.
    pub orbit_distance: f64,
}

impl Default for OrbitalParams {
    fn default() -> Self {
        Self {
            orbit_distance: 100.0,
        }
    }
}

/// User-tunable overrides applied on top of a preset's authored values.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSet {
    pub duration_scale: f64,
    /// Added to every delay; the result is clamped at 0.
    pub delay_offset: f64,
    pub stagger_children: f64,
    pub delay_children: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spring: Option<SpringParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wobble: Option<WobbleParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbital: Option<OrbitalParams>,
}

impl ParameterSet {
    /// Base knobs only: unit duration scale, no delay offset.
    pub fn base(stagger_children: f64, delay_children: f64) -> Self {
        Self {
            duration_scale: 1.0,
            delay_offset: 0.0,
            stagger_children,
            delay_children,
            spring: None,
            wobble: None,
            orbital: None,
        }
    }

    /// Compiled-in defaults for `id`.
    ///
    /// Base stagger values and spring triples mirror the authored catalog so
    /// that resolving a preset with its defaults leaves it unchanged.
    pub fn defaults_for(id: PresetId) -> Self {
        match id {
            PresetId::StaggerInview => Self::base(0.1, 0.2),
            PresetId::ScaleRotate => Self::base(0.12, 0.1),
            PresetId::FlipReveal => Self::base(0.15, 0.1),
            PresetId::SpringPhysics => Self {
                spring: Some(SpringParams {
                    stiffness: 200.0,
                    damping: 15.0,
                    mass: 1.2,
                }),
                ..Self::base(0.08, 0.1)
            },
            PresetId::FadeSlide => Self::base(0.1, 0.0),
            PresetId::None => Self::base(0.0, 0.0),
            PresetId::ElasticBounce => Self {
                spring: Some(SpringParams {
                    stiffness: 400.0,
                    damping: 12.0,
                    mass: 0.8,
                }),
                wobble: Some(WobbleParams::default()),
                ..Self::base(0.1, 0.05)
            },
            PresetId::OrbitalReveal => Self {
                spring: Some(SpringParams {
                    stiffness: 120.0,
                    damping: 14.0,
                    mass: 1.0,
                }),
                orbital: Some(OrbitalParams::default()),
                ..Self::base(0.12, 0.15)
            },
            PresetId::GlitchSnap => Self::base(0.05, 0.0),
            PresetId::SilkUnfold => Self {
                spring: Some(SpringParams {
                    stiffness: 90.0,
                    damping: 18.0,
                    mass: 1.4,
                }),
                ..Self::base(0.14, 0.2)
            },
            PresetId::CrystalShimmer => Self {
                wobble: Some(WobbleParams::default()),
                ..Self::base(0.09, 0.1)
            },
            PresetId::VelvetCascade => Self {
                wobble: Some(WobbleParams::default()),
                ..Self::base(0.18, 0.25)
            },
        }
    }

    /// Current value of a knob, `None` when its nested group is absent.
    pub fn value(&self, key: ParamKey) -> Option<f64> {
        match key {
            ParamKey::Base(BaseParam::DurationScale) => Some(self.duration_scale),
            ParamKey::Base(BaseParam::DelayOffset) => Some(self.delay_offset),
            ParamKey::Base(BaseParam::StaggerChildren) => Some(self.stagger_children),
            ParamKey::Base(BaseParam::DelayChildren) => Some(self.delay_children),
            ParamKey::Spring(field) => self.spring.map(|s| field.get(&s)),
            ParamKey::WobbleIntensity => self.wobble.map(|w| w.wobble_intensity),
            ParamKey::OrbitDistance => self.orbital.map(|o| o.orbit_distance),
        }
    }

    pub(crate) fn set_base(&mut self, key: BaseParam, value: f64) {
        match key {
            BaseParam::DurationScale => self.duration_scale = value,
            BaseParam::DelayOffset => self.delay_offset = value,
            BaseParam::StaggerChildren => self.stagger_children = value,
            BaseParam::DelayChildren => self.delay_children = value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BaseParam {
    DurationScale,
    DelayOffset,
    StaggerChildren,
    DelayChildren,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpringField {
    Stiffness,
    Damping,
    Mass,
}

impl SpringField {
    pub fn get(self, spring: &SpringParams) -> f64 {
        match self {
            Self::Stiffness => spring.stiffness,
            Self::Damping => spring.damping,
            Self::Mass => spring.mass,
        }
    }

    pub fn set(self, spring: &mut SpringParams, value: f64) {
        match self {
            Self::Stiffness => spring.stiffness = value,
            Self::Damping => spring.damping = value,
            Self::Mass => spring.mass = value,
        }
    }
}

/// Any single tunable knob, addressed by its wire key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamKey {
    Base(BaseParam),
    Spring(SpringField),
    WobbleIntensity,
    OrbitDistance,
}

impl ParamKey {
    pub const ALL: [ParamKey; 9] = [
        ParamKey::Base(BaseParam::DurationScale),
        ParamKey::Base(BaseParam::DelayOffset),
        ParamKey::Base(BaseParam::StaggerChildren),
        ParamKey::Base(BaseParam::DelayChildren),
        ParamKey::Spring(SpringField::Stiffness),
        ParamKey::Spring(SpringField::Damping),
        ParamKey::Spring(SpringField::Mass),
        ParamKey::WobbleIntensity,
        ParamKey::OrbitDistance,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Base(BaseParam::DurationScale) => "durationScale",
            Self::Base(BaseParam::DelayOffset) => "delayOffset",
            Self::Base(BaseParam::StaggerChildren) => "staggerChildren",
            Self::Base(BaseParam::DelayChildren) => "delayChildren",
            Self::Spring(SpringField::Stiffness) => "stiffness",
            Self::Spring(SpringField::Damping) => "damping",
            Self::Spring(SpringField::Mass) => "mass",
            Self::WobbleIntensity => "wobbleIntensity",
            Self::OrbitDistance => "orbitDistance",
        }
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamKey {
    type Err = MotionError;

    fn from_str(s: &str) -> MotionResult<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| MotionError::validation(format!("unknown parameter key '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/model.rs"]
mod tests;
