use std::fmt;
use std::str::FromStr;

use crate::foundation::error::MotionError;

/// Identifier of a built-in animation preset.
///
/// The set is closed. The wire form is the kebab-case string used by the
/// dialog props and the export envelope (`"spring-physics"`, `"none"`, ...).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum PresetId {
    StaggerInview,
    ScaleRotate,
    FlipReveal,
    SpringPhysics,
    FadeSlide,
    None,
    ElasticBounce,
    OrbitalReveal,
    GlitchSnap,
    SilkUnfold,
    CrystalShimmer,
    VelvetCascade,
}

impl PresetId {
    /// Every preset id in catalog order.
    pub const ALL: [PresetId; 12] = [
        PresetId::StaggerInview,
        PresetId::ScaleRotate,
        PresetId::FlipReveal,
        PresetId::SpringPhysics,
        PresetId::FadeSlide,
        PresetId::None,
        PresetId::ElasticBounce,
        PresetId::OrbitalReveal,
        PresetId::GlitchSnap,
        PresetId::SilkUnfold,
        PresetId::CrystalShimmer,
        PresetId::VelvetCascade,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StaggerInview => "stagger-inview",
            Self::ScaleRotate => "scale-rotate",
            Self::FlipReveal => "flip-reveal",
            Self::SpringPhysics => "spring-physics",
            Self::FadeSlide => "fade-slide",
            Self::None => "none",
            Self::ElasticBounce => "elastic-bounce",
            Self::OrbitalReveal => "orbital-reveal",
            Self::GlitchSnap => "glitch-snap",
            Self::SilkUnfold => "silk-unfold",
            Self::CrystalShimmer => "crystal-shimmer",
            Self::VelvetCascade => "velvet-cascade",
        }
    }

    /// Static capability classification for this preset.
    pub const fn capabilities(self) -> PresetCapabilities {
        match self {
            Self::None => PresetCapabilities::STATIC,
            Self::SpringPhysics | Self::SilkUnfold => PresetCapabilities {
                spring: true,
                ..PresetCapabilities::BASE
            },
            Self::ElasticBounce => PresetCapabilities {
                spring: true,
                wobble: true,
                ..PresetCapabilities::BASE
            },
            Self::OrbitalReveal => PresetCapabilities {
                spring: true,
                orbital: true,
                ..PresetCapabilities::BASE
            },
            Self::CrystalShimmer | Self::VelvetCascade => PresetCapabilities {
                wobble: true,
                ..PresetCapabilities::BASE
            },
            Self::StaggerInview
            | Self::ScaleRotate
            | Self::FlipReveal
            | Self::FadeSlide
            | Self::GlitchSnap => PresetCapabilities::BASE,
        }
    }
}

impl fmt::Display for PresetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresetId {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| MotionError::unknown_preset(s))
    }
}

/// Which parameter categories a preset accepts.
///
/// This is an allow-list: a preset that is not flagged for a category never
/// shows or applies that category's knobs, whatever its transitions contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PresetCapabilities {
    /// `false` only for the identity preset; no knob applies at all.
    pub animated: bool,
    pub spring: bool,
    pub wobble: bool,
    pub orbital: bool,
}

impl PresetCapabilities {
    pub const BASE: Self = Self {
        animated: true,
        spring: false,
        wobble: false,
        orbital: false,
    };

    pub const STATIC: Self = Self {
        animated: false,
        spring: false,
        wobble: false,
        orbital: false,
    };
}

#[cfg(test)]
#[path = "../../tests/unit/preset/id.rs"]
mod tests;
