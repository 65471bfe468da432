use indexmap::IndexMap;

use crate::{
    foundation::error::{MotionError, MotionResult},
    preset::id::{PresetCapabilities, PresetId},
};

/// Value of one animatable property inside a [`LayerState`].
///
/// On the wire this is untagged: a number, an array of numbers (keyframes), or
/// any other JSON value (e.g. a CSS filter string), which is carried opaquely.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Scalar(f64),
    Keyframes(Vec<f64>),
    Opaque(serde_json::Value),
}

impl PropertyValue {
    pub fn keyframes(values: impl Into<Vec<f64>>) -> Self {
        Self::Keyframes(values.into())
    }

    pub fn opaque(value: impl Into<serde_json::Value>) -> Self {
        Self::Opaque(value.into())
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

/// Named easing curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NamedEase {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    CircIn,
    CircOut,
    CircInOut,
    BackIn,
    BackOut,
    BackInOut,
    Anticipate,
}

/// Easing for a tween: a named curve or cubic-bezier control points `[x1, y1, x2, y2]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Ease {
    Named(NamedEase),
    CubicBezier([f64; 4]),
}

impl Ease {
    pub fn validate(&self) -> MotionResult<()> {
        match self {
            Self::Named(_) => Ok(()),
            Self::CubicBezier(p) => {
                if p.iter().any(|v| !v.is_finite()) {
                    return Err(MotionError::validation(
                        "cubic-bezier control points must be finite",
                    ));
                }
                if !(0.0..=1.0).contains(&p[0]) || !(0.0..=1.0).contains(&p[2]) {
                    return Err(MotionError::validation(
                        "cubic-bezier x control points must be within [0, 1]",
                    ));
                }
                Ok(())
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TweenTransition {
    pub duration: f64, // seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ease: Option<Ease>,
    /// Keyframe pacing, one offset in `[0, 1]` per keyframe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub times: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stagger_children: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_children: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpringTransition {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stagger_children: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_children: Option<f64>,
}

/// Transition attached to a `visible` state, tagged by `"type"`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransitionSpec {
    Tween(TweenTransition),
    Spring(SpringTransition),
}

impl TransitionSpec {
    pub fn tween(duration: f64) -> Self {
        Self::Tween(TweenTransition {
            duration,
            delay: None,
            ease: None,
            times: None,
            stagger_children: None,
            delay_children: None,
        })
    }

    pub fn spring(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self::Spring(SpringTransition {
            stiffness,
            damping,
            mass,
            delay: None,
            stagger_children: None,
            delay_children: None,
        })
    }

    pub fn delay(&self) -> Option<f64> {
        match self {
            Self::Tween(t) => t.delay,
            Self::Spring(s) => s.delay,
        }
    }

    pub fn duration(&self) -> Option<f64> {
        match self {
            Self::Tween(t) => Some(t.duration),
            Self::Spring(_) => None,
        }
    }

    pub fn stagger_children(&self) -> Option<f64> {
        match self {
            Self::Tween(t) => t.stagger_children,
            Self::Spring(s) => s.stagger_children,
        }
    }

    pub fn delay_children(&self) -> Option<f64> {
        match self {
            Self::Tween(t) => t.delay_children,
            Self::Spring(s) => s.delay_children,
        }
    }

    pub(crate) fn orchestration_mut(&mut self) -> (&mut Option<f64>, &mut Option<f64>) {
        match self {
            Self::Tween(t) => (&mut t.stagger_children, &mut t.delay_children),
            Self::Spring(s) => (&mut s.stagger_children, &mut s.delay_children),
        }
    }

    pub(crate) fn delay_mut(&mut self) -> &mut Option<f64> {
        match self {
            Self::Tween(t) => &mut t.delay,
            Self::Spring(s) => &mut s.delay,
        }
    }

    // Builder-style helpers used by the catalog.

    pub fn with_delay(mut self, delay: f64) -> Self {
        *self.delay_mut() = Some(delay);
        self
    }

    pub fn with_orchestration(mut self, stagger_children: f64, delay_children: f64) -> Self {
        let (stagger, delay) = self.orchestration_mut();
        *stagger = Some(stagger_children);
        *delay = Some(delay_children);
        self
    }

    /// Set the easing curve. No-op on spring transitions.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        if let Self::Tween(t) = &mut self {
            t.ease = Some(ease);
        }
        self
    }

    /// Set keyframe pacing. No-op on spring transitions.
    pub fn with_times(mut self, times: impl Into<Vec<f64>>) -> Self {
        if let Self::Tween(t) = &mut self {
            t.times = Some(times.into());
        }
        self
    }

    fn validate(&self, allow_orchestration: bool) -> MotionResult<()> {
        if let Some(d) = self.delay() {
            non_negative("transition.delay", d)?;
        }
        let orchestrated =
            self.stagger_children().is_some() || self.delay_children().is_some();
        if orchestrated && !allow_orchestration {
            return Err(MotionError::validation(
                "staggerChildren/delayChildren are only valid on the container layer",
            ));
        }
        if let Some(v) = self.stagger_children() {
            non_negative("transition.staggerChildren", v)?;
        }
        if let Some(v) = self.delay_children() {
            non_negative("transition.delayChildren", v)?;
        }

        match self {
            Self::Tween(t) => {
                non_negative("transition.duration", t.duration)?;
                if let Some(ease) = &t.ease {
                    ease.validate()?;
                }
                if let Some(times) = &t.times {
                    if times.is_empty() {
                        return Err(MotionError::validation("transition.times must be non-empty"));
                    }
                    if times.iter().any(|v| !(0.0..=1.0).contains(v)) {
                        return Err(MotionError::validation(
                            "transition.times values must be within [0, 1]",
                        ));
                    }
                    if !times.windows(2).all(|w| w[0] <= w[1]) {
                        return Err(MotionError::validation(
                            "transition.times must be non-decreasing",
                        ));
                    }
                }
                Ok(())
            }
            Self::Spring(s) => {
                for (name, v) in [
                    ("stiffness", s.stiffness),
                    ("damping", s.damping),
                    ("mass", s.mass),
                ] {
                    if !(v.is_finite() && v > 0.0) {
                        return Err(MotionError::validation(format!(
                            "spring {name} must be finite and > 0"
                        )));
                    }
                }
                Ok(())
            }
        }
    }
}

/// One animation state (`hidden` or `visible`) of a layer.
///
/// Property names are the animatable properties the rendering layer knows
/// (`opacity`, `scale`, `x`, `rotate`, `filter`, ...). An omitted property is unset.
/// Properties keep their authored order through resolution and serialization.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerState {
    #[serde(flatten)]
    pub properties: IndexMap<String, PropertyValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<TransitionSpec>,
}

impl LayerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn transition(mut self, transition: TransitionSpec) -> Self {
        self.transition = Some(transition);
        self
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }
}

/// Both states of one layer.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayerDescriptor {
    pub hidden: LayerState,
    pub visible: LayerState,
}

impl LayerDescriptor {
    pub fn new(hidden: LayerState, visible: LayerState) -> Self {
        Self { hidden, visible }
    }

    fn validate(&self, layer: LayerKey) -> MotionResult<()> {
        let ctx = |e: MotionError| match e {
            MotionError::Validation(msg) => {
                MotionError::validation(format!("{}: {msg}", layer.as_str()))
            }
            other => other,
        };

        if self.hidden.transition.is_some() {
            return Err(ctx(MotionError::validation(
                "hidden state must not carry a transition",
            )));
        }
        for state in [&self.hidden, &self.visible] {
            for (name, value) in &state.properties {
                if let PropertyValue::Keyframes(frames) = value {
                    if frames.is_empty() {
                        return Err(ctx(MotionError::validation(format!(
                            "keyframes for '{name}' must be non-empty"
                        ))));
                    }
                    if frames.iter().any(|v| !v.is_finite()) {
                        return Err(ctx(MotionError::validation(format!(
                            "keyframes for '{name}' must be finite"
                        ))));
                    }
                }
            }
        }
        if let Some(t) = &self.visible.transition {
            t.validate(layer == LayerKey::Container).map_err(ctx)?;
        }
        Ok(())
    }
}

/// The four independently staggered layers of a dialog entrance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LayerKey {
    /// Drives stagger timing for its children.
    Container,
    Layer1,
    Layer2,
    Layer3,
}

impl LayerKey {
    pub const ALL: [LayerKey; 4] = [
        LayerKey::Container,
        LayerKey::Layer1,
        LayerKey::Layer2,
        LayerKey::Layer3,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Container => "container",
            Self::Layer1 => "layer1",
            Self::Layer2 => "layer2",
            Self::Layer3 => "layer3",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerSet {
    #[serde(rename = "containerVariants")]
    pub container: LayerDescriptor,
    #[serde(rename = "layer1Variants")]
    pub layer1: LayerDescriptor,
    #[serde(rename = "layer2Variants")]
    pub layer2: LayerDescriptor,
    #[serde(rename = "layer3Variants")]
    pub layer3: LayerDescriptor,
}

impl LayerSet {
    pub fn get(&self, key: LayerKey) -> &LayerDescriptor {
        match key {
            LayerKey::Container => &self.container,
            LayerKey::Layer1 => &self.layer1,
            LayerKey::Layer2 => &self.layer2,
            LayerKey::Layer3 => &self.layer3,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (LayerKey, &LayerDescriptor)> {
        [
            (LayerKey::Container, &self.container),
            (LayerKey::Layer1, &self.layer1),
            (LayerKey::Layer2, &self.layer2),
            (LayerKey::Layer3, &self.layer3),
        ]
        .into_iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (LayerKey, &mut LayerDescriptor)> {
        [
            (LayerKey::Container, &mut self.container),
            (LayerKey::Layer1, &mut self.layer1),
            (LayerKey::Layer2, &mut self.layer2),
            (LayerKey::Layer3, &mut self.layer3),
        ]
        .into_iter()
    }
}

/// Immutable, named animation template.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationPreset {
    pub id: PresetId,
    pub name: String,
    pub description: String,
    pub capabilities: PresetCapabilities,
    #[serde(flatten)]
    pub layers: LayerSet,
}

impl AnimationPreset {
    pub fn validate(&self) -> MotionResult<()> {
        if self.name.trim().is_empty() {
            return Err(MotionError::validation(format!(
                "preset '{}' must have a name",
                self.id
            )));
        }
        if self.capabilities != self.id.capabilities() {
            return Err(MotionError::validation(format!(
                "preset '{}' capabilities do not match its id",
                self.id
            )));
        }
        for (key, layer) in self.layers.iter() {
            layer.validate(key).map_err(|e| match e {
                MotionError::Validation(msg) => {
                    MotionError::validation(format!("preset '{}' {msg}", self.id))
                }
                other => other,
            })?;
        }
        Ok(())
    }
}

fn non_negative(what: &str, v: f64) -> MotionResult<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(MotionError::validation(format!(
            "{what} must be finite and >= 0"
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/preset/model.rs"]
mod tests;
