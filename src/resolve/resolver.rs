use crate::{
    codec::json::to_normalized_value,
    foundation::error::{MotionError, MotionResult},
    params::model::{ParameterSet, SpringParams},
    preset::{
        id::PresetId,
        model::{AnimationPreset, LayerDescriptor, LayerKey, LayerSet, PropertyValue, TransitionSpec},
        registry::PresetRegistry,
    },
};

/// A preset with every tunable number recalculated for one parameter set.
///
/// Structurally identical to the template's layers. Built per render and
/// discarded; see [`crate::ResolveCache`] for memoization.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ResolvedDescriptor {
    #[serde(skip)]
    pub preset: PresetId,
    #[serde(flatten)]
    pub layers: LayerSet,
}

impl ResolvedDescriptor {
    pub fn layer(&self, key: LayerKey) -> &LayerDescriptor {
        self.layers.get(key)
    }

    /// Variants JSON for the rendering layer (`containerVariants`, `layer1Variants`, ...).
    pub fn to_json_value(&self) -> MotionResult<serde_json::Value> {
        to_normalized_value(self)
            .map_err(|e| MotionError::serde(format!("encode resolved descriptor: {e}")))
    }
}

/// Knobs that apply to this preset after capability gating.
#[derive(Clone, Copy, Debug)]
struct Knobs {
    duration_scale: f64,
    delay_offset: f64,
    stagger_children: f64,
    delay_children: f64,
    spring: Option<SpringParams>,
    wobble_intensity: Option<f64>,
    orbit_factor: Option<f64>,
}

impl Knobs {
    fn gated(preset: &AnimationPreset, params: &ParameterSet) -> Self {
        let caps = preset.capabilities;
        Self {
            duration_scale: params.duration_scale,
            delay_offset: params.delay_offset,
            stagger_children: params.stagger_children,
            delay_children: params.delay_children,
            spring: params.spring.filter(|_| caps.spring),
            wobble_intensity: params
                .wobble
                .filter(|_| caps.wobble)
                .map(|w| w.wobble_intensity),
            // Authored offsets correspond to a distance of 100.
            orbit_factor: params
                .orbital
                .filter(|_| caps.orbital)
                .map(|o| o.orbit_distance / 100.0),
        }
    }
}

/// Combine a preset template with parameters into a render-ready descriptor.
///
/// Works on a copy; `preset` is never modified. Parameter groups the preset is
/// not flagged for are ignored, and the identity preset comes back unchanged.
#[tracing::instrument(skip_all, fields(preset = %preset.id))]
pub fn resolve(preset: &AnimationPreset, params: &ParameterSet) -> ResolvedDescriptor {
    let mut layers = preset.layers.clone();

    if !preset.capabilities.animated {
        tracing::debug!("static preset, parameters ignored");
        return ResolvedDescriptor {
            preset: preset.id,
            layers,
        };
    }

    let knobs = Knobs::gated(preset, params);
    for (key, layer) in layers.iter_mut() {
        for state in [&mut layer.hidden, &mut layer.visible] {
            for (name, value) in state.properties.iter_mut() {
                rescale_property(name, value, &knobs);
            }
        }
        if let Some(transition) = layer.visible.transition.as_mut() {
            retime_transition(key, transition, &knobs);
        }
    }

    ResolvedDescriptor {
        preset: preset.id,
        layers,
    }
}

/// Look up `id` in `registry` and resolve it.
pub fn resolve_by_id(
    registry: &PresetRegistry,
    id: &str,
    params: &ParameterSet,
) -> MotionResult<ResolvedDescriptor> {
    Ok(resolve(registry.get(id)?, params))
}

// Rules are keyed by property name; an array under any other name (or an
// easing curve, which lives on the transition) passes through untouched.
fn rescale_property(name: &str, value: &mut PropertyValue, knobs: &Knobs) {
    match (name, value) {
        ("scale" | "scaleX", PropertyValue::Keyframes(frames)) => {
            if let Some(k) = knobs.wobble_intensity {
                scale_deviation(frames, k, &[0.0]);
            }
        }
        ("scaleY", PropertyValue::Keyframes(frames)) => {
            if let Some(k) = knobs.wobble_intensity {
                scale_deviation(frames, k, &[0.0, 1.0]);
            }
        }
        ("rotate", PropertyValue::Keyframes(frames)) => {
            if let Some(k) = knobs.wobble_intensity {
                frames.iter_mut().for_each(|v| *v *= k);
            }
        }
        ("x" | "y", PropertyValue::Scalar(v)) => {
            if let Some(f) = knobs.orbit_factor
                && *v != 0.0
            {
                *v *= f;
            }
        }
        _ => {}
    }
}

/// Scale each keyframe's deviation from 1 by `k`, leaving anchor values alone.
fn scale_deviation(frames: &mut [f64], k: f64, anchors: &[f64]) {
    for v in frames.iter_mut() {
        if anchors.contains(v) {
            continue;
        }
        *v = 1.0 + (*v - 1.0) * k;
    }
}

fn retime_transition(layer: LayerKey, transition: &mut TransitionSpec, knobs: &Knobs) {
    if layer == LayerKey::Container {
        let (stagger, delay) = transition.orchestration_mut();
        if let Some(v) = stagger.as_mut() {
            *v = knobs.stagger_children;
        }
        if let Some(v) = delay.as_mut() {
            *v = knobs.delay_children;
        }
    }

    if let Some(d) = transition.delay_mut().as_mut() {
        *d = (*d + knobs.delay_offset).max(0.0);
    }

    match transition {
        TransitionSpec::Tween(t) => t.duration *= knobs.duration_scale,
        TransitionSpec::Spring(s) => {
            if let Some(spring) = knobs.spring {
                s.stiffness = spring.stiffness;
                s.damping = spring.damping;
                s.mass = spring.mass;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/resolver.rs"]
mod tests;
