//! Authored preset templates.
//!
//! Values here are the "1.0x" reference: orbital offsets are authored at an
//! orbit distance of 100, wobble keyframes at an intensity of 1, and every
//! container's `staggerChildren`/`delayChildren` and every spring triple match
//! the preset's compiled-in default parameters, so resolving with defaults is
//! a fixed point.

use crate::preset::{
    id::PresetId,
    model::{
        AnimationPreset, Ease, LayerDescriptor, LayerSet, LayerState, NamedEase, PropertyValue,
        TransitionSpec,
    },
};

const EASE_OUT: Ease = Ease::Named(NamedEase::EaseOut);
const EASE_IN_OUT: Ease = Ease::Named(NamedEase::EaseInOut);
const LINEAR: Ease = Ease::Named(NamedEase::Linear);
const BACK_OVERSHOOT: Ease = Ease::CubicBezier([0.34, 1.56, 0.64, 1.0]);
const EXPO_OUT: Ease = Ease::CubicBezier([0.22, 1.0, 0.36, 1.0]);
const SILK: Ease = Ease::CubicBezier([0.25, 0.1, 0.25, 1.0]);

/// All built-in presets in catalog order.
pub(crate) fn builtin_presets() -> Vec<AnimationPreset> {
    PresetId::ALL.into_iter().map(builtin_preset).collect()
}

pub(crate) fn builtin_preset(id: PresetId) -> AnimationPreset {
    let (name, description, layers) = match id {
        PresetId::StaggerInview => (
            "Stagger In-View",
            "Layers fade up one after another as the dialog enters.",
            stagger_inview(),
        ),
        PresetId::ScaleRotate => (
            "Scale & Rotate",
            "Layers grow from a tilted, shrunken pose with a slight overshoot.",
            scale_rotate(),
        ),
        PresetId::FlipReveal => (
            "Flip Reveal",
            "Cards flip into view around their X and Y axes.",
            flip_reveal(),
        ),
        PresetId::SpringPhysics => (
            "Spring Physics",
            "Physically simulated springs settle every layer into place.",
            spring_physics(),
        ),
        PresetId::FadeSlide => (
            "Fade Slide",
            "Layers slide in horizontally while fading.",
            fade_slide(),
        ),
        PresetId::None => (
            "None",
            "No entrance animation; everything is shown immediately.",
            none(),
        ),
        PresetId::ElasticBounce => (
            "Elastic Bounce",
            "Rubbery scale keyframes that wobble before settling.",
            elastic_bounce(),
        ),
        PresetId::OrbitalReveal => (
            "Orbital Reveal",
            "Layers swing in from offset orbits toward the center.",
            orbital_reveal(),
        ),
        PresetId::GlitchSnap => (
            "Glitch Snap",
            "Fast flickering offsets that snap into position.",
            glitch_snap(),
        ),
        PresetId::SilkUnfold => (
            "Silk Unfold",
            "Layers unfold vertically on soft, heavy springs.",
            silk_unfold(),
        ),
        PresetId::CrystalShimmer => (
            "Crystal Shimmer",
            "A bright shimmer with a crisp scale and rotation ring.",
            crystal_shimmer(),
        ),
        PresetId::VelvetCascade => (
            "Velvet Cascade",
            "A slow, smooth cascade from above with a gentle stretch.",
            velvet_cascade(),
        ),
    };

    AnimationPreset {
        id,
        name: name.to_string(),
        description: description.to_string(),
        capabilities: id.capabilities(),
        layers,
    }
}

fn hidden() -> LayerState {
    LayerState::new().set("opacity", 0.0)
}

fn shown() -> LayerState {
    LayerState::new().set("opacity", 1.0)
}

fn kf(values: &[f64]) -> PropertyValue {
    PropertyValue::keyframes(values)
}

fn container(duration: f64, stagger_children: f64, delay_children: f64) -> LayerDescriptor {
    LayerDescriptor::new(
        hidden(),
        shown().transition(
            TransitionSpec::tween(duration).with_orchestration(stagger_children, delay_children),
        ),
    )
}

fn stagger_inview() -> LayerSet {
    LayerSet {
        container: container(0.3, 0.1, 0.2),
        layer1: LayerDescriptor::new(
            hidden().set("y", 20.0),
            shown()
                .set("y", 0.0)
                .transition(TransitionSpec::tween(0.5).with_ease(EASE_OUT)),
        ),
        layer2: LayerDescriptor::new(
            hidden().set("y", 30.0),
            shown().set("y", 0.0).transition(
                TransitionSpec::tween(0.5)
                    .with_delay(0.1)
                    .with_ease(EASE_OUT),
            ),
        ),
        layer3: LayerDescriptor::new(
            hidden().set("scale", 0.9),
            shown()
                .set("scale", 1.0)
                .transition(TransitionSpec::tween(0.4).with_delay(0.2)),
        ),
    }
}

fn scale_rotate() -> LayerSet {
    LayerSet {
        container: container(0.4, 0.12, 0.1),
        layer1: LayerDescriptor::new(
            hidden().set("scale", 0.5).set("rotate", -10.0),
            shown()
                .set("scale", 1.0)
                .set("rotate", 0.0)
                .transition(TransitionSpec::tween(0.6).with_ease(BACK_OVERSHOOT)),
        ),
        layer2: LayerDescriptor::new(
            hidden().set("scale", 0.8).set("rotate", 5.0),
            shown().set("scale", 1.0).set("rotate", 0.0).transition(
                TransitionSpec::tween(0.5)
                    .with_delay(0.1)
                    .with_ease(EASE_OUT),
            ),
        ),
        layer3: LayerDescriptor::new(
            hidden().set("scale", 0.0),
            shown().set("scale", kf(&[0.0, 1.1, 1.0])).transition(
                TransitionSpec::tween(0.5)
                    .with_delay(0.15)
                    .with_times([0.0, 0.7, 1.0]),
            ),
        ),
    }
}

fn flip_reveal() -> LayerSet {
    LayerSet {
        container: container(0.3, 0.15, 0.1),
        layer1: LayerDescriptor::new(
            hidden().set("rotateY", 90.0),
            shown()
                .set("rotateY", 0.0)
                .transition(TransitionSpec::tween(0.6).with_ease(EASE_OUT)),
        ),
        layer2: LayerDescriptor::new(
            hidden().set("rotateX", -90.0),
            shown().set("rotateX", 0.0).transition(
                TransitionSpec::tween(0.5)
                    .with_delay(0.1)
                    .with_ease(EASE_OUT),
            ),
        ),
        layer3: LayerDescriptor::new(
            hidden().set("y", 20.0),
            shown()
                .set("y", 0.0)
                .transition(TransitionSpec::tween(0.4).with_delay(0.2)),
        ),
    }
}

fn spring_physics() -> LayerSet {
    LayerSet {
        container: container(0.3, 0.08, 0.1),
        layer1: LayerDescriptor::new(
            hidden().set("scale", 0.6).set("y", 40.0),
            shown()
                .set("scale", 1.0)
                .set("y", 0.0)
                .transition(TransitionSpec::spring(200.0, 15.0, 1.2)),
        ),
        layer2: LayerDescriptor::new(
            hidden().set("y", 60.0),
            shown()
                .set("y", 0.0)
                .transition(TransitionSpec::spring(200.0, 15.0, 1.2)),
        ),
        layer3: LayerDescriptor::new(
            hidden().set("scale", 0.8),
            shown()
                .set("scale", 1.0)
                .transition(TransitionSpec::spring(200.0, 15.0, 1.2).with_delay(0.1)),
        ),
    }
}

fn fade_slide() -> LayerSet {
    LayerSet {
        container: container(0.3, 0.1, 0.0),
        layer1: LayerDescriptor::new(
            hidden().set("x", -50.0),
            shown()
                .set("x", 0.0)
                .transition(TransitionSpec::tween(0.5).with_ease(EASE_OUT)),
        ),
        layer2: LayerDescriptor::new(
            hidden().set("x", 50.0),
            shown().set("x", 0.0).transition(
                TransitionSpec::tween(0.5)
                    .with_delay(0.05)
                    .with_ease(EASE_OUT),
            ),
        ),
        layer3: LayerDescriptor::new(
            hidden().set("y", 30.0),
            shown().set("y", 0.0).transition(
                TransitionSpec::tween(0.5)
                    .with_delay(0.1)
                    .with_ease(EASE_OUT),
            ),
        ),
    }
}

fn none() -> LayerSet {
    let layer = || LayerDescriptor::new(shown(), shown().transition(TransitionSpec::tween(0.0)));
    LayerSet {
        container: layer(),
        layer1: layer(),
        layer2: layer(),
        layer3: layer(),
    }
}

fn elastic_bounce() -> LayerSet {
    LayerSet {
        container: container(0.2, 0.1, 0.05),
        layer1: LayerDescriptor::new(
            hidden().set("scale", 0.0).set("rotate", 0.0),
            shown()
                .set("scale", kf(&[0.0, 1.25, 0.85, 1.08, 0.96, 1.0]))
                .set("rotate", kf(&[0.0, -6.0, 4.0, -2.0, 1.0, 0.0]))
                .transition(
                    TransitionSpec::tween(0.9)
                        .with_ease(EASE_OUT)
                        .with_times([0.0, 0.3, 0.5, 0.7, 0.85, 1.0]),
                ),
        ),
        layer2: LayerDescriptor::new(
            hidden().set("scaleX", 0.0).set("scaleY", 0.0),
            shown()
                .set("scaleX", kf(&[0.0, 1.2, 0.9, 1.05, 1.0]))
                .set("scaleY", kf(&[0.0, 0.8, 1.1, 0.95, 1.0]))
                .transition(
                    TransitionSpec::tween(0.8)
                        .with_delay(0.1)
                        .with_times([0.0, 0.35, 0.6, 0.8, 1.0]),
                ),
        ),
        layer3: LayerDescriptor::new(
            hidden().set("y", 40.0),
            shown()
                .set("y", 0.0)
                .transition(TransitionSpec::spring(400.0, 12.0, 0.8)),
        ),
    }
}

fn orbital_reveal() -> LayerSet {
    LayerSet {
        container: container(0.3, 0.12, 0.15),
        layer1: LayerDescriptor::new(
            hidden()
                .set("x", -100.0)
                .set("y", -100.0)
                .set("rotate", -45.0)
                .set("scale", 0.5),
            shown()
                .set("x", 0.0)
                .set("y", 0.0)
                .set("rotate", 0.0)
                .set("scale", 1.0)
                .transition(TransitionSpec::spring(120.0, 14.0, 1.0)),
        ),
        layer2: LayerDescriptor::new(
            hidden().set("x", 100.0).set("y", -60.0).set("scale", 0.5),
            shown()
                .set("x", 0.0)
                .set("y", 0.0)
                .set("scale", 1.0)
                .transition(TransitionSpec::spring(120.0, 14.0, 1.0).with_delay(0.05)),
        ),
        layer3: LayerDescriptor::new(
            hidden().set("x", 0.0).set("y", 100.0),
            shown()
                .set("x", 0.0)
                .set("y", 0.0)
                .transition(TransitionSpec::tween(0.6).with_ease(EXPO_OUT)),
        ),
    }
}

fn glitch_snap() -> LayerSet {
    LayerSet {
        container: container(0.1, 0.05, 0.0),
        layer1: LayerDescriptor::new(
            hidden().set("x", -20.0).set("skewX", 20.0),
            LayerState::new()
                .set("opacity", kf(&[0.0, 1.0, 0.3, 1.0]))
                .set("x", kf(&[-20.0, 10.0, -5.0, 0.0]))
                .set("skewX", kf(&[20.0, -10.0, 5.0, 0.0]))
                .transition(
                    TransitionSpec::tween(0.35)
                        .with_ease(LINEAR)
                        .with_times([0.0, 0.3, 0.6, 1.0]),
                ),
        ),
        layer2: LayerDescriptor::new(
            hidden()
                .set("scaleX", 1.4)
                .set("filter", PropertyValue::opaque("blur(6px)")),
            shown()
                .set("scaleX", kf(&[1.4, 0.9, 1.0]))
                .set("filter", PropertyValue::opaque("blur(0px)"))
                .transition(
                    TransitionSpec::tween(0.3)
                        .with_delay(0.05)
                        .with_times([0.0, 0.5, 1.0]),
                ),
        ),
        layer3: LayerDescriptor::new(
            hidden().set("y", -10.0),
            LayerState::new()
                .set("opacity", kf(&[0.0, 1.0, 0.5, 1.0]))
                .set("y", 0.0)
                .transition(TransitionSpec::tween(0.25).with_delay(0.1)),
        ),
    }
}

fn silk_unfold() -> LayerSet {
    LayerSet {
        container: container(0.4, 0.14, 0.2),
        layer1: LayerDescriptor::new(
            hidden().set("scaleY", 0.0).set("y", -20.0),
            shown()
                .set("scaleY", 1.0)
                .set("y", 0.0)
                .transition(TransitionSpec::spring(90.0, 18.0, 1.4)),
        ),
        layer2: LayerDescriptor::new(
            hidden().set("rotateX", -60.0).set("y", 30.0),
            shown()
                .set("rotateX", 0.0)
                .set("y", 0.0)
                .transition(TransitionSpec::spring(90.0, 18.0, 1.4).with_delay(0.08)),
        ),
        layer3: LayerDescriptor::new(
            hidden().set("filter", PropertyValue::opaque("blur(8px)")),
            shown()
                .set("filter", PropertyValue::opaque("blur(0px)"))
                .transition(TransitionSpec::tween(0.7).with_ease(SILK)),
        ),
    }
}

fn crystal_shimmer() -> LayerSet {
    LayerSet {
        container: container(0.3, 0.09, 0.1),
        layer1: LayerDescriptor::new(
            hidden().set("scale", 0.7).set("rotate", -15.0),
            LayerState::new()
                .set("opacity", kf(&[0.0, 1.0, 0.8, 1.0]))
                .set("scale", kf(&[0.7, 1.12, 0.97, 1.0]))
                .set("rotate", kf(&[-15.0, 8.0, -3.0, 0.0]))
                .transition(TransitionSpec::tween(0.8).with_times([0.0, 0.4, 0.7, 1.0])),
        ),
        layer2: LayerDescriptor::new(
            hidden().set("scaleY", 0.0),
            shown()
                .set("scaleY", kf(&[0.0, 1.15, 0.95, 1.0]))
                .transition(TransitionSpec::tween(0.6).with_delay(0.1)),
        ),
        layer3: LayerDescriptor::new(
            hidden().set("filter", PropertyValue::opaque("brightness(2)")),
            shown()
                .set("filter", PropertyValue::opaque("brightness(1)"))
                .transition(TransitionSpec::tween(0.5).with_delay(0.2)),
        ),
    }
}

fn velvet_cascade() -> LayerSet {
    LayerSet {
        container: container(0.5, 0.18, 0.25),
        layer1: LayerDescriptor::new(
            hidden().set("y", -30.0).set("scaleY", 0.6),
            shown().set("y", 0.0).set("scaleY", kf(&[0.6, 1.08, 1.0])).transition(
                TransitionSpec::tween(0.9)
                    .with_ease(EASE_IN_OUT)
                    .with_times([0.0, 0.6, 1.0]),
            ),
        ),
        layer2: LayerDescriptor::new(
            hidden().set("y", -20.0),
            shown().set("y", 0.0).transition(
                TransitionSpec::tween(0.8)
                    .with_delay(0.1)
                    .with_ease(EASE_IN_OUT),
            ),
        ),
        layer3: LayerDescriptor::new(
            hidden().set("scale", 0.95),
            shown()
                .set("scale", kf(&[0.95, 1.02, 1.0]))
                .transition(TransitionSpec::tween(0.7).with_delay(0.2)),
        ),
    }
}
