use super::*;
use crate::params::model::{OrbitalParams, WobbleParams};
use crate::preset::id::PresetCapabilities;
use crate::preset::model::{Ease, LayerState};

fn kf(v: &[f64]) -> PropertyValue {
    PropertyValue::keyframes(v)
}

fn wobbly_preset() -> AnimationPreset {
    AnimationPreset {
        id: PresetId::ElasticBounce,
        name: "wobbly".to_string(),
        description: String::new(),
        capabilities: PresetId::ElasticBounce.capabilities(),
        layers: LayerSet {
            container: LayerDescriptor::new(
                LayerState::new().set("opacity", 0.0),
                LayerState::new()
                    .set("opacity", 1.0)
                    .transition(TransitionSpec::tween(0.2).with_orchestration(0.1, 0.05)),
            ),
            layer1: LayerDescriptor::new(
                LayerState::new().set("scale", 0.0),
                LayerState::new()
                    .set("scale", kf(&[0.0, 1.2, 0.9, 1.0]))
                    .set("scaleX", kf(&[0.0, 1.4, 1.0]))
                    .set("scaleY", kf(&[0.0, 0.6, 1.0, 1.3]))
                    .set("rotate", kf(&[-10.0, 6.0, 0.0]))
                    .set("skewX", kf(&[4.0, 0.5]))
                    .transition(
                        TransitionSpec::tween(0.8)
                            .with_delay(0.1)
                            .with_ease(Ease::CubicBezier([0.34, 1.56, 0.64, 1.0])),
                    ),
            ),
            layer2: LayerDescriptor::new(
                LayerState::new().set("x", -80.0).set("y", 0.0),
                LayerState::new()
                    .set("x", 0.0)
                    .set("y", 0.0)
                    .transition(TransitionSpec::spring(400.0, 12.0, 0.8)),
            ),
            layer3: LayerDescriptor::default(),
        },
    }
}

fn params() -> ParameterSet {
    ParameterSet::defaults_for(PresetId::ElasticBounce)
}

fn frames<'a>(r: &'a ResolvedDescriptor, key: LayerKey, name: &str) -> &'a [f64] {
    match r.layer(key).visible.get(name) {
        Some(PropertyValue::Keyframes(f)) => f.as_slice(),
        other => panic!("expected keyframes for {name}, got {other:?}"),
    }
}

#[test]
fn wobble_scales_deviation_from_unit() {
    let mut p = params();
    p.wobble = Some(WobbleParams {
        wobble_intensity: 2.0,
    });
    let r = resolve(&wobbly_preset(), &p);

    let scale = frames(&r, LayerKey::Layer1, "scale");
    assert_eq!(scale[0], 0.0);
    assert!((scale[1] - 1.4).abs() < 1e-12);
    assert!((scale[2] - 0.8).abs() < 1e-12);
    assert_eq!(scale[3], 1.0);

    let scale_x = frames(&r, LayerKey::Layer1, "scaleX");
    assert_eq!(scale_x[0], 0.0);
    assert!((scale_x[1] - 1.8).abs() < 1e-12);
}

#[test]
fn scale_y_protects_zero_and_one() {
    let mut p = params();
    p.wobble = Some(WobbleParams {
        wobble_intensity: 0.5,
    });
    let r = resolve(&wobbly_preset(), &p);
    let scale_y = frames(&r, LayerKey::Layer1, "scaleY");
    assert_eq!(scale_y[0], 0.0);
    assert!((scale_y[1] - 0.8).abs() < 1e-12);
    assert_eq!(scale_y[2], 1.0);
    assert!((scale_y[3] - 1.15).abs() < 1e-12);
}

#[test]
fn rotate_scales_about_zero() {
    let mut p = params();
    p.wobble = Some(WobbleParams {
        wobble_intensity: 0.5,
    });
    let r = resolve(&wobbly_preset(), &p);
    assert_eq!(frames(&r, LayerKey::Layer1, "rotate"), &[-5.0, 3.0, 0.0]);
}

#[test]
fn unrelated_arrays_pass_through() {
    let mut p = params();
    p.wobble = Some(WobbleParams {
        wobble_intensity: 3.0,
    });
    let r = resolve(&wobbly_preset(), &p);
    assert_eq!(frames(&r, LayerKey::Layer1, "skewX"), &[4.0, 0.5]);

    let TransitionSpec::Tween(t) = r.layer(LayerKey::Layer1).visible.transition.clone().unwrap()
    else {
        panic!("expected tween");
    };
    assert_eq!(t.ease, Some(Ease::CubicBezier([0.34, 1.56, 0.64, 1.0])));
}

#[test]
fn scalar_scale_is_not_a_keyframe() {
    let mut p = params();
    p.wobble = Some(WobbleParams {
        wobble_intensity: 0.0,
    });
    let mut preset = wobbly_preset();
    preset.layers.layer3 = LayerDescriptor::new(
        LayerState::new().set("scale", 0.5),
        LayerState::new().set("scale", 1.2),
    );
    let r = resolve(&preset, &p);
    assert_eq!(
        r.layer(LayerKey::Layer3).hidden.get("scale"),
        Some(&PropertyValue::Scalar(0.5))
    );
    assert_eq!(
        r.layer(LayerKey::Layer3).visible.get("scale"),
        Some(&PropertyValue::Scalar(1.2))
    );
}

#[test]
fn container_orchestration_is_replaced() {
    let mut p = params();
    p.stagger_children = 0.3;
    p.delay_children = 0.7;
    let r = resolve(&wobbly_preset(), &p);
    let t = r.layer(LayerKey::Container).visible.transition.as_ref().unwrap();
    assert_eq!(t.stagger_children(), Some(0.3));
    assert_eq!(t.delay_children(), Some(0.7));
}

#[test]
fn orchestration_is_never_introduced() {
    let mut preset = wobbly_preset();
    preset.layers.container.visible.transition = Some(TransitionSpec::tween(0.2));
    let r = resolve(&preset, &params());
    let t = r.layer(LayerKey::Container).visible.transition.as_ref().unwrap();
    assert_eq!(t.stagger_children(), None);
    assert_eq!(t.delay_children(), None);
    assert_eq!(t.delay(), None);
}

#[test]
fn duration_and_delay_are_retimed() {
    let mut p = params();
    p.duration_scale = 2.0;
    p.delay_offset = 0.25;
    let r = resolve(&wobbly_preset(), &p);
    let t = r.layer(LayerKey::Layer1).visible.transition.as_ref().unwrap();
    assert_eq!(t.duration(), Some(1.6));
    assert_eq!(t.delay(), Some(0.1 + 0.25));

    // Transitions without a delay do not gain one.
    let spring = r.layer(LayerKey::Layer2).visible.transition.as_ref().unwrap();
    assert_eq!(spring.delay(), None);
}

#[test]
fn negative_delays_clamp_to_zero() {
    let mut p = params();
    p.delay_offset = -0.05;
    let r = resolve(&wobbly_preset(), &p);
    let t = r.layer(LayerKey::Layer1).visible.transition.as_ref().unwrap();
    assert!((t.delay().unwrap() - 0.05).abs() < 1e-12);

    p.delay_offset = -5.0;
    let r = resolve(&wobbly_preset(), &p);
    let t = r.layer(LayerKey::Layer1).visible.transition.as_ref().unwrap();
    assert_eq!(t.delay(), Some(0.0));
}

#[test]
fn spring_is_replaced_not_scaled() {
    let mut p = params();
    p.duration_scale = 3.0;
    p.spring = Some(SpringParams {
        stiffness: 300.0,
        damping: 20.0,
        mass: 2.0,
    });
    let r = resolve(&wobbly_preset(), &p);
    assert_eq!(
        r.layer(LayerKey::Layer2).visible.transition,
        Some(TransitionSpec::spring(300.0, 20.0, 2.0))
    );
}

#[test]
fn missing_groups_are_no_ops() {
    let mut p = params();
    p.spring = None;
    p.wobble = None;
    p.orbital = None;
    let preset = wobbly_preset();
    let r = resolve(&preset, &p);
    assert_eq!(r.layers, preset.layers);
}

#[test]
fn orbital_scales_non_zero_offsets_only() {
    let mut preset = wobbly_preset();
    preset.id = PresetId::OrbitalReveal;
    preset.capabilities = PresetId::OrbitalReveal.capabilities();
    let mut p = ParameterSet::defaults_for(PresetId::OrbitalReveal);
    p.orbital = Some(OrbitalParams {
        orbit_distance: 150.0,
    });
    let r = resolve(&preset, &p);
    let hidden = &r.layer(LayerKey::Layer2).hidden;
    assert_eq!(hidden.get("x"), Some(&PropertyValue::Scalar(-120.0)));
    assert_eq!(hidden.get("y"), Some(&PropertyValue::Scalar(0.0)));
}

#[test]
fn capability_flags_gate_nested_groups() {
    let mut preset = wobbly_preset();
    preset.capabilities = PresetCapabilities::BASE;
    let mut p = params();
    p.spring = Some(SpringParams {
        stiffness: 1.0,
        damping: 1.0,
        mass: 1.0,
    });
    p.wobble = Some(WobbleParams {
        wobble_intensity: 0.0,
    });
    p.orbital = Some(OrbitalParams {
        orbit_distance: 0.0,
    });
    let r = resolve(&preset, &p);
    assert_eq!(r.layers, preset.layers);
}

#[test]
fn static_preset_ignores_everything() {
    let mut preset = wobbly_preset();
    preset.capabilities = PresetCapabilities::STATIC;
    let mut p = params();
    p.duration_scale = 5.0;
    p.delay_offset = 1.0;
    p.stagger_children = 0.9;
    let r = resolve(&preset, &p);
    assert_eq!(r.layers, preset.layers);
}

#[test]
fn input_is_never_mutated() {
    let preset = wobbly_preset();
    let snapshot = preset.clone();
    let mut p = params();
    p.duration_scale = 0.25;
    p.wobble = Some(WobbleParams {
        wobble_intensity: 2.5,
    });
    let a = resolve(&preset, &p);
    let b = resolve(&preset, &p);
    assert_eq!(a, b);
    assert_eq!(preset, snapshot);
}

#[test]
fn resolve_by_id_looks_up_registry() {
    let reg = PresetRegistry::builtin();
    let r = resolve_by_id(&reg, "fade-slide", &ParameterSet::defaults_for(PresetId::FadeSlide))
        .unwrap();
    assert_eq!(r.preset, PresetId::FadeSlide);
    assert!(matches!(
        resolve_by_id(&reg, "sparkle", &params()),
        Err(MotionError::UnknownPreset(_))
    ));
}

#[test]
fn json_output_uses_variant_keys() {
    let r = resolve(&wobbly_preset(), &params());
    let v = r.to_json_value().unwrap();
    assert_eq!(
        v["layer2Variants"]["visible"]["transition"],
        serde_json::json!({ "type": "spring", "stiffness": 400, "damping": 12, "mass": 0.8 })
    );
    assert_eq!(v["layer1Variants"]["hidden"]["scale"], serde_json::json!(0));
    assert!(v.get("preset").is_none());
}

#[test]
fn resolved_states_keep_property_order() {
    let reg = PresetRegistry::builtin();
    let preset = reg.preset(PresetId::OrbitalReveal).unwrap();
    let mut p = ParameterSet::defaults_for(PresetId::OrbitalReveal);
    p.orbital = Some(OrbitalParams {
        orbit_distance: 50.0,
    });
    let v = resolve(preset, &p).to_json_value().unwrap();
    let hidden = v["layer1Variants"]["hidden"].as_object().unwrap();
    let names: Vec<&str> = hidden.keys().map(String::as_str).collect();
    assert_eq!(names, ["opacity", "x", "y", "rotate", "scale"]);
    assert_eq!(hidden["x"], serde_json::json!(-50));

    let authored = LayerState::new()
        .set("y", 20.0)
        .set("opacity", 0.0)
        .set("scale", 0.5)
        .transition(TransitionSpec::tween(0.4));
    let mut preset = wobbly_preset();
    preset.layers.layer3 = LayerDescriptor::new(LayerState::new(), authored);
    let r = resolve(&preset, &params());
    let names: Vec<&str> = r
        .layer(LayerKey::Layer3)
        .visible
        .properties
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(names, ["y", "opacity", "scale"]);
}
