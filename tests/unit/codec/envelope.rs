use super::*;
use chrono::TimeZone as _;
use serde_json::json;

fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap()
}

#[test]
fn export_shape_matches_file_format() {
    let params = ParameterSet::defaults_for(PresetId::SpringPhysics);
    let env = export_parameters_at(PresetId::SpringPhysics, &params, fixed_time());
    let expected = r#"{
  "version": "1.0",
  "timestamp": "2026-03-14T09:26:53.000Z",
  "animationType": "spring-physics",
  "parameters": {
    "durationScale": 1,
    "delayOffset": 0,
    "staggerChildren": 0.08,
    "delayChildren": 0.1,
    "spring": {
      "stiffness": 200,
      "damping": 15,
      "mass": 1.2
    }
  }
}"#;
    assert_eq!(env.to_json_pretty().unwrap(), expected);
}

#[test]
fn export_uses_current_time() {
    let before = Utc::now();
    let env = export_parameters(PresetId::None, &ParameterSet::defaults_for(PresetId::None));
    let ts = DateTime::parse_from_rfc3339(&env.timestamp).unwrap();
    assert!(ts.with_timezone(&Utc) >= before - chrono::Duration::seconds(1));
    assert!(env.timestamp.ends_with('Z'));
}

#[test]
fn missing_animation_type_is_malformed() {
    let err = import_parameters(&json!({ "version": "1.0", "parameters": {} })).unwrap_err();
    assert!(matches!(err, MotionError::MalformedEnvelope(_)));
    assert!(err.to_string().contains("animationType"));
}

#[test]
fn missing_parameters_is_malformed() {
    let err = import_parameters(&json!({ "animationType": "fade-slide" })).unwrap_err();
    assert!(matches!(err, MotionError::MalformedEnvelope(_)));
    assert!(err.to_string().contains("parameters"));
}

#[test]
fn wrong_shapes_are_malformed() {
    for bad in [
        json!([1, 2, 3]),
        json!({ "animationType": 7, "parameters": {} }),
        json!({ "animationType": "fade-slide", "parameters": [] }),
        json!({ "animationType": "fade-slide", "parameters": { "durationScale": "fast" } }),
        json!({ "animationType": "fade-slide", "parameters": { "spring": { "stiffness": "stiff" } } }),
        json!({ "animationType": "fade-slide", "parameters": { "wobble": 2 } }),
    ] {
        assert!(
            matches!(import_parameters(&bad), Err(MotionError::MalformedEnvelope(_))),
            "{bad}"
        );
    }
    assert!(matches!(
        import_parameters_str("{ not json"),
        Err(MotionError::MalformedEnvelope(_))
    ));
}

#[test]
fn import_keeps_unknown_target_verbatim() {
    let imported =
        import_parameters(&json!({ "animationType": "legacy-fizz", "parameters": {} })).unwrap();
    assert_eq!(imported.target_id, "legacy-fizz");
    assert!(imported.parameters.is_empty());
    assert!(matches!(
        imported.target_preset(),
        Err(MotionError::UnknownPreset(_))
    ));
}

#[test]
fn partial_patch_merges() {
    let imported = import_parameters(&json!({
        "version": "1.0",
        "animationType": "elastic-bounce",
        "parameters": { "durationScale": 2, "wobble": { "wobbleIntensity": 0.5 } }
    }))
    .unwrap();
    assert_eq!(imported.target_preset().unwrap(), PresetId::ElasticBounce);
    assert_eq!(imported.version.as_deref(), Some("1.0"));
    assert_eq!(imported.parameters.complete(), None);

    let mut target = ParameterSet::defaults_for(PresetId::ElasticBounce);
    let spring_before = target.spring;
    imported.parameters.apply_to(&mut target);
    assert_eq!(target.duration_scale, 2.0);
    assert_eq!(target.stagger_children, 0.1);
    assert_eq!(target.wobble, Some(WobbleParams { wobble_intensity: 0.5 }));
    assert_eq!(target.spring, spring_before);
}

#[test]
fn partial_spring_group_keeps_other_fields() {
    let imported = import_parameters_str(
        r#"{"version":"1.0","animationType":"spring-physics","parameters":{"spring":{"stiffness":300}}}"#,
    )
    .unwrap();
    assert_eq!(
        imported.parameters.spring,
        Some(SpringPatch {
            stiffness: Some(300.0),
            damping: None,
            mass: None,
        })
    );

    let mut target = ParameterSet::defaults_for(PresetId::SpringPhysics);
    imported.parameters.apply_to(&mut target);
    assert_eq!(
        target.spring,
        Some(SpringParams {
            stiffness: 300.0,
            damping: 15.0,
            mass: 1.2,
        })
    );
}

#[test]
fn partial_group_materializes_from_category_default() {
    let patch: ParameterPatch =
        serde_json::from_value(json!({ "spring": { "mass": 3 }, "orbital": {} })).unwrap();
    let mut target = ParameterSet::defaults_for(PresetId::FadeSlide);
    assert_eq!(target.spring, None);
    patch.apply_to(&mut target);
    assert_eq!(
        target.spring,
        Some(SpringParams {
            mass: 3.0,
            ..SpringParams::default()
        })
    );
    assert_eq!(target.orbital, Some(OrbitalParams::default()));
    assert_eq!(target.wobble, None);
}

#[test]
fn complete_drops_partial_groups() {
    let mut patch = ParameterPatch::from(ParameterSet::defaults_for(PresetId::ElasticBounce));
    patch.spring = Some(SpringPatch {
        damping: Some(4.0),
        ..SpringPatch::default()
    });
    let full = patch.complete().unwrap();
    assert_eq!(full.spring, None);
    assert!(full.wobble.is_some());
}

#[test]
fn absent_groups_do_not_clear_existing_ones() {
    let patch = ParameterPatch {
        delay_offset: Some(0.3),
        ..ParameterPatch::default()
    };
    let mut target = ParameterSet::defaults_for(PresetId::OrbitalReveal);
    patch.apply_to(&mut target);
    assert_eq!(target.delay_offset, 0.3);
    assert!(target.spring.is_some());
    assert!(target.orbital.is_some());
}

#[test]
fn round_trip_restores_parameters() {
    let params = ParameterSet {
        duration_scale: 1.7,
        delay_offset: -0.35,
        stagger_children: 0.23,
        delay_children: 0.0,
        spring: Some(SpringParams {
            stiffness: 310.0,
            damping: 7.5,
            mass: 0.3,
        }),
        wobble: Some(WobbleParams {
            wobble_intensity: 2.2,
        }),
        orbital: Some(OrbitalParams {
            orbit_distance: 42.0,
        }),
    };
    let text = export_parameters(PresetId::ElasticBounce, &params)
        .to_json_pretty()
        .unwrap();
    let imported = import_parameters_str(&text).unwrap();
    assert_eq!(imported.target_id, "elastic-bounce");
    assert_eq!(imported.parameters.complete(), Some(params.clone()));
    assert_eq!(imported.parameters, ParameterPatch::from(params));
}

#[test]
fn envelope_deserializes_directly() {
    let params = ParameterSet::defaults_for(PresetId::VelvetCascade);
    let env = export_parameters_at(PresetId::VelvetCascade, &params, fixed_time());
    let back: ParameterEnvelope = serde_json::from_value(env.to_value().unwrap()).unwrap();
    assert_eq!(back, env);
}
