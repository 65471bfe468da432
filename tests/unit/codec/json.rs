use super::*;
use serde_json::json;

#[test]
fn integral_floats_become_integers() {
    let mut v = json!({ "a": 1.0, "b": [0.0, 2.5, -3.0], "c": { "d": 100.0 } });
    normalize_numbers(&mut v);
    assert_eq!(
        serde_json::to_string(&v).unwrap(),
        r#"{"a":1,"b":[0,2.5,-3],"c":{"d":100}}"#
    );
}

#[test]
fn fractions_and_strings_are_untouched() {
    let mut v = json!({ "x": 0.1, "s": "1.0", "t": true, "n": null });
    let before = v.clone();
    normalize_numbers(&mut v);
    assert_eq!(v, before);
    assert_eq!(
        serde_json::to_string(&v).unwrap(),
        r#"{"x":0.1,"s":"1.0","t":true,"n":null}"#
    );
}

#[test]
fn huge_values_stay_floats() {
    let mut v = json!(1.0e300);
    normalize_numbers(&mut v);
    assert!(v.is_f64());
}

#[test]
fn negative_zero_prints_as_zero() {
    let mut v = json!(-0.0);
    normalize_numbers(&mut v);
    assert_eq!(serde_json::to_string(&v).unwrap(), "0");
}

#[test]
fn to_normalized_value_keeps_field_order() {
    #[derive(serde::Serialize)]
    struct S {
        zeta: f64,
        alpha: f64,
    }
    let v = to_normalized_value(&S {
        zeta: 2.0,
        alpha: 0.5,
    })
    .unwrap();
    assert_eq!(serde_json::to_string(&v).unwrap(), r#"{"zeta":2,"alpha":0.5}"#);
}
