use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize as _;
use serde_json::Value;

use crate::{
    codec::json::to_normalized_value,
    foundation::error::{MotionError, MotionResult},
    params::model::{OrbitalParams, ParameterSet, SpringParams, WobbleParams},
    preset::id::PresetId,
};

pub const ENVELOPE_VERSION: &str = "1.0";

/// Export file: one preset's parameters plus provenance.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterEnvelope {
    pub version: String,
    /// ISO-8601 UTC, millisecond precision.
    pub timestamp: String,
    pub animation_type: String,
    pub parameters: ParameterSet,
}

impl ParameterEnvelope {
    /// JSON value with integral numbers printed as integers.
    pub fn to_value(&self) -> MotionResult<Value> {
        to_normalized_value(self).map_err(|e| MotionError::serde(format!("encode envelope: {e}")))
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> MotionResult<String> {
        let value = self.to_value()?;
        serde_json::to_string_pretty(&value)
            .map_err(|e| MotionError::serde(format!("encode envelope: {e}")))
    }
}

pub fn export_parameters(id: PresetId, params: &ParameterSet) -> ParameterEnvelope {
    export_parameters_at(id, params, Utc::now())
}

pub fn export_parameters_at(
    id: PresetId,
    params: &ParameterSet,
    at: DateTime<Utc>,
) -> ParameterEnvelope {
    ParameterEnvelope {
        version: ENVELOPE_VERSION.to_string(),
        timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        animation_type: id.as_str().to_string(),
        parameters: params.clone(),
    }
}

/// Envelope parameters as found in the file: every field optional.
///
/// Applying a patch is a merge. Absent fields, including whole
/// `spring`/`wobble`/`orbital` groups, leave the target untouched.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_scale: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_offset: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stagger_children: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_children: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spring: Option<SpringPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wobble: Option<WobblePatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbital: Option<OrbitalPatch>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stiffness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damping: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass: Option<f64>,
}

impl SpringPatch {
    fn apply_to(&self, target: &mut SpringParams) {
        if let Some(v) = self.stiffness {
            target.stiffness = v;
        }
        if let Some(v) = self.damping {
            target.damping = v;
        }
        if let Some(v) = self.mass {
            target.mass = v;
        }
    }

    fn complete(&self) -> Option<SpringParams> {
        Some(SpringParams {
            stiffness: self.stiffness?,
            damping: self.damping?,
            mass: self.mass?,
        })
    }
}

impl From<SpringParams> for SpringPatch {
    fn from(p: SpringParams) -> Self {
        Self {
            stiffness: Some(p.stiffness),
            damping: Some(p.damping),
            mass: Some(p.mass),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WobblePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wobble_intensity: Option<f64>,
}

impl From<WobbleParams> for WobblePatch {
    fn from(p: WobbleParams) -> Self {
        Self {
            wobble_intensity: Some(p.wobble_intensity),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitalPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbit_distance: Option<f64>,
}

impl From<OrbitalParams> for OrbitalPatch {
    fn from(p: OrbitalParams) -> Self {
        Self {
            orbit_distance: Some(p.orbit_distance),
        }
    }
}

impl ParameterPatch {
    /// Merge into `target`. A group missing from `target` starts from its
    /// category default before the present fields are written.
    pub fn apply_to(&self, target: &mut ParameterSet) {
        if let Some(v) = self.duration_scale {
            target.duration_scale = v;
        }
        if let Some(v) = self.delay_offset {
            target.delay_offset = v;
        }
        if let Some(v) = self.stagger_children {
            target.stagger_children = v;
        }
        if let Some(v) = self.delay_children {
            target.delay_children = v;
        }
        if let Some(patch) = &self.spring {
            patch.apply_to(target.spring.get_or_insert_with(SpringParams::default));
        }
        if let Some(patch) = &self.wobble {
            let wobble = target.wobble.get_or_insert_with(WobbleParams::default);
            if let Some(v) = patch.wobble_intensity {
                wobble.wobble_intensity = v;
            }
        }
        if let Some(patch) = &self.orbital {
            let orbital = target.orbital.get_or_insert_with(OrbitalParams::default);
            if let Some(v) = patch.orbit_distance {
                orbital.orbit_distance = v;
            }
        }
    }

    /// The full parameter set, if all four base fields are present.
    ///
    /// Nested groups are carried only when every one of their fields is present.
    pub fn complete(&self) -> Option<ParameterSet> {
        Some(ParameterSet {
            duration_scale: self.duration_scale?,
            delay_offset: self.delay_offset?,
            stagger_children: self.stagger_children?,
            delay_children: self.delay_children?,
            spring: self.spring.and_then(|s| s.complete()),
            wobble: self.wobble.and_then(|w| {
                Some(WobbleParams {
                    wobble_intensity: w.wobble_intensity?,
                })
            }),
            orbital: self.orbital.and_then(|o| {
                Some(OrbitalParams {
                    orbit_distance: o.orbit_distance?,
                })
            }),
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<ParameterSet> for ParameterPatch {
    fn from(p: ParameterSet) -> Self {
        Self {
            duration_scale: Some(p.duration_scale),
            delay_offset: Some(p.delay_offset),
            stagger_children: Some(p.stagger_children),
            delay_children: Some(p.delay_children),
            spring: p.spring.map(SpringPatch::from),
            wobble: p.wobble.map(WobblePatch::from),
            orbital: p.orbital.map(OrbitalPatch::from),
        }
    }
}

/// Result of decoding an envelope.
///
/// `target_id` is the envelope's `animationType` verbatim. When it differs from
/// the active preset, the caller switches to it before applying `parameters`.
#[derive(Clone, Debug, PartialEq)]
pub struct ImportedParameters {
    pub target_id: String,
    pub version: Option<String>,
    pub timestamp: Option<String>,
    pub parameters: ParameterPatch,
}

impl ImportedParameters {
    pub fn target_preset(&self) -> MotionResult<PresetId> {
        self.target_id.parse()
    }
}

pub fn import_parameters(envelope: &Value) -> MotionResult<ImportedParameters> {
    let obj = envelope
        .as_object()
        .ok_or_else(|| MotionError::malformed("envelope must be a JSON object"))?;

    let target_id = match obj.get("animationType") {
        Some(Value::String(s)) => s.clone(),
        Some(_) => return Err(MotionError::malformed("'animationType' must be a string")),
        None => return Err(MotionError::malformed("missing 'animationType'")),
    };

    let parameters = match obj.get("parameters") {
        Some(v @ Value::Object(_)) => ParameterPatch::deserialize(v)
            .map_err(|e| MotionError::malformed(format!("invalid 'parameters': {e}")))?,
        Some(_) => return Err(MotionError::malformed("'parameters' must be an object")),
        None => return Err(MotionError::malformed("missing 'parameters'")),
    };

    let version = obj.get("version").and_then(Value::as_str).map(str::to_string);
    match version.as_deref() {
        Some(ENVELOPE_VERSION) => {}
        other => tracing::warn!(
            version = ?other,
            expected = ENVELOPE_VERSION,
            "importing envelope with unexpected version"
        ),
    }

    Ok(ImportedParameters {
        target_id,
        version,
        timestamp: obj
            .get("timestamp")
            .and_then(Value::as_str)
            .map(str::to_string),
        parameters,
    })
}

pub fn import_parameters_str(json: &str) -> MotionResult<ImportedParameters> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| MotionError::malformed(format!("envelope is not valid JSON: {e}")))?;
    import_parameters(&value)
}

#[cfg(test)]
#[path = "../../tests/unit/codec/envelope.rs"]
mod tests;
