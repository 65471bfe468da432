//! Entrance-animation presets for lobby promo dialogs.
//!
//! A preset is a declarative template: four layers (`container`, `layer1`..`layer3`),
//! each with a `hidden` and a `visible` state. Designers tune a small set of
//! numeric knobs per preset; the resolver folds those knobs into a copy of the
//! template and hands the result to the rendering layer.
//!
//! - Look up templates in a [`PresetRegistry`]
//! - Keep per-preset knob values in a [`ParameterStore`]
//! - [`resolve`] a template with parameters into a [`ResolvedDescriptor`]
//! - Persist knobs with [`export_parameters`] / [`import_parameters`]
//!
//! ```
//! use lobby_motion::{ParameterStore, PresetId, PresetRegistry, ResolveCache};
//!
//! let registry = PresetRegistry::builtin();
//! let mut store = ParameterStore::new();
//! let mut cache = ResolveCache::new();
//!
//! let id: PresetId = "elastic-bounce".parse()?;
//! store.update_wobble_parameter(id, 1.8);
//!
//! let resolved = cache.resolve(registry.preset(id)?, &store.get_parameters(id));
//! let variants = resolved.to_json_value()?;
//! assert!(variants.get("layer1Variants").is_some());
//!
//! let file = store.export(id).to_json_pretty()?;
//! let imported = lobby_motion::import_parameters_str(&file)?;
//! assert_eq!(store.apply_import(&imported)?, id);
//! # Ok::<(), lobby_motion::MotionError>(())
//! ```
#![forbid(unsafe_code)]

mod codec;
mod foundation;
mod params;
mod preset;
mod resolve;

pub use crate::foundation::error::{MotionError, MotionResult};

pub use crate::codec::envelope::{
    ENVELOPE_VERSION, ImportedParameters, OrbitalPatch, ParameterEnvelope, ParameterPatch,
    SpringPatch, WobblePatch, export_parameters, export_parameters_at, import_parameters,
    import_parameters_str,
};
pub use crate::params::model::{
    BaseParam, OrbitalParams, ParamKey, ParameterSet, SpringField, SpringParams, WobbleParams,
};
pub use crate::params::store::ParameterStore;
pub use crate::params::ui::{ParamCategory, SliderConfig, categories_for, ui_config};
pub use crate::preset::id::{PresetCapabilities, PresetId};
pub use crate::preset::model::{
    AnimationPreset, Ease, LayerDescriptor, LayerKey, LayerSet, LayerState, NamedEase,
    PropertyValue, SpringTransition, TransitionSpec, TweenTransition,
};
pub use crate::preset::registry::PresetRegistry;
pub use crate::resolve::cache::ResolveCache;
pub use crate::resolve::resolver::{ResolvedDescriptor, resolve, resolve_by_id};
