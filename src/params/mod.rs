//! Tunable parameters: the per-preset model, slider metadata, and the store.

pub(crate) mod model;
pub(crate) mod store;
pub(crate) mod ui;
