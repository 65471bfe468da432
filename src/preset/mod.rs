//! Animation preset templates: data model, identifiers, and the built-in catalog.

pub(crate) mod catalog;
pub(crate) mod id;
pub(crate) mod model;
pub(crate) mod registry;
