//! JSON export/import of parameter sets.

pub(crate) mod envelope;
pub(crate) mod json;
