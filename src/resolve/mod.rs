//! Turning a preset template plus parameters into a render-ready descriptor.

pub(crate) mod cache;
pub(crate) mod resolver;
