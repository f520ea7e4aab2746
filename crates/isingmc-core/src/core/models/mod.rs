//! Data structures describing a spin system and its configurations.
//!
//! A [`graph::GraphModel`] is validated once at construction and is read-only
//! afterwards, so it can be shared freely between sampling workers. A
//! [`spin::SpinConfiguration`] is a plain owned vector of spin values produced
//! fresh for every sample.

pub mod builder;
pub mod graph;
pub mod spin;
pub mod terms;
