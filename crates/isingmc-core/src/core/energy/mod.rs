//! The Ising energy function.
//!
//! [`scoring::Scorer`] evaluates a configuration against a [`GraphModel`] and
//! returns an [`term::EnergyTerm`] that keeps the node (self-field) and edge
//! (coupling) contributions apart.
//!
//! [`GraphModel`]: crate::core::models::graph::GraphModel

pub mod scoring;
pub mod term;
