//! # Workflows Module
//!
//! High-level entry points that run a complete ground-state estimation.
//!
//! A workflow takes an already validated [`GraphModel`](crate::core::models::graph::GraphModel)
//! and a [`SearchConfig`](crate::engine::config::SearchConfig), computes the iteration
//! budget, runs the sampling search and encodes the winning configuration. Resource
//! loading and result persistence stay with the caller.
//!
//! - **Ground state** ([`ground_state`]) - i.i.d. random sampling with a streaming
//!   minimum, partitioned into deterministically seeded chunks.

pub mod ground_state;
