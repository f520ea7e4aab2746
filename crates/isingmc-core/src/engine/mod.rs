//! # Engine Module
//!
//! The sampling machinery that turns a validated [`GraphModel`] into a ground-state
//! estimate.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Sampling multiplier, seed, budget cap and chunk size
//! - **Sampling** ([`sampler`]) - The `SpinSampler` abstraction and its seeded random implementation
//! - **Budget Policy** ([`budget`]) - The `2^N × samples_per_state` iteration budget
//! - **State Tracking** ([`state`]) - Streaming running minimum and the final `SearchResult`
//! - **Search** ([`search`]) - The sampling loop, sequential or partitioned across threads
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting
//! - **Error Handling** ([`error`]) - Engine error taxonomy
//!
//! ## Memory Discipline
//!
//! No sampled configuration is kept unless it improves on the best seen so far, so
//! auxiliary state is constant regardless of the iteration budget.
//!
//! [`GraphModel`]: crate::core::models::graph::GraphModel

pub mod budget;
pub mod config;
pub mod error;
pub mod progress;
pub mod sampler;
pub mod search;
pub mod state;
pub(crate) mod utils;
