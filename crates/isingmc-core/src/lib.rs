//! # isingmc Core Library
//!
//! Estimates the ground-state energy and spin configuration of an Ising spin model
//! defined on a weighted graph by drawing many independent, uniformly random spin
//! configurations and keeping the one with the lowest energy.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Immutable data models (`GraphModel`, `SpinConfiguration`),
//!   the pure energy function (`Scorer`), the symbolic state encoder, and text file I/O.
//!
//! - **[`engine`]: The Logic Core.** The sampling machinery: spin samplers, the iteration
//!   budget policy, the streaming running minimum, and the `GroundStateSearch` loop with
//!   its optional parallel partitioning.
//!
//! - **[`workflows`]: The Public API.** Ties `engine` and `core` together into a single
//!   call that takes a validated model and returns the encoded ground-state estimate.
//!
//! The library never installs a logging subscriber. It emits `tracing` events and
//! reports progress through an injected [`engine::progress::ProgressReporter`]; the
//! caller owns both.

pub mod core;
pub mod engine;
pub mod workflows;
