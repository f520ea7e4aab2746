//! # Core Module
//!
//! The stateless building blocks of the ground-state estimator.
//!
//! ## Architecture
//!
//! - **Spin-System Representation** ([`models`]) - Node terms, edge terms, the validated
//!   `GraphModel`, and `SpinConfiguration`
//! - **Energy Calculations** ([`energy`]) - The Ising energy function and its node/edge breakdown
//! - **State Encoding** ([`encoding`]) - Conversion between configurations and `+`/`-` strings
//! - **File I/O** ([`io`]) - The line-oriented graph description format and the result artifact
//!
//! ## Energy Function
//!
//! For a configuration `s` the energy is
//!
//! ```text
//! E(s) = Σ h_i · s_i  +  Σ J_uv · s_u · s_v
//! ```
//!
//! where the first sum runs over node terms and the second over edge terms. All
//! quantities are integers, so no floating-point rounding is involved.

pub mod encoding;
pub mod energy;
pub mod io;
pub mod models;
