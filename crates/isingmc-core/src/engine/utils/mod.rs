//! Utility functions for the engine module.

pub mod seeding;
