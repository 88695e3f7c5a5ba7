//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, criteria, errors)
//! - `analysis` - Pure scoring services (fuzzification, SAW, WP, comparison)
//! - `workspace` - Per-session table and weights aggregate

pub mod analysis;
pub mod foundation;
pub mod workspace;
