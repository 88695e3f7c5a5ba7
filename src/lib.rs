//! Decision Calculator - Multi-criteria decision support service
//!
//! This crate bands raw provider attributes into crisp scores and ranks
//! the alternatives with Simple Additive Weighting (SAW) and Weighted
//! Product (WP), side by side.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
