//! Analysis Module - Pure domain services for multi-criteria scoring.
//!
//! This module contains stateless functions that turn a table of raw
//! attribute values and a weight vector into SAW and WP rankings.
//!
//! # Components
//!
//! - `AlternativesTable` - Validated snapshot of alternatives and raw values
//! - `WeightVector` - Per-criterion weights, used as supplied
//! - `Fuzzifier` - Banding of raw values into crisp scores
//! - `SawScorer` - Weighted sum, competition-ranked
//! - `WpScorer` - Weighted product normalized into a preference vector
//! - `ComparisonAssembler` - Side-by-side SAW/WP series
//! - `CalculationPipeline` - One full pass producing a `CalculationReport`
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return computed results. No ports or adapters needed
//! since there's no I/O or external dependencies.

mod alternatives_table;
mod comparison;
mod default_dataset;
mod errors;
mod fuzzifier;
mod pipeline;
mod ranking;
mod saw_scorer;
mod weight_vector;
mod wp_scorer;

// Re-export all public types
pub use alternatives_table::{
    Alternative, AlternativesTable, AlternativesTableBuilder, RawAttributes,
};
pub use comparison::{
    ComparisonAssembler, ComparisonRow, ComparisonSeries, SAW_SERIES_LABEL, WP_SERIES_LABEL,
};
pub use default_dataset::{default_table, DEFAULT_ALTERNATIVES, DEFAULT_WEIGHTS};
pub use errors::{CalculationError, ScoringMethod};
pub use fuzzifier::{CrispMatrix, CrispRow, Fuzzifier};
pub use pipeline::{CalculationPipeline, CalculationReport};
pub use ranking::{best_flags, competition_ranks};
pub use saw_scorer::{SawResult, SawRow, SawScorer};
pub use weight_vector::WeightVector;
pub use wp_scorer::{WpResult, WpRow, WpScorer};
