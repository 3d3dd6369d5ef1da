//! Outranking Module - the ELECTRE TRI classification core.
//!
//! # Components
//!
//! - `ConcordanceEngine` - weighted "at least as good as" score
//! - `PessimisticClassifier` - descending sweep b5 → b2, fallback E'
//! - `OptimisticClassifier` - ascending sweep b2 → b5 on strict preference, fallback A'
//! - `BatchRunner` - both classifiers over every threshold and alternative
//!
//! Everything here is a pure function of (alternative, profiles, weights,
//! threshold); nothing is cached or mutated between calls.

mod batch;
mod concordance;
mod optimistic;
mod pessimistic;

pub use batch::{Alternative, AssignmentRule, BatchRunner, ClassificationResult, ThresholdRun};
pub use concordance::ConcordanceEngine;
pub use optimistic::OptimisticClassifier;
pub use pessimistic::PessimisticClassifier;
