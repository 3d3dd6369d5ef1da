//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (classes, grades, thresholds, errors)
//! - `criteria` - Criterion set, directions, weights, vectors and profiles
//! - `model` - The validated classification model and its serializable form
//! - `outranking` - Concordance, pessimistic/optimistic classifiers, batch runs
//! - `analysis` - Pure summaries (distributions, reference agreement, reports)

pub mod analysis;
pub mod criteria;
pub mod foundation;
pub mod model;
pub mod outranking;
