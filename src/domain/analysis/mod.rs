//! Analysis Module - Pure summaries over classification results.
//!
//! # Components
//!
//! - `ClassDistribution` - class counts per rule and threshold
//! - `AgreementAnalyzer` - agreement with reference grades, confusion matrices
//! - `RunReport` - grouped results plus summaries and the echoed model
//!
//! All functions are pure and stateless. They take results as input and
//! return computed summaries; no ports are involved.

mod agreement;
mod distribution;
mod report;

pub use agreement::{AgreementAnalyzer, AgreementStats, ConfusionMatrix, RuleAgreement};
pub use distribution::{ClassCounts, ClassDistribution};
pub use report::{RunReport, ThresholdReport};
