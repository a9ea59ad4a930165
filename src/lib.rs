//! Exam score interpretation: performance tiers and targeted suggestions
//! for a student profile scored by an external predictor.

pub mod assess;
pub mod config;
pub mod error;
pub mod import;
pub mod models;
pub mod predictor;
pub mod report;
pub mod rules;
pub mod suggest;
pub mod telemetry;
pub mod tier;
pub mod validate;

#[cfg(test)]
pub(crate) mod testing;

pub use assess::{assess, assess_profile};
pub use error::{AssessError, PredictorError, ValidationError};
pub use models::{Assessment, Attribute, RawProfile, StudentProfile, Suggestion};
pub use predictor::Predictor;
pub use suggest::suggest;
pub use tier::{classify, PerformanceTier};
