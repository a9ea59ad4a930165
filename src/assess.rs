use serde::Serialize;
use tracing::{info, info_span, warn};
use uuid::Uuid;

use crate::error::{AssessError, PredictorError};
use crate::models::{Assessment, PredictedScore, RawProfile, StudentProfile};
use crate::predictor::{FeatureVector, Predictor};
use crate::suggest::suggest;
use crate::tier::classify;
use crate::validate::normalize;

/// Validate, predict, clamp, then interpret.
///
/// A validation failure stops before the predictor is called.
pub fn assess(raw: RawProfile, predictor: &dyn Predictor) -> Result<Assessment, AssessError> {
    assess_detailed(raw, predictor).map(|detailed| detailed.assessment)
}

/// An assessment together with the input row handed to the predictor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailedAssessment {
    #[serde(flatten)]
    pub assessment: Assessment,
    pub features: FeatureVector,
}

pub fn assess_detailed(
    raw: RawProfile,
    predictor: &dyn Predictor,
) -> Result<DetailedAssessment, AssessError> {
    let assessment_id = Uuid::new_v4();
    let span = info_span!("assessment", id = %assessment_id);
    let _guard = span.enter();

    let profile = normalize(raw)?;
    let raw_score = predictor.predict(&profile)?;
    let assessment = assess_profile(&profile, raw_score)?;

    info!(
        score = assessment.score.value(),
        tier = %assessment.tier,
        suggestions = assessment.suggestions.len(),
        "assessment complete"
    );
    Ok(DetailedAssessment {
        assessment,
        features: FeatureVector::from_profile(&profile),
    })
}

/// Interprets an already-predicted score for a normalized profile.
pub fn assess_profile(
    profile: &StudentProfile,
    raw_score: f64,
) -> Result<Assessment, PredictorError> {
    let score = PredictedScore::from_raw(raw_score).ok_or(PredictorError::NonFinite(raw_score))?;
    if score.value() != raw_score {
        warn!(raw = raw_score, clamped = score.value(), "predicted score clamped");
    }

    Ok(Assessment {
        score,
        tier: classify(score.value()),
        suggestions: suggest(profile, score.value()),
    })
}
