use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use tracing::info;

use crate::error::PredictorError;
use crate::models::{Attribute, StudentProfile};

/// Opaque scoring function. Output is raw and may fall outside `[0, 100]`.
pub trait Predictor: Send + Sync {
    fn predict(&self, profile: &StudentProfile) -> Result<f64, PredictorError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Numeric(f64),
    Label(&'static str),
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Numeric(value) => write!(f, "{value}"),
            FeatureValue::Label(label) => f.write_str(label),
        }
    }
}

/// The profile laid out in the predictor's column order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    columns: Vec<(&'static str, FeatureValue)>,
}

impl FeatureVector {
    pub fn from_profile(profile: &StudentProfile) -> Self {
        let columns = Attribute::FEATURE_ORDER
            .iter()
            .map(|attribute| (attribute.feature_name(), feature_value(profile, *attribute)))
            .collect();
        Self { columns }
    }

    pub fn columns(&self) -> &[(&'static str, FeatureValue)] {
        &self.columns
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|(name, _)| *name)
    }
}

/// Serializes as a map whose keys keep the predictor column order.
impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, value) in &self.columns {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

fn feature_value(profile: &StudentProfile, attribute: Attribute) -> FeatureValue {
    use FeatureValue::{Label, Numeric};

    match attribute {
        Attribute::HoursStudied => Numeric(f64::from(profile.hours_studied)),
        Attribute::Attendance => Numeric(f64::from(profile.attendance)),
        Attribute::ParentalInvolvement => Label(profile.parental_involvement.as_label()),
        Attribute::AccessToResources => Label(profile.access_to_resources.as_label()),
        Attribute::ExtracurricularActivities => {
            Label(profile.extracurricular_activities.as_label())
        }
        Attribute::SleepHours => Numeric(f64::from(profile.sleep_hours)),
        Attribute::PreviousScores => Numeric(f64::from(profile.previous_scores)),
        Attribute::MotivationLevel => Label(profile.motivation_level.as_label()),
        Attribute::InternetAccess => Label(profile.internet_access.as_label()),
        Attribute::TutoringSessions => Numeric(f64::from(profile.tutoring_sessions)),
        Attribute::FamilyIncome => Label(profile.family_income.as_label()),
        Attribute::TeacherQuality => Label(profile.teacher_quality.as_label()),
        Attribute::SchoolType => Label(profile.school_type.as_label()),
        Attribute::PeerInfluence => Label(profile.peer_influence.as_label()),
        Attribute::PhysicalActivity => Numeric(f64::from(profile.physical_activity)),
        Attribute::LearningDisabilities => Label(profile.learning_disabilities.as_label()),
        Attribute::ParentalEducationLevel => {
            Label(profile.parental_education_level.as_label())
        }
        Attribute::DistanceFromHome => Label(profile.distance_from_home.as_label()),
        Attribute::Gender => Label(profile.gender.as_label()),
    }
}

/// Linear scoring model with one-hot categorical weights.
///
/// Features or labels without a weight contribute nothing, which matches a
/// model fitted with the first category of each feature dropped.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    #[serde(default)]
    pub numeric: HashMap<String, f64>,
    #[serde(default)]
    pub categorical: HashMap<String, HashMap<String, f64>>,
}

impl LinearModel {
    pub fn from_json_str(json: &str) -> Result<Self, PredictorError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, PredictorError> {
        let contents = std::fs::read_to_string(path).map_err(|source| PredictorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let model = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            numeric = model.numeric.len(),
            categorical = model.categorical.len(),
            "loaded linear model"
        );
        Ok(model)
    }

    pub fn score(&self, features: &FeatureVector) -> f64 {
        features
            .columns()
            .iter()
            .fold(self.intercept, |total, (name, value)| {
                let contribution = match value {
                    FeatureValue::Numeric(x) => {
                        self.numeric.get(*name).map(|weight| weight * x).unwrap_or(0.0)
                    }
                    FeatureValue::Label(label) => self
                        .categorical
                        .get(*name)
                        .and_then(|weights| weights.get(*label))
                        .copied()
                        .unwrap_or(0.0),
                };
                total + contribution
            })
    }
}

impl Predictor for LinearModel {
    fn predict(&self, profile: &StudentProfile) -> Result<f64, PredictorError> {
        let raw = self.score(&FeatureVector::from_profile(profile));
        if raw.is_finite() {
            Ok(raw)
        } else {
            Err(PredictorError::NonFinite(raw))
        }
    }
}

/// Returns a score supplied from outside, e.g. a model served elsewhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedScore(pub f64);

impl Predictor for FixedScore {
    fn predict(&self, _profile: &StudentProfile) -> Result<f64, PredictorError> {
        Ok(self.0)
    }
}

static GLOBAL: OnceLock<Box<dyn Predictor>> = OnceLock::new();

/// Installs the process-wide predictor. There is no reload.
pub fn install_global(predictor: Box<dyn Predictor>) -> Result<(), PredictorError> {
    GLOBAL
        .set(predictor)
        .map_err(|_| PredictorError::AlreadyInstalled)
}

pub fn global() -> Option<&'static dyn Predictor> {
    GLOBAL.get().map(|predictor| predictor.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::favorable_profile;

    const MODEL: &str = r#"{
        "intercept": 40.0,
        "numeric": { "Hours_Studied": 0.5, "Attendance": 0.1 },
        "categorical": {
            "Motivation_Level": { "Low": -2.0, "High": 1.5 },
            "Gender": { "Male": 0.0 }
        }
    }"#;

    #[test]
    fn feature_vector_follows_predictor_column_order() {
        let features = FeatureVector::from_profile(&favorable_profile());
        let expected: Vec<&str> = Attribute::FEATURE_ORDER
            .iter()
            .map(|attribute| attribute.feature_name())
            .collect();
        assert_eq!(features.names().collect::<Vec<_>>(), expected);
        assert_eq!(features.columns()[0].1, FeatureValue::Numeric(24.0));
        assert_eq!(
            features.columns()[16].1,
            FeatureValue::Label("Postgraduate")
        );
    }

    #[test]
    fn feature_vector_serializes_in_column_order() {
        let features = FeatureVector::from_profile(&favorable_profile());

        let json = serde_json::to_string(&features).expect("serializes");

        assert!(json.starts_with("{\"Hours_Studied\":24.0,\"Attendance\":97.0,"));
        assert!(json.ends_with("\"Distance_from_Home\":\"Near\",\"Gender\":\"Male\"}"));
    }

    #[test]
    fn linear_model_sums_intercept_and_weights() {
        let model = LinearModel::from_json_str(MODEL).expect("model parses");
        let profile = favorable_profile();

        let score = model.predict(&profile).expect("finite score");

        let expected = 40.0 + 0.5 * 24.0 + 0.1 * 97.0 + 1.5;
        assert!((score - expected).abs() < 1e-9);
    }

    #[test]
    fn linear_model_rejects_non_finite_output() {
        let model = LinearModel {
            intercept: f64::NAN,
            ..LinearModel::default()
        };
        match model.predict(&favorable_profile()) {
            Err(PredictorError::NonFinite(value)) => assert!(value.is_nan()),
            other => panic!("expected non-finite error, got {other:?}"),
        }
    }

    #[test]
    fn missing_model_file_reports_path() {
        let err = LinearModel::from_path(Path::new("/nonexistent/model.json"))
            .expect_err("file is missing");
        assert!(err.to_string().contains("/nonexistent/model.json"));
    }

    #[test]
    fn malformed_model_is_a_parse_error() {
        assert!(matches!(
            LinearModel::from_json_str("{ \"numeric\": 3 }"),
            Err(PredictorError::Parse(_))
        ));
    }

    #[test]
    fn global_predictor_installs_once() {
        let first = install_global(Box::new(FixedScore(77.0)));
        let second = install_global(Box::new(FixedScore(12.0)));

        assert!(first.is_ok() || matches!(first, Err(PredictorError::AlreadyInstalled)));
        assert!(matches!(second, Err(PredictorError::AlreadyInstalled)));
        assert!(global().is_some());
    }
}
