use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Three-step ordinal scale shared by several support and personal attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ParentalEducation {
    #[serde(rename = "High School")]
    HighSchool,
    College,
    Postgraduate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeerInfluence {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Distance {
    Near,
    Moderate,
    Far,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchoolType {
    Public,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Level {
    pub fn as_label(self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
        }
    }
}

impl ParentalEducation {
    pub fn as_label(self) -> &'static str {
        match self {
            ParentalEducation::HighSchool => "High School",
            ParentalEducation::College => "College",
            ParentalEducation::Postgraduate => "Postgraduate",
        }
    }
}

impl PeerInfluence {
    pub fn as_label(self) -> &'static str {
        match self {
            PeerInfluence::Positive => "Positive",
            PeerInfluence::Neutral => "Neutral",
            PeerInfluence::Negative => "Negative",
        }
    }
}

impl Distance {
    pub fn as_label(self) -> &'static str {
        match self {
            Distance::Near => "Near",
            Distance::Moderate => "Moderate",
            Distance::Far => "Far",
        }
    }
}

impl YesNo {
    pub fn as_label(self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }
}

impl SchoolType {
    pub fn as_label(self) -> &'static str {
        match self {
            SchoolType::Public => "Public",
            SchoolType::Private => "Private",
        }
    }
}

impl Gender {
    pub fn as_label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// The 19 profile attributes, in predictor column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    HoursStudied,
    Attendance,
    ParentalInvolvement,
    AccessToResources,
    ExtracurricularActivities,
    SleepHours,
    PreviousScores,
    MotivationLevel,
    InternetAccess,
    TutoringSessions,
    FamilyIncome,
    TeacherQuality,
    SchoolType,
    PeerInfluence,
    PhysicalActivity,
    LearningDisabilities,
    ParentalEducationLevel,
    DistanceFromHome,
    Gender,
}

impl Attribute {
    /// Column order the predictor was fitted on. Reordering breaks the model.
    pub const FEATURE_ORDER: [Attribute; 19] = [
        Attribute::HoursStudied,
        Attribute::Attendance,
        Attribute::ParentalInvolvement,
        Attribute::AccessToResources,
        Attribute::ExtracurricularActivities,
        Attribute::SleepHours,
        Attribute::PreviousScores,
        Attribute::MotivationLevel,
        Attribute::InternetAccess,
        Attribute::TutoringSessions,
        Attribute::FamilyIncome,
        Attribute::TeacherQuality,
        Attribute::SchoolType,
        Attribute::PeerInfluence,
        Attribute::PhysicalActivity,
        Attribute::LearningDisabilities,
        Attribute::ParentalEducationLevel,
        Attribute::DistanceFromHome,
        Attribute::Gender,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Attribute::HoursStudied => "hours_studied",
            Attribute::Attendance => "attendance",
            Attribute::ParentalInvolvement => "parental_involvement",
            Attribute::AccessToResources => "access_to_resources",
            Attribute::ExtracurricularActivities => "extracurricular_activities",
            Attribute::SleepHours => "sleep_hours",
            Attribute::PreviousScores => "previous_scores",
            Attribute::MotivationLevel => "motivation_level",
            Attribute::InternetAccess => "internet_access",
            Attribute::TutoringSessions => "tutoring_sessions",
            Attribute::FamilyIncome => "family_income",
            Attribute::TeacherQuality => "teacher_quality",
            Attribute::SchoolType => "school_type",
            Attribute::PeerInfluence => "peer_influence",
            Attribute::PhysicalActivity => "physical_activity",
            Attribute::LearningDisabilities => "learning_disabilities",
            Attribute::ParentalEducationLevel => "parental_education_level",
            Attribute::DistanceFromHome => "distance_from_home",
            Attribute::Gender => "gender",
        }
    }

    /// Column header in the training dataset.
    pub fn feature_name(self) -> &'static str {
        match self {
            Attribute::HoursStudied => "Hours_Studied",
            Attribute::Attendance => "Attendance",
            Attribute::ParentalInvolvement => "Parental_Involvement",
            Attribute::AccessToResources => "Access_to_Resources",
            Attribute::ExtracurricularActivities => "Extracurricular_Activities",
            Attribute::SleepHours => "Sleep_Hours",
            Attribute::PreviousScores => "Previous_Scores",
            Attribute::MotivationLevel => "Motivation_Level",
            Attribute::InternetAccess => "Internet_Access",
            Attribute::TutoringSessions => "Tutoring_Sessions",
            Attribute::FamilyIncome => "Family_Income",
            Attribute::TeacherQuality => "Teacher_Quality",
            Attribute::SchoolType => "School_Type",
            Attribute::PeerInfluence => "Peer_Influence",
            Attribute::PhysicalActivity => "Physical_Activity",
            Attribute::LearningDisabilities => "Learning_Disabilities",
            Attribute::ParentalEducationLevel => "Parental_Education_Level",
            Attribute::DistanceFromHome => "Distance_from_Home",
            Attribute::Gender => "Gender",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Attribute::HoursStudied => "Study Hours (per week)",
            Attribute::Attendance => "Attendance (%)",
            Attribute::ParentalInvolvement => "Parental Involvement",
            Attribute::AccessToResources => "Access to Resources",
            Attribute::ExtracurricularActivities => "Extracurricular Activities",
            Attribute::SleepHours => "Sleep Hours (per day)",
            Attribute::PreviousScores => "Previous Exam Score",
            Attribute::MotivationLevel => "Motivation Level",
            Attribute::InternetAccess => "Internet Access",
            Attribute::TutoringSessions => "Tutoring Sessions (per month)",
            Attribute::FamilyIncome => "Family Income",
            Attribute::TeacherQuality => "Teacher Quality",
            Attribute::SchoolType => "School Type",
            Attribute::PeerInfluence => "Peer Influence",
            Attribute::PhysicalActivity => "Physical Activity (hours/week)",
            Attribute::LearningDisabilities => "Learning Disabilities",
            Attribute::ParentalEducationLevel => "Parental Education Level",
            Attribute::DistanceFromHome => "Distance from Home",
            Attribute::Gender => "Gender",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A fully normalized student profile. Every field is inside its domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub hours_studied: u8,
    pub attendance: u8,
    pub parental_involvement: Level,
    pub access_to_resources: Level,
    pub extracurricular_activities: YesNo,
    pub sleep_hours: u8,
    pub previous_scores: u8,
    pub motivation_level: Level,
    pub internet_access: YesNo,
    pub tutoring_sessions: u8,
    pub family_income: Level,
    pub teacher_quality: Level,
    pub school_type: SchoolType,
    pub peer_influence: PeerInfluence,
    pub physical_activity: u8,
    pub learning_disabilities: YesNo,
    pub parental_education_level: ParentalEducation,
    pub distance_from_home: Distance,
    pub gender: Gender,
}

/// A yes/no answer as the collection layer hands it over: a checkbox state
/// or an already canonical label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawFlag {
    Checked(bool),
    Label(YesNo),
}

impl<'de> Deserialize<'de> for RawFlag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RawFlagVisitor;

        impl<'de> Visitor<'de> for RawFlagVisitor {
            type Value = RawFlag;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a boolean or one of \"Yes\" / \"No\"")
            }

            fn visit_bool<E: de::Error>(self, value: bool) -> Result<RawFlag, E> {
                Ok(RawFlag::Checked(value))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<RawFlag, E> {
                match value {
                    "Yes" => Ok(RawFlag::Label(YesNo::Yes)),
                    "No" => Ok(RawFlag::Label(YesNo::No)),
                    "true" => Ok(RawFlag::Checked(true)),
                    "false" => Ok(RawFlag::Checked(false)),
                    other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
                }
            }
        }

        deserializer.deserialize_any(RawFlagVisitor)
    }
}

/// Attribute bag received from the collection layer, before normalization.
///
/// Field names accept both snake_case and the dataset column headers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawProfile {
    #[serde(alias = "Hours_Studied")]
    pub hours_studied: u8,
    #[serde(alias = "Attendance")]
    pub attendance: u8,
    #[serde(alias = "Parental_Involvement")]
    pub parental_involvement: Level,
    #[serde(alias = "Access_to_Resources")]
    pub access_to_resources: Level,
    #[serde(alias = "Extracurricular_Activities")]
    pub extracurricular_activities: RawFlag,
    #[serde(alias = "Sleep_Hours")]
    pub sleep_hours: u8,
    #[serde(alias = "Previous_Scores")]
    pub previous_scores: i64,
    #[serde(alias = "Motivation_Level")]
    pub motivation_level: Level,
    #[serde(alias = "Internet_Access")]
    pub internet_access: RawFlag,
    #[serde(alias = "Tutoring_Sessions")]
    pub tutoring_sessions: u8,
    #[serde(alias = "Family_Income")]
    pub family_income: Level,
    #[serde(alias = "Teacher_Quality")]
    pub teacher_quality: Level,
    #[serde(alias = "School_Type")]
    pub school_type: SchoolType,
    #[serde(alias = "Peer_Influence")]
    pub peer_influence: PeerInfluence,
    #[serde(alias = "Physical_Activity")]
    pub physical_activity: u8,
    #[serde(alias = "Learning_Disabilities")]
    pub learning_disabilities: RawFlag,
    #[serde(alias = "Parental_Education_Level")]
    pub parental_education_level: ParentalEducation,
    #[serde(alias = "Distance_from_Home")]
    pub distance_from_home: Distance,
    #[serde(alias = "Gender")]
    pub gender: Gender,
}

/// Predictor output after the one mandatory clamp into `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct PredictedScore(f64);

pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

pub fn clamp_score(raw: f64) -> f64 {
    raw.clamp(SCORE_MIN, SCORE_MAX)
}

impl PredictedScore {
    /// Returns `None` for NaN or infinite predictor output.
    pub fn from_raw(raw: f64) -> Option<Self> {
        if raw.is_finite() {
            Some(Self(clamp_score(raw)))
        } else {
            None
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for PredictedScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Critical,
    Improvement,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub attribute: Attribute,
    pub severity: Severity,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub score: PredictedScore,
    pub tier: crate::tier::PerformanceTier,
    pub suggestions: Vec<Suggestion>,
}

impl Assessment {
    pub fn is_fully_optimal(&self) -> bool {
        self.suggestions.is_empty()
    }
}

/// One assessed row of a batch, keyed by the caller's student identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntry {
    pub student: String,
    pub assessment: Assessment,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TierSummary {
    pub tier: crate::tier::PerformanceTier,
    pub count: usize,
    pub avg_score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSummary {
    pub attribute: Attribute,
    pub count: usize,
    pub critical: usize,
}
