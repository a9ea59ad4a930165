use crate::models::{
    Distance, Gender, Level, ParentalEducation, PeerInfluence, SchoolType, StudentProfile, YesNo,
};

/// Every attribute at its most favorable value.
pub(crate) fn favorable_profile() -> StudentProfile {
    StudentProfile {
        hours_studied: 24,
        attendance: 97,
        parental_involvement: Level::High,
        access_to_resources: Level::High,
        extracurricular_activities: YesNo::Yes,
        sleep_hours: 8,
        previous_scores: 88,
        motivation_level: Level::High,
        internet_access: YesNo::Yes,
        tutoring_sessions: 3,
        family_income: Level::High,
        teacher_quality: Level::High,
        school_type: SchoolType::Public,
        peer_influence: PeerInfluence::Positive,
        physical_activity: 4,
        learning_disabilities: YesNo::No,
        parental_education_level: ParentalEducation::Postgraduate,
        distance_from_home: Distance::Near,
        gender: Gender::Male,
    }
}
