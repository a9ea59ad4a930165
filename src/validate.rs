use crate::error::ValidationError;
use crate::models::{RawFlag, RawProfile, StudentProfile, YesNo};

/// Checks the previous exam score and folds checkbox answers into labels.
///
/// Other fields are bounded by the collection layer and pass through as-is.
pub fn normalize(raw: RawProfile) -> Result<StudentProfile, ValidationError> {
    let previous_scores = check_previous_scores(raw.previous_scores)?;

    Ok(StudentProfile {
        hours_studied: raw.hours_studied,
        attendance: raw.attendance,
        parental_involvement: raw.parental_involvement,
        access_to_resources: raw.access_to_resources,
        extracurricular_activities: flag_to_label(raw.extracurricular_activities),
        sleep_hours: raw.sleep_hours,
        previous_scores,
        motivation_level: raw.motivation_level,
        internet_access: flag_to_label(raw.internet_access),
        tutoring_sessions: raw.tutoring_sessions,
        family_income: raw.family_income,
        teacher_quality: raw.teacher_quality,
        school_type: raw.school_type,
        peer_influence: raw.peer_influence,
        physical_activity: raw.physical_activity,
        learning_disabilities: flag_to_label(raw.learning_disabilities),
        parental_education_level: raw.parental_education_level,
        distance_from_home: raw.distance_from_home,
        gender: raw.gender,
    })
}

fn check_previous_scores(value: i64) -> Result<u8, ValidationError> {
    match value {
        0..=100 => Ok(value as u8),
        _ => Err(ValidationError::PreviousScoresOutOfRange { value }),
    }
}

pub fn flag_to_label(flag: RawFlag) -> YesNo {
    match flag {
        RawFlag::Checked(checked) => YesNo::from(checked),
        RawFlag::Label(label) => label,
    }
}
