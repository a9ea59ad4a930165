use tracing::debug;

use crate::models::{StudentProfile, Suggestion};
use crate::rules::CATALOGUE;

/// Runs the rule catalogue in order. An empty result means every evaluated
/// factor is already at its optimal level.
pub fn suggest(profile: &StudentProfile, score: f64) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    for rules in CATALOGUE {
        if let Some(branch) = rules.first_match(profile, score) {
            debug!(
                attribute = %rules.attribute,
                severity = ?branch.severity,
                condition = branch.condition,
                "suggestion rule fired"
            );
            suggestions.push(Suggestion {
                attribute: rules.attribute,
                severity: branch.severity,
                text: branch.text.to_string(),
            });
        }
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Attribute, Distance, Level, ParentalEducation, PeerInfluence, Severity, YesNo,
    };
    use crate::testing::favorable_profile;

    #[test]
    fn optimal_profile_with_high_score_yields_nothing() {
        let profile = favorable_profile();
        assert!(suggest(&profile, 85.0).is_empty());
        assert!(suggest(&profile, 100.0).is_empty());
    }

    #[test]
    fn optimal_profile_stays_quiet_even_with_low_score() {
        let profile = favorable_profile();
        assert!(suggest(&profile, 40.0).is_empty());
    }

    #[test]
    fn favorable_edges_yield_nothing_at_eighty_five() {
        let mut profile = favorable_profile();
        profile.hours_studied = 20;
        profile.attendance = 95;
        for hours in [7, 9] {
            profile.sleep_hours = hours;
            assert_eq!(suggest(&profile, 85.0), Vec::new(), "sleep {hours}");
        }
    }

    #[test]
    fn low_study_hours_leads_with_critical_advice() {
        let mut profile = favorable_profile();
        profile.hours_studied = 10;

        let suggestions = suggest(&profile, 60.0);

        let first = suggestions.first().expect("at least one suggestion");
        assert_eq!(first.attribute, Attribute::HoursStudied);
        assert_eq!(first.severity, Severity::Critical);
        assert_eq!(
            suggestions
                .iter()
                .filter(|s| s.attribute == Attribute::HoursStudied)
                .count(),
            1
        );
    }

    #[test]
    fn at_most_one_suggestion_per_attribute() {
        let mut profile = favorable_profile();
        profile.hours_studied = 0;
        profile.attendance = 50;
        profile.previous_scores = 0;
        profile.tutoring_sessions = 0;
        profile.parental_involvement = Level::Low;
        profile.access_to_resources = Level::Low;
        profile.family_income = Level::Low;
        profile.teacher_quality = Level::Low;
        profile.parental_education_level = ParentalEducation::HighSchool;
        profile.peer_influence = PeerInfluence::Negative;
        profile.distance_from_home = Distance::Far;
        profile.internet_access = YesNo::No;
        profile.learning_disabilities = YesNo::Yes;
        profile.motivation_level = Level::Low;
        profile.sleep_hours = 4;
        profile.physical_activity = 0;
        profile.extracurricular_activities = YesNo::No;

        let suggestions = suggest(&profile, 50.0);

        let mut attributes: Vec<Attribute> = suggestions.iter().map(|s| s.attribute).collect();
        let total = attributes.len();
        attributes.sort();
        attributes.dedup();
        assert_eq!(attributes.len(), total);
        // extracurricular is gated on score > 70
        assert_eq!(total, 16);
    }

    #[test]
    fn output_is_stable_across_calls() {
        let mut profile = favorable_profile();
        profile.attendance = 91;
        profile.motivation_level = Level::Medium;
        profile.sleep_hours = 10;

        let first = suggest(&profile, 72.5);
        for _ in 0..5 {
            assert_eq!(suggest(&profile, 72.5), first);
        }
        let order: Vec<Attribute> = first.iter().map(|s| s.attribute).collect();
        assert_eq!(
            order,
            vec![
                Attribute::Attendance,
                Attribute::MotivationLevel,
                Attribute::SleepHours
            ]
        );
    }
}
