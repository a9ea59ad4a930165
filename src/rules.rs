use std::fmt;

use serde::Serialize;

use crate::models::{
    Attribute, Distance, Level, ParentalEducation, PeerInfluence, Severity, StudentProfile, YesNo,
};

/// Thematic group of catalogue entries. Declaration order is evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Band {
    AcademicHabit,
    EnvironmentalSupport,
    HealthBalance,
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Band::AcademicHabit => "Academic & Habits",
            Band::EnvironmentalSupport => "Environment & Support",
            Band::HealthBalance => "Health & Balance",
        };
        f.write_str(name)
    }
}

pub type Predicate = fn(&StudentProfile, f64) -> bool;

/// One arm of an attribute's if/elif chain.
#[derive(Clone, Copy)]
pub struct Branch {
    pub severity: Severity,
    /// Human-readable trigger, shown by the `rules` listing.
    pub condition: &'static str,
    pub predicate: Predicate,
    pub text: &'static str,
}

impl fmt::Debug for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Branch")
            .field("severity", &self.severity)
            .field("condition", &self.condition)
            .finish()
    }
}

/// All branches for a single attribute. At most one fires per evaluation.
#[derive(Debug, Clone, Copy)]
pub struct AttributeRules {
    pub attribute: Attribute,
    pub band: Band,
    pub branches: &'static [Branch],
}

impl AttributeRules {
    pub fn first_match(&self, profile: &StudentProfile, score: f64) -> Option<&'static Branch> {
        self.branches
            .iter()
            .find(|branch| (branch.predicate)(profile, score))
    }
}

/// Attributes deliberately left without any rule.
pub const EXCLUDED: [(Attribute, &str); 2] = [
    (
        Attribute::SchoolType,
        "not an actionable lever for the student",
    ),
    (
        Attribute::Gender,
        "demographic attribute; never a basis for advice",
    ),
];

pub static CATALOGUE: &[AttributeRules] = &[
    AttributeRules {
        attribute: Attribute::HoursStudied,
        band: Band::AcademicHabit,
        branches: &[
            Branch {
                severity: Severity::Critical,
                condition: "hours_studied < 15",
                predicate: hours_critical,
                text: "Study time is well below what is needed. Build a fixed weekly schedule that reaches at least 15 to 20 hours of self-study.",
            },
            Branch {
                severity: Severity::Improvement,
                condition: "15 <= hours_studied < 20 and score < 85",
                predicate: hours_improvement,
                text: "Study time is adequate but can grow. Add a few focused sessions a week to pass 20 hours.",
            },
        ],
    },
    AttributeRules {
        attribute: Attribute::Attendance,
        band: Band::AcademicHabit,
        branches: &[
            Branch {
                severity: Severity::Critical,
                condition: "attendance < 90",
                predicate: attendance_critical,
                text: "Attendance is below 90%. Missed lessons are a major risk; find out what keeps the student away from class and address it.",
            },
            Branch {
                severity: Severity::Improvement,
                condition: "90 <= attendance < 95 and score < 85",
                predicate: attendance_improvement,
                text: "Attendance is good. Aim for at least 95% so no material is missed.",
            },
        ],
    },
    AttributeRules {
        attribute: Attribute::PreviousScores,
        band: Band::AcademicHabit,
        branches: &[
            Branch {
                severity: Severity::Critical,
                condition: "previous_scores < 70",
                predicate: previous_critical,
                text: "Previous exam results are low. Review the topics from earlier exams to close foundational gaps.",
            },
            Branch {
                severity: Severity::Improvement,
                condition: "70 <= previous_scores < 80 and score < 80",
                predicate: previous_improvement,
                text: "Previous results are fair. Practice with past exam questions to push them above 80.",
            },
        ],
    },
    AttributeRules {
        attribute: Attribute::TutoringSessions,
        band: Band::AcademicHabit,
        branches: &[
            Branch {
                severity: Severity::Critical,
                condition: "tutoring_sessions == 0",
                predicate: tutoring_critical,
                text: "No tutoring sessions yet. Schedule at least one or two sessions a month on the weakest subjects.",
            },
            Branch {
                severity: Severity::Improvement,
                condition: "tutoring_sessions == 1 and score < 80",
                predicate: tutoring_improvement,
                text: "One tutoring session a month is a start. A second session would reinforce difficult material.",
            },
        ],
    },
    AttributeRules {
        attribute: Attribute::ParentalInvolvement,
        band: Band::EnvironmentalSupport,
        branches: &[
            Branch {
                severity: Severity::Critical,
                condition: "parental_involvement == Low",
                predicate: parental_critical,
                text: "Parental involvement is low. Set up regular check-ins between parents and the school about progress.",
            },
            Branch {
                severity: Severity::Improvement,
                condition: "parental_involvement == Medium and score < 85",
                predicate: parental_improvement,
                text: "Parents are moderately involved. Weekly conversations about study plans can strengthen that support.",
            },
        ],
    },
    AttributeRules {
        attribute: Attribute::AccessToResources,
        band: Band::EnvironmentalSupport,
        branches: &[
            Branch {
                severity: Severity::Critical,
                condition: "access_to_resources == Low",
                predicate: resources_critical,
                text: "Access to learning resources is limited. Use the school library, open courseware, and lending programs.",
            },
            Branch {
                severity: Severity::Improvement,
                condition: "access_to_resources == Medium and score < 85",
                predicate: resources_improvement,
                text: "Resources are available but limited. Add practice books or online material for the main subjects.",
            },
        ],
    },
    AttributeRules {
        attribute: Attribute::FamilyIncome,
        band: Band::EnvironmentalSupport,
        branches: &[Branch {
            severity: Severity::Critical,
            condition: "family_income == Low",
            predicate: income_critical,
            text: "Family income is low. Look into scholarships, fee waivers, and free tutoring programs.",
        }],
    },
    AttributeRules {
        attribute: Attribute::TeacherQuality,
        band: Band::EnvironmentalSupport,
        branches: &[
            Branch {
                severity: Severity::Critical,
                condition: "teacher_quality == Low",
                predicate: teacher_critical,
                text: "Teaching quality is rated low. Supplement class with tutoring or a study group led by a strong peer.",
            },
            Branch {
                severity: Severity::Improvement,
                condition: "teacher_quality == Medium and score < 80",
                predicate: teacher_improvement,
                text: "Teaching quality is average. Ask teachers for extra consultation time on difficult topics.",
            },
        ],
    },
    AttributeRules {
        attribute: Attribute::ParentalEducationLevel,
        band: Band::EnvironmentalSupport,
        branches: &[Branch {
            severity: Severity::Improvement,
            condition: "parental_education_level == High School and score < 70",
            predicate: parental_education_improvement,
            text: "Academic help at home may be limited. Connect the student with a mentor or after-school homework club.",
        }],
    },
    AttributeRules {
        attribute: Attribute::PeerInfluence,
        band: Band::EnvironmentalSupport,
        branches: &[
            Branch {
                severity: Severity::Critical,
                condition: "peer_influence == Negative",
                predicate: peer_critical,
                text: "Peer influence is negative. Encourage joining study groups or clubs with motivated classmates.",
            },
            Branch {
                severity: Severity::Improvement,
                condition: "peer_influence == Neutral and score < 80",
                predicate: peer_improvement,
                text: "Peer influence is neutral. Studying with high-performing friends could lift motivation.",
            },
        ],
    },
    AttributeRules {
        attribute: Attribute::DistanceFromHome,
        band: Band::EnvironmentalSupport,
        branches: &[
            Branch {
                severity: Severity::Critical,
                condition: "distance_from_home == Far",
                predicate: distance_critical,
                text: "The commute is long. Use travel time for light review and plan for rest so fatigue does not pile up.",
            },
            Branch {
                severity: Severity::Improvement,
                condition: "distance_from_home == Moderate and score < 80",
                predicate: distance_improvement,
                text: "The commute is moderate. Organize the day so travel does not eat into study time.",
            },
        ],
    },
    AttributeRules {
        attribute: Attribute::InternetAccess,
        band: Band::EnvironmentalSupport,
        branches: &[Branch {
            severity: Severity::Critical,
            condition: "internet_access == No",
            predicate: internet_critical,
            text: "No internet access at home. Use school or public library connections to reach online learning material.",
        }],
    },
    AttributeRules {
        attribute: Attribute::LearningDisabilities,
        band: Band::EnvironmentalSupport,
        branches: &[Branch {
            severity: Severity::Critical,
            condition: "learning_disabilities == Yes",
            predicate: disability_critical,
            text: "A learning disability is reported. Coordinate with a school counselor for accommodations and adapted study methods.",
        }],
    },
    AttributeRules {
        attribute: Attribute::MotivationLevel,
        band: Band::HealthBalance,
        branches: &[
            Branch {
                severity: Severity::Critical,
                condition: "motivation_level == Low",
                predicate: motivation_critical,
                text: "Motivation is low. Set small, concrete goals and reward progress; a counseling session may help find the cause.",
            },
            Branch {
                severity: Severity::Improvement,
                condition: "motivation_level == Medium and score < 85",
                predicate: motivation_improvement,
                text: "Motivation is moderate. Link study targets to personal goals to keep momentum.",
            },
        ],
    },
    AttributeRules {
        attribute: Attribute::SleepHours,
        band: Band::HealthBalance,
        branches: &[
            Branch {
                severity: Severity::Critical,
                condition: "sleep_hours < 6",
                predicate: sleep_deficient,
                text: "Sleep is too short. Aim for 7 to 9 hours a night; lack of sleep hurts concentration and memory.",
            },
            Branch {
                severity: Severity::Improvement,
                condition: "sleep_hours == 6",
                predicate: sleep_borderline,
                text: "Sleep is at the minimum. One more hour a night would improve focus during class.",
            },
            Branch {
                severity: Severity::Improvement,
                condition: "sleep_hours > 9",
                predicate: sleep_excessive,
                text: "Sleep exceeds 9 hours. Keep a regular schedule of 7 to 9 hours and check for underlying fatigue.",
            },
        ],
    },
    AttributeRules {
        attribute: Attribute::PhysicalActivity,
        band: Band::HealthBalance,
        branches: &[
            Branch {
                severity: Severity::Critical,
                condition: "physical_activity < 2",
                predicate: activity_critical,
                text: "Physical activity is very low. At least 2 to 3 hours of exercise a week supports focus and health.",
            },
            Branch {
                severity: Severity::Improvement,
                condition: "physical_activity == 2 and score < 85",
                predicate: activity_improvement,
                text: "Physical activity is close to the recommended level. Add one more hour of exercise a week.",
            },
        ],
    },
    AttributeRules {
        attribute: Attribute::ExtracurricularActivities,
        band: Band::HealthBalance,
        branches: &[Branch {
            severity: Severity::Improvement,
            condition: "extracurricular_activities == No and score > 70",
            predicate: extracurricular_improvement,
            text: "Academics are on track. Joining an extracurricular activity would build soft skills and balance.",
        }],
    },
];

fn hours_critical(p: &StudentProfile, _: f64) -> bool {
    p.hours_studied < 15
}

fn hours_improvement(p: &StudentProfile, score: f64) -> bool {
    (15..20).contains(&p.hours_studied) && score < 85.0
}

fn attendance_critical(p: &StudentProfile, _: f64) -> bool {
    p.attendance < 90
}

fn attendance_improvement(p: &StudentProfile, score: f64) -> bool {
    (90..95).contains(&p.attendance) && score < 85.0
}

fn previous_critical(p: &StudentProfile, _: f64) -> bool {
    p.previous_scores < 70
}

fn previous_improvement(p: &StudentProfile, score: f64) -> bool {
    (70..80).contains(&p.previous_scores) && score < 80.0
}

fn tutoring_critical(p: &StudentProfile, _: f64) -> bool {
    p.tutoring_sessions == 0
}

fn tutoring_improvement(p: &StudentProfile, score: f64) -> bool {
    p.tutoring_sessions == 1 && score < 80.0
}

fn parental_critical(p: &StudentProfile, _: f64) -> bool {
    p.parental_involvement == Level::Low
}

fn parental_improvement(p: &StudentProfile, score: f64) -> bool {
    p.parental_involvement == Level::Medium && score < 85.0
}

fn resources_critical(p: &StudentProfile, _: f64) -> bool {
    p.access_to_resources == Level::Low
}

fn resources_improvement(p: &StudentProfile, score: f64) -> bool {
    p.access_to_resources == Level::Medium && score < 85.0
}

fn income_critical(p: &StudentProfile, _: f64) -> bool {
    p.family_income == Level::Low
}

fn teacher_critical(p: &StudentProfile, _: f64) -> bool {
    p.teacher_quality == Level::Low
}

fn teacher_improvement(p: &StudentProfile, score: f64) -> bool {
    p.teacher_quality == Level::Medium && score < 80.0
}

fn parental_education_improvement(p: &StudentProfile, score: f64) -> bool {
    p.parental_education_level == ParentalEducation::HighSchool && score < 70.0
}

fn peer_critical(p: &StudentProfile, _: f64) -> bool {
    p.peer_influence == PeerInfluence::Negative
}

fn peer_improvement(p: &StudentProfile, score: f64) -> bool {
    p.peer_influence == PeerInfluence::Neutral && score < 80.0
}

fn distance_critical(p: &StudentProfile, _: f64) -> bool {
    p.distance_from_home == Distance::Far
}

fn distance_improvement(p: &StudentProfile, score: f64) -> bool {
    p.distance_from_home == Distance::Moderate && score < 80.0
}

fn internet_critical(p: &StudentProfile, _: f64) -> bool {
    p.internet_access == YesNo::No
}

fn disability_critical(p: &StudentProfile, _: f64) -> bool {
    p.learning_disabilities == YesNo::Yes
}

fn motivation_critical(p: &StudentProfile, _: f64) -> bool {
    p.motivation_level == Level::Low
}

fn motivation_improvement(p: &StudentProfile, score: f64) -> bool {
    p.motivation_level == Level::Medium && score < 85.0
}

// Sleep is U-shaped: 7..=9 is the only quiet band.
fn sleep_deficient(p: &StudentProfile, _: f64) -> bool {
    p.sleep_hours < 6
}

fn sleep_borderline(p: &StudentProfile, _: f64) -> bool {
    p.sleep_hours == 6
}

fn sleep_excessive(p: &StudentProfile, _: f64) -> bool {
    p.sleep_hours > 9
}

fn activity_critical(p: &StudentProfile, _: f64) -> bool {
    p.physical_activity < 2
}

fn activity_improvement(p: &StudentProfile, score: f64) -> bool {
    p.physical_activity == 2 && score < 85.0
}

fn extracurricular_improvement(p: &StudentProfile, score: f64) -> bool {
    p.extracurricular_activities == YesNo::No && score > 70.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::favorable_profile;

    fn rules_for(attribute: Attribute) -> Option<&'static AttributeRules> {
        CATALOGUE.iter().find(|rules| rules.attribute == attribute)
    }

    fn fired(attribute: Attribute, profile: &StudentProfile, score: f64) -> Option<&'static str> {
        rules_for(attribute)
            .and_then(|rules| rules.first_match(profile, score))
            .map(|branch| branch.condition)
    }

    #[test]
    fn every_attribute_is_catalogued_or_excluded() {
        for attribute in Attribute::FEATURE_ORDER {
            let catalogued = rules_for(attribute).is_some();
            let excluded = EXCLUDED.iter().any(|(a, _)| *a == attribute);
            assert!(
                catalogued ^ excluded,
                "{attribute} must be either catalogued or excluded"
            );
        }
        assert_eq!(CATALOGUE.len(), 17);
    }

    #[test]
    fn catalogue_bands_are_contiguous() {
        let bands: Vec<Band> = CATALOGUE.iter().map(|rules| rules.band).collect();
        let first_support = bands
            .iter()
            .position(|b| *b == Band::EnvironmentalSupport)
            .expect("support band present");
        let first_health = bands
            .iter()
            .position(|b| *b == Band::HealthBalance)
            .expect("health band present");
        assert!(bands[..first_support].iter().all(|b| *b == Band::AcademicHabit));
        assert!(bands[first_support..first_health]
            .iter()
            .all(|b| *b == Band::EnvironmentalSupport));
        assert!(bands[first_health..].iter().all(|b| *b == Band::HealthBalance));
    }

    #[test]
    fn hours_studied_bands() {
        let mut profile = favorable_profile();
        profile.hours_studied = 14;
        assert_eq!(fired(Attribute::HoursStudied, &profile, 90.0), Some("hours_studied < 15"));
        profile.hours_studied = 15;
        assert_eq!(
            fired(Attribute::HoursStudied, &profile, 84.9),
            Some("15 <= hours_studied < 20 and score < 85")
        );
        assert_eq!(fired(Attribute::HoursStudied, &profile, 85.0), None);
        profile.hours_studied = 20;
        assert_eq!(fired(Attribute::HoursStudied, &profile, 10.0), None);
    }

    #[test]
    fn attendance_edges() {
        let mut profile = favorable_profile();
        profile.attendance = 89;
        assert_eq!(fired(Attribute::Attendance, &profile, 99.0), Some("attendance < 90"));
        profile.attendance = 90;
        assert_eq!(
            fired(Attribute::Attendance, &profile, 84.9),
            Some("90 <= attendance < 95 and score < 85")
        );
        assert_eq!(fired(Attribute::Attendance, &profile, 85.0), None);
        profile.attendance = 95;
        assert_eq!(fired(Attribute::Attendance, &profile, 10.0), None);
    }

    #[test]
    fn previous_scores_edges() {
        let mut profile = favorable_profile();
        profile.previous_scores = 69;
        assert_eq!(fired(Attribute::PreviousScores, &profile, 99.0), Some("previous_scores < 70"));
        profile.previous_scores = 70;
        assert_eq!(
            fired(Attribute::PreviousScores, &profile, 79.9),
            Some("70 <= previous_scores < 80 and score < 80")
        );
        assert_eq!(fired(Attribute::PreviousScores, &profile, 80.0), None);
        profile.previous_scores = 80;
        assert_eq!(fired(Attribute::PreviousScores, &profile, 10.0), None);
    }

    #[test]
    fn access_to_resources_levels() {
        let mut profile = favorable_profile();
        profile.access_to_resources = Level::Low;
        assert_eq!(
            fired(Attribute::AccessToResources, &profile, 99.0),
            Some("access_to_resources == Low")
        );
        profile.access_to_resources = Level::Medium;
        assert_eq!(
            fired(Attribute::AccessToResources, &profile, 84.9),
            Some("access_to_resources == Medium and score < 85")
        );
        assert_eq!(fired(Attribute::AccessToResources, &profile, 85.0), None);
        profile.access_to_resources = Level::High;
        assert_eq!(fired(Attribute::AccessToResources, &profile, 10.0), None);
    }

    #[test]
    fn family_income_only_flags_low() {
        let mut profile = favorable_profile();
        profile.family_income = Level::Low;
        assert_eq!(fired(Attribute::FamilyIncome, &profile, 99.0), Some("family_income == Low"));
        profile.family_income = Level::Medium;
        assert_eq!(fired(Attribute::FamilyIncome, &profile, 10.0), None);
        profile.family_income = Level::High;
        assert_eq!(fired(Attribute::FamilyIncome, &profile, 10.0), None);
    }

    #[test]
    fn teacher_quality_levels() {
        let mut profile = favorable_profile();
        profile.teacher_quality = Level::Low;
        assert_eq!(fired(Attribute::TeacherQuality, &profile, 99.0), Some("teacher_quality == Low"));
        profile.teacher_quality = Level::Medium;
        assert_eq!(
            fired(Attribute::TeacherQuality, &profile, 79.9),
            Some("teacher_quality == Medium and score < 80")
        );
        assert_eq!(fired(Attribute::TeacherQuality, &profile, 80.0), None);
    }

    #[test]
    fn parental_education_gated_below_seventy() {
        let mut profile = favorable_profile();
        profile.parental_education_level = ParentalEducation::HighSchool;
        assert_eq!(
            fired(Attribute::ParentalEducationLevel, &profile, 69.9),
            Some("parental_education_level == High School and score < 70")
        );
        assert_eq!(fired(Attribute::ParentalEducationLevel, &profile, 70.0), None);
        profile.parental_education_level = ParentalEducation::College;
        assert_eq!(fired(Attribute::ParentalEducationLevel, &profile, 10.0), None);
    }

    #[test]
    fn peer_influence_levels() {
        let mut profile = favorable_profile();
        profile.peer_influence = PeerInfluence::Negative;
        assert_eq!(
            fired(Attribute::PeerInfluence, &profile, 99.0),
            Some("peer_influence == Negative")
        );
        profile.peer_influence = PeerInfluence::Neutral;
        assert_eq!(
            fired(Attribute::PeerInfluence, &profile, 79.9),
            Some("peer_influence == Neutral and score < 80")
        );
        assert_eq!(fired(Attribute::PeerInfluence, &profile, 80.0), None);
        profile.peer_influence = PeerInfluence::Positive;
        assert_eq!(fired(Attribute::PeerInfluence, &profile, 10.0), None);
    }

    #[test]
    fn distance_from_home_levels() {
        let mut profile = favorable_profile();
        profile.distance_from_home = Distance::Far;
        assert_eq!(
            fired(Attribute::DistanceFromHome, &profile, 99.0),
            Some("distance_from_home == Far")
        );
        profile.distance_from_home = Distance::Moderate;
        assert_eq!(
            fired(Attribute::DistanceFromHome, &profile, 79.9),
            Some("distance_from_home == Moderate and score < 80")
        );
        assert_eq!(fired(Attribute::DistanceFromHome, &profile, 80.0), None);
        profile.distance_from_home = Distance::Near;
        assert_eq!(fired(Attribute::DistanceFromHome, &profile, 10.0), None);
    }

    #[test]
    fn motivation_levels() {
        let mut profile = favorable_profile();
        profile.motivation_level = Level::Low;
        assert_eq!(fired(Attribute::MotivationLevel, &profile, 99.0), Some("motivation_level == Low"));
        profile.motivation_level = Level::Medium;
        assert_eq!(
            fired(Attribute::MotivationLevel, &profile, 84.9),
            Some("motivation_level == Medium and score < 85")
        );
        assert_eq!(fired(Attribute::MotivationLevel, &profile, 85.0), None);
    }

    #[test]
    fn physical_activity_edges() {
        let mut profile = favorable_profile();
        profile.physical_activity = 1;
        assert_eq!(fired(Attribute::PhysicalActivity, &profile, 99.0), Some("physical_activity < 2"));
        profile.physical_activity = 2;
        assert_eq!(
            fired(Attribute::PhysicalActivity, &profile, 84.0),
            Some("physical_activity == 2 and score < 85")
        );
        assert_eq!(fired(Attribute::PhysicalActivity, &profile, 85.0), None);
        profile.physical_activity = 3;
        assert_eq!(fired(Attribute::PhysicalActivity, &profile, 10.0), None);
    }

    #[test]
    fn favorable_edges_stay_quiet_at_eighty_five() {
        let mut profile = favorable_profile();
        profile.hours_studied = 20;
        profile.attendance = 95;
        profile.physical_activity = 3;
        for hours in [7, 9] {
            profile.sleep_hours = hours;
            let fired_any = CATALOGUE
                .iter()
                .any(|rules| rules.first_match(&profile, 85.0).is_some());
            assert!(!fired_any, "{hours}h sleep should not fire any rule");
        }
    }

    #[test]
    fn attendance_and_previous_scores_use_their_own_ceilings() {
        let mut profile = favorable_profile();
        profile.attendance = 92;
        profile.previous_scores = 75;
        assert!(fired(Attribute::Attendance, &profile, 82.0).is_some());
        assert!(fired(Attribute::PreviousScores, &profile, 82.0).is_none());
        assert!(fired(Attribute::PreviousScores, &profile, 79.9).is_some());
    }

    #[test]
    fn tutoring_distinguishes_none_from_one() {
        let mut profile = favorable_profile();
        profile.tutoring_sessions = 0;
        assert_eq!(
            fired(Attribute::TutoringSessions, &profile, 95.0),
            Some("tutoring_sessions == 0")
        );
        profile.tutoring_sessions = 1;
        assert!(fired(Attribute::TutoringSessions, &profile, 79.0).is_some());
        assert!(fired(Attribute::TutoringSessions, &profile, 80.0).is_none());
    }

    #[test]
    fn sleep_is_u_shaped() {
        let mut profile = favorable_profile();
        let cases = [
            (4, Some("sleep_hours < 6")),
            (5, Some("sleep_hours < 6")),
            (6, Some("sleep_hours == 6")),
            (7, None),
            (9, None),
            (10, Some("sleep_hours > 9")),
        ];
        for (hours, expected) in cases {
            profile.sleep_hours = hours;
            assert_eq!(fired(Attribute::SleepHours, &profile, 95.0), expected, "{hours}h");
        }
    }

    #[test]
    fn binary_attributes_fire_on_unfavorable_label() {
        let mut profile = favorable_profile();
        profile.internet_access = YesNo::No;
        profile.learning_disabilities = YesNo::Yes;
        assert!(fired(Attribute::InternetAccess, &profile, 99.0).is_some());
        assert!(fired(Attribute::LearningDisabilities, &profile, 99.0).is_some());
    }

    #[test]
    fn extracurricular_only_raised_for_students_above_seventy() {
        let mut profile = favorable_profile();
        profile.extracurricular_activities = YesNo::No;
        assert!(fired(Attribute::ExtracurricularActivities, &profile, 70.0).is_none());
        assert!(fired(Attribute::ExtracurricularActivities, &profile, 70.1).is_some());
    }

    #[test]
    fn ordinal_medium_is_gated_by_score() {
        let mut profile = favorable_profile();
        profile.parental_involvement = Level::Medium;
        profile.teacher_quality = Level::Medium;
        assert!(fired(Attribute::ParentalInvolvement, &profile, 82.0).is_some());
        assert!(fired(Attribute::TeacherQuality, &profile, 82.0).is_none());
        assert!(fired(Attribute::ParentalInvolvement, &profile, 85.0).is_none());
    }
}
