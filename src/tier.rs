use std::fmt;

use serde::Serialize;

pub const EXCELLENT_FLOOR: f64 = 85.0;
pub const GOOD_FLOOR: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PerformanceTier {
    NeedsIntervention,
    Good,
    Excellent,
}

impl PerformanceTier {
    pub const ALL: [PerformanceTier; 3] = [
        PerformanceTier::Excellent,
        PerformanceTier::Good,
        PerformanceTier::NeedsIntervention,
    ];

    pub fn headline(self) -> &'static str {
        match self {
            PerformanceTier::Excellent => {
                "Excellent! The student is predicted to achieve a high score."
            }
            PerformanceTier::Good => {
                "Fairly good. The student is on a safe track. Recommendation: increase study hours or tutoring sessions."
            }
            PerformanceTier::NeedsIntervention => {
                "Needs intervention (early warning). The predicted score is low. An in-depth review of parental involvement and motivation is needed."
            }
        }
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PerformanceTier::Excellent => "Excellent",
            PerformanceTier::Good => "Good",
            PerformanceTier::NeedsIntervention => "Needs Intervention",
        };
        f.write_str(name)
    }
}

/// Maps a score onto the tier partition. NaN falls to `NeedsIntervention`.
pub fn classify(score: f64) -> PerformanceTier {
    if score >= EXCELLENT_FLOOR {
        PerformanceTier::Excellent
    } else if score >= GOOD_FLOOR {
        PerformanceTier::Good
    } else {
        PerformanceTier::NeedsIntervention
    }
}
