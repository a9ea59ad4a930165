use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::models::{Assessment, AttributeSummary, BatchEntry, Severity, TierSummary};
use crate::predictor::FeatureVector;
use crate::rules::CATALOGUE;
use crate::tier::PerformanceTier;

pub const FULLY_OPTIMAL_MESSAGE: &str =
    "All evaluated factors are already at their optimal levels. Keep up the current habits.";

pub fn render_assessment(assessment: &Assessment) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "Predicted exam score: {}", assessment.score);
    let _ = writeln!(output, "Tier: {}", assessment.tier);
    let _ = writeln!(output, "{}", assessment.tier.headline());
    let _ = writeln!(output);

    if assessment.is_fully_optimal() {
        let _ = writeln!(output, "{FULLY_OPTIMAL_MESSAGE}");
        return output;
    }

    let _ = writeln!(output, "Suggestions:");
    for (index, suggestion) in assessment.suggestions.iter().enumerate() {
        let marker = match suggestion.severity {
            Severity::Critical => "!",
            Severity::Improvement => "+",
        };
        let _ = writeln!(
            output,
            "{}. [{}] {}: {}",
            index + 1,
            marker,
            suggestion.attribute.label(),
            suggestion.text
        );
    }

    output
}

/// The analysed input row, one `name: value` line per predictor column.
pub fn render_features(features: &FeatureVector) -> String {
    let width = features.names().map(str::len).max().unwrap_or(0);
    let mut output = String::new();

    let _ = writeln!(output, "Analysed student data:");
    for (name, value) in features.columns() {
        let _ = writeln!(output, "  {name:<width$}  {value}");
    }

    output
}

/// Tier counts in display order (Excellent first); empty tiers are kept.
pub fn summarize_tiers(entries: &[BatchEntry]) -> Vec<TierSummary> {
    PerformanceTier::ALL
        .iter()
        .map(|tier| {
            let scores: Vec<f64> = entries
                .iter()
                .filter(|entry| entry.assessment.tier == *tier)
                .map(|entry| entry.assessment.score.value())
                .collect();
            let count = scores.len();
            TierSummary {
                tier: *tier,
                count,
                avg_score: if count == 0 {
                    0.0
                } else {
                    scores.iter().sum::<f64>() / count as f64
                },
            }
        })
        .collect()
}

/// Attributes that drew suggestions, most frequent first. Ties keep catalogue order.
pub fn summarize_attributes(entries: &[BatchEntry]) -> Vec<AttributeSummary> {
    let mut summaries: Vec<AttributeSummary> = CATALOGUE
        .iter()
        .map(|rules| AttributeSummary {
            attribute: rules.attribute,
            count: 0,
            critical: 0,
        })
        .collect();

    for entry in entries {
        for suggestion in &entry.assessment.suggestions {
            if let Some(summary) = summaries
                .iter_mut()
                .find(|summary| summary.attribute == suggestion.attribute)
            {
                summary.count += 1;
                if suggestion.severity == Severity::Critical {
                    summary.critical += 1;
                }
            }
        }
    }

    summaries.retain(|summary| summary.count > 0);
    summaries.sort_by(|a, b| b.count.cmp(&a.count));
    summaries
}

pub fn build_report(source: &str, generated_at: DateTime<Utc>, entries: &[BatchEntry]) -> String {
    let tiers = summarize_tiers(entries);
    let attributes = summarize_attributes(entries);

    let mut output = String::new();

    let _ = writeln!(output, "# Exam Readiness Report");
    let _ = writeln!(
        output,
        "Generated for {} ({} students, {})",
        source,
        entries.len(),
        generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Tier Mix");

    if entries.is_empty() {
        let _ = writeln!(output, "No students assessed.");
    } else {
        for summary in tiers.iter() {
            let _ = writeln!(
                output,
                "- {}: {} students (avg score {:.1})",
                summary.tier, summary.count, summary.avg_score
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Most Frequent Focus Areas");

    if attributes.is_empty() {
        let _ = writeln!(output, "{FULLY_OPTIMAL_MESSAGE}");
    } else {
        for summary in attributes.iter() {
            let _ = writeln!(
                output,
                "- {}: {} students ({} critical)",
                summary.attribute.label(),
                summary.count,
                summary.critical
            );
        }
    }

    let mut lowest: Vec<&BatchEntry> = entries.iter().collect();
    lowest.sort_by(|a, b| {
        a.assessment
            .score
            .partial_cmp(&b.assessment.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let _ = writeln!(output);
    let _ = writeln!(output, "## Lowest Predicted Scores");

    if lowest.is_empty() {
        let _ = writeln!(output, "No students assessed.");
    } else {
        for entry in lowest.iter().take(10) {
            let _ = writeln!(
                output,
                "- {} scored {} ({}, {} suggestions)",
                entry.student,
                entry.assessment.score,
                entry.assessment.tier,
                entry.assessment.suggestions.len()
            );
        }
    }

    output
}
