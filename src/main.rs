use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use exam_advisor::assess::assess_detailed;
use exam_advisor::config::AppConfig;
use exam_advisor::models::{BatchEntry, RawProfile};
use exam_advisor::predictor::{self, FixedScore, LinearModel, Predictor};
use exam_advisor::{assess, import, report, rules, telemetry};

#[derive(Parser)]
#[command(name = "exam-advisor")]
#[command(about = "Predicted exam score tiers and targeted study suggestions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess a single student profile (JSON)
    Assess {
        #[arg(long)]
        profile: PathBuf,
        /// Use this predicted score instead of running the model
        #[arg(long, allow_negative_numbers = true)]
        score: Option<f64>,
        #[arg(long)]
        model: Option<PathBuf>,
        /// Print the assessment as JSON
        #[arg(long)]
        json: bool,
        /// Also print the analysed input row in predictor column order
        #[arg(long)]
        show_features: bool,
    },
    /// Assess every profile in a CSV file and write a markdown report
    Batch {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long)]
        model: Option<PathBuf>,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
    /// List the suggestion rules in evaluation order
    Rules,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load().context("invalid configuration")?;
    telemetry::init(&config.log_level)?;

    match cli.command {
        Commands::Assess {
            profile,
            score,
            model,
            json,
            show_features,
        } => {
            let raw = read_profile(&profile)?;
            match score {
                Some(value) => predictor::install_global(Box::new(FixedScore(value)))?,
                None => install_model(model.as_deref().unwrap_or(config.model_path.as_path()))?,
            }
            let detailed = assess_detailed(raw, global_predictor()?)?;

            match (json, show_features) {
                (true, true) => println!("{}", serde_json::to_string_pretty(&detailed)?),
                (true, false) => {
                    println!("{}", serde_json::to_string_pretty(&detailed.assessment)?)
                }
                (false, show) => {
                    print!("{}", report::render_assessment(&detailed.assessment));
                    if show {
                        println!();
                        print!("{}", report::render_features(&detailed.features));
                    }
                }
            }
        }
        Commands::Batch { csv, model, out } => {
            install_model(model.as_deref().unwrap_or(config.model_path.as_path()))?;
            let predictor = global_predictor()?;
            let profiles = import::read_profiles(&csv)?;

            let mut entries = Vec::with_capacity(profiles.len());
            for imported in profiles {
                let assessment = assess(imported.profile, predictor)
                    .with_context(|| format!("failed to assess {}", imported.student))?;
                entries.push(BatchEntry {
                    student: imported.student,
                    assessment,
                });
            }

            let source = csv.display().to_string();
            let output = report::build_report(&source, chrono::Utc::now(), &entries);
            std::fs::write(&out, output)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!(
                "Assessed {} students; report written to {}.",
                entries.len(),
                out.display()
            );
        }
        Commands::Rules => {
            for entry in rules::CATALOGUE {
                println!("{} [{}]", entry.attribute, entry.band);
                for branch in entry.branches {
                    println!("  {:?}: {}", branch.severity, branch.condition);
                }
            }
            println!();
            println!("Excluded:");
            for (attribute, reason) in rules::EXCLUDED {
                println!("  {attribute}: {reason}");
            }
        }
    }

    Ok(())
}

fn read_profile(path: &Path) -> anyhow::Result<RawProfile> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("{} is not a valid student profile", path.display()))
}

fn install_model(path: &Path) -> anyhow::Result<()> {
    let model = LinearModel::from_path(path)?;
    predictor::install_global(Box::new(model))?;
    info!(path = %path.display(), "predictor installed");
    Ok(())
}

fn global_predictor() -> anyhow::Result<&'static dyn Predictor> {
    predictor::global().context("no predictor installed")
}
