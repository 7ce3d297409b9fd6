//! Record command handler
//!
//! Builds a [`ShotForm`] from the flags (or the last draft with `--resume`)
//! and saves it. When the database write fails the form is kept as a JSON
//! draft next to the database so nothing typed is lost.

use super::open_store;
use crate::args::RecordArgs;
use shotlog::config::Config;
use shotlog::core::form::{save_shot, SaveError, ShotForm};
use shotlog::core::models::{ShotContext, ShotRecord};
use shotlog::{error, info, verbose, warn};
use std::path::{Path, PathBuf};

/// Where the draft of a failed save is kept
pub fn draft_path(config: &Config) -> PathBuf {
    config.database_path().with_extension("draft.json")
}

/// Run the record command.
pub fn run(args: &RecordArgs, config: &Config) {
    let draft = draft_path(config);
    let mut form = if args.resume {
        match ShotForm::load_draft(&draft) {
            Ok(form) => {
                info!("Resuming draft {}", draft.display());
                form
            }
            Err(e) => {
                eprintln!("✗ No draft to resume at {}: {e}", draft.display());
                std::process::exit(1);
            }
        }
    } else {
        ShotForm::with_preferences(config.mode(), config.distance_unit())
    };
    args.apply_to(&mut form);

    let Some(mut store) = open_store(config) else {
        keep_draft(&form, &draft);
        std::process::exit(1);
    };

    match save_shot(&mut store, &form) {
        Ok(record) => {
            info!("Saved shot {} ({})", record.id, record.club);
            println!("✓ Saved shot #{}: {}", record.id, describe(&record));
            verbose!(
                "  lie {}, wind {}, carry {:.1} yd",
                record.lie,
                record.wind,
                record.carry
            );
            if draft.exists() {
                if let Err(e) = std::fs::remove_file(&draft) {
                    warn!("Could not remove draft {}: {e}", draft.display());
                }
            }
            form.reset();
        }
        Err(SaveError::Form(e)) => {
            eprintln!("✗ Invalid input: {e}");
            std::process::exit(2);
        }
        Err(SaveError::Store(e)) => {
            error!("Failed to save shot: {e}");
            eprintln!("✗ Failed to save shot: {e}");
            keep_draft(&form, &draft);
            std::process::exit(1);
        }
    }
}

fn keep_draft(form: &ShotForm, draft: &Path) {
    match form.save_draft(draft) {
        Ok(()) => {
            eprintln!("  Input kept in {}", draft.display());
            eprintln!("  Retry with: shotlog record --resume");
        }
        Err(e) => {
            error!("Failed to write draft {}: {e}", draft.display());
            eprintln!("✗ Input could not be kept: {e}");
        }
    }
}

/// One-line summary of a stored shot
pub fn describe(record: &ShotRecord) -> String {
    let mut line = format!(
        "{} {:.1} yd, {} {}, {} → {}",
        record.club,
        record.distance,
        record.lateral_direction,
        record.inclination,
        record.expectation,
        record.actual
    );
    match &record.context {
        ShotContext::GolfCourse(course) => {
            line.push_str(&format!(
                ", hole {} (par {}, score {})",
                course.hole_number, course.par, course.score
            ));
        }
        ShotContext::DrivingRange(range) if range.target_distance > 0.0 => {
            line.push_str(&format!(", target {:.0} yd", range.target_distance));
        }
        ShotContext::DrivingRange(_) => {}
    }
    line
}
