//! CLI argument definitions for `shotlog`

use clap::{builder::BoolishValueParser, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use shotlog::config::ConfigOverrides;
use shotlog::core::form::ShotForm;
use shotlog::core::models::{
    Club, DistanceUnit, GreenSpeed, Inclination, LateralDirection, Lie, Mode, PinPosition,
    PracticeType, ShotShape, Wind,
};
use shotlog::logger::Level;

/// CLI log level argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    Get {
        /// Optional configuration key (e.g., `level`, `database`, `distance_unit`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

/// Flags of the `record` command. Unset flags keep the form's current value.
#[derive(Debug, Default, Args)]
pub struct RecordArgs {
    /// Club used (e.g. "Driver", "7 Iron", "PW")
    #[arg(long)]
    pub club: Option<Club>,

    /// Horizontal direction: left, center, right
    #[arg(long)]
    pub lateral: Option<LateralDirection>,

    /// Vertical direction: low, center, high
    #[arg(long)]
    pub inclination: Option<Inclination>,

    /// Intended shape: straight, fade, draw, slice, hook
    #[arg(long = "expect", value_name = "SHAPE")]
    pub expectation: Option<ShotShape>,

    /// Observed shape
    #[arg(long, value_name = "SHAPE")]
    pub actual: Option<ShotShape>,

    /// Total distance
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub distance: Option<String>,

    /// Unit of --distance (yards or meters)
    #[arg(long, value_name = "UNIT")]
    pub distance_unit: Option<DistanceUnit>,

    /// Carry distance
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub carry: Option<String>,

    /// Unit of --carry
    #[arg(long, value_name = "UNIT")]
    pub carry_unit: Option<DistanceUnit>,

    /// Lie: fairway, rough, sand, tee box
    #[arg(long)]
    pub lie: Option<Lie>,

    /// Wind, e.g. "light head" or "cross left"
    #[arg(long)]
    pub wind: Option<Wind>,

    /// Free-text notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Record an on-course shot
    #[arg(long, conflicts_with = "range")]
    pub course: bool,

    /// Record a driving range shot
    #[arg(long)]
    pub range: bool,

    /// Hole number (1-18)
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub hole: Option<String>,

    /// Par of the hole (3-5)
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub par: Option<String>,

    /// Strokes taken on the hole
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub score: Option<String>,

    /// Pin position: front, middle, back
    #[arg(long)]
    pub pin: Option<PinPosition>,

    /// Green speed: slow, medium, fast
    #[arg(long)]
    pub green_speed: Option<GreenSpeed>,

    /// Practice type, e.g. "target practice"
    #[arg(long)]
    pub practice_type: Option<PracticeType>,

    /// Target distance for range practice
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub target: Option<String>,

    /// Unit of --target
    #[arg(long, value_name = "UNIT")]
    pub target_unit: Option<DistanceUnit>,

    /// Start from the draft kept after a failed save
    #[arg(long)]
    pub resume: bool,
}

impl RecordArgs {
    /// Overlay the given flags onto `form`.
    pub fn apply_to(&self, form: &mut ShotForm) {
        fn set<T: Clone>(slot: &mut T, value: Option<&T>) {
            if let Some(value) = value {
                slot.clone_from(value);
            }
        }

        set(&mut form.club, self.club.as_ref());
        set(&mut form.lateral_direction, self.lateral.as_ref());
        set(&mut form.inclination, self.inclination.as_ref());
        set(&mut form.expectation, self.expectation.as_ref());
        set(&mut form.actual, self.actual.as_ref());
        set(&mut form.distance, self.distance.as_ref());
        set(&mut form.distance_unit, self.distance_unit.as_ref());
        set(&mut form.carry, self.carry.as_ref());
        set(&mut form.carry_unit, self.carry_unit.as_ref());
        set(&mut form.lie, self.lie.as_ref());
        set(&mut form.wind, self.wind.as_ref());
        set(&mut form.notes, self.notes.as_ref());
        set(&mut form.hole_number, self.hole.as_ref());
        set(&mut form.par, self.par.as_ref());
        set(&mut form.score, self.score.as_ref());
        set(&mut form.pin_position, self.pin.as_ref());
        set(&mut form.green_speed, self.green_speed.as_ref());
        set(&mut form.practice_type, self.practice_type.as_ref());
        set(&mut form.target_distance, self.target.as_ref());
        set(&mut form.target_unit, self.target_unit.as_ref());

        if self.course {
            form.mode = Mode::GolfCourse;
        } else if self.range {
            form.mode = Mode::DrivingRange;
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Record a shot.
    ///
    /// Unset fields take the record form defaults. Distances are stored in yards.
    Record(RecordArgs),
    /// List recorded shots, newest first.
    List {
        /// Only shots from this mode (range or course)
        #[arg(long)]
        mode: Option<Mode>,

        /// Only shots with this club
        #[arg(long)]
        club: Option<Club>,

        /// Maximum number of shots to show
        #[arg(short = 'n', long, default_value_t = 20)]
        limit: usize,

        /// Show every shot
        #[arg(long, conflicts_with = "limit")]
        all: bool,

        /// Oldest shots first
        #[arg(long)]
        oldest_first: bool,
    },
    /// Show statistics over all recorded shots.
    Stats {
        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a statistics report.
    Report {
        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "markdown")]
        format: String,

        /// Output file path (defaults to the configured reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report title
        #[arg(long, default_value = "Shot Report")]
        title: String,
    },
    /// Export every shot to CSV or JSON.
    Export {
        /// Export format: csv or json
        #[arg(short, long, value_name = "FORMAT", default_value = "csv")]
        format: String,

        /// Output file path, or `-` for stdout (defaults to the configured exports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Import shots from a JSON export of any schema version.
    Import {
        /// JSON file written by `export --format json`
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Explain golf terms and the options of each field.
    Glossary {
        /// Field to describe (e.g. club, lie, wind); omit for the full glossary
        #[arg(value_name = "FIELD")]
        field: Option<String>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "shotlog",
    about = "Log golf shots and review your statistics",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config database path
    #[arg(long = "config-database", value_name = "PATH")]
    pub config_database: Option<PathBuf>,

    /// Override config database path (short form)
    #[arg(long = "db", value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Override config exports directory
    #[arg(long = "config-exports-dir", value_name = "DIR")]
    pub config_exports_dir: Option<PathBuf>,

    /// Override config exports directory (short form)
    #[arg(long = "exports-dir", value_name = "DIR")]
    pub exports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

fn path_string(path: Option<&PathBuf>) -> Option<String> {
    path.map(|p| p.to_string_lossy().to_string())
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--db`) take precedence over long-form flags
    /// (e.g., `--config-database`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: path_string(self.config_log_file.as_ref()),
            verbose: self.config_verbose,
            database: path_string(self.db.as_ref().or(self.config_database.as_ref())),
            reports_dir: path_string(
                self.reports_dir
                    .as_ref()
                    .or(self.config_reports_dir.as_ref()),
            ),
            exports_dir: path_string(
                self.exports_dir
                    .as_ref()
                    .or(self.config_exports_dir.as_ref()),
            ),
        }
    }
}
