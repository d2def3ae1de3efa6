//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use colortoday_core::{DateKey, HexColor, Point};
use std::path::PathBuf;

/// color today: inspect and paint the daily abstract canvas
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// SQLite file holding painted fills
    #[arg(long, global = true, env = "COLORTODAY_DB_PATH", value_hint = clap::ValueHint::FilePath)]
    pub db: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the generation seed for a day
    Seed(DayArgs),

    /// Print the day's scene as JSON
    Scene(DayArgs),

    /// Print the topmost shape at a normalized point
    Hit {
        #[command(flatten)]
        day: DayArgs,

        /// Point as `x,y` in [0, 1]
        #[arg(value_parser = parse_point)]
        point: Point,
    },

    /// Paint along a stroke of normalized points, as one gesture
    Paint {
        #[command(flatten)]
        day: DayArgs,

        /// Brush color as #rrggbb
        #[arg(short, long, default_value = colortoday_core::DEFAULT_COLOR, value_parser = parse_color)]
        color: HexColor,

        /// Stroke points as `x,y`, in order
        #[arg(required = true, value_parser = parse_point)]
        points: Vec<Point>,
    },

    /// Print the day's persisted fills as JSON
    Fills(DayArgs),

    /// Clear every fill of a day
    Reset(DayArgs),

    /// List days with saved progress, newest first
    Days,

    /// Render the painted canvas to a PNG file
    Export {
        #[command(flatten)]
        day: DayArgs,

        /// Edge length in pixels (clamped to the canvas maximum)
        #[arg(short, long, default_value_t = colortoday_core::export::render::DEFAULT_CANVAS_SIZE)]
        size: u32,

        /// Output file; defaults to `color-today-<date>.png`
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Print social share links for a page URL
    Share {
        /// Canvas page URL
        url: String,
    },

    /// Print core version and resolved settings
    Info,
}

/// Day selection shared by per-day subcommands.
#[derive(clap::Args, Debug, Clone)]
pub struct DayArgs {
    /// Day as YYYY-MM-DD; defaults to today (local time)
    #[arg(short, long, value_parser = parse_date_key)]
    pub date: Option<DateKey>,
}

impl DayArgs {
    pub fn resolve(&self) -> DateKey {
        self.date.clone().unwrap_or_else(DateKey::today)
    }
}

fn parse_date_key(value: &str) -> Result<DateKey, String> {
    DateKey::parse(value).map_err(|err| err.to_string())
}

fn parse_color(value: &str) -> Result<HexColor, String> {
    HexColor::parse(value).map_err(|err| err.to_string())
}

fn parse_point(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{value}`"))?;
    let coord = |raw: &str| {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("invalid coordinate `{raw}`"))
    };
    Ok(Point::new(coord(x)?, coord(y)?))
}
