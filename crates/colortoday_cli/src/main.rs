//! `colortoday` command-line entry point.
//!
//! # Responsibility
//! - Inspect generated scenes and hit-tests without a UI.
//! - Paint, reset and export days against the same SQLite store the app uses.

mod args;

use anyhow::{bail, Context, Result};
use args::{Cli, Commands};
use clap::Parser;
use colortoday_core::db::open_db;
use colortoday_core::{
    core_version, date_key_to_seed, default_log_level, encode_png, export_file_name,
    init_logging, share_links, CanvasService, PaintGesture, PaintOutcome, Scene,
    SqliteFillRepository,
};
use log::info;
use std::path::PathBuf;

const DEFAULT_DB_FILE_NAME: &str = "colortoday.sqlite3";

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli)?;
    run(&cli)
}

fn setup_logging(cli: &Cli) -> Result<()> {
    let Some(log_dir) = &cli.log_dir else {
        return Ok(());
    };
    let level = cli.log_level.as_deref().unwrap_or_else(|| default_log_level());
    let Some(log_dir) = log_dir.to_str() else {
        bail!("log dir `{}` is not valid UTF-8", log_dir.display());
    };
    init_logging(level, log_dir).context("failed to initialize logging")
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Seed(day) => {
            println!("{}", date_key_to_seed(&day.resolve()));
        }
        Commands::Scene(day) => {
            let scene = Scene::for_date(&day.resolve());
            println!("{}", serde_json::to_string_pretty(&scene)?);
        }
        Commands::Hit { day, point } => {
            let scene = Scene::for_date(&day.resolve());
            match scene.hit_test(*point) {
                Some(shape) => println!("{} {}", shape.id(), shape.kind().as_str()),
                None => println!("miss"),
            }
        }
        Commands::Paint { day, color, points } => {
            with_canvas_service(cli, |service| {
                let mut canvas = service.open_day(day.resolve())?;
                let mut gesture = PaintGesture::new();
                for point in points {
                    match service.paint_at(&mut canvas, &mut gesture, *point, color)? {
                        PaintOutcome::Painted(id) => println!("painted {id} {color}"),
                        PaintOutcome::Repeated(id) => println!("skipped {id} (same stroke)"),
                        PaintOutcome::Missed => println!("miss {},{}", point.x, point.y),
                    }
                }
                Ok(())
            })?;
        }
        Commands::Fills(day) => {
            let canvas = with_canvas_service(cli, |service| Ok(service.open_day(day.resolve())?))?;
            println!("{}", serde_json::to_string_pretty(canvas.fills())?);
        }
        Commands::Reset(day) => {
            let (date_key, removed) = with_canvas_service(cli, |service| {
                let mut canvas = service.open_day(day.resolve())?;
                let removed = service.reset_day(&mut canvas)?;
                Ok((canvas.date_key().clone(), removed))
            })?;
            println!("cleared {removed} fill(s) for {date_key}");
        }
        Commands::Days => {
            for day in with_canvas_service(cli, |service| Ok(service.painted_days()?))? {
                println!("{day}");
            }
        }
        Commands::Export { day, size, output } => {
            let canvas = with_canvas_service(cli, |service| Ok(service.open_day(day.resolve())?))?;
            let png = encode_png(canvas.scene(), canvas.fills(), canvas.date_key(), *size)?;
            let path = output
                .clone()
                .unwrap_or_else(|| PathBuf::from(export_file_name(canvas.date_key())));
            std::fs::write(&path, png)
                .with_context(|| format!("failed to write `{}`", path.display()))?;
            info!(
                "event=canvas_export module=cli status=ok date_key={} size={size}",
                canvas.date_key()
            );
            println!("{}", path.display());
        }
        Commands::Share { url } => {
            println!("{}", serde_json::to_string_pretty(&share_links(url.trim()))?);
        }
        Commands::Info => {
            println!("colortoday_core version={}", core_version());
            println!("db={}", resolve_db_path(cli).display());
        }
    }
    Ok(())
}

fn with_canvas_service<T>(
    cli: &Cli,
    f: impl FnOnce(&CanvasService<SqliteFillRepository<'_>>) -> Result<T>,
) -> Result<T> {
    let db_path = resolve_db_path(cli);
    let conn = open_db(&db_path)
        .with_context(|| format!("failed to open canvas DB `{}`", db_path.display()))?;
    f(&CanvasService::new(SqliteFillRepository::new(&conn)))
}

fn resolve_db_path(cli: &Cli) -> PathBuf {
    cli.db
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME))
}
