// File: crates/tsview-demo/src/main.rs
// Summary: Loads a CSV table, replays a key script through the session and writes PNG frames to target/out.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tsview_core::{InputController, Key, Outcome, Session, TimeTable, ViewerConfig};

fn main() -> Result<()> {
    let _ = tsview_core::telemetry::init_default_tracing();

    // Args: <table.csv> [script] [config.json]
    // The script is whitespace-separated steps; one frame is written per step.
    let mut args = std::env::args().skip(1);
    let path = PathBuf::from(args.next().context("usage: tsview-demo <table.csv> [script] [config.json]")?);
    let script = args.next().unwrap_or_default();
    let config = match args.next() {
        Some(p) => ViewerConfig::load(&p).with_context(|| format!("loading config '{p}'"))?,
        None => ViewerConfig::default(),
    };

    let table = TimeTable::load_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} rows, columns {:?}", table.len(), table.names());

    let mut session = Session::new(table, &config)?;
    let out = out_name_with(&path, 0);
    tsview_render_skia::render_to_png(&session, &out)?;
    println!("Wrote {}", out.display());

    let mut input = InputController::new();
    for (i, step) in script.split_whitespace().enumerate() {
        for key in parse_step(step) {
            if !input.push_key(key) {
                warn!(?key, "unbound key ignored");
            }
        }
        match input.drain_into(&mut session) {
            Outcome::Quit => {
                info!(step = i + 1, "quit requested");
                break;
            }
            Outcome::Unchanged => continue,
            Outcome::Redraw => {}
        }
        let out = out_name_with(&path, i + 1);
        tsview_render_skia::render_to_png(&session, &out)?;
        println!("Wrote {} (theme {}, mode {:?})", out.display(), session.theme().name, session.mode());
    }
    Ok(())
}

/// A step is either a named key (`enter`, `esc`, `left`, `right`, `up`, `down`)
/// or a run of single-character keys such as `jjl`.
fn parse_step(step: &str) -> Vec<Key> {
    match step.to_ascii_lowercase().as_str() {
        "enter" | "ret" => vec![Key::Enter],
        "esc" => vec![Key::Escape],
        "left" => vec![Key::Left],
        "right" => vec![Key::Right],
        "up" => vec![Key::Up],
        "down" => vec![Key::Down],
        _ => step.chars().map(Key::Char).collect(),
    }
}

/// Produce output file name like target/out/tsview_<stem>_<step>.png
fn out_name_with(input: &Path, step: usize) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("table");
    let mut out = PathBuf::from("target/out");
    out.push(format!("tsview_{stem}_{step:03}.png"));
    out
}
