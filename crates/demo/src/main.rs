// File: crates/demo/src/main.rs
// Summary: Loads a case-count CSV, restores a view from a location, optionally applies a
// selection, and writes the resulting chart projection as JSON.

use anyhow::{bail, Context, Result};
use grapher_core::types::DEFAULT_DATA_FILE;
use grapher_core::{MemoryHistory, Session, StaticSelection, YScale};
use std::path::{Path, PathBuf};
use tracing::info;

/// Location used when none is given on the command line.
const DEFAULT_LOCATION: &str = "index.html";

struct Args {
    data: String,
    location: String,
    select: Option<Vec<String>>,
    yscale: Option<YScale>,
}

fn main() -> Result<()> {
    let _ = grapher_core::telemetry::init_default_tracing();

    let args = parse_args(std::env::args().skip(1))?;
    let (path, used_alt) = resolve_path(&args.data)?;
    println!("Using input file: {}", path.display());
    if used_alt {
        println!("  (extension swapped between .csv/.cvs)");
    }

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    let mut session = Session::load(&raw, MemoryHistory::new(args.location))
        .with_context(|| format!("failed to load table '{}'", path.display()))?;
    info!(
        entities = session.table().entities().len(),
        days = session.table().day_count(),
        "loaded table"
    );

    if args.select.is_some() || args.yscale.is_some() {
        let checked = args.select.unwrap_or_else(|| session.state().countries.clone());
        let yscale = args.yscale.unwrap_or(session.state().yscale);
        session.apply_input(&StaticSelection::new(checked, yscale));
    }

    let projection = session.projection();
    for name in &projection.dropped {
        println!("Warning: '{name}' is not in the table; skipped.");
    }
    for s in &projection.series {
        let last = s.values.last().copied().unwrap_or(0);
        println!("  {:<32} {}  last={}", s.name, s.color, last);
    }

    let out = out_name_with(&path);
    std::fs::write(&out, projection.to_json()?)
        .with_context(|| format!("failed to write '{}'", out.display()))?;
    println!("Location: {}", session.location());
    println!("Wrote {}", out.display());
    Ok(())
}

/// `[CSV_PATH] [LOCATION] [--select A,B,..] [--yscale linear|log|delta]`
fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut positional = Vec::new();
    let mut select = None;
    let mut yscale = None;
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--select" => {
                let v = it.next().context("--select needs a comma-separated list")?;
                select = Some(v.split(',').map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect());
            }
            "--yscale" => {
                let v = it.next().context("--yscale needs a value")?;
                yscale = Some(v.parse::<YScale>()?);
            }
            flag if flag.starts_with("--") => bail!("unknown flag '{flag}'"),
            _ => positional.push(arg),
        }
    }
    let mut positional = positional.into_iter();
    Ok(Args {
        data: positional.next().unwrap_or_else(|| DEFAULT_DATA_FILE.to_string()),
        location: positional.next().unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
        select,
        yscale,
    })
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    bail!("file not found: {}", p.display());
}

/// Produce output file name like target/out/projection_<stem>.json
fn out_name_with(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("table");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("projection_{stem}.json"));
    out
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}
