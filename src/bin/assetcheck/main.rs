// assetcheck - Validate the scene table and probe every asset on disk
//
// Usage: cargo run --bin assetcheck -- [--scenes FILE] [--root DIR] [--export FILE] [--strict]
//
// Exit status is non-zero when the table is invalid, an asset is missing
// or unreadable, or (with --strict) validation produced warnings.

mod probe;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use carousel_gallery::SceneTable;
use clap::Parser;

use probe::Probe;

#[derive(Parser, Debug)]
#[command(name = "assetcheck", about = "Check gallery scenes and their image assets")]
struct Args {
    /// Scene table JSON (defaults to the built-in table)
    #[arg(long)]
    scenes: Option<PathBuf>,

    /// Site root that asset paths resolve against
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Write the validated table as JSON
    #[arg(long)]
    export: Option<PathBuf>,

    /// Treat validation warnings as failures
    #[arg(long)]
    strict: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let table = match &args.scenes {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            SceneTable::from_json(&json).with_context(|| format!("loading {}", path.display()))?
        }
        None => SceneTable::builtin().context("loading built-in scenes")?,
    };
    println!(
        "{} scenes, {} warnings",
        table.len(),
        table.warnings().len()
    );

    let paths = table.asset_paths();
    println!("Probing {} assets under {}...", paths.len(), args.root.display());
    let reports = probe::probe_all(&args.root, paths);

    let mut bad = 0;
    for r in &reports {
        match &r.probe {
            Probe::Ok { width, height } => log::debug!("{} {}x{}", r.path, width, height),
            Probe::Missing => log::error!("{}: missing ({})", r.path, r.file.display()),
            Probe::Unreadable(e) => log::error!("{}: {}", r.path, e),
        }
        if !r.is_ok() {
            bad += 1;
        }
    }
    println!("  {} ok, {} bad", reports.len() - bad, bad);

    if let Some(path) = &args.export {
        fs::write(path, table.to_json()?).with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    let failed = bad > 0 || (args.strict && !table.warnings().is_empty());
    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
