#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use treesnap::cli::Args;
use treesnap::clipboard;
use treesnap::progress::{ConsoleProgress, Progress};
use treesnap::render;
use treesnap::walk::Traversal;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("treesnap: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let root = args
        .path
        .canonicalize()
        .with_context(|| format!("{}: failed to resolve path", args.path.display()))?;

    anyhow::ensure!(root.is_dir(), "{}: Not a directory", root.display());

    let config = args.snapshot_config();
    let progress = ConsoleProgress::new(args.quiet);
    let started = Instant::now();

    progress.report(0, "scanning directory structure");
    let mut traversal = Traversal::new(&root, &config, &args.ignore);
    let entries = traversal.collect();

    progress.report(50, "rendering snapshot");
    let root_name = root
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| root.to_string_lossy().to_string());
    let snapshot = render::render(&entries, &root_name, config.output_format, config.show_size);

    if args.to_stdout {
        println!("{snapshot}");
    } else {
        progress.report(75, "copying to clipboard");
        clipboard::copy(&snapshot).context("failed to copy snapshot to clipboard")?;
    }

    let elapsed = started.elapsed().as_secs_f64();
    progress.report(
        100,
        &format!("done in {elapsed:.2}s ({} entries)", entries.len()),
    );
    Ok(())
}
