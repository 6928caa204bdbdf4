use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use sayonara_shred::crypto::{EntropySource, RingSystemRNG};
use sayonara_shred::settings::load_config;
use sayonara_shred::ui::{human_bytes, PassProgress};
use sayonara_shred::{FlushPolicy, WipeConfig, WipeError, WipeOrchestrator, WipeSummary};
use serde_json::json;
use std::fs::{self, Metadata, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sayonara-shred")]
#[command(about = "Securely erase file contents with the 35-pass Gutmann method")]
#[command(version)]
struct Cli {
    /// Files to wipe
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Remove each file after it has been wiped
    #[arg(short = 'u', long)]
    remove: bool,

    /// Remove the file even if the wipe failed part way
    #[arg(long)]
    remove_on_failure: bool,

    /// What to do when a pass cannot be flushed (abort, best-effort)
    #[arg(long)]
    flush_policy: Option<FlushPolicy>,

    /// Read configuration from this file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print one JSON object per file instead of human readable output
    #[arg(long)]
    json: bool,

    /// Don't draw progress bars
    #[arg(long)]
    no_progress: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.debug);

    let config = build_config(&cli)?;
    let rng = RingSystemRNG::new();
    let show_progress = !cli.no_progress && !cli.json;

    let mut failures = 0usize;
    for path in &cli.files {
        match shred_file(path, &config, &rng, show_progress) {
            Ok(summary) => report_success(path, &summary, cli.json),
            Err(err) => {
                failures += 1;
                report_failure(path, &err, cli.json);
            }
        }
    }

    if failures > 0 {
        if !cli.json {
            eprintln!(
                "\n{} {} of {} file(s) could not be wiped",
                "✗".red().bold(),
                failures,
                cli.files.len()
            );
        }
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(cli: &Cli) -> Result<WipeConfig> {
    let mut config = load_config(cli.config.as_deref())?;

    if let Some(policy) = cli.flush_policy {
        config.flush_policy = policy;
    }
    if cli.remove {
        config.remove_after_wipe = true;
    }
    if cli.remove_on_failure {
        config.remove_on_failure = true;
    }

    Ok(config)
}

fn shred_file(
    path: &Path,
    config: &WipeConfig,
    rng: &dyn EntropySource,
    show_progress: bool,
) -> Result<WipeSummary> {
    let metadata = fs::symlink_metadata(path)
        .with_context(|| format!("Cannot stat {}", path.display()))?;
    if !metadata.file_type().is_file() {
        bail!("{} is not a regular file, refusing to wipe it", path.display());
    }

    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .with_context(|| format!("Cannot open {} for writing", path.display()))?;
    let opened = file
        .metadata()
        .with_context(|| format!("Cannot stat {}", path.display()))?;
    ensure_same_file(path, &metadata, &opened)?;

    let label = path.display().to_string();
    let mut progress = if show_progress {
        PassProgress::new(&label)
    } else {
        PassProgress::hidden(&label)
    };

    tracing::info!(file = %label, size = metadata.len(), "Wiping file");

    let result = WipeOrchestrator::new(rng, config.clone())
        .with_observer(&mut progress)
        .run(&mut file);
    drop(file);

    match result {
        Ok(summary) => {
            progress.finish("wiped");
            if config.remove_after_wipe {
                fs::remove_file(path)
                    .with_context(|| format!("Wiped but could not remove {}", path.display()))?;
                tracing::info!(file = %label, "Removed");
            }
            Ok(summary)
        }
        Err(err) => {
            progress.abandon("failed");
            if config.remove_on_failure {
                match fs::remove_file(path) {
                    Ok(()) => tracing::warn!(file = %label, "Removed after failed wipe"),
                    Err(e) => tracing::warn!(file = %label, error = %e, "Could not remove"),
                }
            }
            Err(err).with_context(|| format!("Wipe of {} failed", path.display()))
        }
    }
}

/// The path must still name the regular file that was checked before opening it
fn ensure_same_file(path: &Path, checked: &Metadata, opened: &Metadata) -> Result<()> {
    if !opened.file_type().is_file() {
        bail!("{} is not a regular file, refusing to wipe it", path.display());
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        if checked.dev() != opened.dev() || checked.ino() != opened.ino() {
            bail!("{} was replaced while being opened, refusing to wipe it", path.display());
        }
    }
    #[cfg(not(unix))]
    let _ = checked;

    Ok(())
}

fn report_success(path: &Path, summary: &WipeSummary, as_json: bool) {
    if as_json {
        println!(
            "{}",
            json!({
                "file": path.display().to_string(),
                "status": "wiped",
                "summary": summary,
            })
        );
        return;
    }

    if summary.passes_completed == 0 {
        println!("✅ {}: empty file, nothing to overwrite", path.display());
        return;
    }

    let elapsed = Duration::from_millis(summary.elapsed.as_millis() as u64);
    println!(
        "✅ {}: {} passes over {} ({} written) in {}",
        path.display().to_string().bold(),
        summary.passes_completed,
        human_bytes(summary.file_size),
        human_bytes(summary.bytes_written),
        humantime::format_duration(elapsed)
    );
    if summary.flush_failures > 0 {
        println!(
            "  {} {} pass(es) could not be flushed to stable storage",
            "⚠️".yellow(),
            summary.flush_failures
        );
    }
}

fn report_failure(path: &Path, err: &anyhow::Error, as_json: bool) {
    let failed_pass = err.downcast_ref::<WipeError>().and_then(|e| e.pass());

    if as_json {
        println!(
            "{}",
            json!({
                "file": path.display().to_string(),
                "status": "failed",
                "failed_pass": failed_pass,
                "error": format!("{:#}", err),
            })
        );
        return;
    }

    eprintln!("❌ {}: {:#}", path.display().to_string().bold(), err);
    if failed_pass.is_some() {
        eprintln!("   File content is partially overwritten and was not restored.");
    }
}
