//! Manifest-driven assembly.
//!
//! Resolves the ordered file list from the manifest, finds each file's
//! marker by extension, and weaves every file into one shared output sink,
//! in manifest order. The sink is opened append-or-create on purpose:
//! re-running against an existing document extends it rather than
//! replacing it.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use owo_colors::OwoColorize;
use tracing::{debug, info};

use crate::cli::{AppContext, AssembleArgs};
use crate::core::engine::weave;
use crate::core::error::AssembleError;
use crate::core::markers::MarkerRegistry;

pub fn run(args: AssembleArgs, ctx: &AppContext) -> Result<()> {
    let registry = MarkerRegistry::load(&args.markers)?;
    info!(
        config = %args.markers.display(),
        markers = registry.markers.len(),
        "loaded marker config"
    );

    // Resolve entries up front so the progress bar has a length
    let entries = read_manifest(&args.input)?;

    let fout = OpenOptions::new()
        .append(true)
        .create(true)
        .open(&args.output)
        .map_err(|source| AssembleError::OutputOpen {
            path: args.output.clone(),
            source,
        })?;
    let mut out = BufWriter::new(fout);

    let progress = if ctx.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(entries.len() as u64)
    };

    // One failure aborts the whole run; partial output stays on disk
    for path in &entries {
        info!(file = %path.display(), "processing");

        weave_file(&registry, path, &mut out)
            .with_context(|| format!("while assembling {}", path.display()))?;

        progress.inc(1);
    }

    out.flush().map_err(AssembleError::Write)?;
    progress.finish_and_clear();

    if !ctx.quiet {
        let message = format!(
            "Assembled {} files into {}",
            entries.len(),
            args.output.display()
        );
        if ctx.no_color {
            println!("✓ {message}");
        } else {
            println!("{} {message}", "✓".green());
        }
    }

    Ok(())
}

/// Read the manifest, dropping comments and blanks, resolving every entry
/// against the manifest file's own directory.
fn read_manifest(path: &Path) -> Result<Vec<PathBuf>, AssembleError> {
    let file = File::open(path).map_err(|source| AssembleError::ManifestOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut entries = Vec::new();

    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| AssembleError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;

        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            debug!(line, "skipping manifest line");
            continue;
        }

        entries.push(dir.join(line));
    }

    Ok(entries)
}

/// Look up the marker for `path`'s extension and weave the file into the
/// shared sink.
fn weave_file(
    registry: &MarkerRegistry,
    path: &Path,
    out: &mut impl Write,
) -> Result<(), AssembleError> {
    let extension = dotted_extension(path);
    let marker = registry.lookup(&extension)?;

    let file = File::open(path).map_err(|source| AssembleError::SourceOpen {
        path: path.to_path_buf(),
        source,
    })?;

    weave(marker, BufReader::new(file), out)
}

/// Extension of `path`, lowercased and dot-prefixed; empty when the path
/// has none (which then fails marker lookup).
fn dotted_extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default()
}
