//! Collapse command implementation.
//!
//! The collapse command:
//! 1. Validates arguments
//! 2. Reads every input document in order (or stdin)
//! 3. Collapses all shards into one accumulator
//! 4. Writes folded stacks to the output file or stdout

use super::models::CollapseArgs;
use crate::aggregator::{calculate_weight_distribution, Collapser, QueryLabel};
use crate::output::{validate_output_path, write_folded, write_folded_file};
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;
use std::time::Instant;

/// Execute the collapse command
///
/// **Public** - main entry point called from main.rs
///
/// Nothing is written unless every input collapses cleanly.
///
/// # Errors
/// * Unreadable input file
/// * Input that is not JSON or lacks required profile fields
/// * Output write failure
pub fn execute_collapse(args: &CollapseArgs) -> Result<()> {
    let start_time = Instant::now();

    if args.options.query_label == QueryLabel::Description && !args.no_warning {
        // not routed through the logger; only the dedicated toggle hides it
        eprintln!("WARNING! graphs may reveal query parameters!");
    }

    debug!(
        "Detail: '{}', query labels: {:?}, breakdown: {}",
        args.options.detail, args.options.query_label, args.options.breakdown
    );

    let mut collapser = Collapser::new(args.options.clone());

    if args.inputs.is_empty() {
        debug!("Reading a single document from standard input");
        let stdin = io::stdin();
        collapser
            .collapse_reader(stdin.lock())
            .context("Failed to collapse profile from standard input")?;
    } else {
        for path in &args.inputs {
            collapse_file(&mut collapser, path)?;
        }
    }

    let distribution = calculate_weight_distribution(collapser.samples());
    info!(
        "Collapsed {} documents, {} shards. {}",
        collapser.documents_processed(),
        collapser.shards_processed(),
        distribution.summary()
    );

    match &args.output {
        Some(path) => write_folded_file(collapser.samples(), path)
            .with_context(|| format!("Failed to write folded stacks to {}", path.display()))?,
        None => {
            let stdout = io::stdout();
            write_folded(collapser.samples(), BufWriter::new(stdout.lock()))
                .context("Failed to write folded stacks to standard output")?;
        }
    }

    let elapsed = start_time.elapsed();
    debug!("Collapse completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Collapse one input file into the shared accumulator
///
/// **Private** - internal helper for execute_collapse
fn collapse_file(collapser: &mut Collapser, path: &Path) -> Result<()> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;

    let shards = collapser
        .collapse_reader(BufReader::new(file))
        .with_context(|| format!("Failed to collapse profile {}", path.display()))?;

    debug!("{}: {} shards", path.display(), shards);

    Ok(())
}

/// Validate collapse arguments
///
/// **Public** - can be called before execute_collapse for early validation
pub fn validate_args(args: &CollapseArgs) -> Result<()> {
    for path in &args.inputs {
        if !path.exists() {
            anyhow::bail!("Input not found: {}", path.display());
        }
        if path.is_dir() {
            anyhow::bail!("Input is a directory: {}", path.display());
        }
    }

    if let Some(output) = &args.output {
        validate_output_path(output).context("Invalid output path")?;
    }

    Ok(())
}
