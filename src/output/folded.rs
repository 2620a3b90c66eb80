//! Folded stack output writer.
//!
//! One `<path> <weight>` line per accumulated path, in first-insertion
//! order. No header, no sorting, no trailing summary.

use crate::aggregator::SampleAccumulator;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write folded lines to any writer
///
/// **Public** - used for stdout and files alike
pub fn write_folded<W: Write>(
    samples: &SampleAccumulator,
    mut writer: W,
) -> Result<(), OutputError> {
    for (path, weight) in samples.iter() {
        writeln!(writer, "{} {}", path, weight)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write folded lines to a file
///
/// **Public** - main entry point for file output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_folded_file(
    samples: &SampleAccumulator,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing {} folded stacks to: {}", samples.len(), output_path.display());

    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path)?;
    write_folded(samples, BufWriter::new(file))
}

/// Render folded lines to a string (for tests or in-memory use)
pub fn folded_to_string(samples: &SampleAccumulator) -> String {
    samples
        .iter()
        .map(|(path, weight)| format!("{} {}\n", path, weight))
        .collect()
}

/// Validate that output path is writable
///
/// **Public** - lets commands reject a bad path before reading input
pub fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
