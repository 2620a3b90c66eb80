//! Output writer for collapsed stacks.
//!
//! Writes the accumulated run in folded stack format, ready for
//! `flamegraph.pl` or `inferno-flamegraph`.

pub mod folded;

// Re-export main functions
pub use folded::{folded_to_string, validate_output_path, write_folded, write_folded_file};
