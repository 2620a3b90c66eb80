use crate::aggregator::CollapseOptions;
use std::path::PathBuf;

/// Arguments for the collapse command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct CollapseArgs {
    /// Input documents; standard input when empty
    pub inputs: Vec<PathBuf>,

    /// Output file; standard output when absent
    pub output: Option<PathBuf>,

    /// Walker configuration
    pub options: CollapseOptions,

    /// Suppress the description-mode warning
    pub no_warning: bool,
}
