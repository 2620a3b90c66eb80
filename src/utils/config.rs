//! Configuration and constants for the collapser.

use std::ffi::OsStr;

/// Separator between frames of a folded stack path
pub const PATH_SEPARATOR: char = ';';

/// Replacement for a separator found inside a label
pub const SEPARATOR_REPLACEMENT: char = ':';

/// Query descriptions are cut to this many characters when used as labels.
/// The full text can be huge and makes rendered graphs unusable.
pub const DESCRIPTION_MAX_CHARS: usize = 100;

/// Default detail specifier: cluster, node, index, shard (outermost first)
pub const DEFAULT_DETAIL: &str = "cnis";

/// Environment variable that silences the description-mode warning
pub const NO_WARNING_ENV: &str = "ESPERF_NO_WARNING";

/// An environment toggle is on when set to any non-empty value
pub fn env_flag_set(value: Option<&OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

// Fixed frame labels inserted by the walker
pub const SEARCH_LABEL: &str = "search";
pub const REWRITE_LABEL: &str = "rewrite";
pub const QUERY_LABEL: &str = "query";
pub const COLLECTOR_LABEL: &str = "collector";
pub const AGGREGATIONS_LABEL: &str = "aggregations";

/// Shards are shown as sNN (kept narrow, there may be lots of them)
pub const SHARD_PREFIX: &str = "s";

// Keys of a raw search response that mark the profile envelope
pub const ENVELOPE_MARKER_KEY: &str = "took";
pub const ENVELOPE_PROFILE_KEY: &str = "profile";
pub const SHARDS_KEY: &str = "shards";
