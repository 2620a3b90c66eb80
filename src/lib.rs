//! esperf-collapse
//!
//! Turns the `profile` section of Elasticsearch search responses into
//! folded stacks for flamegraph tools.
//!
//! Each shard's query, collector and aggregation trees are flattened into
//! semicolon-joined paths weighted by nanoseconds, optionally prefixed with
//! cluster, node, index and shard. Any number of documents can be summed
//! into one output.
//!
//! ## Getting Started
//!
//! ```bash
//! esperf-collapse profile.json | flamegraph.pl > profile.svg
//! ```
//!
//! Or from code:
//!
//! ```
//! use esperf_collapse::aggregator::{CollapseOptions, Collapser};
//! use esperf_collapse::output::folded_to_string;
//!
//! let doc = serde_json::json!({ "shards": [] });
//! let mut collapser = Collapser::new(CollapseOptions::default());
//! collapser.collapse_value(doc).unwrap();
//! assert_eq!(folded_to_string(collapser.samples()), "");
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
