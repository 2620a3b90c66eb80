//! Profile document parsing and schema definitions.
//!
//! This module handles:
//! - Unwrapping a raw search response to its `profile` section
//! - Validating and deserializing shard profiles
//! - Defining the query, collector and aggregation trees

pub mod document;
pub mod schema;

// Re-export main types
pub use document::{load_shards, parse_document, read_document};
pub use schema::{
    AggregationNode, Breakdown, CollectorNode, QueryNode, SearchProfile, ShardProfile, TimedNode,
};
