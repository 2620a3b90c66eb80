//! Aggregation of profile trees into collapsed stacks.
//!
//! This module transforms loaded shard profiles into:
//! - Collapsed stack format (for flamegraph tools)
//! - Weight distribution statistics for the run log

pub mod collapser;
pub mod detail;
pub mod label_stack;
pub mod metrics;
pub mod stack_builder;

// Re-export main types and functions
pub use collapser::{CollapseOptions, Collapser, QueryLabel};
pub use detail::{DetailSpec, DetailTag};
pub use label_stack::{sanitize_label, LabelGuard, LabelStack};
pub use metrics::{calculate_weight_distribution, WeightDistribution};
pub use stack_builder::{CollapsedStack, SampleAccumulator};
