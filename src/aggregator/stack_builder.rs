//! Sample accumulator: folded stack path -> summed weight.
//!
//! Collapsed stacks are the input format for flamegraph generation.
//! Format: "parent;child;grandchild weight"
//!
//! Example: "c1;n1;idx;s0;search;query;TermQuery 500"
//! This means: a TermQuery on shard 0 of `idx` took 500ns of its own time.

use super::label_stack::LabelStack;
use indexmap::IndexMap;

/// A single collapsed stack entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapsedStack {
    /// Stack trace as semicolon-separated string
    pub stack: String,

    /// Weight (nanoseconds attributed to this stack)
    pub weight: u64,
}

impl CollapsedStack {
    pub fn new(stack: String, weight: u64) -> Self {
        Self { stack, weight }
    }

    /// Folded line without the trailing newline
    pub fn to_line(&self) -> String {
        format!("{} {}", self.stack, self.weight)
    }
}

/// Accumulated weights for every path seen in a run
///
/// Entries are only ever created or increased. Iteration follows the
/// order in which paths were first recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleAccumulator {
    samples: IndexMap<String, u64>,
}

impl SampleAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `weight` to the entry for the stack's current path
    ///
    /// A zero weight still creates the entry.
    pub fn record(&mut self, stack: &LabelStack, weight: u64) {
        self.record_path(stack.path(), weight);
    }

    /// Add `weight` to the entry for an already-joined path
    pub fn record_path(&mut self, path: String, weight: u64) {
        let entry = self.samples.entry(path).or_insert(0);
        *entry = entry.saturating_add(weight);
    }

    pub fn get(&self, path: &str) -> Option<u64> {
        self.samples.get(path).copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Paths and weights in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.samples.iter().map(|(path, weight)| (path.as_str(), *weight))
    }

    pub fn total_weight(&self) -> u64 {
        self.samples.values().fold(0u64, |acc, w| acc.saturating_add(*w))
    }

    /// Snapshot as collapsed stacks, in first-insertion order
    pub fn to_collapsed_stacks(&self) -> Vec<CollapsedStack> {
        self.iter()
            .map(|(path, weight)| CollapsedStack::new(path.to_string(), weight))
            .collect()
    }
}
