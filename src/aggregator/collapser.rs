//! Label-stack walker: flattens shard profiles into folded stacks.
//!
//! Per shard the walk produces
//!
//! ```text
//! <detail prefix>;search;rewrite
//! <detail prefix>;search;query;<query tree>
//! <detail prefix>;search;collector;<collector tree>
//! <detail prefix>;aggregations;<aggregation tree>
//! ```
//!
//! Every tree node's children are visited before the node records its own
//! time, at the node's own path. Node times are passed through exactly as
//! the profiler reports them.

use super::detail::DetailSpec;
use super::label_stack::LabelStack;
use super::stack_builder::SampleAccumulator;
use crate::parser::{
    load_shards, read_document, AggregationNode, CollectorNode, QueryNode, SearchProfile,
    ShardProfile, TimedNode,
};
use crate::utils::config::{
    AGGREGATIONS_LABEL, COLLECTOR_LABEL, DESCRIPTION_MAX_CHARS, QUERY_LABEL, REWRITE_LABEL,
    SEARCH_LABEL,
};
use crate::utils::error::ParseError;
use log::debug;
use std::io::Read;

/// Which query node field becomes the frame label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryLabel {
    /// Execution strategy (`TermQuery`, `BooleanQuery`, ...). Terse, and
    /// never contains query values.
    #[default]
    Type,

    /// Description truncated to 100 characters. May contain literal
    /// query argument values.
    Description,
}

impl QueryLabel {
    pub fn label_for(self, node: &QueryNode) -> String {
        match self {
            Self::Type => node.query_type.clone(),
            Self::Description => node.description.chars().take(DESCRIPTION_MAX_CHARS).collect(),
        }
    }
}

/// Collapser configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapseOptions {
    pub detail: DetailSpec,
    pub query_label: QueryLabel,
    /// Expand nodes with a breakdown into one frame per sub-metric
    pub breakdown: bool,
}

impl Default for CollapseOptions {
    fn default() -> Self {
        Self {
            detail: DetailSpec::default(),
            query_label: QueryLabel::Type,
            breakdown: true,
        }
    }
}

impl CollapseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_detail(mut self, detail: DetailSpec) -> Self {
        self.detail = detail;
        self
    }

    pub fn with_query_label(mut self, query_label: QueryLabel) -> Self {
        self.query_label = query_label;
        self
    }

    pub fn with_breakdown(mut self, breakdown: bool) -> Self {
        self.breakdown = breakdown;
        self
    }
}

/// Walks profile documents into one shared accumulator
///
/// Feed any number of documents; weights for equal paths are summed.
#[derive(Debug, Clone, Default)]
pub struct Collapser {
    options: CollapseOptions,
    samples: SampleAccumulator,
    documents: usize,
    shards: usize,
}

impl Collapser {
    pub fn new(options: CollapseOptions) -> Self {
        Self {
            options,
            samples: SampleAccumulator::new(),
            documents: 0,
            shards: 0,
        }
    }

    pub fn options(&self) -> &CollapseOptions {
        &self.options
    }

    pub fn samples(&self) -> &SampleAccumulator {
        &self.samples
    }

    pub fn into_samples(self) -> SampleAccumulator {
        self.samples
    }

    pub fn documents_processed(&self) -> usize {
        self.documents
    }

    pub fn shards_processed(&self) -> usize {
        self.shards
    }

    /// Load a parsed document and collapse all of its shards
    ///
    /// The document is fully validated first; on error the accumulator
    /// is left untouched.
    pub fn collapse_value(&mut self, document: serde_json::Value) -> Result<usize, ParseError> {
        let shards = load_shards(document)?;
        self.collapse_shards(&shards);
        Ok(shards.len())
    }

    /// Read, validate and collapse one whole document
    pub fn collapse_reader<R: Read>(&mut self, reader: R) -> Result<usize, ParseError> {
        let shards = read_document(reader)?;
        self.collapse_shards(&shards);
        Ok(shards.len())
    }

    /// Collapse the shards of one document
    pub fn collapse_shards(&mut self, shards: &[ShardProfile]) {
        for shard in shards {
            let mut stack = LabelStack::new();
            self.collapse_shard(shard, &mut stack);
            debug_assert!(stack.is_empty(), "label stack unbalanced after shard");
        }
        self.documents += 1;
        debug!(
            "Collapsed document {} ({} shards, {} distinct stacks so far)",
            self.documents,
            shards.len(),
            self.samples.len()
        );
    }

    /// Walk one shard starting at `stack`
    ///
    /// The stack is left at the depth it had on entry.
    pub fn collapse_shard(&mut self, shard: &ShardProfile, stack: &mut LabelStack) {
        self.shards += 1;
        let prefix = self.options.detail.prefix_labels(shard);
        self.walk_prefixed(shard, stack, &prefix);
    }

    /// Push the detail prefix one frame at a time, then walk the shard body
    fn walk_prefixed(&mut self, shard: &ShardProfile, stack: &mut LabelStack, prefix: &[String]) {
        match prefix.split_first() {
            Some((label, rest)) => {
                let mut frame = stack.push(label);
                self.walk_prefixed(shard, &mut frame, rest);
            }
            None => self.walk_shard_body(shard, stack),
        }
    }

    fn walk_shard_body(&mut self, shard: &ShardProfile, stack: &mut LabelStack) {
        {
            let mut search = stack.push(SEARCH_LABEL);
            for profile in &shard.searches {
                self.walk_search(profile, &mut search);
            }
        }

        let mut aggregations = stack.push(AGGREGATIONS_LABEL);
        for node in &shard.aggregations {
            self.visit(node, &mut aggregations, &|n: &AggregationNode| n.description.clone());
        }
    }

    fn walk_search(&mut self, profile: &SearchProfile, stack: &mut LabelStack) {
        {
            let rewrite = stack.push(REWRITE_LABEL);
            self.samples.record(&rewrite, profile.rewrite_time);
        }

        {
            let query_label = self.options.query_label;
            let mut query = stack.push(QUERY_LABEL);
            for node in &profile.query {
                self.visit(node, &mut query, &|n: &QueryNode| query_label.label_for(n));
            }
        }

        let mut collector = stack.push(COLLECTOR_LABEL);
        for node in &profile.collector {
            self.visit(node, &mut collector, &|n: &CollectorNode| n.reason.clone());
        }
    }

    /// Visit one tree node: push its label, visit children, record self, pop
    fn visit<N, F>(&mut self, node: &N, stack: &mut LabelStack, label_of: &F)
    where
        N: TimedNode,
        F: Fn(&N) -> String,
    {
        let mut frame = stack.push(label_of(node));
        for child in node.children() {
            self.visit(child, &mut frame, label_of);
        }
        self.record_node(node, &mut frame);
    }

    /// Record a node's own time, or its non-zero breakdown entries
    fn record_node<N: TimedNode>(&mut self, node: &N, stack: &mut LabelStack) {
        let breakdown = node
            .breakdown()
            .filter(|breakdown| self.options.breakdown && !breakdown.is_empty());

        match breakdown {
            Some(breakdown) => {
                for (metric, &nanos) in breakdown {
                    if nanos == 0 {
                        continue;
                    }
                    let entry = stack.push(metric);
                    self.samples.record(&entry, nanos);
                }
            }
            None => self.samples.record(stack, node.time_in_nanos()),
        }
    }
}
