//! Input schema for the search engine's `profile` section.
//!
//! Only the fields the collapser reads are modeled; everything else in the
//! document (`id`, `debug`, `fetch`, `dfs`, ...) is ignored by serde.

use indexmap::IndexMap;
use serde::Deserialize;

/// Sub-metric name -> nanoseconds, in document order
pub type Breakdown = IndexMap<String, u64>;

/// Profile of a single shard
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShardProfile {
    /// Cluster alias (`(local)` for the local cluster)
    pub cluster: String,

    /// Generated node id
    pub node_id: String,

    /// Index name
    pub index: String,

    /// Shard number within the index
    pub shard_id: u64,

    /// One entry per search run on the shard
    pub searches: Vec<SearchProfile>,

    /// Aggregation trees (absent when the request had no aggregations)
    #[serde(default)]
    pub aggregations: Vec<AggregationNode>,
}

/// One search clause executed on a shard
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchProfile {
    pub rewrite_time: u64,

    #[serde(default)]
    pub query: Vec<QueryNode>,

    #[serde(default)]
    pub collector: Vec<CollectorNode>,
}

/// A node in the query execution tree
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueryNode {
    /// Execution strategy, e.g. `TermQuery`
    #[serde(rename = "type")]
    pub query_type: String,

    /// Free text; can be large and contains literal query values
    pub description: String,

    pub time_in_nanos: u64,

    #[serde(default)]
    pub breakdown: Option<Breakdown>,

    #[serde(default)]
    pub children: Vec<QueryNode>,
}

/// A node in the collector tree
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CollectorNode {
    /// What the collector does, e.g. `search_top_hits`
    pub reason: String,

    pub time_in_nanos: u64,

    #[serde(default)]
    pub breakdown: Option<Breakdown>,

    #[serde(default)]
    pub children: Vec<CollectorNode>,
}

/// A node in the aggregation tree
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AggregationNode {
    /// The aggregation's name as given in the request
    pub description: String,

    pub time_in_nanos: u64,

    #[serde(default)]
    pub breakdown: Option<Breakdown>,

    #[serde(default)]
    pub children: Vec<AggregationNode>,
}

/// Common view over the three profile trees, used by the walker
pub trait TimedNode: Sized {
    fn time_in_nanos(&self) -> u64;

    fn breakdown(&self) -> Option<&Breakdown> {
        None
    }

    fn children(&self) -> &[Self];
}

impl TimedNode for QueryNode {
    fn time_in_nanos(&self) -> u64 {
        self.time_in_nanos
    }

    fn breakdown(&self) -> Option<&Breakdown> {
        self.breakdown.as_ref()
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

impl TimedNode for CollectorNode {
    fn time_in_nanos(&self) -> u64 {
        self.time_in_nanos
    }

    fn breakdown(&self) -> Option<&Breakdown> {
        self.breakdown.as_ref()
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

impl TimedNode for AggregationNode {
    fn time_in_nanos(&self) -> u64 {
        self.time_in_nanos
    }

    fn breakdown(&self) -> Option<&Breakdown> {
        self.breakdown.as_ref()
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_node_defaults() {
        let node: QueryNode = serde_json::from_value(json!({
            "type": "TermQuery",
            "description": "title:rust",
            "time_in_nanos": 42
        }))
        .unwrap();

        assert_eq!(node.query_type, "TermQuery");
        assert!(node.breakdown.is_none());
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_breakdown_keeps_document_order() {
        let node: AggregationNode = serde_json::from_value(json!({
            "description": "by_day",
            "time_in_nanos": 10,
            "breakdown": { "reduce": 1, "build_aggregation": 2, "initialize": 3 }
        }))
        .unwrap();

        let keys: Vec<&str> = node
            .breakdown
            .as_ref()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["reduce", "build_aggregation", "initialize"]);
    }

    #[test]
    fn test_collector_breakdown() {
        let node: CollectorNode = serde_json::from_value(json!({
            "reason": "search_top_hits",
            "time_in_nanos": 10,
            "breakdown": { "collect": 7 }
        }))
        .unwrap();

        assert_eq!(TimedNode::breakdown(&node).and_then(|b| b.get("collect")), Some(&7));
    }

    #[test]
    fn test_shard_without_aggregations() {
        let shard: ShardProfile = serde_json::from_value(json!({
            "cluster": "(local)",
            "node_id": "n1",
            "index": "idx",
            "shard_id": 3,
            "searches": []
        }))
        .unwrap();

        assert!(shard.aggregations.is_empty());
        assert_eq!(shard.shard_id, 3);
    }
}
