//! Detail specifier: which shard dimensions prefix every path, and in
//! what order.
//!
//! Written as a compact string of characters, e.g. `cnis` (the default)
//! or `is`. Dimensions left out are merged in the output.

use crate::parser::ShardProfile;
use crate::utils::config::SHARD_PREFIX;
use crate::utils::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// One shard-identifying dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailTag {
    Cluster,
    Node,
    Index,
    Shard,
}

impl DetailTag {
    /// Map a specifier character to its tag
    pub fn from_char(c: char) -> Result<Self, ConfigError> {
        match c {
            'c' => Ok(Self::Cluster),
            'n' => Ok(Self::Node),
            'i' => Ok(Self::Index),
            's' => Ok(Self::Shard),
            other => Err(ConfigError::UnknownDetail(other)),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Cluster => 'c',
            Self::Node => 'n',
            Self::Index => 'i',
            Self::Shard => 's',
        }
    }

    /// Frame label this tag contributes for a shard
    pub fn label_for(self, shard: &ShardProfile) -> String {
        match self {
            Self::Cluster => shard.cluster.clone(),
            Self::Node => shard.node_id.clone(),
            Self::Index => shard.index.clone(),
            Self::Shard => format!("{}{}", SHARD_PREFIX, shard.shard_id),
        }
    }
}

/// Ordered set of detail tags, at most one of each
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSpec {
    tags: Vec<DetailTag>,
}

impl DetailSpec {
    /// Build from tags, rejecting duplicates
    pub fn new(tags: impl IntoIterator<Item = DetailTag>) -> Result<Self, ConfigError> {
        let mut seen: Vec<DetailTag> = Vec::with_capacity(4);
        for tag in tags {
            if seen.contains(&tag) {
                return Err(ConfigError::DuplicateDetail(tag.as_char()));
            }
            seen.push(tag);
        }
        Ok(Self { tags: seen })
    }

    /// No shard prefix at all; every shard is merged
    pub fn none() -> Self {
        Self { tags: Vec::new() }
    }

    pub fn tags(&self) -> &[DetailTag] {
        &self.tags
    }

    pub fn contains(&self, tag: DetailTag) -> bool {
        self.tags.contains(&tag)
    }

    /// Labels pushed for a shard, outermost first
    pub fn prefix_labels(&self, shard: &ShardProfile) -> Vec<String> {
        self.tags.iter().map(|tag| tag.label_for(shard)).collect()
    }
}

impl Default for DetailSpec {
    fn default() -> Self {
        Self {
            tags: vec![DetailTag::Cluster, DetailTag::Node, DetailTag::Index, DetailTag::Shard],
        }
    }
}

impl FromStr for DetailSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tags = s
            .chars()
            .map(DetailTag::from_char)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(tags)
    }
}

impl fmt::Display for DetailSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in &self.tags {
            write!(f, "{}", tag.as_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::config::DEFAULT_DETAIL;

    fn shard() -> ShardProfile {
        ShardProfile {
            cluster: "c1".to_string(),
            node_id: "n1".to_string(),
            index: "i1".to_string(),
            shard_id: 7,
            searches: vec![],
            aggregations: vec![],
        }
    }

    #[test]
    fn test_default_matches_constant() {
        assert_eq!(DetailSpec::default(), DEFAULT_DETAIL.parse().unwrap());
        assert_eq!(DetailSpec::default().to_string(), DEFAULT_DETAIL);
    }

    #[test]
    fn test_parse_keeps_order() {
        let spec: DetailSpec = "si".parse().unwrap();
        assert_eq!(spec.tags(), [DetailTag::Shard, DetailTag::Index]);
        assert_eq!(spec.prefix_labels(&shard()), ["s7", "i1"]);
    }

    #[test]
    fn test_parse_empty_is_none() {
        let spec: DetailSpec = "".parse().unwrap();
        assert_eq!(spec, DetailSpec::none());
        assert!(spec.prefix_labels(&shard()).is_empty());
    }

    #[test]
    fn test_parse_duplicate() {
        assert_eq!(
            "cnc".parse::<DetailSpec>(),
            Err(ConfigError::DuplicateDetail('c'))
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "cx".parse::<DetailSpec>(),
            Err(ConfigError::UnknownDetail('x'))
        );
        assert_eq!(
            "C".parse::<DetailSpec>(),
            Err(ConfigError::UnknownDetail('C'))
        );
    }

    #[test]
    fn test_contains() {
        let spec: DetailSpec = "ni".parse().unwrap();
        assert!(spec.contains(DetailTag::Node));
        assert!(!spec.contains(DetailTag::Cluster));
    }
}
