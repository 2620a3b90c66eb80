//! Summary statistics over an accumulated run.
//!
//! Only used for logging; emitted lines never depend on it.

use super::stack_builder::SampleAccumulator;
use log::debug;

/// Weight distribution statistics
///
/// **Public** - returned from calculate_weight_distribution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightDistribution {
    /// Total weight across all stacks
    pub total_weight: u64,

    /// Number of unique stacks
    pub stack_count: usize,

    /// Mean weight per stack
    pub mean_weight: u64,

    /// Median weight per stack
    pub median_weight: u64,

    /// Heaviest stack and its weight
    pub heaviest: Option<(String, u64)>,
}

/// Calculate weight distribution over every accumulated path
///
/// **Public** - provides summary statistics
pub fn calculate_weight_distribution(samples: &SampleAccumulator) -> WeightDistribution {
    if samples.is_empty() {
        return WeightDistribution::default();
    }

    let total_weight = samples.total_weight();
    let stack_count = samples.len();

    let mut weights: Vec<u64> = samples.iter().map(|(_, w)| w).collect();
    weights.sort_unstable();
    let median_weight = weights[weights.len() / 2];

    // first path wins ties, so the result is stable across runs
    let heaviest = samples
        .iter()
        .fold(None::<(&str, u64)>, |best, (path, weight)| match best {
            Some((_, best_weight)) if best_weight >= weight => best,
            _ => Some((path, weight)),
        })
        .map(|(path, weight)| (path.to_string(), weight));

    debug!("Weight distribution over {} stacks", stack_count);

    WeightDistribution {
        total_weight,
        stack_count,
        mean_weight: total_weight / stack_count as u64,
        median_weight,
        heaviest,
    }
}

impl WeightDistribution {
    /// Get human-readable summary
    ///
    /// **Public** - for logging
    pub fn summary(&self) -> String {
        let mut text = format!(
            "Total: {} ns | Stacks: {} | Mean: {} | Median: {}",
            self.total_weight, self.stack_count, self.mean_weight, self.median_weight
        );
        if let Some((path, weight)) = &self.heaviest {
            text.push_str(&format!(" | Heaviest: {} ({} ns)", path, weight));
        }
        text
    }
}
