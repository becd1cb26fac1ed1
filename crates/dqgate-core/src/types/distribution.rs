//! Empirical categorical distributions.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// An empirical probability distribution over sorted category labels.
///
/// Labels are kept in ascending order so two distributions built from the
/// same category set align index-for-index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalDistribution {
    labels: Vec<String>,
    probs: Vec<f64>,
}

impl CategoricalDistribution {
    /// Build a distribution from pre-computed labels and probabilities.
    ///
    /// `labels` and `probs` must have equal length; labels should already
    /// be sorted ascending.
    pub fn new(labels: Vec<String>, probs: Vec<f64>) -> Self {
        debug_assert_eq!(labels.len(), probs.len());
        Self { labels, probs }
    }

    /// Build a normalized frequency distribution from observed values.
    ///
    /// Each label's probability is its count divided by the total number
    /// of observations. An empty input yields an empty distribution.
    pub fn from_observations<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        let mut total = 0usize;
        for value in values {
            *counts.entry(value).or_default() += 1;
            total += 1;
        }

        let mut entries: Vec<(&str, usize)> = counts.into_iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let total_f = total as f64;
        let (labels, probs) = entries
            .into_iter()
            .map(|(label, count)| (label.to_string(), count as f64 / total_f))
            .unzip();

        Self { labels, probs }
    }

    /// Category labels, sorted ascending.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Probabilities aligned with `labels()`.
    pub fn probs(&self) -> &[f64] {
        &self.probs
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Sum of all probabilities (1.0 for a well-formed distribution).
    pub fn sum(&self) -> f64 {
        self.probs.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_observations_sorts_and_normalizes() {
        let dist = CategoricalDistribution::from_observations(
            ["b", "a", "b", "c"].into_iter(),
        );
        assert_eq!(dist.labels(), &["a", "b", "c"]);
        assert_eq!(dist.probs(), &[0.25, 0.5, 0.25]);
        assert!((dist.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_observations() {
        let dist = CategoricalDistribution::from_observations(std::iter::empty());
        assert!(dist.is_empty());
        assert_eq!(dist.sum(), 0.0);
    }
}
