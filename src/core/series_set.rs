use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Named sample sets in insertion order.
///
/// Iteration order is the draw order of the curves: later series are drawn on
/// top of earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesSet {
    series: IndexMap<String, Vec<f64>>,
}

impl SeriesSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a series. A replaced series keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, samples: Vec<f64>) -> Option<Vec<f64>> {
        self.series.insert(name.into(), samples)
    }

    #[must_use]
    pub fn with_series(mut self, name: impl Into<String>, samples: Vec<f64>) -> Self {
        self.insert(name, samples);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.series.get(name).map(Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.series.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.series
            .iter()
            .map(|(name, samples)| (name.as_str(), samples.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    #[must_use]
    pub fn total_sample_count(&self) -> usize {
        self.series.values().map(Vec::len).sum()
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse series json: {e}")))
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<f64>)> for SeriesSet {
    fn from_iter<I: IntoIterator<Item = (K, Vec<f64>)>>(iter: I) -> Self {
        Self {
            series: iter
                .into_iter()
                .map(|(name, samples)| (name.into(), samples))
                .collect(),
        }
    }
}

/// Checks that `key` can be used both as a class token and a CSS class selector.
pub fn validate_series_key(key: &str) -> ChartResult<()> {
    if key.is_empty() {
        return Err(ChartError::InvalidData(
            "series key must not be empty".to_owned(),
        ));
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ChartError::InvalidData(format!(
            "series key `{key}` may only contain ASCII letters, digits, `-` and `_`"
        )));
    }
    if key.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(ChartError::InvalidData(format!(
            "series key `{key}` must not start with a digit"
        )));
    }
    Ok(())
}
