//! User Query
//!
//! A partial set of measured values. Any dimension may be absent; absent
//! means "not considered", never zero.

use crate::dimension::{Dimension, DIMENSION_COUNT};
use serde::{Deserialize, Serialize};

/// Partial mapping from dimension to measured value
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "QueryFields", into = "QueryFields")]
pub struct UserQuery {
    values: [Option<f64>; DIMENSION_COUNT],
}

impl UserQuery {
    /// Empty query (no dimensions supplied)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, dimension: Dimension, value: f64) -> Self {
        self.set(dimension, value);
        self
    }

    pub fn set(&mut self, dimension: Dimension, value: f64) {
        self.values[dimension.index()] = Some(value);
    }

    pub fn clear(&mut self, dimension: Dimension) {
        self.values[dimension.index()] = None;
    }

    pub fn get(&self, dimension: Dimension) -> Option<f64> {
        self.values[dimension.index()]
    }

    /// True if no dimension was supplied
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Number of supplied dimensions
    pub fn len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// Supplied dimensions with their values, in dimension order
    pub fn present(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL
            .into_iter()
            .filter_map(move |dim| self.get(dim).map(|v| (dim, v)))
    }
}

/// Wire shape: `{"N": 90, "temperature": 25, ...}` with every key optional
#[derive(Debug, Default, Serialize, Deserialize)]
struct QueryFields {
    #[serde(rename = "N", default, skip_serializing_if = "Option::is_none")]
    n: Option<f64>,
    #[serde(rename = "P", default, skip_serializing_if = "Option::is_none")]
    p: Option<f64>,
    #[serde(rename = "K", default, skip_serializing_if = "Option::is_none")]
    k: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    humidity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ph: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rainfall: Option<f64>,
}

impl From<QueryFields> for UserQuery {
    fn from(f: QueryFields) -> Self {
        Self {
            values: [f.n, f.p, f.k, f.temperature, f.humidity, f.ph, f.rainfall],
        }
    }
}

impl From<UserQuery> for QueryFields {
    fn from(q: UserQuery) -> Self {
        let [n, p, k, temperature, humidity, ph, rainfall] = q.values;
        Self { n, p, k, temperature, humidity, ph, rainfall }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query() {
        let q = UserQuery::new();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
        assert_eq!(q.present().count(), 0);
    }

    #[test]
    fn test_present_in_dimension_order() {
        let q = UserQuery::new()
            .with(Dimension::Rainfall, 200.0)
            .with(Dimension::Nitrogen, 90.0);

        let present: Vec<_> = q.present().collect();
        assert_eq!(present, vec![(Dimension::Nitrogen, 90.0), (Dimension::Rainfall, 200.0)]);
        assert_eq!(q.get(Dimension::Ph), None);
    }

    #[test]
    fn test_absent_is_not_zero() {
        let mut q = UserQuery::new().with(Dimension::Ph, 0.0);
        assert_eq!(q.get(Dimension::Ph), Some(0.0));
        q.clear(Dimension::Ph);
        assert!(q.is_empty());
    }

    #[test]
    fn test_json_shape() {
        let q: UserQuery = serde_json::from_str(r#"{"N": 90, "ph": 6.5}"#).unwrap();
        assert_eq!(q.get(Dimension::Nitrogen), Some(90.0));
        assert_eq!(q.get(Dimension::Ph), Some(6.5));
        assert_eq!(q.len(), 2);

        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, r#"{"N":90.0,"ph":6.5}"#);
    }
}
