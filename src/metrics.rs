use serde::{Deserialize, Serialize};

use crate::Edge;

/// Metrics derived from a single [`Edge`]; `None` where the edge has an empty cell
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct EdgeMetrics {
    pub distance_km: Option<f64>,
    pub duration_min: Option<f64>,
    pub co2_grams: Option<f64>,
}

impl EdgeMetrics {
    /// Converts `edge` to km and minutes and applies `co2_g_per_km` to its distance
    pub fn new(edge: &Edge, co2_g_per_km: f64) -> Self {
        let distance_km = edge.distance.map(|d| d / 1000.0);
        Self {
            distance_km,
            duration_min: edge.duration.map(|d| d / 60.0),
            co2_grams: distance_km.map(|d| d * co2_g_per_km),
        }
    }
}

/// Returns the [`EdgeMetrics`] of every edge, all with the same emission rate
pub fn edge_metrics(edges: &[Edge], co2_g_per_km: f64) -> Vec<EdgeMetrics> {
    edges
        .iter()
        .map(|edge| EdgeMetrics::new(edge, co2_g_per_km))
        .collect()
}

/// Column-wise sums of [`EdgeMetrics`]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub distance_km: f64,
    pub duration_min: f64,
    pub co2_grams: f64,
}

/// Sums the present, non-NaN values of a column
fn sum(values: impl Iterator<Item = Option<f64>>) -> f64 {
    values.flatten().filter(|v| !v.is_nan()).sum()
}

impl Totals {
    /// Sums each column, skipping missing values; an empty input sums to zero
    pub fn from_metrics(metrics: &[EdgeMetrics]) -> Self {
        Self {
            distance_km: sum(metrics.iter().map(|m| m.distance_km)),
            duration_min: sum(metrics.iter().map(|m| m.duration_min)),
            co2_grams: sum(metrics.iter().map(|m| m.co2_grams)),
        }
    }
}
