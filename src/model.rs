use serde::{de::Error as _, Deserialize, Deserializer, Serialize};

use crate::Error;

/// An arc of the road network. Empty cells are `None`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// length in meters
    #[serde(deserialize_with = "cell")]
    pub distance: Option<f64>,
    /// travel time in seconds
    #[serde(deserialize_with = "cell")]
    pub duration: Option<f64>,
}

/// A vehicle specification, as found in the vehicle table
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Vehicle {
    #[serde(rename = "Engine Size(L)")]
    pub engine_size: f64,
    #[serde(rename = "Cylinders", deserialize_with = "integral")]
    pub cylinders: u32,
    /// integer code, see [`crate::fuel_type`]
    #[serde(rename = "Fuel Type", deserialize_with = "integral")]
    pub fuel_type: i64,
}

/// A row of the emissions reference table
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmissionsLookupRow {
    #[serde(rename = "Engine Size(L)")]
    pub engine_size: f64,
    #[serde(rename = "Cylinders", deserialize_with = "integral")]
    pub cylinders: u32,
    /// single-letter fuel category (e.g. `X`)
    #[serde(rename = "Fuel Type")]
    pub fuel_type: String,
    /// grams of CO2 per km; `None` when the cell is empty
    #[serde(rename = "CO2 Emissions(g/km)", deserialize_with = "cell")]
    pub co2_g_per_km: Option<f64>,
}

/// A numeric cell that may be empty. Unlike a bare `Option`, the column itself is required.
fn cell<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Option::<f64>::deserialize(deserializer)
}

/// An integer cell that may be written as a float, e.g. `4.0`
fn integral<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(D::Error::custom(format!("{value} is not an integer")));
    }
    T::try_from(value as i64).map_err(|_| D::Error::custom(format!("{value} is out of range")))
}

/// Loads the tab-separated edge list at `path`.
/// # Error
/// Errors if the file cannot be read or misses `distance` or `duration`
pub fn load_edges(path: &str) -> Result<Vec<Edge>, Error> {
    super::csv::load(path, b'\t')
}

/// Loads the comma-separated vehicle table at `path`.
/// # Error
/// Errors if the file cannot be read or misses `Engine Size(L)`, `Cylinders` or `Fuel Type`
pub fn load_vehicles(path: &str) -> Result<Vec<Vehicle>, Error> {
    super::csv::load(path, b',')
}

/// Loads the comma-separated emissions reference table at `path`.
/// # Error
/// Errors if the file cannot be read or misses one of the join keys or `CO2 Emissions(g/km)`
pub fn load_emissions(path: &str) -> Result<Vec<EmissionsLookupRow>, Error> {
    super::csv::load(path, b',')
}
