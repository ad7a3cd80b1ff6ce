use std::collections::HashMap;

use crate::{fuel_type, EmissionsLookupRow, Error, Vehicle};

/// A [`Vehicle`] with its CO2 emission rate
#[derive(Debug, Clone, PartialEq)]
pub struct AssignedVehicle {
    pub vehicle: Vehicle,
    /// the category the vehicle's fuel-type code resolved to
    pub fuel_type: Option<&'static str>,
    /// grams of CO2 per km
    pub co2_g_per_km: f64,
    /// whether the rate came from the emissions table (`true`) or is its mean (`false`)
    pub matched: bool,
}

/// (engine size bits, cylinders, fuel category)
type Key<'a> = (u64, u32, &'a str);

fn key(engine_size: f64, cylinders: u32, fuel_type: &str) -> Option<Key<'_>> {
    // NaN never joins; -0.0 joins with 0.0
    (!engine_size.is_nan()).then(|| ((engine_size + 0.0).to_bits(), cylinders, fuel_type))
}

/// Returns the mean CO2 rate over the whole emissions table, skipping empty cells.
/// `None` when no row has a rate.
pub fn mean_emission_rate(lookup: &[EmissionsLookupRow]) -> Option<f64> {
    let (sum, count) = lookup
        .iter()
        .filter_map(|r| r.co2_g_per_km)
        .fold((0.0, 0usize), |(sum, count), rate| (sum + rate, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Left-joins `vehicles` with `lookup` on (engine size, cylinders, fuel type).
///
/// Every vehicle appears exactly once in the result and in the same order. When more than
/// one row of `lookup` shares a key, the first one is used. Vehicles without a match, or whose
/// match has no rate, are assigned the mean rate of the whole `lookup` table (not of the
/// unmatched rows).
/// # Error
/// Errors when a vehicle is unmatched and no row of `lookup` has a rate
pub fn merge(
    vehicles: &[Vehicle],
    lookup: &[EmissionsLookupRow],
) -> Result<Vec<AssignedVehicle>, Error> {
    let mut index = HashMap::<Key, Option<f64>>::with_capacity(lookup.len());
    for row in lookup {
        if let Some(key) = key(row.engine_size, row.cylinders, &row.fuel_type) {
            index.entry(key).or_insert(row.co2_g_per_km);
        }
    }
    let mean = mean_emission_rate(lookup);

    let assigned = vehicles
        .iter()
        .map(|vehicle| {
            let fuel_type = fuel_type(vehicle.fuel_type);
            if fuel_type.is_none() {
                log::warn!("Unknown fuel type code {}", vehicle.fuel_type);
            }
            let rate = fuel_type
                .and_then(|fuel| key(vehicle.engine_size, vehicle.cylinders, fuel))
                .and_then(|key| index.get(&key).copied().flatten());

            let (co2_g_per_km, matched) = match rate {
                Some(rate) => (rate, true),
                None => (mean.ok_or(Error::NoEmissionRate)?, false),
            };
            Ok::<_, Error>(AssignedVehicle {
                vehicle: *vehicle,
                fuel_type,
                co2_g_per_km,
                matched,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let unmatched = assigned.iter().filter(|a| !a.matched).count();
    if unmatched > 0 {
        log::warn!(
            "{unmatched} of {} vehicles have no emissions row; using the table mean of {:.2} g/km",
            assigned.len(),
            mean.unwrap_or_default()
        );
    }
    Ok(assigned)
}

/// Returns the emission rate applied to every edge: the one of the first vehicle.
/// # Error
/// Errors when there are no vehicles
pub fn fleet_emission_rate(assigned: &[AssignedVehicle]) -> Result<f64, Error> {
    assigned
        .first()
        .map(|a| a.co2_g_per_km)
        .ok_or(Error::NoVehicles)
}
