#[forbid(unsafe_code)]
pub mod chart;
pub mod csv;
mod emissions;
mod error;
pub mod fs;
mod fuel;
mod metrics;
mod model;
pub mod report;

pub use emissions::*;
pub use error::Error;
pub use fuel::fuel_type;
pub use metrics::*;
pub use model::*;

/// Paths of the three input tables
#[derive(Debug, Clone)]
pub struct Inputs {
    /// tab-separated edge list
    pub edges: String,
    /// comma-separated vehicle specifications
    pub vehicles: String,
    /// comma-separated emissions reference table
    pub emissions: String,
}

/// The result of [`analyze`]
#[derive(Debug, Clone)]
pub struct Analysis {
    /// every vehicle with its emission rate, in input order
    pub assigned: Vec<AssignedVehicle>,
    /// the rate applied to every edge, in g CO2 / km
    pub emission_rate: f64,
    pub edges: Vec<EdgeMetrics>,
    pub totals: Totals,
}

/// Loads the three tables, assigns an emission rate to every vehicle and applies the
/// first vehicle's rate to every edge.
/// # Error
/// Errors if a table cannot be loaded, there are no vehicles, or a vehicle has no matching
/// emissions rate while no row of the emissions table has a rate to average
pub fn analyze(inputs: &Inputs) -> Result<Analysis, Error> {
    let edges = load_edges(&inputs.edges)?;
    log::info!("{} - {} edges", inputs.edges, edges.len());
    let vehicles = load_vehicles(&inputs.vehicles)?;
    log::info!("{} - {} vehicles", inputs.vehicles, vehicles.len());
    let lookup = load_emissions(&inputs.emissions)?;
    log::info!("{} - {} emission rows", inputs.emissions, lookup.len());

    let assigned = merge(&vehicles, &lookup)?;
    // a single vehicle is assumed to drive every edge
    let emission_rate = fleet_emission_rate(&assigned)?;
    log::info!("Emission rate: {emission_rate:.2} g/km");

    let edges = edge_metrics(&edges, emission_rate);
    let totals = Totals::from_metrics(&edges);

    Ok(Analysis {
        assigned,
        emission_rate,
        edges,
        totals,
    })
}
