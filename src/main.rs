use std::{
    error::Error,
    path::{Path, PathBuf},
};

use clap::Parser;
use simple_logger::SimpleLogger;

use green_logistics::*;

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
enum Format {
    Text,
    Json,
}

const ABOUT: &'static str = r#"Computes the total distance, travel duration and CO2 emissions of a road network
and writes a bar chart of them to `<output-dir>/logistics_metrics_summary.png`.

The emission rate of every vehicle is looked up in the emissions table by
engine size, cylinders and fuel type; vehicles without a match get the mean rate of the
whole table. The rate of the first vehicle is applied to every edge.
"#;

#[derive(Parser, Debug)]
#[command(author, version, about = ABOUT)]
struct Cli {
    /// Tab-separated edge list with `distance` (m) and `duration` (s)
    #[arg(long, default_value = "world/world_edges.txt")]
    edges: String,
    /// Vehicle table with `Engine Size(L)`, `Cylinders` and `Fuel Type` (code 1-6)
    #[arg(long, default_value = "vehicles copy.csv")]
    vehicles: String,
    /// Emissions table with `Engine Size(L)`, `Cylinders`, `Fuel Type` and `CO2 Emissions(g/km)`
    #[arg(long, default_value = "co2_emissions.csv")]
    emissions: String,
    /// Directory where the chart is written to
    #[arg(long, default_value = "analysis_outputs")]
    output_dir: PathBuf,
    #[arg(short, long, value_enum, default_value_t=Format::Text)]
    format: Format,
    /// Optional path to write the metrics of every edge to, as CSV
    #[arg(long)]
    export_edges: Option<PathBuf>,
    /// Do not open the chart in the system image viewer
    #[arg(long)]
    no_show: bool,
}

/// Opens `path` in the system viewer. A host without one is not an error.
fn show(path: &Path) {
    if let Err(e) = opener::open(path) {
        log::warn!("{} - could not be displayed: {e}", path.display());
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;

    let cli = Cli::parse();

    let analysis = analyze(&Inputs {
        edges: cli.edges,
        vehicles: cli.vehicles,
        emissions: cli.emissions,
    })?;

    match cli.format {
        Format::Text => print!("{}", report::text(&analysis.totals)?),
        Format::Json => println!(
            "{}",
            report::json(&analysis.totals, analysis.emission_rate)?
        ),
    }

    if let Some(path) = cli.export_edges {
        let data = green_logistics::csv::serialize(analysis.edges.iter())?;
        fs::put(&path, &data)?;
    }

    let plot_path = cli.output_dir.join(chart::CHART_FILE);
    fs::put(&plot_path, &chart::render(&analysis.totals)?)?;
    if !cli.no_show {
        show(&plot_path);
    }

    if let Format::Text = cli.format {
        println!("\n📊 Plot saved to: {}", plot_path.display());
    }
    Ok(())
}
