use std::error::Error;

use green_logistics::{analyze, chart, fs, Inputs};

const EMISSIONS: &str = "Make,Model,Engine Size(L),Cylinders,Fuel Type,CO2 Emissions(g/km)
ACURA,ILX,2.0,4,Z,196
ACURA,RDX AWD,3.5,6,X,300
FORD,F-150,5.0,8,E,
";

fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path.display().to_string()
}

fn inputs(dir: &tempfile::TempDir, vehicles: &str, emissions: &str) -> Inputs {
    Inputs {
        edges: write(
            dir,
            "world_edges.txt",
            "u\tv\tdistance\tduration\n0\t1\t1000\t60\n1\t2\t2000\t120\n",
        ),
        vehicles: write(dir, "vehicles copy.csv", vehicles),
        emissions: write(dir, "co2_emissions.csv", emissions),
    }
}

/// Verifies the worked example: two edges of 1 and 2 km driven by a vehicle emitting 150 g/km
#[test]
fn acceptance_totals() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let emissions = "Engine Size(L),Cylinders,Fuel Type,CO2 Emissions(g/km)\n2.0,4,D,150\n";
    let vehicles = "Vehicle ID,Engine Size(L),Cylinders,Fuel Type\n1,2.0,4,4\n2,3.5,6,1\n";

    let analysis = analyze(&inputs(&dir, vehicles, emissions))?;

    assert_eq!(analysis.emission_rate, 150.0);
    assert_eq!(analysis.totals.distance_km, 3.0);
    assert_eq!(analysis.totals.duration_min, 3.0);
    assert_eq!(analysis.totals.co2_grams, 450.0);
    assert_eq!(analysis.assigned.len(), 2);
    Ok(())
}

/// An unmatched first vehicle is assigned the mean of the whole emissions table
#[test]
fn acceptance_mean_fill() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let emissions = "Engine Size(L),Cylinders,Fuel Type,CO2 Emissions(g/km)
2.0,4,Z,100
3.5,6,X,300
";
    // code 7 has no fuel category
    let vehicles = "Engine Size(L),Cylinders,Fuel Type\n2.0,4,7\n2.0,4,2\n";

    let analysis = analyze(&inputs(&dir, vehicles, emissions))?;

    assert_eq!(analysis.assigned.len(), 2);
    assert!(!analysis.assigned[0].matched);
    assert!(analysis.assigned[1].matched);
    assert_eq!(analysis.emission_rate, 200.0);
    assert_eq!(analysis.totals.co2_grams, 600.0);
    Ok(())
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut inputs = inputs(
        &dir,
        "Engine Size(L),Cylinders,Fuel Type\n2.0,4,1\n",
        "Engine Size(L),Cylinders,Fuel Type,CO2 Emissions(g/km)\n2.0,4,X,100\n",
    );
    inputs.edges = dir.path().join("nope.txt").display().to_string();

    let error = analyze(&inputs).unwrap_err();
    assert!(matches!(error, green_logistics::Error::Io { .. }));
}

#[test]
fn missing_column() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = inputs(
        &dir,
        "Engine Size(L),Fuel Type\n2.0,1\n",
        "Engine Size(L),Cylinders,Fuel Type,CO2 Emissions(g/km)\n2.0,4,X,100\n",
    );

    let error = analyze(&inputs).unwrap_err();
    assert!(matches!(error, green_logistics::Error::Csv { .. }));
}

/// A matching row with an empty rate is filled with the mean of the non-empty rates
#[test]
fn empty_rate() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let inputs = inputs(&dir, "Engine Size(L),Cylinders,Fuel Type\n5.0,8,3\n", EMISSIONS);

    let analysis = analyze(&inputs)?;

    assert!(!analysis.assigned[0].matched);
    assert_eq!(analysis.emission_rate, 248.0);
    assert_eq!(analysis.totals.co2_grams, 744.0);
    Ok(())
}

/// Empty edge cells are skipped by the totals
#[test]
fn empty_edge_cells() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let mut inputs = inputs(
        &dir,
        "Engine Size(L),Cylinders,Fuel Type\n2.0,4,1\n",
        "Engine Size(L),Cylinders,Fuel Type,CO2 Emissions(g/km)\n2.0,4,X,150\n",
    );
    inputs.edges = write(
        &dir,
        "sparse_edges.txt",
        "distance\tduration\n1000\t\n2000\t120\n",
    );

    let analysis = analyze(&inputs)?;

    assert_eq!(analysis.totals.distance_km, 3.0);
    assert_eq!(analysis.totals.duration_min, 2.0);
    assert_eq!(analysis.totals.co2_grams, 450.0);
    Ok(())
}

/// Fuel type codes stored as floats (`1.0`) still resolve
#[test]
fn float_fuel_code() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let inputs = inputs(
        &dir,
        "Engine Size(L),Cylinders,Fuel Type\n2.0,4,1.0\n",
        "Engine Size(L),Cylinders,Fuel Type,CO2 Emissions(g/km)\n2.0,4,X,150\n",
    );

    let analysis = analyze(&inputs)?;

    assert!(analysis.assigned[0].matched);
    assert_eq!(analysis.totals.co2_grams, 450.0);
    Ok(())
}

#[test]
fn no_vehicles() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = inputs(
        &dir,
        "Engine Size(L),Cylinders,Fuel Type\n",
        "Engine Size(L),Cylinders,Fuel Type,CO2 Emissions(g/km)\n2.0,4,X,100\n",
    );

    let error = analyze(&inputs).unwrap_err();
    assert!(matches!(error, green_logistics::Error::NoVehicles));
}

/// The chart is written into a (new) output directory and is not empty
#[test]
fn acceptance_chart() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let emissions = "Engine Size(L),Cylinders,Fuel Type,CO2 Emissions(g/km)\n2.0,4,X,150\n";
    let vehicles = "Engine Size(L),Cylinders,Fuel Type\n2.0,4,1\n";
    let analysis = analyze(&inputs(&dir, vehicles, emissions))?;

    let path = dir.path().join("analysis_outputs").join(chart::CHART_FILE);
    fs::put(&path, &chart::render(&analysis.totals)?)?;

    assert!(std::fs::metadata(&path)?.len() > 0);
    Ok(())
}

#[test]
fn export_edges() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let emissions = "Engine Size(L),Cylinders,Fuel Type,CO2 Emissions(g/km)\n2.0,4,X,150\n";
    let vehicles = "Engine Size(L),Cylinders,Fuel Type\n2.0,4,1\n";
    let analysis = analyze(&inputs(&dir, vehicles, emissions))?;

    let data = green_logistics::csv::serialize(analysis.edges.iter())?;

    assert_eq!(
        String::from_utf8(data)?,
        "distance_km,duration_min,co2_grams\n1.0,1.0,150.0\n2.0,2.0,300.0\n"
    );
    Ok(())
}
