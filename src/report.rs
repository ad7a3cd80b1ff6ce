use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::{Error, Totals};

static TEMPLATE_NAME: &'static str = "summary";

static TEMPLATE: &'static str = "=== Logistics Metrics Summary ===
Total Distance     : {distance_km} km
Total Duration     : {duration_min} minutes
Total CO₂ Emission : {co2_grams} grams
";

#[derive(Serialize)]
struct Context {
    distance_km: String,
    duration_min: String,
    co2_grams: String,
}

/// Renders the four-line summary of `totals`, each total with two decimals
pub fn text(totals: &Totals) -> Result<String, Error> {
    let context = Context {
        distance_km: format!("{:.2}", totals.distance_km),
        duration_min: format!("{:.2}", totals.duration_min),
        co2_grams: format!("{:.2}", totals.co2_grams),
    };

    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template(TEMPLATE_NAME, TEMPLATE)?;

    Ok(tt.render(TEMPLATE_NAME, &context)?)
}

#[derive(Serialize)]
struct Summary<'a> {
    emission_rate_g_per_km: f64,
    #[serde(flatten)]
    totals: &'a Totals,
}

/// Renders `totals` and the emission rate they were computed with as JSON
pub fn json(totals: &Totals, emission_rate: f64) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(&Summary {
        emission_rate_g_per_km: emission_rate,
        totals,
    })?)
}
