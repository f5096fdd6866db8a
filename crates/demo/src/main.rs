// File: crates/demo/src/main.rs
// Summary: Demo loads the historical float dataset and writes the SVG chart.

use anyhow::{Context, Result};
use floatchart_core::{build_chart, ChartConfig, YearRecord};
use std::path::PathBuf;

// Berkshire insurance float by year, 1967-2012. Small enough to embed;
// a host could equally hand the engine any other pre-parsed dataset.
const DATASET: &str = include_str!("../data/insurance_float.csv");

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    // Accept width/margin overrides from CLI, else the original startup values
    let mut config = ChartConfig::default();
    let mut args = std::env::args().skip(1);
    if let Some(w) = args.next() {
        config.width = w.parse().with_context(|| format!("bad width '{w}'"))?;
    }
    if let Some(m) = args.next() {
        config.margin_horizontal = m.parse().with_context(|| format!("bad margin '{m}'"))?;
    }

    let records = load_records(DATASET).context("failed to parse embedded dataset")?;
    println!("Loaded {} year records", records.len());

    let tree = build_chart(&config, &records);
    println!(
        "Laid out {} groups on a {}x{} surface",
        tree.groups.len(),
        tree.surface_width,
        tree.surface_height
    );

    let out = PathBuf::from("target/out/insurance_float.svg");
    floatchart_svg::render_to_file(&tree, &out)
        .with_context(|| format!("failed to write '{}'", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Parse the CSV dataset into records. All string-to-number conversion
/// happens here; the layout engine only ever sees parsed values.
fn load_records(csv_text: &str) -> Result<Vec<YearRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_text.as_bytes());

    let headers = rdr.headers()?.clone();
    let idx = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("missing '{name}' column"))
    };
    let i_year = idx("year")?;
    let i_float = idx("float")?;
    let i_cost = idx("cost")?;
    let i_bonds = idx("bonds")?;
    let i_note = idx("note")?;

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let field = |i: usize| rec.get(i).unwrap_or("").trim();
        let num = |i: usize| -> Result<f64> {
            field(i)
                .parse::<f64>()
                .with_context(|| format!("bad number '{}' on data row {}", field(i), row + 1))
        };
        out.push(YearRecord {
            year: field(i_year)
                .parse::<i32>()
                .with_context(|| format!("bad year '{}' on data row {}", field(i_year), row + 1))?,
            float: num(i_float)?,
            cost: num(i_cost)?,
            bonds: num(i_bonds)?,
            note: field(i_note).to_string(),
        });
    }
    Ok(out)
}
