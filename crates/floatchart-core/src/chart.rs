// File: crates/floatchart-core/src/chart.rs
// Summary: Layout engine: turns year records into the drawable primitive tree.

use crate::axis::{axis_group, Orientation};
use crate::format;
use crate::geometry::ChartGeometry;
use crate::primitive::{ChartTree, Group, TextAnchor};
use crate::record::{sorted_by_year, YearRecord};
use crate::scale::{Band, BandScale, LogScale};
use crate::types::{ChartConfig, FLOAT_BAR_FRACTION, FLOAT_RANGE_FRACTION, RATE_BAR_FRACTION};

/// Number of candidate ticks offered to the diverging axes.
const TICK_COUNT: usize = 10;

/// Build the full primitive tree for one chart.
///
/// Pure: the same `(config, records)` always produces the same tree, and the
/// caller's records are never mutated. Rows are laid out ascending by year;
/// duplicate years collide onto the same band (known limitation, not
/// guarded). An empty slice yields a valid chart with key and axes but zero
/// bands.
pub fn build_chart(config: &ChartConfig, records: &[YearRecord]) -> ChartTree {
    let geom = ChartGeometry::new(config);
    let rows = sorted_by_year(records);

    let bands = BandScale::new(rows.iter().map(|r| r.year).collect(), geom.height);
    let float_scale = float_scale(&geom, &rows);

    let (surface_width, surface_height) = geom.surface_size();
    let mut tree = ChartTree { surface_width, surface_height, groups: Vec::new() };

    tree.groups.push(key_group(&geom));
    tree.groups.push(axis_group(&geom, Orientation::Top, TICK_COUNT));
    tree.groups.push(axis_group(&geom, Orientation::Bottom, TICK_COUNT));

    for row in &rows {
        if let Some(band) = bands.band(row.year) {
            tree.groups.push(band_group(&geom, &float_scale, row, band));
        }
    }
    for row in &rows {
        if let Some(band) = bands.band(row.year) {
            tree.groups.push(note_group(&geom, row, band));
        }
    }
    tree
}

/// Log scale for float bar widths over the dataset's own extent.
/// An empty dataset collapses to a single-point domain, which maps to zero.
fn float_scale(geom: &ChartGeometry, rows: &[YearRecord]) -> LogScale {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for r in rows {
        lo = lo.min(r.float);
        hi = hi.max(r.float);
    }
    if !lo.is_finite() || !hi.is_finite() {
        lo = 1.0;
        hi = 1.0;
    }
    LogScale::new((lo, hi), (0.0, FLOAT_RANGE_FRACTION * geom.float_width))
}

/// Legend: float caption, cost/bond swatches meeting at the zero baseline,
/// and the two series captions on either side.
fn key_group(geom: &ChartGeometry) -> Group {
    let zero_x = geom.zero_x();
    let mut g = Group::new("bar key", geom.margin.left, 5.0);
    g.text(0.0, 0.0, 0.5, TextAnchor::Start, "", "Average Float ($mil, log)");
    g.rect(zero_x - 25.0, -1.0, 25.0, 8.0, "cost");
    g.rect(zero_x, -1.0, 25.0, 8.0, "bond");
    g.text(zero_x - 30.0, 0.0, 0.5, TextAnchor::End, "", "Cost of Float");
    g.text(zero_x + 30.0, 0.0, 0.5, TextAnchor::Start, "", "10 Year Govt. Bond Yield");
    g
}

/// One per-year row: background band, float bar, diverging cost/bond bars,
/// float value label, year label.
fn band_group(geom: &ChartGeometry, float_scale: &LogScale, row: &YearRecord, band: Band) -> Group {
    let h = band.height;
    let mut g = Group::new("bar", geom.margin.left, geom.margin.top + band.y);

    let parity = if row.year % 2 == 0 { "even" } else { "odd" };
    g.rect(0.0, 0.0, geom.width, h, parity);

    let float_px = float_scale.to_px(row.float);
    g.rect(0.0, 0.15 * h, float_px, FLOAT_BAR_FRACTION * h, "float");

    // Diverging bars share the zero baseline: negative values extend left of
    // it, non-negative values extend right.
    let cost_w = geom.x_port(row.cost.abs());
    let cost_x = if row.cost < 0.0 { geom.zero_x() - cost_w } else { geom.zero_x() };
    g.rect(cost_x, (0.5 - RATE_BAR_FRACTION) * h, cost_w, RATE_BAR_FRACTION * h, "cost");

    let bond_w = geom.x_port(row.bonds.abs());
    let bond_x = if row.bonds < 0.0 { geom.zero_x() - bond_w } else { geom.zero_x() };
    g.rect(bond_x, 0.5 * h, bond_w, RATE_BAR_FRACTION * h, "bond");

    g.text(
        float_px - 4.0,
        h / 2.0,
        0.35,
        TextAnchor::End,
        "labels",
        format::thousands(row.float),
    );
    g.text(
        geom.width - 4.0,
        h / 2.0,
        0.35,
        TextAnchor::End,
        "y label",
        row.year.to_string(),
    );
    g
}

/// Trailing annotation for one row. Empty notes still emit an empty label.
fn note_group(geom: &ChartGeometry, row: &YearRecord, band: Band) -> Group {
    let mut g = Group::new("note", geom.margin.left, geom.margin.top + band.y);
    g.text(
        geom.width - geom.year_width,
        band.height / 2.0,
        0.35,
        TextAnchor::End,
        "notes",
        row.note.clone(),
    );
    g
}
