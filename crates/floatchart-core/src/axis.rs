// File: crates/floatchart-core/src/axis.rs
// Summary: Tick selection and diverging-axis group assembly.

use crate::format;
use crate::geometry::ChartGeometry;
use crate::primitive::{Group, TextAnchor};

/// Axis orientation: which side of the chart the labels sit on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Top,
    Bottom,
}

/// Tick values covering `domain`: multiples of a 1/2/5-stepped increment,
/// at most roughly `count` of them.
pub fn ticks(domain: (f64, f64), count: usize) -> Vec<f64> {
    let (lo, hi) = domain;
    if !(hi > lo) || count == 0 {
        return Vec::new();
    }
    let step = tick_increment(lo, hi, count);
    let start = (lo / step).ceil();
    let stop = (hi / step).floor();
    let mut out = Vec::new();
    let mut i = start;
    while i <= stop + 0.5 {
        out.push(i * step);
        i += 1.0;
    }
    out
}

fn tick_increment(lo: f64, hi: f64, count: usize) -> f64 {
    let step = (hi - lo) / count as f64;
    let base = 10f64.powf(step.log10().floor());
    let error = step / base;
    if error >= 50f64.sqrt() {
        base * 10.0
    } else if error >= 10f64.sqrt() {
        base * 5.0
    } else if error >= 2f64.sqrt() {
        base * 2.0
    } else {
        base
    }
}

/// Assemble one axis block over the diverging scale.
///
/// Tick gridlines span the full chart height; each tick carries a
/// whole-percent label above (top) or below (bottom) the chart, and a domain
/// line closes off the cost region.
pub fn axis_group(geom: &ChartGeometry, orientation: Orientation, tick_count: usize) -> Group {
    let scale = geom.diverging_scale();
    let (class, ty) = match orientation {
        Orientation::Top => ("x axis", geom.margin.top + 3.0),
        Orientation::Bottom => ("x axis b", geom.margin.top - 3.0),
    };
    let mut g = Group::new(class, 0.0, ty);
    for t in ticks(geom.x_domain, tick_count) {
        let x = scale.to_px(t);
        g.line(x, 0.0, x, geom.height, "tick");
        let (y, dy_em) = match orientation {
            Orientation::Top => (-3.0, 0.0),
            Orientation::Bottom => (geom.height + 3.0, 0.71),
        };
        g.text(x, y, dy_em, TextAnchor::Middle, "tick", format::percent(t));
    }
    let y = match orientation {
        Orientation::Top => 0.0,
        Orientation::Bottom => geom.height,
    };
    g.line(geom.cost_chart_x, y, geom.cost_chart_x + geom.cost_chart_w, y, "line");
    g
}
