// File: crates/floatchart-core/src/geometry.rs
// Summary: Derived per-build layout geometry: regions, margins, zero baseline.

use crate::scale::LinearScale;
use crate::types::{ChartConfig, Margin, CANVAS_HEIGHT};

/// Layout constants derived from a `ChartConfig`, recomputed on every build.
#[derive(Clone, Copy, Debug)]
pub struct ChartGeometry {
    pub margin: Margin,
    pub width: f32,
    pub height: f32,
    pub year_width: f32,
    pub float_width: f32,
    /// Left edge of the diverging cost/bond region.
    pub cost_chart_x: f32,
    /// Width of the diverging cost/bond region.
    pub cost_chart_w: f32,
    pub x_domain: (f64, f64),
}

impl ChartGeometry {
    pub fn new(config: &ChartConfig) -> Self {
        let margin = Margin::horizontal(config.margin_horizontal);
        let height = CANVAS_HEIGHT - margin.top - margin.bottom;
        let float_width = config.width * config.float_width_fraction;
        Self {
            margin,
            width: config.width,
            height,
            year_width: config.year_column_width,
            float_width,
            cost_chart_x: margin.left + float_width,
            cost_chart_w: config.width - float_width - config.year_column_width,
            x_domain: config.x_domain,
        }
    }

    /// Diverging scale over the fixed domain, positioned in the cost region.
    pub fn diverging_scale(&self) -> LinearScale {
        LinearScale::new(
            self.x_domain,
            (self.cost_chart_x, self.cost_chart_x + self.cost_chart_w),
        )
    }

    /// Zero-anchored delta-to-pixel conversion: how many pixels a domain
    /// delta of `d` spans in the cost region, independent of any origin.
    /// Distinct from `diverging_scale`, which maps absolute positions.
    #[inline]
    pub fn x_port(&self, d: f64) -> f32 {
        ((d / (self.x_domain.1 - self.x_domain.0)) as f32) * self.cost_chart_w
    }

    /// X of the shared zero baseline, in band-group-local coordinates.
    #[inline]
    pub fn zero_x(&self) -> f32 {
        self.float_width + self.x_port(-self.x_domain.0)
    }

    /// Outer surface size including margins.
    pub fn surface_size(&self) -> (f32, f32) {
        (
            self.width + self.margin.left + self.margin.right,
            self.height + self.margin.top + self.margin.bottom,
        )
    }
}
