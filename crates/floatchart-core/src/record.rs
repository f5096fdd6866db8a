// File: crates/floatchart-core/src/record.rs
// Summary: Year record data model for the float chart.

/// One fiscal year of insurance data.
///
/// Numeric fields arrive already parsed; string-to-decimal conversion is the
/// ingestion side's concern, never the layout engine's.
#[derive(Clone, Debug, PartialEq)]
pub struct YearRecord {
    /// Row identity key, unique; ordering key and vertical band key.
    pub year: i32,
    /// Average float volume, plotted on the log horizontal scale.
    pub float: f64,
    /// Cost-of-float rate; sign selects the bar side at the zero baseline.
    pub cost: f64,
    /// 10-year bond yield; same diverging convention as `cost`.
    pub bonds: f64,
    /// Optional annotation rendered as trailing text. May be empty.
    pub note: String,
}

impl YearRecord {
    pub fn new(year: i32, float: f64, cost: f64, bonds: f64, note: impl Into<String>) -> Self {
        Self { year, float, cost, bonds, note: note.into() }
    }
}

/// Copy of `records` sorted ascending by year. Caller data is left untouched.
pub fn sorted_by_year(records: &[YearRecord]) -> Vec<YearRecord> {
    let mut out = records.to_vec();
    out.sort_by_key(|r| r.year);
    out
}
