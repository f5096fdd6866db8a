// File: crates/floatchart-core/src/format.rs
// Summary: Label formatting: whole percentages and thousands-grouped integers.

/// Format a rate as a whole percentage: `0.05 -> "5%"`, `-0.08 -> "-8%"`.
pub fn percent(v: f64) -> String {
    format!("{}%", (v * 100.0).round() as i64)
}

/// Round to an integer and group with comma separators:
/// `73764.2 -> "73,764"`.
pub fn thousands(v: f64) -> String {
    let n = v.round() as i64;
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
