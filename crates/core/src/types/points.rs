//! Points parsing and display formatting.

/// Format a points amount with thousands separators for buyer-facing
/// messages (e.g. `12500` becomes `"12,500"`).
#[must_use]
pub fn format_points(points: i64) -> String {
    let digits = points.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if points < 0 {
        out.push('-');
    }
    let first_group = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i % 3) == first_group {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parse a points amount from free-form text.
///
/// Accepts integer and float renderings (`"250"`, `"250.0"`); floats are
/// truncated toward zero. Returns `None` for anything non-numeric,
/// non-finite, or outside the `i64` range.
#[must_use]
pub fn parse_points(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(n);
    }
    let f = trimmed.parse::<f64>().ok()?;
    if !f.is_finite() || f <= -9_223_372_036_854_775_808.0 || f >= 9_223_372_036_854_775_807.0 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let truncated = f.trunc() as i64;
    Some(truncated)
}
