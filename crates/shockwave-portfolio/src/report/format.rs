//! Number formatting for reports.

/// Formats a value as whole currency units with thousands separators.
///
/// ```
/// use shockwave_portfolio::report::format_currency;
///
/// assert_eq!(format_currency(1_234_567.4), "$1,234,567");
/// assert_eq!(format_currency(-2500.0), "-$2,500");
/// ```
#[must_use]
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(rounded.abs()))
}

/// Formats a value in compact form ($1.2B, $350.0M, $12.5K).
#[must_use]
pub fn format_compact(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    let body = if abs >= 1e12 {
        format!("{:.1}T", abs / 1e12)
    } else if abs >= 1e9 {
        format!("{:.1}B", abs / 1e9)
    } else if abs >= 1e6 {
        format!("{:.1}M", abs / 1e6)
    } else if abs >= 1e3 {
        format!("{:.1}K", abs / 1e3)
    } else {
        format!("{abs:.0}")
    };
    format!("{sign}${body}")
}

/// Formats a percentage with an explicit sign ("+1.50%", "-20.00%").
#[must_use]
pub fn format_signed_pct(pct: f64) -> String {
    // Avoid "-0.00%"
    let pct = if pct.abs() < 0.005 { 0.0 } else { pct };
    format!("{pct:+.2}%")
}

fn group_thousands(whole: f64) -> String {
    let digits = format!("{whole:.0}");
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
