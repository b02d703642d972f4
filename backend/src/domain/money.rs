//! Currency formatting helpers shared by the summary and detail presenters.

/// Format an amount as whole dollars with thousands grouping, e.g. "$1,234".
///
/// Negative amounts keep the sign inside the currency symbol ("$-1,234"),
/// matching the summary table's historical output.
pub fn format_whole(amount: f64) -> String {
    format!("${}", group_thousands(amount.round() as i64))
}

/// Format an amount with cents and thousands grouping, e.g. "$1,234.56".
pub fn format_cents(amount: f64) -> String {
    let total_cents = (amount.abs() * 100.0).round() as i64;
    let sign = if amount < 0.0 { "-" } else { "" };
    format!(
        "${}{}.{:02}",
        sign,
        group_thousands(total_cents / 100),
        total_cents % 100
    )
}

fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
