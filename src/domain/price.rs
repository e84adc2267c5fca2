// src/domain/price.rs

/// Dutch euro amount without cents: 450000.0 -> "€ 450.000".
pub fn format_price(amount: f64) -> String {
    let whole = amount.trunc() as i64;
    let sign = if whole < 0 { "-" } else { "" };
    format!("€ {sign}{}", group_thousands(whole.unsigned_abs()))
}

/// "85 m²", fractional areas are rounded.
pub fn format_area(square_meters: f64) -> String {
    format!("{} m²", group_thousands(square_meters.round().max(0.0) as u64))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
