//! Text helpers

/// Cap on the diagnostic carried in an error message
pub const ERROR_DETAIL_LIMIT: usize = 150;

/// Dollar amount with thousands separators and two decimals
pub fn format_price(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (whole, fraction) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, fraction)
}

/// First `max` characters of `text`
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
