/// Format an amount as US dollars, e.g. `$1,234,567.50`.
///
/// Non-finite values render as `$0.00`.
pub fn format_currency(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let cents = (value.abs() * 100.0).round() as u64;
    let (dollars, cents) = (cents / 100, cents % 100);

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && (dollars > 0 || cents > 0) {
        "-"
    } else {
        ""
    };

    format!("{}${}.{:02}", sign, grouped, cents)
}

/// Inline `data:` URI offering a CSV document as a download link target.
pub fn csv_data_uri(csv: &str) -> String {
    format!("data:text/csv;charset=utf-8,{}", urlencoding::encode(csv))
}
