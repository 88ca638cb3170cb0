//! Display formatting for table cells.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Renders backend dates as `DD-MM-YYYY`; unparseable input is returned as is.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 and `YYYY-MM-DD HH:MM:SS`.
pub fn display_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return "-".to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format("%d-%m-%Y").to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d-%m-%Y").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return dt.format("%d-%m-%Y").to_string();
    }
    raw.to_string()
}

/// Amounts with two decimals and thousands grouping, e.g. `12,500.00`.
pub fn display_amount(value: f64) -> String {
    let negative = value < 0.0;
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::new();
    for (i, ch) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let int_grouped: String = grouped.chars().rev().collect();
    format!("{}{}.{}", if negative { "-" } else { "" }, int_grouped, frac)
}

/// Quantities without a trailing `.00` when integral.
pub fn display_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

/// Empty text shown as a dash.
pub fn or_dash(text: &str) -> String {
    if text.trim().is_empty() {
        "-".to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2024-03-15"), "15-03-2024");
        assert_eq!(display_date("2024-03-15T14:02:26.123Z"), "15-03-2024");
        assert_eq!(display_date("2024-03-15 08:00:00"), "15-03-2024");
        assert_eq!(display_date("soon"), "soon");
        assert_eq!(display_date(""), "-");
    }

    #[test]
    fn test_display_amount() {
        assert_eq!(display_amount(12500.0), "12,500.00");
        assert_eq!(display_amount(999.5), "999.50");
        assert_eq!(display_amount(-1234567.891), "-1,234,567.89");
    }

    #[test]
    fn test_display_quantity() {
        assert_eq!(display_quantity(40.0), "40");
        assert_eq!(display_quantity(2.5), "2.50");
    }
}
