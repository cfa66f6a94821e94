// Value parsing and display formatting for dashboard widgets
use serde_json::Value;

/// Parse a snapshot value as a number, falling back to `default`.
///
/// Null, empty strings, non-numeric strings, booleans, containers and
/// non-finite results all yield `default`. Strings are read up to the end of
/// their leading numeric prefix, so `"12.5s"` parses as `12.5`.
pub fn parse_numeric_or_default(value: &Value, default: f64) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => leading_number(s),
        _ => None,
    };

    match parsed {
        Some(n) if n.is_finite() => n,
        _ => default,
    }
}

/// Same contract as [`parse_numeric_or_default`] for a raw string.
pub fn parse_str_or_default(value: &str, default: f64) -> f64 {
    match leading_number(value) {
        Some(n) if n.is_finite() => n,
        _ => default,
    }
}

/// Recover the number a widget currently shows from its rendered text.
///
/// Everything except a leading minus sign, digits and the decimal point is
/// dropped first, so `"1,234"` reads as `1234` and `"-1,500"` as `-1500`.
pub fn parse_displayed_value(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };
    let numeric: String = sign
        .chars()
        .chain(rest.chars().filter(|c| c.is_ascii_digit() || *c == '.'))
        .collect();
    parse_str_or_default(&numeric, 0.0)
}

fn leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Format seconds as `"Xm Ys"`, dropping the minutes part when it is zero.
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0s".to_string();
    }

    let mins = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;

    if mins == 0 {
        format!("{}s", secs)
    } else {
        format!("{}m {}s", mins, secs)
    }
}

/// Whole number with thousands separators, truncated towards negative infinity.
pub fn format_count(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let whole = value.floor() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if whole < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Quartic ease-out over `progress`, clamped to `[0, 1]`.
pub fn ease_out_quart(progress: f64) -> f64 {
    let t = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}
