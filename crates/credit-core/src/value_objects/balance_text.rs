//! Text encoding of balance values
//!
//! Balances live in a generic text column shared with other custom fields.
//! Values are written the way the host renders floats, so that rows written
//! by this service and by the host look the same: `110.0`, `12.5`, `1.0e+20`.

/// Render a balance as custom-field text
pub fn format_balance(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e16 || (magnitude != 0.0 && magnitude < 1e-4) {
        return scientific(value);
    }

    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

fn scientific(value: f64) -> String {
    let rendered = format!("{value:e}");
    let (mantissa, exponent) = rendered.split_once('e').unwrap_or((rendered.as_str(), "0"));

    let mantissa = if mantissa.contains('.') {
        mantissa.to_string()
    } else {
        format!("{mantissa}.0")
    };

    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };

    format!("{mantissa}e{sign}{digits:0>2}")
}
