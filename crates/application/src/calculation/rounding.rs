//! Decimal rounding on the textual form of a float.
//!
//! Results are rounded on the shortest decimal representation of the `f64`
//! (what `Display` prints), not on its exact binary value. `4.445` therefore
//! rounds to `4.45` even though the nearest double is slightly below it.

/// Round to two decimal places, half away from zero
pub fn round2(value: f64) -> f64 {
    round_half_up(value, 2)
}

/// Round to `scale` decimal places, half away from zero
///
/// Non-finite values are returned unchanged.
pub fn round_half_up(value: f64, scale: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let text = value.to_string();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.as_str()),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));

    if fraction.len() <= scale {
        return value;
    }

    let round_up = fraction.as_bytes()[scale] >= b'5';
    let Ok(mut scaled) = format!("{}{}", whole, &fraction[..scale]).parse::<u128>() else {
        return value;
    };
    if round_up {
        scaled += 1;
    }

    let magnitude = scaled as f64 / 10f64.powi(scale as i32);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}
