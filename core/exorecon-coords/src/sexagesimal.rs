//! Decimal degrees ⇄ sexagesimal strings.

use crate::error::{CoordError, CoordResult};

/// Degrees of right ascension per hour.
const DEGREES_PER_HOUR: f64 = 15.0;

/// Parses a decimal degree value as stored by the remote catalog.
pub fn parse_degrees(text: &str) -> CoordResult<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|deg| deg.is_finite())
        .ok_or_else(|| CoordError::InvalidDegrees(text.to_string()))
}

/// Formats a right ascension in degrees as `"HH MM SS.s"`.
///
/// Hours and minutes are truncated; seconds are rounded half-to-even to one
/// decimal place. No carry is applied, so a value just below a minute
/// boundary can render as `60.0` seconds.
pub fn degrees_to_right_ascension(degrees: f64) -> String {
    let hours = degrees / DEGREES_PER_HOUR;
    let hour = hours.trunc();
    let minutes = (hours - hour) * 60.0;
    let minute = minutes.trunc();
    let second = ((minutes - minute) * 60.0 * 10.0).round_ties_even() / 10.0;

    format!("{:02} {:02} {:04.1}", hour as i64, minute as i64, second)
}

/// Formats a declination in degrees as `"±DD MM SS"`.
///
/// The sign is always explicit (negative zero renders as `-`). Degrees and
/// arc-minutes are truncated; arc-seconds are rounded half-to-even to an
/// integer, unlike right ascension which keeps one decimal.
pub fn degrees_to_declination(degrees: f64) -> String {
    let (sign, magnitude) = if degrees.is_sign_negative() {
        ('-', degrees.abs())
    } else {
        ('+', degrees)
    };

    let degree = magnitude.trunc();
    let arc_minutes = (magnitude - degree) * 60.0;
    let arc_minute = arc_minutes.trunc();
    let arc_second = ((arc_minutes - arc_minute) * 60.0).round_ties_even();

    format!(
        "{sign}{:02} {:02} {:02}",
        degree as i64, arc_minute as i64, arc_second as i64
    )
}

/// Compares two sexagesimal strings field by field.
///
/// Both strings are split on whitespace and every positional field is compared
/// as an `f64`, so `"10 00 00"` equals `"10 00 00.0"` and `"+05 00 00"`
/// equals `"05 00 00"`. Differing field counts or non-numeric fields mean the
/// catalog data is malformed and are reported as errors.
pub fn compare_sexagesimal(left: &str, right: &str) -> CoordResult<bool> {
    let left_fields: Vec<&str> = left.split_whitespace().collect();
    let right_fields: Vec<&str> = right.split_whitespace().collect();

    if left_fields.len() != right_fields.len() {
        return Err(CoordError::FieldCountMismatch {
            left: left.to_string(),
            right: right.to_string(),
            left_fields: left_fields.len(),
            right_fields: right_fields.len(),
        });
    }

    for (l, r) in left_fields.iter().zip(&right_fields) {
        if parse_component(left, l)? != parse_component(right, r)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn parse_component(value: &str, component: &str) -> CoordResult<f64> {
    component
        .parse::<f64>()
        .map_err(|_| CoordError::InvalidComponent {
            value: value.to_string(),
            component: component.to_string(),
        })
}
