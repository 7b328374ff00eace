// ABOUTME: Presentation-time amount formatting shared by display and export
// ABOUTME: Rounds to at most three decimals and trims trailing zeros
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portioner Project

//! Amount formatting
//!
//! These helpers are applied only when an amount leaves the model (display
//! lines, export files, form echoes). Stored values are never rounded;
//! rescaling always recomputes from the exact source snapshot, so formatting
//! drift cannot accumulate.

/// Scale factor for three-decimal rounding.
const AMOUNT_SCALE: f64 = 1000.0;

/// Round an amount to at most three decimal places, half away from zero.
///
/// Non-finite inputs pass through unchanged; the caller decides whether such
/// values may reach presentation at all.
#[must_use]
pub fn round_amount(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    (value * AMOUNT_SCALE).round() / AMOUNT_SCALE
}

/// Render an amount as its shortest decimal form with at most three
/// fractional digits (`200.0` → `"200"`, `1.2345` → `"1.234"` or `"1.235"`
/// depending on the rounding, `0.5` → `"0.5"`).
#[must_use]
pub fn display_amount(value: f64) -> String {
    round_amount(value).to_string()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;

    #[test]
    fn rounds_to_three_decimals() {
        assert_eq!(round_amount(1.23456), 1.235);
        assert_eq!(round_amount(0.00049), 0.0);
        assert_eq!(round_amount(2.0), 2.0);
        assert_eq!(round_amount(0.0005), 0.001);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round_amount(0.1235), 0.124);
        assert_eq!(round_amount(-0.1235), -0.124);
    }

    #[test]
    fn trims_trailing_zeros_in_display() {
        assert_eq!(display_amount(200.0), "200");
        assert_eq!(display_amount(1.235), "1.235");
        assert_eq!(display_amount(0.5), "0.5");
        assert_eq!(display_amount(2.000_4), "2");
    }

    #[test]
    fn display_survives_float_noise() {
        // 0.1 + 0.2 is the classic 0.30000000000000004
        assert_eq!(display_amount(0.1 + 0.2), "0.3");
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert!(round_amount(f64::NAN).is_nan());
        assert_eq!(round_amount(f64::INFINITY), f64::INFINITY);
    }
}
