//! Custom Askama template filters and display formatting helpers.
//!
//! Services produce raw [`Price`] values; everything the user sees goes
//! through [`format_rub`].

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use rust_decimal::prelude::ToPrimitive;

use equippro_core::Price;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Format a price for display in the Russian locale: `145 000 ₽`.
///
/// Digit groups are separated with U+00A0 so the amount never wraps.
/// Catalog prices are whole rubles; fractional kopecks are rounded away.
#[must_use]
pub fn format_rub(price: Price) -> String {
    let value = price.amount().round().to_i64().unwrap_or(0);
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(ch);
    }
    let mut out: String = grouped.chars().rev().collect();
    if negative {
        out.insert(0, '-');
    }
    out.push('\u{a0}');
    out.push('₽');
    out
}
