//! Display formatting shared by charts, reports and document writers.
//!
//! Amounts keep full precision internally and are only rounded (to two
//! decimal places) when turned into text here.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount with two decimals and thousands separators: `1,234.50`.
#[must_use]
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded < Decimal::ZERO;
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

/// Format an amount with a currency symbol: `$1,234.50`, `-$20.00`.
#[must_use]
pub fn format_money(value: Decimal, symbol: &str) -> String {
    let formatted = format_amount(value);
    formatted.strip_prefix('-').map_or_else(
        || format!("{symbol}{formatted}"),
        |rest| format!("-{symbol}{rest}"),
    )
}

/// Largest percentage shown as a number; anything beyond is shown as a bound.
const PERCENT_LIMIT: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Format a ratio as a percentage with two decimals; `n/a` when undefined.
///
/// Percentages beyond one million are shown as `>1000000%` or `<-1000000%`.
#[must_use]
pub fn format_percent(ratio: Option<Decimal>) -> String {
    let Some(r) = ratio else {
        return "n/a".to_string();
    };
    match r.checked_mul(Decimal::ONE_HUNDRED) {
        Some(pct) if pct.abs() <= PERCENT_LIMIT => {
            let pct = pct.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{pct:.2}%")
        }
        _ if r.is_sign_negative() => format!("<-{PERCENT_LIMIT}%"),
        _ => format!(">{PERCENT_LIMIT}%"),
    }
}

/// Compact axis label: `950`, `12.5K`, `3.2M`.
#[must_use]
pub fn format_compact(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if magnitude >= 10_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else if (value - value.round()).abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

/// Escape text for inclusion in HTML or SVG markup.
#[must_use]
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
