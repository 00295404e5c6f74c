//! Display formatting for prices, amounts, percentages and durations.

use arena_core::EpochTime;
use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

/// Placeholder for missing numbers.
pub const MISSING: &str = "--";

/// Placeholder for a missing hold duration.
pub const MISSING_HOLD: &str = "\u{2014}";

fn round(value: Decimal, digits: u32) -> Decimal {
    value.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero)
}

/// Price with magnitude-dependent precision.
///
/// - |p| >= 1000 -> 1 decimal
/// - |p| >= 100  -> 2 decimals
/// - |p| >= 1    -> 4 decimals
/// - otherwise   -> 5 decimals
pub fn fmt_price(price: Option<Decimal>) -> String {
    let Some(price) = price else {
        return MISSING.to_string();
    };

    let abs = price.abs();
    let digits: u32 = if abs >= Decimal::ONE_THOUSAND {
        1
    } else if abs >= Decimal::ONE_HUNDRED {
        2
    } else if abs >= Decimal::ONE {
        4
    } else {
        5
    };

    format!("${:.*}", digits as usize, round(price, digits))
}

/// USD amount with thousands separators and two decimals.
///
/// `-1234.5` -> `-$1,234.50`.
pub fn fmt_usd(amount: Decimal) -> String {
    let rounded = round(amount, 2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{sign}${grouped}.{frac_part}")
}

/// Signed percentage with two decimals; `pct` is already in percent.
///
/// Zero and positive values get a `+`.
pub fn fmt_signed_pct(pct: Decimal) -> String {
    let rounded = round(pct, 2);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("{rounded:.2}%")
    } else {
        format!("+{:.2}%", rounded.abs())
    }
}

/// Trade time as `MM/DD HH:MM` (UTC); `--` when unset or out of range.
pub fn fmt_time(time: Option<EpochTime>) -> String {
    time.filter(EpochTime::is_set)
        .and_then(|t| t.to_datetime().ok())
        .map(|dt| dt.format("%m/%d %H:%M").to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

/// Signed percentage of a fraction (`0.12` -> `+12.00%`).
///
/// `--` when the scaled value does not fit a `Decimal`.
pub fn fmt_fraction_pct(fraction: Decimal) -> String {
    fraction
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(fmt_signed_pct)
        .unwrap_or_else(|| MISSING.to_string())
}

/// Holding duration between entry and exit (or `now` for open trades).
///
/// `2h 5m` above an hour, `42m` below.
pub fn fmt_hold(
    entry: Option<EpochTime>,
    exit: Option<EpochTime>,
    now: DateTime<Utc>,
) -> String {
    let Some(entry) = entry.filter(EpochTime::is_set) else {
        return MISSING_HOLD.to_string();
    };

    let start_ms = entry.as_millis();
    let end_ms = exit
        .filter(EpochTime::is_set)
        .map(|t| t.as_millis())
        .unwrap_or_else(|| now.timestamp_millis());

    let minutes = end_ms.saturating_sub(start_ms).max(0) / 60_000;
    let hours = minutes / 60;
    let rest = minutes % 60;

    if hours > 0 {
        format!("{hours}h {rest}m")
    } else {
        format!("{rest}m")
    }
}
