// src/core/price.rs

// Price text → number + currency symbol.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::FALLBACK_CURRENCY;

static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+\.?[0-9]*").expect("number regex"));

// Unicode general category Sc (currency symbol), Unicode 15.
const SC_RANGES: &[(char, char)] = &[
    ('\u{0024}', '\u{0024}'),
    ('\u{00A2}', '\u{00A5}'),
    ('\u{058F}', '\u{058F}'),
    ('\u{060B}', '\u{060B}'),
    ('\u{07FE}', '\u{07FF}'),
    ('\u{09F2}', '\u{09F3}'),
    ('\u{09FB}', '\u{09FB}'),
    ('\u{0AF1}', '\u{0AF1}'),
    ('\u{0BF9}', '\u{0BF9}'),
    ('\u{0E3F}', '\u{0E3F}'),
    ('\u{17DB}', '\u{17DB}'),
    ('\u{20A0}', '\u{20C0}'),
    ('\u{A838}', '\u{A838}'),
    ('\u{FDFC}', '\u{FDFC}'),
    ('\u{FE69}', '\u{FE69}'),
    ('\u{FF04}', '\u{FF04}'),
    ('\u{FFE0}', '\u{FFE1}'),
    ('\u{FFE5}', '\u{FFE6}'),
    ('\u{11FDD}', '\u{11FE0}'),
    ('\u{1E2FF}', '\u{1E2FF}'),
    ('\u{1ECB0}', '\u{1ECB0}'),
];

fn is_currency_symbol(c: char) -> bool {
    SC_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&c))
}

/// First numeric token in `text`, with thousands separators removed.
///
/// `"£51.77"` → `51.77`, `"$1,234.56"` → `1234.56`, `"no price"` → `None`.
/// Only the first number counts: `"2 for 5.00"` → `2.0`.
pub fn extract_price(text: &str) -> Option<f64> {
    let stripped = text.replace(',', "");
    let m = NUMBER.find(&stripped)?;
    let value: f64 = m.as_str().trim_end_matches('.').parse().ok()?;
    // Absurdly long digit runs overflow to inf
    value.is_finite().then_some(value)
}

/// Currency symbol for a price string.
///
/// A leading currency symbol (any Unicode `Sc` char) wins; otherwise the
/// first such symbol anywhere in the text; otherwise the fallback (`$`).
pub fn detect_currency(text: &str) -> char {
    let t = text.trim_start();
    match t.chars().next() {
        Some(c) if is_currency_symbol(c) => c,
        _ => t.chars().find(|&c| is_currency_symbol(c)).unwrap_or(FALLBACK_CURRENCY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_plain_prices() {
        assert_eq!(extract_price("£51.77"), Some(51.77));
        assert_eq!(extract_price("$19.99,"), Some(19.99));
        assert_eq!(extract_price("  42 "), Some(42.0));
    }

    #[test]
    fn strips_thousands_separators() {
        assert_eq!(extract_price("$1,234.56"), Some(1234.56));
        assert_eq!(extract_price("1,000,000"), Some(1_000_000.0));
    }

    #[test]
    fn first_number_only() {
        assert_eq!(extract_price("Was £10.00 now £7.50"), Some(10.0));
        assert_eq!(extract_price("1.2.3"), Some(1.2));
    }

    #[test]
    fn trailing_dot_is_dropped() {
        assert_eq!(extract_price("5. each"), Some(5.0));
    }

    #[test]
    fn no_digits_is_absent() {
        assert_eq!(extract_price("no price"), None);
        assert_eq!(extract_price(""), None);
        assert_eq!(extract_price("£.—"), None);
    }

    #[test]
    fn overflow_is_absent() {
        let huge = "9".repeat(400);
        assert_eq!(extract_price(&huge), None);
    }

    #[test]
    fn currency_leading_symbol() {
        assert_eq!(detect_currency("£51.77"), '£');
        assert_eq!(detect_currency(" €3,00"), '€');
    }

    #[test]
    fn currency_any_unicode_symbol() {
        assert_eq!(detect_currency("฿120.00"), '฿');
        assert_eq!(detect_currency("₫45000"), '₫');
        assert_eq!(detect_currency("₱99.50"), '₱');
        assert_eq!(detect_currency("₴10"), '₴');
        assert_eq!(detect_currency("Total: 5 ￥"), '￥');
    }

    #[test]
    fn currency_embedded_symbol() {
        assert_eq!(detect_currency("Price: 12.00 £"), '£');
        assert_eq!(detect_currency("USD $5"), '$');
    }

    #[test]
    fn currency_falls_back() {
        assert_eq!(detect_currency("19.99"), '$');
        assert_eq!(detect_currency(""), '$');
    }
}
