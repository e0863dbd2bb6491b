//! Price-string parsing.
//!
//! Turns free-form price fragments such as `"$1,299.99"`, `"25,50 €"` or
//! `"price: 19.99"` into a number. Parsing never fails loudly: text without a
//! usable number yields `None`, which callers treat as a normal outcome.
//!
//! # Separator detection
//!
//! The first run of digits, dots and commas (starting and ending on a digit)
//! is taken as the numeric token. Its decimal separator is decided as follows:
//!
//! 1. If both `.` and `,` occur, the one occurring last is the decimal
//!    separator and every other separator is grouping (`1.234,56` -> 1234.56).
//! 2. If only one kind occurs and the token reads as a grouped integer
//!    (a leading group of 1-3 digits not starting with `0`, followed only by
//!    3-digit groups), every separator is grouping (`1,299` -> 1299,
//!    `1.000.000` -> 1000000).
//! 3. Otherwise the last separator is the decimal point and earlier ones are
//!    grouping (`25,50` -> 25.5, `0.999` -> 0.999).

use std::sync::LazyLock;

use regex::Regex;

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d(?:[\d.,]*\d)?").expect("valid number regex"));

static CURRENCY_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(USD|EUR|GBP|CAD|AUD|JPY|INR)\b").expect("valid currency code regex")
});

/// Parse a price fragment into a decimal value.
///
/// Returns `None` for blank input, input without digits, or a token that
/// cannot be converted to a finite number.
pub fn parse_price(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let token = NUMBER_RE.find(text)?.as_str();
    let decimal = decimal_separator(token);

    let mut normalized = String::with_capacity(token.len());
    for (i, ch) in token.char_indices() {
        if ch.is_ascii_digit() {
            normalized.push(ch);
        } else if Some(i) == decimal {
            normalized.push('.');
        }
    }

    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Byte index of the decimal separator inside `token`, if it has one.
fn decimal_separator(token: &str) -> Option<usize> {
    let last = token.rfind(|c: char| c == '.' || c == ',')?;
    let (sep, other) = if token[last..].starts_with('.') {
        ('.', ',')
    } else {
        (',', '.')
    };

    if token.contains(other) {
        return Some(last);
    }
    if is_grouped_integer(token, sep) {
        None
    } else {
        Some(last)
    }
}

fn is_grouped_integer(token: &str, sep: char) -> bool {
    let mut groups = token.split(sep);
    let head = groups.next().unwrap_or_default();
    (1..=3).contains(&head.len()) && !head.starts_with('0') && groups.all(|g| g.len() == 3)
}

/// Detect the currency a price fragment is quoted in.
///
/// Explicit ISO codes win over symbols. Returns `None` when the text carries
/// no marker; callers then fall back to [`crate::models::DEFAULT_CURRENCY`].
pub fn detect_currency(text: &str) -> Option<&'static str> {
    if let Some(code) = CURRENCY_CODE_RE.find(text) {
        return match code.as_str() {
            "USD" => Some("USD"),
            "EUR" => Some("EUR"),
            "GBP" => Some("GBP"),
            "CAD" => Some("CAD"),
            "AUD" => Some("AUD"),
            "JPY" => Some("JPY"),
            "INR" => Some("INR"),
            _ => None,
        };
    }

    if text.contains("C$") {
        Some("CAD")
    } else if text.contains("A$") {
        Some("AUD")
    } else if text.contains('$') {
        Some("USD")
    } else if text.contains('€') {
        Some("EUR")
    } else if text.contains('£') {
        Some("GBP")
    } else if text.contains('¥') {
        Some("JPY")
    } else if text.contains('₹') {
        Some("INR")
    } else {
        None
    }
}
