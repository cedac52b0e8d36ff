//! Price text parsing.
//!
//! Marketplace price strings come in many shapes: `$1,234.56`, `US $12.00`,
//! `€1.234,56`, `12.99 USD`, `1 234,56 €`. The parser recovers the amount and
//! the currency marker, and returns `None` for anything else.

use regex::Regex;
use std::sync::LazyLock;

/// A recognized price.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPrice {
    pub value: f64,
    /// Symbol as written (`$`, `£`), or the code when only a code was given.
    /// Empty for bare numbers.
    pub currency_symbol: String,
    /// ISO code when it can be inferred.
    pub currency_code: Option<String>,
}

impl ParsedPrice {
    /// Currency string for a listing: the symbol when present, else the
    /// code, else `default`.
    pub fn currency_label(&self, default: &str) -> String {
        if !self.currency_symbol.is_empty() {
            self.currency_symbol.clone()
        } else {
            self.currency_code
                .clone()
                .unwrap_or_else(|| default.to_string())
        }
    }
}

/// Parses currency text into an amount.
///
/// Injected into the pipeline once at startup so alternate parsers (locale
/// specific, test doubles) can be swapped in.
pub trait CurrencyParser: Send + Sync {
    fn parse_currency(&self, text: &str) -> Option<ParsedPrice>;
}

/// Regex-based parser covering US and European separator conventions.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultCurrencyParser;

static RE_PRICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<sign>[-+])?\s*(?P<pre>[^\d\s+\-][^\d]*?)?\s*(?P<num>\d[\d,.' ]*\d|\d)\s*(?P<post>[^\d\s][^\d]*?)?\s*$",
    )
    .unwrap()
});

impl CurrencyParser for DefaultCurrencyParser {
    fn parse_currency(&self, text: &str) -> Option<ParsedPrice> {
        let caps = RE_PRICE.captures(text.trim())?;

        if caps.name("sign").map(|m| m.as_str()) == Some("-") {
            return None;
        }

        let pre = caps.name("pre").map(|m| m.as_str().trim()).unwrap_or("");
        let post = caps.name("post").map(|m| m.as_str().trim()).unwrap_or("");
        let marker = match (pre.is_empty(), post.is_empty()) {
            (_, true) => pre,
            (true, false) => post,
            (false, false) => return None,
        };

        let (letters, symbol) = split_marker(marker)?;
        let value = normalize_amount(caps.name("num")?.as_str())?;

        let currency_code = if letters.len() == 3 {
            Some(letters.clone())
        } else {
            infer_code(&letters, &symbol).map(str::to_string)
        };
        let currency_symbol = if symbol.is_empty() { letters } else { symbol };

        Some(ParsedPrice {
            value,
            currency_symbol,
            currency_code,
        })
    }
}

/// Split a currency marker such as `US $` into its letter and symbol parts.
///
/// Rejects anything that reads like prose (`bids`, `delivery`) or carries
/// sign characters.
fn split_marker(marker: &str) -> Option<(String, String)> {
    if marker.chars().count() > 5 {
        return None;
    }

    let mut letters = String::new();
    let mut symbol = String::new();
    for c in marker.chars() {
        match c {
            c if c.is_whitespace() => {}
            c if c.is_ascii_uppercase() => letters.push(c),
            '-' | '+' | '.' | ',' | '\'' => return None,
            c if c.is_alphanumeric() => return None,
            c => symbol.push(c),
        }
    }

    if letters.len() > 3 {
        return None;
    }
    Some((letters, symbol))
}

fn infer_code(letters: &str, symbol: &str) -> Option<&'static str> {
    match (letters, symbol) {
        ("" | "US", "$") => Some("USD"),
        ("C" | "CA", "$") => Some("CAD"),
        ("A" | "AU", "$") => Some("AUD"),
        ("", "£") => Some("GBP"),
        ("", "€") => Some("EUR"),
        ("", "¥") => Some("JPY"),
        ("", "₹") => Some("INR"),
        _ => None,
    }
}

/// Turn `1,234.56`, `1.234,56`, `1 234` into a number.
///
/// The last `.` or `,` is the decimal separator when one or two digits
/// follow it; every other separator must split the integer part into
/// groups of three.
fn normalize_amount(raw: &str) -> Option<f64> {
    let last_sep = raw.rfind(|c| c == '.' || c == ',');

    let (int_part, frac_part, decimal_sep) = match last_sep {
        Some(i) if (1..=2).contains(&(raw.len() - i - 1)) => {
            (&raw[..i], &raw[i + 1..], raw[i..].chars().next())
        }
        _ => (raw, "", None),
    };

    if let Some(sep) = decimal_sep {
        if int_part.contains(sep) {
            return None;
        }
    }

    let groups: Vec<&str> = int_part
        .split(|c| matches!(c, '.' | ',' | ' ' | '\''))
        .collect();
    if groups.iter().any(|g| g.is_empty()) {
        return None;
    }
    if groups.len() > 1
        && (groups[0].len() > 3 || groups[1..].iter().any(|g| g.len() != 3))
    {
        return None;
    }

    let mut number = groups.concat();
    if !frac_part.is_empty() {
        number.push('.');
        number.push_str(frac_part);
    }
    number.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse price text, treating blank input and negative amounts as "no price".
pub fn parse_price(parser: &dyn CurrencyParser, text: &str) -> Option<ParsedPrice> {
    if text.trim().is_empty() {
        return None;
    }
    parser
        .parse_currency(text)
        .filter(|p| p.value.is_finite() && p.value >= 0.0)
}
