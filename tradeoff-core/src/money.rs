//! Dollar amount formatting and parsing.

use crate::error::{ComparisonError, Result};
use regex::Regex;
use std::sync::LazyLock;

static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\$?\s*([0-9][0-9,]*(?:\.[0-9]+)?|\.[0-9]+)\s*([kmbt])?$")
        .expect("amount regex is valid")
});

/// `1234567` -> `"1,234,567"`
pub fn format_with_commas(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Fixed-point with `decimals` places, trailing zeros (and a bare dot) removed.
pub(crate) fn trim_decimal(value: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, value);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Compact dollar rendering: `$1.2T`, `$2.68B`, `$450M`, `$65K`, `$5`.
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let abs = amount.abs();

    let body = if abs >= 1e12 {
        format!("{}T", trim_decimal(abs / 1e12, 2))
    } else if abs >= 1e9 {
        format!("{}B", trim_decimal(abs / 1e9, 2))
    } else if abs >= 1e6 {
        format!("{}M", trim_decimal(abs / 1e6, 2))
    } else if abs >= 1e3 {
        format!("{}K", trim_decimal(abs / 1e3, 2))
    } else {
        trim_decimal(abs, 2)
    };

    format!("{sign}${body}")
}

/// Parse user-entered dollar amounts: `"$2.68B"`, `"65,000"`, `"450m"`.
pub fn parse_amount(text: &str) -> Result<f64> {
    let invalid = || ComparisonError::InvalidAmount(text.to_string());

    let caps = AMOUNT_RE.captures(text.trim()).ok_or_else(invalid)?;
    let number: f64 = caps[1].replace(',', "").parse().map_err(|_| invalid())?;

    let multiplier = match caps.get(2).map(|m| m.as_str().to_ascii_lowercase()) {
        None => 1.0,
        Some(s) => match s.as_str() {
            "k" => 1e3,
            "m" => 1e6,
            "b" => 1e9,
            "t" => 1e12,
            _ => return Err(invalid()),
        },
    };

    let amount = number * multiplier;
    if !amount.is_finite() {
        return Err(invalid());
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_with_commas() {
        assert_eq!(format_with_commas(0), "0");
        assert_eq!(format_with_commas(999), "999");
        assert_eq!(format_with_commas(1_000), "1,000");
        assert_eq!(format_with_commas(41_230), "41,230");
        assert_eq!(format_with_commas(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(2_680_000_000.0), "$2.68B");
        assert_eq!(format_currency(1_200_000_000_000.0), "$1.2T");
        assert_eq!(format_currency(450_000_000.0), "$450M");
        assert_eq!(format_currency(65_000.0), "$65K");
        assert_eq!(format_currency(5.0), "$5");
        assert_eq!(format_currency(-3_500.0), "-$3.5K");
    }

    #[test]
    fn test_parse_amount_suffixes() {
        assert!((parse_amount("$2.68B").unwrap() - 2_680_000_000.0).abs() < 1.0);
        assert_eq!(parse_amount("65,000").unwrap(), 65_000.0);
        assert_eq!(parse_amount("450m").unwrap(), 450_000_000.0);
        assert_eq!(parse_amount(" 12K ").unwrap(), 12_000.0);
        assert_eq!(parse_amount("1.5t").unwrap(), 1_500_000_000_000.0);
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(matches!(parse_amount("lots"), Err(ComparisonError::InvalidAmount(_))));
        assert!(parse_amount("").is_err());
        assert!(parse_amount("12X").is_err());
        assert!(parse_amount("-5").is_err());
    }
}
