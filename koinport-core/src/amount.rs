//! Numeric extraction from free-form amount text.
//!
//! NovaDAX writes amounts like "R$ 1,50", "+ 1,234.56", or
//! "0,0123 BTC (≈R$56,78)". The first numeric run is always the primary
//! transaction amount; the parenthetical is a converted-value annotation and
//! must not be mistaken for it.

use regex::Regex;
use std::sync::LazyLock;

/// "(≈R$…)" converted-value annotation, stripped before scanning.
static ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(≈R\$[^)]*\)").expect("invalid annotation pattern"));

/// First signed numeric run: optional sign, optional gap, then digits with
/// embedded dots/commas.
static NUMERIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[+-]?\s*\d[\d.,]*").expect("invalid numeric pattern"));

/// Extract the first decimal literal in `text` as a dot-decimal string,
/// preserving the source's exact precision. Returns "" when no numeric run
/// exists. Total over any input.
pub fn extract(text: &str) -> String {
    let stripped = ANNOTATION.replace_all(text, "");

    let Some(m) = NUMERIC_RUN.find(&stripped) else {
        return String::new();
    };

    // "- 1,234" -> "-1,234"
    let compact: String = m.as_str().split_whitespace().collect();

    // A leading '+' carries no information.
    let compact = compact.strip_prefix('+').unwrap_or(&compact);

    let value = compact.replace(',', ".");

    // With several dots, only the last marks the decimal; the rest are
    // thousands separators.
    let parts: Vec<&str> = value.split('.').collect();
    if parts.len() > 2 {
        let fraction = parts[parts.len() - 1];
        let whole = parts[..parts.len() - 1].concat();
        return format!("{whole}.{fraction}");
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_comma() {
        assert_eq!(extract("R$ 1,50"), "1.50");
        assert_eq!(extract("R$ 0,0123"), "0.0123");
    }

    #[test]
    fn test_sign_and_thousands() {
        assert_eq!(extract("+ 1,234.56"), "1234.56");
        assert_eq!(extract("- 1,234"), "-1.234");
        assert_eq!(extract("-89,10"), "-89.10");
    }

    #[test]
    fn test_annotation_is_stripped_before_scanning() {
        assert_eq!(extract("(≈R$50,00) -89,10"), "-89.10");
        assert_eq!(extract("0,0123 BTC (≈R$56,78)"), "0.0123");
    }

    #[test]
    fn test_first_run_wins() {
        assert_eq!(extract("12 de 34"), "12");
    }

    #[test]
    fn test_multiple_thousands_groups() {
        assert_eq!(extract("R$ 1.234.567,89"), "1234567.89");
    }

    #[test]
    fn test_bare_two_part_number_stays_ambiguous() {
        // "1.234" could be 1234 or 1.234; the source format gives no way to
        // tell, so the last segment is kept as the decimal part.
        assert_eq!(extract("1.234"), "1.234");
    }

    #[test]
    fn test_no_numeric_run() {
        assert_eq!(extract(""), "");
        assert_eq!(extract("no numbers here"), "");
        assert_eq!(extract("R$ --"), "");
    }
}
