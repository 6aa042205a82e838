//! Currency amount parsing and formatting.

use super::FieldExtractor;
use super::patterns::ESTIMATED_AMOUNT;
use super::probe::Probe;

/// Extracts the estimated damage amount in whole currency units.
pub struct AmountExtractor {
    probe: Probe,
}

impl AmountExtractor {
    pub fn new() -> Self {
        Self {
            probe: Probe::new(&ESTIMATED_AMOUNT),
        }
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = u64;

    fn extract(&self, text: &str) -> Option<u64> {
        self.probe
            .extract(text)
            .and_then(|raw| parse_currency_amount(&raw))
    }
}

/// Parse a currency-like number (e.g. "$12,500") into whole units.
///
/// Returns `None` when nothing numeric remains, when stray characters are
/// left after stripping, or when the value does not fit.
pub fn parse_currency_amount(s: &str) -> Option<u64> {
    let trimmed = s.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);

    let cleaned: String = trimmed
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    cleaned.parse().ok()
}

/// Format an amount in dollars with thousands separators ($12,345).
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let chars: Vec<char> = digits.chars().collect();
    let mut formatted = String::with_capacity(chars.len() + chars.len() / 3 + 1);
    formatted.push('$');

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(*c);
    }

    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_currency_amount() {
        assert_eq!(parse_currency_amount("5,000"), Some(5000));
        assert_eq!(parse_currency_amount("$1,234,567"), Some(1_234_567));
        assert_eq!(parse_currency_amount("100"), Some(100));
    }

    #[test]
    fn test_parse_rejects_residue() {
        assert_eq!(parse_currency_amount(","), None);
        assert_eq!(parse_currency_amount(""), None);
        assert_eq!(parse_currency_amount("12a"), None);
        assert_eq!(parse_currency_amount("99999999999999999999999"), None);
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(999), "$999");
        assert_eq!(format_usd(2000), "$2,000");
        assert_eq!(format_usd(25_000), "$25,000");
        assert_eq!(format_usd(1_234_567), "$1,234,567");
    }

    #[test]
    fn test_extract_amount() {
        let extractor = AmountExtractor::new();

        assert_eq!(extractor.extract("ESTIMATED AMOUNT: $5,000"), Some(5000));
        assert_eq!(extractor.extract("ESTIMATED AMOUNT: ,,,"), None);
        assert_eq!(extractor.extract("no estimate"), None);
    }
}
