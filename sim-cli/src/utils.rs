use rust_decimal::Decimal;
use tax_core::calculations::common::round_half_up;
use thiserror::Error;

/// Error returned when console input is not a usable dollar amount.
#[derive(Debug, Error)]
pub enum ParseAmountError {
    #[error("no amount entered")]
    Empty,

    #[error("invalid amount '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("amount must not be negative, got {0}")]
    Negative(Decimal),
}

/// Normalizes input for decimal parsing: trims whitespace, drops a leading
/// dollar sign and removes commas (thousands separator).
fn normalize_amount_input(s: &str) -> String {
    let trimmed = s.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);
    trimmed.replace(',', "")
}

/// Parses a non-negative dollar amount such as `"60,000"` or `"$1234.56"`.
///
/// Empty input is rejected rather than read as zero.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let amount: Decimal = normalized.parse().map_err(|e| {
        tracing::debug!(input = %s, "invalid amount: {}", e);
        ParseAmountError::Invalid {
            input: s.to_string(),
            source: e,
        }
    })?;

    if amount.is_sign_negative() && !amount.is_zero() {
        tracing::debug!(input = %s, "negative amount rejected");
        return Err(ParseAmountError::Negative(amount));
    }
    Ok(amount)
}

/// Formats a dollar amount with exactly two decimal places, rounding half-up.
pub fn format_money(amount: Decimal) -> String {
    let mut rounded = round_half_up(amount);
    rounded.rescale(2);
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::CapturedLogs;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tracing::Level;

    #[test]
    fn parse_amount_accepts_comma_thousands_separator() {
        assert_eq!(parse_amount("1,234.56").unwrap(), dec!(1234.56));
        assert_eq!(parse_amount("1,234,567.89").unwrap(), dec!(1234567.89));
    }

    #[test]
    fn parse_amount_accepts_dollar_sign_and_whitespace() {
        assert_eq!(parse_amount("  $60000  ").unwrap(), dec!(60000));
    }

    #[test]
    fn parse_amount_empty_is_error() {
        assert!(matches!(parse_amount(""), Err(ParseAmountError::Empty)));
        assert!(matches!(parse_amount("   "), Err(ParseAmountError::Empty)));
    }

    #[test]
    fn parse_amount_invalid_returns_error() {
        assert!(matches!(
            parse_amount("abc"),
            Err(ParseAmountError::Invalid { .. })
        ));
    }

    #[test]
    fn parse_amount_negative_returns_error() {
        assert!(matches!(
            parse_amount("-5"),
            Err(ParseAmountError::Negative(_))
        ));
    }

    #[test]
    fn parse_amount_negative_zero_is_zero() {
        assert_eq!(parse_amount("-0").unwrap(), dec!(0));
    }

    #[test]
    fn rejected_amounts_stay_below_default_log_level() {
        let logs = CapturedLogs::default();
        let _guard = logs.install(Level::WARN);

        assert!(parse_amount("lots").is_err());
        assert!(parse_amount("-5").is_err());

        assert_eq!(logs.contents(), "");
    }

    #[test]
    fn format_money_pads_to_cents() {
        assert_eq!(format_money(dec!(512)), "512.00");
        assert_eq!(format_money(dec!(0)), "0.00");
    }

    #[test]
    fn format_money_rounds_half_up() {
        assert_eq!(format_money(dec!(738.125525)), "738.13");
        assert_eq!(format_money(dec!(0.005)), "0.01");
    }
}
