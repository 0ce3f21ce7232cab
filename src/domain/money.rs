use std::fmt;

use rust_decimal::Decimal;

/// Money is represented as an exact decimal so that sums never drift.
/// Amounts carry no currency; direction is given by the ledger sequence holding them.
pub type Amount = Decimal;

/// Format an amount the way the budget view shows it: always at least one fractional digit.
/// Example: 1000 -> "1000.0", 12.50 -> "12.5", -3.25 -> "-3.25"
pub fn format_amount(amount: Amount) -> String {
    let normalized = amount.normalize();
    if normalized.scale() == 0 {
        format!("{}.0", normalized)
    } else {
        normalized.to_string()
    }
}

/// Largest magnitude a single amount may have: one quadrillion.
/// Far more transactions than fit in memory would be needed for totals to leave `Decimal`'s range.
pub const MAX_AMOUNT: Amount = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Most fractional digits an amount may carry, ignoring trailing zeros.
pub const MAX_FRACTION_DIGITS: u32 = 10;

/// Parse user-entered text into an amount.
/// Accepts an optional sign, digits with an optional decimal point and an optional
/// exponent. Example: "50" -> 50, " 12.5 " -> 12.5, "1e3" -> 1000, "abc" -> error
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let text = DecimalText::split(input)?;

    let int_digits = text.int_digits.trim_start_matches('0');
    let frac_digits = text.frac_digits.trim_end_matches('0');
    if int_digits.is_empty() && frac_digits.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let scale = (frac_digits.len() as i64)
        .checked_sub(text.exponent)
        .ok_or(ParseAmountError::OutOfRange)?;
    if scale > i64::from(MAX_FRACTION_DIGITS) {
        return Err(ParseAmountError::TooPrecise);
    }

    let mut mantissa: i128 = format!("{int_digits}{frac_digits}")
        .parse()
        .map_err(|_| ParseAmountError::OutOfRange)?;
    if scale < 0 {
        mantissa = u32::try_from(-scale)
            .ok()
            .and_then(|exp| 10i128.checked_pow(exp))
            .and_then(|factor| mantissa.checked_mul(factor))
            .ok_or(ParseAmountError::OutOfRange)?;
    }
    if text.negative {
        mantissa = -mantissa;
    }

    let amount = Decimal::try_from_i128_with_scale(mantissa, scale.max(0) as u32)
        .map_err(|_| ParseAmountError::OutOfRange)?;
    if amount.abs() > MAX_AMOUNT {
        return Err(ParseAmountError::OutOfRange);
    }
    Ok(amount)
}

/// The pieces of a decimal literal, checked for shape but not yet for range.
struct DecimalText<'a> {
    negative: bool,
    int_digits: &'a str,
    frac_digits: &'a str,
    exponent: i64,
}

impl<'a> DecimalText<'a> {
    fn split(input: &'a str) -> Result<Self, ParseAmountError> {
        let (negative, rest) = match input.as_bytes().first() {
            Some(b'-') => (true, &input[1..]),
            Some(b'+') => (false, &input[1..]),
            _ => (false, input),
        };

        let (mantissa, exponent) = match rest.find(['e', 'E']) {
            Some(idx) => (&rest[..idx], Some(&rest[idx + 1..])),
            None => (rest, None),
        };
        let (int_digits, frac_digits) = mantissa.split_once('.').unwrap_or((mantissa, ""));

        if (int_digits.is_empty() && frac_digits.is_empty())
            || !is_digits(int_digits)
            || !is_digits(frac_digits)
        {
            return Err(ParseAmountError::InvalidFormat);
        }

        let exponent = match exponent {
            None => 0,
            Some(exp) => {
                let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
                if digits.is_empty() || !is_digits(digits) {
                    return Err(ParseAmountError::InvalidFormat);
                }
                exp.parse().map_err(|_| ParseAmountError::OutOfRange)?
            }
        };

        Ok(Self {
            negative,
            int_digits,
            frac_digits,
            exponent,
        })
    }
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    Empty,
    InvalidFormat,
    OutOfRange,
    TooPrecise,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::Empty => write!(f, "amount is empty"),
            ParseAmountError::InvalidFormat => write!(f, "invalid amount format"),
            ParseAmountError::OutOfRange => {
                write!(f, "amount exceeds the limit of {}", MAX_AMOUNT)
            }
            ParseAmountError::TooPrecise => write!(
                f,
                "amount has more than {} decimal places",
                MAX_FRACTION_DIGITS
            ),
        }
    }
}

impl std::error::Error for ParseAmountError {}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(dec!(1000)), "1000.0");
        assert_eq!(format_amount(dec!(1000.00)), "1000.0");
        assert_eq!(format_amount(dec!(12.50)), "12.5");
        assert_eq!(format_amount(dec!(0.01)), "0.01");
        assert_eq!(format_amount(dec!(0)), "0.0");
        assert_eq!(format_amount(dec!(-3.25)), "-3.25");
        assert_eq!(format_amount(dec!(-600)), "-600.0");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("50"), Ok(dec!(50)));
        assert_eq!(parse_amount("12.5"), Ok(dec!(12.5)));
        assert_eq!(parse_amount("  400.0 "), Ok(dec!(400)));
        assert_eq!(parse_amount("-3"), Ok(dec!(-3)));
        assert_eq!(parse_amount("1e3"), Ok(dec!(1000)));
        assert_eq!(parse_amount("2.5e-1"), Ok(dec!(0.25)));
        assert_eq!(parse_amount("+5"), Ok(dec!(5)));
        assert_eq!(parse_amount("5."), Ok(dec!(5)));
        assert_eq!(parse_amount(".5"), Ok(dec!(0.5)));
        assert_eq!(parse_amount("-0"), Ok(dec!(0)));
        assert_eq!(parse_amount("0.000e-40"), Ok(dec!(0)));
        assert_eq!(parse_amount("1.50000000000000"), Ok(dec!(1.5)));
    }

    #[test]
    fn test_max_amount() {
        assert_eq!(MAX_AMOUNT, Decimal::new(1_000_000_000_000_000, 0));
    }

    #[test]
    fn test_parse_amount_range_limits() {
        assert_eq!(parse_amount("1000000000000000"), Ok(MAX_AMOUNT));
        assert_eq!(parse_amount("-1000000000000000"), Ok(-MAX_AMOUNT));
        assert_eq!(parse_amount("1e15"), Ok(MAX_AMOUNT));
        assert_eq!(parse_amount("0.0000000001"), Ok(dec!(0.0000000001)));
        assert_eq!(parse_amount("1e-10"), Ok(dec!(0.0000000001)));
        assert_eq!(
            parse_amount("1000000000000000.01"),
            Err(ParseAmountError::OutOfRange)
        );
        assert_eq!(parse_amount("1e16"), Err(ParseAmountError::OutOfRange));
        assert_eq!(
            parse_amount("0.00000000001"),
            Err(ParseAmountError::TooPrecise)
        );
    }

    #[test]
    fn test_parse_amount_invalid() {
        assert_eq!(parse_amount(""), Err(ParseAmountError::Empty));
        assert_eq!(parse_amount("   "), Err(ParseAmountError::Empty));
        assert_eq!(parse_amount("abc"), Err(ParseAmountError::InvalidFormat));
        assert_eq!(parse_amount("12.34.56"), Err(ParseAmountError::InvalidFormat));
        assert_eq!(parse_amount("NaN"), Err(ParseAmountError::InvalidFormat));
        assert_eq!(parse_amount("Infinity"), Err(ParseAmountError::InvalidFormat));
        assert_eq!(parse_amount("1e"), Err(ParseAmountError::InvalidFormat));
        assert_eq!(parse_amount("."), Err(ParseAmountError::InvalidFormat));
        assert_eq!(parse_amount("--5"), Err(ParseAmountError::InvalidFormat));
        assert_eq!(parse_amount("1_000"), Err(ParseAmountError::InvalidFormat));
        assert_eq!(parse_amount("1e30"), Err(ParseAmountError::OutOfRange));
        assert_eq!(
            parse_amount("79228162514264337593543950335"),
            Err(ParseAmountError::OutOfRange)
        );
        assert_eq!(
            parse_amount("1e99999999999999999999"),
            Err(ParseAmountError::OutOfRange)
        );
        assert_eq!(
            parse_amount("0.00000000000000000000000000001"),
            Err(ParseAmountError::TooPrecise)
        );
    }
}
