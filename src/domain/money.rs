use std::fmt;

/// Money is represented as integer cents to avoid floating-point precision issues.
/// 1 unit = 100 cents, so 1000.00 = 100000 cents.
pub type Cents = i64;

/// Format cents as a fixed two-decimal string.
/// Example: 120000 -> "1200.00", -1234 -> "-12.34"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.unsigned_abs();
    let units = abs_cents / 100;
    let remainder = abs_cents % 100;
    format!("{}{}.{:02}", sign, units, remainder)
}

/// Parse a decimal string into cents.
/// Example: "50.00" -> 5000, "12.5" -> 1250, "100" -> 10000, "0.005" -> 1
///
/// Digits past the second decimal place round half away from zero.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    let (negative, unsigned) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    let (units_str, decimal_str) = match unsigned.split_once('.') {
        Some((units, decimals)) => (units, decimals),
        None => (unsigned, ""),
    };

    if units_str.is_empty() && decimal_str.is_empty() {
        return Err(ParseCentsError::InvalidFormat);
    }
    if !units_str.bytes().all(|b| b.is_ascii_digit())
        || !decimal_str.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(ParseCentsError::InvalidFormat);
    }

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str.parse().map_err(|_| ParseCentsError::OutOfRange)?
    };

    let digits = decimal_str.as_bytes();
    let digit = |i: usize| digits.get(i).map_or(0, |d| i64::from(d - b'0'));
    let mut decimal_cents = digit(0) * 10 + digit(1);
    if digit(2) >= 5 {
        decimal_cents += 1;
    }

    let cents = units
        .checked_mul(100)
        .and_then(|c| c.checked_add(decimal_cents))
        .ok_or(ParseCentsError::OutOfRange)?;
    Ok(if negative { -cents } else { cents })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    InvalidFormat,
    OutOfRange,
}

impl fmt::Display for ParseCentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCentsError::InvalidFormat => write!(f, "invalid money format"),
            ParseCentsError::OutOfRange => write!(f, "amount out of range"),
        }
    }
}

impl std::error::Error for ParseCentsError {}
