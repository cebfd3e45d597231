use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Monetary amount held in minor units (cents).
///
/// Remote payloads carry prices either as a pre-formatted string (`"$85.00"`,
/// `"1,200"`) or as an integer count of cents (`8500`). Both collapse into this
/// one representation; [`fmt::Display`] always renders two decimal places.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    cents: i64,
}

impl Money {
    pub const ZERO: Money = Money { cents: 0 };

    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }

    pub fn is_positive(&self) -> bool {
        self.cents > 0
    }

    /// Interpret a JSON value as money.
    ///
    /// - integer: minor units
    /// - float: major units, rounded to the nearest cent
    /// - string: a decimal amount in major units, see [`Money::parse`]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Self::from_cents(i))
                } else if let Some(u) = n.as_u64() {
                    i64::try_from(u).ok().map(Self::from_cents)
                } else {
                    n.as_f64()
                        .filter(|f| f.is_finite())
                        .map(|f| Self::from_cents((f * 100.0).round() as i64))
                }
            }
            Value::String(s) => Self::parse(s),
            _ => None,
        }
    }

    /// Parse a human-formatted amount in major units.
    ///
    /// Currency symbols, whitespace and thousands separators are ignored.
    /// An ISO code may lead or trail the amount; letters inside it reject the
    /// input. Fractions beyond two digits are rounded half-up.
    pub fn parse(input: &str) -> Option<Self> {
        let mut negative = false;
        let mut trailing = false;
        let mut cleaned = String::with_capacity(input.len());
        for c in input.trim().chars() {
            match c {
                '0'..='9' | '.' if !trailing => cleaned.push(c),
                '-' if cleaned.is_empty() && !trailing => negative = true,
                ',' | ' ' | '$' | '€' | '£' | '\u{a0}' => {}
                // Once the amount has started, a letter ends it
                c if c.is_ascii_alphabetic() => trailing |= !cleaned.is_empty(),
                _ => return None,
            }
        }

        let (whole, fraction) = match cleaned.split_once('.') {
            Some((w, f)) => (w, f),
            None => (cleaned.as_str(), ""),
        };
        if whole.is_empty() && fraction.is_empty() {
            return None;
        }
        if fraction.contains('.') {
            return None;
        }

        let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
        let digits: Vec<i64> = fraction
            .chars()
            .take(3)
            .map(|c| i64::from(c as u8 - b'0'))
            .collect();
        let tenths = digits.first().copied().unwrap_or(0);
        let hundredths = digits.get(1).copied().unwrap_or(0);
        let round_up = digits.get(2).is_some_and(|d| *d >= 5);

        let cents = whole
            .checked_mul(100)?
            .checked_add(tenths * 10 + hundredths + i64::from(round_up))?;
        Some(Self::from_cents(if negative { -cents } else { cents }))
    }

    /// Amount with a leading dollar sign, e.g. `$85.00`
    pub fn with_symbol(&self) -> String {
        if self.cents < 0 {
            format!("-${}", Money::from_cents(-self.cents))
        } else {
            format!("${}", self)
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cents_and_formatted_string_agree() {
        let from_cents = Money::from_json(&json!(8500)).unwrap();
        let from_string = Money::from_json(&json!("$85.00")).unwrap();
        assert_eq!(from_cents, from_string);
        assert_eq!(from_cents.to_string(), "85.00");
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!(Money::parse("85").unwrap().cents(), 8500);
        assert_eq!(Money::parse("1,200.5").unwrap().cents(), 120050);
        assert_eq!(Money::parse("USD 19.999").unwrap().cents(), 2000);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse("-3.10").unwrap().cents(), -310);
        assert!(Money::parse("").is_none());
        assert!(Money::parse("free").is_none());
        assert!(Money::parse("1.2.3").is_none());
        assert!(Money::parse("12#").is_none());
    }

    #[test]
    fn test_currency_code_only_at_the_edges() {
        assert_eq!(Money::parse("85.00 USD").unwrap().cents(), 8500);
        assert_eq!(Money::parse("EUR1,200").unwrap().cents(), 120000);
        assert!(Money::parse("1e5").is_none());
        assert!(Money::parse("12 for 3").is_none());
        assert!(Money::parse("85 USD.50").is_none());
    }

    #[test]
    fn test_float_is_major_units() {
        assert_eq!(Money::from_json(&json!(85.5)).unwrap().cents(), 8550);
    }

    #[test]
    fn test_non_numeric_json_is_none() {
        assert!(Money::from_json(&json!(null)).is_none());
        assert!(Money::from_json(&json!({"amount": 1})).is_none());
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
        assert_eq!(Money::from_cents(-500).with_symbol(), "-$5.00");
    }
}
