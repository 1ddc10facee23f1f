//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides arithmetic, parsing of plain decimal text, and grouped
//! formatting for display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Default currency symbol used when formatting amounts
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₱";

/// Largest magnitude accepted by [`Money::parse`], in cents (10 trillion units)
const MAX_PARSED_CENTS: i64 = 1_000_000_000_000_000;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use pisopiso::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_plain_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a plain decimal number, rounding to the nearest cent
    ///
    /// Accepts an optional sign, digits, and an optional fractional part.
    /// Group separators and currency symbols are not numbers and fail.
    /// Fractional digits past the second round half away from zero.
    ///
    /// ```
    /// use pisopiso::models::Money;
    /// assert_eq!(Money::parse("1250.5").unwrap().cents(), 125050);
    /// assert_eq!(Money::parse("10.999").unwrap().cents(), 1100);
    /// assert!(Money::parse("1,000").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, MoneyParseError> {
        let decimal = Decimal::split(input)?;
        let round_up = decimal.fraction.as_bytes().get(2).is_some_and(|d| *d >= b'5');
        decimal.to_money(round_up)
    }

    /// Parse a plain decimal number with at most two fractional digits
    ///
    /// Same grammar as [`Money::parse`], but a third fractional digit is an
    /// error rather than being rounded away.
    pub fn parse_exact(input: &str) -> Result<Self, MoneyParseError> {
        let decimal = Decimal::split(input)?;
        if decimal.fraction.len() > 2 {
            return Err(MoneyParseError::TooPrecise(input.trim().to_string()));
        }
        decimal.to_money(false)
    }

    /// Render as a bare decimal (`1250.50`), the form stored in the ledger file
    pub fn to_plain_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.units().abs(), self.cents_part())
    }

    /// Format with a currency symbol and thousands grouping (`₱1,250.50`)
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            group_thousands(self.units().unsigned_abs()),
            self.cents_part()
        )
    }
}

/// A plain decimal split into its digit runs
struct Decimal<'a> {
    text: &'a str,
    negative: bool,
    whole: &'a str,
    fraction: &'a str,
}

impl<'a> Decimal<'a> {
    fn split(input: &'a str) -> Result<Self, MoneyParseError> {
        let text = input.trim();
        if text.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (negative, unsigned) = match text.as_bytes()[0] {
            b'-' => (true, &text[1..]),
            b'+' => (false, &text[1..]),
            _ => (false, text),
        };

        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !digits(whole) || !digits(fraction) {
            return Err(MoneyParseError::InvalidFormat(text.to_string()));
        }

        Ok(Self {
            text,
            negative,
            whole,
            fraction,
        })
    }

    fn to_money(&self, round_up: bool) -> Result<Money, MoneyParseError> {
        let out_of_range = || MoneyParseError::OutOfRange(self.text.to_string());

        let units: i64 = if self.whole.is_empty() {
            0
        } else {
            self.whole.parse().map_err(|_| out_of_range())?
        };

        // first two fractional digits, right-padded with zeros
        let cents = self
            .fraction
            .bytes()
            .chain(std::iter::repeat(b'0'))
            .take(2)
            .fold(0i64, |acc, d| acc * 10 + i64::from(d - b'0'));

        let total = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents + i64::from(round_up)))
            .filter(|c| *c <= MAX_PARSED_CENTS)
            .ok_or_else(out_of_range)?;

        Ok(Money(if self.negative { -total } else { total }))
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol(DEFAULT_CURRENCY_SYMBOL))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
    OutOfRange(String),
    TooPrecise(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "Amount is empty"),
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
            MoneyParseError::TooPrecise(s) => {
                write!(f, "Amount has more than two decimal places: {}", s)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}
