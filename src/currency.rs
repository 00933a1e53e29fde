//! Exact currency amounts backed by [Decimal].
//!
//! Amounts travel between the client and the REST API as decimal strings with
//! a comma radix and two fraction digits, e.g. "1234,50". Parsing is lenient
//! and also accepts dot thousands separators ("1.234,50"), a dot radix
//! ("35.60") and an "R$" prefix so that user input can be read directly.

use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign, Sub},
    str::FromStr,
};

use rusqlite::{
    ToSql,
    types::{FromSql, FromSqlResult, ToSqlOutput, ValueRef},
};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::Error;

/// The largest amount, in whole reais, accepted from users and the API.
pub const MAX_AMOUNT_REAIS: i64 = 999_999_999_999;

/// An amount of money with two fraction digits.
///
/// Sums saturate instead of overflowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Amount {
    /// No money.
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    /// Create an amount from a number of cents.
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// The amount in cents, `None` if it does not fit in an `i64`.
    pub fn to_cents(self) -> Option<i64> {
        let mut cents = self.0;
        cents.rescale(2);

        i64::try_from(cents.mantissa()).ok()
    }

    /// Whether the amount is below zero.
    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// The amount in whole currency units, for charting.
    pub fn as_f64(self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }
}

impl FromStr for Amount {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidAmount(text.to_owned());

        let trimmed = text.trim();
        let (is_negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let unsigned = unsigned.trim_start_matches("R$").trim();

        let (whole, fraction) = split_radix(unsigned);

        if whole.is_empty() && fraction.is_none_or(str::is_empty) {
            return Err(invalid());
        }

        let whole = whole.replace('.', "");
        if !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let fraction = fraction.unwrap_or_default();
        if fraction.len() > 2 || !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let whole = if whole.is_empty() { "0" } else { whole.as_str() };
        let sign = if is_negative { "-" } else { "" };

        let mut amount = Decimal::from_str_exact(&format!("{sign}{whole}.{fraction:0<2}"))
            .map_err(|_| invalid())?;
        amount.rescale(2);

        if amount.abs() > Decimal::from(MAX_AMOUNT_REAIS) {
            return Err(invalid());
        }

        Ok(Self(amount))
    }
}

/// Split a number into its whole and fraction digits.
///
/// A comma is always the radix. Without a comma, a single dot followed by one
/// or two digits is the radix, otherwise dots separate thousands.
fn split_radix(number: &str) -> (&str, Option<&str>) {
    if let Some((whole, fraction)) = number.rsplit_once(',') {
        return (whole, Some(fraction));
    }

    match number.rsplit_once('.') {
        Some((whole, fraction)) if !whole.contains('.') && (1..=2).contains(&fraction.len()) => {
            (whole, Some(fraction))
        }
        _ => (number, None),
    }
}

/// Formats as the wire format, e.g. "1234,50" or "-0,05".
impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format!("{:.2}", self.0).replacen('.', ",", 1))
    }
}

/// Format an amount as Brazilian reais, e.g. "R$ 1.234,56" or "-R$ 12,00".
pub fn format_brl(amount: Amount) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    let digits = format!("{:.2}", amount.0.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!("{sign}R$ {grouped},{cents}")
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Self) -> Self::Output {
        Amount(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;

        text.parse().map_err(de::Error::custom)
    }
}

/// Stored as integer cents.
impl ToSql for Amount {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let cents = self.to_cents().ok_or_else(|| {
            rusqlite::Error::ToSqlConversionFailure(Box::new(Error::InvalidAmount(
                self.to_string(),
            )))
        })?;

        Ok(ToSqlOutput::from(cents))
    }
}

impl FromSql for Amount {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        i64::column_result(value).map(Amount::from_cents)
    }
}
