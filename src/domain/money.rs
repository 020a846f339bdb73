//! Money representation with centavo precision.
//!
//! Amounts are stored as integer centavos so sums are exact, and formatted
//! only at render time using the Brazilian convention: `.` as the thousands
//! separator and `,` as the decimal separator, e.g. `R$ 4.395,90`.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};

/// An amount of money in Brazilian reais, stored as centavos.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Placeholder shown instead of an amount when values are hidden.
    pub const MASKED: &'static str = "R$ ****,**";

    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Creates an amount from centavos.
    #[must_use]
    pub const fn from_centavos(centavos: i64) -> Self {
        Self(centavos)
    }

    /// Creates an amount from whole reais and centavos.
    #[must_use]
    pub const fn from_reais(reais: i64, centavos: u8) -> Self {
        Self(reais * 100 + centavos as i64)
    }

    /// Returns the amount in centavos.
    #[must_use]
    pub const fn centavos(self) -> i64 {
        self.0
    }

    /// Formats the amount as `R$ 1.234,56`.
    ///
    /// Negative amounts render the sign after the currency symbol,
    /// e.g. `R$ -1.234,56`.
    #[must_use]
    pub fn format(self) -> String {
        let abs = self.0.unsigned_abs();
        let reais = group_thousands(abs / 100);
        let centavos = abs % 100;
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("R$ {sign}{reais},{centavos:02}")
    }

    /// Formats the amount, or returns [`Money::MASKED`] when hidden.
    #[must_use]
    pub fn format_masked(self, visible: bool) -> String {
        if visible {
            self.format()
        } else {
            Self::MASKED.to_string()
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Groups a whole-real magnitude with `.` every three digits.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;

    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == offset % 3 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    grouped
}
