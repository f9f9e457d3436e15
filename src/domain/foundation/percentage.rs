//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Money;

/// A value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// Creates a new Percentage, clamping to valid range.
    pub const fn new(value: u8) -> Self {
        if value > 100 {
            Self(100)
        } else {
            Self(value)
        }
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Share of `amount` this percentage represents, rounded down to whole units.
    ///
    /// Splits `amount` into hundreds and remainder so the intermediate
    /// product never exceeds `amount` itself.
    pub fn of(&self, amount: Money) -> Money {
        let rate = i64::from(self.0);
        let value = amount.value();
        Money::new(value / 100 * rate + value % 100 * rate / 100)
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_clamps_to_100() {
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(15).value(), 15);
    }

    #[test]
    fn percentage_as_fraction_converts_correctly() {
        assert!((Percentage::new(10).as_fraction() - 0.10).abs() < f64::EPSILON);
        assert!((Percentage::new(15).as_fraction() - 0.15).abs() < f64::EPSILON);
    }

    #[test]
    fn percentage_of_rounds_down() {
        assert_eq!(Percentage::new(15).of(Money::new(449_900)), Money::new(67_485));
        assert_eq!(Percentage::new(10).of(Money::new(99)), Money::new(9));
        assert_eq!(Percentage::ZERO.of(Money::new(449_900)), Money::ZERO);
    }

    #[test]
    fn percentage_of_handles_largest_amount() {
        let amount = Money::new(i64::MAX);
        assert_eq!(Percentage::new(15).of(amount), Money::new(1_383_505_805_528_216_371));
        assert_eq!(Percentage::new(100).of(amount), amount);
    }

    #[test]
    fn percentage_ordering_works() {
        assert!(Percentage::new(10) < Percentage::new(15));
        assert_eq!(Percentage::new(10).max(Percentage::new(15)), Percentage::new(15));
    }

    #[test]
    fn percentage_displays_correctly() {
        assert_eq!(format!("{}", Percentage::new(15)), "15%");
    }
}
