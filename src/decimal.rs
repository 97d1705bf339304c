use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;

use crate::errors::{BillingError, Result};

/// internal precision of money values, in decimal places
pub const MONEY_SCALE: u32 = 4;

/// Money type backed by a fixed-point decimal, kept at 4 decimal places so
/// sub-cent daily rents stay exact across many cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d.round_dp(MONEY_SCALE))
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> std::result::Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str(s)?.round_dp(MONEY_SCALE)))
    }

    /// create from integer amount (dollars, euros, etc)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// create from minor amount (cents, etc)
    pub fn from_minor(amount: i64, scale: u32) -> Self {
        Money(Decimal::new(amount, scale).round_dp(MONEY_SCALE))
    }

    /// convert a float coming from an external boundary (json, ui forms)
    pub fn try_from_f64(value: f64, field: &str) -> Result<Self> {
        if !value.is_finite() {
            return Err(BillingError::InvalidAmount {
                field: field.to_string(),
                value: value.to_string(),
            });
        }

        Decimal::try_from(value)
            .map(Money::from_decimal)
            .map_err(|_| BillingError::InvalidAmount {
                field: field.to_string(),
                value: value.to_string(),
            })
    }

    /// amount in minor units at the given scale, rounded half away from zero
    pub fn to_minor(&self, scale: u32) -> Option<i64> {
        let factor = Decimal::from(10_i64.checked_pow(scale)?);
        self.0
            .checked_mul(factor)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// round to specified decimal places, midpoints away from zero
    pub fn round_dp(&self, dp: u32) -> Self {
        Money(self.0.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
    }

    /// check if strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// check if strictly less than zero
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// maximum of two values
    pub fn max(self, other: Self) -> Self {
        Money(self.0.max(other.0))
    }

    /// subtraction floored at zero
    pub fn saturating_sub(self, other: Self) -> Self {
        (self - other).max(Money::ZERO)
    }

    /// amount accrued over a number of whole days at this daily rate
    pub fn for_days(&self, days: u64) -> Result<Self> {
        self.0
            .checked_mul(Decimal::from(days))
            .map(Money::from_decimal)
            .ok_or_else(|| BillingError::InvalidAmount {
                field: "daily_rent".to_string(),
                value: format!("{} over {} days overflows", self.0, days),
            })
    }

    /// how many whole `unit` amounts fit into this amount
    pub fn whole_multiples_of(&self, unit: Money) -> u64 {
        if !unit.is_positive() || !self.is_positive() {
            return 0;
        }
        self.0
            .checked_div(unit.0)
            .and_then(|q| q.floor().to_u64())
            .unwrap_or(u64::MAX)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money((self.0 + other.0).round_dp(MONEY_SCALE))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 = (self.0 + other.0).round_dp(MONEY_SCALE);
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money((self.0 - other.0).round_dp(MONEY_SCALE))
    }
}
