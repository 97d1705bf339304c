use serde::{Deserialize, Serialize};

use crate::errors::{BillingError, Result};

/// default billing cycle length, a fortnight
pub const DEFAULT_BILLING_CYCLE_DAYS: u32 = 14;

/// billing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingConfig {
    /// length of one billing cycle in days, must be positive
    pub billing_cycle_days: u32,
    /// decimal places used when rendering amounts
    pub display_precision: u32,
    /// currency code of every amount handled, no conversion is performed
    pub currency: String,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self::fortnightly()
    }
}

impl BillingConfig {
    /// 14 day cycles
    pub fn fortnightly() -> Self {
        Self {
            billing_cycle_days: DEFAULT_BILLING_CYCLE_DAYS,
            display_precision: 2,
            currency: "USD".to_string(),
        }
    }

    /// 7 day cycles
    pub fn weekly() -> Self {
        Self {
            billing_cycle_days: 7,
            ..Self::fortnightly()
        }
    }

    /// fixed 30 day cycles (not calendar months)
    pub fn thirty_day() -> Self {
        Self {
            billing_cycle_days: 30,
            ..Self::fortnightly()
        }
    }

    /// custom cycle length
    pub fn with_cycle_days(billing_cycle_days: u32) -> Result<Self> {
        let config = Self {
            billing_cycle_days,
            ..Self::fortnightly()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_cycle_days(self.billing_cycle_days)?;

        if self.display_precision > 8 {
            return Err(BillingError::InvalidConfiguration {
                message: format!(
                    "display precision must be at most 8, got {}",
                    self.display_precision
                ),
            });
        }

        if self.currency.trim().is_empty() {
            return Err(BillingError::InvalidConfiguration {
                message: "currency must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// parse and validate a json configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BillingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// reject cycle lengths that would divide by zero
pub(crate) fn validate_cycle_days(billing_cycle_days: u32) -> Result<()> {
    if billing_cycle_days == 0 {
        return Err(BillingError::InvalidConfiguration {
            message: "billing cycle days must be greater than zero".to_string(),
        });
    }
    Ok(())
}
