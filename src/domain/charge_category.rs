use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named component of the monthly building fee with its own scaling rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeCategory {
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whole Toman; no fractional minor unit exists in this system.
    pub base_amount: i64,
    pub calculation_type: CalculationType,
    /// Only meaningful for [`CalculationType::PerUnit`] categories.
    #[serde(default)]
    pub include_parking: bool,
    /// Applied on top of the base calculation for commercial units. Must be
    /// at least 1 so a commercial charge never drops below the residential
    /// baseline.
    pub commercial_multiplier: f64,
    pub is_active: bool,
}

/// How a category's base amount scales with unit attributes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalculationType {
    /// Flat amount, independent of the unit.
    Fixed,
    /// Base amount per square meter of floor plus balcony area.
    PerArea,
    /// Flat per unit, or per parking slot when `include_parking` is set.
    PerUnit,
}

impl ChargeCategory {
    pub fn new(
        title: impl Into<String>,
        base_amount: i64,
        calculation_type: CalculationType,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            base_amount,
            calculation_type,
            include_parking: false,
            commercial_multiplier: 1.0,
            is_active: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_parking(mut self, include_parking: bool) -> Self {
        self.include_parking = include_parking;
        self
    }

    pub fn with_commercial_multiplier(mut self, multiplier: f64) -> Self {
        self.commercial_multiplier = multiplier;
        self
    }

    pub fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Checks the invariants the charge engine relies on: a non-negative base
    /// amount, and a commercial multiplier of at least 1 so a commercial
    /// charge never undercuts the residential baseline.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_amount < 0 {
            return Err("Base amount must not be negative".into());
        }
        if !self.commercial_multiplier.is_finite() || self.commercial_multiplier < 1.0 {
            return Err("Commercial multiplier must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_flags_bad_amounts_and_multipliers() {
        let good = ChargeCategory::new("نگهداری", 100_000, CalculationType::Fixed);
        assert!(good.validate().is_ok());

        let negative = ChargeCategory::new("نگهداری", -1, CalculationType::Fixed);
        assert!(negative.validate().is_err());

        let undercut = ChargeCategory::new("نگهداری", 100_000, CalculationType::Fixed)
            .with_commercial_multiplier(0.9);
        assert!(undercut.validate().is_err());
    }
}
