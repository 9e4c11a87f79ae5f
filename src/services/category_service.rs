//! Validated CRUD for charge categories.
//!
//! The invariants the calculator relies on are enforced here, at the edge:
//! a base amount can never be negative, and a commercial multiplier can never
//! drop below 1, so a commercial charge never undercuts the residential
//! baseline.

use uuid::Uuid;

use crate::domain::{Building, ChargeCategory};
use crate::services::{ServiceError, ServiceResult};

pub struct CategoryService;

impl CategoryService {
    /// Adds a category after validation and returns its identifier.
    pub fn add(building: &mut Building, category: ChargeCategory) -> ServiceResult<Uuid> {
        Self::validate(&category)?;
        Ok(building.add_category(category))
    }

    /// Replaces the category identified by `id`, keeping its identity.
    pub fn edit(building: &mut Building, id: Uuid, mut updated: ChargeCategory) -> ServiceResult<()> {
        updated.id = id;
        Self::validate(&updated)?;
        let slot = building
            .category_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Charge category not found".into()))?;
        *slot = updated;
        building.touch();
        Ok(())
    }

    /// Removes the category identified by `id`, returning the removed
    /// instance.
    pub fn remove(building: &mut Building, id: Uuid) -> ServiceResult<ChargeCategory> {
        building
            .remove_category(id)
            .ok_or_else(|| ServiceError::Invalid("Charge category not found".into()))
    }

    pub fn list(building: &Building) -> Vec<&ChargeCategory> {
        building.charge_categories.iter().collect()
    }

    fn validate(category: &ChargeCategory) -> ServiceResult<()> {
        category.validate().map_err(ServiceError::Invalid)
    }
}
