//! Validated CRUD for building units.

use uuid::Uuid;

use crate::domain::{Building, Unit};
use crate::services::{ServiceError, ServiceResult};

pub struct UnitService;

impl UnitService {
    /// Adds a unit, rejecting duplicate unit numbers.
    pub fn add(building: &mut Building, unit: Unit) -> ServiceResult<Uuid> {
        if building
            .units
            .iter()
            .any(|existing| existing.number == unit.number)
        {
            return Err(ServiceError::Invalid(format!(
                "Unit number `{}` already exists",
                unit.number
            )));
        }
        Ok(building.add_unit(unit))
    }

    /// Updates the unit identified by `id` via the provided mutator. The
    /// clamps from construction are re-applied afterwards, so edits cannot
    /// smuggle in a negative area or floor coefficient.
    pub fn update<F>(building: &mut Building, id: Uuid, mutator: F) -> ServiceResult<()>
    where
        F: FnOnce(&mut Unit),
    {
        let unit = building
            .unit_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Unit not found".into()))?;
        mutator(unit);
        unit.normalize();
        building.touch();
        Ok(())
    }

    /// Removes the unit identified by `id`, returning the removed instance.
    pub fn remove(building: &mut Building, id: Uuid) -> ServiceResult<Unit> {
        building
            .remove_unit(id)
            .ok_or_else(|| ServiceError::Invalid("Unit not found".into()))
    }

    pub fn list(building: &Building) -> Vec<&Unit> {
        building.units.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_unit_numbers_are_rejected() {
        let mut building = Building::new("برج");
        UnitService::add(&mut building, Unit::new("101", 80.0)).unwrap();
        let err = UnitService::add(&mut building, Unit::new("101", 95.0))
            .expect_err("duplicate must fail");
        assert!(matches!(err, ServiceError::Invalid(ref msg) if msg.contains("101")));
    }

    #[test]
    fn update_reclamps_invalid_edits() {
        let mut building = Building::new("برج");
        let id = UnitService::add(&mut building, Unit::new("201", 100.0)).unwrap();
        UnitService::update(&mut building, id, |unit| {
            unit.area = -50.0;
            unit.floor_coefficient = -2.0;
        })
        .unwrap();
        let unit = building.unit(id).unwrap();
        assert_eq!(unit.area, 0.0);
        assert_eq!(unit.floor_coefficient, 1.0);
    }

    #[test]
    fn update_fails_for_missing_unit() {
        let mut building = Building::new("برج");
        let err = UnitService::update(&mut building, Uuid::new_v4(), |_| {})
            .expect_err("update must fail for unknown id");
        assert!(matches!(err, ServiceError::Invalid(ref msg) if msg.contains("not found")));
    }
}
