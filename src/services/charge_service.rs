//! Orchestration of the monthly charge issuance flow.
//!
//! Snapshots the settings, runs conflict detection and the bulk calculation,
//! and turns confirmed calculations into charge transactions on the building.

use uuid::Uuid;

use crate::calendar::{digits::to_persian_digits, JalaliDate};
use crate::charge::{calculate_bulk_charges, find_conflicts, ChargeCalculation};
use crate::config::ChargeSettings;
use crate::domain::{Building, Transaction};
use crate::services::ServiceResult;

/// Result of one preview pass: what would be charged, and who was skipped.
#[derive(Debug, Clone)]
pub struct ChargePreview {
    pub charge_date: JalaliDate,
    pub calculations: Vec<ChargeCalculation>,
    /// Units excluded because the target period already holds a charge.
    pub conflicts: Vec<Uuid>,
    pub total_amount: i64,
}

impl ChargePreview {
    /// One charge transaction per calculated unit, titled with the localized
    /// month and year.
    pub fn to_transactions(&self) -> Vec<Transaction> {
        let title = format!(
            "شارژ {} {}",
            self.charge_date.month_name(),
            to_persian_digits(&self.charge_date.year().to_string())
        );
        self.calculations
            .iter()
            .map(|calc| {
                Transaction::charge(title.clone(), calc.unit_id, calc.total_amount, self.charge_date)
                    .with_description(calc.breakdown.join("، "))
            })
            .collect()
    }
}

pub struct ChargeService;

impl ChargeService {
    /// Computes the charge preview for the given selection. Conflicted units
    /// never appear in the calculations; an empty selection yields an empty
    /// preview rather than an error.
    pub fn preview(
        building: &Building,
        settings: &ChargeSettings,
        charge_date: JalaliDate,
        selected_unit_ids: &[Uuid],
        selected_category_ids: &[Uuid],
    ) -> ChargePreview {
        let conflicts = find_conflicts(&building.transactions, selected_unit_ids, charge_date);
        let included: Vec<Uuid> = selected_unit_ids
            .iter()
            .copied()
            .filter(|id| !conflicts.contains(id))
            .collect();
        let calculations = calculate_bulk_charges(
            &building.units,
            &settings.categories,
            selected_category_ids,
            &included,
            &settings.coefficients,
        );
        let total_amount = calculations.iter().map(|calc| calc.total_amount).sum();
        ChargePreview {
            charge_date,
            calculations,
            conflicts,
            total_amount,
        }
    }

    /// Issues the previewed charges: one transaction per calculated unit,
    /// appended to the building's book. Returns the new transaction ids.
    pub fn issue(building: &mut Building, preview: &ChargePreview) -> ServiceResult<Vec<Uuid>> {
        let mut issued = Vec::with_capacity(preview.calculations.len());
        for transaction in preview.to_transactions() {
            issued.push(building.add_transaction(transaction));
        }
        tracing::info!(
            period = %preview.charge_date.period_key(),
            units = issued.len(),
            total = preview.total_amount,
            "issued monthly charges"
        );
        Ok(issued)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CalculationType, Unit};

    fn fixture() -> (Building, ChargeSettings) {
        let mut building = Building::new("برج آزمایش");
        building.add_unit(Unit::new("101", 80.0));
        building.add_unit(Unit::new("102", 95.0));
        let mut settings = ChargeSettings::new(1403);
        settings.categories.push(crate::domain::ChargeCategory::new(
            "نگهداری",
            150_000,
            CalculationType::Fixed,
        ));
        (building, settings)
    }

    #[test]
    fn empty_selection_yields_empty_preview() {
        let (building, settings) = fixture();
        let date = JalaliDate::new(1403, 6, 1).unwrap();
        let preview = ChargeService::preview(&building, &settings, date, &[], &[]);
        assert!(preview.calculations.is_empty());
        assert_eq!(preview.total_amount, 0);
    }

    #[test]
    fn issue_appends_one_charge_per_unit() {
        let (mut building, settings) = fixture();
        let date = JalaliDate::new(1403, 6, 1).unwrap();
        let unit_ids: Vec<Uuid> = building.units.iter().map(|unit| unit.id).collect();
        let category_ids: Vec<Uuid> = settings.categories.iter().map(|cat| cat.id).collect();
        let preview =
            ChargeService::preview(&building, &settings, date, &unit_ids, &category_ids);
        assert_eq!(preview.calculations.len(), 2);

        let issued = ChargeService::issue(&mut building, &preview).unwrap();
        assert_eq!(issued.len(), 2);
        assert_eq!(building.transaction_count(), 2);
        let txn = building.transaction(issued[0]).unwrap();
        assert!(txn.is_charge);
        assert_eq!(txn.title, "شارژ شهریور ۱۴۰۳");
        assert_eq!(txn.amount, 150_000);
    }
}
