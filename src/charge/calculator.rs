use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Coefficients;
use crate::domain::{CalculationType, ChargeCategory, Unit};

/// One category's share of a unit's monthly charge, with the arithmetic trace
/// shown in the preview table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryCalculation {
    /// Whole Toman, rounded half-up once after all multiplications.
    pub amount: i64,
    pub calculation: String,
}

/// The full computed charge for one unit. Derived from its inputs on every
/// recalculation, never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeCalculation {
    pub unit_id: Uuid,
    pub unit_number: String,
    pub area: f64,
    pub categories: BTreeMap<Uuid, CategoryCalculation>,
    pub total_amount: i64,
    /// `"<category title>: <amount> تومان"` lines in category-list order.
    pub breakdown: Vec<String>,
}

/// Computes one unit's charge across the selected active categories.
///
/// Categories are taken in list order, filtered to those that are both
/// selected and active. Per category: the base amount scales by the
/// calculation type, then the floor coefficient (unit's own times the
/// building-wide factor), then the commercial multiplier when the unit is
/// commercial. Rounding happens once at the end of each category.
pub fn calculate_unit_charge(
    unit: &Unit,
    categories: &[ChargeCategory],
    selected_category_ids: &[Uuid],
    coefficients: &Coefficients,
) -> ChargeCalculation {
    let mut per_category = BTreeMap::new();
    let mut breakdown = Vec::new();
    let mut total_amount = 0i64;

    for category in categories {
        if !category.is_active || !selected_category_ids.contains(&category.id) {
            continue;
        }
        if let Err(error) = category.validate() {
            tracing::warn!(title = %category.title, %error, "skipping invalid charge category");
            continue;
        }
        let result = calculate_category(unit, category, coefficients);
        total_amount += result.amount;
        breakdown.push(format!("{}: {} تومان", category.title, result.amount));
        per_category.insert(category.id, result);
    }

    ChargeCalculation {
        unit_id: unit.id,
        unit_number: unit.number.clone(),
        area: unit.area,
        categories: per_category,
        total_amount,
        breakdown,
    }
}

/// Maps [`calculate_unit_charge`] over the selected units, preserving the
/// original unit-list order rather than the selection order.
pub fn calculate_bulk_charges(
    units: &[Unit],
    categories: &[ChargeCategory],
    selected_category_ids: &[Uuid],
    selected_unit_ids: &[Uuid],
    coefficients: &Coefficients,
) -> Vec<ChargeCalculation> {
    units
        .iter()
        .filter(|unit| selected_unit_ids.contains(&unit.id))
        .map(|unit| calculate_unit_charge(unit, categories, selected_category_ids, coefficients))
        .collect()
}

fn calculate_category(
    unit: &Unit,
    category: &ChargeCategory,
    coefficients: &Coefficients,
) -> CategoryCalculation {
    let base = category.base_amount as f64;
    let (mut raw, mut trace) = match category.calculation_type {
        CalculationType::Fixed => (base, format!("{} ثابت", category.base_amount)),
        CalculationType::PerArea => {
            let area = unit.total_area();
            (
                base * area,
                format!("{} × {} متر", category.base_amount, fmt_quantity(area)),
            )
        }
        CalculationType::PerUnit => {
            if category.include_parking {
                let slots = unit.parking_count as f64 * coefficients.parking;
                let mut trace = format!(
                    "{} × {} پارکینگ",
                    category.base_amount,
                    fmt_quantity(unit.parking_count as f64)
                );
                if (coefficients.parking - 1.0).abs() > f64::EPSILON {
                    trace.push_str(&format!(
                        " × ضریب پارکینگ {}",
                        fmt_quantity(coefficients.parking)
                    ));
                }
                (base * slots, trace)
            } else {
                (base, format!("{} هر واحد", category.base_amount))
            }
        }
    };

    let floor_factor = unit.floor_coefficient * coefficients.floor;
    raw *= floor_factor;
    if (floor_factor - 1.0).abs() > f64::EPSILON {
        trace.push_str(&format!(" × ضریب طبقه {}", fmt_quantity(floor_factor)));
    }

    if unit.is_commercial && category.commercial_multiplier > 1.0 {
        raw *= category.commercial_multiplier;
        trace.push_str(&format!(
            " × ضریب تجاری {}",
            fmt_quantity(category.commercial_multiplier)
        ));
    }

    let amount = raw.round() as i64;
    trace.push_str(&format!(" = {amount} تومان"));
    CategoryCalculation {
        amount,
        calculation: trace,
    }
}

fn fmt_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
