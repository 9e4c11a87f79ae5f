use buildino_core::charge::{calculate_bulk_charges, calculate_unit_charge};
use buildino_core::config::Coefficients;
use buildino_core::domain::{CalculationType, ChargeCategory, Unit};
use uuid::Uuid;

fn ids(categories: &[ChargeCategory]) -> Vec<Uuid> {
    categories.iter().map(|cat| cat.id).collect()
}

#[test]
fn per_area_unit_scenario() {
    // 120000 × (95 + 8) = 12,360,000; coefficient 1.0 and a residential unit
    // leave it untouched.
    let unit = Unit::new("301", 95.0).with_balcony(8.0);
    let category = ChargeCategory::new("شارژ ماهانه", 120_000, CalculationType::PerArea);
    let selected = ids(&[category.clone()]);
    let result = calculate_unit_charge(&unit, &[category], &selected, &Coefficients::default());
    assert_eq!(result.total_amount, 12_360_000);
}

#[test]
fn commercial_unit_scenario() {
    // Same unit flagged commercial with multiplier 1.5 → 18,540,000.
    let unit = Unit::new("302", 95.0).with_balcony(8.0).with_commercial(true);
    let category = ChargeCategory::new("شارژ ماهانه", 120_000, CalculationType::PerArea)
        .with_commercial_multiplier(1.5);
    let selected = ids(&[category.clone()]);
    let result = calculate_unit_charge(&unit, &[category], &selected, &Coefficients::default());
    assert_eq!(result.total_amount, 18_540_000);
}

#[test]
fn fixed_with_floor_coefficient_scenario() {
    // 250000 × 1.3 = 325,000.
    let unit = Unit::new("303", 70.0).with_floor_coefficient(1.3);
    let category = ChargeCategory::new("نگهداری", 250_000, CalculationType::Fixed);
    let selected = ids(&[category.clone()]);
    let result = calculate_unit_charge(&unit, &[category], &selected, &Coefficients::default());
    assert_eq!(result.total_amount, 325_000);
}

#[test]
fn parking_scenario() {
    let category = ChargeCategory::new("پارکینگ", 50_000, CalculationType::PerUnit)
        .with_parking(true);
    let selected = ids(&[category.clone()]);
    let coefficients = Coefficients::default();

    let with_parking = Unit::new("304", 80.0).with_parking(2);
    let result =
        calculate_unit_charge(&with_parking, &[category.clone()], &selected, &coefficients);
    assert_eq!(result.total_amount, 100_000);

    let without_parking = Unit::new("305", 80.0);
    let result = calculate_unit_charge(&without_parking, &[category], &selected, &coefficients);
    assert_eq!(result.total_amount, 0);
}

#[test]
fn fixed_category_is_invariant_across_units() {
    // Only the floor coefficient may change a fixed category's amount.
    let category = ChargeCategory::new("ثابت", 180_000, CalculationType::Fixed);
    let selected = ids(&[category.clone()]);
    let coefficients = Coefficients::default();
    let units = [
        Unit::new("a", 40.0),
        Unit::new("b", 200.0).with_balcony(30.0).with_parking(3),
        Unit::new("c", 75.0).with_commercial(true),
    ];
    for unit in &units {
        let result =
            calculate_unit_charge(unit, &[category.clone()], &selected, &coefficients);
        assert_eq!(result.total_amount, 180_000, "unit {}", unit.number);
    }
    let high_floor = Unit::new("d", 40.0).with_floor_coefficient(1.2);
    let result = calculate_unit_charge(&high_floor, &[category], &selected, &coefficients);
    assert_eq!(result.total_amount, 216_000);
}

#[test]
fn per_area_amount_grows_with_area() {
    let category = ChargeCategory::new("شارژ", 90_000, CalculationType::PerArea);
    let selected = ids(&[category.clone()]);
    let coefficients = Coefficients::default();
    let mut previous = -1i64;
    for area in [50.0, 75.5, 100.0, 160.25] {
        let unit = Unit::new("x", area);
        let result =
            calculate_unit_charge(&unit, &[category.clone()], &selected, &coefficients);
        assert!(result.total_amount > previous, "area {area}");
        previous = result.total_amount;
    }
}

#[test]
fn commercial_multiplier_only_applies_when_flagged() {
    let category = ChargeCategory::new("شارژ", 100_000, CalculationType::Fixed)
        .with_commercial_multiplier(2.0);
    let selected = ids(&[category.clone()]);
    let coefficients = Coefficients::default();

    let residential = Unit::new("401", 90.0);
    let result =
        calculate_unit_charge(&residential, &[category.clone()], &selected, &coefficients);
    assert_eq!(result.total_amount, 100_000);

    let commercial = Unit::new("402", 90.0).with_commercial(true);
    let result = calculate_unit_charge(&commercial, &[category], &selected, &coefficients);
    assert_eq!(result.total_amount, 200_000);
}

#[test]
fn total_equals_sum_of_category_amounts() {
    let unit = Unit::new("501", 88.0)
        .with_balcony(6.0)
        .with_parking(1)
        .with_floor_coefficient(1.15);
    let categories = vec![
        ChargeCategory::new("نگهداری", 150_000, CalculationType::Fixed),
        ChargeCategory::new("شارژ متراژ", 45_000, CalculationType::PerArea),
        ChargeCategory::new("پارکینگ", 60_000, CalculationType::PerUnit).with_parking(true),
    ];
    let selected = ids(&categories);
    let result =
        calculate_unit_charge(&unit, &categories, &selected, &Coefficients::default());
    let sum: i64 = result.categories.values().map(|calc| calc.amount).sum();
    assert_eq!(result.total_amount, sum);
    assert_eq!(result.breakdown.len(), 3);
}

#[test]
fn breakdown_follows_category_list_order_not_selection_order() {
    let unit = Unit::new("601", 100.0);
    let first = ChargeCategory::new("اول", 10_000, CalculationType::Fixed);
    let second = ChargeCategory::new("دوم", 20_000, CalculationType::Fixed);
    // Selection lists `second` before `first`.
    let selected = vec![second.id, first.id];
    let result = calculate_unit_charge(
        &unit,
        &[first, second],
        &selected,
        &Coefficients::default(),
    );
    assert!(result.breakdown[0].starts_with("اول"));
    assert!(result.breakdown[1].starts_with("دوم"));
}

#[test]
fn identical_inputs_yield_identical_results() {
    let units = vec![
        Unit::new("1", 64.0).with_parking(1),
        Unit::new("2", 92.5).with_commercial(true),
    ];
    let categories = vec![
        ChargeCategory::new("شارژ", 55_000, CalculationType::PerArea)
            .with_commercial_multiplier(1.5),
        ChargeCategory::new("پارکینگ", 40_000, CalculationType::PerUnit).with_parking(true),
    ];
    let selected_categories = ids(&categories);
    let selected_units: Vec<Uuid> = units.iter().map(|unit| unit.id).collect();
    let coefficients = Coefficients::default();

    let first = calculate_bulk_charges(
        &units,
        &categories,
        &selected_categories,
        &selected_units,
        &coefficients,
    );
    let second = calculate_bulk_charges(
        &units,
        &categories,
        &selected_categories,
        &selected_units,
        &coefficients,
    );
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.total_amount, b.total_amount);
        assert_eq!(a.breakdown, b.breakdown);
    }
}
