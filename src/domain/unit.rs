use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A building unit as the charge engine sees it.
///
/// Negative areas and non-positive floor coefficients are clamped at
/// construction rather than rejected, so a half-filled unit form can never
/// poison a later calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub id: Uuid,
    pub number: String,
    /// Floor area in square meters.
    pub area: f64,
    /// Balcony area in square meters, counted on top of `area` for per-area
    /// charges.
    #[serde(default)]
    pub balcony_area: f64,
    #[serde(default)]
    pub is_commercial: bool,
    /// Per-unit multiplier on every charge, e.g. higher floors paying a
    /// larger share of the elevator costs.
    pub floor_coefficient: f64,
    #[serde(default)]
    pub occupancy: Occupancy,
    #[serde(default)]
    pub has_parking: bool,
    #[serde(default)]
    pub parking_count: u32,
}

/// Who currently occupies the unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Occupancy {
    #[default]
    Owner,
    Tenant,
}

impl Unit {
    pub fn new(number: impl Into<String>, area: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            number: number.into(),
            area: clamp_area(area),
            balcony_area: 0.0,
            is_commercial: false,
            floor_coefficient: 1.0,
            occupancy: Occupancy::Owner,
            has_parking: false,
            parking_count: 0,
        }
    }

    pub fn with_balcony(mut self, balcony_area: f64) -> Self {
        self.balcony_area = clamp_area(balcony_area);
        self
    }

    pub fn with_commercial(mut self, is_commercial: bool) -> Self {
        self.is_commercial = is_commercial;
        self
    }

    pub fn with_floor_coefficient(mut self, coefficient: f64) -> Self {
        self.floor_coefficient = clamp_coefficient(coefficient);
        self
    }

    pub fn with_parking(mut self, count: u32) -> Self {
        self.has_parking = count > 0;
        self.parking_count = count;
        self
    }

    pub fn with_occupancy(mut self, occupancy: Occupancy) -> Self {
        self.occupancy = occupancy;
        self
    }

    /// Chargeable area: floor plus balcony.
    pub fn total_area(&self) -> f64 {
        self.area + self.balcony_area
    }

    /// Re-applies the construction-time clamps after field-level edits, so a
    /// mutated unit can never carry a negative area or an unusable floor
    /// coefficient into a calculation.
    pub fn normalize(&mut self) {
        self.area = clamp_area(self.area);
        self.balcony_area = clamp_area(self.balcony_area);
        self.floor_coefficient = clamp_coefficient(self.floor_coefficient);
    }
}

fn clamp_area(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        tracing::warn!(value, "clamping invalid area to 0");
        0.0
    }
}

fn clamp_coefficient(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        tracing::warn!(value, "clamping invalid floor coefficient to 1.0");
        1.0
    }
}
