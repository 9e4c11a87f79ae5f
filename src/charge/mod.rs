//! The monthly-charge calculation engine.
//!
//! Pure functions over immutable snapshots: given units, the active charge
//! categories, and a selection, compute the per-unit monetary breakdown.
//! Conflict detection and the issuance state machine sit on top.

pub mod calculator;
pub mod conflicts;
pub mod session;

pub use calculator::{
    calculate_bulk_charges, calculate_unit_charge, CategoryCalculation, ChargeCalculation,
};
pub use conflicts::find_conflicts;
pub use session::{IssuanceSession, SessionStage};
