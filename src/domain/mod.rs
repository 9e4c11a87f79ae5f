pub mod building;
pub mod charge_category;
pub mod transaction;
pub mod unit;

pub use building::Building;
pub use charge_category::{CalculationType, ChargeCategory};
pub use transaction::{Transaction, TransactionKind};
pub use unit::{Occupancy, Unit};
