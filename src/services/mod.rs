pub mod category_service;
pub mod charge_service;
pub mod transaction_service;
pub mod unit_service;

pub use category_service::CategoryService;
pub use charge_service::{ChargePreview, ChargeService};
pub use transaction_service::TransactionService;
pub use unit_service::UnitService;

use crate::errors::BuildingError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Building(#[from] BuildingError),
    #[error("{0}")]
    Invalid(String),
}
