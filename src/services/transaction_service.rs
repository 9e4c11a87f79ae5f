//! Business logic helpers for managing transactions.

use uuid::Uuid;

use crate::domain::{Building, Transaction};
use crate::services::{ServiceError, ServiceResult};

/// Provides validated CRUD helpers for the building's transaction book.
pub struct TransactionService;

impl TransactionService {
    /// Adds a new transaction and returns its identifier.
    pub fn add(building: &mut Building, transaction: Transaction) -> ServiceResult<Uuid> {
        if transaction.amount < 0 {
            return Err(ServiceError::Invalid(
                "Transaction amount must not be negative".into(),
            ));
        }
        Ok(building.add_transaction(transaction))
    }

    /// Updates the transaction identified by `id` via the provided mutator.
    pub fn update<F>(building: &mut Building, id: Uuid, mutator: F) -> ServiceResult<()>
    where
        F: FnOnce(&mut Transaction),
    {
        let txn = building
            .transaction_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Transaction not found".into()))?;
        mutator(txn);
        building.touch();
        Ok(())
    }

    /// Removes the transaction identified by `id`, returning the removed
    /// instance.
    pub fn remove(building: &mut Building, id: Uuid) -> ServiceResult<Transaction> {
        building
            .remove_transaction(id)
            .ok_or_else(|| ServiceError::Invalid("Transaction not found".into()))
    }

    /// Returns a snapshot of the building's transactions.
    pub fn list(building: &Building) -> Vec<&Transaction> {
        building.transactions.iter().collect()
    }

    /// Issued charges recorded against a unit, in book order.
    pub fn charges_for_unit(building: &Building, unit_id: Uuid) -> Vec<&Transaction> {
        building
            .transactions
            .iter()
            .filter(|txn| txn.is_charge && txn.related_unit_id == Some(unit_id))
            .collect()
    }
}
