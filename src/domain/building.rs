use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{charge_category::ChargeCategory, transaction::Transaction, unit::Unit};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// The aggregate the dashboard operates on: units, charge categories, and the
/// transaction book of one building.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub units: Vec<Unit>,
    #[serde(default)]
    pub charge_categories: Vec<ChargeCategory>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Building::schema_version_default")]
    pub schema_version: u8,
}

impl Building {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            units: Vec::new(),
            charge_categories: Vec::new(),
            transactions: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn add_unit(&mut self, unit: Unit) -> Uuid {
        let id = unit.id;
        self.units.push(unit);
        self.touch();
        id
    }

    pub fn add_category(&mut self, category: ChargeCategory) -> Uuid {
        let id = category.id;
        self.charge_categories.push(category);
        self.touch();
        id
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.transactions.push(transaction);
        self.touch();
        id
    }

    pub fn unit(&self, id: Uuid) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.id == id)
    }

    pub fn unit_mut(&mut self, id: Uuid) -> Option<&mut Unit> {
        self.units.iter_mut().find(|unit| unit.id == id)
    }

    pub fn category(&self, id: Uuid) -> Option<&ChargeCategory> {
        self.charge_categories.iter().find(|cat| cat.id == id)
    }

    pub fn category_mut(&mut self, id: Uuid) -> Option<&mut ChargeCategory> {
        self.charge_categories.iter_mut().find(|cat| cat.id == id)
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn transaction_mut(&mut self, id: Uuid) -> Option<&mut Transaction> {
        self.transactions.iter_mut().find(|txn| txn.id == id)
    }

    pub fn remove_unit(&mut self, id: Uuid) -> Option<Unit> {
        let index = self.units.iter().position(|unit| unit.id == id)?;
        self.touch();
        Some(self.units.remove(index))
    }

    pub fn remove_category(&mut self, id: Uuid) -> Option<ChargeCategory> {
        let index = self.charge_categories.iter().position(|cat| cat.id == id)?;
        self.touch();
        Some(self.charge_categories.remove(index))
    }

    pub fn remove_transaction(&mut self, id: Uuid) -> Option<Transaction> {
        let index = self.transactions.iter().position(|txn| txn.id == id)?;
        self.touch();
        Some(self.transactions.remove(index))
    }

    /// Categories currently eligible for issuance, in list order.
    pub fn active_categories(&self) -> Vec<&ChargeCategory> {
        self.charge_categories
            .iter()
            .filter(|cat| cat.is_active)
            .collect()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}
