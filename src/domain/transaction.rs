use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calendar::JalaliDate;

/// An income or expense record in the building's books.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub title: String,
    pub kind: TransactionKind,
    pub category: String,
    /// Whole Toman.
    pub amount: i64,
    pub date: JalaliDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_unit_id: Option<Uuid>,
    /// Marks the transaction as an issued monthly charge; together with
    /// `related_unit_id` and the date's month bucket this is what conflict
    /// detection matches on.
    #[serde(default)]
    pub is_charge: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl Transaction {
    pub fn new(
        title: impl Into<String>,
        kind: TransactionKind,
        category: impl Into<String>,
        amount: i64,
        date: JalaliDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            kind,
            category: category.into(),
            amount,
            date,
            related_unit_id: None,
            is_charge: false,
            description: None,
        }
    }

    /// An issued monthly charge against a unit.
    pub fn charge(
        title: impl Into<String>,
        unit_id: Uuid,
        amount: i64,
        date: JalaliDate,
    ) -> Self {
        let mut transaction = Self::new(title, TransactionKind::Income, "شارژ ماهانه", amount, date);
        transaction.related_unit_id = Some(unit_id);
        transaction.is_charge = true;
        transaction
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether this transaction occupies the given `YYYY/MM` period for the
    /// given unit.
    pub fn occupies_period(&self, unit_id: Uuid, period_key: &str) -> bool {
        self.is_charge
            && self.related_unit_id == Some(unit_id)
            && self.date.period_key() == period_key
    }
}
