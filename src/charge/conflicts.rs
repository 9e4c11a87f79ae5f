use uuid::Uuid;

use crate::calendar::JalaliDate;
use crate::domain::Transaction;

/// Units among `unit_ids` that already have an issued charge in the same
/// Jalali month as `charge_date`.
///
/// A conflict is a soft warning: conflicted units are excluded from the
/// calculation input and reported back, while issuance proceeds for the
/// remainder. There is no force-override within a session.
pub fn find_conflicts(
    transactions: &[Transaction],
    unit_ids: &[Uuid],
    charge_date: JalaliDate,
) -> Vec<Uuid> {
    let period = charge_date.period_key();
    unit_ids
        .iter()
        .copied()
        .filter(|unit_id| {
            transactions
                .iter()
                .any(|txn| txn.occupies_period(*unit_id, &period))
        })
        .collect()
}
