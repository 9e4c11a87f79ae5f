use uuid::Uuid;

use crate::calendar::JalaliDate;
use crate::config::ChargeSettings;
use crate::domain::{Building, Transaction};
use crate::services::{ChargePreview, ChargeService};

use super::calculator::ChargeCalculation;

/// Stage of one charge-issuance session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStage {
    /// Picking the charge date, categories, and target units.
    Selection,
    /// Calculations recomputed from the current selection.
    Preview,
    /// Read-only recap before issuing.
    Summary,
    /// Transactions materialized; the session is over.
    Issued,
}

/// The charge-issuance flow: `Selection → Preview → Summary → Issued`.
///
/// Changing any part of the selection drops back to `Selection` and discards
/// computed results. A closed session is never resumed; callers start a fresh
/// one, which pre-selects all currently-active categories and no units.
#[derive(Debug, Clone)]
pub struct IssuanceSession {
    stage: SessionStage,
    charge_date: JalaliDate,
    selected_category_ids: Vec<Uuid>,
    selected_unit_ids: Vec<Uuid>,
    preview: Option<ChargePreview>,
}

impl IssuanceSession {
    pub fn new(settings: &ChargeSettings, charge_date: JalaliDate) -> Self {
        Self {
            stage: SessionStage::Selection,
            charge_date,
            selected_category_ids: settings.active_category_ids(),
            selected_unit_ids: Vec::new(),
            preview: None,
        }
    }

    pub fn stage(&self) -> SessionStage {
        self.stage
    }

    pub fn charge_date(&self) -> JalaliDate {
        self.charge_date
    }

    pub fn selected_units(&self) -> &[Uuid] {
        &self.selected_unit_ids
    }

    pub fn selected_categories(&self) -> &[Uuid] {
        &self.selected_category_ids
    }

    pub fn calculations(&self) -> &[ChargeCalculation] {
        self.preview
            .as_ref()
            .map(|preview| preview.calculations.as_slice())
            .unwrap_or(&[])
    }

    /// Units excluded because the target period already holds a charge for
    /// them.
    pub fn conflicts(&self) -> &[Uuid] {
        self.preview
            .as_ref()
            .map(|preview| preview.conflicts.as_slice())
            .unwrap_or(&[])
    }

    pub fn total_amount(&self) -> i64 {
        self.preview
            .as_ref()
            .map(|preview| preview.total_amount)
            .unwrap_or(0)
    }

    pub fn set_charge_date(&mut self, date: JalaliDate) {
        self.charge_date = date;
        self.back_to_selection();
    }

    pub fn toggle_unit(&mut self, unit_id: Uuid) {
        match self.selected_unit_ids.iter().position(|id| *id == unit_id) {
            Some(index) => {
                self.selected_unit_ids.remove(index);
            }
            None => self.selected_unit_ids.push(unit_id),
        }
        self.back_to_selection();
    }

    pub fn select_units(&mut self, unit_ids: &[Uuid]) {
        self.selected_unit_ids = unit_ids.to_vec();
        self.back_to_selection();
    }

    pub fn toggle_category(&mut self, category_id: Uuid) {
        match self
            .selected_category_ids
            .iter()
            .position(|id| *id == category_id)
        {
            Some(index) => {
                self.selected_category_ids.remove(index);
            }
            None => self.selected_category_ids.push(category_id),
        }
        self.back_to_selection();
    }

    /// Whether the selection is complete enough to preview.
    pub fn can_preview(&self) -> bool {
        !self.selected_unit_ids.is_empty() && !self.selected_category_ids.is_empty()
    }

    /// Recomputes conflicts and calculations from the current selection
    /// against the given building state and settings snapshot, entering
    /// `Preview`. An incomplete selection leaves the session in `Selection`
    /// with empty results.
    pub fn preview(
        &mut self,
        building: &Building,
        settings: &ChargeSettings,
    ) -> &[ChargeCalculation] {
        if !self.can_preview() {
            self.back_to_selection();
            return &[];
        }
        self.preview = Some(ChargeService::preview(
            building,
            settings,
            self.charge_date,
            &self.selected_unit_ids,
            &self.selected_category_ids,
        ));
        self.stage = SessionStage::Preview;
        self.calculations()
    }

    /// Moves from `Preview` to `Summary`; refused while there is nothing to
    /// issue.
    pub fn confirm(&mut self) -> bool {
        if self.stage == SessionStage::Preview && !self.calculations().is_empty() {
            self.stage = SessionStage::Summary;
            true
        } else {
            false
        }
    }

    /// Materializes one charge transaction per included unit and terminates
    /// the session. Only valid from `Summary`.
    pub fn issue(&mut self) -> Vec<Transaction> {
        if self.stage != SessionStage::Summary {
            return Vec::new();
        }
        let transactions = self
            .preview
            .as_ref()
            .map(ChargePreview::to_transactions)
            .unwrap_or_default();
        self.stage = SessionStage::Issued;
        transactions
    }

    /// Returns to `Selection` with default category pre-selection and an
    /// empty unit selection.
    pub fn reset(&mut self, settings: &ChargeSettings) {
        self.selected_category_ids = settings.active_category_ids();
        self.selected_unit_ids.clear();
        self.back_to_selection();
    }

    fn back_to_selection(&mut self) {
        self.stage = SessionStage::Selection;
        self.preview = None;
    }
}
