//! Interaction controller for the booking form
//!
//! Bridges operator actions to the storage gateway: presence validation on
//! the form fields, then the matching CRUD call, then a fresh listing for
//! the presentation layer to render. Owns no other business rules.

use crate::storage::{Database, Meeting, MeetingDraft};
use crate::{BookingError, Result};

/// Raw widget values as read from the form.
///
/// Hour and minute arrive separately (the form offers them as two pickers)
/// and are only combined into `HH:MM` once validation has passed.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub booked_by: String,
    pub supplier_name: String,
    pub date: String,
    pub hour: String,
    pub minute: String,
}

impl FormInput {
    /// Presence check on all five widget values, then combine into a draft.
    fn to_draft(&self) -> Result<MeetingDraft> {
        if self.booked_by.is_empty()
            || self.supplier_name.is_empty()
            || self.date.is_empty()
            || self.hour.is_empty()
            || self.minute.is_empty()
        {
            return Err(BookingError::MissingFields);
        }

        Ok(MeetingDraft {
            booked_by: self.booked_by.clone(),
            supplier_name: self.supplier_name.clone(),
            date: self.date.clone(),
            time: format!("{}:{}", self.hour, self.minute),
        })
    }
}

/// Translates operator actions into storage calls.
///
/// Constructed once with the opened [`Database`] and handed by reference to
/// whichever surface is driving it (form or CLI). Every action returns the
/// refreshed listing snapshot on success.
pub struct BookingController {
    db: Database,
}

impl BookingController {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Initial load: the full listing, no validation.
    pub fn on_load(&self) -> Result<Vec<Meeting>> {
        self.db.list_meetings()
    }

    /// Book a new meeting from the current form values.
    pub fn on_create(&self, input: &FormInput) -> Result<Vec<Meeting>> {
        let draft = input.to_draft()?;
        let id = self.db.insert_meeting(&draft)?;
        tracing::info!(id, "booked meeting");
        self.db.list_meetings()
    }

    /// Delete the selected meeting. No confirmation step.
    pub fn on_delete(&self, selected: Option<i64>) -> Result<Vec<Meeting>> {
        let id = selected.ok_or(BookingError::SelectionRequired)?;
        self.db.delete_meeting(id)?;
        tracing::info!(id, "deleted meeting");
        self.db.list_meetings()
    }

    /// Rewrite the selected meeting with the current form values.
    ///
    /// The id comes from the selection; the values come from the inputs,
    /// not from the selected row. Selection is checked before the fields.
    pub fn on_edit(&self, selected: Option<i64>, input: &FormInput) -> Result<Vec<Meeting>> {
        let id = selected.ok_or(BookingError::SelectionRequired)?;
        let draft = input.to_draft()?;
        self.db.update_meeting(id, &draft)?;
        tracing::info!(id, "edited meeting");
        self.db.list_meetings()
    }
}
