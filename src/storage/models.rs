//! Data models for storage

use serde::{Deserialize, Serialize};

/// A booked meeting as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Row id assigned by the store on insert; never reused after deletion
    pub id: i64,

    /// Name of the person who booked the room
    pub booked_by: String,

    /// Name of the supplier the meeting is with
    pub supplier_name: String,

    /// Calendar date as `YYYY-MM-DD`, so lexicographic order is
    /// chronological order
    pub date: String,

    /// Wall-clock time as `HH:MM`
    pub time: String,
}

/// The four operator-supplied fields of a meeting, before it has an id.
///
/// Used both for inserts and for whole-record updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingDraft {
    pub booked_by: String,
    pub supplier_name: String,
    pub date: String,
    pub time: String,
}

impl MeetingDraft {
    pub fn new(
        booked_by: impl Into<String>,
        supplier_name: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            booked_by: booked_by.into(),
            supplier_name: supplier_name.into(),
            date: date.into(),
            time: time.into(),
        }
    }
}
