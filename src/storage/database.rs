//! SQLite database management for meeting bookings

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use crate::config::Settings;
use crate::storage::models::{Meeting, MeetingDraft};
use crate::{BookingError, Result};

/// Database wrapper for roombook
///
/// One connection, opened at startup and held for the process lifetime.
/// Every mutating call commits on its own, so the listing can always be
/// rebuilt with a plain [`Database::list_meetings`] immediately afterwards.
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

const CURRENT_SCHEMA_VERSION: i64 = 1;

impl Database {
    /// Open or create the database
    pub fn open(settings: &Settings) -> Result<Self> {
        let db_path = settings.database_path();

        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                BookingError::StorageUnavailable(format!(
                    "cannot create {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        Self::open_path(&db_path)
    }

    /// Open database at a specific path (useful for testing)
    pub fn open_path(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|e| {
            BookingError::StorageUnavailable(format!("cannot open {}: {}", path.display(), e))
        })?;

        tracing::debug!("opened booking store at {}", path.display());

        let db = Self { conn };
        db.initialize()?;

        Ok(db)
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Initialize database schema
    fn initialize(&self) -> Result<()> {
        let current_version = self.schema_version()?;
        if current_version > CURRENT_SCHEMA_VERSION {
            return Err(BookingError::StorageUnavailable(format!(
                "store schema version {} is newer than supported version {}",
                current_version, CURRENT_SCHEMA_VERSION
            )));
        }

        if current_version < 1 {
            self.migrate_to_v1()?;
            self.set_schema_version(1)?;
        }

        Ok(())
    }

    /// Current schema version tracked in PRAGMA user_version.
    pub fn schema_version(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("PRAGMA user_version;", [], |row| row.get(0))?)
    }

    fn set_schema_version(&self, version: i64) -> Result<()> {
        self.conn
            .execute(&format!("PRAGMA user_version = {}", version), [])?;
        Ok(())
    }

    fn migrate_to_v1(&self) -> Result<()> {
        // Idempotent: also adopts pre-versioning stores that already carry
        // the meetings table.
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS meetings (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                booked_by TEXT NOT NULL,
                supplier_name TEXT NOT NULL,
                date TEXT NOT NULL,
                time TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_meetings_date
                ON meetings(date DESC);
            "#,
        )?;

        Ok(())
    }

    /// Insert a new meeting and return the id the store assigned to it
    pub fn insert_meeting(&self, draft: &MeetingDraft) -> Result<i64> {
        self.conn.execute(
            r#"
            INSERT INTO meetings (booked_by, supplier_name, date, time)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                draft.booked_by,
                draft.supplier_name,
                draft.date,
                draft.time,
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, "inserted meeting");

        Ok(id)
    }

    /// List all meetings, most recent date first.
    ///
    /// Meetings sharing a date come back in insertion order.
    pub fn list_meetings(&self) -> Result<Vec<Meeting>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, booked_by, supplier_name, date, time
             FROM meetings
             ORDER BY date DESC",
        )?;

        let meetings = stmt
            .query_map([], Self::row_to_meeting)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(meetings)
    }

    /// Get a meeting by id
    pub fn get_meeting(&self, id: i64) -> Result<Option<Meeting>> {
        let result = self
            .conn
            .query_row(
                "SELECT id, booked_by, supplier_name, date, time FROM meetings WHERE id = ?1",
                params![id],
                Self::row_to_meeting,
            )
            .optional()?;

        Ok(result)
    }

    /// Replace all four fields of the meeting with the given id.
    ///
    /// An id that matches nothing is a silent no-op, not an error.
    pub fn update_meeting(&self, id: i64, draft: &MeetingDraft) -> Result<()> {
        let changed = self.conn.execute(
            r#"
            UPDATE meetings
            SET booked_by = ?2, supplier_name = ?3, date = ?4, time = ?5
            WHERE id = ?1
            "#,
            params![
                id,
                draft.booked_by,
                draft.supplier_name,
                draft.date,
                draft.time,
            ],
        )?;

        tracing::debug!(id, changed, "updated meeting");
        Ok(())
    }

    /// Delete the meeting with the given id.
    ///
    /// Same not-found tolerance as [`Database::update_meeting`].
    pub fn delete_meeting(&self, id: i64) -> Result<()> {
        let changed = self
            .conn
            .execute("DELETE FROM meetings WHERE id = ?1", params![id])?;

        tracing::debug!(id, changed, "deleted meeting");
        Ok(())
    }

    /// Number of meetings in the store
    pub fn count_meetings(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM meetings", [], |row| row.get(0))?;

        Ok(count as usize)
    }

    // Helper to convert a row to a Meeting
    fn row_to_meeting(row: &rusqlite::Row) -> rusqlite::Result<Meeting> {
        Ok(Meeting {
            id: row.get(0)?,
            booked_by: row.get(1)?,
            supplier_name: row.get(2)?,
            date: row.get(3)?,
            time: row.get(4)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;
    use tempfile::tempdir;

    fn draft(booked_by: &str, supplier: &str, date: &str, time: &str) -> MeetingDraft {
        MeetingDraft::new(booked_by, supplier, date, time)
    }

    #[test]
    fn test_create_database() {
        let db = Database::open_memory().unwrap();
        assert_eq!(db.count_meetings().unwrap(), 0);
    }

    #[test]
    fn test_insert_assigns_fresh_ids_and_round_trips() {
        let db = Database::open_memory().unwrap();

        let id = db
            .insert_meeting(&draft("Alice", "Acme", "2024-05-01", "09:30"))
            .unwrap();
        assert_eq!(id, 1);

        let meetings = db.list_meetings().unwrap();
        assert_eq!(meetings.len(), 1);
        assert_eq!(
            meetings[0],
            Meeting {
                id: 1,
                booked_by: "Alice".to_string(),
                supplier_name: "Acme".to_string(),
                date: "2024-05-01".to_string(),
                time: "09:30".to_string(),
            }
        );
    }

    #[test]
    fn test_listing_sorts_by_date_descending() {
        let db = Database::open_memory().unwrap();

        db.insert_meeting(&draft("Alice", "Acme", "2024-05-01", "09:30"))
            .unwrap();
        db.insert_meeting(&draft("Bob", "Globex", "2024-05-10", "14:00"))
            .unwrap();
        db.insert_meeting(&draft("Carol", "Initech", "2024-04-20", "11:15"))
            .unwrap();

        let meetings = db.list_meetings().unwrap();
        let dates: Vec<&str> = meetings.iter().map(|m| m.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-05-10", "2024-05-01", "2024-04-20"]);
    }

    #[test]
    fn test_update_replaces_all_fields_and_nothing_else() {
        let db = Database::open_memory().unwrap();

        let first = db
            .insert_meeting(&draft("Alice", "Acme", "2024-05-01", "09:30"))
            .unwrap();
        let second = db
            .insert_meeting(&draft("Bob", "Globex", "2024-05-02", "10:00"))
            .unwrap();

        db.update_meeting(first, &draft("Alicia", "Acme Corp", "2024-06-01", "16:45"))
            .unwrap();

        let updated = db.get_meeting(first).unwrap().unwrap();
        assert_eq!(updated.booked_by, "Alicia");
        assert_eq!(updated.supplier_name, "Acme Corp");
        assert_eq!(updated.date, "2024-06-01");
        assert_eq!(updated.time, "16:45");

        let untouched = db.get_meeting(second).unwrap().unwrap();
        assert_eq!(untouched.booked_by, "Bob");
        assert_eq!(untouched.date, "2024-05-02");
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let db = Database::open_memory().unwrap();

        let first = db
            .insert_meeting(&draft("Alice", "Acme", "2024-05-01", "09:30"))
            .unwrap();
        let second = db
            .insert_meeting(&draft("Bob", "Globex", "2024-05-02", "10:00"))
            .unwrap();

        db.delete_meeting(first).unwrap();

        assert!(db.get_meeting(first).unwrap().is_none());
        let remaining = db.list_meetings().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second);
        assert_eq!(remaining[0].booked_by, "Bob");
    }

    #[test]
    fn test_unknown_id_update_and_delete_are_no_ops() {
        let db = Database::open_memory().unwrap();

        db.delete_meeting(1).unwrap();
        db.update_meeting(42, &draft("Ghost", "Nobody", "2024-01-01", "00:00"))
            .unwrap();

        assert!(db.list_meetings().unwrap().is_empty());
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let db = Database::open_memory().unwrap();

        let first = db
            .insert_meeting(&draft("Alice", "Acme", "2024-05-01", "09:30"))
            .unwrap();
        db.delete_meeting(first).unwrap();

        let next = db
            .insert_meeting(&draft("Bob", "Globex", "2024-05-02", "10:00"))
            .unwrap();
        assert!(next > first);
    }

    #[test]
    fn test_new_database_sets_schema_version() {
        let db = Database::open_memory().unwrap();
        assert_eq!(db.schema_version().unwrap(), 1);
    }

    #[test]
    fn test_opening_legacy_database_adopts_existing_table() {
        let tmp = tempdir().unwrap();
        let db_path = tmp.path().join("legacy.db");

        // Simulate a pre-versioning store without PRAGMA user_version tracking.
        let conn = Connection::open(&db_path).unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE meetings (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                booked_by TEXT NOT NULL,
                supplier_name TEXT NOT NULL,
                date TEXT NOT NULL,
                time TEXT NOT NULL
            );
            "#,
        )
        .unwrap();
        conn.execute(
            "INSERT INTO meetings (booked_by, supplier_name, date, time)
             VALUES ('Alice', 'Acme', '2024-05-01', '09:30')",
            [],
        )
        .unwrap();
        drop(conn);

        let db = Database::open_path(&db_path).unwrap();
        assert_eq!(db.schema_version().unwrap(), 1);
        assert_eq!(db.count_meetings().unwrap(), 1);
    }

    #[test]
    fn test_newer_schema_version_is_refused() {
        let tmp = tempdir().unwrap();
        let db_path = tmp.path().join("future.db");

        let conn = Connection::open(&db_path).unwrap();
        conn.execute("PRAGMA user_version = 99", []).unwrap();
        drop(conn);

        let err = Database::open_path(&db_path).unwrap_err();
        assert!(matches!(err, BookingError::StorageUnavailable(_)));
    }
}
