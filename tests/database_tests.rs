use anyhow::Result;
use tempfile::tempdir;

use roombook::storage::{Database, Meeting, MeetingDraft};

#[test]
fn database_supports_core_booking_workflow() -> Result<()> {
    let tmp = tempdir()?;
    let db_path = tmp.path().join("roombook.db");
    let db = Database::open_path(&db_path)?;

    let id = db.insert_meeting(&MeetingDraft::new("Alice", "Acme", "2024-05-01", "09:30"))?;
    assert_eq!(id, 1);

    let listing = db.list_meetings()?;
    assert_eq!(
        listing,
        vec![Meeting {
            id: 1,
            booked_by: "Alice".to_string(),
            supplier_name: "Acme".to_string(),
            date: "2024-05-01".to_string(),
            time: "09:30".to_string(),
        }]
    );

    db.update_meeting(id, &MeetingDraft::new("Alice", "Acme Corp", "2024-05-03", "10:00"))?;
    let updated = db.get_meeting(id)?.expect("booking should still exist");
    assert_eq!(updated.supplier_name, "Acme Corp");
    assert_eq!(updated.date, "2024-05-03");

    db.delete_meeting(id)?;
    assert!(db.list_meetings()?.is_empty());

    Ok(())
}

#[test]
fn listing_orders_distinct_dates_strictly_descending() -> Result<()> {
    let tmp = tempdir()?;
    let db = Database::open_path(&tmp.path().join("roombook.db"))?;

    db.insert_meeting(&MeetingDraft::new("Alice", "Acme", "2024-05-01", "09:30"))?;
    db.insert_meeting(&MeetingDraft::new("Bob", "Globex", "2024-05-10", "14:00"))?;

    let listing = db.list_meetings()?;
    assert_eq!(listing[0].date, "2024-05-10");
    assert_eq!(listing[1].date, "2024-05-01");

    Ok(())
}

#[test]
fn bookings_sharing_a_date_keep_insertion_order() -> Result<()> {
    let tmp = tempdir()?;
    let db = Database::open_path(&tmp.path().join("roombook.db"))?;

    db.insert_meeting(&MeetingDraft::new("Alice", "Acme", "2024-05-01", "09:30"))?;
    db.insert_meeting(&MeetingDraft::new("Bob", "Globex", "2024-05-01", "14:00"))?;

    let listing = db.list_meetings()?;
    let names: Vec<&str> = listing.iter().map(|m| m.booked_by.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);

    Ok(())
}

#[test]
fn deleting_from_an_empty_store_raises_no_error() -> Result<()> {
    let tmp = tempdir()?;
    let db = Database::open_path(&tmp.path().join("roombook.db"))?;

    db.delete_meeting(1)?;
    assert!(db.list_meetings()?.is_empty());

    Ok(())
}

#[test]
fn bookings_survive_reopening_the_store() -> Result<()> {
    let tmp = tempdir()?;
    let db_path = tmp.path().join("roombook.db");

    {
        let db = Database::open_path(&db_path)?;
        db.insert_meeting(&MeetingDraft::new("Alice", "Acme", "2024-05-01", "09:30"))?;
    }

    // Each write commits on its own, so nothing depends on a clean close.
    let db = Database::open_path(&db_path)?;
    let listing = db.list_meetings()?;
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].booked_by, "Alice");

    Ok(())
}
