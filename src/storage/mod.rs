//! Storage module for roombook
//!
//! Owns the SQLite connection and the CRUD operations over meetings.

mod database;
mod models;

pub use database::Database;
pub use models::{Meeting, MeetingDraft};
