//! roombook - a terminal form for booking a shared meeting room
//!
//! Bookings live in a local SQLite file; the form is a ratatui screen with a
//! date-sorted listing underneath it.

pub mod cli;
pub mod config;
pub mod controller;
pub mod storage;
pub mod tui;

use thiserror::Error;

/// Main error type for roombook
#[derive(Error, Debug)]
pub enum BookingError {
    /// The store could not be opened or created. Fatal at startup.
    #[error("booking store unavailable: {0}")]
    StorageUnavailable(String),

    /// A statement failed after the store was opened. The store is
    /// unchanged and the operation may be retried.
    #[error("booking store error: {0}")]
    StorageWrite(#[from] rusqlite::Error),

    /// A required form field was left empty. No store call was made.
    #[error("please fill in all fields")]
    MissingFields,

    /// Delete or edit was requested with no row selected in the listing.
    #[error("please select a meeting in the list first")]
    SelectionRequired,
}

pub type Result<T> = std::result::Result<T, BookingError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "roombook";
