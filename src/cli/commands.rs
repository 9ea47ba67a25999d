//! CLI command implementations

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate, NaiveTime};

use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::controller::{BookingController, FormInput};
use crate::storage::{Database, Meeting};

fn open_controller(settings: &Settings) -> Result<BookingController> {
    let db = Database::open(settings)?;
    Ok(BookingController::new(db))
}

/// Turn CLI date/time text into the widget values the form would yield.
///
/// A missing date means today. Empty strings pass through untouched so the
/// controller's presence validation is the one that rejects them.
fn to_form_input(
    booked_by: String,
    supplier: String,
    date: Option<String>,
    time: String,
) -> Result<FormInput> {
    let date = match date {
        None => Local::now().format("%Y-%m-%d").to_string(),
        Some(d) if d.is_empty() => d,
        Some(d) => NaiveDate::parse_from_str(&d, "%Y-%m-%d")
            .with_context(|| format!("invalid date '{}', expected YYYY-MM-DD", d))?
            .format("%Y-%m-%d")
            .to_string(),
    };

    let (hour, minute) = if time.is_empty() {
        (String::new(), String::new())
    } else {
        let time = NaiveTime::parse_from_str(&time, "%H:%M")
            .with_context(|| format!("invalid time '{}', expected HH:MM", time))?;
        (time.format("%H").to_string(), time.format("%M").to_string())
    };

    Ok(FormInput {
        booked_by,
        supplier_name: supplier,
        date,
        hour,
        minute,
    })
}

/// List all bookings
pub fn list_meetings(settings: &Settings, json: bool) -> Result<()> {
    let controller = open_controller(settings)?;
    let meetings = controller.on_load()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&meetings)?);
        return Ok(());
    }

    if meetings.is_empty() {
        println!("No bookings yet.");
        return Ok(());
    }

    print_table(&meetings);
    println!();
    println!("{} booking(s)", meetings.len());

    Ok(())
}

/// Book the meeting room
pub fn book_meeting(
    settings: &Settings,
    booked_by: String,
    supplier: String,
    date: Option<String>,
    time: String,
) -> Result<()> {
    let controller = open_controller(settings)?;
    let input = to_form_input(booked_by, supplier, date, time)?;

    let meetings = controller.on_create(&input)?;

    println!("Booking saved.");
    print_table(&meetings);

    Ok(())
}

/// Delete a booking by id
pub fn delete_meeting(settings: &Settings, id: i64) -> Result<()> {
    let controller = open_controller(settings)?;

    let meetings = controller.on_delete(Some(id))?;

    println!("Booking deleted.");
    if meetings.is_empty() {
        println!("No bookings left.");
    } else {
        print_table(&meetings);
    }

    Ok(())
}

/// Rewrite a booking by id
pub fn edit_meeting(
    settings: &Settings,
    id: i64,
    booked_by: String,
    supplier: String,
    date: Option<String>,
    time: String,
) -> Result<()> {
    let controller = open_controller(settings)?;
    let input = to_form_input(booked_by, supplier, date, time)?;

    let meetings = controller.on_edit(Some(id), &input)?;

    println!("Booking updated.");
    print_table(&meetings);

    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let content = toml::to_string_pretty(settings)?;
            println!("{}", content);
        }
        ConfigCommand::Path => {
            println!("{}", Settings::config_path()?.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                bail!(
                    "Config file already exists: {} (use --force to overwrite)",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Wrote default config to {}", path.display());
        }
    }

    Ok(())
}

fn print_table(meetings: &[Meeting]) {
    let by_width = column_width("Booked By", meetings.iter().map(|m| m.booked_by.as_str()));
    let supplier_width = column_width(
        "Supplier Name",
        meetings.iter().map(|m| m.supplier_name.as_str()),
    );

    println!(
        "{:>5}  {:<by$}  {:<sup$}  {:<10}  {:<5}",
        "ID",
        "Booked By",
        "Supplier Name",
        "Date",
        "Time",
        by = by_width,
        sup = supplier_width,
    );

    for meeting in meetings {
        println!(
            "{:>5}  {:<by$}  {:<sup$}  {:<10}  {:<5}",
            meeting.id,
            meeting.booked_by,
            meeting.supplier_name,
            meeting.date,
            meeting.time,
            by = by_width,
            sup = supplier_width,
        );
    }
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0)
}
