use chrono::{NaiveDate, NaiveTime};
use hi_canvas::client::CanvasClient;
use hi_canvas::config::Config;
use hi_canvas::error::{config_error, CanvasResult};
use hi_canvas::startup;
use serde::Deserialize;
use std::env;
use std::fs;
use tracing::{info, warn};

/// One planned event as stored in the calendar JSON file
#[derive(Debug, Deserialize)]
struct PlannedEvent {
    title: String,
    date: String,
    /// Start time, HH:MM
    time: String,
    /// End time, HH:MM
    etime: String,
    description: String,
}

fn main() -> miette::Result<()> {
    startup::init_logging()?;

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("calendar.json"));
    let config = startup::load_config()?;

    info!("Loading calendar events from {}", path);
    let planned = load_calendar(&path)?;

    update_calendar(config, &planned)?;
    info!("Calendar updated successfully");
    Ok(())
}

/// Load planned events from a JSON file
fn load_calendar(path: &str) -> CanvasResult<Vec<PlannedEvent>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Replace the course calendar with the planned events
fn update_calendar(config: Config, planned: &[PlannedEvent]) -> CanvasResult<()> {
    let client = CanvasClient::new(config)?;

    info!("Deleting all existing calendar events");
    let report = client.delete_all_calendar_events()?;
    if !report.is_clean() {
        warn!("{} events could not be deleted", report.failed.len());
    }

    info!("Creating {} new calendar events", planned.len());
    for (week, event) in planned.iter().enumerate() {
        info!("Updating week {}: {}", week + 1, event.title);
        client.create_calendar_event(
            &event.title,
            parse_date(&event.date)?,
            parse_time(&event.time)?,
            parse_time(&event.etime)?,
            &event.description,
        )?;
    }

    Ok(())
}

fn parse_date(raw: &str) -> CanvasResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| config_error(&format!("Invalid date in calendar file: {}", raw)))
}

fn parse_time(raw: &str) -> CanvasResult<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .map_err(|_| config_error(&format!("Invalid time in calendar file: {}", raw)))
}
