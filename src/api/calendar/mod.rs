mod models;

pub use models::{CalendarEvent, DeleteOutcome, DeleteReport};

use crate::client::{CanvasClient, PER_PAGE};
use crate::error::{other_error, CanvasResult};
use crate::pagination::Pages;
use chrono::{NaiveDate, NaiveTime};
use reqwest::StatusCode;
use serde_json::json;
use tracing::{info, warn};

impl CanvasClient {
    /// Create a calendar event for the configured course
    pub fn create_calendar_event(
        &self,
        title: &str,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        description: &str,
    ) -> CanvasResult<CalendarEvent> {
        let url = self.api_url("calendar_events")?;
        let payload = json!({
            "calendar_event": {
                "context_code": self.config().context_code(),
                "title": title,
                "description": description,
                "start_at": event_timestamp(date, start_time),
                "end_at": event_timestamp(date, end_time),
            }
        });

        let event: CalendarEvent = self.post_json(url, &payload)?.json()?;
        info!(
            "Event '{}' created successfully for {} at {}",
            title, date, start_time
        );
        Ok(event)
    }

    /// Lazy page iterator over the course's events in a date window
    pub fn calendar_event_pages(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> CanvasResult<Pages<'_, CalendarEvent>> {
        let mut url = self.api_url("calendar_events")?;
        url.query_pairs_mut()
            .append_pair("context_codes[]", &self.config().context_code())
            .append_pair("type", "event")
            .append_pair("per_page", PER_PAGE)
            .append_pair("start_date", &start_date.to_string())
            .append_pair("end_date", &end_date.to_string());
        Ok(Pages::new(self, url))
    }

    /// List every event for the course within the date window
    pub fn list_calendar_events(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> CanvasResult<Vec<CalendarEvent>> {
        self.calendar_event_pages(start_date, end_date)?
            .collect_all()
    }

    /// Delete a specific calendar event
    pub fn delete_calendar_event(&self, event_id: i64) -> CanvasResult<DeleteOutcome> {
        let url = self.api_url(&format!("calendar_events/{}", event_id))?;
        let response = self.delete(url)?;

        match response.status() {
            StatusCode::NO_CONTENT => {
                info!("Event {} deleted successfully", event_id);
                Ok(DeleteOutcome::Deleted)
            }
            StatusCode::OK => {
                // Canvas answers 200 with the event body when the delete
                // was a no-op; anything but the deleted state is wrong
                let event: CalendarEvent = response.json()?;
                if event.workflow_state.as_deref() == Some("deleted") {
                    warn!("Event {} is already deleted, skipping", event_id);
                    Ok(DeleteOutcome::AlreadyDeleted)
                } else {
                    Err(other_error(&format!(
                        "Failed to delete event {}: unexpected workflow state",
                        event_id
                    )))
                }
            }
            _ => Ok(DeleteOutcome::Deleted),
        }
    }

    /// Delete every event for the course within the configured date window.
    ///
    /// Individual failures are logged and collected in the report instead
    /// of aborting the pass; only a failure of the initial listing makes
    /// this call return an error.
    pub fn delete_all_calendar_events(&self) -> CanvasResult<DeleteReport> {
        let events =
            self.list_calendar_events(self.config().start_date, self.config().end_date)?;

        let mut report = DeleteReport::default();
        for event in events {
            if event.workflow_state.as_deref() == Some("deleted") {
                warn!("Skipping event {} as it is already deleted", event.id);
                report.skipped.push(event.id);
                continue;
            }

            match self.delete_calendar_event(event.id) {
                Ok(DeleteOutcome::Deleted) => report.deleted.push(event.id),
                Ok(DeleteOutcome::AlreadyDeleted) => report.skipped.push(event.id),
                Err(e) => {
                    warn!("Failed to delete event {}: {}", event.id, e);
                    report.failed.push((event.id, e));
                }
            }
        }

        info!(
            "Deleted {} events ({} skipped, {} failed)",
            report.deleted.len(),
            report.skipped.len(),
            report.failed.len()
        );
        Ok(report)
    }
}

/// Build the UTC timestamp Canvas expects for an event boundary
fn event_timestamp(date: NaiveDate, time: NaiveTime) -> String {
    format!("{}T{}Z", date.format("%Y-%m-%d"), time.format("%H:%M:%S"))
}
