use crate::error::Error;
use serde::{Deserialize, Serialize};

/// A calendar event as served by the Canvas API
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CalendarEvent {
    #[serde(default)]
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_at: Option<String>,
    pub end_at: Option<String>,
    pub context_code: Option<String>,
    pub workflow_state: Option<String>,
}

/// Result of deleting a single calendar event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The server removed the event
    Deleted,
    /// The event was already in the deleted state
    AlreadyDeleted,
}

/// Summary of a bulk delete pass over calendar events
#[derive(Debug, Default)]
pub struct DeleteReport {
    /// Events deleted during this pass
    pub deleted: Vec<i64>,
    /// Events skipped because Canvas already reports them deleted
    pub skipped: Vec<i64>,
    /// Events the server refused to delete, with the error for each
    pub failed: Vec<(i64, Error)>,
}

impl DeleteReport {
    /// True when every event was either deleted or already gone
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}
