use serde::{Deserialize, Serialize};

/// An assignment record, used both for responses and upsert payloads.
///
/// Fields left at `None` are omitted from serialized payloads so an
/// upsert only touches what the caller set.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Assignment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_possible: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_extensions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_group_id: Option<i64>,
}

/// An assignment group as served by the Canvas API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentGroup {
    pub id: i64,
    pub name: String,
}

/// Assignments bucketed under their assignment group
#[derive(Debug, Clone, Serialize)]
pub struct GroupedAssignments {
    pub group: AssignmentGroup,
    pub assignments: Vec<Assignment>,
}

/// What an assignment upsert ended up doing
#[derive(Debug, Clone)]
pub enum UpsertOutcome {
    /// A new assignment was created
    Created(Assignment),
    /// An existing unpublished assignment was updated
    Updated(Assignment),
    /// The assignment exists and is published; nothing was written
    SkippedPublished,
}
