mod models;

pub use models::{Assignment, AssignmentGroup, GroupedAssignments, UpsertOutcome};

use crate::client::{CanvasClient, PER_PAGE};
use crate::error::{CanvasResult, Error};
use crate::pagination::Pages;
use serde_json::json;
use tracing::{error, info, warn};

impl CanvasClient {
    /// Create or update an assignment for the configured course.
    ///
    /// An existing published assignment is never touched; the outcome
    /// reports which action was taken.
    pub fn upsert_assignment(
        &self,
        assignment: &Assignment,
        group_id: Option<i64>,
    ) -> CanvasResult<UpsertOutcome> {
        let mut body = serde_json::to_value(assignment)?;
        if let Some(group_id) = group_id {
            body["assignment_group_id"] = json!(group_id);
        }
        let payload = json!({ "assignment": body });
        let name = assignment.name.as_deref().unwrap_or("<unnamed>");

        if let Some(id) = assignment.id {
            match self.assignment(id)? {
                Some(existing) if existing.published == Some(true) => {
                    error!("Assignment '{}' is already published, aborting", name);
                    return Ok(UpsertOutcome::SkippedPublished);
                }
                Some(_) => {
                    info!("Assignment '{}' exists, updating", name);
                    let url = self.course_url(&format!("assignments/{}", id))?;
                    let updated: Assignment = self.put_json(url, &payload)?.json()?;
                    info!("Assignment '{}' updated successfully", name);
                    return Ok(UpsertOutcome::Updated(updated));
                }
                None => {
                    warn!(
                        "Assignment '{}' with id {} cannot be found, creating a new one",
                        name, id
                    );
                }
            }
        }

        let url = self.course_url("assignments")?;
        let created: Assignment = self.post_json(url, &payload)?.json()?;
        info!(
            "Assignment '{}' created successfully with id {:?}",
            name, created.id
        );
        Ok(UpsertOutcome::Created(created))
    }

    /// Retrieve a single assignment; a 404 maps to `None`
    pub fn assignment(&self, assignment_id: i64) -> CanvasResult<Option<Assignment>> {
        let url = self.course_url(&format!("assignments/{}", assignment_id))?;
        match self.get(url) {
            Ok(response) => Ok(Some(response.json()?)),
            Err(Error::Request { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// List every assignment for the course
    pub fn list_assignments(&self) -> CanvasResult<Vec<Assignment>> {
        let mut url = self.course_url("assignments")?;
        url.query_pairs_mut().append_pair("per_page", PER_PAGE);
        Pages::new(self, url).collect_all()
    }

    /// List the assignment groups defined for the course
    pub fn assignment_groups(&self) -> CanvasResult<Vec<AssignmentGroup>> {
        let mut url = self.course_url("assignment_groups")?;
        url.query_pairs_mut().append_pair("per_page", PER_PAGE);
        Pages::new(self, url).collect_all()
    }

    /// Retrieve all assignments bucketed under their assignment groups.
    ///
    /// Assignments pointing at an unknown group are logged and left out.
    pub fn assignments_by_group(&self) -> CanvasResult<Vec<GroupedAssignments>> {
        let groups = self.assignment_groups()?;
        let assignments = self.list_assignments()?;

        let mut buckets: Vec<GroupedAssignments> = groups
            .into_iter()
            .map(|group| GroupedAssignments {
                group,
                assignments: Vec::new(),
            })
            .collect();

        for assignment in assignments {
            let target = assignment
                .assignment_group_id
                .and_then(|gid| buckets.iter_mut().find(|b| b.group.id == gid));
            match target {
                Some(bucket) => bucket.assignments.push(assignment),
                None => warn!(
                    "Assignment '{}' is in an unknown group: {:?}",
                    assignment.name.as_deref().unwrap_or("<unnamed>"),
                    assignment.assignment_group_id
                ),
            }
        }

        Ok(buckets)
    }
}
