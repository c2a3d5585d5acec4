mod models;

pub use models::{Group, GroupAssignment, GroupCategory};

use crate::client::{CanvasClient, PER_PAGE};
use crate::error::{CanvasResult, Error};
use crate::pagination::Pages;
use serde_json::json;
use std::collections::HashMap;
use tracing::{info, warn};

impl CanvasClient {
    /// Find a group category by name, creating it if it does not exist
    pub fn find_or_create_group_category(&self, name: &str) -> CanvasResult<i64> {
        let mut url = self.course_url("group_categories")?;
        url.query_pairs_mut().append_pair("per_page", PER_PAGE);
        let categories: Vec<GroupCategory> = Pages::new(self, url).collect_all()?;

        if let Some(category) = categories.iter().find(|c| c.name == name) {
            info!(
                "Group category '{}' already exists with id {}",
                name, category.id
            );
            return Ok(category.id);
        }

        info!("Group category '{}' does not exist, creating it", name);
        let url = self.course_url("group_categories")?;
        let created: GroupCategory = self.post_json(url, &json!({ "name": name }))?.json()?;
        info!("Created group category '{}' with id {}", name, created.id);
        Ok(created.id)
    }

    /// Map existing group names to ids within a category
    pub fn groups_in_category(&self, category_id: i64) -> CanvasResult<HashMap<String, i64>> {
        let mut url = self.api_url(&format!("group_categories/{}/groups", category_id))?;
        url.query_pairs_mut().append_pair("per_page", PER_PAGE);
        let groups: Vec<Group> = Pages::new(self, url).collect_all()?;
        Ok(groups.into_iter().map(|g| (g.name, g.id)).collect())
    }

    /// Create a group within a category and return its id
    pub fn create_group(&self, category_id: i64, name: &str) -> CanvasResult<i64> {
        let url = self.api_url(&format!("group_categories/{}/groups", category_id))?;
        let created: Group = self.post_json(url, &json!({ "name": name }))?.json()?;
        Ok(created.id)
    }

    /// Add a user to a group.
    ///
    /// Returns `false` when Canvas reports the user is already a member.
    pub fn add_group_membership(&self, group_id: i64, user_id: i64) -> CanvasResult<bool> {
        let url = self.api_url(&format!("groups/{}/memberships", group_id))?;
        match self.post_json(url, &json!({ "user_id": user_id })) {
            Ok(_) => Ok(true),
            Err(Error::Request { status: 409, .. }) => {
                warn!("User {} is already in group {}", user_id, group_id);
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Apply a membership plan: create missing groups in the named
    /// category and add each planned member to their group
    pub fn assign_members(
        &self,
        category_name: &str,
        plan: &[GroupAssignment],
    ) -> CanvasResult<()> {
        let category_id = self.find_or_create_group_category(category_name)?;
        let mut groups = self.groups_in_category(category_id)?;

        for entry in plan {
            let group_id = match groups.get(&entry.group_name) {
                Some(id) => *id,
                None => {
                    let id = self.create_group(category_id, &entry.group_name)?;
                    info!("Created group '{}' with id {}", entry.group_name, id);
                    groups.insert(entry.group_name.clone(), id);
                    id
                }
            };

            self.add_group_membership(group_id, entry.user_id)?;
            info!(
                "Assigned user {} to group '{}'",
                entry.user_id, entry.group_name
            );
        }

        Ok(())
    }
}
