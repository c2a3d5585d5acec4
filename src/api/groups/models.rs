use serde::{Deserialize, Serialize};

/// A group category (group set) as served by the Canvas API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupCategory {
    pub id: i64,
    pub name: String,
}

/// A student group as served by the Canvas API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    pub name: String,
}

/// One planned membership: put this user in this named group
#[derive(Debug, Clone)]
pub struct GroupAssignment {
    pub user_id: i64,
    pub group_name: String,
}
