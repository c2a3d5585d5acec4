use serde::{Deserialize, Serialize};

/// A student enrollment as served by the course users endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    /// Canvas login/SIS id; not exposed for every enrollment
    #[serde(default)]
    pub login_id: Option<String>,
}
