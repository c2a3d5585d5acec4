mod models;

pub use models::Student;

use crate::client::{CanvasClient, PER_PAGE};
use crate::error::CanvasResult;
use crate::pagination::Pages;
use tracing::info;

impl CanvasClient {
    /// List every student enrolled in the course, following pagination
    pub fn list_students(&self) -> CanvasResult<Vec<Student>> {
        let mut url = self.course_url("users")?;
        url.query_pairs_mut()
            .append_pair("enrollment_type[]", "student")
            .append_pair("per_page", PER_PAGE);

        let students = Pages::new(self, url).collect_all()?;
        info!("Retrieved {} students", students.len());
        Ok(students)
    }
}
