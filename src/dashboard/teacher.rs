//! Teacher Dashboard

use serde::Serialize;

use super::{DashboardError, Section};
use crate::models::Course;
use crate::session::SessionContext;

/// The teacher's courses plus course creation
#[derive(Debug, Clone, Default, Serialize)]
pub struct TeacherDashboard {
    pub courses: Section<Vec<Course>>,
}

impl TeacherDashboard {
    pub async fn mount(ctx: &SessionContext) -> Self {
        let courses = Section::from_result("courses", ctx.api().teacher_courses(ctx.token()).await);
        Self { courses }
    }

    /// Create a course and put the server's copy at the top of the list
    ///
    /// The list is left untouched when the backend rejects the course.
    pub async fn create_course(
        &mut self,
        ctx: &SessionContext,
        title: &str,
        subject: &str,
    ) -> Result<Course, DashboardError> {
        let course = ctx.api().create_course(ctx.token(), title, subject).await?;
        tracing::info!(course_id = %course.id, "Created course {:?}", course.title);

        match &mut self.courses {
            Section::Loaded(courses) => courses.insert(0, course.clone()),
            other => *other = Section::Loaded(vec![course.clone()]),
        }
        Ok(course)
    }
}
