//! Student Dashboard

use serde::Serialize;

use super::Section;
use crate::models::{Announcement, Assignment, Course};
use crate::session::SessionContext;

/// Enrolled courses, assignments and announcements
#[derive(Debug, Clone, Default, Serialize)]
pub struct StudentDashboard {
    pub courses: Section<Vec<Course>>,
    pub assignments: Section<Vec<Assignment>>,
    pub announcements: Section<Vec<Announcement>>,
}

impl StudentDashboard {
    /// Fetch courses, assignments and announcements, in that order
    pub async fn mount(ctx: &SessionContext) -> Self {
        let api = ctx.api();
        let token = ctx.token();

        let courses = Section::from_result("courses", api.student_courses(token).await);
        let assignments = Section::from_result("assignments", api.student_assignments(token).await);
        let announcements = Section::from_result("announcements", api.announcements(token).await);

        Self {
            courses,
            assignments,
            announcements,
        }
    }
}
