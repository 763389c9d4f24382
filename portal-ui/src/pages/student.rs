//! Student Dashboard

use leptos::*;

use crate::api;
use crate::pages::{list_section, settle, Load};
use crate::state::models::{Announcement, Assignment, Course};
use crate::state::SessionState;

#[component]
pub fn StudentDashboard() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    let courses = create_rw_signal(Load::<Vec<Course>>::Loading);
    let assignments = create_rw_signal(Load::<Vec<Assignment>>::Loading);
    let announcements = create_rw_signal(Load::<Vec<Announcement>>::Loading);

    if let Some(token) = state.token.get_untracked() {
        spawn_local(async move {
            settle(courses, "courses", api::fetch_student_courses(&token).await);
            settle(assignments, "assignments", api::fetch_assignments(&token).await);
            settle(announcements, "announcements", api::fetch_announcements(&token).await);
        });
    }

    view! {
        <div class="grid gap-6 md:grid-cols-3">
            <section class="bg-white rounded-xl shadow p-6">
                <h2 class="text-lg font-semibold mb-4">"My Courses"</h2>
                {list_section(courses, "courses", "Not enrolled yet.", |course: Course| view! {
                    <li>
                        <p class="font-medium">{course.title}</p>
                        <p class="text-sm text-gray-500">{course.subject}</p>
                    </li>
                }.into_view())}
            </section>

            <section class="bg-white rounded-xl shadow p-6">
                <h2 class="text-lg font-semibold mb-4">"Assignments"</h2>
                {list_section(assignments, "assignments", "No assignments yet.", |assignment: Assignment| {
                    let due = assignment.due_label();
                    view! {
                        <li>
                            <p class="font-medium">{assignment.title}</p>
                            <p class="text-sm text-gray-500">"Due: " {due}</p>
                        </li>
                    }.into_view()
                })}
            </section>

            <section class="bg-white rounded-xl shadow p-6">
                <h2 class="text-lg font-semibold mb-4">"Announcements"</h2>
                {list_section(announcements, "announcements", "No announcements.", |note: Announcement| view! {
                    <li>
                        <p class="font-medium">{note.title}</p>
                        <p class="text-sm text-gray-600">{note.content}</p>
                    </li>
                }.into_view())}
            </section>
        </div>
    }
}
