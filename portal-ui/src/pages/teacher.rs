//! Teacher Dashboard
//!
//! Own courses plus a form for creating new ones.

use leptos::*;

use crate::api;
use crate::pages::{list_section, settle, Load};
use crate::state::models::{prepend_course, Course};
use crate::state::SessionState;

#[component]
pub fn TeacherDashboard() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    let courses = create_rw_signal(Load::<Vec<Course>>::Loading);
    let (title, set_title) = create_signal(String::new());
    let (subject, set_subject) = create_signal(String::new());
    let (saving, set_saving) = create_signal(false);

    if let Some(token) = state.token.get_untracked() {
        spawn_local(async move {
            settle(courses, "courses", api::fetch_teacher_courses(&token).await);
        });
    }

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = state.token.get_untracked() else {
            return;
        };
        set_saving.set(true);

        spawn_local(async move {
            match api::create_course(&token, &title.get_untracked(), &subject.get_untracked()).await {
                Ok(course) => {
                    courses.update(|load| match load {
                        Load::Ready(list) => prepend_course(list, course),
                        other => *other = Load::Ready(vec![course]),
                    });
                    set_title.set(String::new());
                    set_subject.set(String::new());
                    state.show_success("Course created");
                }
                Err(e) => {
                    web_sys::console::warn_1(&format!("Course creation failed: {}", e).into());
                    state.show_error("Could not create course");
                }
            }
            set_saving.set(false);
        });
    };

    let input_class = "flex-1 border border-gray-300 rounded-lg px-4 py-2 focus:border-blue-500 focus:outline-none";

    view! {
        <div class="grid gap-6 md:grid-cols-2">
            <section class="bg-white rounded-xl shadow p-6">
                <h2 class="text-lg font-semibold mb-4">"Create Course"</h2>
                <form class="space-y-3" on:submit=submit>
                    <input
                        type="text"
                        placeholder="Title"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                        class=input_class
                    />
                    <input
                        type="text"
                        placeholder="Subject"
                        prop:value=move || subject.get()
                        on:input=move |ev| set_subject.set(event_target_value(&ev))
                        class=input_class
                    />
                    <button
                        type="submit"
                        disabled=move || saving.get()
                        class="px-4 py-2 bg-blue-600 hover:bg-blue-700 disabled:bg-blue-300
                               text-white rounded-lg font-medium transition-colors"
                    >
                        {move || if saving.get() { "Saving..." } else { "Add course" }}
                    </button>
                </form>
            </section>

            <section class="bg-white rounded-xl shadow p-6">
                <h2 class="text-lg font-semibold mb-4">"My Courses"</h2>
                {list_section(courses, "courses", "No courses yet.", |course: Course| view! {
                    <li class="flex items-center justify-between">
                        <div>
                            <p class="font-medium">{course.title}</p>
                            <p class="text-sm text-gray-500">{course.subject}</p>
                        </div>
                        <span class="text-xs text-gray-400">{course.id.to_string()}</span>
                    </li>
                }.into_view())}
            </section>
        </div>
    }
}
