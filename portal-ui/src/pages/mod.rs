//! Pages
//!
//! The auth form and one dashboard per role.

mod admin;
mod auth;
mod student;
mod teacher;

pub use admin::AdminDashboard;
pub use auth::AuthForm;
pub use student::StudentDashboard;
pub use teacher::TeacherDashboard;

use leptos::*;

use crate::components::Loading;

/// Fetch state of one dashboard section
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Load<T> {
    Loading,
    Ready(T),
    Failed,
}

/// Store a fetch result, logging failures to the console
pub(crate) fn settle<T: 'static>(target: RwSignal<Load<T>>, section: &str, result: Result<T, String>) {
    match result {
        Ok(value) => target.set(Load::Ready(value)),
        Err(e) => {
            web_sys::console::warn_1(&format!("Failed to load {}: {}", section, e).into());
            target.set(Load::Failed);
        }
    }
}

/// List section: spinner, failure line, empty text or the rendered items
pub(crate) fn list_section<T: Clone + 'static>(
    load: RwSignal<Load<Vec<T>>>,
    section: &'static str,
    empty: &'static str,
    item: fn(T) -> View,
) -> impl IntoView {
    move || match load.get() {
        Load::Loading => view! { <Loading /> }.into_view(),
        Load::Failed => view! {
            <p class="text-sm text-red-600">{format!("Could not load {}.", section)}</p>
        }
        .into_view(),
        Load::Ready(items) if items.is_empty() => view! {
            <p class="text-sm text-gray-500">{empty}</p>
        }
        .into_view(),
        Load::Ready(items) => view! {
            <ul class="space-y-2">{items.into_iter().map(item).collect_view()}</ul>
        }
        .into_view(),
    }
}
