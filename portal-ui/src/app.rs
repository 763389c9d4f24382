//! App Root Component
//!
//! Chooses between the auth form, the profile placeholder and the dashboard
//! for the signed-in role.

use leptos::*;

use crate::components::{Loading, Toast, Topbar};
use crate::pages::{AdminDashboard, AuthForm, StudentDashboard, TeacherDashboard};
use crate::state::models::{Role, User};
use crate::state::{provide_session_state, SessionState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_session_state();
    let state = use_context::<SessionState>().expect("SessionState not found");

    view! {
        <div class="min-h-screen bg-gray-50 text-gray-900">
            {move || {
                let signed_in = state.token.with(Option::is_some);
                match (signed_in, state.me.get()) {
                    (false, _) => view! {
                        <div class="min-h-screen flex items-center justify-center p-4">
                            <AuthForm />
                        </div>
                    }.into_view(),
                    (true, None) => view! { <ProfilePending /> }.into_view(),
                    (true, Some(me)) => view! { <Portal me=me /> }.into_view(),
                }
            }}

            <Toast />
        </div>
    }
}

#[component]
fn Portal(me: User) -> impl IntoView {
    let role = me.role;

    view! {
        <div class="container mx-auto px-4 py-6">
            <Topbar me=me />
            <main>
                {match role {
                    Role::Student => view! { <StudentDashboard /> }.into_view(),
                    Role::Teacher => view! { <TeacherDashboard /> }.into_view(),
                    Role::Admin => view! { <AdminDashboard /> }.into_view(),
                    Role::Unknown => view! {}.into_view(),
                }}
            </main>
        </div>
    }
}

/// Token present but no profile yet, or `/me` failed for it
#[component]
fn ProfilePending() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    view! {
        <div class="min-h-screen flex flex-col items-center justify-center p-4 space-y-4">
            {move || {
                if state.profile_failed.get() {
                    view! {
                        <p class="text-gray-600">"Your profile could not be loaded."</p>
                        <button
                            on:click=move |_| state.logout()
                            class="px-4 py-2 bg-gray-200 hover:bg-gray-300 rounded-lg font-medium transition-colors"
                        >
                            "Logout"
                        </button>
                    }.into_view()
                } else {
                    view! { <Loading /> }.into_view()
                }
            }}
        </div>
    }
}
