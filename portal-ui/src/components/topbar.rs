//! Top Bar Component
//!
//! Portal title, the signed-in user and the logout button.

use leptos::*;

use crate::state::models::User;
use crate::state::SessionState;

#[component]
pub fn Topbar(me: User) -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    view! {
        <header class="flex items-center justify-between mb-6">
            <div>
                <h1 class="text-2xl font-bold">"Student Portal"</h1>
                <p class="text-sm text-gray-500">
                    {me.name.clone()} " (" {me.role.as_str()} ")"
                </p>
            </div>
            <button
                on:click=move |_| state.logout()
                class="px-4 py-2 bg-gray-200 hover:bg-gray-300 rounded-lg font-medium transition-colors"
            >
                "Logout"
            </button>
        </header>
    }
}
