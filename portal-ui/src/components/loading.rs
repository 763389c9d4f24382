//! Loading Component

use leptos::*;

/// Spinner with a "Loading..." caption
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2 py-4 text-gray-500">
            <div class="loading-spinner w-4 h-4" />
            <span>"Loading..."</span>
        </div>
    }
}
