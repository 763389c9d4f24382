//! Toasts
//!
//! Confirmation and failure banners for dashboard actions. Messages come from
//! [`SessionState::show_success`] and [`SessionState::show_error`], which also
//! clear them.

use leptos::*;

use crate::state::SessionState;

#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    let banner = move |message: Option<String>, tone: Tone| {
        message.map(|text| view! { <Banner text=text tone=tone /> })
    };

    view! {
        <div class="fixed top-4 inset-x-0 z-50 flex flex-col items-center space-y-2 pointer-events-none">
            {move || banner(state.success.get(), Tone::Done)}
            {move || banner(state.error.get(), Tone::Failed)}
        </div>
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tone {
    Done,
    Failed,
}

#[component]
fn Banner(text: String, tone: Tone) -> impl IntoView {
    let style = match tone {
        Tone::Done => "border-emerald-300 bg-emerald-50 text-emerald-800",
        Tone::Failed => "border-rose-300 bg-rose-50 text-rose-800",
    };

    view! {
        <p
            role=if tone == Tone::Failed { "alert" } else { "status" }
            class=format!("pointer-events-auto max-w-md rounded-md border px-4 py-2 text-sm shadow {}", style)
        >
            {text}
        </p>
    }
}
