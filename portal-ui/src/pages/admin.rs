//! Admin Dashboard
//!
//! User approvals and analytics counters.

use leptos::*;

use crate::api;
use crate::components::Loading;
use crate::pages::{settle, Load};
use crate::state::models::{capitalize, format_stat, replace_user, Stats, User};
use crate::state::SessionState;

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    let users = create_rw_signal(Load::<Vec<User>>::Loading);
    let stats = create_rw_signal(Load::<Stats>::Loading);

    if let Some(token) = state.token.get_untracked() {
        spawn_local(async move {
            settle(users, "users", api::fetch_users(&token).await);
            settle(stats, "analytics", api::fetch_stats(&token).await);
        });
    }

    let toggle = move |user: User| {
        let Some(token) = state.token.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::set_approval(&token, &user.id, !user.approved).await {
                Ok(updated) => users.update(|load| {
                    if let Load::Ready(list) = load {
                        replace_user(list, updated);
                    }
                }),
                Err(e) => {
                    web_sys::console::warn_1(&format!("Approval update failed: {}", e).into());
                    state.show_error("Could not update approval");
                }
            }
        });
    };

    view! {
        <div class="grid gap-6 md:grid-cols-3">
            <section class="md:col-span-2 bg-white rounded-xl shadow p-6">
                <h2 class="text-lg font-semibold mb-4">"Users"</h2>
                {move || match users.get() {
                    Load::Loading => view! { <Loading /> }.into_view(),
                    Load::Failed => view! {
                        <p class="text-sm text-red-600">"Could not load users."</p>
                    }.into_view(),
                    Load::Ready(list) if list.is_empty() => view! {
                        <p class="text-sm text-gray-500">"No users yet."</p>
                    }.into_view(),
                    Load::Ready(list) => view! {
                        <ul class="divide-y">
                            {list.into_iter().map(|user| {
                                let label = if user.approved { "Revoke" } else { "Approve" };
                                let button_class = if user.approved {
                                    "px-3 py-1 bg-red-100 text-red-700 rounded-lg text-sm"
                                } else {
                                    "px-3 py-1 bg-green-100 text-green-700 rounded-lg text-sm"
                                };
                                let target = user.clone();
                                view! {
                                    <li class="flex items-center justify-between py-3">
                                        <div>
                                            <p class="font-medium">
                                                {user.name} " - " {user.role.as_str()}
                                            </p>
                                            <p class="text-sm text-gray-500">{user.email}</p>
                                        </div>
                                        <button
                                            on:click=move |_| toggle(target.clone())
                                            class=button_class
                                        >
                                            {label}
                                        </button>
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    }.into_view(),
                }}
            </section>

            <section class="bg-white rounded-xl shadow p-6">
                <h2 class="text-lg font-semibold mb-4">"Analytics"</h2>
                {move || match stats.get() {
                    Load::Loading => view! { <Loading /> }.into_view(),
                    Load::Failed => view! {
                        <p class="text-sm text-red-600">"Could not load analytics."</p>
                    }.into_view(),
                    Load::Ready(stats) => view! {
                        <dl class="space-y-2">
                            {stats.into_iter().map(|(key, value)| view! {
                                <div class="flex justify-between">
                                    <dt class="text-gray-600">{capitalize(&key)}</dt>
                                    <dd class="font-semibold">{format_stat(value)}</dd>
                                </div>
                            }).collect_view()}
                        </dl>
                    }.into_view(),
                }}
            </section>
        </div>
    }
}
