//! Auth Form
//!
//! Login and registration in one card. Any failure shows the same generic
//! message; the detail only goes to the console.

use leptos::*;

use crate::state::models::Role;
use crate::state::SessionState;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    Login,
    Register,
}

#[component]
pub fn AuthForm() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    let (mode, set_mode) = create_signal(AuthMode::Login);
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (role, set_role) = create_signal(Role::Student);
    let (error, set_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_submitting.set(true);

        spawn_local(async move {
            let result = match mode.get_untracked() {
                AuthMode::Login => {
                    state
                        .login(&email.get_untracked(), &password.get_untracked())
                        .await
                }
                AuthMode::Register => {
                    state
                        .register(
                            &name.get_untracked(),
                            &email.get_untracked(),
                            &password.get_untracked(),
                            role.get_untracked(),
                        )
                        .await
                }
            };

            if let Err(e) = result {
                web_sys::console::warn_1(&format!("Authentication failed: {}", e).into());
                set_error.set(Some("Authentication failed".to_string()));
            }
            set_submitting.set(false);
        });
    };

    let toggle_mode = move |_| {
        set_error.set(None);
        set_mode.update(|m| {
            *m = match m {
                AuthMode::Login => AuthMode::Register,
                AuthMode::Register => AuthMode::Login,
            }
        });
    };

    let input_class = "w-full border border-gray-300 rounded-lg px-4 py-2 focus:border-blue-500 focus:outline-none";

    view! {
        <div class="w-full max-w-md bg-white rounded-xl shadow p-8">
            <h1 class="text-2xl font-bold mb-6">
                {move || match mode.get() {
                    AuthMode::Login => "Welcome back",
                    AuthMode::Register => "Create account",
                }}
            </h1>

            <form class="space-y-4" on:submit=submit>
                {move || (mode.get() == AuthMode::Register).then(|| view! {
                    <input
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        class=input_class
                    />
                })}

                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    class=input_class
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    class=input_class
                />

                {move || (mode.get() == AuthMode::Register).then(|| view! {
                    <select
                        on:change=move |ev| set_role.set(Role::from_select(&event_target_value(&ev)))
                        class=input_class
                    >
                        <option value="student" selected=move || role.get() == Role::Student>"Student"</option>
                        <option value="teacher" selected=move || role.get() == Role::Teacher>"Teacher"</option>
                    </select>
                })}

                {move || error.get().map(|msg| view! {
                    <p class="text-sm text-red-600">{msg}</p>
                })}

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full py-2 bg-blue-600 hover:bg-blue-700 disabled:bg-blue-300
                           text-white rounded-lg font-medium transition-colors"
                >
                    {move || match mode.get() {
                        AuthMode::Login => "Login",
                        AuthMode::Register => "Register",
                    }}
                </button>
            </form>

            <button
                on:click=toggle_mode
                class="mt-4 text-sm text-blue-600 hover:underline"
            >
                {move || match mode.get() {
                    AuthMode::Login => "Need an account? Register",
                    AuthMode::Register => "Have an account? Login",
                }}
            </button>
        </div>
    }
}
