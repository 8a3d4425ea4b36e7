//! Auth Form Component
//!
//! Login and sign-up on the entry page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::GuestLayout;
use crate::context::use_app_context;
use crate::models::{Credential, Login};
use crate::mutations;

#[component]
pub fn AuthForm() -> impl IntoView {
    let ctx = use_app_context();

    let (email, set_email) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_login, set_is_login) = signal(true);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = ctx.api();
        let email = email.get();
        let password = password.get();
        if is_login.get() {
            spawn_local(async move {
                mutations::login(&api, &ctx, &Login { email, password }).await;
            });
        } else {
            let credential = Credential { email, name: name.get(), password };
            spawn_local(async move {
                mutations::register(&api, &ctx, &credential).await;
            });
        }
    };

    view! {
        <GuestLayout>
            <div class="auth">
                <h2>{move || if is_login.get() { "Login" } else { "Create a new account" }}</h2>
                <form on:submit=submit>
                    <div>
                        <input
                            name="email"
                            type="email"
                            autofocus=true
                            placeholder="Email address"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <Show when=move || !is_login.get()>
                        <div>
                            <input
                                name="name"
                                type="text"
                                placeholder="Name"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </div>
                    </Show>
                    <div>
                        <input
                            name="password"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="auth-actions">
                        <button
                            type="submit"
                            prop:disabled=move || email.get().is_empty() || password.get().is_empty()
                        >
                            {move || if is_login.get() { "Login" } else { "Sign Up" }}
                        </button>
                        <button
                            type="button"
                            class="switch-btn"
                            on:click=move |_| set_is_login.update(|v| *v = !*v)
                        >
                            "⟳"
                        </button>
                    </div>
                </form>
            </div>
        </GuestLayout>
    }
}
