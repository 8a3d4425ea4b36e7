//! Guest Layout Component
//!
//! Frame for pages shown before login, with the dark-mode toggle.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_toggle_dark, UiStateStoreFields};
use crate::theme;

#[component]
pub fn GuestLayout(children: Children) -> impl IntoView {
    let ctx = use_app_context();
    let is_dark = move || ctx.ui.is_dark().get();

    // Persist every change of the flag
    Effect::new(move |_| theme::save_dark_mode(is_dark()));

    view! {
        <div class="wrap">
            <div class=move || if is_dark() { "guest-container back-dark" } else { "guest-container" }>
                <div class="back-toggle">
                    <button
                        class=move || if is_dark() { "toggle-btn btn-dark" } else { "toggle-btn" }
                        on:click=move |_| store_toggle_dark(&ctx.ui)
                    >
                        {move || if is_dark() { "Bright" } else { "Dark" }}
                    </button>
                </div>
                <div class="ent-title">
                    <h1>"Regondor"</h1>
                </div>
                <main>{children()}</main>
            </div>
        </div>
    }
}
