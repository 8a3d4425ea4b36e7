//! App Layout Component

use leptos::prelude::*;

use crate::components::Header;

/// Frame for logged-in pages
#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    view! {
        <div>
            <Header />
            <div class="app-container">
                <div class="header-pseudo"></div>
                <main>{children()}</main>
            </div>
        </div>
    }
}
