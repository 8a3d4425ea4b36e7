//! Header Component
//!
//! Top navigation for logged-in pages.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::session::{Route, Session};

const MENU: &[(&str, Route)] = &[
    ("Home", Route::Todo),
    ("About", Route::Todo),
    ("MyPage", Route::MyPage),
    ("Settings", Route::Todo),
];

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="header">
            <div class="header-logo">"Regondor"</div>
            <nav class="menu-wrap">
                <ul class="menu">
                    {MENU.iter().map(|(label, route)| {
                        let route = *route;
                        view! {
                            <li>
                                <button
                                    class=move || if ctx.route.get() == route { "menu-link active" } else { "menu-link" }
                                    on:click=move |_| ctx.navigate(route)
                                >
                                    {*label}
                                </button>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </nav>
        </div>
    }
}
