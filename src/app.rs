//! Regondor Frontend App
//!
//! Root component: builds the shared client and stores, bootstraps the
//! CSRF token and switches between top-level views.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::cache::QueryCache;
use crate::components::{AuthForm, MyPage, TodoPage};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::session::Route;
use crate::store::UiState;
use crate::theme;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log::info!("[APP] API at {}", config.api_url);

    let ctx = AppContext::new(
        ApiClient::new(&config),
        Store::new(QueryCache::default()),
        Store::new(UiState::new(theme::load_dark_mode())),
    );

    // Provide context to all children
    provide_context(ctx);

    // Fetch the CSRF token on mount
    Effect::new(move |_| ctx.bootstrap_csrf());

    view! {
        {move || match ctx.route.get() {
            Route::Auth => view! { <AuthForm /> }.into_any(),
            Route::Todo => view! { <TodoPage /> }.into_any(),
            Route::MyPage => view! { <MyPage /> }.into_any(),
        }}
    }
}
