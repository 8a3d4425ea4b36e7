//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::cache::{store_update_cache, CacheStore, QueryCache};
use crate::session::{Route, Session};
use crate::store::{store_reset_draft, UiStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<ApiClient, LocalStorage>,
    /// Current top-level view
    pub route: RwSignal<Route>,
    /// Server data
    pub cache: CacheStore,
    /// Draft and theme
    pub ui: UiStore,
}

impl AppContext {
    pub fn new(api: ApiClient, cache: CacheStore, ui: UiStore) -> Self {
        Self {
            api: StoredValue::new_local(api),
            route: RwSignal::new(Route::default()),
            cache,
            ui,
        }
    }

    /// Handle to the shared API client
    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    /// Fetch the CSRF token in the background; failure leaves the header unset
    pub fn bootstrap_csrf(&self) {
        let api = self.api();
        spawn_local(async move {
            if let Err(e) = api.bootstrap().await {
                log::warn!("[APP] CSRF bootstrap failed: {}", e);
            }
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

impl Session for AppContext {
    fn update_cache<R, F: FnOnce(&mut QueryCache) -> R>(&self, f: F) -> Option<R> {
        store_update_cache(&self.cache, f)
    }

    fn reset_draft(&self) {
        store_reset_draft(&self.ui);
    }

    fn navigate(&self, route: Route) {
        log::debug!("[APP] navigate to {:?}", route);
        self.route.set(route);
    }

    fn alert(&self, message: &str) {
        if window().alert_with_message(message).is_err() {
            log::error!("[APP] alert failed: {}", message);
        }
    }

    fn refresh_csrf(&self) {
        self.bootstrap_csrf();
    }
}
