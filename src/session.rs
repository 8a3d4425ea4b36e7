//! Session Side Effects
//!
//! Everything a flow may do to the running app once the server has
//! answered. The Leptos context implements it for the browser.

use crate::cache::QueryCache;

/// Top-level views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Login / sign-up, the entry point
    #[default]
    Auth,
    Todo,
    MyPage,
}

pub trait Session {
    /// Read or patch the server cache; `None` once the app is torn down
    fn update_cache<R, F: FnOnce(&mut QueryCache) -> R>(&self, f: F) -> Option<R>;

    /// Drop every cached server resource and in-flight fetch
    fn clear_queries(&self) {
        self.update_cache(QueryCache::clear);
    }

    /// Reset the edit draft to the create sentinel
    fn reset_draft(&self);

    fn navigate(&self, route: Route);

    /// Blocking user-facing message
    fn alert(&self, message: &str);

    /// Fetch a fresh CSRF token in the background
    fn refresh_csrf(&self);
}
