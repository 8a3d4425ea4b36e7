//! Remote Query Cache
//!
//! Server resources cached on the client. Entries never go stale on their
//! own: they are filled by a fetch when absent and afterwards only patched
//! with mutation responses, or dropped.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{MyPage, Task};

/// Named server resources held by the cache
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// `GET /tasks`
    Tasks,
    /// `GET /mypage`
    User,
}

impl Resource {
    pub fn name(&self) -> &'static str {
        match self {
            Resource::Tasks => "tasks",
            Resource::User => "user",
        }
    }
}

/// Cached server state with per-resource loading flags
#[derive(Clone, Debug, Default, Store)]
pub struct QueryCache {
    /// Task list, `None` until fetched
    pub tasks: Option<Vec<Task>>,
    pub tasks_loading: bool,
    /// Profile of the logged-in user
    pub user: Option<MyPage>,
    pub user_loading: bool,
    /// Bumped by `clear`; fetches started under an older epoch are discarded
    pub epoch: u64,
}

impl QueryCache {
    pub fn is_cached(&self, resource: Resource) -> bool {
        match resource {
            Resource::Tasks => self.tasks.is_some(),
            Resource::User => self.user.is_some(),
        }
    }

    pub fn is_loading(&self, resource: Resource) -> bool {
        match resource {
            Resource::Tasks => self.tasks_loading,
            Resource::User => self.user_loading,
        }
    }

    fn set_loading(&mut self, resource: Resource, loading: bool) {
        match resource {
            Resource::Tasks => self.tasks_loading = loading,
            Resource::User => self.user_loading = loading,
        }
    }

    /// Mark a fetch as started. `None` when the entry is cached or already
    /// loading; otherwise the epoch the result must be settled under.
    pub fn begin_fetch(&mut self, resource: Resource) -> Option<u64> {
        if self.is_cached(resource) || self.is_loading(resource) {
            return None;
        }
        self.set_loading(resource, true);
        Some(self.epoch)
    }

    /// Settle a fetch begun under `epoch`. Returns false, leaving the cache
    /// alone, when the cache was cleared in between.
    pub fn finish_fetch(&mut self, resource: Resource, epoch: u64, fill: impl FnOnce(&mut Self)) -> bool {
        if epoch != self.epoch {
            log::debug!("[CACHE] dropping stale {} fetch", resource.name());
            return false;
        }
        self.set_loading(resource, false);
        fill(self);
        true
    }

    /// Drop every entry and invalidate in-flight fetches
    pub fn clear(&mut self) {
        *self = QueryCache {
            epoch: self.epoch + 1,
            ..Default::default()
        };
    }
}

pub type CacheStore = Store<QueryCache>;

// ========================
// Task List Patches
// ========================

/// Append a created task. Skipped when the list was never fetched.
pub fn append_task(tasks: &mut Option<Vec<Task>>, task: Task) {
    match tasks {
        Some(list) => list.push(task),
        None => log::debug!("[CACHE] tasks not cached, skipping append of {}", task.id),
    }
}

/// Replace the task with `id` in place. Other entries are not touched.
pub fn replace_task(tasks: &mut Option<Vec<Task>>, id: u32, updated: Task) {
    if let Some(slot) = tasks.iter_mut().flatten().find(|task| task.id == id) {
        *slot = updated;
    }
}

/// Remove every task with `id`
pub fn remove_task(tasks: &mut Option<Vec<Task>>, id: u32) {
    if let Some(list) = tasks {
        list.retain(|task| task.id != id);
    }
}

// ========================
// Store Helper Functions
// ========================

/// Run `f` against the whole cache; `None` once the store is disposed
pub fn store_update_cache<R>(store: &CacheStore, f: impl FnOnce(&mut QueryCache) -> R) -> Option<R> {
    store.try_update(f)
}
