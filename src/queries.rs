//! Query Loaders
//!
//! Fill a cache entry when it is absent. Present entries are never
//! refetched, and a result arriving after the cache was cleared is dropped.

use leptos::task::spawn_local;

use crate::api::{ApiError, Backend};
use crate::cache::Resource;
use crate::classifier::handle_error;
use crate::context::AppContext;
use crate::session::Session;

/// Fetch the task list unless cached or in flight
pub async fn load_tasks<B, S>(backend: &B, session: &S)
where
    B: Backend + ?Sized,
    S: Session,
{
    let Some(epoch) = session.update_cache(|c| c.begin_fetch(Resource::Tasks)).flatten() else {
        return;
    };
    match backend.list_tasks().await {
        Ok(tasks) => {
            let count = tasks.len();
            let applied = session.update_cache(|c| {
                c.finish_fetch(Resource::Tasks, epoch, |c| c.tasks = Some(tasks))
            });
            if applied == Some(true) {
                log::debug!("[CACHE] loaded {} tasks", count);
            }
        }
        Err(err) => settle_failure(session, Resource::Tasks, epoch, &err),
    }
}

/// Fetch the profile unless cached or in flight
pub async fn load_user<B, S>(backend: &B, session: &S)
where
    B: Backend + ?Sized,
    S: Session,
{
    let Some(epoch) = session.update_cache(|c| c.begin_fetch(Resource::User)).flatten() else {
        return;
    };
    match backend.get_mypage().await {
        Ok(user) => {
            session.update_cache(|c| c.finish_fetch(Resource::User, epoch, |c| c.user = Some(user)));
        }
        Err(err) => settle_failure(session, Resource::User, epoch, &err),
    }
}

/// Clear the loading flag; errors from a dropped session are not reported
fn settle_failure<S: Session>(session: &S, resource: Resource, epoch: u64, err: &ApiError) {
    if session.update_cache(|c| c.finish_fetch(resource, epoch, |_| {})) == Some(true) {
        handle_error(session, err);
    }
}

/// Load the task list in the background
pub fn ensure_tasks(ctx: AppContext) {
    let api = ctx.api();
    spawn_local(async move { load_tasks(&api, &ctx).await });
}

/// Load the profile in the background
pub fn ensure_user(ctx: AppContext) {
    let api = ctx.api();
    spawn_local(async move { load_user(&api, &ctx).await });
}
