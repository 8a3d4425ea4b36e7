//! Mutation Flows
//!
//! Server calls that change state. The cache is patched only from a
//! successful response; on failure it is left as it was and the error goes
//! to the classifier.

use crate::api::{ApiResult, Backend};
use crate::cache::{append_task, remove_task, replace_task};
use crate::classifier::handle_error;
use crate::models::{Credential, EditedTask, Login, Task};
use crate::session::{Route, Session};

/// A change to the task list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskMutation {
    Create { title: String },
    Update { id: u32, title: String },
    Delete { id: u32 },
}

impl TaskMutation {
    /// Mutation the form submits for this draft; nothing for an empty title
    pub fn from_draft(draft: &EditedTask) -> Option<Self> {
        if draft.title.is_empty() {
            return None;
        }
        let title = draft.title.clone();
        Some(if draft.is_new() {
            TaskMutation::Create { title }
        } else {
            TaskMutation::Update { id: draft.id, title }
        })
    }

    async fn send<B: Backend + ?Sized>(&self, backend: &B) -> ApiResult<Option<Task>> {
        match self {
            TaskMutation::Create { title } => backend.create_task(title).await.map(Some),
            TaskMutation::Update { id, title } => backend.update_task(*id, title).await.map(Some),
            TaskMutation::Delete { id } => backend.delete_task(*id).await.map(|_| None),
        }
    }

    fn patch(&self, tasks: &mut Option<Vec<Task>>, response: Option<Task>) {
        match (self, response) {
            (TaskMutation::Create { .. }, Some(created)) => append_task(tasks, created),
            (TaskMutation::Update { id, .. }, Some(updated)) => replace_task(tasks, *id, updated),
            (TaskMutation::Delete { id }, _) => remove_task(tasks, *id),
            (mutation, None) => log::warn!("[CACHE] no task in response to {:?}", mutation),
        }
    }
}

/// Send a task mutation and settle the cache. Returns whether it succeeded.
pub async fn run_task_mutation<B, S>(backend: &B, session: &S, mutation: TaskMutation) -> bool
where
    B: Backend + ?Sized,
    S: Session,
{
    match mutation.send(backend).await {
        Ok(response) => {
            log::debug!("[TASK] {:?} confirmed", mutation);
            session.update_cache(|cache| mutation.patch(&mut cache.tasks, response));
            session.reset_draft();
            true
        }
        Err(err) => {
            handle_error(session, &err);
            false
        }
    }
}

pub async fn login<B, S>(backend: &B, session: &S, login: &Login) -> bool
where
    B: Backend + ?Sized,
    S: Session,
{
    match backend.login(login).await {
        Ok(()) => {
            session.navigate(Route::Todo);
            true
        }
        Err(err) => {
            handle_error(session, &err);
            false
        }
    }
}

/// Sign up, then log in with the same credential
pub async fn register<B, S>(backend: &B, session: &S, credential: &Credential) -> bool
where
    B: Backend + ?Sized,
    S: Session,
{
    match backend.signup(credential).await {
        Ok(user) => {
            log::info!("[AUTH] registered {} <{}> as #{}", user.name, user.email, user.id);
            login(backend, session, &credential.to_login()).await
        }
        Err(err) => {
            handle_error(session, &err);
            false
        }
    }
}

/// Log out. Cached server data is dropped only once the server confirms;
/// a failed logout keeps the session and its cache.
pub async fn logout<B, S>(backend: &B, session: &S)
where
    B: Backend + ?Sized,
    S: Session,
{
    match backend.logout().await {
        Ok(()) => {
            session.reset_draft();
            session.navigate(Route::Auth);
            session.clear_queries();
        }
        Err(err) => handle_error(session, &err),
    }
}
