//! Test doubles for flows and the classifier

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::api::{ApiError, ApiResult, Backend};
use crate::cache::QueryCache;
use crate::models::{Credential, CsrfToken, EditedTask, Login, MyPage, Task, UserResponse};
use crate::session::{Route, Session};

/// Id the fake server assigns to created tasks
pub const CREATED_ID: u32 = 100;

pub fn task(id: u32, title: &str) -> Task {
    Task {
        id,
        title: title.to_string(),
        created_at: DateTime::<Utc>::default(),
        updated_at: DateTime::<Utc>::default(),
    }
}

pub fn server_error(message: &str) -> ApiError {
    ApiError::Server {
        status: 400,
        message: message.to_string(),
    }
}

/// In-memory session recording every side effect
#[derive(Default)]
pub struct RecordingSession {
    pub cache: RefCell<QueryCache>,
    pub draft: RefCell<EditedTask>,
    pub route: Cell<Option<Route>>,
    pub alert_log: RefCell<Vec<String>>,
    pub csrf_refreshes: Cell<u32>,
}

impl RecordingSession {
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            cache: RefCell::new(QueryCache {
                tasks: Some(tasks),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    pub fn tasks(&self) -> Option<Vec<Task>> {
        self.cache.borrow().tasks.clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alert_log.borrow().clone()
    }
}

impl Session for RecordingSession {
    fn update_cache<R, F: FnOnce(&mut QueryCache) -> R>(&self, f: F) -> Option<R> {
        Some(f(&mut self.cache.borrow_mut()))
    }

    fn reset_draft(&self) {
        self.draft.replace(EditedTask::default());
    }

    fn navigate(&self, route: Route) {
        self.route.set(Some(route));
    }

    fn alert(&self, message: &str) {
        self.alert_log.borrow_mut().push(message.to_string());
    }

    fn refresh_csrf(&self) {
        self.csrf_refreshes.set(self.csrf_refreshes.get() + 1);
    }
}

/// Backend answering from memory; fails every call when `failure` is set
#[derive(Default)]
pub struct FakeBackend {
    pub failure: Option<String>,
    pub calls: RefCell<Vec<String>>,
    /// Runs once while the next call is in flight
    pub in_flight: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl FakeBackend {
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) -> ApiResult<()> {
        self.calls.borrow_mut().push(call);
        let hook = self.in_flight.borrow_mut().take();
        if let Some(hook) = hook {
            hook();
        }
        match &self.failure {
            Some(message) => Err(server_error(message)),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl Backend for FakeBackend {
    async fn fetch_csrf_token(&self) -> ApiResult<CsrfToken> {
        self.record("csrf".into())?;
        Ok(CsrfToken {
            csrf_token: "token".into(),
        })
    }

    async fn login(&self, login: &Login) -> ApiResult<()> {
        self.record(format!("login {}", login.email))
    }

    async fn signup(&self, credential: &Credential) -> ApiResult<UserResponse> {
        self.record(format!("signup {}", credential.email))?;
        Ok(UserResponse {
            id: 1,
            email: credential.email.clone(),
            name: credential.name.clone(),
        })
    }

    async fn logout(&self) -> ApiResult<()> {
        self.record("logout".into())
    }

    async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        self.record("list".into())?;
        Ok(vec![task(1, "a")])
    }

    async fn create_task(&self, title: &str) -> ApiResult<Task> {
        self.record(format!("create {}", title))?;
        Ok(task(CREATED_ID, title))
    }

    async fn update_task(&self, id: u32, title: &str) -> ApiResult<Task> {
        self.record(format!("update {} {}", id, title))?;
        Ok(task(id, title))
    }

    async fn delete_task(&self, id: u32) -> ApiResult<()> {
        self.record(format!("delete {}", id))
    }

    async fn get_mypage(&self) -> ApiResult<MyPage> {
        self.record("mypage".into())?;
        Ok(MyPage {
            id: 1,
            email: "a@example.com".into(),
            name: "alice".into(),
            updated_at: DateTime::<Utc>::default(),
        })
    }
}
