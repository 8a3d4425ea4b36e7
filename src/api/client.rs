//! HTTP Client
//!
//! One instance per app, shared through context. Clones share the CSRF
//! token slot; the browser is single-threaded so the slot is `Rc<RefCell>`.

use std::{cell::RefCell, rc::Rc};

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::{extract_message, ApiError, ApiResult, Backend};
use crate::config::{AppConfig, CSRF_HEADER};
use crate::models::{Credential, CsrfToken, Login, MyPage, Task, TaskTitle, UserResponse};

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Rc<str>,
    csrf_token: Rc<RefCell<Option<String>>>,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: Rc::from(config.api_url.as_str()),
            csrf_token: Rc::new(RefCell::new(None)),
        }
    }

    /// Fetch a CSRF token and attach it to every request from now on
    pub async fn bootstrap(&self) -> ApiResult<()> {
        let token = self.fetch_csrf_token().await?;
        self.set_csrf_token(token.csrf_token);
        log::debug!("[API] CSRF token installed");
        Ok(())
    }

    pub fn csrf_token(&self) -> Option<String> {
        self.csrf_token.borrow().clone()
    }

    fn set_csrf_token(&self, token: String) {
        self.csrf_token.replace(Some(token));
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        // Session and CSRF cookies are cross-origin
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        match self.csrf_token() {
            Some(token) => builder.header(CSRF_HEADER, token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> ApiResult<Response> {
        let response = builder.send().await.map_err(|e| {
            log::warn!("[API] transport error: {}", e);
            ApiError::from(e)
        })?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = extract_message(&body);
        log::debug!("[API] {} -> {}", status, message);
        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }

    async fn json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let response = self.send(builder).await?;
        response.json::<T>().await.map_err(ApiError::from)
    }
}

#[async_trait(?Send)]
impl Backend for ApiClient {
    async fn fetch_csrf_token(&self) -> ApiResult<CsrfToken> {
        self.json(self.request(Method::GET, "/csrf")).await
    }

    async fn login(&self, login: &Login) -> ApiResult<()> {
        self.send(self.request(Method::POST, "/login").json(login)).await?;
        Ok(())
    }

    async fn signup(&self, credential: &Credential) -> ApiResult<UserResponse> {
        self.json(self.request(Method::POST, "/signup").json(credential)).await
    }

    async fn logout(&self) -> ApiResult<()> {
        self.send(self.request(Method::POST, "/logout")).await?;
        Ok(())
    }

    async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        self.json(self.request(Method::GET, "/tasks")).await
    }

    async fn create_task(&self, title: &str) -> ApiResult<Task> {
        self.json(self.request(Method::POST, "/tasks").json(&TaskTitle { title })).await
    }

    async fn update_task(&self, id: u32, title: &str) -> ApiResult<Task> {
        let path = format!("/tasks/{}", id);
        self.json(self.request(Method::PUT, &path).json(&TaskTitle { title })).await
    }

    async fn delete_task(&self, id: u32) -> ApiResult<()> {
        let path = format!("/tasks/{}", id);
        self.send(self.request(Method::DELETE, &path)).await?;
        Ok(())
    }

    async fn get_mypage(&self) -> ApiResult<MyPage> {
        self.json(self.request(Method::GET, "/mypage")).await
    }
}
