//! REST API Bindings
//!
//! `Backend` is the seam the flows are written against; `ApiClient` is the
//! HTTP implementation used in the browser.

mod client;
mod error;

use async_trait::async_trait;

use crate::models::{Credential, CsrfToken, Login, MyPage, Task, UserResponse};

pub use client::ApiClient;
pub use error::{extract_message, ApiError};

pub type ApiResult<T> = Result<T, ApiError>;

/// Operations offered by the remote API
#[async_trait(?Send)]
pub trait Backend {
    async fn fetch_csrf_token(&self) -> ApiResult<CsrfToken>;

    async fn login(&self, login: &Login) -> ApiResult<()>;

    async fn signup(&self, credential: &Credential) -> ApiResult<UserResponse>;

    async fn logout(&self) -> ApiResult<()>;

    async fn list_tasks(&self) -> ApiResult<Vec<Task>>;

    async fn create_task(&self, title: &str) -> ApiResult<Task>;

    async fn update_task(&self, id: u32, title: &str) -> ApiResult<Task>;

    async fn delete_task(&self, id: u32) -> ApiResult<()>;

    async fn get_mypage(&self) -> ApiResult<MyPage>;
}
