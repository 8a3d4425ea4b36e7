//! Frontend Models
//!
//! Data structures matching the REST API payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Draft of the task currently in the form.
///
/// `id == 0` means the draft will be created, any other id means it
/// updates that task. `Default` is the empty sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditedTask {
    pub id: u32,
    pub title: String,
}

impl EditedTask {
    pub fn is_new(&self) -> bool {
        self.id == 0
    }
}

/// Body of task create/update requests
#[derive(Serialize)]
pub struct TaskTitle<'a> {
    pub title: &'a str,
}

/// Login request payload
#[derive(Debug, Clone, Serialize)]
pub struct Login {
    pub email: String,
    pub password: String,
}

/// Sign-up request payload
#[derive(Debug, Clone, Serialize)]
pub struct Credential {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl Credential {
    /// Login payload for the account this credential registers
    pub fn to_login(&self) -> Login {
        Login {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CsrfToken {
    pub csrf_token: String,
}

/// User returned by sign-up
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserResponse {
    pub id: u32,
    pub email: String,
    pub name: String,
}

/// Profile of the logged-in user
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MyPage {
    pub id: u32,
    pub email: String,
    pub name: String,
    pub updated_at: DateTime<Utc>,
}
