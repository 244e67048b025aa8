//! HTTP client for the Users API, used by the terminal UI.

pub mod view;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::user::{DeleteUserResponse, User};

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Status { status: u16, body: String },
}

/// Form draft as typed by the user. Every field is raw text and is sent as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "birthDate")]
    pub birth_date: String,
}

/// Calls the view needs. `UsersClient` is the HTTP implementation.
#[async_trait]
pub trait UsersApi: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, ClientError>;

    async fn create(&self, draft: &Draft) -> Result<User, ClientError>;

    /// Targets `draft.id` exactly as typed.
    async fn update(&self, draft: &Draft) -> Result<User, ClientError>;

    async fn delete(&self, id: i32) -> Result<DeleteUserResponse, ClientError>;
}

#[derive(Clone)]
pub struct UsersClient {
    client: Client,
    base_url: String,
}

impl UsersClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Turns a non-success status into `ClientError::Status` with the raw body.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    debug!("Users API returned {status}: {body}");
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl UsersApi for UsersClient {
    async fn list(&self) -> Result<Vec<User>, ClientError> {
        let response = self.client.get(self.url("/")).send().await?;
        Ok(check(response).await?.json().await?)
    }

    async fn create(&self, draft: &Draft) -> Result<User, ClientError> {
        let response = self
            .client
            .post(self.url("/users"))
            .json(draft)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    async fn update(&self, draft: &Draft) -> Result<User, ClientError> {
        let response = self
            .client
            .put(self.url(&format!("/users/{}", draft.id)))
            .json(draft)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    async fn delete(&self, id: i32) -> Result<DeleteUserResponse, ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/users/{id}")))
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }
}
