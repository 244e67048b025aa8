//! The single users view: a list of users plus a form draft.
//!
//! Every successful mutation re-fetches the whole list instead of patching
//! local state, so what is shown is always what the server holds.

use crate::client::{ClientError, Draft, UsersApi};
use crate::models::user::User;

/// Fields of the draft that can be edited by name.
pub const DRAFT_FIELDS: [&str; 4] = ["id", "name", "email", "birthDate"];

pub struct UserView<A: UsersApi> {
    api: A,
    pub users: Vec<User>,
    pub draft: Draft,
}

impl<A: UsersApi> UserView<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            users: Vec::new(),
            draft: Draft::default(),
        }
    }

    /// Initial load.
    pub async fn mount(&mut self) -> Result<(), ClientError> {
        self.refresh().await
    }

    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        self.users = self.api.list().await?;
        Ok(())
    }

    /// Returns false for an unknown field name.
    pub fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "id" => &mut self.draft.id,
            "name" => &mut self.draft.name,
            "email" => &mut self.draft.email,
            "birthDate" => &mut self.draft.birth_date,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }

    pub async fn create(&mut self) -> Result<&'static str, ClientError> {
        self.api.create(&self.draft).await?;
        self.refresh().await?;
        Ok("User created")
    }

    /// Sends the draft to `draft.id`, whatever it holds.
    pub async fn update(&mut self) -> Result<&'static str, ClientError> {
        self.api.update(&self.draft).await?;
        self.refresh().await?;
        Ok("User updated")
    }

    pub async fn delete(&mut self, id: i32) -> Result<&'static str, ClientError> {
        self.api.delete(id).await?;
        self.refresh().await?;
        Ok("User deleted")
    }

    pub fn render(&self) -> Vec<String> {
        self.users.iter().map(render_row).collect()
    }
}

pub fn render_row(user: &User) -> String {
    format!(
        "#{} - {} ({}) - {}",
        user.id,
        user.name,
        user.email,
        user.birth_date.format("%Y-%m-%d")
    )
}
