use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `users` table.
///
/// Postgres folds the unquoted `birthDate` column to `birthdate`; the JSON
/// boundary keeps the camel-case name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(rename = "birthDate")]
    #[sqlx(rename = "birthdate")]
    pub birth_date: NaiveDate,
}

/// Validated field values for an insert or a full overwrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub birth_date: NaiveDate,
}

/// Body of a successful delete: the row as it was before removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteUserResponse {
    pub message: String,
    pub user: User,
}

impl NewUser {
    pub fn into_user(self, id: i32) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            birth_date: self.birth_date,
        }
    }
}
