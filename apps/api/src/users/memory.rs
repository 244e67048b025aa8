//! In-process `UserStore` doubles for router and client tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::models::user::{NewUser, User};
use crate::users::store::{DataAccessError, UserStore};

#[derive(Default)]
struct Table {
    last_id: i32,
    rows: BTreeMap<i32, User>,
}

/// Mimics a `SERIAL` primary key: ids are never reused.
#[derive(Default)]
pub struct MemoryUserStore {
    table: Mutex<Table>,
    calls: AtomicUsize,
}

impl MemoryUserStore {
    /// Number of statements issued so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn row_count(&self) -> usize {
        self.table.lock().unwrap().rows.len()
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, DataAccessError> {
        self.record();
        Ok(self.table.lock().unwrap().rows.values().cloned().collect())
    }

    async fn insert(&self, user: &NewUser) -> Result<User, DataAccessError> {
        self.record();
        let mut table = self.table.lock().unwrap();
        table.last_id += 1;
        let created = user.clone().into_user(table.last_id);
        table.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find(&self, id: i32) -> Result<Option<User>, DataAccessError> {
        self.record();
        Ok(self.table.lock().unwrap().rows.get(&id).cloned())
    }

    async fn update(&self, id: i32, user: &NewUser) -> Result<Option<User>, DataAccessError> {
        self.record();
        let mut table = self.table.lock().unwrap();
        Ok(table.rows.get_mut(&id).map(|row| {
            *row = user.clone().into_user(id);
            row.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<Option<User>, DataAccessError> {
        self.record();
        Ok(self.table.lock().unwrap().rows.remove(&id))
    }
}

/// Fails every statement as if the pool could not hand out a connection.
pub struct FailingUserStore;

#[async_trait]
impl UserStore for FailingUserStore {
    async fn list(&self) -> Result<Vec<User>, DataAccessError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn insert(&self, _user: &NewUser) -> Result<User, DataAccessError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn find(&self, _id: i32) -> Result<Option<User>, DataAccessError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn update(&self, _id: i32, _user: &NewUser) -> Result<Option<User>, DataAccessError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn delete(&self, _id: i32) -> Result<Option<User>, DataAccessError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}
