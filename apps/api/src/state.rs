use std::sync::Arc;

use crate::config::Config;
use crate::users::store::UserStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Persistence gateway. `PgUserStore` in production.
    pub store: Arc<dyn UserStore>,
    pub config: Config,
}
