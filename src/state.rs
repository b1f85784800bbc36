//! Shared application state for all routes.

use crate::config::DeletePolicy;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub delete_policy: DeletePolicy,
}
