use std::sync::Arc;

use sqlx::Pool;
use url::Url;

#[derive(Clone)]
pub struct AppState {
    state: Arc<AppStateInner>,
}

impl AppState {
    pub fn new(app_config: AppConfig, pool: Pool<sqlx::Sqlite>) -> Self {
        AppState {
            state: Arc::new(AppStateInner { app_config, pool }),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.state.app_config
    }

    pub fn pool(&self) -> &Pool<sqlx::Sqlite> {
        &self.state.pool
    }
}

impl axum::extract::FromRef<AppState> for () {
    fn from_ref(_state: &AppState) {}
}

struct AppStateInner {
    pool: Pool<sqlx::Sqlite>,
    app_config: AppConfig,
}

pub struct AppConfig {
    pub base_url: Url,
    /// Cap on unpaginated listings.
    pub list_limit: usize,
}
