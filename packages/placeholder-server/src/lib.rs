pub mod config;
pub mod error_page;
pub mod generate;
pub mod handler;
pub mod routes;

use std::sync::Arc;

pub use config::ServerConfig;
pub use routes::build_router;

/// ハンドラ間で共有する読み取り専用の状態
#[derive(Debug, Clone)]
pub struct AppState {
    pub docs_url: Arc<str>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            docs_url: Arc::from(config.docs_url.as_str()),
        }
    }
}
