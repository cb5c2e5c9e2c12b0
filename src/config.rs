// src/config.rs

use dotenvy::dotenv;
use std::env;

/// Page size used by the blog listing when the client does not send `limit`.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Upper bound for `limit` on paginated listings.
pub const MAX_PAGE_SIZE: usize = 100;

/// How many courses are recommended for the dominant quiz category.
pub const RECOMMENDED_COURSE_LIMIT: usize = 2;

/// How many courses are suggested next to a blog post.
pub const SUGGESTION_LIMIT: usize = 3;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    /// Directory holding `courses.json` and `posts.json`.
    /// `None` means the data bundled into the binary is served.
    pub catalog_dir: Option<String>,
    pub rust_log: String,
    pub log_dir: String,
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let catalog_dir = env::var("CATALOG_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty());

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_else(|_| default_origins());

        Self {
            bind_addr,
            catalog_dir,
            rust_log,
            log_dir,
            cors_origins,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            catalog_dir: None,
            rust_log: "info".to_string(),
            log_dir: "logs".to_string(),
            cors_origins: default_origins(),
        }
    }
}

fn default_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://127.0.0.1:3000".to_string(),
    ]
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
