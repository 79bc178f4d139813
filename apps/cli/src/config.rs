use std::path::PathBuf;

/// Application configuration loaded from environment variables.
/// Every value has a default matching the conventional folder layout, so a
/// bare invocation works from a project directory.
#[derive(Debug, Clone)]
pub struct Config {
    pub profile_path: PathBuf,
    pub templates_dir: PathBuf,
    pub output_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Config {
            profile_path: env_path("CVFORGE_PROFILE", "config/user.json"),
            templates_dir: env_path("CVFORGE_TEMPLATES_DIR", "templates"),
            output_dir: env_path("CVFORGE_OUTPUT_DIR", "output"),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

fn env_path(key: &str, default: &str) -> PathBuf {
    std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .into()
}
