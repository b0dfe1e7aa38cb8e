use std::path::PathBuf;
use anyhow::{anyhow, Context};
use rand::{distributions::Alphanumeric, Rng};

pub const DEFAULT_MODEL: &str = "arcee-ai/trinity-large-preview:free";
pub const DEFAULT_OPENROUTER_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_PORT: u16 = 3000;
const MESSAGES_FILE_NAME: &str = "messages.json";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(value: Option<&str>) -> Self {
        // anything that says production counts, everything else is dev
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "production" || v == "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }
}

#[derive(Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
    pub token: String,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub environment: Environment,
    pub admin: AdminCredentials,
    pub openrouter_api_key: Option<String>,
    pub openrouter_model: String,
    pub openrouter_base_url: String,
    pub messages_file: PathBuf,
    pub static_dir: PathBuf,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &str| get(key).ok_or_else(|| anyhow!("{} must be set", key));

        let environment = Environment::parse(get("ENVIRONMENT").as_deref());

        let username = require("ADMIN_USER")?;
        let password = require("ADMIN_PASS")?;
        let token = get("ADMIN_TOKEN").unwrap_or_else(generate_session_token);

        // serverless hosts only allow writes under /tmp
        let messages_file = match get("MESSAGES_FILE") {
            Some(path) => PathBuf::from(path),
            None => {
                let base = match environment {
                    Environment::Production => PathBuf::from("/tmp"),
                    Environment::Development => std::env::current_dir()
                        .context("Failed to resolve working directory")?,
                };
                base.join(MESSAGES_FILE_NAME)
            }
        };

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port: {}", raw))?,
            None => DEFAULT_PORT,
        };

        Ok(AppConfig {
            environment,
            admin: AdminCredentials { username, password, token },
            openrouter_api_key: get("OPENROUTER_API_KEY"),
            openrouter_model: get("OPENROUTER_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openrouter_base_url: get("OPENROUTER_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENROUTER_URL.to_string()),
            messages_file,
            static_dir: PathBuf::from(get("STATIC_DIR").unwrap_or_else(|| "dist".to_string())),
            port,
        })
    }

    pub fn serves_static(&self) -> bool {
        self.environment == Environment::Production
    }
}

/// Opaque bearer token, fixed for the lifetime of the process.
pub fn generate_session_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}
