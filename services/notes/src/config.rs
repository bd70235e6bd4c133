use anyhow::{Context as _, bail};
use axum::http::HeaderValue;

/// Notes service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct NotesConfig {
    /// Database connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 8080). Env var: `NOTES_PORT`.
    pub notes_port: u16,
    /// The one front-end origin allowed by CORS. Env var: `CORS_ALLOWED_ORIGIN`.
    pub cors_allowed_origin: HeaderValue,
    /// Generate demo users at startup (default false). Env var: `SEED_DEMO_DATA`.
    pub seed_demo_data: bool,
}

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

impl NotesConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let notes_port = match lookup("NOTES_PORT") {
            Some(v) => v.parse().with_context(|| format!("invalid NOTES_PORT: {v}"))?,
            None => DEFAULT_PORT,
        };

        let origin = lookup("CORS_ALLOWED_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_owned());
        let cors_allowed_origin = HeaderValue::from_str(&origin)
            .with_context(|| format!("invalid CORS_ALLOWED_ORIGIN: {origin}"))?;

        let seed_demo_data = match lookup("SEED_DEMO_DATA").as_deref() {
            None | Some("") => false,
            Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => true,
            Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => false,
            Some(v) => bail!("invalid SEED_DEMO_DATA: {v}"),
        };

        Ok(Self {
            database_url,
            notes_port,
            cors_allowed_origin,
            seed_demo_data,
        })
    }
}
