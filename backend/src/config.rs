//! Process configuration, read once at startup.
//!
//! The upstream fact-sheet service is selected by the `API_FACTSHEET`
//! environment variable. A missing or empty value is a startup error with a
//! descriptive message; the server never falls back to guessing a URL.

use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the upstream fact-sheet REST service, without a trailing
    /// slash (e.g. `http://facts.internal/api/v1`).
    pub upstream_base_url: String,
    pub bind_host: String,
    pub bind_port: u16,
    /// User forwarded to upstream calls when the client does not supply one.
    /// Authentication is out of scope; this is a plain passthrough default.
    pub default_user_id: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let upstream_base_url = match env::var("API_FACTSHEET") {
            Ok(value) if !value.trim().is_empty() => normalize_base_url(&value),
            Ok(_) => return Err("API_FACTSHEET is set but empty".to_string()),
            Err(_) => {
                return Err(
                    "API_FACTSHEET is not set; export the upstream fact-sheet base URL"
                        .to_string(),
                )
            }
        };

        let bind_host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let bind_port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| format!("PORT is not a valid port number: {raw}"))?,
            Err(_) => 8080,
        };
        let default_user_id = env::var("DEFAULT_USER_ID")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(1);

        Ok(Self {
            upstream_base_url,
            bind_host,
            bind_port,
            default_user_id,
        })
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn trims_whitespace_and_trailing_slashes() {
        assert_eq!(
            normalize_base_url(" http://facts.internal/api/v1/ "),
            "http://facts.internal/api/v1"
        );
        assert_eq!(normalize_base_url("http://h"), "http://h");
    }
}
