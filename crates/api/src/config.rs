/// Log output format selected by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines (default).
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins from comma-separated `CORS_ORIGINS`.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default   |
    /// |------------------------|-----------|
    /// | `HOST`                 | `0.0.0.0` |
    /// | `PORT`                 | `5000`    |
    /// | `CORS_ORIGINS`         | `*`       |
    /// | `REQUEST_TIMEOUT_SECS` | `30`      |
    /// | `LOG_FORMAT`           | `pretty`  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let log_format = log_format_from(std::env::var("LOG_FORMAT").ok().as_deref());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            log_format,
        }
    }

    /// Whether CORS should accept every origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Log format from `LOG_FORMAT`: `json` selects JSON, anything else is pretty.
pub fn log_format_from(value: Option<&str>) -> LogFormat {
    match value.map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
        _ => LogFormat::Pretty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(origins: &str) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            cors_origins: parse_origins(origins),
            request_timeout_secs: 30,
            log_format: LogFormat::Pretty,
        }
    }

    #[test]
    fn origins_are_trimmed_and_split() {
        let config = config_with(" http://localhost:3000 , https://abaad.example ,");
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:3000", "https://abaad.example"]
        );
        assert!(!config.allows_any_origin());
    }

    #[test]
    fn wildcard_allows_any_origin() {
        assert!(config_with("*").allows_any_origin());
        assert!(config_with("").allows_any_origin());
    }

    #[test]
    fn log_format_parsing() {
        assert_eq!(log_format_from(Some("json")), LogFormat::Json);
        assert_eq!(log_format_from(Some("JSON ")), LogFormat::Json);
        assert_eq!(log_format_from(Some("pretty")), LogFormat::Pretty);
        assert_eq!(log_format_from(None), LogFormat::Pretty);
    }
}
