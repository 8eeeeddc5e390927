//! Server configuration.
//!
//! Layers, lowest priority first:
//! 1. built-in defaults for the environment picked by `APP_ENV`
//!    (`local`, `sqa`, `prod`; default `local`),
//! 2. an optional TOML file passed with `--config`,
//! 3. environment variables prefixed with `WEDDING__`
//!    (`WEDDING__SERVER__PORT` maps to `server.port`),
//! 4. `PORT`, which always wins for the listen port.

use config::{Config, Environment, File, Map};
use serde::Deserialize;
use std::fmt;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Unknown environment '{0}', expected local, sqa or prod")]
    UnknownEnvironment(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppEnv {
    Local,
    Sqa,
    Prod,
}

impl AppEnv {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppEnv::Local => "local",
            AppEnv::Sqa => "sqa",
            AppEnv::Prod => "prod",
        }
    }
}

impl fmt::Display for AppEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppEnv {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "local" => Ok(AppEnv::Local),
            "sqa" => Ok(AppEnv::Sqa),
            "prod" => Ok(AppEnv::Prod),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerSettings {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DatabaseSettings {
    /// SQLite file, or `:memory:`
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RateLimitSettings {
    /// Requests allowed per client per window
    pub requests: u32,
    pub window_secs: u64,
}

impl RateLimitSettings {
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingSettings {
    pub dir: PathBuf,
    pub max_files: usize,
    /// Default level when `RUST_LOG` is unset
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub environment: AppEnv,
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub rate_limit: RateLimitSettings,
    pub logging: LoggingSettings,
    /// Load the sample guests and registry on start
    pub seed_on_start: bool,
}

/// Load settings from the process environment and an optional file.
pub fn load_settings(file: Option<&Path>) -> Result<Settings, ConfigError> {
    let env: AppEnv = std::env::var("APP_ENV").unwrap_or_default().parse()?;
    let port = std::env::var("PORT").ok().filter(|p| !p.trim().is_empty());
    build_settings(env, file, None, port)
}

/// Build settings for `env`. `vars` replaces the process environment as the
/// source of `WEDDING__` overrides when given.
pub fn build_settings(
    env: AppEnv,
    file: Option<&Path>,
    vars: Option<Map<String, String>>,
    port: Option<String>,
) -> Result<Settings, ConfigError> {
    let (host, db_path, seed, level) = match env {
        AppEnv::Local => ("127.0.0.1", "data/wedding-local.db", true, "debug"),
        AppEnv::Sqa => ("0.0.0.0", "data/wedding-sqa.db", false, "info"),
        AppEnv::Prod => ("0.0.0.0", "data/wedding.db", false, "info"),
    };

    let mut builder = Config::builder()
        .set_default("environment", env.as_str())?
        .set_default("server.host", host)?
        .set_default("server.port", 8080)?
        .set_default("database.path", db_path)?
        .set_default("rate_limit.requests", 10)?
        .set_default("rate_limit.window_secs", 60)?
        .set_default("logging.dir", "logs")?
        .set_default("logging.max_files", 7)?
        .set_default("logging.level", level)?
        .set_default("seed_on_start", seed)?;

    if let Some(path) = file {
        builder = builder.add_source(File::from(path).required(true));
    }

    builder = builder.add_source(
        Environment::with_prefix("WEDDING")
            .separator("__")
            .try_parsing(true)
            .source(vars),
    );

    let builder = builder
        .set_override_option("server.port", port)?
        // The environment is decided by APP_ENV alone
        .set_override("environment", env.as_str())?;

    let settings = builder.build()?.try_deserialize::<Settings>()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> Option<Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_parse_app_env() {
        assert_eq!("".parse::<AppEnv>().unwrap(), AppEnv::Local);
        assert_eq!("SQA".parse::<AppEnv>().unwrap(), AppEnv::Sqa);
        assert_eq!("prod".parse::<AppEnv>().unwrap(), AppEnv::Prod);
        assert!(matches!(
            "staging".parse::<AppEnv>(),
            Err(ConfigError::UnknownEnvironment(_))
        ));
    }

    #[test]
    fn test_local_defaults() {
        let settings = build_settings(AppEnv::Local, None, vars(&[]), None).unwrap();

        assert_eq!(settings.environment, AppEnv::Local);
        assert_eq!(settings.server.host.to_string(), "127.0.0.1");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.database.path, PathBuf::from("data/wedding-local.db"));
        assert_eq!(settings.rate_limit.requests, 10);
        assert_eq!(settings.rate_limit.window(), Duration::from_secs(60));
        assert_eq!(settings.logging.max_files, 7);
        assert!(settings.seed_on_start);
    }

    #[test]
    fn test_prod_defaults() {
        let settings = build_settings(AppEnv::Prod, None, vars(&[]), None).unwrap();

        assert_eq!(settings.server.host.to_string(), "0.0.0.0");
        assert_eq!(settings.logging.level, "info");
        assert!(!settings.seed_on_start);
    }

    #[test]
    fn test_env_vars_override_defaults() {
        let settings = build_settings(
            AppEnv::Sqa,
            None,
            vars(&[
                ("WEDDING__SERVER__PORT", "9000"),
                ("WEDDING__RATE_LIMIT__REQUESTS", "3"),
                ("WEDDING__DATABASE__PATH", ":memory:"),
            ]),
            None,
        )
        .unwrap();

        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.rate_limit.requests, 3);
        assert_eq!(settings.database.path, PathBuf::from(":memory:"));
    }

    #[test]
    fn test_port_wins_over_everything() {
        let settings = build_settings(
            AppEnv::Prod,
            None,
            vars(&[("WEDDING__SERVER__PORT", "9000")]),
            Some("3000".to_string()),
        )
        .unwrap();

        assert_eq!(settings.server.port, 3000);
    }

    #[test]
    fn test_file_layer() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "seed_on_start = false\n\n[logging]\ndir = \"/var/log/wedding\"\nmax_files = 14"
        )
        .unwrap();

        let settings = build_settings(AppEnv::Local, Some(file.path()), vars(&[]), None).unwrap();

        assert!(!settings.seed_on_start);
        assert_eq!(settings.logging.dir, PathBuf::from("/var/log/wedding"));
        assert_eq!(settings.logging.max_files, 14);
        // Untouched keys keep their defaults
        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = build_settings(
            AppEnv::Local,
            Some(Path::new("/nonexistent/wedding.toml")),
            vars(&[]),
            None,
        );
        assert!(result.is_err());
    }
}
