use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
    /// Insert starter master data into an empty database.
    #[serde(default = "default_seed")]
    pub seed: bool,
}

fn default_seed() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Session token every request must carry in its path or multipart body.
    pub token: String,
    #[serde(default = "default_username")]
    pub username: String,
}

fn default_username() -> String {
    "admin".to_string()
}

impl AuthConfig {
    pub fn accepts(&self, token: &str) -> bool {
        let token = token.trim();
        !token.is_empty() && token == self.token
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[database]
path = "target/db/dashboard.db"
seed = true

[auth]
token = "dev-token"
username = "admin"
"#;

/// Load `config.toml` from next to the executable, else the embedded default.
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            }
            tracing::warn!("config.toml not found at: {}", config_path.display());
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.auth.token.trim().is_empty() {
        anyhow::bail!("[auth] token must not be empty");
    }
    Ok(config)
}

/// Relative database paths resolve against the executable directory.
pub fn get_database_path(config: &Config) -> PathBuf {
    let db_path = Path::new(&config.database.path);
    if db_path.is_absolute() {
        return db_path.to_path_buf();
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(db_path)))
        .unwrap_or_else(|| db_path.to_path_buf())
}

#[cfg(test)]
pub fn test_config() -> Config {
    parse_config(DEFAULT_CONFIG).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = test_config();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.path, "target/db/dashboard.db");
        assert!(config.database.seed);
        assert_eq!(config.auth.username, "admin");
    }

    #[test]
    fn server_section_is_optional() {
        let config = parse_config(
            r#"
            [database]
            path = "/tmp/x.db"
            [auth]
            token = "abc"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(get_database_path(&config), PathBuf::from("/tmp/x.db"));
    }

    #[test]
    fn empty_token_is_rejected() {
        let err = parse_config(
            r#"
            [database]
            path = "x.db"
            [auth]
            token = " "
            "#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn token_comparison_trims_input() {
        let auth = test_config().auth;
        assert!(auth.accepts("dev-token"));
        assert!(auth.accepts(" dev-token "));
        assert!(!auth.accepts(""));
        assert!(!auth.accepts("other"));
    }
}
