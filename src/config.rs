use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub admin_password: String,
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
    pub allowed_origin: String,
}

fn default_session_ttl_secs() -> u64 {
    // Long enough to get through an editing session without re-logging in.
    8 * 60 * 60
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config_path = path.as_ref();
        let builder = config::Config::builder()
            .add_source(config::File::from(config_path).required(true))
            // Environment overrides, e.g. CLUB_API_DATABASE_URL
            .add_source(config::Environment::with_prefix("CLUB_API"));

        let settings = builder
            .build()
            .with_context(|| format!("Failed to build configuration from path: {:?}", config_path))?;

        settings
            .try_deserialize()
            .with_context(|| format!("Failed to deserialize configuration from path: {:?}", config_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_a_full_config_file() {
        let path = write_config(
            "club_api_config_full.toml",
            r#"
            database_url = "postgres://localhost/club"
            listen_addr = "127.0.0.1:8080"
            admin_password = "hunter2"
            session_ttl_secs = 60
            allowed_origin = "http://localhost:3000"
            "#,
        );
        let config = Config::load(&path).unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.session_ttl_secs, 60);
    }

    #[test]
    fn session_ttl_defaults_when_omitted() {
        let path = write_config(
            "club_api_config_no_ttl.toml",
            r#"
            database_url = "postgres://localhost/club"
            listen_addr = "127.0.0.1:8080"
            admin_password = "hunter2"
            allowed_origin = "http://localhost:3000"
            "#,
        );
        let config = Config::load(&path).unwrap();
        assert_eq!(config.session_ttl_secs, 8 * 60 * 60);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Config::load("/definitely/not/here.toml").is_err());
    }
}
