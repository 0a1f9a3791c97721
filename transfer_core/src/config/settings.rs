use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_upload_size_mb: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Explicit storage directory. When unset the directory is derived from
    /// `container_root` or the working directory.
    pub upload_dir: Option<PathBuf>,
    pub container_root: PathBuf,
    pub index_page: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            max_upload_size_mb: 1024,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: None,
            container_root: PathBuf::from("/app"),
            index_page: PathBuf::from("index.html"),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?);

        if Path::new("config.toml").exists() {
            builder = builder.add_source(File::with_name("config"));
        }

        builder = builder.add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port cannot be 0".to_string()));
        }

        if self.server.max_upload_size_mb == 0 {
            return Err(ConfigError::Message(
                "Max upload size must be greater than 0".to_string(),
            ));
        }

        if self.storage.index_page.as_os_str().is_empty() {
            return Err(ConfigError::Message(
                "Index page path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Picks the storage directory: the configured one, else `uploads` under
    /// the container root when that exists, else `uploads` under the working
    /// directory.
    pub fn resolve_upload_dir(&self) -> Result<PathBuf, std::io::Error> {
        if let Some(dir) = &self.storage.upload_dir {
            return Ok(dir.clone());
        }

        if self.storage.container_root.exists() {
            return Ok(self.storage.container_root.join("uploads"));
        }

        Ok(std::env::current_dir()?.join("uploads"))
    }

    pub fn create_directories(&self) -> Result<PathBuf, std::io::Error> {
        let upload_dir = self.resolve_upload_dir()?;
        std::fs::create_dir_all(&upload_dir)?;
        Ok(upload_dir)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn max_upload_bytes(&self) -> usize {
        (self.server.max_upload_size_mb as usize).saturating_mul(1024 * 1024)
    }
}
