use anyhow::Context;
use std::path::PathBuf;

/// User config
#[derive(Debug, Default, Clone, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// The api key
    pub api_key: Option<String>,
}

impl Config {
    /// Get the path to the config file.
    pub fn path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs_next::config_dir().context("missing config dir")?;
        Ok(config_dir.join("derpibooru").join("config.toml"))
    }

    /// Load the config from the config dir, or return an empty copy if it does not exist
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path()?;
        let file = match std::fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read \"{}\"", path.display()))
            }
        };
        let config: Self = toml::from_str(&file).context("failed to parse config")?;
        Ok(config)
    }

    /// Call `Self::load` using the tokio threadpool
    pub async fn load_async() -> anyhow::Result<Self> {
        tokio::task::spawn_blocking(Self::load)
            .await
            .context("failed to join task")?
    }

    /// Save the config
    pub fn save(&self) -> anyhow::Result<()> {
        let data = toml::to_string(self).context("failed to serialize config")?;
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("failed to create config dir")?;
        }
        std::fs::write(&path, data)
            .with_context(|| format!("failed to write \"{}\"", path.display()))?;
        Ok(())
    }

    /// Call `Self::save` using the tokio threadpool
    pub async fn save_async(self) -> anyhow::Result<()> {
        tokio::task::spawn_blocking(move || self.save())
            .await
            .context("failed to join task")?
    }

    /// Get the api key, if a non-empty one is set.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }
}
