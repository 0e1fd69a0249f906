// src/config/settings.rs
use std::path::{Path, PathBuf};
use anyhow::{Result, Context};
use serde::Deserialize;

const CONFIG_FILE_NAME: &str = "needs-assessment.toml";
const ENV_PREFIX: &str = "NEEDS_ASSESSMENT";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// RON file the hospital record is loaded from and saved to.
    pub data_file: PathBuf,
    /// Name given to a hospital created from scratch.
    pub hospital_name: String,
    pub window_width: f32,
    pub window_height: f32,
    /// Used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Settings {
    /// Defaults, then `needs-assessment.toml` in the user config dir, then the environment.
    pub fn load() -> Result<Self> {
        let config_file = dirs::config_dir().map(|dir| dir.join(CONFIG_FILE_NAME));
        Self::load_from(config_file.as_deref())
    }

    pub fn load_from(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = ::config::Config::builder()
            .set_default("data_file", default_data_file().to_string_lossy().to_string())?
            .set_default("hospital_name", "بیمارستان")?
            .set_default("window_width", 1024.0)?
            .set_default("window_height", 768.0)?
            .set_default("log_filter", "needs_assessment=info")?;

        if let Some(path) = config_file {
            builder = builder.add_source(::config::File::from(path.to_path_buf()).required(false));
        }

        builder
            .add_source(::config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid settings")
    }
}

fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("needs-assessment")
        .join("hospital.ron")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_apply_without_a_config_file() {
        let settings = Settings::load_from(None).unwrap();
        assert_eq!(settings.window_width, 1024.0);
        assert!(settings.data_file.ends_with("hospital.ron"));
    }

    #[test]
    fn config_file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            "hospital_name = \"Shariati\"\ndata_file = \"/srv/na/shariati.ron\"\n",
        )
        .unwrap();

        let settings = Settings::load_from(Some(&path)).unwrap();
        assert_eq!(settings.hospital_name, "Shariati");
        assert_eq!(settings.data_file, PathBuf::from("/srv/na/shariati.ron"));
        assert_eq!(settings.window_height, 768.0);
    }

    #[test]
    fn missing_config_file_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::load_from(Some(&temp.path().join("absent.toml")));
        assert!(settings.is_ok());
    }
}
