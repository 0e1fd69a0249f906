// src/file/hospital.rs
use super::FileHandler;
use crate::config::Hospital;
use std::path::Path;
use std::fs;
use anyhow::{Result, Context};

#[derive(Debug, Default)]
pub struct HospitalFileHandler;

impl HospitalFileHandler {
    pub fn new() -> Self {
        Self
    }
}

impl FileHandler<Hospital> for HospitalFileHandler {
    fn load(&self, path: &Path) -> Result<Hospital> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        ron::from_str(&content).context("Failed to parse hospital file")
    }

    fn save(&self, data: &Hospital, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = ron::ser::to_string_pretty(
            data,
            ron::ser::PrettyConfig::new()
                .new_line("\n".to_string())
                .depth_limit(4)
                .separate_tuple_members(true)
        )?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!(path = %path.display(), "hospital file written");
        Ok(())
    }
}
