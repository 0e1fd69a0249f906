// src/state/mod.rs
use std::path::PathBuf;
use anyhow::Result;

use crate::config::{Hospital, NeedsAssessmentTopic, PersianMonth, Settings};
use crate::file::{FileHandler, HospitalFileHandler};

// Screen/tab tracking
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    Overview,
    NeedsAssessment,
}

// Core application state
#[derive(Debug)]
pub struct AppState {
    // Canonical data, owned here and lent read-only to the views
    pub hospital: Hospital,
    pub data_file: PathBuf,

    // Minimal UI state
    pub current_screen: Screen,
    pub error_message: Option<String>,
    pub show_about: bool,

    // File management
    file_handler: HospitalFileHandler,
}

impl AppState {
    pub fn new(hospital: Hospital, data_file: PathBuf) -> Self {
        Self {
            hospital,
            data_file,
            current_screen: Screen::Overview,
            error_message: None,
            show_about: false,
            file_handler: HospitalFileHandler::new(),
        }
    }

    /// Loads the configured data file, or starts an empty hospital when it does not exist yet.
    pub fn open(settings: &Settings) -> Result<Self> {
        let mut state = Self::new(Hospital::new(&settings.hospital_name), settings.data_file.clone());
        if state.data_file.exists() {
            let path = state.data_file.clone();
            state.load_from(path)?;
        } else {
            tracing::info!(path = %state.data_file.display(), "no hospital file yet, starting empty");
        }
        Ok(state)
    }

    pub fn load_from(&mut self, path: PathBuf) -> Result<()> {
        self.hospital = self.file_handler.load(&path)?;
        tracing::info!(path = %path.display(), hospital = %self.hospital.name, "hospital loaded");
        self.data_file = path;
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        self.file_handler.save(&self.hospital, &self.data_file)?;
        tracing::info!(path = %self.data_file.display(), "hospital saved");
        Ok(())
    }

    pub fn save_as(&mut self, path: PathBuf) -> Result<()> {
        self.data_file = path;
        self.save()
    }

    /// Commits full replacement topic lists, in order, then writes the hospital once.
    pub fn commit_updates(
        &mut self,
        updates: impl IntoIterator<Item = (PersianMonth, Vec<NeedsAssessmentTopic>)>,
    ) -> Result<()> {
        for (month, topics) in updates {
            tracing::info!(%month, topics = topics.len(), "committing needs assessment topics");
            self.hospital.replace_topics(month.name(), topics);
        }
        self.save()
    }
}
