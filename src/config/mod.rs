// src/config/mod.rs
pub mod hospital;
pub mod month;
pub mod settings;

// Re-export commonly used types
pub use hospital::{Hospital, MonthlyAssessment, NeedsAssessmentTopic, TopicResponse};
pub use month::PersianMonth;
pub use settings::Settings;
