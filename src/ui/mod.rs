// src/ui/mod.rs
pub mod modal;
pub mod needs_assessment;
pub mod overview;

pub use modal::{Modal, ModalWidth};
pub use needs_assessment::NeedsAssessmentManager;
