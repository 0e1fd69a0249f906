// src/app.rs
use eframe::egui;
use rfd::FileDialog;

use crate::state::{AppState, Screen};
use crate::ui::{Modal, ModalWidth, NeedsAssessmentManager};

pub struct NeedsAssessmentApp {
    state: AppState,
    manager: NeedsAssessmentManager,
}

impl NeedsAssessmentApp {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            manager: NeedsAssessmentManager::new(),
        }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open...").clicked() {
                    self.open_hospital();
                    ui.close_menu();
                }
                if ui.button("Save").clicked() {
                    if let Err(e) = self.state.save() {
                        self.report_error(format!("Error saving hospital: {:#}", e));
                    }
                    ui.close_menu();
                }
                if ui.button("Save As...").clicked() {
                    self.save_hospital_as();
                    ui.close_menu();
                }
            });

            ui.separator();

            let tabs = [
                (Screen::Overview, "Overview"),
                (Screen::NeedsAssessment, "نیازسنجی"),
            ];

            for (mode, label) in tabs {
                if ui.selectable_label(self.state.current_screen == mode, label).clicked() {
                    self.state.current_screen = mode;
                }
            }
        });
    }

    fn open_hospital(&mut self) {
        let file_dialog = FileDialog::new()
            .add_filter("RON files", &["ron"])
            .set_title("Open Hospital File");

        if let Some(path) = file_dialog.pick_file() {
            match self.state.load_from(path) {
                Ok(()) => self.state.error_message = None,
                Err(e) => self.report_error(format!("Error loading hospital: {:#}", e)),
            }
        }
    }

    fn save_hospital_as(&mut self) {
        let file_dialog = FileDialog::new()
            .add_filter("RON files", &["ron"])
            .set_title("Save Hospital As");

        if let Some(path) = file_dialog.save_file() {
            if let Err(e) = self.state.save_as(path) {
                self.report_error(format!("Error saving hospital: {:#}", e));
            }
        }
    }

    fn report_error(&mut self, message: String) {
        tracing::error!("{}", message);
        self.state.error_message = Some(message);
    }

    fn show_needs_assessment(&mut self, ui: &mut egui::Ui) {
        let mut updates = Vec::new();
        let mut back = false;

        self.manager.show(
            ui,
            &self.state.hospital,
            |month, topics| updates.push((month, topics)),
            || back = true,
        );

        if !updates.is_empty() {
            if let Err(e) = self.state.commit_updates(updates) {
                self.report_error(format!("Error saving topics: {:#}", e));
            }
        }
        if back {
            self.state.current_screen = Screen::Overview;
        }
    }
}

impl eframe::App for NeedsAssessmentApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_menu(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.state.current_screen {
                Screen::Overview => {
                    crate::ui::overview::show_overview_view(ui, &mut self.state);
                },
                Screen::NeedsAssessment => {
                    self.show_needs_assessment(ui);
                },
            }
        });

        let show_about = self.state.show_about;
        Modal::new("About")
            .max_width(ModalWidth::Large)
            .show_with_close(ctx, show_about, || self.state.show_about = false, |ui| {
                ui.label("Monthly training needs assessment for hospital staff.");
                ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
            });

        // Show error modal if needed
        let error_msg = self.state.error_message.clone(); // Clone first
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.state.error_message = None;
                    }
                });
        }
    }
}
