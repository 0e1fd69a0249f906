// src/ui/overview.rs
use eframe::egui;
use crate::config::PersianMonth;
use crate::state::{AppState, Screen};

pub fn show_overview_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(&state.hospital.name);
    ui.horizontal(|ui| {
        ui.label("Data file:");
        ui.label(state.data_file.to_string_lossy().as_ref());
    });
    ui.add_space(16.0);

    ui.horizontal(|ui| {
        if ui.button("📋 مدیریت نیازسنجی").clicked() {
            state.current_screen = Screen::NeedsAssessment;
        }
        if ui.button("ℹ About").clicked() {
            state.show_about = true;
        }
    });
    ui.add_space(16.0);

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading("Topics per month");
        ui.add_space(8.0);

        egui::Grid::new("month_overview_grid")
            .num_columns(3)
            .spacing([24.0, 4.0])
            .striped(true)
            .show(ui, |ui| {
                ui.strong("Month");
                ui.strong("Topics");
                ui.strong("Responses");
                ui.end_row();

                for month in PersianMonth::ALL {
                    let topics = state.hospital.topics_for(month.name());
                    let responses: usize = topics.iter().map(|t| t.responses.len()).sum();
                    ui.label(month.name());
                    ui.label(topics.len().to_string());
                    ui.label(responses.to_string());
                    ui.end_row();
                }
            });
    });
}
