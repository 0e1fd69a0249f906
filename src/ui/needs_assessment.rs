// src/ui/needs_assessment.rs
use eframe::egui;
use thiserror::Error;

use crate::config::{Hospital, NeedsAssessmentTopic, PersianMonth};
use crate::ui::modal::{Modal, ModalWidth};

#[derive(Debug, Error, PartialEq)]
pub enum ManagerError {
    #[error("عنوان موضوع نمی‌تواند خالی باشد.")]
    EmptyTitle,
    #[error("a confirmation or alert is still waiting for an answer")]
    PromptPending,
}

// User intents collected while drawing a frame, applied once drawing is done
#[derive(Debug, Clone, PartialEq)]
enum Action {
    SelectMonth(PersianMonth),
    AddTopic,
    RequestDeletion(String),
    ResolveDeletion(bool),
    DismissAlert,
    Back,
}

/// Month picker, topic form and topic/response list for one hospital.
///
/// The hospital is only ever read. Every change is handed to the caller as the
/// complete new topic list of the selected month.
#[derive(Debug, Default)]
pub struct NeedsAssessmentManager {
    selected_month: PersianMonth,
    new_topic_title: String,
    // Topic id waiting for a yes/no answer
    pending_deletion: Option<String>,
    alert: Option<String>,
}

impl NeedsAssessmentManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_month(&self) -> PersianMonth {
        self.selected_month
    }

    pub fn new_topic_title(&self) -> &str {
        &self.new_topic_title
    }

    pub fn pending_deletion(&self) -> Option<&str> {
        self.pending_deletion.as_deref()
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn is_prompting(&self) -> bool {
        self.pending_deletion.is_some() || self.alert.is_some()
    }

    pub fn topics_for_selected_month<'h>(&self, hospital: &'h Hospital) -> &'h [NeedsAssessmentTopic] {
        hospital.topics_for(self.selected_month.name())
    }

    pub fn select_month(&mut self, month: PersianMonth) {
        self.selected_month = month;
    }

    pub fn set_new_topic_title(&mut self, text: impl Into<String>) {
        self.new_topic_title = text.into();
    }

    /// Appends a topic built from the input buffer and clears the buffer.
    /// A blank title raises the alert instead and leaves everything untouched.
    pub fn add_topic(
        &mut self,
        hospital: &Hospital,
        on_update_topics: impl FnOnce(PersianMonth, Vec<NeedsAssessmentTopic>),
    ) -> Result<(), ManagerError> {
        if self.is_prompting() {
            return Err(ManagerError::PromptPending);
        }

        let title = self.new_topic_title.trim();
        if title.is_empty() {
            let err = ManagerError::EmptyTitle;
            self.alert = Some(err.to_string());
            return Err(err);
        }

        let topic = NeedsAssessmentTopic::new(title);
        tracing::info!(month = %self.selected_month, topic_id = %topic.id, title = %topic.title, "adding topic");

        let mut updated = self.topics_for_selected_month(hospital).to_vec();
        updated.push(topic);
        on_update_topics(self.selected_month, updated);

        self.new_topic_title.clear();
        Ok(())
    }

    /// Asks for confirmation; nothing changes until [`Self::resolve_deletion`].
    pub fn delete_topic(&mut self, topic_id: &str) -> Result<(), ManagerError> {
        if self.is_prompting() {
            return Err(ManagerError::PromptPending);
        }
        self.pending_deletion = Some(topic_id.to_string());
        Ok(())
    }

    /// Answers the pending confirmation. Returns whether an update was handed out.
    pub fn resolve_deletion(
        &mut self,
        confirmed: bool,
        hospital: &Hospital,
        on_update_topics: impl FnOnce(PersianMonth, Vec<NeedsAssessmentTopic>),
    ) -> bool {
        let Some(topic_id) = self.pending_deletion.take() else {
            return false;
        };

        if !confirmed {
            tracing::debug!(%topic_id, "topic deletion declined");
            return false;
        }

        let updated: Vec<NeedsAssessmentTopic> = self
            .topics_for_selected_month(hospital)
            .iter()
            .filter(|t| t.id != topic_id)
            .cloned()
            .collect();
        tracing::info!(month = %self.selected_month, %topic_id, "deleting topic");
        on_update_topics(self.selected_month, updated);
        true
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        hospital: &Hospital,
        mut on_update_topics: impl FnMut(PersianMonth, Vec<NeedsAssessmentTopic>),
        on_back: impl FnOnce(),
    ) {
        let mut actions = Vec::new();
        self.draw(ui, hospital, &mut actions);
        self.draw_prompts(ui.ctx(), &mut actions);

        let mut go_back = false;
        for action in actions {
            match action {
                Action::SelectMonth(month) => self.select_month(month),
                Action::AddTopic => {
                    if let Err(e) = self.add_topic(hospital, &mut on_update_topics) {
                        tracing::debug!("topic not added: {}", e);
                    }
                }
                Action::RequestDeletion(topic_id) => {
                    if let Err(e) = self.delete_topic(&topic_id) {
                        tracing::debug!("deletion not requested: {}", e);
                    }
                }
                Action::ResolveDeletion(confirmed) => {
                    self.resolve_deletion(confirmed, hospital, &mut on_update_topics);
                }
                Action::DismissAlert => self.dismiss_alert(),
                Action::Back => go_back = true,
            }
        }

        if go_back {
            on_back();
        }
    }

    fn draw(&mut self, ui: &mut egui::Ui, hospital: &Hospital, actions: &mut Vec<Action>) {
        ui.horizontal(|ui| {
            ui.heading("مدیریت نیازسنجی آموزشی");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⬅ بازگشت").clicked() {
                    actions.push(Action::Back);
                }
            });
        });
        ui.add_space(16.0);

        // Month selection
        ui.horizontal(|ui| {
            ui.label("انتخاب ماه برای تعریف موضوعات:");
            let mut month = self.selected_month;
            egui::ComboBox::from_id_source("month_select")
                .selected_text(month.name())
                .show_ui(ui, |ui| {
                    for candidate in PersianMonth::ALL {
                        ui.selectable_value(&mut month, candidate, candidate.name());
                    }
                });
            if month != self.selected_month {
                actions.push(Action::SelectMonth(month));
            }
        });
        ui.add_space(16.0);

        // New topic form
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.strong(format!("افزودن موضوع جدید برای ماه {}", self.selected_month));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.new_topic_title)
                        .desired_width((ui.available_width() - 100.0).max(120.0))
                        .hint_text("مثال: دوره آموزشی احیای قلبی ریوی پیشرفته")
                );
                let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("➕ افزودن").clicked() || submitted {
                    actions.push(Action::AddTopic);
                }
            });
        });
        ui.add_space(16.0);

        ui.strong(format!("موضوعات و نظرات ثبت‌شده برای {}", self.selected_month));
        ui.add_space(8.0);

        let topics = self.topics_for_selected_month(hospital);
        if topics.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(32.0);
                ui.weak("هیچ موضوعی برای این ماه تعریف نشده است.");
            });
            return;
        }

        egui::ScrollArea::vertical()
            .id_source("topics_scroll")
            .show(ui, |ui| {
                for topic in topics {
                    ui.group(|ui| {
                        ui.set_width(ui.available_width());

                        ui.horizontal(|ui| {
                            ui.strong(&topic.title);
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                let delete = ui.button(
                                    egui::RichText::new("🗑").color(egui::Color32::RED)
                                ).on_hover_text("حذف موضوع");
                                if delete.clicked() {
                                    actions.push(Action::RequestDeletion(topic.id.clone()));
                                }
                            });
                        });
                        ui.separator();

                        if topic.responses.is_empty() {
                            ui.weak("هنوز نظری برای این موضوع ثبت نشده است.");
                        } else {
                            egui::ScrollArea::vertical()
                                .id_source(("responses_scroll", &topic.id))
                                .max_height(240.0)
                                .show(ui, |ui| {
                                    for response in &topic.responses {
                                        ui.strong(format!("{}:", response.staff_name));
                                        ui.label(&response.response);
                                        ui.add_space(6.0);
                                    }
                                });
                        }
                    });
                    ui.add_space(8.0);
                }
            });
    }

    fn draw_prompts(&self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        let confirm = Modal::new("حذف موضوع")
            .id_source("confirm_topic_deletion")
            .max_width(ModalWidth::Small)
            .show(ctx, self.pending_deletion().is_some(), |ui| {
                ui.label("آیا از حذف این موضوع و تمام نظرات ثبت‌شده برای آن مطمئن هستید؟");
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    let confirm = ui.button(egui::RichText::new("حذف").color(egui::Color32::RED)).clicked();
                    let cancel = ui.button("انصراف").clicked();
                    match (confirm, cancel) {
                        (true, _) => Some(true),
                        (false, true) => Some(false),
                        (false, false) => None,
                    }
                })
                .inner
            });

        if let Some(response) = confirm {
            match response.inner {
                Some(confirmed) => actions.push(Action::ResolveDeletion(confirmed)),
                None if response.close_requested => actions.push(Action::ResolveDeletion(false)),
                None => {}
            }
        }

        let alert = Modal::new("خطا")
            .id_source("topic_alert")
            .max_width(ModalWidth::Small)
            .show(ctx, self.alert().is_some(), |ui| {
                ui.label(self.alert().unwrap_or_default());
                ui.add_space(12.0);
                ui.button("باشه").clicked()
            });

        if let Some(response) = alert {
            if response.inner || response.close_requested {
                actions.push(Action::DismissAlert);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MonthlyAssessment, TopicResponse};

    type Calls = Vec<(PersianMonth, Vec<NeedsAssessmentTopic>)>;

    fn topic(id: &str, title: &str) -> NeedsAssessmentTopic {
        NeedsAssessmentTopic {
            id: id.to_string(),
            title: title.to_string(),
            responses: Vec::new(),
        }
    }

    fn hospital_with(month: PersianMonth, topics: Vec<NeedsAssessmentTopic>) -> Hospital {
        Hospital {
            name: "Imam Khomeini".to_string(),
            needs_assessments: Some(vec![MonthlyAssessment {
                month: month.name().to_string(),
                topics,
            }]),
        }
    }

    #[test]
    fn starts_on_first_month_with_empty_buffer() {
        let manager = NeedsAssessmentManager::new();
        assert_eq!(manager.selected_month().name(), "فروردین");
        assert_eq!(manager.new_topic_title(), "");
        assert!(!manager.is_prompting());
    }

    #[test]
    fn whitespace_title_is_rejected_without_update() {
        let hospital = hospital_with(PersianMonth::Farvardin, vec![topic("1", "A")]);
        let mut manager = NeedsAssessmentManager::new();
        let mut calls: Calls = Vec::new();

        manager.set_new_topic_title("  ");
        let result = manager.add_topic(&hospital, |m, t| calls.push((m, t)));

        assert_eq!(result, Err(ManagerError::EmptyTitle));
        assert!(calls.is_empty());
        assert_eq!(manager.alert(), Some("عنوان موضوع نمی‌تواند خالی باشد."));
        assert_eq!(manager.topics_for_selected_month(&hospital), &[topic("1", "A")]);
    }

    #[test]
    fn adding_to_an_empty_month_hands_out_one_topic() {
        let hospital = Hospital::new("Sina");
        let mut manager = NeedsAssessmentManager::new();
        let mut calls: Calls = Vec::new();

        manager.set_new_topic_title("Advanced CPR");
        manager.add_topic(&hospital, |m, t| calls.push((m, t))).unwrap();

        assert_eq!(calls.len(), 1);
        let (month, topics) = &calls[0];
        assert_eq!(month.name(), "فروردین");
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].title, "Advanced CPR");
        assert!(topics[0].responses.is_empty());
        assert!(!topics[0].id.is_empty());
        assert_eq!(manager.new_topic_title(), "");
    }

    #[test]
    fn added_topic_is_trimmed_and_appended() {
        let hospital = hospital_with(PersianMonth::Mehr, vec![topic("1", "A"), topic("2", "B")]);
        let mut manager = NeedsAssessmentManager::new();
        let mut calls: Calls = Vec::new();

        manager.select_month(PersianMonth::Mehr);
        manager.set_new_topic_title("  Hand hygiene \t");
        manager.add_topic(&hospital, |m, t| calls.push((m, t))).unwrap();

        let (month, topics) = &calls[0];
        assert_eq!(*month, PersianMonth::Mehr);
        let titles: Vec<&str> = topics.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", "Hand hygiene"]);
        // the snapshot itself is untouched
        assert_eq!(hospital.topics_for("مهر").len(), 2);
    }

    #[test]
    fn confirmed_deletion_removes_the_topic() {
        let month = PersianMonth::Azar;
        let hospital = hospital_with(month, vec![topic("1", "A"), topic("2", "B")]);
        let mut manager = NeedsAssessmentManager::new();
        let mut calls: Calls = Vec::new();

        manager.select_month(month);
        manager.delete_topic("1").unwrap();
        assert_eq!(manager.pending_deletion(), Some("1"));

        let updated = manager.resolve_deletion(true, &hospital, |m, t| calls.push((m, t)));

        assert!(updated);
        assert_eq!(calls, vec![(month, vec![topic("2", "B")])]);
        assert!(!manager.is_prompting());
    }

    #[test]
    fn declined_deletion_changes_nothing() {
        let month = PersianMonth::Azar;
        let hospital = hospital_with(month, vec![topic("1", "A"), topic("2", "B")]);
        let mut manager = NeedsAssessmentManager::new();
        let mut calls: Calls = Vec::new();

        manager.select_month(month);
        manager.delete_topic("1").unwrap();
        let updated = manager.resolve_deletion(false, &hospital, |m, t| calls.push((m, t)));

        assert!(!updated);
        assert!(calls.is_empty());
        assert_eq!(manager.pending_deletion(), None);
    }

    #[test]
    fn deleting_an_unknown_id_hands_out_the_same_list() {
        let topics = vec![topic("1", "A"), topic("2", "B")];
        let hospital = hospital_with(PersianMonth::Farvardin, topics.clone());
        let mut manager = NeedsAssessmentManager::new();
        let mut calls: Calls = Vec::new();

        manager.delete_topic("missing").unwrap();
        manager.resolve_deletion(true, &hospital, |m, t| calls.push((m, t)));

        assert_eq!(calls, vec![(PersianMonth::Farvardin, topics)]);
    }

    #[test]
    fn switching_to_an_empty_month_shows_no_topics() {
        let hospital = hospital_with(PersianMonth::Farvardin, vec![topic("1", "A")]);
        let mut manager = NeedsAssessmentManager::new();
        assert_eq!(manager.topics_for_selected_month(&hospital).len(), 1);

        manager.select_month(PersianMonth::Tir);
        assert!(manager.topics_for_selected_month(&hospital).is_empty());
    }

    #[test]
    fn responses_are_kept_when_other_topics_change() {
        let mut answered = topic("1", "A");
        answered.responses.push(TopicResponse {
            staff_name: "Reza".into(),
            response: "Needs a refresher".into(),
        });
        let hospital = hospital_with(PersianMonth::Farvardin, vec![answered.clone(), topic("2", "B")]);
        let mut manager = NeedsAssessmentManager::new();
        let mut calls: Calls = Vec::new();

        manager.delete_topic("2").unwrap();
        manager.resolve_deletion(true, &hospital, |m, t| calls.push((m, t)));

        assert_eq!(calls[0].1, vec![answered]);
    }

    #[test]
    fn pending_prompt_blocks_other_operations() {
        let hospital = Hospital::new("Sina");
        let mut manager = NeedsAssessmentManager::new();
        let mut calls: Calls = Vec::new();

        manager.set_new_topic_title("");
        assert_eq!(manager.add_topic(&hospital, |m, t| calls.push((m, t))), Err(ManagerError::EmptyTitle));

        manager.set_new_topic_title("Triage");
        assert_eq!(manager.add_topic(&hospital, |m, t| calls.push((m, t))), Err(ManagerError::PromptPending));
        assert_eq!(manager.delete_topic("1"), Err(ManagerError::PromptPending));
        assert!(calls.is_empty());

        manager.dismiss_alert();
        manager.add_topic(&hospital, |m, t| calls.push((m, t))).unwrap();
        assert_eq!(calls.len(), 1);
    }

    #[test]
    fn resolving_without_a_pending_deletion_is_a_no_op() {
        let hospital = hospital_with(PersianMonth::Farvardin, vec![topic("1", "A")]);
        let mut manager = NeedsAssessmentManager::new();
        let mut calls: Calls = Vec::new();

        assert!(!manager.resolve_deletion(true, &hospital, |m, t| calls.push((m, t))));
        assert!(calls.is_empty());
    }

    #[test]
    fn idle_frame_makes_no_updates() {
        let hospital = hospital_with(PersianMonth::Farvardin, vec![topic("1", "A")]);
        let mut manager = NeedsAssessmentManager::new();
        manager.delete_topic("1").unwrap();
        let mut calls: Calls = Vec::new();
        let mut went_back = false;

        let ctx = egui::Context::default();
        ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                manager.show(ui, &hospital, |m, t| calls.push((m, t)), || went_back = true);
            });
        });

        assert!(calls.is_empty());
        assert!(!went_back);
        assert_eq!(manager.pending_deletion(), Some("1"));
    }
}
