// src/ui/modal.rs
use std::hash::Hash;
use eframe::egui;

const SCREEN_PADDING: f32 = 16.0;

/// Panel width presets for [`Modal`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ModalWidth {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
    Custom(f32),
}

impl ModalWidth {
    pub fn points(&self) -> f32 {
        match self {
            ModalWidth::Small => 384.0,
            ModalWidth::Medium => 448.0,
            ModalWidth::Large => 512.0,
            ModalWidth::ExtraLarge => 576.0,
            ModalWidth::Custom(width) => *width,
        }
    }
}

pub struct ModalResponse<R> {
    pub inner: R,
    /// Set on the frame the backdrop, the close button or Escape was used.
    pub close_requested: bool,
    pub panel_rect: egui::Rect,
}

/// Overlay dialog: a dimmed backdrop over the whole viewport with a titled,
/// centered panel on top. The open flag is owned by the caller.
pub struct Modal {
    id: egui::Id,
    title: String,
    width: ModalWidth,
}

impl Modal {
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: egui::Id::new("modal").with(&title),
            title,
            width: ModalWidth::default(),
        }
    }

    /// Needed when two modals share a title.
    pub fn id_source(mut self, id_source: impl Hash) -> Self {
        self.id = egui::Id::new(id_source);
        self
    }

    pub fn max_width(mut self, width: ModalWidth) -> Self {
        self.width = width;
        self
    }

    /// Draws nothing and returns `None` while closed.
    pub fn show<R>(
        self,
        ctx: &egui::Context,
        is_open: bool,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> Option<ModalResponse<R>> {
        if !is_open {
            return None;
        }

        let screen = ctx.screen_rect();

        let backdrop = egui::Area::new(self.id.with("backdrop"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen.min)
            .interactable(true)
            .show(ctx, |ui| {
                ui.painter().rect_filled(screen, 0.0, egui::Color32::from_black_alpha(128));
                ui.allocate_rect(screen, egui::Sense::click())
            })
            .inner;

        let width = self.width.points().min(screen.width() - 2.0 * SCREEN_PADDING).max(0.0);
        let max_height = screen.height() * 0.9;
        let title = self.title;

        let panel = egui::Area::new(self.id.with("panel"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                egui::Frame::window(ui.style())
                    .inner_margin(egui::Margin::same(SCREEN_PADDING))
                    .show(ui, |ui| {
                        ui.set_width(width);
                        ui.set_max_height(max_height);

                        let close_clicked = ui.horizontal(|ui| {
                            ui.heading(&title);
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                ui.add(egui::Button::new("✖").frame(false))
                                    .on_hover_text("بستن")
                                    .clicked()
                            })
                            .inner
                        })
                        .inner;

                        ui.separator();

                        let inner = egui::ScrollArea::vertical()
                            .id_source("modal_body_scroll")
                            .show(ui, add_contents)
                            .inner;

                        (close_clicked, inner)
                    })
                    .inner
            });

        // Keep the panel above its own backdrop.
        ctx.move_to_top(panel.response.layer_id);

        let (close_clicked, inner) = panel.inner;
        let backdrop_click = if backdrop.clicked() {
            backdrop.interact_pointer_pos()
        } else {
            None
        };
        let escape = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        let close_requested = dismisses(panel.response.rect, backdrop_click, close_clicked, escape);

        Some(ModalResponse {
            inner,
            close_requested,
            panel_rect: panel.response.rect,
        })
    }

    /// Like [`Modal::show`], calling `on_close` once when closing was requested.
    pub fn show_with_close<R>(
        self,
        ctx: &egui::Context,
        is_open: bool,
        on_close: impl FnOnce(),
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> Option<R> {
        let response = self.show(ctx, is_open, add_contents)?;
        if response.close_requested {
            on_close();
        }
        Some(response.inner)
    }
}

/// Clicks landing inside the panel never count as backdrop clicks. Before the
/// panel has been laid out (its opening frame) backdrop clicks are ignored.
fn dismisses(
    panel: egui::Rect,
    backdrop_click: Option<egui::Pos2>,
    close_clicked: bool,
    escape: bool,
) -> bool {
    let outside_click = panel.is_positive()
        && backdrop_click.map_or(false, |pos| !panel.contains(pos));
    close_clicked || escape || outside_click
}
