//! Custom widgets: rounded, filled, sized for a finger
//!
//! Fonts and corner rounding come from the style set by
//! [`DraftTheme::apply`](crate::theme::DraftTheme::apply).

use crate::theme::{font_for, value_text_style, DraftColors};
use egui::{Color32, Response, Sense, Stroke, TextStyle, Ui, Widget};

/// Rounded button with a solid fill and large label.
pub struct FormButton<'a> {
    text: &'a str,
    fill: Color32,
    height: f32,
    text_style: TextStyle,
}

impl<'a> FormButton<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, fill: DraftColors::TAN, height: 64.0, text_style: TextStyle::Button }
    }

    pub fn fill(mut self, fill: Color32) -> Self {
        self.fill = fill;
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }
}

impl<'a> Widget for FormButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let desired_size = egui::vec2(ui.available_width(), self.height);
        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::click());

        if ui.is_rect_visible(rect) {
            let rounding = ui.visuals().widgets.inactive.rounding;
            let font = font_for(ui.style(), &self.text_style);
            let painter = ui.painter();
            let fill = if response.is_pointer_button_down_on() {
                self.fill.linear_multiply(0.8)
            } else {
                self.fill
            };
            painter.rect_filled(rect, rounding, fill);
            if response.hovered() {
                painter.rect_stroke(rect, rounding, Stroke::new(1.0, DraftColors::INK));
            }
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.text,
                font,
                DraftColors::INK,
            );
        }

        response
    }
}

/// Tan banner with centred heading text.
pub fn header(ui: &mut Ui, text: &str) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), 50.0), Sense::hover());
    if ui.is_rect_visible(rect) {
        let rounding = ui.visuals().widgets.inactive.rounding;
        let font = font_for(ui.style(), &TextStyle::Heading);
        let painter = ui.painter();
        painter.rect_filled(rect, rounding, DraftColors::TAN);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            text,
            font,
            DraftColors::INK,
        );
    }
}

/// Read-only value box. Clicking it is how the keypad is opened.
pub struct ValueField<'a> {
    value: &'a str,
    active: bool,
}

impl<'a> ValueField<'a> {
    pub fn new(value: &'a str) -> Self {
        Self { value, active: false }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

impl<'a> Widget for ValueField<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let desired_size = egui::vec2(ui.available_width(), 60.0);
        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::click());

        if ui.is_rect_visible(rect) {
            let rounding = ui.visuals().menu_rounding;
            let font = font_for(ui.style(), &value_text_style());
            let painter = ui.painter();
            painter.rect_filled(rect, rounding, DraftColors::WHITE);
            let stroke = if self.active {
                Stroke::new(2.0, DraftColors::INK)
            } else {
                Stroke::new(1.0, DraftColors::TAN)
            };
            painter.rect_stroke(rect, rounding, stroke);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.value,
                font,
                DraftColors::BLACK,
            );
        }

        response
    }
}

/// Row in the open dialog's file list.
pub struct FileListItem<'a> {
    name: &'a str,
    is_directory: bool,
    selected: bool,
}

impl<'a> FileListItem<'a> {
    pub fn new(name: &'a str, is_directory: bool) -> Self {
        Self { name, is_directory, selected: false }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl<'a> Widget for FileListItem<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let height = 36.0;
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), height),
            Sense::click(),
        );

        if ui.is_rect_visible(rect) {
            let font = font_for(ui.style(), &TextStyle::Body);
            let painter = ui.painter();
            let fill = if self.selected {
                DraftColors::TAN
            } else if response.hovered() {
                DraftColors::TAN.linear_multiply(0.4)
            } else {
                DraftColors::PAPER
            };
            painter.rect_filled(rect, ui.visuals().menu_rounding, fill);

            let icon = if self.is_directory { "📁" } else { "📄" };
            painter.text(
                egui::pos2(rect.min.x + 16.0, rect.center().y),
                egui::Align2::CENTER_CENTER,
                icon,
                font.clone(),
                DraftColors::INK,
            );
            painter.text(
                egui::pos2(rect.min.x + 34.0, rect.center().y),
                egui::Align2::LEFT_CENTER,
                self.name,
                font,
                DraftColors::INK,
            );
        }

        response
    }
}

pub fn status_bar(ui: &mut Ui, text: &str) {
    egui::Frame::none()
        .fill(DraftColors::PAPER)
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).small());
        });
}
