//! Draft logger theme: warm paper background, tan rounded buttons,
//! large touch targets.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// Text style for measurement values and keypad keys.
pub const VALUE_STYLE: &str = "value";

pub fn value_text_style() -> TextStyle {
    TextStyle::Name(VALUE_STYLE.into())
}

/// Font for `text_style` as set by [`DraftTheme::apply`].
pub fn font_for(style: &Style, text_style: &TextStyle) -> FontId {
    style
        .text_styles
        .get(text_style)
        .or_else(|| style.text_styles.get(&TextStyle::Button))
        .cloned()
        .unwrap_or_default()
}

pub struct DraftColors;

impl DraftColors {
    pub const PAPER: Color32 = Color32::from_rgb(0xFF, 0xF5, 0xE6);
    pub const TAN: Color32 = Color32::from_rgb(0xD2, 0xB4, 0x8C);
    pub const INK: Color32 = Color32::from_rgb(0x4A, 0x4A, 0x4A);
    pub const SAVE: Color32 = Color32::from_rgb(0x90, 0xEE, 0x90);
    pub const EXIT: Color32 = Color32::from_rgb(0xFF, 0xA0, 0x7A);
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
}

pub struct DraftTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_button: f32,
    pub font_size_small: f32,
    pub font_size_value: f32,
    pub rounding: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for DraftTheme {
    fn default() -> Self {
        Self {
            font_size_body: 18.0,
            font_size_heading: 24.0,
            font_size_button: 24.0,
            font_size_small: 14.0,
            font_size_value: 32.0,
            rounding: 15.0,
            window_padding: 10.0,
            item_spacing: 10.0,
        }
    }
}

impl DraftTheme {
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_button, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
            (value_text_style(), FontId::new(self.font_size_value, FontFamily::Proportional)),
        ]
        .into();

        let mut visuals = Visuals::light();
        visuals.window_fill = DraftColors::PAPER;
        visuals.panel_fill = DraftColors::PAPER;
        visuals.faint_bg_color = DraftColors::PAPER;
        // text edit background
        visuals.extreme_bg_color = DraftColors::WHITE;
        visuals.override_text_color = Some(DraftColors::INK);

        visuals.window_rounding = Rounding::same(self.rounding);
        visuals.menu_rounding = Rounding::same(self.rounding / 2.0);
        visuals.window_stroke = Stroke::new(1.0, DraftColors::INK);

        let rounding = self.rounding;
        let tan = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = DraftColors::TAN;
            ws.weak_bg_fill = DraftColors::TAN;
            ws.fg_stroke = Stroke::new(1.0, DraftColors::INK);
            ws.rounding = Rounding::same(rounding);
        };
        tan(&mut visuals.widgets.inactive);
        tan(&mut visuals.widgets.hovered);
        tan(&mut visuals.widgets.active);
        tan(&mut visuals.widgets.open);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, DraftColors::INK);
        visuals.widgets.active.bg_stroke = Stroke::new(2.0, DraftColors::INK);

        visuals.selection.bg_fill = DraftColors::TAN;
        visuals.selection.stroke = Stroke::new(1.0, DraftColors::INK);

        style.visuals = visuals;
        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.spacing.interact_size.y = 44.0;

        ctx.set_style(style);
    }

    /// Frame for the central form panel.
    pub fn form_frame(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(DraftColors::PAPER)
            .inner_margin(egui::Margin::same(20.0))
    }
}

/// Strip zoom shortcuts so a stray Cmd+/- cannot rescale the form.
pub fn consume_zoom_keys(ctx: &egui::Context) {
    ctx.input_mut(|i| {
        i.events.retain(|e| {
            !matches!(e,
                egui::Event::Key { key, modifiers, .. }
                    if modifiers.command
                        && matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals))
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applied_fonts_follow_theme() {
        let ctx = egui::Context::default();
        let theme = DraftTheme { font_size_value: 40.0, ..DraftTheme::default() };
        theme.apply(&ctx);

        let style = ctx.style();
        assert_eq!(font_for(&style, &value_text_style()).size, 40.0);
        assert_eq!(font_for(&style, &TextStyle::Heading).size, theme.font_size_heading);
        assert_eq!(style.visuals.widgets.inactive.rounding, Rounding::same(theme.rounding));
    }

    #[test]
    fn test_unknown_style_falls_back_to_button() {
        let style = Style {
            text_styles: [(TextStyle::Button, FontId::proportional(21.0))].into(),
            ..Style::default()
        };
        assert_eq!(font_for(&style, &value_text_style()).size, 21.0);
    }
}
