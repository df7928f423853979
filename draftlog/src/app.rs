//! Draft logger application
//!
//! One screen: note, DATE/TIME, OPEN, six measurement fields, SAVE/EXIT.
//! Every dialog is an `egui::Window` drawn on top of the form.

use chrono::Local;
use draftcore::keypad::{KeypadKey, NumericKeypad};
use draftcore::picker::{DatePicker, TimePicker, FIRST_YEAR, LAST_YEAR, MONTHS};
use draftcore::storage::{settings_path, Activation, FileBrowser, Settings};
use draftcore::theme::{consume_zoom_keys, value_text_style, DraftColors};
use draftcore::widgets::{header, status_bar, FileListItem, FormButton, ValueField};
use draftcore::{DraftTheme, FormController, NoticeKind, Position, ReadingStore};
use egui::{Align2, Context, Key};

pub struct DraftLogApp {
    form: FormController,
    settings: Settings,
    theme: DraftTheme,
    keypad: Option<NumericKeypad>,
    date_picker: Option<DatePicker>,
    time_picker: Option<TimePicker>,
    file_browser: Option<FileBrowser>,
}

impl DraftLogApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings = Settings::load_or_default();
        let store = ReadingStore::new(settings.reading_dir());
        log::info!("readings are stored in {}", store.dir().display());
        Self {
            form: FormController::new(store),
            settings,
            theme: DraftTheme::default(),
            keypad: None,
            date_picker: None,
            time_picker: None,
            file_browser: None,
        }
    }

    fn dialog_open(&self) -> bool {
        self.keypad.is_some()
            || self.date_picker.is_some()
            || self.time_picker.is_some()
            || self.file_browser.is_some()
            || self.form.rename.is_some()
            || self.form.notice.is_some()
    }

    fn show_file_browser(&mut self) {
        let mut browser = FileBrowser::new(self.form.store().dir().to_path_buf());
        if let Some(name) = &self.settings.last_opened {
            browser.select_by_name(name);
        }
        self.file_browser = Some(browser);
    }

    fn remember_opened(&mut self, name: String) {
        self.settings.last_opened = Some(name);
        if let Err(e) = self.settings.save(&settings_path()) {
            log::warn!("failed to save settings: {}", e);
        }
    }

    fn render_form(&mut self, ctx: &Context, ui: &mut egui::Ui) {
        header(ui, "DRAFT MARK READINGS");

        ui.add(
            egui::TextEdit::singleline(&mut self.form.reading.note)
                .font(egui::FontId::proportional(self.theme.font_size_button))
                .desired_width(f32::INFINITY)
                .min_size(egui::vec2(0.0, 60.0)),
        );

        ui.columns(2, |cols| {
            if cols[0].add(FormButton::new("DATE")).clicked() {
                self.date_picker = Some(DatePicker::starting_at(Local::now().naive_local()));
            }
            if cols[1].add(FormButton::new("TIME")).clicked() {
                self.time_picker = Some(TimePicker::starting_at(Local::now().naive_local()));
            }
        });

        if ui.add(FormButton::new("OPEN").height(56.0)).clicked() {
            self.show_file_browser();
        }

        ui.add_space(4.0);
        egui::Grid::new("measurements")
            .num_columns(2)
            .spacing([10.0, 10.0])
            .min_col_width(ui.available_width() / 2.0 - 10.0)
            .show(ui, |ui| {
                for position in Position::ALL {
                    ui.label(position.label());
                    let active = self.keypad.map(|k| k.target) == Some(position);
                    let value = self.form.reading.measurements.get(position);
                    if ui.add(ValueField::new(value).active(active)).clicked() {
                        self.keypad = Some(NumericKeypad::open(position));
                    }
                    ui.end_row();
                }
            });

        ui.add_space(4.0);
        ui.columns(2, |cols| {
            if cols[0].add(FormButton::new("SAVE").fill(DraftColors::SAVE)).clicked() {
                self.form.save(Local::now().naive_local());
            }
            if cols[1].add(FormButton::new("EXIT").fill(DraftColors::EXIT)).clicked() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
    }

    fn render_keypad(&mut self, ctx: &Context) {
        let Some(pad) = self.keypad else { return };
        let mut pressed = None;

        // hardware keys work too when a keyboard is attached
        ctx.input(|i| {
            for (digit, key) in ('0'..='9').zip(DIGIT_KEYS) {
                if i.key_pressed(key) {
                    pressed = Some(KeypadKey::Digit(digit));
                }
            }
            if i.key_pressed(Key::Period) {
                pressed = Some(KeypadKey::Decimal);
            }
            if i.key_pressed(Key::Backspace) {
                pressed = Some(KeypadKey::Delete);
            }
            if i.key_pressed(Key::Enter) || i.key_pressed(Key::Escape) {
                pressed = Some(KeypadKey::Ok);
            }
        });

        egui::Window::new("Enter Value")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(360.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(pad.target.label());
                    ui.add(ValueField::new(self.form.reading.measurements.get(pad.target)).active(true));
                });
                ui.add_space(6.0);

                let spacing = ui.spacing().item_spacing.x;
                let key_w = (ui.available_width() - 2.0 * spacing) / 3.0;
                for row in KeypadKey::LAYOUT.chunks(3) {
                    ui.horizontal(|ui| {
                        for key in row {
                            let label = key.label();
                            let button = FormButton::new(&label).text_style(value_text_style());
                            if ui.add_sized([key_w, 64.0], button).clicked() {
                                pressed = Some(*key);
                            }
                        }
                    });
                }
            });

        if let Some(key) = pressed {
            if !pad.press(key, &mut self.form.reading.measurements) {
                self.keypad = None;
            }
        }
    }

    fn render_date_picker(&mut self, ctx: &Context) {
        let Some(mut picker) = self.date_picker else { return };
        let mut selected = false;

        egui::Window::new("Select Date")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Day");
                egui::ComboBox::from_id_source("day")
                    .width(ui.available_width())
                    .selected_text(picker.day.to_string())
                    .show_ui(ui, |ui| {
                        for day in 1..=31 {
                            ui.selectable_value(&mut picker.day, day, day.to_string());
                        }
                    });
                ui.label("Month");
                egui::ComboBox::from_id_source("month")
                    .width(ui.available_width())
                    .selected_text(picker.month_name())
                    .show_ui(ui, |ui| {
                        for (idx, name) in MONTHS.iter().enumerate() {
                            ui.selectable_value(&mut picker.month, idx as u32 + 1, *name);
                        }
                    });
                ui.label("Year");
                egui::ComboBox::from_id_source("year")
                    .width(ui.available_width())
                    .selected_text(picker.year.to_string())
                    .show_ui(ui, |ui| {
                        for year in FIRST_YEAR..=LAST_YEAR {
                            ui.selectable_value(&mut picker.year, year, year.to_string());
                        }
                    });
                ui.add_space(6.0);
                if ui.add(FormButton::new("Select")).clicked() {
                    selected = true;
                }
            });

        if selected {
            self.form.set_date(picker.select());
            self.date_picker = None;
        } else {
            self.date_picker = Some(picker);
        }
    }

    fn render_time_picker(&mut self, ctx: &Context) {
        let Some(mut picker) = self.time_picker else { return };
        let mut selected = false;

        egui::Window::new("Select Time")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Hour");
                egui::ComboBox::from_id_source("hour")
                    .width(ui.available_width())
                    .selected_text(format!("{:02}", picker.hour))
                    .show_ui(ui, |ui| {
                        for hour in 0..24 {
                            ui.selectable_value(&mut picker.hour, hour, format!("{:02}", hour));
                        }
                    });
                ui.label("Minute");
                egui::ComboBox::from_id_source("minute")
                    .width(ui.available_width())
                    .selected_text(format!("{:02}", picker.minute))
                    .show_ui(ui, |ui| {
                        for minute in 0..60 {
                            ui.selectable_value(&mut picker.minute, minute, format!("{:02}", minute));
                        }
                    });
                ui.add_space(6.0);
                if ui.add(FormButton::new("Select")).clicked() {
                    selected = true;
                }
            });

        if selected {
            self.form.set_time(picker.select());
            self.time_picker = None;
        } else {
            self.time_picker = Some(picker);
        }
    }

    fn render_file_browser(&mut self, ctx: &Context) {
        let Some(mut browser) = self.file_browser.take() else { return };
        let mut keep_open = true;
        let mut open_path = None;
        let mut load_selected = false;

        let screen = ctx.screen_rect();
        egui::Window::new("Choose File")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([screen.width() * 0.85, screen.height() * 0.7])
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(browser.current_dir().to_string_lossy().to_string()).small(),
                );
                ui.separator();

                egui::ScrollArea::vertical()
                    .max_height(screen.height() * 0.55)
                    .show(ui, |ui| {
                        let entries = browser.entries().to_vec();
                        for (idx, entry) in entries.iter().enumerate() {
                            let selected = browser.selected_index() == Some(idx);
                            let response = ui.add(
                                FileListItem::new(&entry.name, entry.is_directory).selected(selected),
                            );
                            if response.clicked() {
                                browser.select(idx);
                            }
                            if response.double_clicked() {
                                if let Activation::Open(path) = browser.activate(idx) {
                                    open_path = Some(path);
                                }
                            }
                        }
                    });

                ui.separator();
                ui.columns(2, |cols| {
                    if cols[0].add(FormButton::new("Select").height(56.0)).clicked() {
                        load_selected = true;
                    }
                    if cols[1].add(FormButton::new("Cancel").height(56.0)).clicked() {
                        keep_open = false;
                    }
                });
            });

        if load_selected {
            match browser.activate_selected() {
                Activation::Entered => {}
                Activation::Open(path) => open_path = Some(path),
                Activation::Nothing => {
                    self.form.load_selection(None);
                }
            }
        }

        if let Some(path) = open_path {
            if self.form.load(&path) {
                keep_open = false;
                if let Some(name) = path.file_name() {
                    self.remember_opened(name.to_string_lossy().to_string());
                }
            }
        }

        if keep_open {
            self.file_browser = Some(browser);
        }
    }

    fn render_rename_prompt(&mut self, ctx: &Context) {
        let Some(prompt) = self.form.rename.as_mut() else { return };
        let mut submit = false;
        let mut cancel = false;

        egui::Window::new("File Exists")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(420.0)
            .show(ctx, |ui| {
                ui.label(format!(
                    "File '{}' already exists. Please enter a new name:",
                    prompt.existing.display()
                ));
                let response = ui.add(
                    egui::TextEdit::singleline(&mut prompt.name).desired_width(f32::INFINITY),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                    submit = true;
                }
                ui.columns(2, |cols| {
                    if cols[0].add(FormButton::new("Save").height(48.0)).clicked() {
                        submit = true;
                    }
                    if cols[1].add(FormButton::new("Cancel").height(48.0)).clicked() {
                        cancel = true;
                    }
                });
            });

        if submit {
            self.form.submit_rename();
        } else if cancel {
            self.form.cancel_rename();
        }
    }

    fn render_notice(&mut self, ctx: &Context) {
        let Some(notice) = &self.form.notice else { return };
        let mut dismiss = false;

        let title_color = match notice.kind {
            NoticeKind::Info => DraftColors::INK,
            NoticeKind::Error => DraftColors::EXIT,
        };

        egui::Window::new(notice.title.as_str())
            .id(egui::Id::new("notice"))
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(380.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(egui::RichText::new(&notice.title).color(title_color));
                    ui.add_space(6.0);
                    ui.label(&notice.message);
                    ui.add_space(10.0);
                    if ui.add(FormButton::new("OK").height(48.0)).clicked() {
                        dismiss = true;
                    }
                });
            });

        if dismiss {
            self.form.dismiss_notice();
        }
    }
}

const DIGIT_KEYS: [Key; 10] = [
    Key::Num0, Key::Num1, Key::Num2, Key::Num3, Key::Num4,
    Key::Num5, Key::Num6, Key::Num7, Key::Num8, Key::Num9,
];

impl eframe::App for DraftLogApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        consume_zoom_keys(ctx);

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            status_bar(ui, &format!("readings: {}", self.form.store().dir().display()));
        });

        let enabled = !self.dialog_open();
        egui::CentralPanel::default()
            .frame(self.theme.form_frame())
            .show(ctx, |ui| {
                ui.add_enabled_ui(enabled, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        self.render_form(ctx, ui);
                    });
                });
            });

        self.render_keypad(ctx);
        self.render_date_picker(ctx);
        self.render_time_picker(ctx);
        self.render_file_browser(ctx);
        self.render_rename_prompt(ctx);
        self.render_notice(ctx);
    }
}
