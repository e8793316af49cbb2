//*** START FILE: src/main.rs ***//
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::{App, NativeOptions};
use std::path::Path;

use lexicon_lookup::config::{Config, DEFAULT_CONFIG_FILE};
use lexicon_lookup::error::LookupError;
use lexicon_lookup::logging::init_tracing;
use lexicon_lookup::lookup::controller::{LookupController, QueryOutcome};

struct LexiconLookupApp {
    controller: LookupController,
    lexicon_path_display: String,
    config_error: Option<String>,
}

impl LexiconLookupApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let (config, config_error) = match Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE)) {
            Ok(config) => (config, None),
            Err(e) => {
                tracing::error!("{}", e);
                (Config::default(), Some(e.to_string()))
            }
        };

        // Blocks until the artifact is read; the first frame sees either a lexicon or a failure.
        let lexicon_path = config.lexicon_path();
        let controller = LookupController::load(&lexicon_path, config.history_capacity);

        Self {
            controller,
            lexicon_path_display: format!("Lexicon: {}", lexicon_path.display()),
            config_error,
        }
    }

    fn run_query(&mut self) {
        if let Err(LookupError::Unavailable) = self.controller.submit_current() {
            tracing::warn!("Query ignored; lexicon is not loaded");
        }
    }

    fn run_requery(&mut self, term: &str) {
        if let Err(LookupError::Unavailable) = self.controller.activate_synonym(term) {
            tracing::warn!("Query ignored; lexicon is not loaded");
        }
    }

    fn show_query_bar(&mut self, ui: &mut egui::Ui) {
        let ready = self.controller.is_ready();
        let query_id = egui::Id::new("query_input");

        ui.horizontal(|ui| {
            let response = ui.add_enabled(
                ready,
                egui::TextEdit::singleline(&mut self.controller.query_input)
                    .id(query_id)
                    .hint_text("Enter a word")
                    .desired_width(320.0),
            );

            if self.controller.take_focus_request() && ready {
                response.request_focus();
            }

            let enter_pressed = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let search_clicked = ui.add_enabled(ready, egui::Button::new("Search")).clicked();
            if enter_pressed || search_clicked {
                self.run_query();
                response.request_focus();
            }

            if response.has_focus() {
                let (up, down) = ui.input(|i| (i.key_pressed(egui::Key::ArrowUp), i.key_pressed(egui::Key::ArrowDown)));
                if up {
                    self.controller.recall_older();
                } else if down {
                    self.controller.recall_newer();
                }
            }
        });

        if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.controller.clear();
            ui.memory_mut(|m| m.request_focus(query_id));
        }

        if let Some(message) = self.controller.validation_message() {
            ui.colored_label(egui::Color32::RED, message);
        }
    }

    /// Draws the current result; returns a synonym the user clicked, if any.
    fn show_result(&self, ui: &mut egui::Ui) -> Option<String> {
        let mut clicked_synonym = None;

        match self.controller.result() {
            None => {
                ui.label("Type a word and press Enter.");
            }
            Some(QueryOutcome::NoMatch(term)) => {
                ui.label(format!("No match for \"{}\".", term));
            }
            Some(QueryOutcome::Found(_)) => {
                if let Some((term, entry)) = self.controller.current_entry() {
                    ui.heading(term);
                    ui.separator();
                    for (pos, senses) in &entry.groups {
                        ui.label(egui::RichText::new(pos.label()).strong().size(16.0));
                        for (idx, sense) in senses.iter().enumerate() {
                            ui.horizontal_wrapped(|ui| {
                                ui.label(format!("{}.", idx + 1));
                                ui.label(sense.definition.as_str());
                            });
                            if !sense.synonyms.is_empty() {
                                ui.horizontal_wrapped(|ui| {
                                    ui.add_space(16.0);
                                    ui.weak("Synonyms:");
                                    for synonym in &sense.synonyms {
                                        if ui.link(synonym.as_str()).clicked() {
                                            clicked_synonym = Some(synonym.clone());
                                        }
                                    }
                                });
                            }
                        }
                        ui.add_space(8.0);
                    }
                }
            }
        }
        clicked_synonym
    }
}

impl App for LexiconLookupApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| match (self.controller.lexicon(), self.controller.load_error()) {
                (Some(lexicon), _) => {
                    ui.colored_label(egui::Color32::GREEN, self.lexicon_path_display.as_str());
                    ui.label(format!("{} words", lexicon.len()));
                }
                (None, Some(err)) => {
                    ui.colored_label(egui::Color32::RED, format!("Failed to load lexicon: {}", err));
                }
                (None, None) => {}
            });
            if let Some(err) = &self.config_error {
                ui.colored_label(egui::Color32::RED, format!("Config: {}", err));
            }
        });

        let mut history_click = None;
        egui::SidePanel::right("history_panel").min_width(160.0).default_width(200.0).show(ctx, |ui| {
            ui.heading("History");
            ui.separator();
            egui::ScrollArea::vertical().id_source("history_scroll").show(ui, |ui| {
                for term in self.controller.history().iter().rev() {
                    if ui.selectable_label(false, term).clicked() {
                        history_click = Some(term.to_string());
                    }
                }
            });
        });

        let mut synonym_click = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_query_bar(ui);
            ui.separator();
            egui::ScrollArea::vertical().id_source("result_scroll").auto_shrink([false, false]).show(ui, |ui| {
                synonym_click = self.show_result(ui);
            });
        });

        if let Some(term) = synonym_click.or(history_click) {
            self.run_requery(&term);
        }
    }
}

fn main() -> Result<(), eframe::Error> {
    init_tracing("info");

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Lexicon Lookup",
        options,
        Box::new(|cc| Box::new(LexiconLookupApp::new(cc))),
    )
}
//*** END FILE: src/main.rs ***//
