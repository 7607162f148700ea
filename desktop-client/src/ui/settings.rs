use eframe::egui;
use snake_common::config::Validate;
use snake_common::games::snake::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

use crate::config::{Config, MAX_PIXEL_SIZE, MIN_PIXEL_SIZE};

/// Edits a draft copy of the config; the running game only sees it after "Restart".
pub struct SettingsPanel {
    draft: Config,
    error: Option<String>,
}

impl SettingsPanel {
    pub fn new(config: Config) -> Self {
        Self {
            draft: config,
            error: None,
        }
    }

    /// Returns the draft when the player asked to restart with it and it is valid.
    pub fn render(&mut self, ui: &mut egui::Ui) -> Option<Config> {
        ui.heading("Settings");
        ui.add_space(6.0);

        egui::Grid::new("snake_settings_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Board size");
                ui.add(
                    egui::DragValue::new(&mut self.draft.game.board_size)
                        .range(MIN_BOARD_SIZE as u32..=MAX_BOARD_SIZE as u32),
                );
                ui.end_row();

                ui.label("Snake length");
                ui.add(egui::DragValue::new(&mut self.draft.game.initial_snake_length).range(2..=10));
                ui.end_row();

                ui.label("Tick (ms)");
                ui.add(
                    egui::DragValue::new(&mut self.draft.game.tick_interval_ms)
                        .range(20..=2000)
                        .speed(5.0),
                );
                ui.end_row();

                ui.label("Pixel size");
                ui.add(
                    egui::DragValue::new(&mut self.draft.display.pixel_size)
                        .range(MIN_PIXEL_SIZE..=MAX_PIXEL_SIZE),
                );
                ui.end_row();
            });

        ui.add_space(6.0);
        let restart_clicked = ui.button("Restart").clicked();

        if let Some(error) = &self.error {
            ui.colored_label(egui::Color32::RED, error);
        }

        if !restart_clicked {
            return None;
        }

        match self.draft.validate() {
            Ok(()) => {
                self.error = None;
                Some(self.draft.clone())
            }
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }
}
