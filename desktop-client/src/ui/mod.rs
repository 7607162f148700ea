mod game;
mod settings;

use eframe::egui;
use snake_common::games::snake::{SessionCommand, SnakeSettings};
use snake_common::log;

use crate::colors;
use crate::command_sender::CommandSender;
use crate::config::{ClientConfigManager, Config};
use crate::state::SharedState;

use game::SnakeGameUi;
use settings::SettingsPanel;

pub const SIDE_PANEL_WIDTH: f32 = 220.0;

pub struct SnakeApp {
    shared_state: SharedState,
    command_sender: CommandSender,
    config_manager: ClientConfigManager,
    config: Config,
    game_ui: SnakeGameUi,
    settings_panel: SettingsPanel,
}

impl SnakeApp {
    pub fn new(
        shared_state: SharedState,
        command_sender: CommandSender,
        config_manager: ClientConfigManager,
        config: Config,
    ) -> Self {
        Self {
            shared_state,
            command_sender,
            config_manager,
            settings_panel: SettingsPanel::new(config.clone()),
            config,
            game_ui: SnakeGameUi::new(),
        }
    }

    fn apply_config(&mut self, config: Config) {
        self.command_sender
            .send(SessionCommand::Restart(SnakeSettings::from(&config.game)));

        if let Err(e) = self.config_manager.set_config(&config) {
            log!("Failed to save config: {}", e);
        }
        self.config = config;
    }

    fn render_event_log(&self, ui: &mut egui::Ui) {
        ui.heading("Events");
        for event in self.shared_state.get_events().iter().rev() {
            ui.label(event);
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        let view = self.shared_state.get_view();

        egui::SidePanel::right("snake_side_panel")
            .exact_width(SIDE_PANEL_WIDTH)
            .show(ctx, |ui| {
                if let Some(config) = self.settings_panel.render(ui) {
                    self.apply_config(config);
                }
                ui.separator();
                self.render_event_log(ui);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(colors::BACKGROUND))
            .show(ctx, |ui| {
                self.game_ui.render_game(
                    ui,
                    ctx,
                    &view,
                    self.config.display.pixel_size,
                    &self.config.game,
                    &self.command_sender,
                );
            });
    }
}
