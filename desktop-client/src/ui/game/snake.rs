use eframe::egui;
use snake_common::games::snake::{CellRole, Coordinate, Direction, GamePhase, SessionCommand, SnakeSettings};

use crate::colors;
use crate::command_sender::CommandSender;
use crate::config::GameConfig;
use crate::state::BoardView;

const GAME_OVER_MESSAGE: &str = "whoops lol";
const CELL_CORNER_RADIUS: f32 = 6.0;

pub struct SnakeGameUi;

impl SnakeGameUi {
    pub fn new() -> Self {
        Self
    }

    pub fn render_game(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        view: &BoardView,
        pixel_size: u32,
        game_config: &GameConfig,
        command_sender: &CommandSender,
    ) {
        if view.board_size == 0 {
            ui.centered_and_justified(|ui| {
                ui.label(egui::RichText::new("Starting game...").color(colors::TEXT));
            });
            return;
        }

        self.handle_input(ctx, view, game_config, command_sender);

        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            self.render_board(ui, view, pixel_size);
            ui.add_space(10.0);
            self.render_status(ui, view);
        });
    }

    fn handle_input(
        &self,
        ctx: &egui::Context,
        view: &BoardView,
        game_config: &GameConfig,
        command_sender: &CommandSender,
    ) {
        // Arrow keys belong to the settings fields while one of them is being edited.
        if ctx.memory(|m| m.focused().is_some()) {
            return;
        }

        // Several presses can land in one frame; each one goes to the queue in press order.
        let commands: Vec<SessionCommand> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => command_for_key(*key, view, game_config),
                    _ => None,
                })
                .collect()
        });

        for command in commands {
            command_sender.send(command);
        }
    }

    fn render_board(&self, ui: &mut egui::Ui, view: &BoardView, pixel_size: u32) {
        let cell_size = pixel_size as f32;
        let board_side = cell_size * view.board_size as f32;
        let (rect, _) = ui.allocate_exact_size(egui::vec2(board_side, board_side), egui::Sense::hover());

        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, colors::BACKGROUND);
        painter.rect_stroke(
            rect,
            0.0,
            egui::Stroke::new(1.0, colors::BOARD_BORDER),
            egui::StrokeKind::Outside,
        );

        for index in 0..view.cells.len() {
            let role = view.role_at(index);
            if role == CellRole::Background {
                continue;
            }

            let coordinate = Coordinate::from_index(index, view.board_size);
            let min = rect.min
                + egui::vec2(
                    coordinate.column as f32 * cell_size,
                    coordinate.row as f32 * cell_size,
                );
            let cell = egui::Rect::from_min_size(min, egui::vec2(cell_size, cell_size));
            painter.rect_filled(cell.shrink(1.0), CELL_CORNER_RADIUS, colors::cell_color(role));
        }
    }

    fn render_status(&self, ui: &mut egui::Ui, view: &BoardView) {
        ui.label(
            egui::RichText::new(format!("Tail length: {}", view.tail_length))
                .color(colors::TEXT)
                .size(18.0),
        );

        match view.phase {
            GamePhase::Running => {
                ui.label(
                    egui::RichText::new("Arrow keys or WASD to steer, Space to pause")
                        .color(colors::TEXT),
                );
            }
            GamePhase::Paused => {
                ui.label(
                    egui::RichText::new("Paused - press Space to resume")
                        .color(colors::TEXT)
                        .size(20.0),
                );
            }
            GamePhase::GameOver => {
                let won = view
                    .game_over
                    .as_ref()
                    .is_some_and(|summary| summary.reason.is_win());
                let message = if won { "The board is yours!" } else { GAME_OVER_MESSAGE };
                ui.label(egui::RichText::new(message).color(colors::TEXT).size(24.0));
                ui.label(egui::RichText::new("Press R or Enter to play again").color(colors::TEXT));
            }
        }
    }
}

fn command_for_key(key: egui::Key, view: &BoardView, game_config: &GameConfig) -> Option<SessionCommand> {
    let direction = match key {
        egui::Key::ArrowUp | egui::Key::W => Some(Direction::Up),
        egui::Key::ArrowDown | egui::Key::S => Some(Direction::Down),
        egui::Key::ArrowLeft | egui::Key::A => Some(Direction::Left),
        egui::Key::ArrowRight | egui::Key::D => Some(Direction::Right),
        _ => None,
    };
    if let Some(direction) = direction {
        return (view.phase == GamePhase::Running).then_some(SessionCommand::Turn(direction));
    }

    match key {
        egui::Key::Space | egui::Key::P if view.phase != GamePhase::GameOver => {
            Some(SessionCommand::TogglePause)
        }
        egui::Key::R => Some(SessionCommand::Restart(SnakeSettings::from(game_config))),
        egui::Key::Enter if view.phase == GamePhase::GameOver => {
            Some(SessionCommand::Restart(SnakeSettings::from(game_config)))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn key_press(key: egui::Key) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn commands_for(events: Vec<egui::Event>, view: &BoardView) -> Vec<SessionCommand> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let command_sender = CommandSender::new(tx);
        let game_ui = SnakeGameUi::new();
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            events,
            ..Default::default()
        };

        let _ = ctx.run(input, |ctx| {
            game_ui.handle_input(ctx, view, &GameConfig::default(), &command_sender);
        });

        let mut commands = Vec::new();
        while let Ok(command) = rx.try_recv() {
            commands.push(command);
        }
        commands
    }

    fn turns(commands: &[SessionCommand]) -> Vec<Direction> {
        commands
            .iter()
            .filter_map(|command| match command {
                SessionCommand::Turn(direction) => Some(*direction),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_every_turn_in_a_frame_is_sent_in_press_order() {
        let view = BoardView::empty();
        let commands = commands_for(
            vec![key_press(egui::Key::ArrowUp), key_press(egui::Key::ArrowLeft)],
            &view,
        );

        assert_eq!(commands.len(), 2);
        assert_eq!(turns(&commands), vec![Direction::Up, Direction::Left]);
    }

    #[test]
    fn test_press_order_wins_over_key_order() {
        let view = BoardView::empty();
        let commands = commands_for(
            vec![
                key_press(egui::Key::D),
                key_press(egui::Key::ArrowDown),
                key_press(egui::Key::ArrowUp),
            ],
            &view,
        );

        assert_eq!(
            turns(&commands),
            vec![Direction::Right, Direction::Down, Direction::Up]
        );
    }

    #[test]
    fn test_key_release_is_ignored() {
        let view = BoardView::empty();
        let release = egui::Event::Key {
            key: egui::Key::ArrowUp,
            physical_key: None,
            pressed: false,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        };

        assert!(commands_for(vec![release], &view).is_empty());
    }

    #[test]
    fn test_paused_game_only_takes_pause_toggle() {
        let mut view = BoardView::empty();
        view.phase = GamePhase::Paused;

        let commands = commands_for(
            vec![key_press(egui::Key::ArrowUp), key_press(egui::Key::Space)],
            &view,
        );

        assert_eq!(commands.len(), 1);
        assert!(matches!(commands[0], SessionCommand::TogglePause));
    }

    #[test]
    fn test_enter_restarts_only_after_game_over() {
        let mut view = BoardView::empty();
        assert!(commands_for(vec![key_press(egui::Key::Enter)], &view).is_empty());

        view.phase = GamePhase::GameOver;
        let commands = commands_for(vec![key_press(egui::Key::Enter)], &view);

        assert_eq!(commands.len(), 1);
        assert!(matches!(
            &commands[0],
            SessionCommand::Restart(settings) if *settings == SnakeSettings::from(&GameConfig::default())
        ));
    }
}
