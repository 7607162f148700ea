use eframe::egui::Color32;
use snake_common::games::snake::CellRole;

pub const BACKGROUND: Color32 = Color32::BLACK;
pub const TEXT: Color32 = Color32::WHITE;
pub const SNAKE: Color32 = Color32::from_rgb(144, 238, 144);
pub const CANDY: Color32 = Color32::from_rgb(238, 130, 238);
pub const BOARD_BORDER: Color32 = Color32::from_rgba_premultiplied(128, 128, 128, 128);

pub fn cell_color(role: CellRole) -> Color32 {
    match role {
        CellRole::Head | CellRole::Tail => SNAKE,
        CellRole::Candy => CANDY,
        CellRole::Background => BACKGROUND,
    }
}
