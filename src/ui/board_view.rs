use eframe::egui::{self, Align2, Color32, FontId, Sense, Vec2};

use crate::ui::board_model::{BoardModel, CellState};
use crate::ui::i18n::Labels;
use crate::ui::settings::BoardColors;

const COLUMNS: f32 = 10.0;
const ROWS: f32 = 9.0;
const GAP: f32 = 4.0;

/// The public caller board: 90 slots plus the current prize.
pub fn draw_board(ctx: &egui::Context, model: &BoardModel, labels: &Labels, colors: &BoardColors) {
    egui::TopBottomPanel::top("board_header").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading(format!("{}: {}", labels.state, model.tier));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(last) = model.last_called {
                    ui.heading(
                        egui::RichText::new(format!("{}: {last}", labels.last_number))
                            .color(BoardColors::color(colors.last_called)),
                    );
                }
            });
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        let cell = cell_size(ui.available_size());
        let font = cell_font_size(cell);

        for row in model.rows() {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing = Vec2::splat(GAP);
                for &(number, state) in row {
                    draw_cell(ui, number, state, cell, font, colors);
                }
            });
            ui.add_space(GAP);
        }
    });
}

fn draw_cell(
    ui: &mut egui::Ui,
    number: u8,
    state: CellState,
    size: Vec2,
    font: f32,
    colors: &BoardColors,
) {
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);

    let (fill, text, font_size) = match state {
        CellState::LastCalled => (BoardColors::color(colors.last_called), Color32::WHITE, font),
        CellState::Called => (Color32::TRANSPARENT, BoardColors::color(colors.called), font),
        CellState::Uncalled => (
            Color32::TRANSPARENT,
            BoardColors::color(colors.uncalled),
            font * 0.9,
        ),
    };

    painter.rect_filled(rect, 6.0, fill);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        number.to_string(),
        FontId::proportional(font_size),
        text,
    );
}

/// Largest square-ish cell that fits a 10×9 grid in `available`.
pub fn cell_size(available: Vec2) -> Vec2 {
    let w = ((available.x - GAP * (COLUMNS - 1.0)) / COLUMNS).max(12.0);
    let h = ((available.y - GAP * (ROWS - 1.0)) / ROWS - GAP).max(12.0);
    Vec2::new(w, h)
}

/// Font size that keeps a two-digit number inside its cell as the window
/// is resized.
pub fn cell_font_size(cell: Vec2) -> f32 {
    (cell.x * 0.45).min(cell.y * 0.7).clamp(8.0, 120.0)
}
