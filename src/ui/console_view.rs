use eframe::egui;

use crate::engine::protocol::{EntryAction, OperatorCommand};
use crate::model::tier::Tier;
use crate::ui::board_model::{BoardModel, CellState};
use crate::ui::i18n::Labels;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleTab {
    #[default]
    Grid,
    List,
}

/// Console state that is not part of the game.
#[derive(Debug, Default)]
pub struct ConsoleState {
    pub entry: String,
    pub tab: ConsoleTab,
    pub show_board: bool,
}

/// What the operator asked for this frame; the app carries it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleAction {
    Command(OperatorCommand),
    Entry(EntryAction, String),
    Save,
    Close,
}

pub fn draw_console(
    ctx: &egui::Context,
    model: &BoardModel,
    state: &mut ConsoleState,
    labels: &Labels,
) -> Option<ConsoleAction> {
    let mut action = None;

    egui::SidePanel::left("console_controls")
        .resizable(false)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading(labels.controls);
            ui.separator();
            action = draw_controls(ui, model, state, labels);
        });

    egui::SidePanel::right("console_log")
        .resizable(true)
        .default_width(320.0)
        .min_width(220.0)
        .show(ctx, |ui| {
            ui.heading(labels.action_log);
            ui.separator();
            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for entry in &model.log {
                        ui.add(egui::Label::new(egui::RichText::new(entry).monospace()).wrap());
                    }
                });
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut state.tab, ConsoleTab::Grid, labels.grid_view);
            ui.selectable_value(&mut state.tab, ConsoleTab::List, labels.list_view);
        });
        ui.separator();

        match state.tab {
            ConsoleTab::Grid => draw_grid(ui, model),
            ConsoleTab::List => draw_list(ui, model, labels),
        }

        ui.separator();
        draw_statistics(ui, model, labels);
    });

    action
}

fn draw_controls(
    ui: &mut egui::Ui,
    model: &BoardModel,
    state: &mut ConsoleState,
    labels: &Labels,
) -> Option<ConsoleAction> {
    let mut action = None;

    ui.label(labels.select_state);
    let mut tier = model.tier;
    egui::ComboBox::from_id_salt("tier_select")
        .selected_text(tier.label())
        .show_ui(ui, |ui| {
            for t in Tier::ALL {
                ui.selectable_value(&mut tier, t, t.label());
            }
        });
    if tier != model.tier {
        action = Some(ConsoleAction::Command(OperatorCommand::SetTier(tier)));
    }
    if ui
        .add_enabled(model.tier != Tier::SuperBingo, egui::Button::new(labels.next_state))
        .clicked()
    {
        action = Some(ConsoleAction::Command(OperatorCommand::SetTier(model.tier.next())));
    }

    ui.add_space(8.0);
    ui.label(labels.enter_number);
    let response = ui.add(egui::TextEdit::singleline(&mut state.entry).desired_width(120.0));
    let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    ui.add_space(4.0);
    let add = ui.add(
        egui::Button::new(egui::RichText::new(labels.add_number).strong().color(egui::Color32::WHITE))
            .fill(egui::Color32::from_rgb(30, 130, 60)),
    );
    let remove = ui.add(
        egui::Button::new(egui::RichText::new(labels.remove_number).strong().color(egui::Color32::WHITE))
            .fill(egui::Color32::from_rgb(170, 40, 40)),
    );

    if add.clicked() || entered {
        action = Some(ConsoleAction::Entry(EntryAction::Add, std::mem::take(&mut state.entry)));
        response.request_focus();
    } else if remove.clicked() {
        action = Some(ConsoleAction::Entry(EntryAction::Remove, std::mem::take(&mut state.entry)));
    }

    if ui
        .add_enabled(model.stats.remaining > 0, egui::Button::new(labels.draw_number))
        .clicked()
    {
        action = Some(ConsoleAction::Command(OperatorCommand::DrawRandom));
    }

    ui.add_space(8.0);
    if ui.button(labels.save_game).clicked() {
        action = Some(ConsoleAction::Save);
    }
    ui.checkbox(&mut state.show_board, labels.board_title);

    ui.add_space(8.0);
    if ui.button(labels.close_game).clicked() {
        action = Some(ConsoleAction::Close);
    }

    action
}

fn draw_grid(ui: &mut egui::Ui, model: &BoardModel) {
    egui::Grid::new("console_grid")
        .spacing([2.0, 2.0])
        .show(ui, |ui| {
            for row in model.rows() {
                for &(number, cell) in row {
                    let (fill, text) = match cell {
                        CellState::Uncalled => (ui.visuals().extreme_bg_color, ui.visuals().text_color()),
                        CellState::Called | CellState::LastCalled => {
                            (egui::Color32::from_rgb(30, 130, 60), egui::Color32::WHITE)
                        }
                    };
                    egui::Frame::new()
                        .fill(fill)
                        .corner_radius(3)
                        .inner_margin(egui::Margin::symmetric(6, 2))
                        .show(ui, |ui| {
                            ui.set_min_width(22.0);
                            ui.label(egui::RichText::new(format!("{number:>2}")).monospace().color(text));
                        });
                }
                ui.end_row();
            }
        });
}

fn draw_list(ui: &mut egui::Ui, model: &BoardModel, labels: &Labels) {
    egui::Grid::new("console_list")
        .striped(true)
        .num_columns(2)
        .show(ui, |ui| {
            ui.strong(labels.called_numbers);
            ui.strong(labels.remaining_numbers);
            ui.end_row();

            let rows = model.called_rows.len().max(model.remaining_rows.len());
            for i in 0..rows {
                ui.label(model.called_rows.get(i).map(String::as_str).unwrap_or(""));
                ui.label(model.remaining_rows.get(i).map(String::as_str).unwrap_or(""));
                ui.end_row();
            }
        });
}

fn draw_statistics(ui: &mut egui::Ui, model: &BoardModel, labels: &Labels) {
    ui.heading(labels.statistics);
    egui::Grid::new("console_stats").num_columns(2).show(ui, |ui| {
        ui.label(labels.total_called);
        ui.label(model.stats.called.to_string());
        ui.end_row();

        ui.label(labels.numbers_remaining);
        ui.label(model.stats.remaining.to_string());
        ui.end_row();

        ui.label(labels.completion);
        ui.label(format!("{:.1}%", model.stats.percentage()));
        ui.end_row();
    });
}
