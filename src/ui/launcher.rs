use eframe::egui;
use std::path::PathBuf;

use crate::ui::i18n::{Labels, Language};
use crate::ui::settings::{AppSettings, BoardColors};

#[derive(Debug, Default)]
pub struct LauncherState {
    pub new_name: String,
    pub games: Vec<String>,
    pub selected: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LauncherAction {
    StartNew(String),
    Load(String),
    Refresh,
    ChangeFolder(PathBuf),
}

pub fn draw_launcher(
    ctx: &egui::Context,
    state: &mut LauncherState,
    settings: &mut AppSettings,
) -> Option<LauncherAction> {
    let labels = settings.language.labels();
    let mut action = None;

    egui::SidePanel::right("launcher_settings")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, |ui| {
            draw_settings(ui, settings, labels);
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(labels.app_title);
        ui.add_space(8.0);

        ui.group(|ui| {
            ui.strong(labels.new_game);
            ui.label(labels.game_name);
            let response = ui.text_edit_singleline(&mut state.new_name);
            let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button(labels.start_new_game).clicked() || entered {
                action = Some(LauncherAction::StartNew(state.new_name.clone()));
            }
        });

        ui.add_space(8.0);

        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.strong(labels.load_game);
                if ui.small_button(labels.refresh).clicked() {
                    action = Some(LauncherAction::Refresh);
                }
            });

            ui.horizontal(|ui| {
                ui.label(labels.games_folder);
                ui.monospace(settings.games_dir().display().to_string());
                if ui.small_button(labels.choose_folder).clicked() {
                    if let Some(dir) = rfd::FileDialog::new().pick_folder() {
                        action = Some(LauncherAction::ChangeFolder(dir));
                    }
                }
            });

            ui.separator();

            if state.games.is_empty() {
                ui.label(labels.no_saved_games);
            } else {
                egui::ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
                    for game in &state.games {
                        let selected = state.selected.as_deref() == Some(game.as_str());
                        let response = ui.selectable_label(selected, game);
                        if response.clicked() {
                            state.selected = Some(game.clone());
                        }
                        if response.double_clicked() {
                            action = Some(LauncherAction::Load(game.clone()));
                        }
                    }
                });
            }

            let can_load = state.selected.is_some();
            if ui.add_enabled(can_load, egui::Button::new(labels.load_selected)).clicked() {
                if let Some(name) = state.selected.clone() {
                    action = Some(LauncherAction::Load(name));
                }
            }
        });
    });

    action
}

fn draw_settings(ui: &mut egui::Ui, settings: &mut AppSettings, labels: &Labels) {
    ui.heading(labels.settings);
    ui.separator();

    ui.label(labels.ui_scale);
    ui.add(egui::Slider::new(&mut settings.ui_scale, 0.75..=2.0));

    ui.checkbox(&mut settings.dark_mode, labels.dark_mode);

    ui.label(labels.language);
    egui::ComboBox::from_id_salt("language_select")
        .selected_text(settings.language.display_name())
        .show_ui(ui, |ui| {
            for lang in Language::ALL {
                ui.selectable_value(&mut settings.language, lang, lang.display_name());
            }
        });

    ui.collapsing(labels.colors, |ui| {
        color_row(ui, labels.last_called_color, &mut settings.board_colors.last_called);
        color_row(ui, labels.called_color, &mut settings.board_colors.called);
        color_row(ui, labels.uncalled_color, &mut settings.board_colors.uncalled);
    });
}

fn color_row(ui: &mut egui::Ui, label: &str, slot: &mut [u8; 4]) {
    ui.horizontal(|ui| {
        let mut color = BoardColors::color(*slot);
        if ui.color_edit_button_srgba(&mut color).changed() {
            BoardColors::store(slot, color);
        }
        ui.label(label);
    });
}
