use eframe::egui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};

use crate::engine::GameController;
use crate::error::TombolaError;
use crate::model::event_result::CommandOutcome;
use crate::ui::board_model::BoardModel;
use crate::ui::board_view::draw_board;
use crate::ui::console_view::{draw_console, ConsoleAction, ConsoleState};
use crate::ui::launcher::{draw_launcher, LauncherAction, LauncherState};
use crate::ui::settings::{AppSettings, SavedSettings};
use crate::ui::settings_io::{load_settings, save_settings};

/* =========================
   Screens
   ========================= */

struct GameScreen {
    controller: GameController,
    model: BoardModel,
    console: ConsoleState,
}

impl GameScreen {
    fn new(controller: GameController) -> Self {
        let model = BoardModel::build(controller.session(), controller.revision());
        Self {
            controller,
            model,
            console: ConsoleState {
                show_board: true,
                ..Default::default()
            },
        }
    }

    /// Rebuilds the shared model if the session changed since last frame.
    fn refresh(&mut self) {
        if self.model.is_stale(self.controller.revision()) {
            self.model = BoardModel::build(self.controller.session(), self.controller.revision());
        }
    }
}

enum Screen {
    Launcher(LauncherState),
    Game(Box<GameScreen>),
}

/* =========================
   Notices
   ========================= */

struct Notice {
    text: String,
    is_error: bool,
}

impl Notice {
    fn error(e: &TombolaError) -> Self {
        Self {
            text: e.to_string(),
            is_error: true,
        }
    }

    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }
}

/* =========================
   App
   ========================= */

pub struct TombolaApp {
    settings: AppSettings,
    saved_settings: SavedSettings,
    screen: Screen,
    notice: Option<Notice>,
    rng: StdRng,
    window_title: String,
}

impl TombolaApp {
    pub fn new() -> Self {
        let settings = load_settings();
        let mut launcher = LauncherState::default();
        launcher.games = settings.store().list_games();

        Self {
            saved_settings: SavedSettings::new(settings.clone()),
            settings,
            screen: Screen::Launcher(launcher),
            notice: None,
            rng: StdRng::from_entropy(),
            window_title: String::new(),
        }
    }

    fn open(&mut self, result: Result<GameController, TombolaError>) {
        match result {
            Ok(controller) => {
                self.notice = None;
                self.screen = Screen::Game(Box::new(GameScreen::new(controller)));
            }
            Err(e) => {
                error!("cannot open game: {e}");
                self.notice = Some(Notice::error(&e));
            }
        }
    }

    fn back_to_launcher(&mut self) {
        let mut launcher = LauncherState::default();
        launcher.games = self.settings.store().list_games();
        self.screen = Screen::Launcher(launcher);
    }

    fn persist_settings(&mut self, interacting: bool) {
        if !self.saved_settings.take_pending(&self.settings, interacting) {
            return;
        }
        if let Err(e) = save_settings(&self.settings) {
            error!("saving settings failed: {e:#}");
        }
    }

    /// Writes the open game, so log lines of rejected commands are kept too.
    fn save_open_game(&self) {
        if let Screen::Game(game) = &self.screen {
            if let Err(e) = game.controller.save() {
                error!("final save failed: {e}");
            }
        }
    }

    fn handle_launcher(&mut self, action: LauncherAction) {
        match action {
            LauncherAction::StartNew(name) => {
                let result = GameController::start_new(self.settings.store(), &name);
                self.open(result);
            }
            LauncherAction::Load(name) => {
                let result = GameController::open_existing(self.settings.store(), &name);
                self.open(result);
            }
            LauncherAction::Refresh => self.back_to_launcher(),
            LauncherAction::ChangeFolder(dir) => {
                info!(dir = %dir.display(), "games folder changed");
                self.settings.games_dir = Some(dir);
                self.back_to_launcher();
            }
        }
    }

    fn handle_console(&mut self, action: ConsoleAction) {
        let Screen::Game(game) = &mut self.screen else {
            return;
        };

        let result = match action {
            ConsoleAction::Command(command) => game.controller.submit(command, &mut self.rng),
            ConsoleAction::Entry(entry_action, text) => {
                game.controller.submit_entry(entry_action, &text, &mut self.rng)
            }
            ConsoleAction::Save => {
                self.notice = Some(match game.controller.save() {
                    Ok(()) => Notice::info(self.settings.language.labels().saved),
                    Err(e) => Notice::error(&e),
                });
                return;
            }
            ConsoleAction::Close => {
                self.save_open_game();
                self.back_to_launcher();
                return;
            }
        };

        self.notice = match result {
            Ok(CommandOutcome::Applied { .. }) => None,
            Ok(CommandOutcome::Rejected { error }) => Some(Notice::error(&error)),
            Err(e) => Some(Notice::error(&e)),
        };

        game.refresh();
    }

    fn draw_notice(&mut self, ctx: &egui::Context) {
        let labels = self.settings.language.labels();
        let mut dismiss = false;

        if let Some(notice) = &self.notice {
            egui::TopBottomPanel::bottom("notice").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let color = if notice.is_error {
                        ui.visuals().error_fg_color
                    } else {
                        ui.visuals().text_color()
                    };
                    ui.colored_label(color, &notice.text);
                    if ui.small_button(labels.dismiss).clicked() {
                        dismiss = true;
                    }
                });
            });
        }

        if dismiss {
            self.notice = None;
        }
    }
}

impl Default for TombolaApp {
    fn default() -> Self {
        Self::new()
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for TombolaApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            info!("window closing");
            self.save_open_game();
            self.persist_settings(false);
        }

        ctx.set_pixels_per_point(self.settings.ui_scale);
        ctx.set_visuals(if self.settings.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        self.draw_notice(ctx);

        let labels = self.settings.language.labels();

        let title = match &self.screen {
            Screen::Launcher(_) => labels.app_title.to_string(),
            Screen::Game(game) => format!("{} - {}", labels.console_title, game.model.name),
        };
        if title != self.window_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.window_title = title;
        }

        match &mut self.screen {
            Screen::Launcher(state) => {
                if let Some(action) = draw_launcher(ctx, state, &mut self.settings) {
                    self.handle_launcher(action);
                }
            }
            Screen::Game(game) => {
                game.refresh();

                if game.console.show_board {
                    let model = &game.model;
                    let colors = &self.settings.board_colors;
                    let mut closed = false;

                    ctx.show_viewport_immediate(
                        egui::ViewportId::from_hash_of("caller_board"),
                        egui::ViewportBuilder::default()
                            .with_title(format!("{} - {}", labels.board_title, model.name))
                            .with_inner_size([900.0, 760.0]),
                        |ctx, _class| {
                            draw_board(ctx, model, labels, colors);
                            if ctx.input(|i| i.viewport().close_requested()) {
                                closed = true;
                            }
                        },
                    );

                    if closed {
                        game.console.show_board = false;
                    }
                }

                if let Some(action) = draw_console(ctx, &game.model, &mut game.console, labels) {
                    self.handle_console(action);
                }
            }
        }

        let interacting = ctx.input(|i| i.pointer.any_down());
        self.persist_settings(interacting);
    }
}
