use serde::{Deserialize, Serialize};
use egui::Color32;
use std::path::PathBuf;

use crate::persistence::GameStore;
use crate::ui::i18n::Language;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub ui_scale: f32,
    pub dark_mode: bool,
    pub language: Language,

    /// Where game files live; `None` means `./games`.
    pub games_dir: Option<PathBuf>,

    pub board_colors: BoardColors,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            ui_scale: 1.0,
            dark_mode: false,
            language: Language::default(),
            games_dir: None,
            board_colors: BoardColors::default(),
        }
    }
}

impl AppSettings {
    pub fn games_dir(&self) -> PathBuf {
        self.games_dir.clone().unwrap_or_else(GameStore::default_dir)
    }

    pub fn store(&self) -> GameStore {
        GameStore::new(self.games_dir())
    }
}

/// RGBA colours for the caller board cells.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BoardColors {
    pub last_called: [u8; 4],
    pub called: [u8; 4],
    pub uncalled: [u8; 4],
}

impl Default for BoardColors {
    fn default() -> Self {
        Self {
            last_called: [30, 130, 60, 255],
            called: [20, 20, 20, 255],
            uncalled: [190, 190, 190, 255],
        }
    }
}

impl BoardColors {
    pub fn color(c: [u8; 4]) -> Color32 {
        Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3])
    }

    pub fn store(slot: &mut [u8; 4], color: Color32) {
        *slot = color.to_srgba_unmultiplied();
    }
}

/// Last settings written to disk. Dragging a slider or a colour picker
/// changes the settings every frame; they are written once the pointer
/// is released.
#[derive(Debug, Clone)]
pub struct SavedSettings {
    saved: AppSettings,
}

impl SavedSettings {
    pub fn new(saved: AppSettings) -> Self {
        Self { saved }
    }

    /// True when `current` should be written now. The copy is taken as
    /// saved right away, so a failing write is not retried every frame.
    pub fn take_pending(&mut self, current: &AppSettings, interacting: bool) -> bool {
        if interacting || *current == self.saved {
            return false;
        }
        self.saved = current.clone();
        true
    }
}
