use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::TombolaError;
use crate::model::game_save::GameSave;

const EXTENSION: &str = "json";

/// One JSON file per game, named after the game, inside a single folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStore {
    dir: PathBuf,
}

impl GameStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `./games`, relative to the working directory.
    pub fn default_dir() -> PathBuf {
        PathBuf::from("games")
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{EXTENSION}"))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).is_file()
    }

    /// Names of all saved games, sorted. A missing folder is an empty list.
    pub fn list_games(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    warn!(dir = %self.dir.display(), error = %e, "cannot read games folder");
                }
                return Vec::new();
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == EXTENSION))
            .filter_map(|path| path.file_stem().and_then(|s| s.to_str()).map(str::to_string))
            .filter(|stem| validate_name(stem).as_deref() == Ok(stem.as_str()))
            .collect();
        names.sort();
        names
    }

    /// Checks that `name` is free before a new game is started.
    pub fn reserve(&self, name: &str) -> Result<String, TombolaError> {
        let name = validate_name(name)?;
        if self.exists(&name) {
            return Err(TombolaError::NameCollision(name));
        }
        Ok(name)
    }

    pub fn save(&self, save: &GameSave) -> Result<PathBuf, TombolaError> {
        let name = validate_name(&save.name)?;
        let path = self.path_for(&name);
        let tmp = path.with_extension(format!("{EXTENSION}.tmp"));

        let json = serde_json::to_string_pretty(save)
            .map_err(|e| TombolaError::save_failure(&name, e))?;

        fs::create_dir_all(&self.dir).map_err(|e| TombolaError::save_failure(&name, e))?;
        fs::write(&tmp, json).map_err(|e| TombolaError::save_failure(&name, e))?;
        fs::rename(&tmp, &path).map_err(|e| TombolaError::save_failure(&name, e))?;

        debug!(game = %name, path = %path.display(), "game saved");
        Ok(path)
    }

    pub fn load(&self, name: &str) -> Result<GameSave, TombolaError> {
        let name = validate_name(name)?;
        let path = self.path_for(&name);

        let text = fs::read_to_string(&path).map_err(|e| TombolaError::load_failure(&name, e))?;
        let save: GameSave =
            serde_json::from_str(&text).map_err(|e| TombolaError::load_failure(&name, e))?;

        // later saves go to `<save.name>.json`, so it has to be this file
        if validate_name(&save.name).as_deref() != Ok(name.as_str()) {
            return Err(TombolaError::load_failure(
                &name,
                format!("file holds a game named '{}'", save.name),
            ));
        }

        info!(game = %name, numbers = save.numbers.len(), "game loaded from disk");
        Ok(save)
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new(Self::default_dir())
    }
}

/// Trims `name` and makes sure it can be used as a file stem.
pub fn validate_name(name: &str) -> Result<String, TombolaError> {
    let trimmed = name.trim();
    let forbidden = |c: char| matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') || c.is_control();

    if trimmed.is_empty() || trimmed == "." || trimmed.contains("..") || trimmed.chars().any(forbidden) {
        return Err(TombolaError::InvalidName(trimmed.to_string()));
    }
    Ok(trimmed.to_string())
}
