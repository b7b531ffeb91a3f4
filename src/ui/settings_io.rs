use anyhow::Context;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

use crate::ui::settings::AppSettings;

fn settings_path() -> anyhow::Result<PathBuf> {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tombola_manager");
    fs::create_dir_all(&path)
        .with_context(|| format!("creating settings folder {}", path.display()))?;
    path.push("settings.json");
    Ok(path)
}

pub fn load_settings() -> AppSettings {
    let loaded = settings_path().and_then(|path| {
        let text = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    });

    match loaded {
        Ok(settings) => settings,
        Err(e) => {
            warn!("using default settings: {e:#}");
            AppSettings::default()
        }
    }
}

pub fn save_settings(settings: &AppSettings) -> anyhow::Result<()> {
    let path = settings_path()?;
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
