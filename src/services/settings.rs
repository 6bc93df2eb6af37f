//! User settings file (`<cache dir>/.wheelpick/settings.json`).
//!
//! Every field is optional; missing or invalid fields leave the built-in defaults in place.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::config::PickerConfig;

const SETTINGS_DIR: &str = ".wheelpick";
const SETTINGS_FILE: &str = "settings.json";
const LOG_DIR: &str = "logs";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minute_step: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_rows: Option<u16>,
    #[serde(default)]
    pub animation: AnimationSettings,
    #[serde(default)]
    pub labels: LabelSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade_in_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slide_up_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade_out_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slide_down_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month_suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
}

impl Settings {
    /// Snapshot of `config` as a fully populated settings file.
    pub fn from_config(config: &PickerConfig) -> Self {
        let labels = &config.labels;
        let timings = &config.timings;
        Self {
            minute_step: Some(config.minute_step),
            item_height: Some(config.item_height),
            visible_rows: Some(config.visible_rows),
            animation: AnimationSettings {
                fade_in_ms: Some(timings.fade_in.as_millis() as u64),
                slide_up_ms: Some(timings.slide_up.as_millis() as u64),
                fade_out_ms: Some(timings.fade_out.as_millis() as u64),
                slide_down_ms: Some(timings.slide_down.as_millis() as u64),
            },
            labels: LabelSettings {
                cancel: Some(labels.cancel.clone()),
                confirm: Some(labels.confirm.clone()),
                date_title: Some(labels.date_title.clone()),
                time_title: Some(labels.time_title.clone()),
                year_suffix: Some(labels.year_suffix.clone()),
                month_suffix: Some(labels.month_suffix.clone()),
                day_suffix: Some(labels.day_suffix.clone()),
                separator: Some(labels.separator.clone()),
            },
        }
    }

    pub fn apply_to(&self, config: &mut PickerConfig) {
        if let Some(step) = self.minute_step {
            if !config.set_minute_step(step) {
                tracing::warn!(step, "ignoring minute_step: must divide 60");
            }
        }
        if let Some(height) = self.item_height {
            if !config.set_item_height(height) {
                tracing::warn!(height, "ignoring item_height: must be positive");
            }
        }
        if let Some(rows) = self.visible_rows {
            if !config.set_visible_rows(rows) {
                tracing::warn!(rows, "ignoring visible_rows: must be at least 1");
            }
        }

        let anim = &self.animation;
        let timings = &mut config.timings;
        for (ms, slot) in [
            (anim.fade_in_ms, &mut timings.fade_in),
            (anim.slide_up_ms, &mut timings.slide_up),
            (anim.fade_out_ms, &mut timings.fade_out),
            (anim.slide_down_ms, &mut timings.slide_down),
        ] {
            if let Some(ms) = ms {
                *slot = std::time::Duration::from_millis(ms);
            }
        }

        let src = &self.labels;
        let labels = &mut config.labels;
        for (value, slot) in [
            (&src.cancel, &mut labels.cancel),
            (&src.confirm, &mut labels.confirm),
            (&src.date_title, &mut labels.date_title),
            (&src.time_title, &mut labels.time_title),
            (&src.year_suffix, &mut labels.year_suffix),
            (&src.month_suffix, &mut labels.month_suffix),
            (&src.day_suffix, &mut labels.day_suffix),
            (&src.separator, &mut labels.separator),
        ] {
            if let Some(value) = value {
                slot.clone_from(value);
            }
        }
    }
}

pub fn get_settings_path() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

pub fn get_log_dir() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(SETTINGS_DIR).join(LOG_DIR))
}

pub fn ensure_log_dir() -> io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "Cannot determine log directory")
    })?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub fn ensure_settings_file() -> io::Result<PathBuf> {
    let path = get_settings_path().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Cannot determine settings directory",
        )
    })?;
    write_default_settings(&path)?;
    Ok(path)
}

/// Writes the default settings to `path` unless a file is already there.
pub fn write_default_settings(path: &Path) -> io::Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(&Settings::from_config(&PickerConfig::default()))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, content)
}

pub fn load_settings_from(path: &Path) -> io::Result<Settings> {
    let data = std::fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

pub fn load_settings() -> Option<Settings> {
    let path = get_settings_path()?;
    match load_settings_from(&path) {
        Ok(settings) => Some(settings),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "settings unreadable, using defaults");
            None
        }
    }
}

fn get_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Caches"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".cache"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            return Some(PathBuf::from(local));
        }
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/services/settings.rs"]
mod tests;
