use serde::{Deserialize, Serialize};

use crate::infra::persistence::{load_json, save_json, KeyValueStore, StorageError};

use super::{keys, PartyStorage};

/// Длительность обсуждения по умолчанию: 3 минуты.
pub const DEFAULT_TIMER_SECS: u32 = 180;

/// Тема оформления.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    Auto,
}

/// Настройки приложения.
///
/// `#[serde(default)]`: отсутствующие в сохранённом JSON поля берутся из `Default`,
/// так старые сохранения читаются и после добавления новых настроек.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct AppSettings {
    pub sound_enabled: bool,
    pub haptics_enabled: bool,
    pub keep_screen_awake: bool,
    pub theme: ThemePreference,
    /// Длительность обсуждения в секундах.
    pub default_timer_duration: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            haptics_enabled: true,
            keep_screen_awake: true,
            theme: ThemePreference::Auto,
            default_timer_duration: DEFAULT_TIMER_SECS,
        }
    }
}

/// Частичное обновление настроек: `None` = не трогать.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    pub sound_enabled: Option<bool>,
    pub haptics_enabled: Option<bool>,
    pub keep_screen_awake: Option<bool>,
    pub theme: Option<ThemePreference>,
    pub default_timer_duration: Option<u32>,
}

impl SettingsPatch {
    pub fn apply(&self, base: &AppSettings) -> AppSettings {
        AppSettings {
            sound_enabled: self.sound_enabled.unwrap_or(base.sound_enabled),
            haptics_enabled: self.haptics_enabled.unwrap_or(base.haptics_enabled),
            keep_screen_awake: self.keep_screen_awake.unwrap_or(base.keep_screen_awake),
            theme: self.theme.unwrap_or(base.theme),
            default_timer_duration: self
                .default_timer_duration
                .unwrap_or(base.default_timer_duration),
        }
    }
}

impl<S: KeyValueStore> PartyStorage<S> {
    /// Текущие настройки. При любой ошибке чтения: значения по умолчанию.
    pub fn load_settings(&self) -> AppSettings {
        match load_json::<AppSettings, _>(&self.kv, keys::SETTINGS) {
            Ok(Some(settings)) => settings,
            Ok(None) => AppSettings::default(),
            Err(err) => {
                log::error!("Ошибка загрузки настроек: {}", err);
                AppSettings::default()
            }
        }
    }

    /// Применить патч поверх текущих настроек и сохранить. Возвращает итог.
    pub fn save_settings(&mut self, patch: &SettingsPatch) -> Result<AppSettings, StorageError> {
        let updated = patch.apply(&self.load_settings());
        save_json(&mut self.kv, keys::SETTINGS, &updated).map_err(|err| {
            log::error!("Ошибка сохранения настроек: {}", err);
            err
        })?;
        Ok(updated)
    }

    pub fn reset_settings(&mut self) -> Result<(), StorageError> {
        save_json(&mut self.kv, keys::SETTINGS, &AppSettings::default())
    }
}
