//! Типизированные хранилища приложения поверх `KeyValueStore`:
//! - настройки (settings.rs);
//! - история сыгранных раундов (history.rs);
//! - недавние имена игроков (recent_players.rs).
//!
//! Ядро игры сюда не ходит. Пишет и читает только владеющий слой (`state::PartyState`, CLI).

pub mod history;
pub mod recent_players;
pub mod settings;

pub use history::{GameSession, HISTORY_LIMIT};
pub use recent_players::RECENT_PLAYERS_LIMIT;
pub use settings::{AppSettings, SettingsPatch, ThemePreference, DEFAULT_TIMER_SECS};

use crate::infra::persistence::{KeyValueStore, StorageError};

/// Ключи в key-value хранилище.
pub mod keys {
    pub const SETTINGS: &str = "@party_games_settings";
    pub const GAME_HISTORY: &str = "@party_games_history";
    pub const RECENT_PLAYERS: &str = "@party_games_recent_players";

    pub const ALL: [&str; 3] = [SETTINGS, GAME_HISTORY, RECENT_PLAYERS];
}

/// Фасад над key-value хранилищем. Методы разнесены по модулям этого каталога.
#[derive(Debug, Default)]
pub struct PartyStorage<S: KeyValueStore> {
    kv: S,
}

impl<S: KeyValueStore> PartyStorage<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    pub fn kv(&self) -> &S {
        &self.kv
    }

    pub fn kv_mut(&mut self) -> &mut S {
        &mut self.kv
    }

    pub fn into_inner(self) -> S {
        self.kv
    }

    /// Стереть все данные приложения (настройки, историю, недавних игроков).
    pub fn clear_all_data(&mut self) -> Result<(), StorageError> {
        self.kv.multi_remove(&keys::ALL).map_err(|err| {
            log::error!("Не удалось очистить данные приложения: {}", err);
            err
        })
    }
}
