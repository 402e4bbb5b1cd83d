use std::collections::HashSet;

use crate::infra::persistence::{load_json, save_json, KeyValueStore, StorageError};

use super::{keys, PartyStorage};

/// Сколько недавних имён храним.
pub const RECENT_PLAYERS_LIMIT: usize = 20;

impl<S: KeyValueStore> PartyStorage<S> {
    /// Недавние имена, последние добавленные первыми. При ошибке чтения: пусто.
    pub fn recent_players(&self) -> Vec<String> {
        match load_json::<Vec<String>, _>(&self.kv, keys::RECENT_PLAYERS) {
            Ok(names) => names.unwrap_or_default(),
            Err(err) => {
                log::error!("Ошибка загрузки недавних игроков: {}", err);
                Vec::new()
            }
        }
    }

    /// Новые имена встают в начало, повторы убираются (остаётся первое вхождение),
    /// список обрезается до `RECENT_PLAYERS_LIMIT`.
    pub fn add_recent_players<N: AsRef<str>>(&mut self, names: &[N]) -> Result<(), StorageError> {
        let recent = self.recent_players();

        let mut seen = HashSet::new();
        let updated: Vec<String> = names
            .iter()
            .map(|n| n.as_ref().to_string())
            .chain(recent)
            .filter(|n| seen.insert(n.clone()))
            .take(RECENT_PLAYERS_LIMIT)
            .collect();

        save_json(&mut self.kv, keys::RECENT_PLAYERS, &updated).map_err(|err| {
            log::error!("Ошибка сохранения недавних игроков: {}", err);
            err
        })
    }

    pub fn clear_recent_players(&mut self) -> Result<(), StorageError> {
        save_json(&mut self.kv, keys::RECENT_PLAYERS, &Vec::<String>::new())
    }
}
