use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::SessionId;
use crate::infra::persistence::{load_json, save_json, KeyValueStore, StorageError};

use super::{keys, PartyStorage};

/// Сколько последних раундов храним.
pub const HISTORY_LIMIT: usize = 50;

/// Запись истории: итог одного сыгранного раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    pub id: SessionId,
    pub game_id: String,
    pub game_name: String,
    pub players: Vec<String>,
    pub date: DateTime<Utc>,
    /// Длительность обсуждения в секундах.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

impl<S: KeyValueStore> PartyStorage<S> {
    /// Вся история, самые свежие раунды первыми. При ошибке чтения: пустой список.
    pub fn history(&self) -> Vec<GameSession> {
        match load_json::<Vec<GameSession>, _>(&self.kv, keys::GAME_HISTORY) {
            Ok(history) => history.unwrap_or_default(),
            Err(err) => {
                log::error!("Ошибка загрузки истории: {}", err);
                Vec::new()
            }
        }
    }

    /// Добавить раунд в начало истории, оставив не больше `HISTORY_LIMIT` записей.
    pub fn add_session(&mut self, session: GameSession) -> Result<(), StorageError> {
        let mut history = self.history();
        history.insert(0, session);
        history.truncate(HISTORY_LIMIT);

        save_json(&mut self.kv, keys::GAME_HISTORY, &history).map_err(|err| {
            log::error!("Ошибка записи раунда в историю: {}", err);
            err
        })
    }

    pub fn clear_history(&mut self) -> Result<(), StorageError> {
        save_json(&mut self.kv, keys::GAME_HISTORY, &Vec::<GameSession>::new())
    }

    /// История одной игры из каталога.
    pub fn history_for_game(&self, game_id: &str) -> Vec<GameSession> {
        self.history()
            .into_iter()
            .filter(|s| s.game_id == game_id)
            .collect()
    }
}
