use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;

/// Игрок в конкретном раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    /// Стабильный id: позиция имени во входном списке.
    pub id: PlayerId,
    /// Имя как его ввёл пользователь.
    pub name: String,
    pub is_impostor: bool,
    /// Секретное слово; у самозванца всегда `None`.
    pub word: Option<String>,
    /// Игрок уже посмотрел свою карточку.
    pub has_revealed: bool,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_impostor: false,
            word: None,
            has_revealed: false,
        }
    }

    /// Внешний строковый id в формате `player-N`.
    pub fn external_id(&self) -> String {
        format!("player-{}", self.id)
    }

    pub fn is_regular(&self) -> bool {
        !self.is_impostor
    }
}
