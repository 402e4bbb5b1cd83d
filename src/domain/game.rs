use serde::{Deserialize, Serialize};

use crate::domain::player::Player;
use crate::domain::CategoryId;

/// Состояние одного раунда «Самозванца».
///
/// Значение неизменяемое с точки зрения движка: каждая операция
/// (`reveal_current`, `advance`, ...) возвращает новое состояние.
/// Хранит его вызывающий слой (UI, CLI, тесты).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameState {
    /// Порядок = порядок ходов в фазе показа. После создания не меняется.
    pub players: Vec<Player>,
    pub category_id: CategoryId,
    pub category_name: String,
    /// Секретное слово раунда, выбирается один раз.
    pub secret_word: String,
    pub impostor_count: usize,
    /// Курсор хода. Когда равен `players.len()`, текущего игрока нет.
    pub current_player_index: usize,
    pub game_started: bool,
    /// Выставляется внешним слоем, логика показа его не читает.
    pub game_ended: bool,
    pub is_custom_category: bool,
    pub custom_words: Option<Vec<String>>,
}

impl GameState {
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn player_names(&self) -> Vec<String> {
        self.players.iter().map(|p| p.name.clone()).collect()
    }
}

/// Фаза раунда с точки зрения ядра.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundPhase {
    NotStarted,
    /// Идёт показ карточек, `cursor`: чей ход.
    Revealing { cursor: usize },
    /// Курсор ушёл за последнего игрока. Дальше обсуждение (его ведёт UI).
    RevealDone,
}
