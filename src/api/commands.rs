use serde::{Deserialize, Serialize};

use crate::domain::category::CUSTOM_CATEGORY_ID;
use crate::domain::game::GameState;
use crate::engine::{self, RandomSource};

use super::errors::ApiError;

/// Выбор категории на экране (API-слой).
///
/// В движке это тройка `(category_id, is_custom_category, custom_words)`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CategoryChoice {
    /// Встроенная категория по id.
    BuiltIn(String),
    /// Свои слова, уже разобранные и обрезанные.
    Custom(Vec<String>),
}

/// Команда старта раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StartGameCommand {
    pub player_names: Vec<String>,
    pub category: CategoryChoice,
    pub impostor_count: usize,
}

/// Команды экранов. Каждая возвращает новое состояние раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    StartGame(StartGameCommand),
    /// Показать карточку текущего игрока (курсор не двигается).
    RevealCurrent,
    /// Передать ход следующему.
    NextPlayer,
    /// Кнопка «дальше»: RevealCurrent + NextPlayer.
    FinishTurn,
    EndGame,
}

/// Запустить раунд по команде старта.
pub fn start_game<R: RandomSource>(
    cmd: &StartGameCommand,
    rng: &mut R,
) -> Result<GameState, ApiError> {
    let state = match &cmd.category {
        CategoryChoice::BuiltIn(category_id) => engine::initialize(
            &cmd.player_names,
            category_id,
            cmd.impostor_count,
            false,
            None,
            rng,
        )?,
        CategoryChoice::Custom(words) => engine::initialize(
            &cmd.player_names,
            CUSTOM_CATEGORY_ID,
            cmd.impostor_count,
            true,
            Some(words.as_slice()),
            rng,
        )?,
    };
    Ok(state)
}

/// Выполнить команду над текущим состоянием (если оно есть).
///
/// `StartGame` всегда создаёт новый раунд, остальные команды требуют активного.
pub fn execute<R: RandomSource>(
    current: Option<&GameState>,
    command: &Command,
    rng: &mut R,
) -> Result<GameState, ApiError> {
    match command {
        Command::StartGame(cmd) => start_game(cmd, rng),
        Command::RevealCurrent => current
            .map(engine::reveal_current)
            .ok_or(ApiError::NoActiveGame),
        Command::NextPlayer => current.map(engine::advance).ok_or(ApiError::NoActiveGame),
        Command::FinishTurn => current
            .map(engine::finish_turn)
            .ok_or(ApiError::NoActiveGame),
        Command::EndGame => current.map(engine::end_game).ok_or(ApiError::NoActiveGame),
    }
}
