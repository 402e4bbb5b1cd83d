use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;

/// Что видит игрок, открыв свою карточку.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SecretCardDto {
    /// Обычный игрок видит секретное слово.
    Word(String),
    /// Самозванец видит только метку.
    Impostor,
}

/// DTO текущего хода на экране показа.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnViewDto {
    pub player_id: PlayerId,
    pub player_name: String,
    /// Номер хода с единицы ("2 of 5").
    pub position: usize,
    pub total_players: usize,
    pub category_name: String,
    pub card: SecretCardDto,
    pub has_revealed: bool,
}

/// DTO прогресса фазы показа.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundProgressDto {
    pub revealed: usize,
    pub total: usize,
    /// Все посмотрели: можно начинать обсуждение.
    pub ready_for_discussion: bool,
}

/// DTO итогов раунда (экран разоблачения).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultsViewDto {
    pub category_name: String,
    pub secret_word: String,
    pub impostors: Vec<String>,
    pub regular_players: Vec<String>,
}
