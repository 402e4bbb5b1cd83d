//! Доменная модель игры «Самозванец»: игроки, категории слов, состояние раунда,
//! реестр игр приложения.

pub mod category;
pub mod game;
pub mod games;
pub mod player;

// Базовые идентификаторы
pub type PlayerId = u32;
pub type CategoryId = String;
pub type SessionId = String;

/// Минимум игроков для раунда.
pub const MIN_PLAYERS: usize = 3;
/// Максимум игроков (ограничение экрана ввода имён).
pub const MAX_PLAYERS: usize = 12;

pub use category::*;
pub use game::*;
pub use games::*;
pub use player::*;
