//! Движок партийной игры «Самозванец» (The Impostor).
//!
//! Игроки по очереди берут одно устройство: каждый тайком видит либо общее
//! секретное слово, либо метку самозванца, потом все обсуждают и ищут самозванцев.
//!
//! Слои:
//! - `domain`: игроки, категории слов, состояние раунда, каталог игр;
//! - `engine`: чистые операции над состоянием (раздача ролей, показ карточек);
//! - `infra`: RNG, key-value хранилище, генерация id, маппинги;
//! - `storage`: настройки, история раундов, недавние игроки;
//! - `time_ctrl`: таймер обсуждения;
//! - `api`: команды/запросы/DTO для экранов;
//! - `state`: владелец состояния партии на устройстве.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod state;
pub mod storage;
pub mod time_ctrl;

pub use domain::{GameState, Player, RoundPhase};
pub use engine::{RandomSource, SetupError};
pub use state::PartyState;
