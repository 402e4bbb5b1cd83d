//! Фаза показа карточек: игроки по очереди смотрят свою роль на одном устройстве.
//!
//! Все функции тотальные: на любом достижимом состоянии не падают и не возвращают ошибок.

use crate::domain::game::{GameState, RoundPhase};
use crate::domain::player::Player;

/// Игрок, чей сейчас ход, или `None`, если курсор ушёл за последнего.
pub fn current_player(state: &GameState) -> Option<&Player> {
    state.players.get(state.current_player_index)
}

/// Пометить текущего игрока как посмотревшего карточку. Курсор не двигается,
/// чтобы UI успел показать открытую карточку.
pub fn reveal_current(state: &GameState) -> GameState {
    let cursor = state.current_player_index;

    let players = state
        .players
        .iter()
        .enumerate()
        .map(|(idx, player)| {
            if idx == cursor {
                Player {
                    has_revealed: true,
                    ..player.clone()
                }
            } else {
                player.clone()
            }
        })
        .collect();

    log::debug!("Игрок на позиции {} посмотрел карточку", cursor);

    GameState {
        players,
        ..state.clone()
    }
}

/// Сдвинуть курсор на одного игрока.
///
/// Границу не проверяем: выход за `players.len()` и есть сигнал конца фазы.
/// Повторные вызовы после конца просто растят курсор, `current_player` остаётся `None`.
pub fn advance(state: &GameState) -> GameState {
    GameState {
        current_player_index: state.current_player_index.saturating_add(1),
        ..state.clone()
    }
}

/// Кнопка «дальше» на экране показа: отметить текущего и передать ход.
pub fn finish_turn(state: &GameState) -> GameState {
    advance(&reveal_current(state))
}

/// Все ли игроки посмотрели карточки. От курсора не зависит.
pub fn all_revealed(state: &GameState) -> bool {
    state.players.iter().all(|p| p.has_revealed)
}

/// Самозванцы в порядке ходов.
pub fn impostors(state: &GameState) -> Vec<&Player> {
    state.players.iter().filter(|p| p.is_impostor).collect()
}

/// Обычные игроки (держатели слова) в порядке ходов.
pub fn regular_players(state: &GameState) -> Vec<&Player> {
    state.players.iter().filter(|p| !p.is_impostor).collect()
}

pub fn phase(state: &GameState) -> RoundPhase {
    if !state.game_started {
        RoundPhase::NotStarted
    } else if state.current_player_index < state.players.len() {
        RoundPhase::Revealing {
            cursor: state.current_player_index,
        }
    } else {
        RoundPhase::RevealDone
    }
}

/// Сколько игроков уже посмотрели карточки и сколько их всего.
pub fn progress(state: &GameState) -> (usize, usize) {
    let revealed = state.players.iter().filter(|p| p.has_revealed).count();
    (revealed, state.players.len())
}

/// Завершить раунд (флаг для внешнего слоя, логика показа его не использует).
pub fn end_game(state: &GameState) -> GameState {
    GameState {
        game_ended: true,
        ..state.clone()
    }
}
