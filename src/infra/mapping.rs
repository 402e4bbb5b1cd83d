use chrono::{DateTime, Utc};

use crate::domain::game::GameState;
use crate::domain::games::{IMPOSTOR_GAME_ID, IMPOSTOR_GAME_NAME};
use crate::domain::SessionId;
use crate::storage::GameSession;

/// Маппинг законченного раунда в запись истории.
///
/// Полное состояние раунда не сохраняется: только id, имена игроков, время и длительность.
pub fn session_from_game(
    state: &GameState,
    id: SessionId,
    now: DateTime<Utc>,
    duration_secs: Option<u32>,
) -> GameSession {
    GameSession {
        id,
        game_id: IMPOSTOR_GAME_ID.to_string(),
        game_name: IMPOSTOR_GAME_NAME.to_string(),
        players: state.player_names(),
        date: now,
        duration: duration_secs,
    }
}
