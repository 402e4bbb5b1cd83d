use serde::Serialize;

/// Описание игры в каталоге приложения.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct GameInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub min_players: usize,
    pub max_players: usize,
    pub icon: &'static str,
}

impl GameInfo {
    pub fn supports_player_count(&self, count: usize) -> bool {
        count >= self.min_players && count <= self.max_players
    }
}

pub const IMPOSTOR_GAME_ID: &str = "impostor";
pub const IMPOSTOR_GAME_NAME: &str = "The Impostor";

/// Реестр доступных игр. Новая игра = новая запись здесь.
pub static GAMES: &[GameInfo] = &[GameInfo {
    id: IMPOSTOR_GAME_ID,
    name: IMPOSTOR_GAME_NAME,
    description: "Find who doesn't know the secret word",
    min_players: super::MIN_PLAYERS,
    max_players: super::MAX_PLAYERS,
    icon: "eye-off",
}];

pub fn game_by_id(id: &str) -> Option<&'static GameInfo> {
    GAMES.iter().find(|g| g.id == id)
}

pub fn all_games() -> &'static [GameInfo] {
    GAMES
}

/// Игры, в которые можно играть указанным числом игроков.
pub fn games_for_player_count(count: usize) -> Vec<&'static GameInfo> {
    GAMES
        .iter()
        .filter(|g| g.supports_player_count(count))
        .collect()
}
