use serde::{Deserialize, Serialize};

use crate::domain::game::GameState;
use crate::domain::player::Player;
use crate::engine;

use super::dto::{ResultsViewDto, RoundProgressDto, SecretCardDto, TurnViewDto};

/// Запросы "только чтение".
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Карточка текущего игрока.
    CurrentTurn,
    /// Сколько игроков уже посмотрели.
    Progress,
    /// Итоги раунда.
    Results,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    /// `None`, когда фаза показа закончилась.
    CurrentTurn(Option<TurnViewDto>),
    Progress(RoundProgressDto),
    Results(ResultsViewDto),
}

pub fn answer(state: &GameState, query: Query) -> QueryResponse {
    match query {
        Query::CurrentTurn => QueryResponse::CurrentTurn(build_turn_view(state)),
        Query::Progress => QueryResponse::Progress(build_progress(state)),
        Query::Results => QueryResponse::Results(build_results_view(state)),
    }
}

/// Сформировать DTO текущего хода. `None`, если текущего игрока нет.
pub fn build_turn_view(state: &GameState) -> Option<TurnViewDto> {
    let player = engine::current_player(state)?;

    Some(TurnViewDto {
        player_id: player.id,
        player_name: player.name.clone(),
        position: state.current_player_index + 1,
        total_players: state.player_count(),
        category_name: state.category_name.clone(),
        card: secret_card(player),
        has_revealed: player.has_revealed,
    })
}

pub fn build_progress(state: &GameState) -> RoundProgressDto {
    let (revealed, total) = engine::progress(state);
    RoundProgressDto {
        revealed,
        total,
        ready_for_discussion: engine::all_revealed(state),
    }
}

pub fn build_results_view(state: &GameState) -> ResultsViewDto {
    ResultsViewDto {
        category_name: state.category_name.clone(),
        secret_word: state.secret_word.clone(),
        impostors: names(engine::impostors(state)),
        regular_players: names(engine::regular_players(state)),
    }
}

fn names(players: Vec<&Player>) -> Vec<String> {
    players.into_iter().map(|p| p.name.clone()).collect()
}

fn secret_card(player: &Player) -> SecretCardDto {
    match (&player.word, player.is_impostor) {
        (Some(word), false) => SecretCardDto::Word(word.clone()),
        _ => SecretCardDto::Impostor,
    }
}
