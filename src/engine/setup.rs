use crate::domain::category::{category_by_id, CUSTOM_CATEGORY_ID, CUSTOM_CATEGORY_NAME};
use crate::domain::game::GameState;
use crate::domain::player::Player;
use crate::domain::{PlayerId, MIN_PLAYERS};
use crate::engine::errors::SetupError;
use crate::engine::RandomSource;

/// Игроки в порядке ввода: все обычные, без слова, карточка не показана.
pub fn create_players<S: AsRef<str>>(player_names: &[S]) -> Vec<Player> {
    player_names
        .iter()
        .enumerate()
        .map(|(idx, name)| Player::new(idx as PlayerId, name.as_ref()))
        .collect()
}

/// Перемешать игроков и пометить первых `impostor_count` самозванцами.
///
/// Возвращается перемешанный порядок: он же порядок ходов,
/// так что первый показывающий тоже выбирается случайно.
pub fn assign_impostors<R: RandomSource>(
    players: Vec<Player>,
    impostor_count: usize,
    rng: &mut R,
) -> Vec<Player> {
    let mut shuffled = players;
    rng.shuffle(&mut shuffled);

    shuffled
        .into_iter()
        .enumerate()
        .map(|(idx, player)| Player {
            is_impostor: idx < impostor_count,
            ..player
        })
        .collect()
}

/// Раздать слово всем, кроме самозванцев.
pub fn distribute_words(players: Vec<Player>, secret_word: &str) -> Vec<Player> {
    players
        .into_iter()
        .map(|player| {
            let word = if player.is_impostor {
                None
            } else {
                Some(secret_word.to_string())
            };
            Player { word, ..player }
        })
        .collect()
}

/// Выбрать секретное слово и имя категории.
///
/// Для своей категории слово тянется из `custom_words`, `category_id` игнорируется.
pub fn draw_secret_word<R: RandomSource, S: AsRef<str>>(
    category_id: &str,
    is_custom_category: bool,
    custom_words: Option<&[S]>,
    rng: &mut R,
) -> Result<(String, String), SetupError> {
    if is_custom_category {
        let words = custom_words.unwrap_or(&[]);
        let word = rng.choose(words).ok_or(SetupError::EmptyWordSource)?;
        return Ok((word.as_ref().to_string(), CUSTOM_CATEGORY_NAME.to_string()));
    }

    let category = category_by_id(category_id)
        .ok_or_else(|| SetupError::UnknownCategory(category_id.to_string()))?;
    let word = rng.choose(category.words).ok_or(SetupError::EmptyWordSource)?;

    Ok((word.to_string(), category.name.to_string()))
}

/// Создать новый раунд.
///
/// Проверки (всё или ничего):
/// - игроков не меньше `MIN_PLAYERS`;
/// - `1 <= impostor_count < player_names.len()`;
/// - категория находится и в ней есть слова.
///
/// Дубликаты имён и правило «самозванцев меньше половины» здесь НЕ проверяются,
/// это делает вызывающий слой (см. `engine::validation`).
pub fn initialize<R: RandomSource, S: AsRef<str>>(
    player_names: &[S],
    category_id: &str,
    impostor_count: usize,
    is_custom_category: bool,
    custom_words: Option<&[S]>,
    rng: &mut R,
) -> Result<GameState, SetupError> {
    let players_total = player_names.len();

    if players_total < MIN_PLAYERS {
        return Err(SetupError::NotEnoughPlayers {
            got: players_total,
            min: MIN_PLAYERS,
        });
    }
    if impostor_count == 0 || impostor_count >= players_total {
        return Err(SetupError::ImpostorCountOutOfRange {
            impostors: impostor_count,
            players: players_total,
        });
    }

    let (secret_word, category_name) =
        draw_secret_word(category_id, is_custom_category, custom_words, rng)?;

    let players = create_players(player_names);
    let players = assign_impostors(players, impostor_count, rng);
    let players = distribute_words(players, &secret_word);

    let (category_id, custom_words) = if is_custom_category {
        let words = custom_words
            .unwrap_or(&[])
            .iter()
            .map(|w| w.as_ref().to_string())
            .collect();
        (CUSTOM_CATEGORY_ID.to_string(), Some(words))
    } else {
        (category_id.to_string(), None)
    };

    log::info!(
        "Раунд создан: игроков={}, самозванцев={}, категория={}",
        players_total,
        impostor_count,
        category_id
    );

    Ok(GameState {
        players,
        category_id,
        category_name,
        secret_word,
        impostor_count,
        current_player_index: 0,
        game_started: true,
        game_ended: false,
        is_custom_category,
        custom_words,
    })
}
