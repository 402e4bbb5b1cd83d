use std::collections::HashSet;

use crate::domain::category::MIN_CUSTOM_WORDS;
use crate::domain::{MAX_PLAYERS, MIN_PLAYERS};
use crate::engine::errors::ValidationError;

/// Проверка списка имён перед стартом раунда (экран ввода игроков).
///
/// Возвращает обрезанные имена в исходном порядке.
/// Дубликаты сравниваются без учёта регистра.
pub fn validate_player_names<S: AsRef<str>>(names: &[S]) -> Result<Vec<String>, ValidationError> {
    let mut seen = HashSet::new();
    let mut cleaned = Vec::with_capacity(names.len());

    for (position, raw) in names.iter().enumerate() {
        let name = raw.as_ref().trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName { position });
        }
        if !seen.insert(name.to_lowercase()) {
            return Err(ValidationError::DuplicateName(name.to_string()));
        }
        cleaned.push(name.to_string());
    }

    if cleaned.len() < MIN_PLAYERS {
        return Err(ValidationError::TooFewPlayers {
            got: cleaned.len(),
            min: MIN_PLAYERS,
        });
    }
    if cleaned.len() > MAX_PLAYERS {
        return Err(ValidationError::TooManyPlayers {
            got: cleaned.len(),
            max: MAX_PLAYERS,
        });
    }

    Ok(cleaned)
}

/// Проверка своей категории: минимум `MIN_CUSTOM_WORDS` непустых слов.
///
/// Возвращает обрезанные слова без пустых, в исходном порядке.
pub fn validate_custom_words<S: AsRef<str>>(words: &[S]) -> Result<Vec<String>, ValidationError> {
    let cleaned: Vec<String> = words
        .iter()
        .map(|w| w.as_ref().trim())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect();

    if cleaned.len() < MIN_CUSTOM_WORDS {
        return Err(ValidationError::NotEnoughCustomWords {
            got: cleaned.len(),
            min: MIN_CUSTOM_WORDS,
        });
    }
    Ok(cleaned)
}

/// Самозванцев не больше, чем разрешает счётчик экрана (`max_recommended_impostors`).
/// Ноль здесь не ловится: его отвергает `initialize`.
pub fn validate_impostor_count(impostor_count: usize, player_count: usize) -> Result<(), ValidationError> {
    let max = max_recommended_impostors(player_count);
    if impostor_count > max {
        return Err(ValidationError::TooManyImpostors {
            impostors: impostor_count,
            max,
        });
    }
    Ok(())
}

/// Верхняя граница счётчика самозванцев на экране выбора категории:
/// `floor(n / 2) - 1`, но не меньше одного.
pub fn max_recommended_impostors(player_count: usize) -> usize {
    (player_count / 2).saturating_sub(1).max(1)
}

/// Зажать запрошенное число самозванцев в `[1, max_recommended_impostors(n)]`.
pub fn clamp_impostor_count(requested: usize, player_count: usize) -> usize {
    requested.clamp(1, max_recommended_impostors(player_count))
}
