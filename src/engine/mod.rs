//! Движок «Самозванца»: раздача ролей и секретного слова, пошаговый показ карточек.
//!
//! Основные операции:
//!   - `initialize`: создать раунд (роли + слово)
//!   - `current_player` / `reveal_current` / `advance`: цикл показа
//!   - `all_revealed`: все ли посмотрели карточки
//!   - `impostors` / `regular_players`: итоги раунда
//!
//! Все операции чистые: принимают состояние и возвращают новое.

pub mod errors;
pub mod reveal;
pub mod setup;
pub mod validation;

pub use errors::{SetupError, ValidationError};
pub use reveal::{
    advance, all_revealed, current_player, end_game, finish_turn, impostors, phase, progress,
    regular_players, reveal_current,
};
pub use setup::{assign_impostors, create_players, distribute_words, draw_secret_word, initialize};
pub use validation::{
    clamp_impostor_count, max_recommended_impostors, validate_custom_words, validate_impostor_count,
    validate_player_names,
};

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand`), в тестах можно подсунуть свою.
pub trait RandomSource {
    /// Равномерный индекс в `[0, upper)`. Вызывается только с `upper > 0`.
    fn gen_index(&mut self, upper: usize) -> usize;

    /// Fisher-Yates: i от последнего до 1, j равномерно в `[0, i]`, обмен i и j.
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.gen_index(i + 1);
            slice.swap(i, j);
        }
    }

    /// Случайный элемент среза или `None`, если срез пуст.
    fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            return None;
        }
        let idx = self.gen_index(slice.len());
        slice.get(idx)
    }
}
