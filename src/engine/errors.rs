use thiserror::Error;

/// Ошибки создания раунда. Раунд либо создаётся целиком, либо не создаётся вовсе.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("Недостаточно игроков: {got}, нужно минимум {min}")]
    NotEnoughPlayers { got: usize, min: usize },

    #[error("Недопустимое число самозванцев {impostors} при {players} игроках")]
    ImpostorCountOutOfRange { impostors: usize, players: usize },

    #[error("Категория {0} не найдена")]
    UnknownCategory(String),

    #[error("Не из чего выбрать секретное слово")]
    EmptyWordSource,
}

/// Ошибки проверки ввода на стороне вызывающего слоя (экран настройки раунда).
/// Движок их не выдаёт: `initialize` проверяет только минимум.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Пустое имя игрока на позиции {position}")]
    EmptyName { position: usize },

    #[error("Имя {0} уже есть в списке")]
    DuplicateName(String),

    #[error("Слишком мало игроков: {got}, нужно минимум {min}")]
    TooFewPlayers { got: usize, min: usize },

    #[error("Слишком много игроков: {got}, максимум {max}")]
    TooManyPlayers { got: usize, max: usize },

    #[error("Слишком много самозванцев: {impostors}, максимум {max}")]
    TooManyImpostors { impostors: usize, max: usize },

    #[error("Недостаточно слов в своей категории: {got}, нужно минимум {min}")]
    NotEnoughCustomWords { got: usize, min: usize },
}
