use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::{SetupError, ValidationError};
use crate::infra::persistence::StorageError;

/// Ошибки внешнего API (то, что показываем пользователю).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Раунд не создан: мало игроков, плохое число самозванцев, нет категории/слов.
    #[error("Раунд не создан: {0}")]
    InvalidSetup(String),

    /// Ввод не прошёл проверку экрана настройки.
    #[error("Неверный ввод: {0}")]
    InvalidInput(String),

    /// Команда хода пришла, а активного раунда нет.
    #[error("Нет активного раунда")]
    NoActiveGame,

    /// Обсуждение нельзя начать, пока не все посмотрели карточки.
    #[error("Не все игроки посмотрели карточки")]
    RevealNotFinished,

    /// Не удалось записать историю/настройки.
    #[error("Ошибка хранилища: {0}")]
    Storage(String),
}

impl From<SetupError> for ApiError {
    fn from(err: SetupError) -> Self {
        ApiError::InvalidSetup(err.to_string())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError::Storage(err.to_string())
    }
}
