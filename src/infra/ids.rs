use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};

use crate::domain::SessionId;

/// Генерация id записей истории: метка времени в миллисекундах
/// плюс монотонный счётчик, чтобы два раунда в одну миллисекунду не склеились.
#[derive(Debug)]
pub struct IdGenerator {
    session_counter: AtomicU64,
}

impl IdGenerator {
    /// Создать генератор со счётчиком, начинающимся с 1.
    pub fn new() -> Self {
        Self {
            session_counter: AtomicU64::new(1),
        }
    }

    pub fn next_session_id(&self, now: DateTime<Utc>) -> SessionId {
        let n = self.session_counter.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", now.timestamp_millis(), n)
    }

    /// Сколько id уже выдано.
    pub fn issued(&self) -> u64 {
        self.session_counter.load(Ordering::Relaxed) - 1
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
