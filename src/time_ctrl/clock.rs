// src/time_ctrl/clock.rs
//! Обратный отсчёт обсуждения.

use serde::{Deserialize, Serialize};

/// Состояние таймера обсуждения.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiscussionTimer {
    /// Полная длительность в секундах.
    pub duration_secs: u32,
    /// Сколько секунд осталось.
    pub remaining_secs: u32,
    /// Идёт ли отсчёт (false до старта, на паузе и после окончания).
    pub running: bool,
    /// `Completed` уже сообщён.
    #[serde(default)]
    pub completed: bool,
}

/// Результат "протекания" времени.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimerEvent {
    /// Таймер не запущен или на паузе, время не списывалось.
    Idle,
    /// Отсчёт идёт дальше.
    Running { remaining: u32 },
    /// Время вышло на этом тике. Сообщается ровно один раз.
    Completed,
}

/// Насколько мало осталось времени (UI красит табло по этому значению).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimerUrgency {
    /// Больше половины.
    Calm,
    /// Больше 20%.
    Warning,
    Critical,
}

impl DiscussionTimer {
    pub fn new(duration_secs: u32) -> Self {
        Self {
            duration_secs,
            remaining_secs: duration_secs,
            running: false,
            completed: false,
        }
    }

    /// Запустить отсчёт. Закончившийся таймер не перезапускается, для этого есть `reset`.
    ///
    /// Таймер нулевой длительности тоже запускается и сообщает `Completed` на первом тике.
    pub fn start(&mut self) {
        if !self.completed {
            self.running = true;
        }
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Новая длительность, отсчёт остановлен.
    pub fn reset(&mut self, duration_secs: u32) {
        self.duration_secs = duration_secs;
        self.remaining_secs = duration_secs;
        self.running = false;
        self.completed = false;
    }

    /// Списать `delta_secs` секунд.
    pub fn tick(&mut self, delta_secs: u32) -> TimerEvent {
        if !self.running {
            return TimerEvent::Idle;
        }

        if delta_secs >= self.remaining_secs {
            self.remaining_secs = 0;
            self.running = false;
            self.completed = true;
            return TimerEvent::Completed;
        }

        self.remaining_secs -= delta_secs;
        TimerEvent::Running {
            remaining: self.remaining_secs,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.completed
    }

    pub fn urgency(&self) -> TimerUrgency {
        // remaining / duration > 50% без деления
        let left = u64::from(self.remaining_secs) * 100;
        let total = u64::from(self.duration_secs);

        if left > 50 * total {
            TimerUrgency::Calm
        } else if left > 20 * total {
            TimerUrgency::Warning
        } else {
            TimerUrgency::Critical
        }
    }
}
