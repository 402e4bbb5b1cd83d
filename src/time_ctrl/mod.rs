// src/time_ctrl/mod.rs
//! Контроль времени фазы обсуждения.
//!
//! Таймер чистый: время ему сообщает вызывающий код (`tick(delta_secs)`),
//! своих потоков и часов у него нет.

pub mod clock;

pub use clock::{DiscussionTimer, TimerEvent, TimerUrgency};

/// Формат `m:ss` для табло таймера.
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
