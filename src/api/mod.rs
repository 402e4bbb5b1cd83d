//! Внешний API движка для экранов приложения.
//!
//! Здесь описываются:
//! - команды (commands.rs): всё, что порождает новое состояние раунда;
//! - запросы (queries.rs): только чтение;
//! - DTO (dto.rs): удобные структуры для экранов;
//! - ошибки (errors.rs): то, что видит экран.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
