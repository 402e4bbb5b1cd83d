//! Инфраструктурный слой вокруг движка:
//! - генерация ID записей истории;
//! - RNG-реализации для движка;
//! - абстракция key-value хранилища (in-memory / файлы);
//! - маппинг раунда в запись истории.

pub mod ids;
pub mod mapping;
pub mod persistence;
pub mod rng;
pub mod rng_seed;

pub use ids::*;
pub use mapping::*;
pub use persistence::{InMemoryKeyValueStore, JsonFileStore, KeyValueStore, StorageError};
pub use rng::*;
pub use rng_seed::RngSeed;
