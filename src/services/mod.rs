// Service exports
pub mod cache;
pub mod memory;
pub mod repository;
pub mod seed;

pub use cache::{CacheKey, CacheStats, RecommendationCache};
pub use memory::MemoryStore;
pub use repository::{Repository, StoreError, StoreResult, Upsert};
pub use seed::seed_sample_data;
