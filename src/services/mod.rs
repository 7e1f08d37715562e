pub mod classifier;
pub mod color;
pub mod mood_stats;
pub mod record;
pub mod summary;
