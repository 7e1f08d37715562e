pub mod analysis;
pub mod colors;
pub mod health;
pub mod stats;
pub mod summarize;
