pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod interface;
pub mod models;
pub mod recommender;
pub mod state;
pub mod storage;

pub use error::{KioskError, Result};
pub use models::{Order, PreferenceProfile, Recommendation};
