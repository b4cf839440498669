pub mod manager;
pub mod training;
pub mod traits;

pub use manager::{AppConfig, ConfigManager};
pub use training::{SurvivorCount, TrainingConfig};
pub use traits::ConfigSection;
