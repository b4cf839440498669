pub mod evolution_engine;
pub mod operators;
pub mod progress;

pub use evolution_engine::{EvolutionEngine, ProgressCallback};
pub use progress::{BarProgress, ConsoleProgress, SilentProgress};
