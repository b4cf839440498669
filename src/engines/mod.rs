pub mod evaluation;
pub mod generation;
pub mod matcher;

pub use matcher::{CompiledPattern, Matcher, RegexMatcher};
