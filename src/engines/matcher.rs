use regex::RegexBuilder;

use crate::error::{FguessError, Result};

/// A pattern compiled for repeated counting against corpus text.
pub trait CompiledPattern: Send + Sync {
    /// Number of non-overlapping occurrences of the pattern in `text`.
    fn count_matches(&self, text: &str) -> u64;
}

/// Compiles rendered expressions into something that can count occurrences.
///
/// Compilation is fallible per pattern. Callers treat a rejected pattern as
/// maximally unfit instead of aborting the generation, so an engine quirk can
/// never take down a training run.
pub trait Matcher: Send + Sync {
    fn compile(&self, pattern: &str) -> Result<Box<dyn CompiledPattern>>;
}

/// Matcher backed by the `regex` crate.
pub struct RegexMatcher {
    size_limit: usize,
}

impl RegexMatcher {
    const DEFAULT_SIZE_LIMIT: usize = 1 << 20;

    pub fn new() -> Self {
        Self {
            size_limit: Self::DEFAULT_SIZE_LIMIT,
        }
    }

    /// Cap on the compiled program size. Nested closures from crossover can
    /// explode the compiled automaton; patterns over the cap are rejected
    /// and scored as unfit.
    pub fn with_size_limit(size_limit: usize) -> Self {
        Self { size_limit }
    }
}

impl Default for RegexMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher for RegexMatcher {
    fn compile(&self, pattern: &str) -> Result<Box<dyn CompiledPattern>> {
        let regex = RegexBuilder::new(pattern)
            .size_limit(self.size_limit)
            .build()
            .map_err(|e| FguessError::InvalidPattern(format!("{pattern}: {e}")))?;
        Ok(Box::new(CompiledRegex(regex)))
    }
}

struct CompiledRegex(regex::Regex);

impl CompiledPattern for CompiledRegex {
    fn count_matches(&self, text: &str) -> u64 {
        self.0.find_iter(text).count() as u64
    }
}
