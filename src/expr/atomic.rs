use std::fmt;

/// One indivisible fragment of a pattern, e.g. `[a-z]`, `\?` or a sampled
/// literal word. Multi-character tokens are treated as a single unit by every
/// structural operator, so a split can never land inside a character class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AtomicExpr(Box<str>);

impl AtomicExpr {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into().into_boxed_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AtomicExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AtomicExpr {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}
