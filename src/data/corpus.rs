use crate::data::loader::ClassSamples;
use crate::error::{FguessError, Result};

/// The texts for one side of a training run. The character count is frozen at
/// construction so fitness rates keep a stable denominator across the run.
#[derive(Debug, Clone)]
pub struct CorpusGroup {
    texts: Vec<String>,
    total_chars: u64,
}

impl CorpusGroup {
    pub fn new(texts: Vec<String>) -> Self {
        let total_chars = texts.iter().map(|t| t.chars().count() as u64).sum();
        Self { texts, total_chars }
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn total_chars(&self) -> u64 {
        self.total_chars
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

/// Read-only scoring corpus for one class: its own samples as the target
/// group and the union of every other class's samples as the background.
#[derive(Debug, Clone)]
pub struct Corpus {
    pub target: CorpusGroup,
    pub background: CorpusGroup,
}

impl Corpus {
    pub fn new(target: Vec<String>, background: Vec<String>) -> Self {
        Self {
            target: CorpusGroup::new(target),
            background: CorpusGroup::new(background),
        }
    }

    /// Build the corpus for training `class_name` out of the discovered
    /// sample map.
    pub fn for_class(samples: &ClassSamples, class_name: &str) -> Result<Self> {
        let target = samples
            .get(class_name)
            .ok_or_else(|| FguessError::Training(format!("Unknown class: {class_name}")))?
            .clone();
        let background = samples
            .iter()
            .filter(|(name, _)| name.as_str() != class_name)
            .flat_map(|(_, texts)| texts.iter().cloned())
            .collect();
        Ok(Self::new(target, background))
    }
}
