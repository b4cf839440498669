pub mod corpus;
pub mod loader;

pub use corpus::{Corpus, CorpusGroup};
pub use loader::{discover_samples, ClassSamples};
