use crate::artifact::ClassifierArtifact;
use crate::config::{ConfigSection, TrainingConfig};
use crate::data::corpus::Corpus;
use crate::data::loader::ClassSamples;
use crate::engines::generation::{EvolutionEngine, ProgressCallback};
use crate::engines::matcher::Matcher;
use crate::error::Result;

/// Drives one evolution engine per discovered class and accumulates the
/// survivors into the classifier artifact. Classes train sequentially; each
/// owns an independent corpus and population.
pub struct Trainer<'a> {
    config: TrainingConfig,
    matcher: &'a dyn Matcher,
}

impl<'a> Trainer<'a> {
    /// Fails fast on an invalid configuration, before any corpus is built.
    pub fn new(config: TrainingConfig, matcher: &'a dyn Matcher) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, matcher })
    }

    pub fn run<C: ProgressCallback>(
        &self,
        samples: &ClassSamples,
        callback: &mut C,
    ) -> Result<ClassifierArtifact> {
        let mut artifact = ClassifierArtifact::new();
        for class_name in samples.keys() {
            callback.on_class_start(class_name, self.config.generations);
            let corpus = Corpus::for_class(samples, class_name)?;
            let mut engine = EvolutionEngine::new(self.config.clone(), self.matcher);
            let survivors = engine.run(&corpus, callback);
            callback.on_class_complete(class_name, survivors.len());
            log::info!(
                "Trained {}: {} expressions, best goodness {:.6}",
                class_name,
                survivors.len(),
                survivors.first().map(|s| s.goodness).unwrap_or(0.0)
            );
            for survivor in survivors {
                artifact.add_pattern(class_name, survivor.expr.pattern(), survivor.goodness);
            }
        }
        Ok(artifact)
    }
}
