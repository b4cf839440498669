use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::TrainingConfig;
use crate::data::corpus::Corpus;
use crate::engines::evaluation::{evaluate_pool, select_fittest, ScoredExpr};
use crate::engines::generation::operators::{replenish, seed_population};
use crate::engines::matcher::Matcher;
use crate::expr::Expr;

/// Receives training progress. Implementations range from a console ticker
/// to an indicatif bar in the binary.
pub trait ProgressCallback {
    fn on_class_start(&mut self, class_name: &str, generations: usize);
    fn on_generation_complete(&mut self, generation: usize, total: usize, best_goodness: f64);
    fn on_class_complete(&mut self, class_name: &str, survivors: usize);
}

/// Evolves one class's expression pool: seed once, then
/// replenish-score-select for `n` generations, with a final pass that keeps
/// the top `k0` survivors instead of `k`.
pub struct EvolutionEngine<'a> {
    config: TrainingConfig,
    matcher: &'a dyn Matcher,
    rng: StdRng,
}

impl<'a> EvolutionEngine<'a> {
    pub fn new(config: TrainingConfig, matcher: &'a dyn Matcher) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            matcher,
            rng,
        }
    }

    /// Run the full training loop for one class and return the final
    /// survivors with their goodness scores, best first.
    pub fn run<C: ProgressCallback>(
        &mut self,
        corpus: &Corpus,
        callback: &mut C,
    ) -> Vec<ScoredExpr> {
        let p = self.config.pool_size;
        let k = self.config.survivors.resolve(p);
        let k0 = self.config.final_survivors.resolve(p);
        let generations = self.config.generations;

        let mut pool = seed_population(p, &mut self.rng);

        for generation in 0..generations {
            let survivors = self.evolve_once(pool, corpus, k);
            let best = survivors.first().map(|s| s.goodness).unwrap_or(0.0);
            callback.on_generation_complete(generation, generations, best);
            pool = survivors.into_iter().map(|s| s.expr).collect();
        }

        self.evolve_once(pool, corpus, k0)
    }

    /// One replenish-score-select cycle keeping the top `k`.
    fn evolve_once(&mut self, mut pool: Vec<Expr>, corpus: &Corpus, k: usize) -> Vec<ScoredExpr> {
        replenish(
            &mut pool,
            self.config.pool_size,
            self.config.epsilon,
            &corpus.target,
            &mut self.rng,
        );
        let scored = evaluate_pool(&pool, corpus, self.matcher, self.config.max_expr_len);
        select_fittest(scored, k)
    }
}
