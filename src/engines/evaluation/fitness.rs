use rayon::prelude::*;

use crate::data::corpus::{Corpus, CorpusGroup};
use crate::engines::matcher::{CompiledPattern, Matcher};
use crate::expr::Expr;

/// An expression with its fitness attached. The score is metadata for
/// selection; it is never part of the expression's identity.
#[derive(Debug, Clone)]
pub struct ScoredExpr {
    pub expr: Expr,
    pub goodness: f64,
}

/// Weight on the background rate in the goodness denominator. Heavily
/// penalizes any leakage outside the target class while the `+1` keeps the
/// ratio stable when the background rate approaches zero.
const BACKGROUND_WEIGHT: f64 = 1000.0;

/// Score every expression in the pool against the corpus.
///
/// Each expression is an independent unit of work: evaluation fans out over
/// the rayon pool and a failure to compile one pattern only zeroes that
/// pattern's score. Per-source counts reduce serially into one total per
/// expression.
pub fn evaluate_pool(
    pool: &[Expr],
    corpus: &Corpus,
    matcher: &dyn Matcher,
    max_len: Option<usize>,
) -> Vec<ScoredExpr> {
    pool.par_iter()
        .map(|expr| ScoredExpr {
            expr: expr.clone(),
            goodness: score(expr, corpus, matcher, max_len),
        })
        .collect()
}

fn score(expr: &Expr, corpus: &Corpus, matcher: &dyn Matcher, max_len: Option<usize>) -> f64 {
    if let Some(limit) = max_len {
        if expr.len() > limit {
            return 0.0;
        }
    }
    let pattern = expr.pattern();
    let compiled = match matcher.compile(&pattern) {
        Ok(compiled) => compiled,
        Err(err) => {
            log::debug!("Scoring rejected pattern as unfit: {err}");
            return 0.0;
        }
    };
    let target_rate = match_rate(compiled.as_ref(), &corpus.target);
    let background_rate = match_rate(compiled.as_ref(), &corpus.background);
    goodness_ratio(target_rate, background_rate)
}

/// `targetRate / (1000 * backgroundRate + 1)`: rewards expressions that fire
/// densely inside the target class and rarely outside it.
pub fn goodness_ratio(target_rate: f64, background_rate: f64) -> f64 {
    target_rate / (BACKGROUND_WEIGHT * background_rate + 1.0)
}

/// Matches per character over the whole group. An empty group rates 0 rather
/// than dividing by zero.
fn match_rate(compiled: &dyn CompiledPattern, group: &CorpusGroup) -> f64 {
    if group.total_chars() == 0 {
        return 0.0;
    }
    let matches: u64 = group
        .texts()
        .iter()
        .map(|text| compiled.count_matches(text))
        .sum();
    matches as f64 / group.total_chars() as f64
}
