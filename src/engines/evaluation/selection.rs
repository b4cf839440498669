use std::cmp::Ordering;
use std::collections::HashSet;

use super::fitness::ScoredExpr;

/// Keep the top `k` expressions by descending goodness.
///
/// Duplicate patterns are collapsed first so a lucky expression cannot fill
/// several survivor slots with copies of itself. The sort is stable, so ties
/// resolve by pool order and selection stays deterministic under a fixed
/// seed. Asking for more survivors than the pool holds returns the whole
/// pool.
pub fn select_fittest(mut scored: Vec<ScoredExpr>, k: usize) -> Vec<ScoredExpr> {
    let mut seen = HashSet::new();
    scored.retain(|s| seen.insert(s.expr.pattern()));
    scored.sort_by(|a, b| {
        b.goodness
            .partial_cmp(&a.goodness)
            .unwrap_or(Ordering::Equal)
    });
    scored.truncate(k);
    scored
}
