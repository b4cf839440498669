use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::corpus::CorpusGroup;
use crate::expr::{vocabulary, Expr};

/// Structural crossover: one of the four combinations, drawn uniformly.
///
/// Two of the branches deliberately ignore the second parent. The operator
/// table counts the closures as binary so all four are drawn with equal
/// probability; making them true binaries would change the evolutionary
/// dynamics.
pub fn crossover<R: Rng>(e1: &Expr, e2: &Expr, rng: &mut R) -> Expr {
    match rng.gen_range(0..4) {
        0 => e1.sequence(e2),
        1 => e1.alternate(e2),
        2 => e1.closure_plus(),
        _ => e1.closure(),
    }
}

/// Splice a random pool member into `expr` at a random split point.
///
/// Returns `None` for an empty expression or an empty pool; the caller is
/// expected to fall back to a different operator.
pub fn mutation<R: Rng>(expr: &Expr, pool: &[Expr], rng: &mut R) -> Option<Expr> {
    if expr.is_empty() || pool.is_empty() {
        return None;
    }
    let split = rng.gen_range(0..expr.len());
    let word = pool.choose(rng)?;
    Some(
        expr.head(split)
            .concat(word)
            .concat(&expr.tail(expr.len() - split)),
    )
}

/// Sample up to `n` words from the target texts and append them to the pool
/// as escaped literal expressions.
pub fn insert_words_from_corpus<R: Rng>(
    pool: &mut Vec<Expr>,
    target: &CorpusGroup,
    n: usize,
    rng: &mut R,
) {
    for _ in 0..n {
        if let Some(word) = sample_word(target, rng) {
            pool.push(Expr::atom(regex::escape(&word)));
        }
    }
}

/// Pick a uniformly random byte offset within the first half of a random
/// source and advance to the next word boundary. A word is a contiguous
/// non-whitespace run.
fn sample_word<R: Rng>(group: &CorpusGroup, rng: &mut R) -> Option<String> {
    let text = group.texts().choose(rng)?;
    if text.trim().is_empty() {
        return None;
    }
    let mut offset = rng.gen_range(0..(text.len() / 2).max(1));
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    let rest = &text[offset..];
    let mut words = rest.split_whitespace();
    let first = words.next()?;
    // A mid-word landing clips the current word; take the following one
    // unless the text ends here.
    let word = if rest.starts_with(|c: char| c.is_whitespace()) {
        first
    } else {
        words.next().unwrap_or(first)
    };
    Some(word.to_string())
}

/// Initial population: `p` uniform picks from the basic vocabulary.
pub fn seed_population<R: Rng>(p: usize, rng: &mut R) -> Vec<Expr> {
    (0..p).map(|_| vocabulary::random_atom(rng)).collect()
}

/// Refill a pruned pool back to size `p`.
///
/// Roughly a third of the missing slots come from genetic operators
/// (mutation with probability `epsilon`, crossover otherwise), a fifth from
/// sampled corpus words, and the remainder from the basic vocabulary.
/// Parents are drawn from the pool as it grows, so late offspring can build
/// on early ones within the same refill.
pub fn replenish<R: Rng>(
    pool: &mut Vec<Expr>,
    p: usize,
    epsilon: f64,
    target: &CorpusGroup,
    rng: &mut R,
) {
    if pool.len() >= p {
        pool.truncate(p);
        return;
    }
    let missing = p - pool.len();
    let derived = missing / 3;
    let sampled = missing / 5;

    for _ in 0..derived {
        if pool.is_empty() {
            break;
        }
        let parent = pool[rng.gen_range(0..pool.len())].clone();
        let child = if rng.gen::<f64>() < epsilon {
            match mutation(&parent, pool, rng) {
                Some(mutated) => mutated,
                // Zero-length parent: mutation has no split point, cross instead.
                None => {
                    let other = pool[rng.gen_range(0..pool.len())].clone();
                    crossover(&parent, &other, rng)
                }
            }
        } else {
            let other = pool[rng.gen_range(0..pool.len())].clone();
            crossover(&parent, &other, rng)
        };
        pool.push(child);
    }

    let remaining = p - pool.len();
    insert_words_from_corpus(pool, target, sampled.min(remaining), rng);

    while pool.len() < p {
        pool.push(vocabulary::random_atom(rng));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn sampled_words_are_single_whitespace_free_tokens() {
        let group = CorpusGroup::new(vec!["alpha beta gamma delta epsilon".to_string()]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let word = sample_word(&group, &mut rng).unwrap();
            assert!(!word.is_empty());
            assert!(!word.contains(char::is_whitespace));
        }
    }

    #[test]
    fn sample_word_skips_clipped_prefix() {
        // Offsets land inside the first half, so a mid-word hit must yield
        // the following full word rather than a truncated run.
        let group = CorpusGroup::new(vec!["abcdefgh tail".to_string()]);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let word = sample_word(&group, &mut rng).unwrap();
            assert_eq!(word, "tail");
        }
    }

    #[test]
    fn sample_word_handles_blank_sources() {
        let group = CorpusGroup::new(vec!["   ".to_string()]);
        let mut rng = StdRng::seed_from_u64(11);
        assert!(sample_word(&group, &mut rng).is_none());
    }
}
