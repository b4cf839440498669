use fguess::config::{ConfigSection, SurvivorCount, TrainingConfig};
use fguess::data::{Corpus, CorpusGroup};
use fguess::engines::evaluation::{evaluate_pool, goodness_ratio, select_fittest, ScoredExpr};
use fguess::engines::generation::operators::{
    crossover, insert_words_from_corpus, mutation, replenish, seed_population,
};
use fguess::engines::generation::{EvolutionEngine, SilentProgress};
use fguess::engines::{CompiledPattern, Matcher, RegexMatcher};
use fguess::expr::Expr;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn tiny_corpus() -> Corpus {
    Corpus::new(vec!["aaa111".to_string()], vec!["zzz".to_string()])
}

fn test_config() -> TrainingConfig {
    TrainingConfig {
        pool_size: 20,
        survivors: SurvivorCount::Count(5),
        final_survivors: SurvivorCount::Count(15),
        epsilon: 0.05,
        generations: 10,
        max_expr_len: Some(40),
        seed: Some(42),
    }
}

#[test]
fn goodness_matches_reference_scenario() {
    // target "aaa111" (6 chars), background "zzz" (3 chars): the literal
    // "a" fires 3 times in the target and never outside it.
    let corpus = tiny_corpus();
    let matcher = RegexMatcher::new();
    let scored = evaluate_pool(
        &[Expr::atom("a"), Expr::atom("z")],
        &corpus,
        &matcher,
        None,
    );
    assert_eq!(scored[0].goodness, 0.5);
    assert_eq!(scored[1].goodness, 0.0);
}

#[test]
fn goodness_ratio_is_monotone() {
    // Non-increasing in background rate, non-decreasing in target rate.
    assert!(goodness_ratio(0.5, 0.0) > goodness_ratio(0.5, 0.1));
    assert!(goodness_ratio(0.5, 0.1) > goodness_ratio(0.5, 0.5));
    assert!(goodness_ratio(0.2, 0.1) < goodness_ratio(0.5, 0.1));
    assert_eq!(goodness_ratio(0.0, 0.3), 0.0);
}

#[test]
fn length_guard_zeroes_oversized_expressions() {
    let corpus = tiny_corpus();
    let matcher = RegexMatcher::new();
    // Fourteen nested closures: 43 atoms, still matches the target.
    let mut long = Expr::atom("a");
    for _ in 0..14 {
        long = long.closure();
    }
    assert!(long.len() > 40);

    let guarded = evaluate_pool(&[long.clone()], &corpus, &matcher, Some(40));
    assert_eq!(guarded[0].goodness, 0.0);

    let unguarded = evaluate_pool(&[long], &corpus, &matcher, None);
    assert!(unguarded[0].goodness > 0.0);
}

#[test]
fn uncompilable_patterns_score_zero_without_aborting() {
    let corpus = tiny_corpus();
    let matcher = RegexMatcher::new();
    let scored = evaluate_pool(
        &[Expr::atom("("), Expr::atom("a")],
        &corpus,
        &matcher,
        None,
    );
    assert_eq!(scored[0].goodness, 0.0);
    assert_eq!(scored[1].goodness, 0.5);
}

#[test]
fn empty_corpus_rates_zero_instead_of_dividing_by_zero() {
    let corpus = Corpus::new(vec![], vec!["zzz".to_string()]);
    let matcher = RegexMatcher::new();
    let scored = evaluate_pool(&[Expr::atom("a")], &corpus, &matcher, None);
    assert_eq!(scored[0].goodness, 0.0);
}

#[test]
fn selection_keeps_top_k_sorted_descending() {
    let scored: Vec<ScoredExpr> = ["a", "b", "c", "d", "e"]
        .iter()
        .enumerate()
        .map(|(i, t)| ScoredExpr {
            expr: Expr::atom(*t),
            goodness: i as f64,
        })
        .collect();

    let survivors = select_fittest(scored.clone(), 3);
    assert_eq!(survivors.len(), 3);
    assert_eq!(survivors[0].goodness, 4.0);
    assert_eq!(survivors[1].goodness, 3.0);
    assert_eq!(survivors[2].goodness, 2.0);

    // Asking for more than the pool holds returns the whole pool.
    let all = select_fittest(scored, 50);
    assert_eq!(all.len(), 5);
}

#[test]
fn selection_collapses_duplicate_patterns() {
    let scored = vec![
        ScoredExpr {
            expr: Expr::atom("a"),
            goodness: 1.0,
        },
        ScoredExpr {
            expr: Expr::atom("a"),
            goodness: 1.0,
        },
        ScoredExpr {
            expr: Expr::atom("b"),
            goodness: 0.5,
        },
    ];
    let survivors = select_fittest(scored, 3);
    assert_eq!(survivors.len(), 2);
}

#[test]
fn seeding_is_reproducible_under_a_fixed_seed() {
    let mut rng1 = StdRng::seed_from_u64(99);
    let mut rng2 = StdRng::seed_from_u64(99);
    assert_eq!(seed_population(5, &mut rng1), seed_population(5, &mut rng2));
}

#[test]
fn replenishment_fills_to_exactly_pool_size() {
    let target = CorpusGroup::new(vec!["one two three four five six".to_string()]);
    let mut rng = StdRng::seed_from_u64(7);
    for start in [0usize, 1, 5, 19, 20] {
        let mut pool: Vec<Expr> = (0..start).map(|_| Expr::atom("a")).collect();
        replenish(&mut pool, 20, 0.2, &target, &mut rng);
        assert_eq!(pool.len(), 20, "starting from {start}");
    }
}

#[test]
fn replenishment_truncates_an_overfull_pool() {
    let target = CorpusGroup::new(vec!["text".to_string()]);
    let mut rng = StdRng::seed_from_u64(7);
    let mut pool: Vec<Expr> = (0..30).map(|_| Expr::atom("a")).collect();
    replenish(&mut pool, 20, 0.2, &target, &mut rng);
    assert_eq!(pool.len(), 20);
}

#[test]
fn crossover_branches_compile() {
    let matcher = RegexMatcher::new();
    let a = Expr::atom("[a-z]");
    let b = Expr::atom("[0-9]");
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..20 {
        let child = crossover(&a, &b, &mut rng);
        assert!(matcher.compile(&child.pattern()).is_ok(), "{}", child.pattern());
    }
}

#[test]
fn mutation_splices_and_guards_empty_input() {
    let pool = vec![Expr::atom("X")];
    let mut rng = StdRng::seed_from_u64(1);

    let e = Expr::atom("a").concat(&Expr::atom("b"));
    let mutated = mutation(&e, &pool, &mut rng).unwrap();
    assert_eq!(mutated.len(), e.len() + 1);
    assert!(mutated.pattern().contains('X'));

    assert!(mutation(&Expr::empty(), &pool, &mut rng).is_none());
}

#[test]
fn sampled_words_are_escaped_literals() {
    let target = CorpusGroup::new(vec![
        "alpha a+b?c alpha a+b?c alpha a+b?c alpha a+b?c".to_string(),
    ]);
    let matcher = RegexMatcher::new();
    let mut rng = StdRng::seed_from_u64(5);
    let mut pool = Vec::new();
    insert_words_from_corpus(&mut pool, &target, 20, &mut rng);
    assert!(!pool.is_empty());
    for expr in &pool {
        assert_eq!(expr.len(), 1);
        let compiled = matcher.compile(&expr.pattern()).unwrap();
        // An escaped "a+b?c" literal must match itself exactly once here.
        if expr.pattern().contains("\\+") {
            assert_eq!(compiled.count_matches("x a+b?c y"), 1);
            assert_eq!(compiled.count_matches("x aab y"), 0);
        }
    }
}

#[test]
fn engine_run_is_deterministic_and_bounded_by_k0() {
    let corpus = Corpus::new(
        vec!["aaa111 aaa111 aaa111".to_string()],
        vec!["zzz zzz".to_string()],
    );
    let matcher = RegexMatcher::new();
    let config = test_config();

    let run = |config: TrainingConfig| {
        let mut engine = EvolutionEngine::new(config, &matcher);
        engine.run(&corpus, &mut SilentProgress)
    };

    let first = run(config.clone());
    let second = run(config.clone());

    let k0 = config.final_survivors.resolve(config.pool_size);
    assert!(!first.is_empty());
    assert!(first.len() <= k0);
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.expr, b.expr);
        assert_eq!(a.goodness, b.goodness);
    }

    // Survivors come back ranked best first.
    for pair in first.windows(2) {
        assert!(pair[0].goodness >= pair[1].goodness);
    }
}

#[test]
fn config_validation_rejects_bad_parameters() {
    let mut config = test_config();
    config.survivors = SurvivorCount::Count(21);
    assert!(config.validate().is_err());

    let mut config = test_config();
    config.final_survivors = SurvivorCount::Count(0);
    assert!(config.validate().is_err());

    let mut config = test_config();
    config.epsilon = 1.5;
    assert!(config.validate().is_err());

    let mut config = test_config();
    config.pool_size = 0;
    assert!(config.validate().is_err());

    assert!(test_config().validate().is_ok());
}

#[test]
fn survivor_proportions_resolve_against_pool_size() {
    assert_eq!(SurvivorCount::Proportion(0.25).resolve(20), 5);
    assert_eq!(SurvivorCount::Proportion(0.75).resolve(20), 15);
    assert_eq!(SurvivorCount::Proportion(0.01).resolve(20), 1);
    assert_eq!(SurvivorCount::Count(5).resolve(20), 5);
}
