use agmcore::base::{BeliefSet, KernelSet};
use agmcore::blackbox::{BlackBox, ExpansionStrategy, LinearShrinker};
use agmcore::ext::observe::NoopObserver;
use agmcore::oracle::{Oracle, Property};
use agmcore::search::{
    ClassicalSearch, KernelSearch, OptimizedSearch, SearchLimits, SearchStrategy,
};
use agmcore::tests_utils::{SubsetOracle, Trigger, brute_force_kernels, is_minimal};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

const NAMES: [&str; 8] = ["a", "b", "c", "d", "e", "f", "g", "h"];

// Random base of 3 to 7 axioms and a monotone trigger of 1 to 4 groups over it.
fn random_instance(rng: &mut ChaCha8Rng) -> (BeliefSet<&'static str>, Trigger) {
    let size = rng.random_range(3..=7);
    let base: BeliefSet<&'static str> = NAMES[..size].iter().copied().collect();

    let groups = (0..rng.random_range(1..=4))
        .map(|_| {
            let mut group: BeliefSet<&'static str> = NAMES[..size]
                .iter()
                .copied()
                .filter(|_| rng.random_bool(0.35))
                .collect();
            if group.is_empty() {
                group.insert(NAMES[rng.random_range(0..size)]);
            }
            group
        })
        .collect();

    (base, Trigger(groups))
}

fn quiet_classical(limits: SearchLimits) -> ClassicalSearch {
    ClassicalSearch::new(limits).with_observer(Arc::new(NoopObserver))
}

fn quiet_optimized(limits: SearchLimits) -> OptimizedSearch {
    OptimizedSearch::new(limits).with_observer(Arc::new(NoopObserver))
}

#[test]
fn unbounded_searches_match_brute_force() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xa9e);
    let oracle = SubsetOracle::new();

    for _ in 0..64 {
        let (base, trigger) = random_instance(&mut rng);
        let property = Property::EntailsFormula(trigger);
        let expected = brute_force_kernels(&oracle, &base, &property).unwrap();

        let classical = quiet_classical(SearchLimits::UNBOUNDED)
            .search(&oracle, &base, &property)
            .unwrap();
        let optimized = quiet_optimized(SearchLimits::UNBOUNDED)
            .search(&oracle, &base, &property)
            .unwrap();

        assert!(classical.is_complete());
        assert!(optimized.is_complete());
        assert_eq!(classical.kernel_set, expected, "classical on {base:?}");
        assert_eq!(optimized.kernel_set, expected, "optimized on {base:?}");
        assert_eq!(classical.diagnoses(), optimized.diagnoses());
    }
}

#[test]
fn every_kernel_element_is_minimal() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let oracle = SubsetOracle::new();

    for _ in 0..32 {
        let (base, trigger) = random_instance(&mut rng);
        let property = Property::EntailsFormula(trigger);

        for expansion in [ExpansionStrategy::Incremental, ExpansionStrategy::WholeSet] {
            let result = quiet_optimized(SearchLimits::UNBOUNDED)
                .with_blackbox(BlackBox::new(expansion, LinearShrinker))
                .search(&oracle, &base, &property)
                .unwrap();
            assert!(result.kernel_set.is_antichain());
            for element in result.kernel_set.iter() {
                assert!(element.is_subset(&base));
                assert!(is_minimal(&oracle, element, &property).unwrap());
            }
        }
    }
}

#[test]
fn diagnoses_are_minimal_hitting_sets() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let oracle = SubsetOracle::new();

    for _ in 0..32 {
        let (base, trigger) = random_instance(&mut rng);
        let property = Property::EntailsFormula(trigger.clone());
        let result = quiet_classical(SearchLimits::UNBOUNDED)
            .search(&oracle, &base, &property)
            .unwrap();

        for diagnosis in result.diagnoses().iter() {
            assert!(result.kernel_set.is_hit_by(diagnosis));
            for axiom in diagnosis.iter() {
                let mut smaller = diagnosis.clone();
                smaller.remove(axiom);
                assert!(!result.kernel_set.is_hit_by(&smaller));
            }
        }
        for remainder in result.remainders(&base).iter() {
            assert!(!oracle.entails(remainder, &trigger).unwrap());
        }
    }
}

#[test]
fn kernel_limit_truncates_monotonically() {
    let mut rng = ChaCha8Rng::seed_from_u64(1234);
    let oracle = SubsetOracle::new();

    for _ in 0..32 {
        let (base, trigger) = random_instance(&mut rng);
        let property = Property::EntailsFormula(trigger);
        let full = quiet_classical(SearchLimits::UNBOUNDED)
            .search(&oracle, &base, &property)
            .unwrap();

        for limit in 1..=3 {
            for strategy in [SearchStrategy::Classical, SearchStrategy::Optimized] {
                let bounded = strategy
                    .build(
                        SearchLimits::UNBOUNDED.with_kernel_elements(limit),
                        ExpansionStrategy::Incremental,
                        Arc::new(NoopObserver),
                    )
                    .search(&oracle, &base, &property)
                    .unwrap();

                assert!(bounded.kernel_set.len() <= limit);
                assert!(bounded.kernel_set.is_subfamily(&full.kernel_set));
                if full.kernel_set.len() >= limit {
                    assert!(bounded.status.is_truncated());
                }
            }
        }
    }
}

#[test]
fn queue_limit_keeps_a_sound_subset() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let oracle = SubsetOracle::new();

    for _ in 0..32 {
        let (base, trigger) = random_instance(&mut rng);
        let property = Property::EntailsFormula(trigger);
        let full = quiet_optimized(SearchLimits::UNBOUNDED)
            .search(&oracle, &base, &property)
            .unwrap();
        let bounded = quiet_classical(SearchLimits::UNBOUNDED.with_queue_size(2))
            .search(&oracle, &base, &property)
            .unwrap();

        assert!(bounded.kernel_set.is_subfamily(&full.kernel_set));
        if bounded.is_complete() {
            assert_eq!(bounded.kernel_set, full.kernel_set);
        }
    }
}

#[test]
fn queue_limit_of_one_keeps_the_seed() {
    let oracle = SubsetOracle::new();
    let property = Property::EntailsFormula(SubsetOracle::trigger(&[
        &["a", "b"],
        &["a", "c"],
        &["a", "d"],
    ]));
    let base = BeliefSet::from(["a", "b", "c", "d"]);

    for strategy in [SearchStrategy::Classical, SearchStrategy::Optimized] {
        let result = strategy
            .build(
                SearchLimits::UNBOUNDED.with_queue_size(1),
                ExpansionStrategy::Incremental,
                Arc::new(NoopObserver),
            )
            .search(&oracle, &base, &property)
            .unwrap();

        let expected: KernelSet<_> = [BeliefSet::from(["a", "b"])].into_iter().collect();
        assert_eq!(result.kernel_set, expected);
        assert!(result.status.is_truncated());
    }
}

#[test]
fn inconsistency_kernels_match_brute_force() {
    let oracle = SubsetOracle::new()
        .with_conflict(&["a", "b"])
        .with_conflict(&["b", "c", "d"])
        .with_conflict(&["e"])
        .with_conflict(&["a", "d", "f"]);
    let base = BeliefSet::from(["a", "b", "c", "d", "e", "f", "g"]);
    let property = Property::IsInconsistent;

    let expected = brute_force_kernels(&oracle, &base, &property).unwrap();
    for strategy in [SearchStrategy::Classical, SearchStrategy::Optimized] {
        let result = strategy
            .build(
                SearchLimits::UNBOUNDED,
                ExpansionStrategy::WholeSet,
                Arc::new(NoopObserver),
            )
            .search(&oracle, &base, &property)
            .unwrap();
        assert_eq!(result.kernel_set, expected);
    }
}
