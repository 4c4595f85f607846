//! Property tests for tour invariants, schedules and acceptance.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tsp_anneal::sa::acceptance_probability;
use tsp_anneal::schedule::TemperatureSchedule;
use tsp_anneal::tour::{MoveStrategy, Node, TourState, WeightTable};

fn nodes_strategy() -> impl Strategy<Value = Vec<Node>> {
    prop::collection::vec((-500i32..500, -500i32..500), 3..40)
        .prop_map(|pts| pts.into_iter().map(|(x, y)| Node::new(x, y)).collect())
}

fn move_strategy() -> impl Strategy<Value = MoveStrategy> {
    prop_oneof![
        Just(MoveStrategy::BothRandom),
        Just(MoveStrategy::RandomNeighborPair)
    ]
}

proptest! {
    #[test]
    fn tour_stays_a_permutation(
        nodes in nodes_strategy(),
        strategy in move_strategy(),
        seed in any::<u64>(),
        moves in 1usize..300,
    ) {
        let n = nodes.len();
        let weights = WeightTable::new(&nodes).unwrap();
        let mut state = TourState::new(&weights, strategy).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        for _ in 0..moves {
            state.propose_move(&mut rng);
            state.apply_move();

            let tour = state.tour();
            prop_assert_eq!(tour.len(), n + 1);
            prop_assert_eq!(tour[0], tour[n]);
            let mut order = state.order().to_vec();
            order.sort_unstable();
            prop_assert_eq!(order, (0..n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn cached_cost_matches_recomputation(
        nodes in nodes_strategy(),
        strategy in move_strategy(),
        seed in any::<u64>(),
        moves in 1usize..300,
    ) {
        let weights = WeightTable::new(&nodes).unwrap();
        let mut state = TourState::new(&weights, strategy).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        for _ in 0..moves {
            state.propose_move(&mut rng);
            state.apply_move();
            let fresh = state.recompute_cost();
            prop_assert!(
                (state.value() - fresh).abs() <= 1e-9 * fresh.max(1.0),
                "cached {} vs fresh {}", state.value(), fresh
            );
        }
    }

    #[test]
    fn ratio_schedule_is_geometric(
        start in 1e-3f64..1e4,
        ratio in 0.01f64..0.99,
        steps in 0usize..500,
    ) {
        let s = TemperatureSchedule::ratio(start, ratio, steps).unwrap();
        prop_assert_eq!(s.len(), steps + 1);
        prop_assert_eq!(s.as_slice()[0], start);
        for w in s.as_slice().windows(2) {
            prop_assert!((w[1] - ratio * w[0]).abs() <= 1e-12 * w[0]);
        }
    }

    #[test]
    fn linear_schedule_is_strictly_decreasing(
        max_distance in 1e-2f64..1e5,
        steps in 1usize..2000,
    ) {
        let s = TemperatureSchedule::linear(max_distance, steps).unwrap();
        prop_assert_eq!(s.len(), steps);
        prop_assert!(s.as_slice().iter().all(|&t| t > 0.0));
        for w in s.as_slice().windows(2) {
            prop_assert!(w[1] < w[0]);
        }
    }

    #[test]
    fn acceptance_rises_with_temperature(
        delta in 1e-3f64..1e3,
        t in 1e-2f64..1e3,
        factor in 1.1f64..10.0,
    ) {
        let cold = acceptance_probability(delta, t);
        let hot = acceptance_probability(delta, t * factor);
        prop_assert!(hot >= cold);
        if cold > 0.0 && hot < 1.0 {
            prop_assert!(hot > cold);
        }
    }

    #[test]
    fn acceptance_falls_with_delta(
        delta in 1e-3f64..1e3,
        t in 1e-2f64..1e3,
        factor in 1.1f64..10.0,
    ) {
        let small = acceptance_probability(delta, t);
        let large = acceptance_probability(delta * factor, t);
        prop_assert!(large <= small);
        if large > 0.0 && small < 1.0 {
            prop_assert!(large < small);
        }
    }

    #[test]
    fn non_worsening_moves_always_accepted(
        delta in -1e6f64..=0.0,
        t in prop_oneof![Just(0.0), 1e-300f64..1e300],
    ) {
        prop_assert_eq!(acceptance_probability(delta, t), 1.0);
    }
}
