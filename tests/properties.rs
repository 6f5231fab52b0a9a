use std::collections::HashSet;

use maze_carver::{new_generator, Backtracker, Generator, GeneratorKind, GeneratorState, WallGrid};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        rng_seed: proptest::test_runner::RngSeed::Fixed(0),
        failure_persistence: None,
        .. ProptestConfig::default()
    })]

    #[test]
    fn any_generator_carves_a_perfect_maze(
        width in 1i64..=16,
        height in 1i64..=16,
        seed in any::<u64>(),
        kruskal in any::<bool>(),
    ) {
        let kind = if kruskal { GeneratorKind::Kruskal } else { GeneratorKind::Backtracker };
        let mut generator = new_generator(kind, width, height, Some(seed)).unwrap();
        let mut walls = WallGrid::new(*generator.dims());
        let mut seen = HashSet::new();
        let budget = 2 * width * height;

        let mut ticks = 0;
        while !generator.is_done() {
            prop_assert!(ticks < budget, "{} still active after {} ticks", kind, ticks);
            ticks += 1;
            if let Some(edge) = generator.tick() {
                prop_assert!(seen.insert(edge.normalized()));
                prop_assert_eq!(walls.carve(&edge), Ok(true));
            }
        }

        prop_assert_eq!(seen.len() as i64, width * height - 1);
        prop_assert!(walls.is_perfect());

        for _ in 0..4 {
            prop_assert_eq!(generator.tick(), None);
            prop_assert_eq!(generator.state(), GeneratorState::Terminal);
        }
    }

    #[test]
    fn backtracker_visits_every_cell_once(
        width in 1i64..=12,
        height in 1i64..=12,
        seed in any::<u64>(),
    ) {
        let mut generator = Backtracker::seeded(width, height, seed).unwrap();
        let mut entered = HashSet::new();
        entered.insert((0, 0));

        while !generator.is_done() {
            if let Some(edge) = generator.tick() {
                let target = edge.target().unwrap();
                prop_assert!(entered.insert(target), "{:?} entered twice", target);
            }
            let stack: HashSet<_> = generator.frontier().iter().collect();
            prop_assert_eq!(stack.len(), generator.frontier().len());
        }

        prop_assert_eq!(entered.len() as i64, width * height);
        prop_assert_eq!(generator.visited_count() as i64, width * height);
    }
}
