//! Integration tests for the quickiter generators

mod common;
use common::{add, random_sequence, seeded_rng, sub};
use quickiter::prelude::*;

mod count_generator {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::Rng;

    #[test]
    fn test_first_five_multiples_of_four() {
        let mut gen = count(0, 4).unwrap();
        assert_eq!(gen.take_vec(5), vec![0, 4, 8, 12, 16]);
    }

    #[test]
    fn test_prefix_is_arithmetic_progression() {
        let mut rng = seeded_rng(7);
        for _ in 0..20 {
            let start: i64 = rng.gen_range(-10_000..10_000);
            let step: i64 = rng.gen_range(-100..100);
            let n: usize = rng.gen_range(0..50);

            let want: Vec<i64> = (0..n as i64).map(|k| start + k * step).collect();
            assert_eq!(count(start, step).unwrap().take_vec(n), want);
        }
    }

    #[test]
    fn test_works_as_iterator() {
        let odds: Vec<u32> = count(1u32, 2).unwrap().take(4).collect();
        assert_eq!(odds, vec![1, 3, 5, 7]);
    }

    #[test]
    fn test_is_infinite() {
        let gen = count(0, 1).unwrap();
        assert!(gen.is_endless());
        assert_eq!(gen.name(), "count");
    }
}

mod cycle_generator {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kth_value_wraps_around() {
        let data = vec![4, 8, 15, 16, 23, 42];
        let mut gen = cycle(data.clone()).unwrap();
        let got = gen.take_vec(50);
        for (k, value) in got.iter().enumerate() {
            assert_eq!(*value, data[k % data.len()]);
        }
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert!(matches!(cycle(Vec::<u8>::new()), Err(Error::EmptyCycle)));
    }

    #[test]
    fn test_chars_of_a_string() {
        let letters: Vec<char> = "abc".chars().collect();
        let out: String = cycle(letters).unwrap().take(7).collect();
        assert_eq!(out, "abcabca");
    }
}

mod accumulate_generator {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_running_sum() {
        assert_eq!(accumulate(vec![1, 2, 3, 4, 5], add).unwrap().drain(), vec![1, 3, 6, 10, 15]);
    }

    #[test]
    fn test_running_difference() {
        assert_eq!(accumulate(vec![5, 4, 3, 2, 1], sub).unwrap().drain(), vec![5, 1, -2, -4, -5]);
    }

    #[test]
    fn test_emission_rule() {
        let mut rng = seeded_rng(11);
        let mut saw_negative = false;
        for _ in 0..10 {
            let data = random_sequence(&mut rng);
            saw_negative |= data.iter().any(|&x| x < 0);
            let got = accumulate(data.clone(), sub).unwrap().drain();

            assert_eq!(got.len(), data.len());
            assert_eq!(got[0], data[0]);
            for i in 1..got.len() {
                assert_eq!(got[i], sub(got[i - 1], data[i]));
            }
        }
        assert!(saw_negative, "inputs should include negative values");
    }

    #[test]
    fn test_empty_input() {
        assert!(accumulate(Vec::<i64>::new(), add).unwrap().drain().is_empty());
    }
}

mod accumulate_with_init_generator {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_seeded_running_sum() {
        let gen = accumulate_with_init(vec![1, 2, 3, 4, 5], add, 10).unwrap();
        assert_eq!(gen.drain(), vec![10, 11, 13, 16, 20, 25]);
    }

    #[test]
    fn test_seeded_running_difference() {
        let gen = accumulate_with_init(vec![5, 4, 3, 2, 1], sub, 0).unwrap();
        assert_eq!(gen.drain(), vec![0, -5, -9, -12, -14, -15]);
    }

    #[test]
    fn test_seeded_min() {
        let gen = accumulate_with_init(vec![1.0, 2.0, 3.0, 4.0, 5.0], f64::min, 3.0).unwrap();
        assert_eq!(gen.drain(), vec![3.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_emission_rule() {
        let mut rng = seeded_rng(13);
        for _ in 0..10 {
            let data = random_sequence(&mut rng);
            let got = accumulate_with_init(data.clone(), sub, 500).unwrap().drain();

            assert_eq!(got.len(), data.len() + 1);
            assert_eq!(got[0], 500);
            for i in 1..got.len() {
                assert_eq!(got[i], sub(got[i - 1], data[i - 1]));
            }
        }
    }

    #[test]
    fn test_empty_input_emits_only_the_seed() {
        assert_eq!(accumulate_with_init(Vec::<i64>::new(), add, 7).unwrap().drain(), vec![7]);
    }
}

mod chain_generator {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_iterable() {
        assert_eq!(chain_from_iterable(vec![vec![1, 2], vec![3, 4]]).unwrap().drain(), vec![1, 2, 3, 4]);
        assert_eq!(chain_from_iterable(vec![vec![], vec![5, 6], vec![]]).unwrap().drain(), vec![5, 6]);
    }

    #[test]
    fn test_both_calling_conventions_agree() {
        let mut rng = seeded_rng(17);
        let a = random_sequence(&mut rng);
        let b: Vec<i64> = Vec::new();
        let c = random_sequence(&mut rng);

        let variadic = quickiter::chain![a.clone(), b.clone(), c.clone()].unwrap().drain();
        let array = chain([a.clone(), b.clone(), c.clone()]).unwrap().drain();
        let nested = chain_from_iterable(vec![a.clone(), b, c.clone()]).unwrap().drain();

        let mut want = a;
        want.extend(c);
        assert_eq!(variadic, want);
        assert_eq!(array, want);
        assert_eq!(nested, want);
    }

    #[test]
    fn test_all_empty() {
        let gen: Generator<i64> = quickiter::chain![Vec::new(), Vec::new()].unwrap();
        assert!(gen.drain().is_empty());
    }
}

mod pairwise_generator {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_overlapping_pairs() {
        assert_eq!(
            pairwise(vec![1, 2, 3, 4, 5]).unwrap().drain(),
            vec![(1, 2), (2, 3), (3, 4), (4, 5)]
        );
    }

    #[test]
    fn test_single_element_gives_nothing() {
        assert!(pairwise(vec![1]).unwrap().drain().is_empty());
    }

    #[test]
    fn test_emission_rule() {
        let mut rng = seeded_rng(19);
        for _ in 0..10 {
            let data = random_sequence(&mut rng);
            let got = pairwise(data.clone()).unwrap().drain();

            assert_eq!(got.len(), data.len().saturating_sub(1));
            for (i, pair) in got.iter().enumerate() {
                assert_eq!(*pair, (data[i], data[i + 1]));
            }
        }
    }
}

mod spawner {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_custom_config_runs_every_algorithm() {
        let spawner = Spawner::new(GeneratorConfig::default().with_thread_name("it").with_stack_size(256 * 1024));
        assert_eq!(spawner.config().thread_name, "it");
        assert_eq!(spawner.config().stack_size, Some(256 * 1024));

        assert_eq!(spawner.count(1, 1).unwrap().take_vec(3), vec![1, 2, 3]);
        assert_eq!(spawner.cycle(vec![0, 1]).unwrap().take_vec(3), vec![0, 1, 0]);
        assert_eq!(spawner.accumulate(vec![2, 3], add).unwrap().drain(), vec![2, 5]);
        assert_eq!(spawner.accumulate_with_init(vec![2, 3], add, 1).unwrap().drain(), vec![1, 3, 6]);
        assert_eq!(spawner.chain([vec![1], vec![2]]).unwrap().drain(), vec![1, 2]);
        assert_eq!(spawner.pairwise(vec![1, 2, 3]).unwrap().drain(), vec![(1, 2), (2, 3)]);
    }
}
