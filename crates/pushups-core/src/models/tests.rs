#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;
    use rand::{rngs::StdRng, SeedableRng};

    use crate::models::{
        decode_sets, encode_sets, NewAttempt, Outcome, PlanEntry, RestBounds, RestSpec, SetResult,
        SetSpec, TEST_COLUMN, TEST_SENTINEL,
    };

    fn results(pairs: &[(u32, u32)]) -> Vec<SetResult> {
        pairs
            .iter()
            .map(|&(actual, recommended)| SetResult::new(actual, recommended))
            .collect()
    }

    #[test]
    fn test_outcome_law() {
        assert_eq!(
            Outcome::classify(&results(&[(10, 10), (12, 10)])),
            Outcome::Success
        );
        assert_eq!(
            Outcome::classify(&results(&[(10, 10), (5, 10)])),
            Outcome::Partial
        );
        assert_eq!(
            Outcome::classify(&results(&[(0, 10), (0, 10)])),
            Outcome::Incomplete
        );
        assert_eq!(
            Outcome::classify(&results(&[(10, 10), (0, 10)])),
            Outcome::Partial
        );
    }

    #[test]
    fn test_zero_target_sets_count_as_met() {
        assert_eq!(
            Outcome::classify(&results(&[(0, 0), (3, 0)])),
            Outcome::Success
        );
    }

    #[test]
    fn test_outcome_string_round_trip() {
        for outcome in [
            Outcome::Success,
            Outcome::Partial,
            Outcome::Incomplete,
            Outcome::Test,
        ] {
            assert_eq!(outcome.as_str().parse::<Outcome>(), Ok(outcome));
        }
        assert_eq!("partial".parse::<Outcome>(), Ok(Outcome::Partial));
        assert!("DONE".parse::<Outcome>().is_err());
    }

    #[test]
    fn test_set_targets() {
        assert_eq!(SetSpec::new("12").target(), 12);
        assert_eq!(SetSpec::new("AT LEAST 15").target(), 15);
        assert_eq!(SetSpec::new("at least 15").target(), 15);
        assert_eq!(SetSpec::new("MAX≥20").target(), 20);
        assert_eq!(SetSpec::new(">= 8").target(), 8);
        assert_eq!(SetSpec::new(" 7 ").target(), 7);
        assert_eq!(SetSpec::new("").target(), 0);
        assert_eq!(SetSpec::new("MAX").target(), 0);

        assert!(SetSpec::new("MAX≥20").is_open_ended());
        assert!(!SetSpec::new("20").is_open_ended());
    }

    #[test]
    fn test_rest_bounds() {
        assert_eq!(RestSpec::new("60s").bounds(), RestBounds::Fixed(60));
        assert_eq!(RestSpec::new("120s+").bounds(), RestBounds::Fixed(120));
        assert_eq!(
            RestSpec::new("60-90s").bounds(),
            RestBounds::Range { low: 60, high: 90 }
        );
        assert_eq!(
            RestSpec::new("90-60s").bounds(),
            RestBounds::Range { low: 60, high: 90 }
        );
        assert_eq!(RestSpec::new("abc").bounds(), RestBounds::Fixed(60));
        assert_eq!(RestSpec::new("").bounds(), RestBounds::Fixed(60));
        assert_eq!(RestSpec::default().bounds(), RestBounds::Fixed(60));
    }

    #[test]
    fn test_rest_sampling() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(RestSpec::new("60s").sample(&mut rng), 60);
        assert_eq!(RestSpec::new("abc").sample(&mut rng), 60);

        let range = RestSpec::new("60-90s");
        for _ in 0..200 {
            assert!((60..=90).contains(&range.sample(&mut rng)));
        }
    }

    #[test]
    fn test_new_test_attempt() {
        let now = Timestamp::now();
        assert!(NewAttempt::test(0, now).is_none());
        assert!(NewAttempt::test(-3, now).is_none());

        let attempt = NewAttempt::test(35, now).unwrap();
        assert_eq!(attempt.week, TEST_SENTINEL);
        assert_eq!(attempt.day, TEST_SENTINEL);
        assert_eq!(attempt.column, TEST_COLUMN);
        assert_eq!(attempt.outcome, Outcome::Test);
        assert_eq!(attempt.sets_completed, [35]);

        let stored = attempt.with_id(9);
        assert!(stored.is_test());
        assert_eq!(stored.total_reps(), 35);
    }

    #[test]
    fn test_totals_do_not_overflow() {
        let attempt = NewAttempt {
            timestamp: Timestamp::now(),
            week: 1,
            day: 1,
            column: "1".to_string(),
            outcome: Outcome::Success,
            sets_completed: vec![10, u32::MAX, u32::MAX],
        }
        .with_id(1);
        assert_eq!(attempt.total_reps(), 2 * u64::from(u32::MAX) + 10);

        let entry = PlanEntry {
            week: 1,
            day: 1,
            column: "1".to_string(),
            sets: vec![SetSpec::new("4294967295"), SetSpec::new("MAX≥4294967295")],
            rest: RestSpec::default(),
        };
        assert_eq!(entry.total_target(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_sets_encoding() {
        assert_eq!(encode_sets(&[10, 12, 8]), "10|12|8");
        assert_eq!(decode_sets("10|12|8"), [10, 12, 8]);
        assert_eq!(decode_sets("10||x|4"), [10, 4]);
        assert!(decode_sets("").is_empty());
    }
}
