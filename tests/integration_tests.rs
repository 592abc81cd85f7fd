use stridecalc::{read_package, sample_packages, Running, SportsWalking, Swimming, Training, WorkoutKind};

/// Integration tests covering the complete dispatch → summary → render flow

#[cfg(test)]
mod integration_tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    /// The built-in samples produce the reference summary lines in order
    #[test]
    fn test_sample_packages_render_reference_output() {
        let lines: Vec<String> = sample_packages()
            .iter()
            .map(|(code, data)| read_package(code, data).unwrap().summary().render())
            .collect();

        assert_eq!(
            lines,
            vec![
                "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
                 Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
                    .to_string(),
                "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
                 Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
                    .to_string(),
                "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
                 Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500."
                    .to_string(),
            ]
        );
    }

    #[test]
    fn test_running_reference_values() {
        let record = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap().summary();

        assert_eq!(record.training_type, "Running");
        assert_close(record.distance, 9.75);
        assert_close(record.speed, 9.75);
        assert_close(record.calories, 699.75);
    }

    #[test]
    fn test_swimming_reference_values() {
        let record = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])
            .unwrap()
            .summary();

        assert_close(record.speed, 1.0);
        assert_close(record.calories, 336.0);
    }

    #[test]
    fn test_walking_uses_floor_division() {
        let record = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0])
            .unwrap()
            .summary();

        assert_close(record.speed, 5.85);
        // True division would add 5.85^2 / 180 * 0.029 * 75 * 60 ≈ 24.8 kcal
        assert_close(record.calories, 157.5);
    }

    #[test]
    fn test_dispatch_matches_direct_construction() {
        let dispatched = read_package("WLK", &[12000.0, 1.5, 68.0, 172.0]).unwrap();
        let direct = SportsWalking::new(12000.0, 1.5, 68.0, 172.0);
        assert_eq!(dispatched.summary(), direct.summary());

        let dispatched = read_package("SWM", &[1000.0, 0.75, 60.0, 50.0, 30.0]).unwrap();
        let direct = Swimming::new(1000.0, 0.75, 60.0, 50.0, 30.0);
        assert_eq!(dispatched.summary(), direct.summary());
    }

    #[test]
    fn test_summary_is_idempotent() {
        let training = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();

        let first = training.summary();
        let second = training.summary();
        assert_eq!(first, second);
        assert_eq!(first.render(), second.render());
    }

    #[test]
    fn test_variants_share_base_distance() {
        let run = Running::new(10000.0, 1.0, 70.0);
        let walk = SportsWalking::new(10000.0, 1.0, 70.0, 175.0);

        assert_eq!(run.distance(), walk.distance());
        assert_eq!(run.mean_speed(), walk.mean_speed());
        assert_ne!(run.spent_calories(), walk.spent_calories());
    }

    #[test]
    fn test_every_kind_dispatches_with_its_layout() {
        for kind in WorkoutKind::ALL {
            let data = vec![1.0; kind.parameter_count()];
            let training = read_package(kind.code(), &data).unwrap();
            assert_eq!(training.kind(), kind);
        }
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use stridecalc::training::floor_div;

    proptest! {
        #[test]
        fn test_summary_idempotent_for_any_run(
            action in 0.0f64..50000.0,
            duration in 0.1f64..5.0,
            weight in 30.0f64..150.0
        ) {
            let training = read_package("RUN", &[action, duration, weight]).unwrap();
            prop_assert_eq!(training.summary().render(), training.summary().render());
        }

        #[test]
        fn test_swimming_speed_independent_of_strokes(
            strokes_a in 0.0f64..5000.0,
            strokes_b in 0.0f64..5000.0,
            pool_length in 10.0f64..50.0,
            laps in 1.0f64..200.0
        ) {
            let a = Swimming::new(strokes_a, 1.0, 70.0, pool_length, laps);
            let b = Swimming::new(strokes_b, 1.0, 70.0, pool_length, laps);
            prop_assert_eq!(a.mean_speed(), b.mean_speed());
            prop_assert_eq!(a.spent_calories(), b.spent_calories());
        }

        #[test]
        fn test_floor_div_is_whole_and_bounded(
            a in 0.0f64..10000.0,
            b in 1.0f64..300.0
        ) {
            let q = floor_div(a, b);
            prop_assert_eq!(q, q.trunc());
            prop_assert!(q <= a / b + 1e-9);
            prop_assert!(q > a / b - 1.0 - 1e-9);
        }

        #[test]
        fn test_short_data_never_dispatches(len in 0usize..4) {
            let data = vec![1.0; len];
            prop_assert!(read_package("SWM", &data).is_err());
        }
    }
}
