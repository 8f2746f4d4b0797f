#[cfg(test)]
mod _tests_best_fit {
    use super::super::best_fit::{
        best_fit, evaluate_candidate, rank_candidates, sweep_candidates, SearchParams,
    };
    use super::super::size_interval::SizeInterval;
    use crate::error::HexFitError;
    use crate::interfaces::Orientation;
    use crate::lattice::{LatticeSpec, StrokeWidth};
    use approx::assert_relative_eq;
    use std::cmp::Ordering;

    fn params(stroke: u32) -> SearchParams {
        SearchParams {
            stroke_width: StrokeWidth::new(stroke).unwrap(),
            ..SearchParams::default()
        }
    }

    #[test]
    fn test_exact_width_skips_the_sweep() {
        let interval = SizeInterval::exact(20.0).unwrap();
        for granularity in [0.5, 3.0, 11.0] {
            let p = SearchParams {
                granularity,
                ..params(2)
            };
            let fit = best_fit(&interval, &p).unwrap();
            assert_eq!(fit.lattice.apothem(), 10.0);
            assert_eq!(fit.quality(), 2);
            assert_relative_eq!(fit.stretch.percent(), -1.8504542377636213, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_sweep_twenty_to_sixty() {
        let interval = SizeInterval::new(20.0, 60.0).unwrap();
        let fit = best_fit(&interval, &params(2)).unwrap();

        assert_eq!(fit.width(), 30.0);
        assert_eq!(fit.quality(), 50);
        assert!(fit.width() >= 20.0 && fit.width() <= 60.0);

        // No sampled width beats the winner
        let all = sweep_candidates(&interval, &params(2)).unwrap();
        assert_eq!(all.len(), 81);
        assert!(all.iter().all(|c| rank_candidates(&fit, c) != Ordering::Greater));
    }

    #[test]
    fn test_odd_stroke_flips_the_winner() {
        let interval = SizeInterval::new(20.0, 60.0).unwrap();
        let even = best_fit(&interval, &params(2)).unwrap();
        let odd = best_fit(&interval, &params(3)).unwrap();

        assert_eq!(even.width(), 30.0);
        assert_eq!(odd.width(), 52.0);
        assert_eq!(odd.quality(), 44);

        // Parity only moves the origin; the steps stay whole pixels
        assert_eq!(odd.pitches.primary, 52.0);
        assert_eq!(odd.pitches.secondary, 45.0);
        assert_eq!(odd.stretch, even_stretch_at(52.0));

        // The 44th rendered row center is still within a pixel of the ideal one
        let phase = params(3).phase();
        let ideal = odd.lattice.secondary_pitch();
        let offset = |k: f64| (phase + k * odd.pitches.secondary - k * ideal).abs();
        assert!(offset(44.0) <= 1.0);
        assert!(offset(46.0) > 1.0);
    }

    fn even_stretch_at(width: f64) -> crate::lattice::StretchScore {
        let lattice = LatticeSpec::from_width(width, Orientation::PointyTop).unwrap();
        evaluate_candidate(lattice, &params(2)).unwrap().stretch
    }

    #[test]
    fn test_wider_default_range() {
        let interval = SizeInterval::new(30.0, 90.0).unwrap();
        let p = SearchParams {
            granularity: 2.0,
            ..params(2)
        };
        let fit = best_fit(&interval, &p).unwrap();
        assert_eq!(fit.width(), 82.0);
        assert_eq!(fit.quality(), 70);
    }

    #[test]
    fn test_ties_prefer_smaller_stretch() {
        // With a low cap many widths reach quality 20; 52 px has the smallest |stretch|
        let interval = SizeInterval::new(20.0, 60.0).unwrap();
        let p = SearchParams {
            k_max: 20,
            ..params(2)
        };
        let fit = best_fit(&interval, &p).unwrap();
        assert_eq!(fit.quality(), 20);
        assert_eq!(fit.width(), 52.0);
        assert!(fit.stretch.percent() < 0.0);
    }

    #[test]
    fn test_full_ties_prefer_larger_width() {
        // 30, 45 and 60 share the same stretch and are all capped at 20
        let interval = SizeInterval::new(30.0, 60.0).unwrap();
        let p = SearchParams {
            k_max: 20,
            granularity: 15.0,
            ..params(2)
        };
        let all = sweep_candidates(&interval, &p).unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.iter().all(|c| c.quality() == 20));
        assert_eq!(best_fit(&interval, &p).unwrap().width(), 60.0);
    }

    #[test]
    fn test_rank_orders_quality_first() {
        let p = params(2);
        let twenty = evaluate_candidate(LatticeSpec::new(10.0, Orientation::PointyTop).unwrap(), &p)
            .unwrap();
        let twenty_two =
            evaluate_candidate(LatticeSpec::new(11.0, Orientation::PointyTop).unwrap(), &p)
                .unwrap();
        assert_eq!(twenty_two.quality(), 18);
        assert_eq!(rank_candidates(&twenty_two, &twenty), Ordering::Less);
        assert_eq!(rank_candidates(&twenty, &twenty_two), Ordering::Greater);
        assert_eq!(rank_candidates(&twenty, &twenty), Ordering::Equal);
    }

    #[test]
    fn test_orientation_does_not_change_the_winner() {
        let interval = SizeInterval::new(20.0, 60.0).unwrap();
        let flat = SearchParams {
            orientation: Orientation::FlatTop,
            ..params(2)
        };
        let fit = best_fit(&interval, &flat).unwrap();
        assert_eq!(fit.width(), 30.0);
        assert_eq!(fit.lattice.orientation(), Orientation::FlatTop);
    }

    #[test]
    fn test_tiny_interval_is_degenerate() {
        // Every width below half a pixel rounds its pitch to nothing
        let interval = SizeInterval::new(0.1, 0.4).unwrap();
        let p = SearchParams {
            granularity: 0.1,
            ..params(2)
        };
        let err = best_fit(&interval, &p).unwrap_err();
        assert!(matches!(err, HexFitError::DegenerateResult(_)), "{:?}", err);

        let exact = SizeInterval::exact(0.4).unwrap();
        assert!(matches!(
            best_fit(&exact, &params(2)),
            Err(HexFitError::DegenerateResult(_))
        ));
    }

    #[test]
    fn test_invalid_params_fail_fast() {
        let interval = SizeInterval::new(20.0, 60.0).unwrap();
        let zero_step = SearchParams {
            granularity: 0.0,
            ..params(2)
        };
        assert!(matches!(
            best_fit(&interval, &zero_step),
            Err(HexFitError::InvalidSize(_))
        ));
        let zero_cap = SearchParams {
            k_max: 0,
            ..params(2)
        };
        assert!(matches!(
            best_fit(&interval, &zero_cap),
            Err(HexFitError::InvalidSize(_))
        ));
        let reversed = SizeInterval {
            min_width: 60.0,
            max_width: 20.0,
        };
        assert!(matches!(
            best_fit(&reversed, &params(2)),
            Err(HexFitError::InvalidInterval(_))
        ));
    }

    #[test]
    fn test_tiny_granularity_is_rejected_before_sweeping() {
        let interval = SizeInterval::new(20.0, 60.0).unwrap();
        let p = SearchParams {
            granularity: 1e-20,
            ..params(2)
        };
        assert!(matches!(
            best_fit(&interval, &p),
            Err(HexFitError::InvalidSize(_))
        ));
        // The exact sentinel never steps, so any positive granularity is fine
        let exact = SizeInterval::exact(20.0).unwrap();
        assert_eq!(best_fit(&exact, &p).unwrap().width(), 20.0);
    }

    #[test]
    fn test_search_is_deterministic() {
        let interval = SizeInterval::new(24.0, 80.0).unwrap();
        let first = best_fit(&interval, &params(3)).unwrap();
        let second = best_fit(&interval, &params(3)).unwrap();
        assert_eq!(first, second);
    }
}
