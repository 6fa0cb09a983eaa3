use super::*;

const CURVES: [Ease; 11] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::OutQuart,
    Ease::InOutQuart,
    Ease::OutQuint,
    Ease::InOutQuint,
];

#[test]
fn all_curves_pin_endpoints() {
    for ease in CURVES {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?} at 0");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?} at 1");
    }
}

#[test]
fn all_curves_clamp_out_of_range_input() {
    for ease in CURVES {
        assert_eq!(ease.apply(-3.0), 0.0, "{ease:?} below");
        assert_eq!(ease.apply(4.0), 1.0, "{ease:?} above");
    }
}

#[test]
fn all_curves_stay_in_unit_range_and_are_monotone() {
    for ease in CURVES {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = ease.apply(i as f64 / 100.0);
            assert!((0.0..=1.0).contains(&v), "{ease:?} at {i}");
            assert!(v >= prev - 1e-12, "{ease:?} decreased at {i}");
            prev = v;
        }
    }
}

#[test]
fn inout_curves_hit_half_at_half() {
    for ease in [
        Ease::InOutQuad,
        Ease::InOutCubic,
        Ease::InOutQuart,
        Ease::InOutQuint,
    ] {
        assert!((ease.apply(0.5) - 0.5).abs() < 1e-12, "{ease:?}");
    }
}
