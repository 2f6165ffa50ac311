use super::*;

const ALL: [Ease; 11] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InQuart,
    Ease::OutQuart,
    Ease::InOutSine,
    Ease::OutBack { overshoot: 1.2 },
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?} at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?} at 1");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::InQuart,
        Ease::OutQuart,
        Ease::InOutSine,
    ] {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn out_back_overshoots_then_settles() {
    let ease = Ease::OutBack { overshoot: 1.2 };
    assert!(ease.apply(0.7) > 1.0);
    assert!((ease.apply(1.0) - 1.0).abs() < 1e-12);
}

#[test]
fn in_out_sine_is_symmetric() {
    let ease = Ease::InOutSine;
    assert!((ease.apply(0.5) - 0.5).abs() < 1e-12);
    for t in [0.1, 0.2, 0.3, 0.4] {
        assert!((ease.apply(t) + ease.apply(1.0 - t) - 1.0).abs() < 1e-12);
    }
}

#[test]
fn progress_is_clamped() {
    for ease in ALL {
        assert!(ease.apply(-1.0).abs() < 1e-12, "{ease:?}");
        assert!((ease.apply(2.0) - 1.0).abs() < 1e-12, "{ease:?}");
    }
}
