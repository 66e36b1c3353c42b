use super::*;

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn next_range_stays_in_band() {
    let mut rng = Rng64::new(7);
    for _ in 0..1000 {
        let v = rng.next_range(10.0, 40.0);
        assert!(v >= 10.0);
        assert!(v < 40.0);
    }
}

#[test]
fn next_range_empty_band_returns_lo() {
    let mut rng = Rng64::new(7);
    assert_eq!(rng.next_range(5.0, 5.0), 5.0);
    assert_eq!(rng.next_range(9.0, 3.0), 9.0);
}

#[test]
fn next_index_stays_in_bounds() {
    let mut rng = Rng64::new(99);
    for _ in 0..1000 {
        assert!(rng.next_index(3) < 3);
    }
    assert_eq!(rng.next_index(0), 0);
}

#[test]
fn smooth_abs_has_a_positive_floor() {
    let floor = SMOOTH_ABS_EPSILON.sqrt();
    for i in 0..100 {
        let v = i as f64 / 100.0;
        assert!(smooth_abs(v) >= floor);
    }
    assert_eq!(smooth_abs(0.5), floor);
}

#[test]
fn smooth_abs_is_continuous_at_the_fold() {
    let eps = 1e-6;
    let delta = (smooth_abs(0.5 - eps) - smooth_abs(0.5 + eps)).abs();
    assert!(delta < 1e-9);
}

#[test]
fn smooth_abs_is_symmetric_around_half() {
    for i in 0..=50 {
        let d = i as f64 / 100.0;
        let lo = smooth_abs(0.5 - d);
        let hi = smooth_abs(0.5 + d);
        assert!((lo - hi).abs() < 1e-12);
    }
}

#[test]
fn lerp_endpoints() {
    assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
    assert_eq!(lerp(2.0, 10.0, 0.5), 6.0);
}
