use crate::interpolate::{inverse_lerp, lerp};

#[test]
fn test_lerp_midpoint() {
    assert_eq!(lerp(0.5, 10.0, 20.0), 15.0);
}

#[test]
fn test_lerp_clamps_interpolant() {
    assert_eq!(lerp(-0.5, 10.0, 20.0), 10.0);
    assert_eq!(lerp(1.5, 10.0, 20.0), 20.0);
}

#[test]
fn test_inverse_lerp_recovers_interpolant() {
    let t = inverse_lerp(15.0, 10.0, 20.0);
    assert_eq!(t, 0.5);
    assert_eq!(lerp(t, 10.0, 20.0), 15.0);
}

#[test]
fn test_inverse_lerp_clamps_outside_range() {
    assert_eq!(inverse_lerp(5.0, 10.0, 20.0), 0.0);
    assert_eq!(inverse_lerp(25.0, 10.0, 20.0), 1.0);
}
