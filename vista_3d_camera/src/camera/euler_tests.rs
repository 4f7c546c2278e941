use glam::Quat;
use std::f32::consts::FRAC_PI_4;
use super::*;

const EPS: f32 = 1e-5;

/// Quaternion equality up to sign (q and -q encode the same rotation).
fn assert_quat_approx_eq(a: Quat, b: Quat) {
    assert!(
        a.dot(b).abs() > 1.0 - EPS,
        "quaternions differ: {:?} vs {:?}",
        a,
        b
    );
}

// ============================================================================
// to_quat
// ============================================================================

#[test]
fn test_default_angles_compose_to_identity() {
    let angles = EulerAngles::default();
    assert_quat_approx_eq(angles.to_quat(), Quat::IDENTITY);
}

#[test]
fn test_pure_yaw_equals_rotation_about_y() {
    let angles = EulerAngles::new(0.0, 0.7, 0.0);
    assert_quat_approx_eq(angles.to_quat(), Quat::from_rotation_y(0.7));
}

#[test]
fn test_pure_pitch_equals_rotation_about_x() {
    let angles = EulerAngles::new(-0.3, 0.0, 0.0);
    assert_quat_approx_eq(angles.to_quat(), Quat::from_rotation_x(-0.3));
}

#[test]
fn test_pure_roll_equals_rotation_about_z() {
    let angles = EulerAngles::new(0.0, 0.0, 1.1);
    assert_quat_approx_eq(angles.to_quat(), Quat::from_rotation_z(1.1));
}

#[test]
fn test_composition_order_is_yaw_pitch_roll() {
    // Intrinsic Y-X-Z: yaw first, then pitch, then roll
    let angles = EulerAngles::new(0.4, 0.6, 0.2);
    let expected = Quat::from_rotation_y(0.6)
        * Quat::from_rotation_x(0.4)
        * Quat::from_rotation_z(0.2);
    assert_quat_approx_eq(angles.to_quat(), expected);
}

// ============================================================================
// from_quat
// ============================================================================

#[test]
fn test_identity_decomposes_to_zero_angles() {
    let angles = EulerAngles::from_quat(Quat::IDENTITY);
    assert!(angles.pitch.abs() < EPS);
    assert!(angles.yaw.abs() < EPS);
    assert!(angles.roll.abs() < EPS);
}

#[test]
fn test_single_axis_decomposition() {
    let angles = EulerAngles::from_quat(Quat::from_rotation_y(FRAC_PI_4));
    assert!((angles.yaw - FRAC_PI_4).abs() < EPS);
    assert!(angles.pitch.abs() < EPS);
    assert!(angles.roll.abs() < EPS);
}

#[test]
fn test_round_trip_away_from_gimbal_lock() {
    // Pitch strictly inside (-pi/2, pi/2): decomposition is unique there
    let cases = [
        EulerAngles::new(0.0, 0.0, 0.0),
        EulerAngles::new(0.5, -1.2, 0.3),
        EulerAngles::new(-1.2, 2.8, -2.9),
        EulerAngles::new(1.3, 0.4, 1.0),
    ];

    for angles in cases {
        let back = EulerAngles::from_quat(angles.to_quat());
        assert!((back.pitch - angles.pitch).abs() < EPS, "pitch for {:?}", angles);
        assert!((back.yaw - angles.yaw).abs() < EPS, "yaw for {:?}", angles);
        assert!((back.roll - angles.roll).abs() < EPS, "roll for {:?}", angles);
    }
}

#[test]
fn test_round_trip_preserves_rotation_even_when_angles_differ() {
    // Outside the canonical range the triplet may change, but the rotation
    // it encodes must not
    let angles = EulerAngles::new(2.0, 0.3, 0.1);
    let quat = angles.to_quat();
    let recomposed = EulerAngles::from_quat(quat).to_quat();
    assert_quat_approx_eq(quat, recomposed);
}
