use super::*;

#[test]
fn progress_clamps_out_of_range_input() {
    assert_eq!(Progress::new(-0.5).clamped(), 0.0);
    assert_eq!(Progress::new(0.25).clamped(), 0.25);
    assert_eq!(Progress::new(1.8).clamped(), 1.0);
}

#[test]
fn vec3_lerp_midpoint_is_componentwise() {
    let a = Vec3::new(0.0, 10.0, -1000.0);
    let b = Vec3::new(100.0, -10.0, 2000.0);
    assert_eq!(Vec3::lerp(a, b, 0.5), Vec3::new(50.0, 0.0, 500.0));
}

#[test]
fn rgb_lerp_channels_are_integer_and_bounded() {
    let mid = Rgb::lerp(Rgb::BLACK, Rgb::WHITE, 0.5);
    assert_eq!(mid, Rgb::new(128, 128, 128));
    // Driven-forward policy: t outside [0, 1] still lands on a valid channel.
    assert_eq!(Rgb::lerp(Rgb::BLACK, Rgb::WHITE, 2.0), Rgb::WHITE);
    assert_eq!(Rgb::lerp(Rgb::BLACK, Rgb::WHITE, -1.0), Rgb::BLACK);
}

#[test]
fn target_state_lerp_keeps_defined_color_endpoint() {
    let mut a = TargetState::identity();
    let b = TargetState {
        color: Some(Rgb::BLACK),
        ..TargetState::identity()
    };
    assert_eq!(TargetState::lerp(&a, &b, 0.5).color, Some(Rgb::BLACK));
    a.color = Some(Rgb::WHITE);
    assert_eq!(
        TargetState::lerp(&a, &b, 0.5).color,
        Some(Rgb::new(128, 128, 128))
    );
}

#[test]
fn viewport_mobile_breakpoint_is_exclusive_at_1000() {
    assert!(Viewport::new(999.0, 800.0).is_mobile());
    assert!(!Viewport::new(1000.0, 800.0).is_mobile());
    assert!(!Viewport::new(1920.0, 1080.0).is_mobile());
}
