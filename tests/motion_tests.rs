use cardshow_core::{anchor_target, hammer_tilt, hero_parallax};
use glam::Vec2;

#[test]
fn hammer_rests_at_center() {
    let tilt = hammer_tilt(Vec2::new(300.0, 200.0), Vec2::new(600.0, 400.0));
    assert_eq!(tilt.translate, Vec2::ZERO);
    assert_eq!(tilt.rotate_deg, 0.0);
}

#[test]
fn hammer_leans_towards_pointer() {
    let tilt = hammer_tilt(Vec2::new(600.0, 0.0), Vec2::new(600.0, 400.0));
    assert_eq!(tilt.translate, Vec2::new(20.0, -200.0 / 15.0));
    assert_eq!(tilt.rotate_deg, 5.0);
}

#[test]
fn parallax_at_top_is_identity() {
    let frame = hero_parallax(0.0, 800.0).unwrap();
    assert_eq!(frame.offset_y, 0.0);
    assert_eq!(frame.opacity, 1.0);
}

#[test]
fn parallax_moves_at_half_speed_and_fades() {
    let frame = hero_parallax(200.0, 800.0).unwrap();
    assert_eq!(frame.offset_y, 100.0);
    assert!((frame.opacity - 0.75).abs() < 1e-6);
}

#[test]
fn parallax_stops_past_the_first_screen() {
    assert!(hero_parallax(800.0, 800.0).is_none());
    assert!(hero_parallax(1200.0, 800.0).is_none());
    assert!(hero_parallax(10.0, 0.0).is_none());
}

#[test]
fn anchor_targets() {
    assert_eq!(anchor_target("#features"), Some("#features"));
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target(""), None);
    assert_eq!(anchor_target("/pricing#plans"), None);
}
