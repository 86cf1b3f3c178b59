use cardshow_core::{Body, BODY_SIZE, BODY_START, FLOOR_INSET};
use glam::Vec2;

const BOUNDS: Vec2 = Vec2::new(400.0, 300.0);

fn run_until_rest(body: &mut Body, max_frames: usize) -> usize {
    for frame in 0..max_frames {
        if !body.step(BOUNDS) {
            return frame + 1;
        }
    }
    max_frames
}

#[test]
fn body_starts_at_home_position() {
    let body = Body::new();
    assert_eq!(body.position, Vec2::from(BODY_START));
    assert_eq!(body.velocity, Vec2::ZERO);
    assert!(!body.is_dragging());
}

#[test]
fn dropped_body_settles_on_the_floor() {
    let mut body = Body::new();
    let frames = run_until_rest(&mut body, 10_000);
    assert!(frames < 10_000, "never settled");
    assert_eq!(body.position.y, Body::floor(BOUNDS));
    assert_eq!(body.position.y, BOUNDS.y - FLOOR_INSET);
    assert_eq!(body.velocity.y, 0.0);
}

#[test]
fn thrown_body_stays_inside_the_walls() {
    let mut body = Body::new();
    body.velocity = Vec2::new(40.0, -30.0);
    for _ in 0..2_000 {
        let moving = body.step(BOUNDS);
        assert!(body.position.x >= 0.0 && body.position.x <= BOUNDS.x - BODY_SIZE);
        assert!(body.position.y >= 0.0 && body.position.y <= Body::floor(BOUNDS));
        if !moving {
            break;
        }
    }
}

#[test]
fn wall_hit_reflects_and_damps() {
    let mut body = Body::new();
    body.position = Vec2::new(5.0, 100.0);
    body.velocity = Vec2::new(-10.0, 0.0);
    body.step(BOUNDS);
    assert_eq!(body.position.x, 0.0);
    assert!(body.velocity.x > 0.0);
    assert!(body.velocity.x < 10.0);
}

#[test]
fn drag_follows_pointer_and_clamps() {
    let origin = Vec2::new(10.0, 20.0);
    let mut body = Body::new();
    assert!(!body.drag_to(Vec2::new(200.0, 200.0), origin, BOUNDS));

    body.grab(Vec2::new(100.0, 100.0));
    assert!(body.drag_to(Vec2::new(110.0, 120.0), origin, BOUNDS));
    // centered under the pointer
    assert_eq!(body.position, Vec2::new(110.0 - 10.0 - 25.0, 120.0 - 20.0 - 25.0));
    assert_eq!(body.velocity, Vec2::new(10.0, 20.0) * 0.6);

    body.drag_to(Vec2::new(5_000.0, -5_000.0), origin, BOUNDS);
    assert_eq!(body.position, Vec2::new(BOUNDS.x - BODY_SIZE, 0.0));
}

#[test]
fn tiny_container_pins_dragged_body_at_origin() {
    let mut body = Body::new();
    body.grab(Vec2::ZERO);
    body.drag_to(Vec2::new(30.0, 30.0), Vec2::ZERO, Vec2::new(20.0, 20.0));
    assert_eq!(body.position, Vec2::ZERO);
}

#[test]
fn dragged_body_ignores_frames() {
    let mut body = Body::new();
    body.grab(Vec2::ZERO);
    let before = body.position;
    assert!(!body.step(BOUNDS));
    assert_eq!(body.position, before);

    assert!(body.release());
    assert!(!body.release());
    assert!(body.step(BOUNDS));
}
