//! Draggable body for the physics toy: thrown with the pointer, then falls,
//! bounces off the container walls and settles on a floor.

use crate::constants::{
    BODY_SIZE, BODY_START, BOUNCE, DRAG_VELOCITY_SCALE, FLOOR_INSET, FLOOR_SETTLE_SPEED, FRICTION,
    GRAVITY, REST_SPEED,
};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    /// Top-left corner relative to the container.
    pub position: Vec2,
    pub velocity: Vec2,
    dragging: bool,
    last_pointer: Vec2,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            position: Vec2::from(BODY_START),
            velocity: Vec2::ZERO,
            dragging: false,
            last_pointer: Vec2::ZERO,
        }
    }
}

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Start a drag with the pointer at `pointer` (viewport coordinates).
    pub fn grab(&mut self, pointer: Vec2) {
        self.dragging = true;
        self.last_pointer = pointer;
    }

    /// Follow the pointer while dragging. `origin` and `bounds` are the
    /// container's viewport position and size. Returns false when not dragging.
    pub fn drag_to(&mut self, pointer: Vec2, origin: Vec2, bounds: Vec2) -> bool {
        if !self.dragging {
            return false;
        }
        let centered = pointer - origin - Vec2::splat(BODY_SIZE * 0.5);
        self.velocity = (pointer - self.last_pointer) * DRAG_VELOCITY_SCALE;
        self.last_pointer = pointer;
        // min before max: a container smaller than the body pins it at 0
        self.position = centered.min(bounds - Vec2::splat(BODY_SIZE)).max(Vec2::ZERO);
        true
    }

    /// End a drag; returns whether one was in progress.
    pub fn release(&mut self) -> bool {
        std::mem::replace(&mut self.dragging, false)
    }

    /// Floor height for a container of `bounds`.
    #[inline]
    pub fn floor(bounds: Vec2) -> f32 {
        bounds.y - FLOOR_INSET
    }

    /// Advance one animation frame inside a container of `bounds`. Returns
    /// whether the body is still moving; a dragged body never moves here.
    pub fn step(&mut self, bounds: Vec2) -> bool {
        if self.dragging {
            return false;
        }
        self.velocity.y += GRAVITY;
        self.velocity *= FRICTION;
        self.position += self.velocity;

        let right = bounds.x - BODY_SIZE;
        let floor = Self::floor(bounds);
        if self.position.x <= 0.0 {
            self.position.x = 0.0;
            self.velocity.x *= -BOUNCE;
        }
        if self.position.x >= right {
            self.position.x = right;
            self.velocity.x *= -BOUNCE;
        }
        if self.position.y <= 0.0 {
            self.position.y = 0.0;
            self.velocity.y *= -BOUNCE;
        }
        if self.position.y >= floor {
            self.position.y = floor;
            self.velocity.y *= -BOUNCE;
            if self.velocity.y.abs() < FLOOR_SETTLE_SPEED {
                self.velocity.y = 0.0;
            }
        }

        self.velocity.x.abs() > REST_SPEED
            || self.velocity.y.abs() > REST_SPEED
            || self.position.y < floor
    }
}
