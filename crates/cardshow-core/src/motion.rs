//! Pointer- and scroll-driven transforms for the hero section and in-page
//! anchor navigation.

use crate::constants::{PARALLAX_SPEED, TILT_DIVISOR, TILT_ROTATION_DIVISOR};
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub translate: Vec2,
    pub rotate_deg: f32,
}

/// Offset of the hammer for a pointer at `pointer` (relative to the hero's
/// top-left corner) inside a hero of `size`.
pub fn hammer_tilt(pointer: Vec2, size: Vec2) -> Tilt {
    let translate = (pointer - size * 0.5) / TILT_DIVISOR;
    Tilt {
        translate,
        rotate_deg: translate.x / TILT_ROTATION_DIVISOR,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxFrame {
    pub offset_y: f32,
    pub opacity: f32,
}

/// Hero content transform for a scroll offset, `None` once the hero has
/// scrolled fully out of the viewport.
pub fn hero_parallax(scroll_y: f32, viewport_height: f32) -> Option<ParallaxFrame> {
    if viewport_height <= 0.0 || scroll_y >= viewport_height {
        return None;
    }
    Some(ParallaxFrame {
        offset_y: scroll_y * PARALLAX_SPEED,
        opacity: 1.0 - scroll_y / viewport_height,
    })
}

/// Selector an in-page link scrolls to. A bare `#` and non-fragment links
/// yield `None`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#')
        .filter(|id| !id.is_empty())
        .map(|_| href)
}
