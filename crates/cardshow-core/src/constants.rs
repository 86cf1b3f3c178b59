// Tuning for the page effects. Distances are CSS pixels, physics values are
// per animation frame.

// Hero hammer follow
pub const TILT_DIVISOR: f32 = 15.0; // pointer offset from center -> translate px
pub const TILT_ROTATION_DIVISOR: f32 = 4.0; // translate px -> rotate deg

// Hero parallax
pub const PARALLAX_SPEED: f32 = 0.5;

// Physics toy
pub const BODY_SIZE: f32 = 50.0;
pub const BODY_START: [f32; 2] = [100.0, 100.0];
pub const FLOOR_INSET: f32 = 70.0; // floor sits this far above the container bottom
pub const GRAVITY: f32 = 0.6;
pub const FRICTION: f32 = 0.98;
pub const BOUNCE: f32 = 0.65;
pub const DRAG_VELOCITY_SCALE: f32 = 0.6; // pointer delta -> throw velocity
pub const REST_SPEED: f32 = 0.1; // below this on both axes the loop may stop
pub const FLOOR_SETTLE_SPEED: f32 = 1.0; // vertical bounce below this is absorbed
