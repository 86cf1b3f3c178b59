// Inline style values. Kept free of web-sys so host tests can include it.

#[inline]
pub fn px(v: f32) -> String {
    format!("{}px", v)
}

#[inline]
pub fn translate_rotate(dx: f32, dy: f32, deg: f32) -> String {
    format!("translate({}px, {}px) rotate({}deg)", dx, dy, deg)
}

#[inline]
pub fn translate_y(dy: f32) -> String {
    format!("translateY({}px)", dy)
}

/// Opacity clamped to the CSS range.
#[inline]
pub fn opacity(alpha: f32) -> String {
    format!("{}", alpha.clamp(0.0, 1.0))
}
