//! 2D vector helpers
//!
//! Thin value-semantics wrappers over [`glam::Vec2`]. Every operation returns
//! a new vector; nothing is mutated in place.

use glam::Vec2;

/// Component-wise sum
#[inline]
pub fn add(a: Vec2, b: Vec2) -> Vec2 {
    a + b
}

/// Multiply by a scalar
#[inline]
pub fn scale(v: Vec2, k: f32) -> Vec2 {
    v * k
}

/// Euclidean length
#[inline]
pub fn magnitude(v: Vec2) -> f32 {
    v.length()
}

/// Unit vector in the direction of `v`
///
/// A zero-length vector has no direction and is returned unchanged.
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    let len = v.length();
    if len > 0.0 { v / len } else { v }
}

/// Reflect `v` about a surface normal: v' = v - 2(v·n)n
///
/// `normal` must be unit length. It is not renormalized here; a non-unit
/// normal gives a scaled, meaningless result.
#[inline]
pub fn reflect(v: Vec2, normal: Vec2) -> Vec2 {
    v - 2.0 * v.dot(normal) * normal
}
