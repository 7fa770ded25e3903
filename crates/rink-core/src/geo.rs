//! Planar points and the wrap-around rectangular domain.
//!
//! Coordinates are `f64`.  Every position held by the simulation satisfies
//! `0 <= x < width` and `0 <= y < height`; [`Torus::wrap`] is the only way
//! positions are brought back into range after a move.

use std::fmt;

use crate::SimRng;

/// A point on the plane.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line Euclidean distance, ignoring wrap-around.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        (dx * dx + dy * dy).sqrt()
    }

    /// The point shifted by `(dx, dy)`, without wrapping.
    #[inline]
    pub fn translate(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

// ── Torus ─────────────────────────────────────────────────────────────────────

/// A `width × height` rectangle whose opposite edges are glued together.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Torus {
    pub width:  f64,
    pub height: f64,
}

impl Torus {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Bring `p` back into `[0, width) × [0, height)`.
    #[inline]
    pub fn wrap(&self, p: Point) -> Point {
        Point::new(wrap_coord(p.x, self.width), wrap_coord(p.y, self.height))
    }

    /// `true` if `p` lies inside the half-open domain.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (0.0..self.width).contains(&p.x) && (0.0..self.height).contains(&p.y)
    }

    /// Shortest distance between two in-domain points over all nine periodic
    /// images.
    pub fn distance(&self, a: Point, b: Point) -> f64 {
        let mut dx = (a.x - b.x).abs();
        let mut dy = (a.y - b.y).abs();
        dx = dx.min(self.width - dx);
        dy = dy.min(self.height - dy);
        (dx * dx + dy * dy).sqrt()
    }

    /// Draw a point uniformly from the domain.
    pub fn random_point(&self, rng: &mut SimRng) -> Point {
        Point::new(rng.gen_range(0.0..self.width), rng.gen_range(0.0..self.height))
    }
}

/// Euclidean remainder that never returns `extent` itself.
///
/// `rem_euclid` can round a tiny negative input up to exactly `extent`; that
/// value is folded to `0.0` so the half-open invariant holds.
#[inline]
pub(crate) fn wrap_coord(value: f64, extent: f64) -> f64 {
    let v = value.rem_euclid(extent);
    if v >= extent { 0.0 } else { v }
}
