//! Mapping from choice indices to movement headings.

use crate::ChoiceId;

/// `C` equally spaced headings: choice `k` points at `k * 360 / C` degrees,
/// measured counter-clockwise from the +x axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Compass {
    choice_count: usize,
}

impl Compass {
    /// Counts above `u16::MAX` are clamped to it, the size of the
    /// [`ChoiceId`] space.
    #[inline]
    pub fn new(choice_count: usize) -> Self {
        Self { choice_count: choice_count.min(u16::MAX as usize) }
    }

    /// Number of distinct headings (`C`).
    #[inline]
    pub fn len(&self) -> usize {
        self.choice_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.choice_count == 0
    }

    /// Angular spacing between neighbouring headings, in degrees.
    #[inline]
    pub fn resolution_degrees(&self) -> f64 {
        360.0 / self.choice_count as f64
    }

    /// Heading of `choice` in degrees, in `[0, 360)`.
    #[inline]
    pub fn heading_degrees(&self, choice: ChoiceId) -> f64 {
        choice.index() as f64 * self.resolution_degrees()
    }

    /// `(cos θ, sin θ)` for the heading of `choice`.
    #[inline]
    pub fn unit_vector(&self, choice: ChoiceId) -> (f64, f64) {
        let theta = self.heading_degrees(choice).to_radians();
        (theta.cos(), theta.sin())
    }

    /// All choices in ascending index order.
    pub fn choices(&self) -> impl Iterator<Item = ChoiceId> {
        ChoiceId::range(self.choice_count)
    }
}
