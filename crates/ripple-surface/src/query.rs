//! Circular spatial query over the sorted lattice.
//!
//! The lattice's strictly-increasing x order lets a circle query scan only
//! an index window instead of every point: the circle's horizontal reach is
//! mapped to a `[left, right]` index pair by clamped linear interpolation
//! across the lattice span, and only that window is tested for membership.

use crate::lattice::PointLattice;
use ripple_core::Vec2;
use smallvec::SmallVec;

impl PointLattice {
    /// Indices of all points within `radius` of `center` (world space).
    ///
    /// `origin` is the owning water's world position. Returns an empty set
    /// for an empty lattice, and rejects early when `center.x` lies beyond
    /// `[first.x - 2*radius, last.x + 2*radius]` — a deliberately loose
    /// x-only pre-filter that can only cause extra scanning of the clamped
    /// window, never a wrong rejection.
    pub fn indices_within(
        &self,
        origin: Vec2,
        center: Vec2,
        radius: f32,
    ) -> SmallVec<[usize; 16]> {
        let mut hits = SmallVec::new();
        let count = self.len();
        if count == 0 {
            return hits;
        }

        let first_x = origin.x + self.local_position(0).x;
        let last_x = origin.x + self.local_position(count - 1).x;
        if center.x < first_x - 2.0 * radius || center.x > last_x + 2.0 * radius {
            return hits;
        }

        let local = center - origin;
        let left = self.index_near(local.x - radius);
        let right = self.index_near(local.x + radius);

        for i in left..=right {
            let point = self.world_position(i, origin);
            let dx = (point.x - center.x).abs();
            let dy = (point.y - center.y).abs();
            // Diamond accept is a strict subset of the circle; the squared
            // test decides everything the short-circuit leaves behind.
            if dx + dy <= radius || dx * dx + dy * dy <= radius * radius {
                hits.push(i);
            }
        }
        hits
    }

    /// Map a local x to the index of the slot it falls in, clamped to the
    /// lattice bounds. Callers guarantee a non-empty lattice; the span
    /// width is positive by the extent validity invariant, so the
    /// interpolation is total. The float-to-usize cast saturates negative
    /// values to zero, which is exactly the left clamp.
    fn index_near(&self, local_x: f32) -> usize {
        let count = self.len();
        let t = (local_x - self.span_start()) / self.span_width() * count as f32;
        (t.floor() as usize).min(count - 1)
    }
}
