//! The ordered lattice of surface points.

use crate::extent::Extent;
use ripple_core::Vec2;

/// One node of the water surface: a local-space position plus a
/// velocity-like motion accumulator.
///
/// The accumulator is not mass-normalized; forces add into it directly and
/// the integrator scales it by the frame delta when moving the position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfacePoint {
    /// Position local to the water's origin.
    pub position: Vec2,
    /// Accumulated motion, decayed by damping each frame.
    pub motion: Vec2,
}

/// The ordered sequence of surface points spanning a validated extent.
///
/// Points are stored in strictly increasing x order, evenly spaced, one
/// lattice per water instance. The index is the only point identity and is
/// invalidated by every [`rebuild`](PointLattice::rebuild): regeneration is
/// always bulk (clear, then refill), never incremental.
#[derive(Clone, Debug, Default)]
pub struct PointLattice {
    points: Vec<SurfacePoint>,
    span_start: f32,
    width: f32,
    spacing: f32,
}

impl PointLattice {
    /// An empty lattice. Stepping or querying an empty lattice is a no-op.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all points and regenerate the lattice across `extent`.
    ///
    /// Generates `floor(width / spacing)` points; point `i` sits at local
    /// `(top_left.x + spacing * (i + 0.5), top_left.y)`, centered in its
    /// slot. Any remainder width is dropped, not stretched into a wider
    /// final slot. All motion state is discarded — the visual snap on a
    /// resize is an accepted trade-off.
    ///
    /// # Panics
    ///
    /// Panics if `spacing` is not finite and strictly positive; the
    /// surface configuration validates this before any rebuild.
    pub fn rebuild(&mut self, extent: &Extent, spacing: f32) {
        assert!(
            spacing.is_finite() && spacing > 0.0,
            "point spacing must be finite and > 0"
        );
        self.points.clear();
        let top_left = extent.top_left();
        self.span_start = top_left.x;
        self.width = extent.width();
        self.spacing = spacing;

        let count = (self.width / spacing).floor() as usize;
        self.points.reserve(count);
        for i in 0..count {
            self.points.push(SurfacePoint {
                position: Vec2::new(top_left.x + spacing * (i as f32 + 0.5), top_left.y),
                motion: Vec2::ZERO,
            });
        }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the lattice holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points, left to right.
    pub fn points(&self) -> &[SurfacePoint] {
        &self.points
    }

    /// Mutable access for the force integrator.
    ///
    /// Mutation through this slice must keep the strictly-increasing x
    /// order intact; the integrator only ever moves points vertically.
    pub fn points_mut(&mut self) -> &mut [SurfacePoint] {
        &mut self.points
    }

    /// Local position of point `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn local_position(&self, i: usize) -> Vec2 {
        self.points[i].position
    }

    /// Position of point `i` translated into world space.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn world_position(&self, i: usize, origin: Vec2) -> Vec2 {
        self.points[i].position + origin
    }

    /// Add `delta` to point `i`'s motion accumulator, returning the
    /// applied delta.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn nudge(&mut self, i: usize, delta: Vec2) -> Vec2 {
        self.points[i].motion += delta;
        delta
    }

    /// Local x of the extent's left edge at the last rebuild.
    pub(crate) fn span_start(&self) -> f32 {
        self.span_start
    }

    /// Extent width at the last rebuild.
    pub(crate) fn span_width(&self) -> f32 {
        self.width
    }

    /// Point spacing at the last rebuild.
    pub fn spacing(&self) -> f32 {
        self.spacing
    }
}
