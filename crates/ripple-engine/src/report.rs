//! Per-frame counters reported by the driver.

use ripple_core::SurfaceId;

/// What one [`SurfaceDriver::step`](crate::SurfaceDriver::step) call did.
///
/// Plain data for host telemetry; the redraw list is the driver-level form
/// of the per-surface redraw-request signal.
#[derive(Clone, Debug, Default)]
pub struct StepReport {
    /// Surfaces visited this frame (active or not).
    pub surfaces_stepped: u32,
    /// Surfaces that completed an integration pass and request a redraw,
    /// in driver iteration order.
    pub redrawn: Vec<SurfaceId>,
    /// Impulses drained from the mailbox and applied.
    pub impulses_applied: u32,
    /// Impulses addressed to an unregistered surface.
    pub impulses_dropped: u32,
    /// Lattice rebuilds triggered by anchor movement.
    pub rebuilds: u32,
    /// Extent recomputations that failed and suspended their surface.
    pub extent_failures: u32,
}
