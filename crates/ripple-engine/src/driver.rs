//! Lockstep frame driver over every surface of a host scene.
//!
//! The host calls [`SurfaceDriver::step`] once per frame with the current
//! anchor and origin sample for each surface. The driver performs the
//! cheap anchor comparison, recomputes the extent and rebuilds only on
//! actual movement, drains the impulse mailbox, then runs every active
//! surface's integration pass. A frame in which nothing moved costs one
//! comparison per surface, not a rebuild.

use crossbeam_channel::{Receiver, Sender};
use indexmap::IndexMap;

use crate::impulse::{Impulse, ImpulseSender};
use crate::report::StepReport;
use crate::surface::WaterSurface;
use ripple_core::{SurfaceId, Vec2};

/// Anchor movement below this threshold, per component, is treated as
/// jitter and does not trigger a recomputation.
pub const ANCHOR_EPSILON: f32 = 1e-3;

/// One frame's worth of host-side state for a surface.
///
/// Anchor positions are in the water's local space (anchors track the
/// water node, so moving the node moves the water without a rebuild);
/// `origin` is the node's world position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HostSample {
    /// Position of the top-left anchor, local to the water's origin.
    pub top_left_anchor: Vec2,
    /// Position of the bottom-right anchor, local to the water's origin.
    pub bottom_right_anchor: Vec2,
    /// World position of the owning node.
    pub origin: Vec2,
}

struct Slot {
    surface: WaterSurface,
    last_anchors: Option<(Vec2, Vec2)>,
}

/// Steps a set of water surfaces in lockstep with the host frame loop.
///
/// Surfaces are stored in insertion order and always visited in that
/// order, which keeps multi-surface runs deterministic. The driver owns
/// the impulse mailbox; senders obtained from
/// [`impulse_sender`](SurfaceDriver::impulse_sender) can be handed to
/// gameplay code and stay valid for the driver's lifetime.
pub struct SurfaceDriver {
    surfaces: IndexMap<SurfaceId, Slot>,
    impulse_tx: Sender<Impulse>,
    impulse_rx: Receiver<Impulse>,
}

impl SurfaceDriver {
    /// Create a driver whose impulse mailbox holds at most
    /// `impulse_capacity` pending entries; submission past that bound
    /// fails at the sender.
    ///
    /// # Panics
    ///
    /// Panics if `impulse_capacity` is zero.
    pub fn new(impulse_capacity: usize) -> Self {
        assert!(
            impulse_capacity > 0,
            "impulse mailbox capacity must be at least 1"
        );
        let (impulse_tx, impulse_rx) = crossbeam_channel::bounded(impulse_capacity);
        Self {
            surfaces: IndexMap::new(),
            impulse_tx,
            impulse_rx,
        }
    }

    /// Register a surface under `id`, replacing any previous holder of
    /// the same id.
    pub fn insert(&mut self, id: SurfaceId, surface: WaterSurface) {
        self.surfaces.insert(
            id,
            Slot {
                surface,
                last_anchors: None,
            },
        );
    }

    /// Remove and return a surface. Later surfaces keep their relative
    /// order.
    pub fn remove(&mut self, id: SurfaceId) -> Option<WaterSurface> {
        self.surfaces.shift_remove(&id).map(|slot| slot.surface)
    }

    /// Number of registered surfaces.
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Whether no surfaces are registered.
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Shared access to a surface.
    pub fn surface(&self, id: SurfaceId) -> Option<&WaterSurface> {
        self.surfaces.get(&id).map(|slot| &slot.surface)
    }

    /// Mutable access to a surface, e.g. for direct
    /// [`apply_force`](WaterSurface::apply_force) calls from the frame
    /// thread.
    pub fn surface_mut(&mut self, id: SurfaceId) -> Option<&mut WaterSurface> {
        self.surfaces.get_mut(&id).map(|slot| &mut slot.surface)
    }

    /// A sender for the impulse mailbox.
    pub fn impulse_sender(&self) -> ImpulseSender {
        self.impulse_tx.clone()
    }

    /// Run one frame.
    ///
    /// For each surface with a sample: refresh the origin, compare the
    /// anchors against the last seen pair, and on movement beyond
    /// [`ANCHOR_EPSILON`] recompute the extent (an invalid pair is
    /// reported through the `log` facade at error level and suspends that
    /// surface; the loop keeps running). Then drain the impulse mailbox
    /// and step every surface. Surfaces without a sample keep their
    /// previous anchors and origin.
    pub fn step(
        &mut self,
        dt: f32,
        elapsed_ms: u64,
        samples: &IndexMap<SurfaceId, HostSample>,
    ) -> StepReport {
        let mut report = StepReport::default();

        for (id, slot) in &mut self.surfaces {
            let Some(sample) = samples.get(id) else {
                continue;
            };
            slot.surface.set_origin(sample.origin);

            let anchors = (sample.top_left_anchor, sample.bottom_right_anchor);
            let moved = match slot.last_anchors {
                Some((tl, br)) => {
                    !tl.abs_diff_le(anchors.0, ANCHOR_EPSILON)
                        || !br.abs_diff_le(anchors.1, ANCHOR_EPSILON)
                }
                None => true,
            };
            if !moved {
                continue;
            }
            slot.last_anchors = Some(anchors);
            match slot.surface.update_anchors(anchors.0, anchors.1) {
                Ok(()) => report.rebuilds += 1,
                Err(err) => {
                    report.extent_failures += 1;
                    log::error!("water surface {id}: {err}; simulation suspended");
                }
            }
        }

        while let Ok(impulse) = self.impulse_rx.try_recv() {
            match self.surfaces.get_mut(&impulse.surface) {
                Some(slot) => {
                    slot.surface
                        .apply_force(impulse.position, impulse.force, impulse.radius);
                    report.impulses_applied += 1;
                }
                None => {
                    report.impulses_dropped += 1;
                    log::warn!("impulse for unknown water surface {}", impulse.surface);
                }
            }
        }

        for (id, slot) in &mut self.surfaces {
            report.surfaces_stepped += 1;
            if slot.surface.step_frame(dt, elapsed_ms) {
                report.redrawn.push(*id);
            }
        }

        report
    }
}

impl std::fmt::Debug for SurfaceDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceDriver")
            .field("surfaces", &self.surfaces.len())
            .field("pending_impulses", &self.impulse_rx.len())
            .finish()
    }
}
