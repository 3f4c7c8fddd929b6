//! Queued external forces.
//!
//! Hosts that want to poke the water from input handlers or gameplay code
//! without holding a `&mut WaterSurface` submit [`Impulse`] values through
//! a bounded channel; the frame driver drains the mailbox at the start of
//! each frame, before integration, so application never overlaps the
//! integrator's mutation of the lattice.

use ripple_core::{SurfaceId, Vec2};

/// Conventional splash radius when the caller has no better value.
pub const DEFAULT_IMPULSE_RADIUS: f32 = 16.0;

/// An external force aimed at one surface.
///
/// # Examples
///
/// ```
/// use ripple_core::{SurfaceId, Vec2};
/// use ripple_engine::{Impulse, DEFAULT_IMPULSE_RADIUS};
///
/// let splash = Impulse::new(SurfaceId(0), Vec2::new(40.0, 0.0), Vec2::new(0.0, 12.0));
/// assert_eq!(splash.radius, DEFAULT_IMPULSE_RADIUS);
///
/// let wide = splash.with_radius(32.0);
/// assert_eq!(wide.radius, 32.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Impulse {
    /// The surface to hit.
    pub surface: SurfaceId,
    /// World-space application point.
    pub position: Vec2,
    /// The force vector, redirected per point on application.
    pub force: Vec2,
    /// Interaction radius around `position`.
    pub radius: f32,
}

impl Impulse {
    /// An impulse with [`DEFAULT_IMPULSE_RADIUS`].
    pub fn new(surface: SurfaceId, position: Vec2, force: Vec2) -> Self {
        Self {
            surface,
            position,
            force,
            radius: DEFAULT_IMPULSE_RADIUS,
        }
    }

    /// Same impulse with an explicit radius.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }
}

/// Sending half of the driver's impulse mailbox.
///
/// Cloneable; obtained from
/// [`SurfaceDriver::impulse_sender`](crate::SurfaceDriver::impulse_sender).
pub type ImpulseSender = crossbeam_channel::Sender<Impulse>;
