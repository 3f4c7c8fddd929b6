//! One simulated body of water.

use crate::impulse::DEFAULT_IMPULSE_RADIUS;
use crate::integrator;
use ripple_core::{ConfigError, ExtentError, SurfaceConfig, Vec2};
use ripple_surface::{Extent, PointLattice, SurfacePoint};

/// A single water surface: configuration, origin, validated extent, and the
/// point lattice, advanced one frame at a time.
///
/// The lattice is the sole mutable resource and is exclusively owned by its
/// surface; nothing here is shared between instances and nothing executes
/// in parallel. Given identical configuration, anchors, delta-time and
/// elapsed-time sequences, and force calls, two surfaces evolve bit-for-bit
/// identically.
///
/// # Examples
///
/// ```
/// use ripple_core::{SurfaceConfig, Vec2};
/// use ripple_engine::WaterSurface;
///
/// let mut water = WaterSurface::new(SurfaceConfig::default()).unwrap();
/// water.update_anchors(Vec2::new(0.0, 0.0), Vec2::new(80.0, 10.0)).unwrap();
/// assert_eq!(water.points().len(), 10);
///
/// water.apply_force(Vec2::new(40.0, 0.0), Vec2::new(0.0, 8.0), 16.0);
/// assert!(water.step_frame(1.0 / 60.0, 16));
/// ```
#[derive(Debug)]
pub struct WaterSurface {
    config: SurfaceConfig,
    origin: Vec2,
    extent: Option<Extent>,
    suspended: bool,
    lattice: PointLattice,
}

impl WaterSurface {
    /// Create a surface with no extent yet. The first successful
    /// [`update_anchors`](WaterSurface::update_anchors) builds the lattice.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration fails validation.
    pub fn new(config: SurfaceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            origin: Vec2::ZERO,
            extent: None,
            suspended: false,
            lattice: PointLattice::new(),
        })
    }

    /// The water's own world position. Point positions are local to it.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Update the world position. Does not rebuild: the lattice is local,
    /// and the rest height follows the origin automatically.
    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    /// Current configuration.
    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// Takes effect on the next integration pass; `point_spacing` only on
    /// the next rebuild.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] and leaves the current configuration in
    /// place if the replacement fails validation.
    pub fn set_config(&mut self, config: SurfaceConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// The current extent, if one has ever been derived. Stays at the last
    /// valid value while the surface is suspended.
    pub fn extent(&self) -> Option<&Extent> {
        self.extent.as_ref()
    }

    /// Whether the surface simulates and renders. False until the first
    /// valid anchor pair, and after any invalid recomputation until a
    /// later one succeeds.
    pub fn is_active(&self) -> bool {
        self.extent.is_some() && !self.suspended
    }

    /// Recompute the extent from a new anchor pair (positions local to
    /// the water's origin).
    ///
    /// On success the lattice is fully rebuilt (all displacement and
    /// motion discarded) and the surface becomes active. On failure the
    /// previously derived corners and lattice are left untouched and the
    /// surface is suspended until a later call succeeds.
    ///
    /// Callers are expected to invoke this only when an anchor actually
    /// moved; the frame driver performs that comparison.
    ///
    /// # Errors
    ///
    /// Returns [`ExtentError`] when the anchors are inverted or degenerate
    /// on either axis.
    pub fn update_anchors(
        &mut self,
        top_left: Vec2,
        bottom_right: Vec2,
    ) -> Result<(), ExtentError> {
        match Extent::from_anchors(top_left, bottom_right) {
            Ok(extent) => {
                self.lattice.rebuild(&extent, self.config.point_spacing);
                self.extent = Some(extent);
                self.suspended = false;
                Ok(())
            }
            Err(err) => {
                self.suspended = true;
                Err(err)
            }
        }
    }

    /// Advance the simulation one frame.
    ///
    /// `dt` is the frame delta in seconds; `elapsed_ms` a monotonic
    /// millisecond clock driving the passive wave phase. Runs the two
    /// integration passes in order and returns `true` to request a redraw.
    /// A suspended or extent-less surface is a no-op returning `false`.
    pub fn step_frame(&mut self, dt: f32, elapsed_ms: u64) -> bool {
        let extent = match &self.extent {
            Some(extent) if !self.suspended => extent,
            _ => return false,
        };

        let rest_y = self.origin.y + extent.top_left().y;
        let time = integrator::wave_clock(elapsed_ms);
        integrator::accumulate_motion(&mut self.lattice, &self.config, self.origin, rest_y, time);
        integrator::integrate_motion(&mut self.lattice, dt, self.config.damping);
        true
    }

    /// Inject an external force into every point within `radius` of
    /// `world_pos`.
    ///
    /// Each affected point receives `force` scaled component-wise by the
    /// unit vector from the application point toward it, so the delivered
    /// force is attenuated and reoriented per point; a point coincident
    /// with the application point receives nothing. Use
    /// [`DEFAULT_IMPULSE_RADIUS`] for the conventional splash radius.
    pub fn apply_force(&mut self, world_pos: Vec2, force: Vec2, radius: f32) {
        let local = world_pos - self.origin;
        for i in self.lattice.indices_within(self.origin, world_pos, radius) {
            let direction = (self.lattice.local_position(i) - local).normalize_or_zero();
            self.lattice.nudge(i, force * direction);
        }
    }

    /// [`apply_force`](WaterSurface::apply_force) with
    /// [`DEFAULT_IMPULSE_RADIUS`].
    pub fn splash(&mut self, world_pos: Vec2, force: Vec2) {
        self.apply_force(world_pos, force, DEFAULT_IMPULSE_RADIUS);
    }

    /// The surface points, left to right, in local space.
    pub fn points(&self) -> &[SurfacePoint] {
        self.lattice.points()
    }

    /// The underlying lattice.
    pub fn lattice(&self) -> &PointLattice {
        &self.lattice
    }
}
