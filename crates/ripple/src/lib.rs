//! Ripple: a deterministic 1D spring-lattice water surface for 2D games.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the ripple sub-crates. For most users, adding `ripple` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use ripple::prelude::*;
//!
//! // One pond, anchored at (0, 0)-(80, 10) in its local space.
//! let mut water = WaterSurface::new(SurfaceConfig::default()).unwrap();
//! water.update_anchors(Vec2::new(0.0, 0.0), Vec2::new(80.0, 10.0)).unwrap();
//!
//! // A stone lands near the middle.
//! water.splash(Vec2::new(40.0, 0.0), Vec2::new(0.0, 12.0));
//!
//! // Host frame loop: step and hand the geometry to the renderer.
//! let redraw = water.step_frame(1.0 / 60.0, 16);
//! assert!(redraw);
//! let geometry = surface_geometry(&water).unwrap();
//! assert_eq!(geometry.waterline.len(), water.points().len() + 2);
//! ```
//!
//! Scenes with several bodies of water register them with a
//! [`SurfaceDriver`](engine::SurfaceDriver), which performs anchor change
//! detection and drains queued [`Impulse`](engine::Impulse)s once per
//! frame.
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ripple-core` | Vector math, ids, configuration, errors |
//! | [`surface`] | `ripple-surface` | Extent, point lattice, spatial query |
//! | [`engine`] | `ripple-engine` | Integrator, frame driver, geometry |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`ripple-core`): vector math, identifiers, configuration,
/// and error types.
pub use ripple_core as types;

/// Spatial layer (`ripple-surface`): the validated [`surface::Extent`]
/// and the ordered [`surface::PointLattice`].
pub use ripple_surface as surface;

/// Per-frame layer (`ripple-engine`): [`engine::WaterSurface`],
/// [`engine::SurfaceDriver`], and renderer geometry extraction.
pub use ripple_engine as engine;

/// Common imports for typical usage.
///
/// ```rust
/// use ripple::prelude::*;
/// ```
pub mod prelude {
    pub use ripple_core::{
        ConfigError, ExtentError, Rgba, SurfaceConfig, SurfaceId, Vec2,
    };
    pub use ripple_engine::{
        surface_geometry, HostSample, Impulse, ImpulseSender, StepReport, SurfaceDriver,
        SurfaceGeometry, WaterSurface, ANCHOR_EPSILON, DEFAULT_IMPULSE_RADIUS,
    };
    pub use ripple_surface::{Extent, PointLattice, SurfacePoint};
}
