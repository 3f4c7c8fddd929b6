//! Per-frame simulation layer for the ripple water surface.
//!
//! [`WaterSurface`] owns one lattice and advances it one frame at a time;
//! [`SurfaceDriver`] runs every surface of a host scene in lockstep,
//! performing anchor change detection and draining the impulse mailbox
//! before each integration pass. [`geometry`] turns a surface into the
//! vertex lists a host renderer consumes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod driver;
pub mod geometry;
pub mod impulse;
mod integrator;
pub mod report;
pub mod surface;

pub use driver::{HostSample, SurfaceDriver, ANCHOR_EPSILON};
pub use geometry::{surface_geometry, SurfaceGeometry};
pub use impulse::{Impulse, ImpulseSender, DEFAULT_IMPULSE_RADIUS};
pub use report::StepReport;
pub use surface::WaterSurface;
