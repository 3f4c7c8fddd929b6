//! Spatial layer for the ripple water-surface simulation.
//!
//! Provides the validated [`Extent`] rectangle derived from two anchor
//! positions, the ordered [`PointLattice`] of surface points spanning it,
//! and the circular spatial query used to target external impulses.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod extent;
pub mod lattice;
pub mod query;

pub use extent::Extent;
pub use lattice::{PointLattice, SurfacePoint};
