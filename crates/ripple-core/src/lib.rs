//! Core types for the ripple water-surface simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! 2D vector math, surface identifiers, configuration, and error types
//! shared by the rest of the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod id;
pub mod vec2;

pub use config::{ConfigError, Rgba, SurfaceConfig};
pub use error::ExtentError;
pub use id::SurfaceId;
pub use vec2::Vec2;
