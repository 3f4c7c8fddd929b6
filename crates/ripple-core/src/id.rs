//! Strongly-typed surface identifier.

use std::fmt;

/// Identifies one water surface within a host scene.
///
/// Surfaces are registered with the frame driver under an ID chosen by the
/// host; queued impulses are routed by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u32);

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SurfaceId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
