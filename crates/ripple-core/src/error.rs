//! Error types for extent derivation.

use std::error::Error;
use std::fmt;

/// The anchor pair does not describe a rectangle.
///
/// The extent is valid only when the top-left anchor is strictly above and
/// strictly to the left of the bottom-right anchor. A violation on either
/// axis suspends the owning surface until the anchors are corrected; the
/// previously derived corners and lattice are left untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExtentError {
    /// `top_left.x` is not strictly less than `bottom_right.x`.
    DegenerateWidth {
        /// x of the top-left anchor.
        left: f32,
        /// x of the bottom-right anchor.
        right: f32,
    },
    /// `top_left.y` is not strictly less than `bottom_right.y`.
    DegenerateHeight {
        /// y of the top-left anchor.
        top: f32,
        /// y of the bottom-right anchor.
        bottom: f32,
    },
}

impl fmt::Display for ExtentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateWidth { left, right } => write!(
                f,
                "extent has no width: top-left x {left} must be strictly less than bottom-right x {right}"
            ),
            Self::DegenerateHeight { top, bottom } => write!(
                f,
                "extent has no height: top-left y {top} must be strictly less than bottom-right y {bottom}"
            ),
        }
    }
}

impl Error for ExtentError {}
