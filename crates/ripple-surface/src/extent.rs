//! The validated water rectangle derived from two anchor positions.

use ripple_core::{ExtentError, Vec2};

/// The four corners of a water rectangle, derived from a top-left and a
/// bottom-right anchor.
///
/// Construction validates that the anchors describe a rectangle with
/// positive width and height; an `Extent` value therefore always satisfies
/// `width() > 0` and `height() > 0`, which is what makes the index
/// interpolation in the spatial query total.
///
/// Corner positions are in the water's local coordinate space (y-down).
///
/// # Examples
///
/// ```
/// use ripple_core::Vec2;
/// use ripple_surface::Extent;
///
/// let extent = Extent::from_anchors(Vec2::new(0.0, 0.0), Vec2::new(80.0, 10.0)).unwrap();
/// assert_eq!(extent.top_right(), Vec2::new(80.0, 0.0));
/// assert_eq!(extent.bottom_left(), Vec2::new(0.0, 10.0));
/// assert_eq!(extent.width(), 80.0);
///
/// // Inverted anchors are rejected.
/// assert!(Extent::from_anchors(Vec2::new(80.0, 0.0), Vec2::new(0.0, 10.0)).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    top_left: Vec2,
    top_right: Vec2,
    bottom_right: Vec2,
    bottom_left: Vec2,
}

impl Extent {
    /// Derive the rectangle from its two anchor corners.
    ///
    /// # Errors
    ///
    /// Returns [`ExtentError`] naming the degenerate axis when
    /// `top_left.x < bottom_right.x` or `top_left.y < bottom_right.y` does
    /// not hold (this also rejects NaN anchors, for which neither strict
    /// comparison can succeed).
    pub fn from_anchors(top_left: Vec2, bottom_right: Vec2) -> Result<Self, ExtentError> {
        if !(top_left.x < bottom_right.x) {
            return Err(ExtentError::DegenerateWidth {
                left: top_left.x,
                right: bottom_right.x,
            });
        }
        if !(top_left.y < bottom_right.y) {
            return Err(ExtentError::DegenerateHeight {
                top: top_left.y,
                bottom: bottom_right.y,
            });
        }
        Ok(Self {
            top_left,
            top_right: Vec2::new(bottom_right.x, top_left.y),
            bottom_right,
            bottom_left: Vec2::new(top_left.x, bottom_right.y),
        })
    }

    /// The top-left corner (input anchor).
    pub fn top_left(&self) -> Vec2 {
        self.top_left
    }

    /// The top-right corner (derived).
    pub fn top_right(&self) -> Vec2 {
        self.top_right
    }

    /// The bottom-right corner (input anchor).
    pub fn bottom_right(&self) -> Vec2 {
        self.bottom_right
    }

    /// The bottom-left corner (derived).
    pub fn bottom_left(&self) -> Vec2 {
        self.bottom_left
    }

    /// Horizontal span. Strictly positive by construction.
    pub fn width(&self) -> f32 {
        self.top_right.x - self.top_left.x
    }

    /// Vertical span. Strictly positive by construction.
    pub fn height(&self) -> f32 {
        self.bottom_left.y - self.top_left.y
    }

    /// Whether both anchors are within `epsilon` of `other`'s, per
    /// component. Used by the frame driver's change detection.
    pub fn approx_eq(&self, other: &Extent, epsilon: f32) -> bool {
        self.top_left.abs_diff_le(other.top_left, epsilon)
            && self.bottom_right.abs_diff_le(other.bottom_right, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn derives_the_missing_corners() {
        let e = Extent::from_anchors(Vec2::new(-10.0, 2.0), Vec2::new(30.0, 22.0)).unwrap();
        assert_eq!(e.top_left(), Vec2::new(-10.0, 2.0));
        assert_eq!(e.top_right(), Vec2::new(30.0, 2.0));
        assert_eq!(e.bottom_right(), Vec2::new(30.0, 22.0));
        assert_eq!(e.bottom_left(), Vec2::new(-10.0, 22.0));
        assert_eq!(e.width(), 40.0);
        assert_eq!(e.height(), 20.0);
    }

    #[test]
    fn rejects_inverted_x() {
        let err = Extent::from_anchors(Vec2::new(5.0, 0.0), Vec2::new(1.0, 10.0)).unwrap_err();
        assert!(matches!(err, ExtentError::DegenerateWidth { .. }));
    }

    #[test]
    fn rejects_inverted_y() {
        let err = Extent::from_anchors(Vec2::new(0.0, 10.0), Vec2::new(5.0, 2.0)).unwrap_err();
        assert!(matches!(err, ExtentError::DegenerateHeight { .. }));
    }

    #[test]
    fn rejects_zero_width() {
        let err = Extent::from_anchors(Vec2::new(5.0, 0.0), Vec2::new(5.0, 10.0)).unwrap_err();
        assert!(matches!(err, ExtentError::DegenerateWidth { .. }));
    }

    #[test]
    fn rejects_nan_anchor() {
        let err =
            Extent::from_anchors(Vec2::new(f32::NAN, 0.0), Vec2::new(5.0, 10.0)).unwrap_err();
        assert!(matches!(err, ExtentError::DegenerateWidth { .. }));
    }

    #[test]
    fn approx_eq_tracks_both_anchors() {
        let a = Extent::from_anchors(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0)).unwrap();
        let b = Extent::from_anchors(Vec2::new(0.0005, 0.0), Vec2::new(10.0, 10.0)).unwrap();
        let c = Extent::from_anchors(Vec2::new(0.0, 0.0), Vec2::new(10.5, 10.0)).unwrap();
        assert!(a.approx_eq(&b, 1e-3));
        assert!(!a.approx_eq(&c, 1e-3));
    }

    proptest! {
        #[test]
        fn valid_anchors_always_derive(
            left in -1e4f32..1e4,
            top in -1e4f32..1e4,
            width in 1e-3f32..1e4,
            height in 1e-3f32..1e4,
        ) {
            let tl = Vec2::new(left, top);
            let br = Vec2::new(left + width, top + height);
            let e = Extent::from_anchors(tl, br).unwrap();
            prop_assert_eq!(e.top_right(), Vec2::new(br.x, tl.y));
            prop_assert_eq!(e.bottom_left(), Vec2::new(tl.x, br.y));
            prop_assert!(e.width() > 0.0);
            prop_assert!(e.height() > 0.0);
        }

        #[test]
        fn non_positive_spans_always_reject(
            left in -1e4f32..1e4,
            top in -1e4f32..1e4,
            width in -1e4f32..=0.0,
            height in 1e-3f32..1e4,
        ) {
            let tl = Vec2::new(left, top);
            let br = Vec2::new(left + width, top + height);
            prop_assert!(Extent::from_anchors(tl, br).is_err());
        }
    }
}
