//! Surface configuration and its validation.
//!
//! [`SurfaceConfig`] is a plain struct of tunables, read-only from the
//! simulation's perspective. Fields changed between frames take effect on
//! the next integration pass without a rebuild, except [`point_spacing`]
//! which only applies the next time the lattice is regenerated.
//!
//! [`point_spacing`]: SurfaceConfig::point_spacing

use std::error::Error;
use std::fmt;

/// An RGBA color with `f32` channels in `[0, 1]`.
///
/// Carried for the host renderer; the integration math never reads it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Rgba {
    /// Construct a color from its channels.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Tunables for one water surface.
///
/// Construct with `SurfaceConfig::default()` and adjust fields; the
/// owning surface validates on construction and on every configuration
/// replacement.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceConfig {
    /// Whether the passive ambient wave runs each frame.
    pub wave_enabled: bool,
    /// Passive wave amplitude.
    pub wave_height: f32,
    /// Passive wave temporal frequency multiplier.
    pub wave_speed: f32,
    /// Passive wave spatial frequency across the lattice.
    pub wave_width: f32,
    /// How many times the neighbor coupling is applied per frame.
    ///
    /// Neighbor positions do not change within a frame, so this is a
    /// quantized coupling-strength control rather than a solver iteration
    /// count.
    pub spread_passes: u32,
    /// Distance between adjacent surface points. Takes effect on the next
    /// lattice rebuild.
    pub point_spacing: f32,
    /// Per-frame motion decay factor, in `[0, 1]`.
    pub damping: f32,
    /// Spring constant pulling every point toward the global rest height.
    pub spring_stiffness: f32,
    /// Spring constant pulling a point toward each adjacent point's height.
    pub neighbor_stiffness: f32,
    /// Rendering-only: stroke width of the waterline.
    pub surface_thickness: f32,
    /// Rendering-only: waterline stroke color.
    pub surface_color: Rgba,
    /// Rendering-only: body fill color.
    pub fill_color: Rgba,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            wave_enabled: true,
            wave_height: 2.0,
            wave_speed: 2.0,
            wave_width: 6.0,
            spread_passes: 2,
            point_spacing: 8.0,
            damping: 0.98,
            spring_stiffness: 0.015,
            neighbor_stiffness: 0.025,
            surface_thickness: 1.5,
            surface_color: Rgba::new(0.7, 0.85, 1.0, 1.0),
            fill_color: Rgba::new(0.25, 0.55, 0.95, 0.6),
        }
    }
}

impl SurfaceConfig {
    /// Validate all structural invariants.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `point_spacing` is not finite and positive, if
    /// `damping` is outside `[0, 1]`, or if any stiffness, wave, or
    /// thickness field is non-finite or negative where a sign constraint
    /// applies. Wave amplitude may be negative (it only flips the phase).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.point_spacing.is_finite() && self.point_spacing > 0.0) {
            return Err(ConfigError::NonPositiveSpacing {
                value: self.point_spacing,
            });
        }
        if !(self.damping.is_finite() && (0.0..=1.0).contains(&self.damping)) {
            return Err(ConfigError::DampingOutOfRange {
                value: self.damping,
            });
        }
        for (field, value) in [
            ("wave_height", self.wave_height),
            ("wave_speed", self.wave_speed),
            ("wave_width", self.wave_width),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        for (field, value) in [
            ("spring_stiffness", self.spring_stiffness),
            ("neighbor_stiffness", self.neighbor_stiffness),
            ("surface_thickness", self.surface_thickness),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NegativeOrNonFinite { field, value });
            }
        }
        Ok(())
    }
}

/// Errors detected during [`SurfaceConfig::validate()`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// `point_spacing` is not finite and strictly positive.
    NonPositiveSpacing {
        /// The invalid value.
        value: f32,
    },
    /// `damping` is outside `[0, 1]` or not finite.
    DampingOutOfRange {
        /// The invalid value.
        value: f32,
    },
    /// A field that may take any sign is not finite.
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// The invalid value.
        value: f32,
    },
    /// A non-negative field is negative or not finite.
    NegativeOrNonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// The invalid value.
        value: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveSpacing { value } => {
                write!(f, "point_spacing must be finite and > 0, got {value}")
            }
            Self::DampingOutOfRange { value } => {
                write!(f, "damping must be in [0, 1], got {value}")
            }
            Self::NonFinite { field, value } => {
                write!(f, "{field} must be finite, got {value}")
            }
            Self::NegativeOrNonFinite { field, value } => {
                write!(f, "{field} must be finite and >= 0, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}
