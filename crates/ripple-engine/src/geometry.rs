//! Renderer-facing geometry extraction.
//!
//! The simulation core never draws; it hands the host renderer two vertex
//! lists in the water's local space. The fill polygon walks the surface
//! left to right and closes around the bottom corners; the waterline is
//! the same surface walk bracketed by the two top corners.

use crate::surface::WaterSurface;
use ripple_core::{Rgba, Vec2};

/// Vertex lists and style for drawing one water surface.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceGeometry {
    /// Closed polygon: top-left corner, every surface point, top-right,
    /// bottom-right, bottom-left.
    pub fill: Vec<Vec2>,
    /// Open polyline along the surface: top-left corner, every surface
    /// point, top-right corner.
    pub waterline: Vec<Vec2>,
    /// Stroke width for the waterline.
    pub stroke_width: f32,
    /// Stroke color for the waterline.
    pub stroke_color: Rgba,
    /// Fill color for the polygon.
    pub fill_color: Rgba,
}

/// Extract the drawable geometry for `surface`, or `None` while the
/// surface is suspended or has no extent yet (rendering is disabled until
/// a valid extent exists).
pub fn surface_geometry(surface: &WaterSurface) -> Option<SurfaceGeometry> {
    if !surface.is_active() {
        return None;
    }
    let extent = surface.extent()?;
    let points = surface.points();

    let mut waterline = Vec::with_capacity(points.len() + 2);
    waterline.push(extent.top_left());
    waterline.extend(points.iter().map(|p| p.position));
    waterline.push(extent.top_right());

    let mut fill = Vec::with_capacity(points.len() + 4);
    fill.extend_from_slice(&waterline);
    fill.push(extent.bottom_right());
    fill.push(extent.bottom_left());

    let config = surface.config();
    Some(SurfaceGeometry {
        fill,
        waterline,
        stroke_width: config.surface_thickness,
        stroke_color: config.surface_color,
        fill_color: config.fill_color,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ripple_core::SurfaceConfig;

    #[test]
    fn geometry_brackets_the_points_with_corners() {
        let mut water = WaterSurface::new(SurfaceConfig::default()).unwrap();
        water
            .update_anchors(Vec2::new(0.0, 0.0), Vec2::new(32.0, 10.0))
            .unwrap();

        let geometry = surface_geometry(&water).unwrap();
        assert_eq!(geometry.waterline.len(), 6); // 2 corners + 4 points
        assert_eq!(geometry.fill.len(), 8);

        assert_eq!(geometry.waterline[0], Vec2::new(0.0, 0.0));
        assert_eq!(geometry.waterline[1], Vec2::new(4.0, 0.0));
        assert_eq!(geometry.waterline[5], Vec2::new(32.0, 0.0));
        assert_eq!(geometry.fill[6], Vec2::new(32.0, 10.0));
        assert_eq!(geometry.fill[7], Vec2::new(0.0, 10.0));
    }

    #[test]
    fn no_geometry_without_an_extent() {
        let water = WaterSurface::new(SurfaceConfig::default()).unwrap();
        assert!(surface_geometry(&water).is_none());
    }

    #[test]
    fn no_geometry_while_suspended() {
        let mut water = WaterSurface::new(SurfaceConfig::default()).unwrap();
        water
            .update_anchors(Vec2::new(0.0, 0.0), Vec2::new(32.0, 10.0))
            .unwrap();
        let _ = water.update_anchors(Vec2::new(32.0, 0.0), Vec2::new(0.0, 10.0));
        assert!(surface_geometry(&water).is_none());
    }

    #[test]
    fn style_comes_from_the_config() {
        let config = SurfaceConfig {
            surface_thickness: 3.0,
            ..SurfaceConfig::default()
        };
        let mut water = WaterSurface::new(config.clone()).unwrap();
        water
            .update_anchors(Vec2::new(0.0, 0.0), Vec2::new(32.0, 10.0))
            .unwrap();

        let geometry = surface_geometry(&water).unwrap();
        assert_eq!(geometry.stroke_width, 3.0);
        assert_eq!(geometry.stroke_color, config.surface_color);
        assert_eq!(geometry.fill_color, config.fill_color);
    }
}
