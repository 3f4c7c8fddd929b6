//! Two-pass force integration over the point lattice.
//!
//! Pass 1 accumulates motion for every point (restoring spring, passive
//! wave, neighbor coupling); pass 2 integrates motion into position and
//! applies damping. The passes are strictly ordered: neighbor coupling
//! reads other points' positions, which must stay frozen until every
//! point's accumulation is done.

use ripple_core::{SurfaceConfig, Vec2};
use ripple_surface::{PointLattice, SurfacePoint};

/// Global wave phase for a frame: elapsed seconds wrapped to one period.
///
/// The wrap happens in `f64` so large uptimes keep sub-millisecond
/// precision before narrowing.
pub(crate) fn wave_clock(elapsed_ms: u64) -> f32 {
    ((elapsed_ms as f64 / 1000.0) % std::f64::consts::TAU) as f32
}

/// Pass 1: accumulate motion for every point.
///
/// `rest_y` is the world-space rest height of the whole surface
/// (`origin.y` plus the extent's top edge); the restoring spring pulls
/// only the y component since the target shares the point's x.
pub(crate) fn accumulate_motion(
    lattice: &mut PointLattice,
    config: &SurfaceConfig,
    origin: Vec2,
    rest_y: f32,
    time: f32,
) {
    let points = lattice.points_mut();
    let count = points.len();

    for i in 0..count {
        let world = points[i].position + origin;
        let target = Vec2::new(world.x, rest_y);
        let mut delta = (target - world) * config.spring_stiffness;

        if config.wave_enabled {
            let phase =
                (i as f32 / count as f32) * config.wave_width + time * config.wave_speed;
            delta += Vec2::UP * (phase.sin() * config.wave_height);
        }

        // Neighbor positions stay frozen until pass 2, so each extra pass
        // scales this frame's coupling instead of re-solving it.
        for _ in 0..config.spread_passes {
            if i > 0 {
                delta.y += neighbor_pull(points, i, i - 1, config.neighbor_stiffness);
            }
            if i + 1 < count {
                delta.y += neighbor_pull(points, i, i + 1, config.neighbor_stiffness);
            }
        }

        points[i].motion += delta;
    }
}

/// Height pull from one neighbor, scaled by the neighbor stiffness.
fn neighbor_pull(points: &[SurfacePoint], i: usize, neighbor: usize, stiffness: f32) -> f32 {
    (points[neighbor].position.y - points[i].position.y) * stiffness
}

/// Pass 2: integrate motion into position, then damp.
///
/// Damping applies after integration, so it takes effect starting with the
/// next frame.
pub(crate) fn integrate_motion(lattice: &mut PointLattice, dt: f32, damping: f32) {
    for point in lattice.points_mut() {
        point.position += point.motion * dt;
        point.motion *= damping;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ripple_surface::Extent;

    fn lattice(width: f32, spacing: f32) -> PointLattice {
        let extent =
            Extent::from_anchors(Vec2::ZERO, Vec2::new(width, 10.0)).unwrap();
        let mut lattice = PointLattice::new();
        lattice.rebuild(&extent, spacing);
        lattice
    }

    fn coupling_only(stiffness: f32, passes: u32) -> SurfaceConfig {
        SurfaceConfig {
            wave_enabled: false,
            spring_stiffness: 0.0,
            neighbor_stiffness: stiffness,
            spread_passes: passes,
            ..SurfaceConfig::default()
        }
    }

    #[test]
    fn spring_pulls_only_the_y_component() {
        let mut l = lattice(24.0, 8.0);
        l.points_mut()[1].position.y = 6.0;

        let config = SurfaceConfig {
            wave_enabled: false,
            spring_stiffness: 0.5,
            neighbor_stiffness: 0.0,
            ..SurfaceConfig::default()
        };
        accumulate_motion(&mut l, &config, Vec2::new(100.0, 50.0), 50.0, 0.0);

        let motions: Vec<Vec2> = l.points().iter().map(|p| p.motion).collect();
        assert_eq!(motions[0], Vec2::ZERO);
        assert_eq!(motions[1], Vec2::new(0.0, -3.0)); // (50 - 56) * 0.5
        assert_eq!(motions[2], Vec2::ZERO);
    }

    #[test]
    fn spread_passes_scale_the_coupling() {
        // Exactly representable values so the comparison can be bitwise.
        let mut single = lattice(24.0, 8.0);
        single.points_mut()[1].position.y = 4.0;
        let mut triple = single.clone();

        accumulate_motion(
            &mut single,
            &coupling_only(0.25, 1),
            Vec2::ZERO,
            0.0,
            0.0,
        );
        accumulate_motion(
            &mut triple,
            &coupling_only(0.25, 3),
            Vec2::ZERO,
            0.0,
            0.0,
        );

        for (s, t) in single.points().iter().zip(triple.points()) {
            assert_eq!(t.motion, s.motion * 3.0);
        }
        // And the single-pass contribution itself is the expected pull.
        assert_eq!(single.points()[0].motion, Vec2::new(0.0, 1.0)); // (4 - 0) * 0.25
        assert_eq!(single.points()[1].motion, Vec2::new(0.0, -2.0)); // two neighbors at 0
    }

    #[test]
    fn edge_points_have_one_neighbor() {
        let mut l = lattice(24.0, 8.0);
        for p in l.points_mut() {
            p.position.y = 0.0;
        }
        l.points_mut()[0].position.y = 8.0;

        accumulate_motion(&mut l, &coupling_only(0.25, 1), Vec2::ZERO, 0.0, 0.0);

        // Point 0 only couples rightward; point 2 only leftward.
        assert_eq!(l.points()[0].motion.y, -2.0); // (0 - 8) * 0.25
        assert_eq!(l.points()[1].motion.y, 2.0); // left neighbor at 8, right at 0
        assert_eq!(l.points()[2].motion.y, 0.0);
    }

    #[test]
    fn wave_injects_the_same_waveform_regardless_of_state() {
        let config = SurfaceConfig {
            wave_enabled: true,
            wave_height: 3.0,
            wave_speed: 2.0,
            wave_width: 6.0,
            spring_stiffness: 0.0,
            neighbor_stiffness: 0.0,
            ..SurfaceConfig::default()
        };

        let mut flat = lattice(80.0, 8.0);
        let mut displaced = lattice(80.0, 8.0);
        displaced.points_mut()[5].position.y = 42.0;

        let time = wave_clock(1_500);
        accumulate_motion(&mut flat, &config, Vec2::ZERO, 0.0, time);
        accumulate_motion(&mut displaced, &config, Vec2::ZERO, 0.0, time);

        let count = flat.len() as f32;
        for (i, p) in flat.points().iter().enumerate() {
            let phase = (i as f32 / count) * 6.0 + time * 2.0;
            assert_eq!(p.motion, Vec2::UP * (phase.sin() * 3.0));
            // Displacement does not feed back into the wave term.
            assert_eq!(displaced.points()[i].motion, p.motion);
        }
    }

    #[test]
    fn wave_clock_wraps_at_tau() {
        let tau_ms = (std::f64::consts::TAU * 1000.0) as u64; // 6283
        assert!(wave_clock(tau_ms + 100) < 1.0);
        assert!((wave_clock(500) - 0.5).abs() < 1e-4);
    }

    #[test]
    fn integration_applies_dt_then_damps() {
        let mut l = lattice(24.0, 8.0);
        l.points_mut()[1].motion = Vec2::new(0.0, 6.0);

        integrate_motion(&mut l, 0.5, 0.25);

        assert_eq!(l.points()[1].position.y, 3.0);
        assert_eq!(l.points()[1].motion.y, 1.5);
    }

    proptest::proptest! {
        /// Repeating the coupling pass k times matches scaling one pass by
        /// k, because positions are frozen until integration.
        #[test]
        fn spread_is_a_pure_multiplier(
            heights in proptest::collection::vec(-50.0f32..50.0, 3..12),
            passes in 1u32..8,
            stiffness in 0.0f32..0.5,
        ) {
            let width = heights.len() as f32 * 8.0;
            let mut single = lattice(width, 8.0);
            for (p, &h) in single.points_mut().iter_mut().zip(&heights) {
                p.position.y = h;
            }
            let mut repeated = single.clone();

            accumulate_motion(
                &mut single,
                &coupling_only(stiffness, 1),
                Vec2::ZERO,
                0.0,
                0.0,
            );
            accumulate_motion(
                &mut repeated,
                &coupling_only(stiffness, passes),
                Vec2::ZERO,
                0.0,
                0.0,
            );

            for (s, r) in single.points().iter().zip(repeated.points()) {
                let expected = s.motion.y * passes as f32;
                proptest::prop_assert!(
                    (r.motion.y - expected).abs() <= 1e-4 * (1.0 + expected.abs()),
                    "{} vs {}", r.motion.y, expected,
                );
            }
        }
    }

    #[test]
    fn empty_lattice_is_a_no_op() {
        let mut l = PointLattice::new();
        accumulate_motion(
            &mut l,
            &SurfaceConfig::default(),
            Vec2::ZERO,
            0.0,
            0.0,
        );
        integrate_motion(&mut l, 0.016, 0.98);
        assert!(l.is_empty());
    }
}
