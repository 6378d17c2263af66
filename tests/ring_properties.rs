//! Randomized geometric properties of the ring generator.

use buddy_ui::gfx::geometry::{generate_ring, FeatherPlan, MeshData, RingParameters, SmoothnessMode};
use buddy_ui::gfx::Color;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::{PI, SQRT_2, TAU};

const EPS: f32 = 1e-3;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_mode(rng: &mut StdRng) -> SmoothnessMode {
    match rng.random_range(0..4) {
        0 => SmoothnessMode::None,
        1 => SmoothnessMode::Inside,
        2 => SmoothnessMode::Outside,
        _ => SmoothnessMode::Both,
    }
}

fn random_params(rng: &mut StdRng) -> RingParameters {
    RingParameters::default()
        .with_segment_count(rng.random_range(0..160))
        .with_thickness(rng.random_range(0.0..40.0))
        .with_fill(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0))
        .with_smoothness(random_mode(rng), rng.random_range(0.0..1.0))
        .with_clockwise(rng.random_bool(0.5))
        .with_tangential(rng.random_bool(0.5))
        .with_bounding_size(rng.random_range(10.0..300.0), rng.random_range(10.0..300.0))
}

fn outer_positions(mesh: &MeshData, params: &RingParameters) -> Vec<[f32; 2]> {
    let stride = FeatherPlan::new(params.smoothness_mode, params.smoothness).vertices_per_step();
    mesh.vertices.iter().step_by(stride).map(|v| v.position).collect()
}

/// Angle swept from twelve o'clock in the direction a clockwise ring grows.
fn swept_angle(p: [f32; 2]) -> f32 {
    (p[1].atan2(p[0]) - PI * 0.5).rem_euclid(TAU)
}

#[test]
fn test_buffer_shape_matches_plan() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..200 {
        let params = random_params(&mut rng);
        let mesh = generate_ring(&params);
        let clamped = params.clamped();
        let drawn = params.drawn_segments() as usize;

        if drawn == 0 {
            assert!(mesh.is_empty());
            continue;
        }

        let stride = FeatherPlan::new(clamped.smoothness_mode, clamped.smoothness).vertices_per_step();
        assert_eq!(mesh.vertex_count(), (drawn + 1) * stride, "{params:?}");
        assert_eq!(mesh.triangle_count(), drawn * (stride - 1) * 2, "{params:?}");

        let count = mesh.vertex_count() as u32;
        assert!(mesh.indices.iter().all(|&i| i < count), "{params:?}");
    }
}

#[test]
fn test_full_ring_is_closed_ellipse() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..50 {
        let segments = rng.random_range(3..120);
        let (w, h) = (rng.random_range(20.0..200.0), rng.random_range(20.0..200.0));
        let params = RingParameters::default()
            .with_segment_count(segments)
            .with_bounding_size(w, h)
            .with_smoothness(SmoothnessMode::None, 0.0);
        let outer = outer_positions(&generate_ring(&params), &params);

        assert_eq!(outer.len(), segments as usize + 1);
        let (first, last) = (outer[0], outer[outer.len() - 1]);
        assert!((first[0] - last[0]).abs() < EPS && (first[1] - last[1]).abs() < EPS);

        for p in &outer {
            let e = (p[0] / (w * 0.5)).powi(2) + (p[1] / (h * 0.5)).powi(2);
            assert!((e - 1.0).abs() < EPS, "{p:?} off the ellipse ({w}x{h})");
        }
    }
}

#[test]
fn test_tip_angle_grows_with_fill() {
    for segments in [3u32, 5, 7, 16, 33] {
        let theta = TAU / segments as f32;
        let mut previous = 0.0;

        for k in 1..20 {
            let fill = k as f32 * 0.05;
            let params = RingParameters::default()
                .with_segment_count(segments)
                .with_bounding_size(100.0, 100.0)
                .with_fill(0.0, fill)
                .with_smoothness(SmoothnessMode::None, 0.0);
            let outer = outer_positions(&generate_ring(&params), &params);
            let tip = swept_angle(outer[outer.len() - 1]);

            assert!(tip > previous, "segments {segments}, fill {fill}: {tip} <= {previous}");

            // The tip stays inside the last drawn segment
            let drawn = params.drawn_segments() as f32;
            assert!(tip >= (drawn - 1.0) * theta - EPS);
            assert!(tip <= drawn * theta + EPS);
            // and lands exactly on a segment boundary when the fill does
            if (fill * segments as f32).fract() == 0.0 {
                assert!((tip - TAU * fill).abs() < EPS);
            }

            previous = tip;
        }
    }
}

#[test]
fn test_clockwise_mirrors_counter_clockwise() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        let fill_start = if rng.random_bool(0.5) { 0.0 } else { 0.25 };
        let params = RingParameters::default()
            .with_segment_count(rng.random_range(3..64))
            .with_fill(fill_start, rng.random_range(0.05..1.0))
            .with_thickness(rng.random_range(1.0..20.0))
            .with_smoothness(random_mode(&mut rng), rng.random_range(0.0..1.0))
            .with_bounding_size(100.0, 100.0);

        let cw = generate_ring(&params.with_clockwise(true));
        let ccw = generate_ring(&params.with_clockwise(false));
        assert_eq!(cw.vertex_count(), ccw.vertex_count());

        for (a, b) in cw.vertices.iter().zip(&ccw.vertices) {
            let (a, b) = (a.position, b.position);
            let mirrored = if fill_start == 0.0 { [-b[0], b[1]] } else { [b[0], -b[1]] };
            assert!(
                (a[0] - mirrored[0]).abs() < EPS && (a[1] - mirrored[1]).abs() < EPS,
                "{a:?} vs {b:?} for {params:?}"
            );
        }
        assert_eq!(cw.indices, ccw.indices);
    }
}

#[test]
fn test_tangential_reaches_corners() {
    for segments in [4u32, 8, 24] {
        let params = RingParameters::default()
            .with_segment_count(segments)
            .with_bounding_size(100.0, 100.0)
            .with_smoothness(SmoothnessMode::None, 0.0);
        let plain = outer_positions(&generate_ring(&params), &params);
        let wide = outer_positions(&generate_ring(&params.with_tangential(true)), &params);

        for (p, t) in plain.iter().zip(&wide) {
            let ratio = t[0].hypot(t[1]) / p[0].hypot(p[1]);
            assert!((ratio - SQRT_2).abs() < 1e-4);
        }
        // Cardinal sample at twelve o'clock touches the corner circle
        assert!((wide[0][1] - 50.0 * SQRT_2).abs() < EPS);
    }
}

#[test]
fn test_feather_colors_per_step() {
    let mut rng = StdRng::seed_from_u64(3);
    let base = Color::rgba(0.1, 0.7, 0.3, 0.9);

    for _ in 0..20 {
        let s = rng.random_range(0.01..0.99);
        let params = RingParameters::default()
            .with_segment_count(rng.random_range(3..50))
            .with_bounding_size(80.0, 80.0)
            .with_thickness(8.0)
            .with_color(base);

        let both = generate_ring(&params.with_smoothness(SmoothnessMode::Both, s));
        for step in both.vertices.chunks(4) {
            let alphas: Vec<f32> = step.iter().map(|v| v.color[3]).collect();
            assert_eq!(alphas, vec![0.0, 0.9, 0.9, 0.0]);
            assert!((step[1].uv[1] - s * 0.5).abs() < 1e-6);
            assert!((step[2].uv[1] - (1.0 - s * 0.5)).abs() < 1e-6);
        }

        let hard = generate_ring(&params.with_smoothness(SmoothnessMode::None, s));
        assert_eq!(hard.vertex_count() * 2, both.vertex_count());
        assert!(hard.vertices.iter().all(|v| v.color == base.to_array()));
    }
}
