// Print the geometry of a ring for quick inspection.
//
// Usage: ring_dump [segments] [fill_amount] [smoothness_mode] [tangential]
//   e.g. RUST_LOG=trace cargo run --example ring_dump -- 12 0.3 both

use anyhow::{Context, Result};
use buddy_ui::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let segments: u32 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("invalid segment count `{s}`"))?,
        None => 12,
    };
    let fill: f32 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("invalid fill amount `{s}`"))?,
        None => 1.0,
    };
    let mode: SmoothnessMode = match args.next() {
        Some(s) => s.parse()?,
        None => SmoothnessMode::Both,
    };
    let tangential = args.next().is_some_and(|s| s == "tangential");

    let params = RingParameters::default()
        .with_segment_count(segments)
        .with_fill(0.0, fill)
        .with_thickness(10.0)
        .with_smoothness(mode, 0.3)
        .with_tangential(tangential)
        .with_bounding_size(100.0, 100.0)
        .with_color(Color::rgb(0.9, 0.3, 0.2));

    let mesh = generate_ring(&params);
    let plan = FeatherPlan::new(params.smoothness_mode, params.smoothness);

    println!(
        "ring: {} segments ({} drawn), fill {:.3}, {mode}, {:?}",
        params.clamped().segment_count,
        params.drawn_segments(),
        params.clamped().fill_amount,
        plan
    );
    println!(
        "  {} vertices, {} triangles, {} bytes of vertex data",
        mesh.vertex_count(),
        mesh.triangle_count(),
        std::mem::size_of_val(mesh.vertices.as_slice())
    );

    for (i, step) in mesh.vertices.chunks(plan.vertices_per_step()).enumerate() {
        let outer = step[0].position;
        let inner = step[step.len() - 1].position;
        println!(
            "  step {i:>3}: outer ({:>8.3}, {:>8.3})  inner ({:>8.3}, {:>8.3})  u {:.3}",
            outer[0], outer[1], inner[0], inner[1], step[0].uv[0]
        );
    }

    Ok(())
}
