#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Rasterize Preview Example
//!
//! Scan-converts a line, a circle, a triangle outline and a filled triangle,
//! stamps the normalized points into framebuffers and writes each as a PNG.
//!
//! Run with: `cargo run --example rasterize_preview`

use lattice_raster::prelude::*;
use lattice_raster::raster::fill_triangle_with_stats;

const SIZE: u32 = 400;

fn main() {
    println!("Lattice Raster Preview");
    println!("======================\n");

    let config = RasterConfig::new().coordinate_limit(1_000).scale(100.0).point_size(3);
    let rasterizer = Rasterizer::new(config).expect("default-sized config is valid");
    let renderer = PointRenderer::new().size(config.size());

    let a = Point::new(-90, 20);
    let b = Point::new(90, 70);
    let c = Point::new(10, -50);

    // continuous slider values snap onto the lattice
    let slider_radius = 49.7_f32;
    let circle = Shape::circle_from_real(PointF::new(0.0, 0.0), slider_radius)
        .expect("slider values are finite");

    let shapes = [
        ("line", Shape::line(a, b), Rgba::WHITE),
        ("circle", circle, Rgba::GREEN),
        ("triangle_outline", Shape::triangle_outline(a, b, c), Rgba::BLUE),
        ("filled_triangle", Shape::filled_triangle(a, b, c), Rgba::RED),
    ];

    for (i, (name, shape, color)) in shapes.iter().enumerate() {
        println!("{}. Rasterizing {}...", i + 1, shape.kind());

        let mut fb = Framebuffer::new(SIZE, SIZE).expect("Failed to create framebuffer");
        fb.clear(Rgba::BLACK);
        let count = renderer
            .color(*color)
            .draw_shape(&mut fb, &rasterizer, shape)
            .expect("Failed to rasterize shape");

        let path = format!("raster_{name}.png");
        PngEncoder::write_to_file(&fb, &path).expect("Failed to write PNG");
        println!("   {count} points -> {path}\n");
    }

    let (_, stats) = fill_triangle_with_stats(a, b, c);
    println!(
        "Fill coverage: {} of {} bounding-box points ({:.1}%)",
        stats.inside,
        stats.scanned,
        stats.coverage() * 100.0
    );

    match rasterizer.rasterize(&Shape::circle(Point::ORIGIN, -5)) {
        Ok(_) => println!("Negative radius unexpectedly accepted"),
        Err(e) => println!("Rejected invalid input: {e}"),
    }
}
