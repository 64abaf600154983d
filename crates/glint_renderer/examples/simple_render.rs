//! Simple ray tracer example.
//!
//! Builds a small mirror scene in code and saves it in PPM format.

use glint_renderer::{
    render_parallel, Camera, Color, ImageBuffer, Light, Material, Plane, Point3, RenderConfig,
    Scene, Sphere, Triangle,
};
use glint_math::DVec3;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() -> Result<(), Box<dyn Error>> {
    println!("glint - Simple Example");
    println!("======================");

    let start = std::time::Instant::now();
    let scene = build_scene()?;
    println!("Scene built in {:?} ({} primitives)", start.elapsed(), scene.len());

    let config = RenderConfig::default().with_resolution(640, 480).with_max_depth(8);
    println!("Rendering {}x{}...", config.width, config.height);

    let start = std::time::Instant::now();
    let image = render_parallel(&scene, &config)?;
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_ppm(&image, filename)?;
    println!("Saved to {}", filename);

    Ok(())
}

fn build_scene() -> Result<Scene, Box<dyn Error>> {
    let camera = Camera::new(
        Point3::new(0.0, 1.5, -6.0), // look_from
        Point3::new(0.0, 0.5, 0.0),  // look_at
        DVec3::Y,
        45.0,
    )?;
    let light = Light::new(
        DVec3::new(-1.0, 2.0, -1.5),
        Color::ONE,
        Color::splat(0.15),
        Color::new(0.2, 0.3, 0.5),
    )?;

    let chrome = Material::diffuse(Color::splat(0.6))
        .with_specular(Color::ONE, 60.0)
        .with_weights(0.3, 0.4, 0.1)
        .with_reflectivity(0.6);
    let red = Material::diffuse(Color::new(0.8, 0.15, 0.1))
        .with_specular(Color::ONE, 20.0)
        .with_weights(0.7, 0.3, 0.2)
        .with_reflectivity(0.1);
    let floor = Material::diffuse(Color::new(0.5, 0.5, 0.45)).with_weights(0.8, 0.0, 0.2);

    let scene = Scene::new(camera, light)
        .with(Sphere::new(Point3::new(-1.1, 0.8, 0.0), 0.8, chrome)?)
        .with(Sphere::new(Point3::new(1.0, 0.6, -0.8), 0.6, red)?)
        .with(Triangle::new(
            Point3::new(-2.5, 0.0, 2.0),
            Point3::new(0.0, 2.5, 2.5),
            Point3::new(2.5, 0.0, 2.0),
            chrome,
        )?)
        .with(Plane::new(DVec3::Y, 0.0, floor)?);

    Ok(scene)
}

fn save_ppm(image: &ImageBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for rgb in image.to_rgb8().chunks_exact(3) {
        writeln!(writer, "{} {} {}", rgb[0], rgb[1], rgb[2])?;
    }

    Ok(())
}
