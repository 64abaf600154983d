//! Example: Load and inspect a JSON scene description.
//!
//! Run with: cargo run --example inspect_scene -- scenes/mirror_spheres.json

use std::env;

use glint_core::load_scene;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_scene <path-to-scene.json>");
        println!("\nExample:");
        println!("  cargo run --example inspect_scene -- scenes/mirror_spheres.json");
        return;
    }

    let path = &args[1];
    println!("Loading scene: {}", path);

    let scene = match load_scene(path) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Error loading scene: {}", e);
            std::process::exit(1);
        }
    };

    println!("\n=== Scene ===");
    println!("Primitives: {}", scene.primitive_count());

    let cam = &scene.camera;
    println!("\n--- Camera ---");
    println!(
        "  From ({:.2}, {:.2}, {:.2}) looking at ({:.2}, {:.2}, {:.2})",
        cam.look_from.x, cam.look_from.y, cam.look_from.z, cam.look_at.x, cam.look_at.y, cam.look_at.z
    );
    println!("  Field of view: {:.1} deg", cam.field_of_view);

    let light = &scene.light;
    println!("\n--- Light ---");
    println!(
        "  Direction to light: ({:.2}, {:.2}, {:.2})",
        light.direction_to_light.x, light.direction_to_light.y, light.direction_to_light.z
    );
    println!("  Ambient: {:?}", light.ambient_light.to_array());
    println!("  Background: {:?}", light.background_color.to_array());

    println!("\n--- Spheres ({}) ---", scene.spheres.len());
    for (i, s) in scene.spheres.iter().enumerate() {
        println!(
            "  [{}] center ({:.2}, {:.2}, {:.2}) radius {:.2} refl {:.2}",
            i, s.center.x, s.center.y, s.center.z, s.radius, s.material.refl
        );
    }

    println!("\n--- Triangles ({}) ---", scene.triangles.len());
    for (i, t) in scene.triangles.iter().enumerate() {
        let centroid = (t.a + t.b + t.c) / 3.0;
        println!(
            "  [{}] centroid ({:.2}, {:.2}, {:.2}) refl {:.2}",
            i, centroid.x, centroid.y, centroid.z, t.material.refl
        );
    }

    println!("\n--- Planes ({}) ---", scene.planes.len());
    for (i, p) in scene.planes.iter().enumerate() {
        println!(
            "  [{}] normal ({:.2}, {:.2}, {:.2}) distance {:.2} refl {:.2}",
            i, p.normal.x, p.normal.y, p.normal.z, p.distance, p.material.refl
        );
    }
}
