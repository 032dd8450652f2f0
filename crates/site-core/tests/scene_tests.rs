// Host-side tests for hero scene geometry and animation.

use glam::{Vec2, Vec3};
use site_core::constants::{PARTICLE_COUNT, PARTICLE_SIZE, PARTICLE_SPREAD};
use site_core::*;

#[test]
fn particles_fill_the_cube() {
    let pts = scatter_particles(PARTICLE_COUNT, PARTICLE_SPREAD, 42);
    assert_eq!(pts.len(), PARTICLE_COUNT);
    let half = PARTICLE_SPREAD * 0.5;
    for p in &pts {
        assert!(p.abs().max_element() <= half, "{p:?} outside cube");
    }
}

#[test]
fn particle_layout_is_seeded() {
    assert_eq!(scatter_particles(16, 10.0, 7), scatter_particles(16, 10.0, 7));
    assert_ne!(scatter_particles(16, 10.0, 7), scatter_particles(16, 10.0, 8));
}

#[test]
fn mesh_builders_emit_whole_triangles() {
    assert_eq!(box_mesh(1.0, 1.0, 1.0).len(), 36);
    assert_eq!(cylinder_mesh(0.1, 0.2, 0.8, 16).len(), 16 * 12);
    assert_eq!(circle_mesh(0.2, 16).len(), 16 * 3);
    assert_eq!(cylinder_mesh(1.0, 1.0, 1.0, 1).len(), 3 * 12, "min 3 segments");
}

#[test]
fn box_mesh_extents_match_dimensions() {
    let m = box_mesh(0.8, 0.1, 0.4);
    let max = m.iter().fold(Vec3::splat(f32::MIN), |a, v| a.max(*v));
    let min = m.iter().fold(Vec3::splat(f32::MAX), |a, v| a.min(*v));
    assert!((max - Vec3::new(0.4, 0.05, 0.2)).abs().max_element() < 1e-6);
    assert!((min + Vec3::new(0.4, 0.05, 0.2)).abs().max_element() < 1e-6);
}

#[test]
fn props_bob_around_their_base() {
    let props = default_props();
    let names: Vec<&str> = props.iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["gavel", "scales", "book"]);

    let gavel = &props[0];
    assert!((gavel.bob.y_at(0.0) - 1.0).abs() < 1e-6);
    assert!((gavel.bob.y_at(std::f32::consts::FRAC_PI_2) - 1.2).abs() < 1e-5);

    let book = &props[2];
    for i in 0..100 {
        let y = book.bob.y_at(i as f32 * 0.1);
        assert!((-1.6..=-1.4).contains(&y), "book y={y}");
    }
}

#[test]
fn scales_prop_has_bar_pole_and_two_dishes() {
    let props = default_props();
    assert_eq!(props[1].parts.len(), 4);
}

#[test]
fn vertex_count_matches_written_vertices() {
    let scene = Scene::default();
    let mut out = Vec::new();
    scene.write_vertices(&mut out);
    assert_eq!(out.len(), scene.vertex_count());
    let billboards = out.iter().filter(|v| v.half_size > 0.0).count();
    assert_eq!(billboards, PARTICLE_COUNT * VERTICES_PER_PARTICLE);
}

#[test]
fn particle_billboards_span_the_particle_size() {
    let scene = Scene::default();
    let mut out = Vec::new();
    scene.write_vertices(&mut out);
    let quad = &out[..VERTICES_PER_PARTICLE];
    let xs = quad.iter().map(|v| v.corner[0] * v.half_size);
    let (lo, hi) = xs.fold((f32::MAX, f32::MIN), |(lo, hi), x| (lo.min(x), hi.max(x)));
    assert!((hi - lo - PARTICLE_SIZE).abs() < 1e-6);
}

#[test]
fn pointer_ndc_maps_corners() {
    assert_eq!(pointer_ndc(0.0, 0.0, 200.0, 100.0), Vec2::new(-1.0, 1.0));
    assert_eq!(pointer_ndc(200.0, 100.0, 200.0, 100.0), Vec2::new(1.0, -1.0));
    assert_eq!(pointer_ndc(100.0, 50.0, 200.0, 100.0), Vec2::ZERO);
    assert_eq!(pointer_ndc(5.0, 5.0, 0.0, 0.0), Vec2::ZERO);
}

#[test]
fn pointer_tilts_group() {
    let mut scene = Scene::new(1);
    scene.set_pointer(Vec2::new(1.0, -0.5));
    assert!((scene.group_tilt.y - 0.1).abs() < 1e-6);
    assert!((scene.group_tilt.x + 0.05).abs() < 1e-6);
}

#[test]
fn advance_spins_particles_frame_rate_independently() {
    let mut a = Scene::new(1);
    let mut b = Scene::new(1);
    for _ in 0..60 {
        a.advance(1.0 / 60.0);
    }
    for _ in 0..30 {
        b.advance(1.0 / 30.0);
    }
    assert!((a.particle_spin - b.particle_spin).abs().max_element() < 1e-5);
    assert!((a.particle_spin.x - 0.03).abs() < 1e-4);
    assert!((a.time_sec - 1.0).abs() < 1e-4);
}

#[test]
fn advance_clamps_long_frames() {
    let mut scene = Scene::new(1);
    scene.advance(10.0);
    assert!(scene.time_sec <= 0.25 + 1e-6);
    scene.advance(-1.0);
    assert!(scene.time_sec <= 0.25 + 1e-6);
}

#[test]
fn camera_looks_down_negative_z() {
    let cam = Camera::hero(16.0 / 9.0);
    let view = cam.view_matrix();
    let p = view.transform_point3(Vec3::ZERO);
    assert!((p.z + 5.0).abs() < 1e-5);
    assert_eq!(Camera::hero(f32::NAN).aspect, 1.0);
}
