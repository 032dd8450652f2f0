//! Decorative hero scene: a slowly spinning particle cloud plus three
//! floating props, all tilted toward the pointer.
//!
//! Everything is animated on the CPU and flattened into a triangle list of
//! [`SceneVertex`]; the GPU pass only applies view/projection and expands
//! particle billboards in view space.

use crate::constants::*;
use glam::{EulerRot, Mat4, Vec2, Vec3};
use rand::prelude::*;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6, TAU};

/// One vertex of the flattened scene.
///
/// Fields:
/// - `position`: world-space position (billboard centre for particles)
/// - `half_size`: billboard half extent in view units; 0 for mesh vertices
/// - `corner`: billboard corner in \[-1, 1\]²; zero for mesh vertices
/// - `color`: straight (non-premultiplied) RGBA
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneVertex {
    pub position: [f32; 3],
    pub half_size: f32,
    pub corner: [f32; 2],
    pub color: [f32; 4],
}

const QUAD_CORNERS: [[f32; 2]; 6] = [
    [-1.0, -1.0],
    [1.0, -1.0],
    [1.0, 1.0],
    [-1.0, -1.0],
    [1.0, 1.0],
    [-1.0, 1.0],
];

/// Vertices emitted per particle.
pub const VERTICES_PER_PARTICLE: usize = QUAD_CORNERS.len();

/// Simple right-handed perspective camera looking at the origin from +Z.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn hero(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            aspect: if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 },
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }
}

// ---------------- Mesh builders (triangle lists) ----------------

pub fn box_mesh(width: f32, height: f32, depth: f32) -> Vec<Vec3> {
    let (x, y, z) = (width * 0.5, height * 0.5, depth * 0.5);
    let c = [
        Vec3::new(-x, -y, -z),
        Vec3::new(x, -y, -z),
        Vec3::new(x, y, -z),
        Vec3::new(-x, y, -z),
        Vec3::new(-x, -y, z),
        Vec3::new(x, -y, z),
        Vec3::new(x, y, z),
        Vec3::new(-x, y, z),
    ];
    const FACES: [[usize; 4]; 6] = [
        [4, 5, 6, 7], // +z
        [1, 0, 3, 2], // -z
        [5, 1, 2, 6], // +x
        [0, 4, 7, 3], // -x
        [7, 6, 2, 3], // +y
        [0, 1, 5, 4], // -y
    ];
    let mut out = Vec::with_capacity(36);
    for [a, b, cc, d] in FACES {
        out.extend_from_slice(&[c[a], c[b], c[cc], c[a], c[cc], c[d]]);
    }
    out
}

/// Capped cylinder along Y, centred on the origin.
pub fn cylinder_mesh(radius_top: f32, radius_bottom: f32, height: f32, segments: usize) -> Vec<Vec3> {
    let segments = segments.max(3);
    let half = height * 0.5;
    let ring = |r: f32, y: f32, i: usize| {
        let a = TAU * i as f32 / segments as f32;
        Vec3::new(r * a.sin(), y, r * a.cos())
    };
    let top_c = Vec3::new(0.0, half, 0.0);
    let bot_c = Vec3::new(0.0, -half, 0.0);
    let mut out = Vec::with_capacity(segments * 12);
    for i in 0..segments {
        let t0 = ring(radius_top, half, i);
        let t1 = ring(radius_top, half, i + 1);
        let b0 = ring(radius_bottom, -half, i);
        let b1 = ring(radius_bottom, -half, i + 1);
        out.extend_from_slice(&[t0, b0, b1, t0, b1, t1]);
        out.extend_from_slice(&[top_c, t0, t1]);
        out.extend_from_slice(&[bot_c, b1, b0]);
    }
    out
}

/// Flat disc in the XY plane facing +Z.
pub fn circle_mesh(radius: f32, segments: usize) -> Vec<Vec3> {
    let segments = segments.max(3);
    let mut out = Vec::with_capacity(segments * 3);
    for i in 0..segments {
        let a0 = TAU * i as f32 / segments as f32;
        let a1 = TAU * (i + 1) as f32 / segments as f32;
        out.extend_from_slice(&[
            Vec3::ZERO,
            Vec3::new(radius * a0.cos(), radius * a0.sin(), 0.0),
            Vec3::new(radius * a1.cos(), radius * a1.sin(), 0.0),
        ]);
    }
    out
}

// ---------------- Props ----------------

/// Vertical sine bob: `base_y + amplitude * sin(t + phase)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bob {
    pub base_y: f32,
    pub amplitude: f32,
    pub phase: f32,
}

impl Bob {
    #[inline]
    pub fn y_at(&self, time_sec: f32) -> f32 {
        self.base_y + self.amplitude * (time_sec + self.phase).sin()
    }
}

/// A floating object made of one or more mesh parts sharing a colour.
#[derive(Clone, Debug)]
pub struct Prop {
    pub name: &'static str,
    pub position: Vec3,
    pub rotation: Vec3,
    pub bob: Bob,
    pub color: [f32; 4],
    /// Mesh parts in prop-local space, each with its own local transform.
    pub parts: Vec<(Vec<Vec3>, Mat4)>,
}

impl Prop {
    /// Prop-to-group transform at `time_sec`.
    pub fn transform(&self, time_sec: f32) -> Mat4 {
        let pos = Vec3::new(self.position.x, self.bob.y_at(time_sec), self.position.z);
        Mat4::from_translation(pos)
            * Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    pub fn vertex_count(&self) -> usize {
        self.parts.iter().map(|(mesh, _)| mesh.len()).sum()
    }
}

pub fn default_props() -> Vec<Prop> {
    let seg = MESH_SEGMENTS;
    let gavel = Prop {
        name: "gavel",
        position: Vec3::new(-3.0, 1.0, -2.0),
        rotation: Vec3::new(FRAC_PI_4, 0.0, FRAC_PI_6),
        bob: Bob {
            base_y: 1.0,
            amplitude: 0.2,
            phase: 0.0,
        },
        color: GAVEL_COLOR,
        parts: vec![(cylinder_mesh(0.1, 0.2, 0.8, seg), Mat4::IDENTITY)],
    };
    let dish_rot = Mat4::from_rotation_x(-FRAC_PI_2);
    let scales = Prop {
        name: "scales",
        position: Vec3::new(2.0, 0.0, -1.0),
        rotation: Vec3::ZERO,
        bob: Bob {
            base_y: 0.0,
            amplitude: 0.2,
            phase: 1.0,
        },
        color: SCALES_COLOR,
        parts: vec![
            (box_mesh(0.8, 0.1, 0.1), Mat4::IDENTITY),
            (
                cylinder_mesh(0.03, 0.03, 0.6, seg),
                Mat4::from_translation(Vec3::new(0.0, 0.3, 0.0)),
            ),
            (
                circle_mesh(0.2, seg),
                Mat4::from_translation(Vec3::new(-0.4, 0.5, 0.0)) * dish_rot,
            ),
            (
                circle_mesh(0.2, seg),
                Mat4::from_translation(Vec3::new(0.4, 0.5, 0.0)) * dish_rot,
            ),
        ],
    };
    let book = Prop {
        name: "book",
        position: Vec3::new(0.0, -1.5, -1.0),
        rotation: Vec3::new(0.0, FRAC_PI_6, 0.0),
        bob: Bob {
            base_y: -1.5,
            amplitude: 0.1,
            phase: 2.0,
        },
        color: BOOK_COLOR,
        parts: vec![(box_mesh(0.7, 0.1, 0.5), Mat4::IDENTITY)],
    };
    vec![gavel, scales, book]
}

// ---------------- Scene ----------------

/// Map a pointer position to normalized device coordinates (+Y up).
#[inline]
pub fn pointer_ndc(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (client_x / width) * 2.0 - 1.0,
        -(client_y / height) * 2.0 + 1.0,
    )
}

/// Uniformly scatter `count` points in a cube of edge `spread` around the origin.
pub fn scatter_particles(count: usize, spread: f32, seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * spread,
                (rng.gen::<f32>() - 0.5) * spread,
                (rng.gen::<f32>() - 0.5) * spread,
            )
        })
        .collect()
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub particles: Vec<Vec3>,
    pub props: Vec<Prop>,
    /// Particle cloud spin (x, y) in radians.
    pub particle_spin: Vec2,
    /// Pointer-driven group tilt (x, y) in radians.
    pub group_tilt: Vec2,
    pub time_sec: f32,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(SCENE_SEED)
    }
}

impl Scene {
    pub fn new(seed: u64) -> Self {
        Self {
            particles: scatter_particles(PARTICLE_COUNT, PARTICLE_SPREAD, seed),
            props: default_props(),
            particle_spin: Vec2::ZERO,
            group_tilt: Vec2::ZERO,
            time_sec: 0.0,
        }
    }

    /// Tilt the whole group toward a pointer given in NDC.
    pub fn set_pointer(&mut self, ndc: Vec2) {
        self.group_tilt = Vec2::new(ndc.y * POINTER_TILT, ndc.x * POINTER_TILT);
    }

    /// Step animation by `dt_sec`.
    pub fn advance(&mut self, dt_sec: f32) {
        let dt = dt_sec.clamp(0.0, 0.25);
        self.time_sec += dt;
        let spin = PARTICLE_SPIN_PER_SEC * dt;
        self.particle_spin += Vec2::splat(spin);
    }

    #[inline]
    pub fn group_matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.group_tilt.x, self.group_tilt.y, 0.0)
    }

    pub fn vertex_count(&self) -> usize {
        self.particles.len() * VERTICES_PER_PARTICLE
            + self.props.iter().map(Prop::vertex_count).sum::<usize>()
    }

    /// Flatten the scene into world-space vertices, particles first.
    pub fn write_vertices(&self, out: &mut Vec<SceneVertex>) {
        out.clear();
        out.reserve(self.vertex_count());
        let group = self.group_matrix();
        let cloud = group
            * Mat4::from_euler(EulerRot::XYZ, self.particle_spin.x, self.particle_spin.y, 0.0);
        for p in &self.particles {
            let c = cloud.transform_point3(*p).to_array();
            for corner in QUAD_CORNERS {
                out.push(SceneVertex {
                    position: c,
                    half_size: PARTICLE_SIZE * 0.5,
                    corner,
                    color: PARTICLE_COLOR,
                });
            }
        }
        for prop in &self.props {
            let m = group * prop.transform(self.time_sec);
            for (mesh, local) in &prop.parts {
                let mm = m * *local;
                out.extend(mesh.iter().map(|v| SceneVertex {
                    position: mm.transform_point3(*v).to_array(),
                    half_size: 0.0,
                    corner: [0.0, 0.0],
                    color: prop.color,
                }));
            }
        }
    }
}
