// Host-side checks that the GPU vertex layout matches `SceneVertex` and that
// the scene pass depth-tests.

#![allow(dead_code)]
mod layout {
    include!("../src/render/layout.rs");
}

use layout::*;
use site_core::SceneVertex;
use std::mem::{offset_of, size_of};

#[test]
fn vertex_attributes_follow_scene_vertex_fields() {
    let l = vertex_buffer_layout();
    assert_eq!(l.array_stride as usize, size_of::<SceneVertex>());
    let offsets: Vec<u64> = l.attributes.iter().map(|a| a.offset).collect();
    assert_eq!(
        offsets,
        vec![
            offset_of!(SceneVertex, position) as u64,
            offset_of!(SceneVertex, half_size) as u64,
            offset_of!(SceneVertex, corner) as u64,
            offset_of!(SceneVertex, color) as u64,
        ]
    );
    let locations: Vec<u32> = l.attributes.iter().map(|a| a.shader_location).collect();
    assert_eq!(locations, vec![0, 1, 2, 3]);
}

#[test]
fn particles_and_props_share_a_depth_test() {
    let d = depth_stencil_state();
    assert_eq!(d.format, DEPTH_FORMAT);
    assert!(d.depth_write_enabled);
    assert_eq!(d.depth_compare, wgpu::CompareFunction::Less);
}

#[test]
fn uniforms_hold_two_matrices() {
    assert_eq!(size_of::<SceneUniforms>(), 2 * 16 * 4);
}
