//! Static scene description and its flat GPU packing.
//!
//! The packed layout mirrors what the shader indexes: one `vec4` per entry
//! for every 3-wide attribute (padding `w = 0`, except the sphere radius which
//! rides in `w`), plus one `i32` material id per entry. Entry `i` of the input
//! lands at offset `4 * i` in every `vec4` array and at index `i` in the
//! material array.

use glam::{DVec3, Vec3};

use crate::config::CameraConfig;

#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Material {
    Diffuse = 0,
    Mirror = 1,
    Glass = 2,
}

impl Material {
    #[inline]
    pub fn id(self) -> i32 {
        self as i32
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxPrimitive {
    pub min: Vec3,
    pub max: Vec3,
    pub albedo: Vec3,
    pub emission: Vec3,
    pub material: Material,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpherePrimitive {
    pub center: Vec3,
    pub radius: f32,
    pub albedo: Vec3,
    pub emission: Vec3,
    pub material: Material,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PackedScene {
    pub box_min_corner: Vec<f32>,
    pub box_max_corner: Vec<f32>,
    pub box_albedo: Vec<f32>,
    pub box_emission: Vec<f32>,
    pub box_material: Vec<i32>,
    pub sphere_center_radius: Vec<f32>,
    pub sphere_albedo: Vec<f32>,
    pub sphere_emission: Vec<f32>,
    pub sphere_material: Vec<i32>,
}

impl PackedScene {
    pub fn box_count(&self) -> usize {
        self.box_material.len()
    }

    pub fn sphere_count(&self) -> usize {
        self.sphere_material.len()
    }
}

#[inline]
fn push_padded(out: &mut Vec<f32>, v: Vec3, w: f32) {
    out.extend_from_slice(&[v.x, v.y, v.z, w]);
}

pub fn pack_scene(boxes: &[BoxPrimitive], spheres: &[SpherePrimitive]) -> PackedScene {
    let nb = boxes.len() * 4;
    let ns = spheres.len() * 4;
    let mut packed = PackedScene {
        box_min_corner: Vec::with_capacity(nb),
        box_max_corner: Vec::with_capacity(nb),
        box_albedo: Vec::with_capacity(nb),
        box_emission: Vec::with_capacity(nb),
        box_material: Vec::with_capacity(boxes.len()),
        sphere_center_radius: Vec::with_capacity(ns),
        sphere_albedo: Vec::with_capacity(ns),
        sphere_emission: Vec::with_capacity(ns),
        sphere_material: Vec::with_capacity(spheres.len()),
    };

    for b in boxes {
        push_padded(&mut packed.box_min_corner, b.min, 0.0);
        push_padded(&mut packed.box_max_corner, b.max, 0.0);
        push_padded(&mut packed.box_albedo, b.albedo, 0.0);
        push_padded(&mut packed.box_emission, b.emission, 0.0);
        packed.box_material.push(b.material.id());
    }
    for s in spheres {
        push_padded(&mut packed.sphere_center_radius, s.center, s.radius);
        push_padded(&mut packed.sphere_albedo, s.albedo, 0.0);
        push_padded(&mut packed.sphere_emission, s.emission, 0.0);
        packed.sphere_material.push(s.material.id());
    }
    packed
}

const fn boxp(
    min: [f32; 3],
    max: [f32; 3],
    albedo: [f32; 3],
    emission: [f32; 3],
    material: Material,
) -> BoxPrimitive {
    BoxPrimitive {
        min: Vec3::from_array(min),
        max: Vec3::from_array(max),
        albedo: Vec3::from_array(albedo),
        emission: Vec3::from_array(emission),
        material,
    }
}

const BLACK: [f32; 3] = [0.0, 0.0, 0.0];
const WHITE_WALL: [f32; 3] = [0.75, 0.75, 0.75];

/// Cornell-style room: 100 x 81.6 x 170 units, open towards +Z.
pub const CORNELL_BOXES: [BoxPrimitive; 7] = [
    // left wall (red)
    boxp([-0.5, 0.0, 0.0], [0.0, 81.6, 170.0], [0.75, 0.25, 0.25], BLACK, Material::Diffuse),
    // right wall (blue)
    boxp([100.0, 0.0, 0.0], [100.5, 81.6, 170.0], [0.25, 0.25, 0.75], BLACK, Material::Diffuse),
    // back wall
    boxp([0.0, 0.0, -0.5], [100.0, 81.6, 0.0], WHITE_WALL, BLACK, Material::Diffuse),
    // floor
    boxp([0.0, -0.5, 0.0], [100.0, 0.0, 170.0], WHITE_WALL, BLACK, Material::Diffuse),
    // ceiling
    boxp([0.0, 81.6, 0.0], [100.0, 82.1, 170.0], WHITE_WALL, BLACK, Material::Diffuse),
    // ceiling light
    boxp([35.0, 81.0, 60.0], [65.0, 82.1, 100.0], BLACK, [1.0, 1.0, 1.0], Material::Diffuse),
    // mirror block
    boxp([50.0, 0.0, 40.0], [80.0, 40.0, 60.0], [0.85, 0.85, 0.85], BLACK, Material::Mirror),
];

pub const CORNELL_SPHERES: [SpherePrimitive; 2] = [
    SpherePrimitive {
        center: Vec3::new(27.0, 16.5, 47.0),
        radius: 16.5,
        albedo: Vec3::new(0.999, 0.999, 0.999),
        emission: Vec3::ZERO,
        material: Material::Mirror,
    },
    SpherePrimitive {
        center: Vec3::new(53.0, 16.5, 98.0),
        radius: 16.5,
        albedo: Vec3::new(0.999, 0.999, 0.999),
        emission: Vec3::ZERO,
        material: Material::Glass,
    },
];

pub fn cornell_scene() -> PackedScene {
    pack_scene(&CORNELL_BOXES, &CORNELL_SPHERES)
}

/// Start pose looking into the open side of the Cornell room.
pub fn cornell_camera() -> CameraConfig {
    CameraConfig {
        target: DVec3::new(50.0, 40.8, 85.0),
        distance: 180.0,
        min_distance: 20.0,
        max_distance: 600.0,
        ..CameraConfig::default()
    }
}
