// Host-side tests for scene packing and the built-in Cornell room.

use glam::Vec3;
use pathview_core::{
    cornell_camera, cornell_scene, pack_scene, BoxPrimitive, Material, SpherePrimitive,
    CORNELL_BOXES, CORNELL_SPHERES,
};

fn vec4_at(data: &[f32], i: usize) -> [f32; 4] {
    [data[4 * i], data[4 * i + 1], data[4 * i + 2], data[4 * i + 3]]
}

#[test]
fn first_box_min_corner_is_padded_with_zero() {
    let packed = cornell_scene();
    assert_eq!(vec4_at(&packed.box_min_corner, 0), [-0.5, 0.0, 0.0, 0.0]);
    assert_eq!(vec4_at(&packed.box_max_corner, 0), [0.0, 81.6, 170.0, 0.0]);
}

#[test]
fn packing_preserves_order_and_fields() {
    let packed = cornell_scene();
    assert_eq!(packed.box_count(), CORNELL_BOXES.len());
    assert_eq!(packed.sphere_count(), CORNELL_SPHERES.len());
    assert_eq!(packed.box_min_corner.len(), 4 * CORNELL_BOXES.len());

    for (i, b) in CORNELL_BOXES.iter().enumerate() {
        assert_eq!(vec4_at(&packed.box_min_corner, i), b.min.extend(0.0).to_array());
        assert_eq!(vec4_at(&packed.box_max_corner, i), b.max.extend(0.0).to_array());
        assert_eq!(vec4_at(&packed.box_albedo, i), b.albedo.extend(0.0).to_array());
        assert_eq!(vec4_at(&packed.box_emission, i), b.emission.extend(0.0).to_array());
        assert_eq!(packed.box_material[i], b.material.id());
    }
    for (i, s) in CORNELL_SPHERES.iter().enumerate() {
        assert_eq!(vec4_at(&packed.sphere_center_radius, i), s.center.extend(s.radius).to_array());
        assert_eq!(vec4_at(&packed.sphere_albedo, i), s.albedo.extend(0.0).to_array());
        assert_eq!(vec4_at(&packed.sphere_emission, i), s.emission.extend(0.0).to_array());
        assert_eq!(packed.sphere_material[i], s.material.id());
    }
}

#[test]
fn sphere_radius_rides_in_w() {
    let packed = cornell_scene();
    assert_eq!(vec4_at(&packed.sphere_center_radius, 0), [27.0, 16.5, 47.0, 16.5]);
    assert_eq!(vec4_at(&packed.sphere_center_radius, 1), [53.0, 16.5, 98.0, 16.5]);
}

#[test]
fn material_ids_are_stable() {
    assert_eq!(Material::Diffuse.id(), 0);
    assert_eq!(Material::Mirror.id(), 1);
    assert_eq!(Material::Glass.id(), 2);
    let packed = cornell_scene();
    assert_eq!(packed.box_material, vec![0, 0, 0, 0, 0, 0, 1]);
    assert_eq!(packed.sphere_material, vec![1, 2]);
}

#[test]
fn room_has_exactly_one_emitter() {
    let emitters = CORNELL_BOXES
        .iter()
        .filter(|b| b.emission != Vec3::ZERO)
        .count()
        + CORNELL_SPHERES
            .iter()
            .filter(|s| s.emission != Vec3::ZERO)
            .count();
    assert_eq!(emitters, 1);
}

#[test]
fn packing_is_deterministic_and_handles_empty_input() {
    assert_eq!(cornell_scene(), cornell_scene());
    let empty = pack_scene(&[], &[]);
    assert_eq!(empty.box_count(), 0);
    assert_eq!(empty.sphere_count(), 0);
    assert!(empty.box_min_corner.is_empty() && empty.sphere_center_radius.is_empty());
}

#[test]
fn custom_input_keeps_index_correspondence() {
    let boxes = [
        BoxPrimitive {
            min: Vec3::new(1.0, 2.0, 3.0),
            max: Vec3::new(4.0, 5.0, 6.0),
            albedo: Vec3::splat(0.5),
            emission: Vec3::ZERO,
            material: Material::Glass,
        },
        BoxPrimitive {
            min: Vec3::new(-1.0, -2.0, -3.0),
            max: Vec3::ZERO,
            albedo: Vec3::ONE,
            emission: Vec3::splat(2.0),
            material: Material::Diffuse,
        },
    ];
    let spheres = [SpherePrimitive {
        center: Vec3::new(7.0, 8.0, 9.0),
        radius: 0.25,
        albedo: Vec3::ONE,
        emission: Vec3::ZERO,
        material: Material::Mirror,
    }];
    let packed = pack_scene(&boxes, &spheres);
    assert_eq!(vec4_at(&packed.box_min_corner, 1), [-1.0, -2.0, -3.0, 0.0]);
    assert_eq!(vec4_at(&packed.box_emission, 1), [2.0, 2.0, 2.0, 0.0]);
    assert_eq!(packed.box_material, vec![2, 0]);
    assert_eq!(vec4_at(&packed.sphere_center_radius, 0), [7.0, 8.0, 9.0, 0.25]);
}

#[test]
fn cornell_camera_frames_the_room() {
    let config = cornell_camera();
    assert_eq!(config.validate(), Ok(()));
    assert_eq!(config.distance, 180.0);
    assert!(config.min_distance <= config.distance && config.distance <= config.max_distance);
}
