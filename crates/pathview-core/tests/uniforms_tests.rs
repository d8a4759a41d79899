// Host-side tests for the per-pass uniform block layout.

use glam::DVec3;
use pathview_core::{CameraBasis, FrameInputs, FrameUniforms};

fn inputs(width: u32, height: u32) -> FrameInputs {
    FrameInputs {
        frame_count: 17,
        time: 2.5,
        basis: CameraBasis {
            position: DVec3::new(1.0, 2.0, 3.0),
            forward: DVec3::new(0.0, 0.0, -1.0),
            right: DVec3::new(0.5, 0.0, 0.0),
            up: DVec3::new(0.0, 0.25, 0.0),
        },
        width,
        height,
    }
}

#[test]
fn block_is_96_bytes_and_16_aligned() {
    assert_eq!(std::mem::size_of::<FrameUniforms>(), 96);
    assert_eq!(std::mem::size_of::<FrameUniforms>() % 16, 0);
}

#[test]
fn fields_follow_frame_inputs() {
    let u = FrameUniforms::new(&inputs(800, 400), false, 7, 2);
    assert_eq!(u.resolution, [800.0, 400.0, 2.0]);
    assert_eq!(u.time, 2.5);
    assert_eq!(u.camera_pos, [1.0, 2.0, 3.0, 0.0]);
    assert_eq!(u.camera_forward, [0.0, 0.0, -1.0, 0.0]);
    assert_eq!(u.camera_right, [0.5, 0.0, 0.0, 0.0]);
    assert_eq!(u.camera_up, [0.0, 0.25, 0.0, 0.0]);
    assert_eq!(u.frame_count, 17);
    assert_eq!(u.display_only, 0);
    assert_eq!((u.num_boxes, u.num_spheres), (7, 2));
}

#[test]
fn present_flag_and_zero_height() {
    let u = FrameUniforms::new(&inputs(640, 0), true, 0, 0);
    assert_eq!(u.display_only, 1);
    assert!(u.resolution[2].is_finite());
}

#[test]
fn bytes_cast_without_padding_surprises() {
    let u = FrameUniforms::new(&inputs(2, 1), true, 3, 4);
    let bytes: &[u8] = bytemuck::bytes_of(&u);
    assert_eq!(bytes.len(), 96);
    // num_spheres is the last u32
    assert_eq!(&bytes[92..96], &4u32.to_ne_bytes());
}
