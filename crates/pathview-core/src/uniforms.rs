use crate::accumulation::FrameInputs;

/// Per-pass uniform block, laid out to match the WGSL `Frame` struct.
///
/// `resolution` is `(width, height, width / height)`. Camera vectors carry
/// `w = 0`. `display_only` is 0 for the accumulate pass and 1 for present.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub resolution: [f32; 3],
    pub time: f32,
    pub camera_pos: [f32; 4],
    pub camera_forward: [f32; 4],
    pub camera_right: [f32; 4],
    pub camera_up: [f32; 4],
    pub frame_count: u32,
    pub display_only: u32,
    pub num_boxes: u32,
    pub num_spheres: u32,
}

impl FrameUniforms {
    pub fn new(frame: &FrameInputs, display_only: bool, num_boxes: u32, num_spheres: u32) -> Self {
        let [camera_pos, camera_forward, camera_right, camera_up] =
            frame.basis.to_uniform_vectors();
        let (w, h) = (frame.width as f32, frame.height as f32);
        Self {
            resolution: [w, h, w / h.max(1.0)],
            time: frame.time,
            camera_pos,
            camera_forward,
            camera_right,
            camera_up,
            frame_count: frame.frame_count,
            display_only: display_only as u32,
            num_boxes,
            num_spheres,
        }
    }
}
