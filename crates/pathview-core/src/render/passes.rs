use super::targets::AccumTarget;
use crate::accumulation::{AccumulationPasses, FrameInputs};
use crate::constants::CLEAR_COLOR;
use crate::uniforms::FrameUniforms;

/// Records one tick's passes into `encoder`.
pub(crate) struct GpuPasses<'f> {
    pub(crate) encoder: &'f mut wgpu::CommandEncoder,
    pub(crate) queue: &'f wgpu::Queue,
    pub(crate) surface_view: &'f wgpu::TextureView,
    pub(crate) accumulate_pipeline: &'f wgpu::RenderPipeline,
    pub(crate) present_pipeline: &'f wgpu::RenderPipeline,
    pub(crate) accumulate_uniforms: &'f wgpu::Buffer,
    pub(crate) present_uniforms: &'f wgpu::Buffer,
    pub(crate) accumulate_frame_bg: &'f wgpu::BindGroup,
    pub(crate) present_frame_bg: &'f wgpu::BindGroup,
    pub(crate) num_boxes: u32,
    pub(crate) num_spheres: u32,
}

fn clear_color() -> wgpu::Color {
    let [r, g, b, a] = CLEAR_COLOR;
    wgpu::Color { r, g, b, a }
}

fn fullscreen(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    pipeline: &wgpu::RenderPipeline,
    bg0: &wgpu::BindGroup,
    bg1: &wgpu::BindGroup,
) {
    let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(clear_color()),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    r.set_pipeline(pipeline);
    r.set_bind_group(0, bg0, &[]);
    r.set_bind_group(1, bg1, &[]);
    r.draw(0..3, 0..1);
}

impl AccumulationPasses for GpuPasses<'_> {
    type Target = AccumTarget;

    fn clear(&mut self, target: &mut AccumTarget) {
        // a pass with no draws: load op does the work
        let _ = self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("accum_clear"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &target.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color()),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
    }

    fn accumulate(
        &mut self,
        previous: &AccumTarget,
        output: &mut AccumTarget,
        frame: &FrameInputs,
    ) {
        let u = FrameUniforms::new(frame, false, self.num_boxes, self.num_spheres);
        self.queue
            .write_buffer(self.accumulate_uniforms, 0, bytemuck::bytes_of(&u));
        fullscreen(
            self.encoder,
            "accumulate",
            &output.view,
            self.accumulate_pipeline,
            self.accumulate_frame_bg,
            &previous.source_bg,
        );
    }

    fn present(&mut self, source: &AccumTarget, frame: &FrameInputs) {
        let u = FrameUniforms::new(frame, true, self.num_boxes, self.num_spheres);
        self.queue
            .write_buffer(self.present_uniforms, 0, bytemuck::bytes_of(&u));
        fullscreen(
            self.encoder,
            "present",
            self.surface_view,
            self.present_pipeline,
            self.present_frame_bg,
            &source.source_bg,
        );
    }
}
