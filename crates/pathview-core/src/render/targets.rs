use super::helpers;

/// HDR format the running average is stored in.
pub const ACCUM_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba32Float;

/// One accumulation slot: the float texture plus the bind group that exposes
/// it as the "previous frame" input of a later pass.
pub struct AccumTarget {
    #[allow(dead_code)]
    pub(crate) tex: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
    pub(crate) source_bg: wgpu::BindGroup,
}

impl AccumTarget {
    pub(crate) fn new(
        device: &wgpu::Device,
        label: &str,
        source_bgl: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        width: u32,
        height: u32,
    ) -> Self {
        let (tex, view) = helpers::create_color_texture(
            device,
            label,
            width,
            height,
            ACCUM_FORMAT,
            wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        );
        let source_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: source_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });
        Self {
            tex,
            view,
            source_bg,
        }
    }

    /// The two ping-pong slots for a `width` x `height` viewport.
    pub(crate) fn pair(
        device: &wgpu::Device,
        source_bgl: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        width: u32,
        height: u32,
    ) -> (Self, Self) {
        (
            Self::new(device, "accum_a", source_bgl, sampler, width, height),
            Self::new(device, "accum_b", source_bgl, sampler, width, height),
        )
    }
}
