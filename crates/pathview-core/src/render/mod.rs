//! wgpu implementation of the accumulate/present loop.
//!
//! Shared by the web (canvas surface) and native (winit window surface)
//! front-ends. All scene data is uploaded once at construction; per frame only
//! the two small uniform blocks change.

mod helpers;
mod passes;
mod targets;

use thiserror::Error;

use crate::accumulation::{AccumulationController, ResetHandle, TickReport};
use crate::camera::CameraBasis;
use crate::scene::PackedScene;
use crate::uniforms::FrameUniforms;
use passes::GpuPasses;
pub use targets::{AccumTarget, ACCUM_FORMAT};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible GPU adapter")]
    NoAdapter,
    #[error("surface reports no supported formats for this adapter")]
    IncompatibleSurface,
    #[error("request_device error: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("{0:?} is not renderable and sampleable on this adapter; HDR accumulation needs it")]
    FloatTargetUnsupported(wgpu::TextureFormat),
}

pub struct Renderer<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    accumulate_pipeline: wgpu::RenderPipeline,
    present_pipeline: wgpu::RenderPipeline,
    source_bgl: wgpu::BindGroupLayout,
    nearest_sampler: wgpu::Sampler,

    accumulate_uniforms: wgpu::Buffer,
    present_uniforms: wgpu::Buffer,
    accumulate_frame_bg: wgpu::BindGroup,
    present_frame_bg: wgpu::BindGroup,

    accumulation: AccumulationController<AccumTarget>,
    num_boxes: u32,
    num_spheres: u32,
    width: u32,
    height: u32,
}

impl<'a> Renderer<'a> {
    pub async fn new(
        instance: &wgpu::Instance,
        target: impl Into<wgpu::SurfaceTarget<'a>>,
        width: u32,
        height: u32,
        scene: &PackedScene,
    ) -> Result<Self, RenderError> {
        let width = width.max(1);
        let height = height.max(1);

        let surface = instance.create_surface(target)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(RenderError::NoAdapter)?;

        let needed = wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING;
        let float_caps = adapter.get_texture_format_features(ACCUM_FORMAT);
        if !float_caps.allowed_usages.contains(needed) {
            return Err(RenderError::FloatTargetUnsupported(ACCUM_FORMAT));
        }

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: Some("pathview_device"),
                },
                None,
            )
            .await?;
        let info = adapter.get_info();
        log::info!("[gpu] adapter: {} ({:?})", info.name, info.backend);

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or(RenderError::IncompatibleSurface)?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("pathtrace_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::PATHTRACE_WGSL.into()),
        });

        // group(0): frame uniforms + scene storage
        let frame_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame_bgl"),
            entries: &[
                helpers::uniform_entry(0),
                helpers::storage_entry(1),
                helpers::storage_entry(2),
                helpers::storage_entry(3),
                helpers::storage_entry(4),
            ],
        });
        // group(1): previous accumulation (float textures are not filterable)
        let source_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("source_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: false },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::NonFiltering),
                    count: None,
                },
            ],
        });
        let nearest_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("nearest_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        // Each packed array keeps its own contiguous range inside the buffer;
        // the shader offsets by the entry count.
        let boxes = helpers::create_storage_buffer(
            &device,
            "scene_boxes",
            &[
                &scene.box_min_corner[..],
                &scene.box_max_corner[..],
                &scene.box_albedo[..],
                &scene.box_emission[..],
            ],
        );
        let box_materials = helpers::create_storage_buffer(
            &device,
            "scene_box_materials",
            &[&scene.box_material[..]],
        );
        let spheres = helpers::create_storage_buffer(
            &device,
            "scene_spheres",
            &[
                &scene.sphere_center_radius[..],
                &scene.sphere_albedo[..],
                &scene.sphere_emission[..],
            ],
        );
        let sphere_materials = helpers::create_storage_buffer(
            &device,
            "scene_sphere_materials",
            &[&scene.sphere_material[..]],
        );

        let make_uniforms = |label: &str| {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: std::mem::size_of::<FrameUniforms>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        };
        let accumulate_uniforms = make_uniforms("accumulate_uniforms");
        let present_uniforms = make_uniforms("present_uniforms");
        let make_frame_bg = |label: &str, uniforms: &wgpu::Buffer| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: &frame_bgl,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniforms.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: boxes.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: box_materials.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 3,
                        resource: spheres.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 4,
                        resource: sphere_materials.as_entire_binding(),
                    },
                ],
            })
        };
        let accumulate_frame_bg = make_frame_bg("accumulate_frame_bg", &accumulate_uniforms);
        let present_frame_bg = make_frame_bg("present_frame_bg", &present_uniforms);

        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pathtrace_pl"),
            bind_group_layouts: &[&frame_bgl, &source_bgl],
            push_constant_ranges: &[],
        });
        let accumulate_pipeline = helpers::make_fullscreen_pipeline(
            &device,
            "accumulate_pipeline",
            &pl,
            &shader,
            "fs_main",
            ACCUM_FORMAT,
        );
        let present_pipeline = helpers::make_fullscreen_pipeline(
            &device,
            "present_pipeline",
            &pl,
            &shader,
            "fs_main",
            format,
        );

        let (a, b) = AccumTarget::pair(&device, &source_bgl, &nearest_sampler, width, height);
        log::info!(
            "[gpu] ready: {}x{} surface={:?} boxes={} spheres={}",
            width,
            height,
            format,
            scene.box_count(),
            scene.sphere_count()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            accumulate_pipeline,
            present_pipeline,
            source_bgl,
            nearest_sampler,
            accumulate_uniforms,
            present_uniforms,
            accumulate_frame_bg,
            present_frame_bg,
            accumulation: AccumulationController::new(a, b),
            num_boxes: scene.box_count() as u32,
            num_spheres: scene.sphere_count() as u32,
            width,
            height,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Handle for camera subscriptions; marks accumulation for reset.
    pub fn reset_handle(&self) -> ResetHandle {
        self.accumulation.reset_handle()
    }

    pub fn frame_count(&self) -> u32 {
        self.accumulation.frame_count()
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.reconfigure();
        let (a, b) = AccumTarget::pair(
            &self.device,
            &self.source_bgl,
            &self.nearest_sampler,
            width,
            height,
        );
        self.accumulation.replace_buffers(a, b);
        log::info!("[gpu] resized to {}x{}", width, height);
    }

    /// Re-apply the surface configuration, e.g. after `SurfaceError::Lost`.
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// One accumulate + present tick.
    pub fn render(
        &mut self,
        basis: CameraBasis,
        time: f32,
    ) -> Result<TickReport, wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame_encoder"),
            });

        let report = {
            let mut passes = GpuPasses {
                encoder: &mut encoder,
                queue: &self.queue,
                surface_view: &view,
                accumulate_pipeline: &self.accumulate_pipeline,
                present_pipeline: &self.present_pipeline,
                accumulate_uniforms: &self.accumulate_uniforms,
                present_uniforms: &self.present_uniforms,
                accumulate_frame_bg: &self.accumulate_frame_bg,
                present_frame_bg: &self.present_frame_bg,
                num_boxes: self.num_boxes,
                num_spheres: self.num_spheres,
            };
            self.accumulation
                .tick(&mut passes, basis, time, self.width, self.height)
        };

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(report)
    }
}
