use vignette_core::{
    Resolution, ResolutionError, Vertex, FULLSCREEN_QUAD_INDICES, FULLSCREEN_QUAD_VERTICES,
};
use wgpu::util::DeviceExt;
use wgpu::{BindGroup, Buffer, Device, Queue, RenderPipeline, TextureFormat};

use crate::VIGNETTE_WGSL;

/// Vertex layout for `Vertex`: one `vec3<f32>` position at location 0.
const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

/// Darkens the edges of whatever is already in the target.
///
/// Owns the quad geometry, the resolution uniform and the pipeline. The
/// pass loads the target rather than clearing it, so record it after the
/// frame has been drawn.
pub struct VignettePass {
    pipeline: RenderPipeline,
    bind_group: BindGroup,
    uniform_buf: Buffer,

    vertex_buf: Buffer,
    index_buf: Buffer,
    index_count: u32,

    resolution: Resolution,
    pub target_format: TextureFormat,
}

impl VignettePass {
    pub fn new(device: &Device, target_format: TextureFormat) -> Self {
        // --- bind group layout -------------------------------------------------
        // binding 0 : Resolution uniform buffer (read by the fragment stage)
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("vignette_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<Resolution>() as u64
                    ),
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("vignette_pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        // --- uniform buffer ----------------------------------------------------
        let resolution = Resolution::default();
        let uniform_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("vignette_resolution"),
            contents: bytemuck::bytes_of(&resolution),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("vignette_bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buf.as_entire_binding(),
            }],
        });

        // --- quad geometry -----------------------------------------------------
        let vertex_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("vignette_vertices"),
            contents: bytemuck::cast_slice(&FULLSCREEN_QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("vignette_indices"),
            contents: bytemuck::cast_slice(&FULLSCREEN_QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        // --- pipeline ----------------------------------------------------------
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("vignette"),
            source: wgpu::ShaderSource::Wgsl(VIGNETTE_WGSL.into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("vignette_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &VERTEX_ATTRIBUTES,
                }],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        log::debug!("Vignette pass created for {:?}", target_format);

        Self {
            pipeline,
            bind_group,
            uniform_buf,
            vertex_buf,
            index_buf,
            index_count: FULLSCREEN_QUAD_INDICES.len() as u32,
            resolution,
            target_format,
        }
    }

    /// The resolution currently held by the uniform buffer.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Upload a new viewport size. Call whenever the render target changes
    /// size. Rejected values leave the previous resolution bound.
    pub fn set_resolution(
        &mut self,
        queue: &Queue,
        resolution: Resolution,
    ) -> Result<(), ResolutionError> {
        let resolution = resolution.validate().inspect_err(|e| {
            log::warn!("Ignoring vignette resolution: {e}");
        })?;
        if resolution != self.resolution {
            queue.write_buffer(&self.uniform_buf, 0, bytemuck::bytes_of(&resolution));
            self.resolution = resolution;
            log::debug!("Vignette resolution → {}×{}", resolution.x, resolution.y);
        }
        Ok(())
    }

    /// Record the vignette over `target` into `encoder`. Existing contents
    /// are loaded and blended over, never cleared.
    pub fn record(&self, encoder: &mut wgpu::CommandEncoder, target: &wgpu::TextureView) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("vignette_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buf.slice(..));
        pass.set_index_buffer(self.index_buf.slice(..), wgpu::IndexFormat::Uint16);
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
