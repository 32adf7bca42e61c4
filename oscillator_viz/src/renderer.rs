//! Plot rendering
//!
//! Draws the line geometry of every panel with a single pipeline, switching
//! the viewport between panels.

use crate::geometry::SceneGeometry;
use common::{create_vertex_buffer, GraphicsContext, Vertex};

/// Background behind the plots
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.02,
    b: 0.08,
    a: 1.0,
};

/// Panel viewport in physical pixels: `[x, y, width, height]`
pub type Viewport = [f32; 4];

pub struct PlotRenderer {
    line_pipeline: wgpu::RenderPipeline,
    line_buffer: wgpu::Buffer,
    capacity: usize,
    ranges: [std::ops::Range<u32>; 3],
}

impl PlotRenderer {
    pub fn new(ctx: &GraphicsContext, initial_capacity: usize) -> Self {
        let device = &ctx.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Plot Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/plot.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Plot Pipeline Layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        let line_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Line Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_line",
                buffers: &[Vertex::LAYOUT],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_line",
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.config.format,
                    blend: Some(wgpu::BlendState {
                        color: wgpu::BlendComponent {
                            src_factor: wgpu::BlendFactor::SrcAlpha,
                            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
                            operation: wgpu::BlendOperation::Add,
                        },
                        alpha: wgpu::BlendComponent::OVER,
                    }),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let capacity = initial_capacity.max(1);
        let line_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Line Buffer"),
            size: (std::mem::size_of::<Vertex>() * capacity) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            line_pipeline,
            line_buffer,
            capacity,
            ranges: Default::default(),
        }
    }

    /// Replace the uploaded geometry, growing the buffer when needed
    pub fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, geometry: &SceneGeometry) {
        let vertices = &geometry.vertices;
        if vertices.len() > self.capacity {
            log::debug!("growing line buffer {} -> {} vertices", self.capacity, vertices.len());
            self.line_buffer = create_vertex_buffer(device, vertices);
            self.capacity = vertices.len();
        } else if !vertices.is_empty() {
            queue.write_buffer(&self.line_buffer, 0, bytemuck::cast_slice(vertices));
        }
        self.ranges = geometry.ranges.clone();
    }

    /// Clear the target and draw each panel into its viewport
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        viewports: &[Option<Viewport>; 3],
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Plot Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_pipeline(&self.line_pipeline);
        render_pass.set_vertex_buffer(0, self.line_buffer.slice(..));

        for (range, viewport) in self.ranges.iter().zip(viewports) {
            let Some([x, y, w, h]) = *viewport else {
                continue;
            };
            if range.is_empty() {
                continue;
            }
            render_pass.set_viewport(x, y, w, h, 0.0, 1.0);
            render_pass.draw(range.clone(), 0..1);
        }
    }
}
