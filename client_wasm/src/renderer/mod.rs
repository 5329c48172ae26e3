pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use resources::GameBuffers;
use wgpu::*;

use crate::error::ClientError;
use crate::mesh::Mesh;
use crate::scene::Scene;

/// Segments in the ball's circle mesh
const CIRCLE_SEGMENTS: u16 = 32;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,

    pub main_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,

    pub buffers: GameBuffers,
    pub meshes: (Mesh, Mesh), // quad, circle
}

impl Renderer {
    /// Set up WebGPU on `canvas` with a camera spanning the arena
    #[cfg(target_arch = "wasm32")]
    pub async fn new(
        canvas: web_sys::HtmlCanvasElement,
        arena: glam::Vec2,
    ) -> Result<Self, ClientError> {
        use crate::camera::Camera;
        use crate::mesh::{unit_circle, unit_quad};

        let ctx = init::init_wgpu(canvas).await?;
        let camera = Camera::orthographic(arena.x, arena.y);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);

        // Meshes
        let (quad_vertices, quad_indices) = unit_quad();
        let (circle_vertices, circle_indices) = unit_circle(CIRCLE_SEGMENTS);
        let quad_mesh = Mesh::new(&ctx.device, &ctx.queue, &quad_vertices, &quad_indices);
        let circle_mesh = Mesh::new(&ctx.device, &ctx.queue, &circle_vertices, &circle_indices);

        // Bind Groups
        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            main_pipeline: pipes.main_pipeline,
            camera_bind_group,
            buffers,
            meshes: (quad_mesh, circle_mesh),
        })
    }

    pub fn draw(&mut self, scene: &Scene) -> Result<(), ClientError> {
        draw::draw_frame(self, scene)
    }
}
