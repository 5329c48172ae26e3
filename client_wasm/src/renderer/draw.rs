use wgpu::*;

use super::Renderer;
use crate::error::ClientError;
use crate::scene::{MeshKind, Scene};

const CLEAR: Color = Color::BLACK;

pub fn draw_frame(renderer: &mut Renderer, scene: &Scene) -> Result<(), ClientError> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            // Skip this frame; the next one draws on the reconfigured surface
            renderer
                .surface
                .configure(&renderer.device, &renderer.surface_config);
            return Ok(());
        }
        Err(SurfaceError::Timeout) => {
            log::debug!("Surface timeout, skipping frame");
            return Ok(());
        }
        Err(e) => return Err(ClientError::Frame(e.to_string())),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    update_buffers(renderer, scene);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(CLEAR),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(renderer, scene, &mut pass);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn update_buffers(renderer: &mut Renderer, scene: &Scene) {
    let instances = scene.instances();
    if instances.is_empty() {
        return;
    }
    renderer.buffers.reserve(&renderer.device, instances.len());
    renderer
        .queue
        .write_buffer(&renderer.buffers.instances, 0, bytemuck::cast_slice(instances));
}

/// Draw runs of same-mesh instances in the order they were submitted
fn draw_objects<'a>(renderer: &'a Renderer, scene: &Scene, pass: &mut RenderPass<'a>) {
    pass.set_pipeline(&renderer.main_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
    pass.set_vertex_buffer(1, renderer.buffers.instances.slice(..));

    for (kind, range) in scene.batches() {
        let mesh = match kind {
            MeshKind::Quad => &renderer.meshes.0,
            MeshKind::Circle => &renderer.meshes.1,
        };
        pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        pass.set_index_buffer(mesh.index_buffer.slice(..), IndexFormat::Uint16);
        pass.draw_indexed(0..mesh.index_count, 0, range);
    }
}
