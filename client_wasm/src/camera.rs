//! 2D orthographic camera over the arena
//!
//! World units are arena pixels with the origin at the top-left and y
//! pointing down, matching the simulation.

use glam::Mat4;

pub struct Camera {
    pub view_proj: Mat4,
}

impl Camera {
    /// Map `0..width` x `0..height` onto the full clip space, y down
    pub fn orthographic(width: f32, height: f32) -> Self {
        // bottom = height, top = 0 flips the y axis
        let view_proj = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);
        Self { view_proj }
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // 192 bytes padding (48 * 4) to reach 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj.to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}
