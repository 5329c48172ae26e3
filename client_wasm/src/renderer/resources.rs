use wgpu::util::DeviceExt;
use wgpu::*;

use crate::camera::{Camera, CameraUniform};
use crate::scene::InstanceData;

/// Instances the buffer holds before it has to grow
pub const INITIAL_INSTANCE_CAPACITY: usize = 64;

pub struct GameBuffers {
    pub camera: Buffer,
    pub instances: Buffer,
    pub instance_capacity: usize,
}

impl GameBuffers {
    /// Make room for `count` instances, reallocating by doubling
    pub fn reserve(&mut self, device: &Device, count: usize) {
        if count <= self.instance_capacity {
            return;
        }
        let capacity = grown_capacity(self.instance_capacity, count);
        self.instances = create_instance_buffer(device, capacity);
        self.instance_capacity = capacity;
        log::debug!("Instance buffer grown to {}", capacity);
    }
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    // Camera buffer
    let camera_uniform = CameraUniform::from_camera(camera);
    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    GameBuffers {
        camera: camera_buffer,
        instances: create_instance_buffer(device, INITIAL_INSTANCE_CAPACITY),
        instance_capacity: INITIAL_INSTANCE_CAPACITY,
    }
}

fn create_instance_buffer(device: &Device, capacity: usize) -> Buffer {
    device.create_buffer(&BufferDescriptor {
        label: Some("Shape Instance Buffer"),
        size: (std::mem::size_of::<InstanceData>() * capacity) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn grown_capacity(current: usize, needed: usize) -> usize {
    let mut capacity = current.max(1);
    while capacity < needed {
        capacity *= 2;
    }
    capacity
}
