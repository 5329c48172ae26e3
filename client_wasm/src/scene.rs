//! Per-frame draw list built through the core `Graphics` trait

use std::ops::Range;

use game_core::{Aabb, Anchor, Color, Graphics};
use glam::Vec2;

/// Thickness of stroked lines, in arena pixels
pub const LINE_WIDTH: f32 = 1.0;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y, scale_x, scale_y
    pub tint: [f32; 4],      // rgba
    pub rotation: [f32; 4],  // cos, sin, unused, unused
}

impl InstanceData {
    pub fn rect(rect: Aabb, color: Color) -> Self {
        let size = rect.size();
        Self {
            transform: [rect.min.x, rect.min.y, size.x, size.y],
            tint: color,
            rotation: [1.0, 0.0, 0.0, 0.0],
        }
    }

    /// A thin quad from `from` to `to`, centred on the segment
    pub fn line(from: Vec2, to: Vec2, width: f32, color: Color) -> Self {
        let delta = to - from;
        let length = delta.length();
        let dir = if length > 0.0 { delta / length } else { Vec2::X };
        let normal = Vec2::new(-dir.y, dir.x);
        let origin = from - normal * (width / 2.0);
        Self {
            transform: [origin.x, origin.y, length, width],
            tint: color,
            rotation: [dir.x, dir.y, 0.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshKind {
    Quad,
    Circle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub pos: Vec2,
    pub size: f32,
    pub color: Color,
    pub anchor: Anchor,
}

#[derive(Default)]
pub struct Scene {
    kinds: Vec<MeshKind>,
    instances: Vec<InstanceData>,
    texts: Vec<TextItem>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.kinds.clear();
        self.instances.clear();
        self.texts.clear();
    }

    pub fn instances(&self) -> &[InstanceData] {
        &self.instances
    }

    pub fn texts(&self) -> &[TextItem] {
        &self.texts
    }

    /// Consecutive runs of the same mesh, so shapes keep their submission order
    pub fn batches(&self) -> Vec<(MeshKind, Range<u32>)> {
        let mut batches: Vec<(MeshKind, Range<u32>)> = Vec::new();
        for (i, &kind) in self.kinds.iter().enumerate() {
            let i = i as u32;
            match batches.last_mut() {
                Some((last, range)) if *last == kind => range.end = i + 1,
                _ => batches.push((kind, i..i + 1)),
            }
        }
        batches
    }

    fn push(&mut self, kind: MeshKind, instance: InstanceData) {
        self.kinds.push(kind);
        self.instances.push(instance);
    }
}

impl Graphics for Scene {
    fn fill_rect(&mut self, color: Color, rect: Aabb) {
        self.push(MeshKind::Quad, InstanceData::rect(rect, color));
    }

    fn fill_ellipse(&mut self, color: Color, rect: Aabb) {
        self.push(MeshKind::Circle, InstanceData::rect(rect, color));
    }

    fn line(&mut self, color: Color, from: Vec2, to: Vec2) {
        self.push(MeshKind::Quad, InstanceData::line(from, to, LINE_WIDTH, color));
    }

    fn text(&mut self, text: &str, pos: Vec2, size: f32, color: Color, anchor: Anchor) {
        self.texts.push(TextItem {
            text: text.to_string(),
            pos,
            size,
            color,
            anchor,
        });
    }
}
