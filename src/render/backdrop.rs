use super::{helpers, ObjectUniforms};
use crate::core::constants::*;
use crate::core::geometry::{plane_triangles, ring_triangles};
use wgpu::util::DeviceExt;

const MESH_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

/// One translucent flat mesh with its own transform/material uniforms.
pub(crate) struct BackdropMesh {
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    object_buffer: wgpu::Buffer,
    object_bg: wgpu::BindGroup,
}

impl BackdropMesh {
    fn new(
        device: &wgpu::Device,
        label: &str,
        object_bgl: &wgpu::BindGroupLayout,
        vertices: &[[f32; 3]],
    ) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let object_buffer = helpers::uniform_buffer::<ObjectUniforms>(device, label);
        let object_bg = helpers::uniform_bind_group(device, label, object_bgl, &object_buffer);
        Self {
            vertex_buffer,
            vertex_count: vertices.len() as u32,
            object_buffer,
            object_bg,
        }
    }

    pub(crate) fn write_object(&self, queue: &wgpu::Queue, uniforms: &ObjectUniforms) {
        queue.write_buffer(&self.object_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_bind_group(1, &self.object_bg, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.draw(0..self.vertex_count, 0..1);
    }
}

/// Background ring and light streak drawn behind the particles.
pub(crate) struct BackdropResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) ring: BackdropMesh,
    pub(crate) streak: BackdropMesh,
}

pub(crate) fn create_backdrop_resources(
    device: &wgpu::Device,
    shader: &wgpu::ShaderModule,
    scene_bgl: &wgpu::BindGroupLayout,
    object_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
    sample_count: u32,
) -> BackdropResources {
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("backdrop_pl"),
        bind_group_layouts: &[scene_bgl, object_bgl],
        push_constant_ranges: &[],
    });
    let pipeline = helpers::make_scene_pipeline(
        device,
        "backdrop_pipeline",
        &layout,
        shader,
        "vs_mesh",
        "fs_mesh",
        &[wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<[f32; 3]>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &MESH_ATTRS,
        }],
        color_format,
        wgpu::BlendState::ALPHA_BLENDING,
        sample_count,
    );
    let ring = BackdropMesh::new(
        device,
        "ring",
        object_bgl,
        &ring_triangles(RING_INNER, RING_OUTER, RING_SEGMENTS),
    );
    let streak = BackdropMesh::new(
        device,
        "streak",
        object_bgl,
        &plane_triangles(STREAK_WIDTH, STREAK_HEIGHT),
    );
    BackdropResources {
        pipeline,
        ring,
        streak,
    }
}

impl BackdropResources {
    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        self.ring.draw(rpass);
        self.streak.draw(rpass);
    }
}
