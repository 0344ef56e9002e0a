use super::{helpers, ObjectUniforms};
use crate::core::texture::GlowImage;
use glam::Vec3;
use wgpu::util::DeviceExt;

/// Per-particle instance data; `pos.w` is padding.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ParticleInstance {
    pub(crate) pos: [f32; 4],
}

const INSTANCE_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x4];

// Premultiplied additive: src + dst.
const ADDITIVE: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

pub(crate) struct ParticleResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) instance_buffer: wgpu::Buffer,
    pub(crate) object_buffer: wgpu::Buffer,
    pub(crate) object_bg: wgpu::BindGroup,
    pub(crate) sprite_bg: wgpu::BindGroup,
    pub(crate) _sprite_tex: wgpu::Texture,
    instances: Vec<ParticleInstance>,
}

pub(crate) struct ParticleSetup<'s> {
    pub(crate) shader: &'s wgpu::ShaderModule,
    pub(crate) scene_bgl: &'s wgpu::BindGroupLayout,
    pub(crate) object_bgl: &'s wgpu::BindGroupLayout,
    pub(crate) color_format: wgpu::TextureFormat,
    pub(crate) sample_count: u32,
}

pub(crate) fn create_particle_resources(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    setup: &ParticleSetup<'_>,
    sprite: &GlowImage,
    initial_positions: &[Vec3],
) -> ParticleResources {
    // Sprite texture, uploaded once
    let size = wgpu::Extent3d {
        width: sprite.size,
        height: sprite.size,
        depth_or_array_layers: 1,
    };
    let sprite_tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("glow_sprite"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        // Premultiplied bytes, sampled without sRGB decode
        format: wgpu::TextureFormat::Rgba8Unorm,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &sprite_tex,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &sprite.pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(sprite.bytes_per_row()),
            rows_per_image: Some(sprite.size),
        },
        size,
    );
    let sprite_view = sprite_tex.create_view(&wgpu::TextureViewDescriptor::default());
    let sprite_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("glow_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    });
    let sprite_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("sprite_bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });
    let sprite_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("sprite_bg"),
        layout: &sprite_bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&sprite_view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(&sprite_sampler),
            },
        ],
    });

    // Instance buffer sized for the fixed particle count
    let instances: Vec<ParticleInstance> = initial_positions.iter().map(|p| pack(*p)).collect();
    let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("particle_instances"),
        contents: bytemuck::cast_slice(&instances),
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
    });

    let object_buffer = helpers::uniform_buffer::<ObjectUniforms>(device, "particle_object");
    let object_bg =
        helpers::uniform_bind_group(device, "particle_object_bg", setup.object_bgl, &object_buffer);

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("particle_pl"),
        bind_group_layouts: &[setup.scene_bgl, setup.object_bgl, &sprite_bgl],
        push_constant_ranges: &[],
    });
    let pipeline = helpers::make_scene_pipeline(
        device,
        "particle_pipeline",
        &layout,
        setup.shader,
        "vs_particle",
        "fs_particle",
        &[wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ParticleInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRS,
        }],
        setup.color_format,
        ADDITIVE,
        setup.sample_count,
    );

    ParticleResources {
        pipeline,
        instance_buffer,
        object_buffer,
        object_bg,
        sprite_bg,
        _sprite_tex: sprite_tex,
        instances,
    }
}

#[inline]
fn pack(p: Vec3) -> ParticleInstance {
    ParticleInstance {
        pos: [p.x, p.y, p.z, 0.0],
    }
}

impl ParticleResources {
    /// Copy this frame's positions into the instance buffer. Extra positions
    /// beyond the allocated count are ignored.
    pub(crate) fn upload(&mut self, queue: &wgpu::Queue, positions: &[Vec3]) {
        for (dst, p) in self.instances.iter_mut().zip(positions) {
            *dst = pack(*p);
        }
        queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&self.instances));
    }

    pub(crate) fn write_object(&self, queue: &wgpu::Queue, uniforms: &ObjectUniforms) {
        queue.write_buffer(&self.object_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(1, &self.object_bg, &[]);
        rpass.set_bind_group(2, &self.sprite_bg, &[]);
        rpass.set_vertex_buffer(0, self.instance_buffer.slice(..));
        rpass.draw(0..6, 0..self.instances.len() as u32);
    }
}
