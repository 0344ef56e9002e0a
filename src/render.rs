use crate::core::camera::CameraRig;
use crate::core::constants::BACKDROP_LIGHT_WEIGHT;
use crate::core::field::SceneRotations;
use crate::core::scene::{self, BasicMaterial, SceneDescription};
use crate::core::texture::GlowImage;
use glam::{Mat4, Vec3};
use web_sys as web;

mod backdrop;
mod helpers;
mod particles;
mod targets;
use backdrop::{create_backdrop_resources, BackdropResources};
use particles::{create_particle_resources, ParticleResources, ParticleSetup};
use targets::RenderTargets;

// ===================== WebGPU state =====================

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    cam_pos: [f32; 4],
    cam_right: [f32; 4],
    cam_up: [f32; 4],
    fog: [f32; 4],
    key_dir: [f32; 4],
    key_color: [f32; 4],
    fill_pos: [f32; 4],
    fill_color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    params: [f32; 4],
}

impl ObjectUniforms {
    fn mesh(model: Mat4, material: &BasicMaterial) -> Self {
        let [r, g, b] = material.color;
        Self {
            model: model.to_cols_array_2d(),
            color: [r, g, b, material.opacity],
            params: [0.0, BACKDROP_LIGHT_WEIGHT, 0.0, 0.0],
        }
    }

    fn sprites(model: Mat4, side: f32) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: [1.0, 1.0, 1.0, 1.0],
            params: [side, 0.0, 0.0, 0.0],
        }
    }
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,

    scene_buffer: wgpu::Buffer,
    scene_bg: wgpu::BindGroup,
    particles: ParticleResources,
    backdrop: BackdropResources,

    description: SceneDescription,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        description: SceneDescription,
        sprite: &GlowImage,
        initial_positions: &[Vec3],
        sample_count: u32,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
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
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, width, height, format, sample_count);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });
        let scene_bgl = helpers::uniform_layout(
            &device,
            "scene_bgl",
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        );
        let object_bgl = helpers::uniform_layout(
            &device,
            "object_bgl",
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        );
        let scene_buffer = helpers::uniform_buffer::<SceneUniforms>(&device, "scene_uniforms");
        let scene_bg = helpers::uniform_bind_group(&device, "scene_bg", &scene_bgl, &scene_buffer);

        let particles = create_particle_resources(
            &device,
            &queue,
            &ParticleSetup {
                shader: &shader,
                scene_bgl: &scene_bgl,
                object_bgl: &object_bgl,
                color_format: format,
                sample_count,
            },
            sprite,
            initial_positions,
        );
        let backdrop = create_backdrop_resources(
            &device,
            &shader,
            &scene_bgl,
            &object_bgl,
            format,
            sample_count,
        );
        log::info!(
            "[scene] gpu ready {}x{} format={:?} msaa={} particles={}",
            width,
            height,
            format,
            sample_count,
            initial_positions.len()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            scene_buffer,
            scene_bg,
            particles,
            backdrop,
            description,
            width,
            height,
            clear_color: wgpu::Color::BLACK,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
        }
    }

    /// Reconfigure after the surface reports itself lost or outdated.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(
        &mut self,
        camera: &CameraRig,
        rotations: &SceneRotations,
        positions: &[Vec3],
    ) -> Result<(), wgpu::SurfaceError> {
        self.write_scene_uniforms(camera);
        // Match point-sprite sizing with distance attenuation at this field of view.
        let sprite_side = self.description.particle_size * (camera.fovy_radians * 0.5).tan();
        self.particles.write_object(
            &self.queue,
            &ObjectUniforms::sprites(scene::field_model(rotations), sprite_side),
        );
        self.backdrop.ring.write_object(
            &self.queue,
            &ObjectUniforms::mesh(scene::ring_model(rotations), &self.description.ring),
        );
        self.backdrop.streak.write_object(
            &self.queue,
            &ObjectUniforms::mesh(scene::streak_model(rotations), &self.description.streak),
        );
        self.particles.upload(&self.queue, positions);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.msaa_view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.scene_bg, &[]);
            // Translucent backdrop first, then additive sprites on top.
            self.backdrop.draw(&mut rpass);
            self.particles.draw(&mut rpass);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl<'a> GpuState<'a> {
    fn write_scene_uniforms(&self, camera: &CameraRig) {
        let (right, up) = camera.billboard_axes();
        let d = &self.description;
        let [fr, fg, fb] = d.fog.color;
        let [kr, kg, kb] = d.key_light.color;
        let [pr, pg, pb] = d.fill_light.color;
        let key = d.key_light.direction;
        let fill = d.fill_light.position;
        let u = SceneUniforms {
            view_proj: camera.view_projection().to_cols_array_2d(),
            cam_pos: camera.eye.extend(1.0).to_array(),
            cam_right: right.extend(0.0).to_array(),
            cam_up: up.extend(0.0).to_array(),
            fog: [fr, fg, fb, d.fog.density],
            key_dir: [key.x, key.y, key.z, d.key_light.intensity],
            key_color: [kr, kg, kb, 1.0],
            fill_pos: [fill.x, fill.y, fill.z, d.fill_light.distance],
            fill_color: [pr, pg, pb, d.fill_light.intensity],
        };
        self.queue
            .write_buffer(&self.scene_buffer, 0, bytemuck::bytes_of(&u));
    }
}
