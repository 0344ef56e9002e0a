use super::helpers;

/// Multisampled color target resolved into the swapchain each frame.
///
/// Recreated whenever the surface size changes.
pub(crate) struct RenderTargets {
    _msaa_tex: wgpu::Texture,
    pub(crate) msaa_view: wgpu::TextureView,
    format: wgpu::TextureFormat,
    sample_count: u32,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        let (msaa_tex, msaa_view) = Self::create(device, width, height, format, sample_count);
        Self {
            _msaa_tex: msaa_tex,
            msaa_view,
            format,
            sample_count,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        (self._msaa_tex, self.msaa_view) =
            Self::create(device, width, height, self.format, self.sample_count);
    }

    fn create(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> (wgpu::Texture, wgpu::TextureView) {
        helpers::create_color_texture(
            device,
            "msaa_color",
            width.max(1),
            height.max(1),
            format,
            sample_count,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        )
    }
}
