use super::helpers::{self, DEPTH_FORMAT};

/// Multisampled color and depth attachments sized to the surface.
///
/// The color target resolves into the swapchain image each frame, so it is
/// never stored.
pub(crate) struct RenderTargets {
    pub(crate) color_view: wgpu::TextureView,
    pub(crate) depth_view: wgpu::TextureView,
    color_format: wgpu::TextureFormat,
    sample_count: u32,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        sample_count: u32,
        width: u32,
        height: u32,
    ) -> Self {
        let (_, color_view) = helpers::create_render_texture(
            device,
            "msaa_color",
            width,
            height,
            color_format,
            sample_count,
        );
        let (_, depth_view) =
            helpers::create_render_texture(device, "depth", width, height, DEPTH_FORMAT, sample_count);
        Self {
            color_view,
            depth_view,
            color_format,
            sample_count,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, self.color_format, self.sample_count, width, height);
    }
}
