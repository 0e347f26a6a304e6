use globe_core::texture::TextureImage;
use globe_core::{GlobeScene, SceneMatrices, Viewport, ATMOSPHERE_COLOR};
use glam::Mat4;
use wgpu::util::DeviceExt;
use web_sys as web;

mod helpers;
mod targets;
mod texture;
use helpers::{GpuMesh, ObjectBinding, ObjectUniforms, PipelineOptions};
use targets::RenderTargets;
use texture::GlobeTexture;

use crate::constants::{CLEAR_COLOR, MSAA_SAMPLES};

// ===================== WebGPU state =====================

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,

    globe_pipeline: wgpu::RenderPipeline,
    atmosphere_pipeline: wgpu::RenderPipeline,
    marker_pipeline: wgpu::RenderPipeline,
    stars_pipeline: wgpu::RenderPipeline,

    sphere: GpuMesh,
    marker_mesh: GpuMesh,
    stars_vb: wgpu::Buffer,
    star_count: u32,

    globe_obj: ObjectBinding,
    atmosphere_obj: ObjectBinding,
    marker_obj: ObjectBinding,
    stars_obj: ObjectBinding,

    texture_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    globe_texture: GlobeTexture,

    accent: [f32; 4],
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, scene: &GlobeScene) -> anyhow::Result<Self> {
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
        log::info!("[gpu] surface {}x{} format={:?}", width, height, format);

        let targets = RenderTargets::new(&device, format, MSAA_SAMPLES, width, height);

        // Layouts shared by all pipelines
        let object_layout = helpers::object_bind_group_layout(&device);
        let texture_layout = texture::globe_texture_layout(&device);
        let pl_object = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_object"),
            bind_group_layouts: &[&object_layout],
            push_constant_ranges: &[],
        });
        let pl_globe = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_globe"),
            bind_group_layouts: &[&object_layout, &texture_layout],
            push_constant_ranges: &[],
        });

        let globe_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("globe_shader"),
            source: wgpu::ShaderSource::Wgsl(globe_core::GLOBE_WGSL.into()),
        });
        let atmosphere_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("atmosphere_shader"),
            source: wgpu::ShaderSource::Wgsl(globe_core::ATMOSPHERE_WGSL.into()),
        });
        let flat_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("flat_shader"),
            source: wgpu::ShaderSource::Wgsl(globe_core::FLAT_WGSL.into()),
        });

        let globe_pipeline = helpers::make_scene_pipeline(
            &device,
            &pl_globe,
            &globe_shader,
            helpers::mesh_vertex_layout(),
            format,
            PipelineOptions {
                label: "globe_pipeline",
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                blend: None,
                depth_write: true,
                sample_count: MSAA_SAMPLES,
            },
        );
        // Back faces only, blended on top without occluding anything
        let atmosphere_pipeline = helpers::make_scene_pipeline(
            &device,
            &pl_object,
            &atmosphere_shader,
            helpers::mesh_vertex_layout(),
            format,
            PipelineOptions {
                label: "atmosphere_pipeline",
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Front),
                blend: Some(helpers::ADDITIVE_BLEND),
                depth_write: false,
                sample_count: MSAA_SAMPLES,
            },
        );
        let marker_pipeline = helpers::make_scene_pipeline(
            &device,
            &pl_object,
            &flat_shader,
            helpers::mesh_vertex_layout(),
            format,
            PipelineOptions {
                label: "marker_pipeline",
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                blend: None,
                depth_write: true,
                sample_count: MSAA_SAMPLES,
            },
        );
        let stars_pipeline = helpers::make_scene_pipeline(
            &device,
            &pl_object,
            &flat_shader,
            helpers::point_vertex_layout(),
            format,
            PipelineOptions {
                label: "stars_pipeline",
                topology: wgpu::PrimitiveTopology::PointList,
                cull_mode: None,
                blend: None,
                depth_write: true,
                sample_count: MSAA_SAMPLES,
            },
        );

        let sphere = helpers::upload_mesh(&device, "sphere_mesh", &scene.sphere);
        let marker_mesh = helpers::upload_mesh(&device, "marker_mesh", &scene.marker_mesh);
        let stars_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("stars_vb"),
            contents: bytemuck::cast_slice(&scene.stars),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let globe_obj = helpers::create_object_binding(&device, &object_layout, "globe_uniforms");
        let atmosphere_obj =
            helpers::create_object_binding(&device, &object_layout, "atmosphere_uniforms");
        let marker_obj = helpers::create_object_binding(&device, &object_layout, "marker_uniforms");
        let stars_obj = helpers::create_object_binding(&device, &object_layout, "stars_uniforms");

        // Until the world map arrives the globe shows a flat fallback texel
        let sampler = texture::globe_sampler(&device);
        let globe_texture = GlobeTexture::upload(
            &device,
            &queue,
            &texture_layout,
            &sampler,
            &TextureImage::fallback(),
        );

        let [r, g, b] = scene.params.accent_color;
        let [cr, cg, cb, ca] = CLEAR_COLOR;

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            globe_pipeline,
            atmosphere_pipeline,
            marker_pipeline,
            stars_pipeline,
            sphere,
            marker_mesh,
            stars_vb,
            star_count: scene.stars.len() as u32,
            globe_obj,
            atmosphere_obj,
            marker_obj,
            stars_obj,
            texture_layout,
            sampler,
            globe_texture,
            accent: [r, g, b, 1.0],
            width,
            height,
            clear_color: wgpu::Color {
                r: cr,
                g: cg,
                b: cb,
                a: ca,
            },
        })
    }

    /// Swap the fallback texel for the decoded world map.
    pub fn set_globe_texture(&mut self, image: &TextureImage) {
        let max = self.device.limits().max_texture_dimension_2d;
        if image.width > max || image.height > max {
            log::warn!(
                "[texture] {}x{} exceeds device limit {}; keeping fallback",
                image.width,
                image.height,
                max
            );
            return;
        }
        self.globe_texture = GlobeTexture::upload(
            &self.device,
            &self.queue,
            &self.texture_layout,
            &self.sampler,
            image,
        );
        log::info!(
            "[texture] world map uploaded ({}x{}, {:?})",
            image.width,
            image.height,
            self.globe_texture.texture.format()
        );
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        self.targets.recreate(&self.device, self.width, self.height);
    }

    fn write_object(&self, binding: &ObjectBinding, view_proj: Mat4, view: Mat4, model: Mat4, color: [f32; 4]) {
        let u = ObjectUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            color,
        };
        self.queue
            .write_buffer(&binding.buffer, 0, bytemuck::bytes_of(&u));
    }

    pub fn render(&mut self, viewport: &Viewport, matrices: &SceneMatrices) -> Result<(), wgpu::SurfaceError> {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.reconfigure();
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let view_proj = viewport.view_projection();
        let cam_view = viewport.view_matrix();
        let [ar, ag, ab] = ATMOSPHERE_COLOR;
        self.write_object(&self.stars_obj, view_proj, cam_view, matrices.stars, self.accent);
        self.write_object(&self.globe_obj, view_proj, cam_view, matrices.globe, [1.0; 4]);
        self.write_object(&self.marker_obj, view_proj, cam_view, matrices.marker, self.accent);
        self.write_object(
            &self.atmosphere_obj,
            view_proj,
            cam_view,
            matrices.atmosphere,
            [ar, ag, ab, 1.0],
        );

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.color_view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Stars
            rpass.set_pipeline(&self.stars_pipeline);
            rpass.set_bind_group(0, &self.stars_obj.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.stars_vb.slice(..));
            rpass.draw(0..self.star_count, 0..1);

            // Globe
            rpass.set_pipeline(&self.globe_pipeline);
            rpass.set_bind_group(0, &self.globe_obj.bind_group, &[]);
            rpass.set_bind_group(1, &self.globe_texture.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.sphere.vertices.slice(..));
            rpass.set_index_buffer(self.sphere.indices.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.sphere.index_count, 0, 0..1);

            // Marker
            rpass.set_pipeline(&self.marker_pipeline);
            rpass.set_bind_group(0, &self.marker_obj.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.marker_mesh.vertices.slice(..));
            rpass.set_index_buffer(self.marker_mesh.indices.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.marker_mesh.index_count, 0, 0..1);

            // Atmosphere last so it blends over everything already drawn
            rpass.set_pipeline(&self.atmosphere_pipeline);
            rpass.set_bind_group(0, &self.atmosphere_obj.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.sphere.vertices.slice(..));
            rpass.set_index_buffer(self.sphere.indices.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.sphere.index_count, 0, 0..1);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
