use crate::camera;
use crate::constants::{CLEAR_RGB, SCAN_WIDTH};
use fnv::FnvHashMap;
use glam::{Vec3, Vec4};
use story_core::{ElementId, RenderSink, Transform, Uniform, UniformValue};
use web_sys as web;

mod helpers;
mod points;

use points::{create_points_resources, style_for, ElementStyle, ElementUniforms, PointsResources, SceneUniforms};

/// GPU copy of one scene element's point set.
struct ElementBuffers {
    instances: wgpu::Buffer,
    capacity: usize,
    count: u32,
    uniform: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    style: ElementStyle,
    transform: Transform,
    visible: bool,
    dirty: bool,
}

/// Latest values pushed by the engine.
struct SceneState {
    time: f32,
    color: Vec3,
    form_factor: f32,
    scroll_progress: f32,
    fog_density: f32,
    fog_color: Vec3,
    scan_height: f32,
    camera_position: Vec3,
    camera_rotation: Vec3,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    points: PointsResources,
    elements: FnvHashMap<ElementId, ElementBuffers>,
    scene: SceneState,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
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

        let points = create_points_resources(&device, format);
        log::info!("[gpu] surface {}x{} {:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            points,
            elements: FnvHashMap::default(),
            scene: SceneState {
                time: 0.0,
                color: Vec3::ONE,
                form_factor: 0.0,
                scroll_progress: 0.0,
                fog_density: 0.0,
                fog_color: Vec3::ZERO,
                scan_height: -5.0,
                camera_position: Vec3::from_array(story_core::constants::CAMERA_START),
                camera_rotation: Vec3::ZERO,
            },
            width,
            height,
            clear_color: wgpu::Color {
                r: helpers::srgb_to_linear(CLEAR_RGB[0]),
                g: helpers::srgb_to_linear(CLEAR_RGB[1]),
                b: helpers::srgb_to_linear(CLEAR_RGB[2]),
                a: 1.0,
            },
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
        }
    }

    /// Reconfigure after the surface was lost or went stale.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    fn element(&mut self, id: ElementId) -> &mut ElementBuffers {
        let device = &self.device;
        let layout = &self.points.element_layout;
        self.elements.entry(id).or_insert_with(|| {
            let uniform = helpers::create_uniform_buffer::<ElementUniforms>(device, "points_element");
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("points_element_bg"),
                layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform.as_entire_binding(),
                }],
            });
            ElementBuffers {
                instances: helpers::create_instance_buffer(device, "points_instances", 1),
                capacity: 1,
                count: 0,
                uniform,
                bind_group,
                style: style_for(id),
                transform: Transform::default(),
                visible: false,
                dirty: true,
            }
        })
    }

    fn scene_uniforms(&self) -> SceneUniforms {
        let s = &self.scene;
        let aspect = self.width as f32 / self.height.max(1) as f32;
        SceneUniforms {
            view: camera::view_matrix(s.camera_position, s.camera_rotation).to_cols_array_2d(),
            proj: camera::projection(aspect).to_cols_array_2d(),
            color_time: s.color.extend(s.time).to_array(),
            fog: s.fog_color.extend(s.fog_density).to_array(),
            wave: [s.form_factor, s.scroll_progress, s.scan_height, SCAN_WIDTH],
        }
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let scene = self.scene_uniforms();
        self.queue
            .write_buffer(&self.points.scene_buffer, 0, bytemuck::bytes_of(&scene));
        for el in self.elements.values_mut().filter(|e| e.visible && e.dirty) {
            let t = el.transform;
            let u = ElementUniforms {
                model: camera::model_matrix(t.position, t.rotation).to_cols_array_2d(),
                tint: el.style.tint,
                style: [el.style.kind, el.style.size, 0.0, 0.0],
            };
            self.queue.write_buffer(&el.uniform, 0, bytemuck::bytes_of(&u));
            el.dirty = false;
        }

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
                label: Some("points_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.points.pipeline);
            rpass.set_bind_group(0, &self.points.scene_bind_group, &[]);
            for el in self.elements.values().filter(|e| e.visible && e.count > 0) {
                rpass.set_bind_group(1, &el.bind_group, &[]);
                rpass.set_vertex_buffer(0, el.instances.slice(..));
                rpass.draw(0..6, 0..el.count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl RenderSink for GpuState<'_> {
    fn set_uniform(&mut self, uniform: Uniform, value: UniformValue) {
        let s = &mut self.scene;
        match (uniform, value) {
            (Uniform::Time, UniformValue::Float(v)) => s.time = v,
            (Uniform::FormFactor, UniformValue::Float(v)) => s.form_factor = v,
            (Uniform::ScrollProgress, UniformValue::Float(v)) => s.scroll_progress = v,
            (Uniform::FogDensity, UniformValue::Float(v)) => s.fog_density = v,
            (Uniform::ScanHeight, UniformValue::Float(v)) => s.scan_height = v,
            (Uniform::Color, UniformValue::Vec3(v)) => s.color = v,
            (Uniform::FogColor, UniformValue::Vec3(v)) => s.fog_color = v,
            (u, v) => log::warn!("[gpu] {} does not take {:?}", u.name(), v),
        }
    }

    fn set_visible(&mut self, element: ElementId, visible: bool) {
        let el = self.element(element);
        el.visible = visible;
        el.dirty = true;
    }

    fn set_camera_pose(&mut self, position: Vec3, rotation: Vec3) {
        self.scene.camera_position = position;
        self.scene.camera_rotation = rotation;
    }

    fn set_transform(&mut self, element: ElementId, transform: Transform) {
        let el = self.element(element);
        el.transform = transform;
        el.dirty = true;
    }

    fn upload_points(&mut self, element: ElementId, points: &[Vec4]) {
        self.element(element);
        let Some(el) = self.elements.get_mut(&element) else {
            return;
        };
        if points.len() > el.capacity {
            el.instances =
                helpers::create_instance_buffer(&self.device, "points_instances", points.len());
            el.capacity = points.len();
        }
        el.count = points.len() as u32;
        if !points.is_empty() {
            self.queue
                .write_buffer(&el.instances, 0, bytemuck::cast_slice(points));
        }
    }

    fn set_viewport(&mut self, width: f32, height: f32) {
        log::debug!("[gpu] viewport {}x{}", width, height);
    }
}
