use crate::constants::*;
use story_core::ElementId;
use wgpu;

static POINTS_WGSL: &str = include_str!("../../shaders/points.wgsl");

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    pub(crate) view: [[f32; 4]; 4],
    pub(crate) proj: [[f32; 4]; 4],
    pub(crate) color_time: [f32; 4],
    pub(crate) fog: [f32; 4],
    pub(crate) wave: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ElementUniforms {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) tint: [f32; 4],
    pub(crate) style: [f32; 4],
}

/// How an element's points are drawn.
#[derive(Copy, Clone, Debug)]
pub(crate) struct ElementStyle {
    pub(crate) kind: f32,
    pub(crate) size: f32,
    pub(crate) tint: [f32; 4],
}

pub(crate) fn style_for(id: ElementId) -> ElementStyle {
    let (kind, size, tint) = match id {
        ElementId::ParticleField => (KIND_FIELD, SIZE_FIELD, [1.0, 1.0, 1.0, 0.8]),
        ElementId::Forest => (KIND_SCAN, SIZE_OUTLINE, TINT_FOREST),
        ElementId::Sparks => (KIND_SPRITE, SIZE_SPARK, TINT_SPARK),
        ElementId::Rain => (KIND_SPRITE, SIZE_RAIN, TINT_RAIN),
        ElementId::Fireflies => (KIND_SPRITE, SIZE_FIREFLY, TINT_FIREFLY),
        ElementId::Cocar => (KIND_SPRITE, SIZE_OUTLINE, TINT_COCAR),
        ElementId::Pottery => (KIND_SPRITE, SIZE_OUTLINE, TINT_POTTERY),
        ElementId::Constellation => (KIND_SPRITE, SIZE_STAR, TINT_STAR),
    };
    ElementStyle { kind, size, tint }
}

pub(crate) struct PointsResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) scene_buffer: wgpu::Buffer,
    pub(crate) scene_bind_group: wgpu::BindGroup,
    pub(crate) element_layout: wgpu::BindGroupLayout,
}

fn uniform_layout(device: &wgpu::Device, label: &str) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    })
}

/// Source-alpha additive blending: overlapping sprites brighten.
const ADDITIVE: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent::OVER,
};

pub(crate) fn create_points_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> PointsResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("points_shader"),
        source: wgpu::ShaderSource::Wgsl(POINTS_WGSL.into()),
    });
    let scene_layout = uniform_layout(device, "points_scene_bgl");
    let element_layout = uniform_layout(device, "points_element_bgl");
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("points_pl"),
        bind_group_layouts: &[&scene_layout, &element_layout],
        push_constant_ranges: &[],
    });
    let instance_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 4]>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &[wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x4,
            offset: 0,
            shader_location: 0,
        }],
    };
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("points_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_points"),
            buffers: &[instance_layout],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_points"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(ADDITIVE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });
    let scene_buffer = super::helpers::create_uniform_buffer::<SceneUniforms>(device, "points_scene");
    let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("points_scene_bg"),
        layout: &scene_layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: scene_buffer.as_entire_binding(),
        }],
    });

    PointsResources {
        pipeline,
        scene_buffer,
        scene_bind_group,
        element_layout,
    }
}
