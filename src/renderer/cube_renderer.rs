//! Draws the 26 atoms.
//!
//! One vertex buffer holds 24 vertices per atom (four per face, each face
//! flat-colored), one index buffer holds 36 indices per atom, and one
//! uniform buffer holds a [`CameraUniform`] per atom at a 256-byte aligned
//! stride. Each atom is drawn with its own dynamic offset into that buffer.

use std::num::NonZeroU64;

use crate::camera::CameraUniform;
use crate::cube::{AtomCube, Face, RubikCube, QUAD_INDICES};
use crate::error::RubikError;
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::{ShaderComposer, ShaderSources};
use crate::renderer::pipeline_util;

/// Vertices emitted per atom.
pub const VERTICES_PER_ATOM: usize = 4 * Face::ALL.len();
/// Indices emitted per atom.
pub const INDICES_PER_ATOM: usize = QUAD_INDICES.len() * Face::ALL.len();

/// A colored mesh vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CubeVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Linear RGB face color.
    pub color: [f32; 3],
}

impl CubeVertex {
    /// Vertex buffer layout matching `rubik_vertex.wgsl`.
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 2] = [
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
        ];
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}

/// Four vertices per face, in [`Face::ALL`] order.
#[must_use]
pub fn atom_vertices(atom: &AtomCube) -> [CubeVertex; VERTICES_PER_ATOM] {
    let mut vertices = [CubeVertex {
        position: [0.0; 3],
        color: [0.0; 3],
    }; VERTICES_PER_ATOM];
    for (face_slot, face) in Face::ALL.into_iter().enumerate() {
        let color = atom.color(face).to_array();
        let corners = atom.face_quad(face);
        for (corner_slot, corner) in corners.into_iter().enumerate() {
            vertices[face_slot * 4 + corner_slot] = CubeVertex {
                position: corner.to_array(),
                color,
            };
        }
    }
    vertices
}

/// Index list for `atom_count` atoms laid out back to back.
#[must_use]
pub fn mesh_indices(atom_count: usize) -> Vec<u32> {
    let quads = atom_count * Face::ALL.len();
    (0..quads)
        .flat_map(|quad| {
            let base = (quad * 4) as u32;
            QUAD_INDICES.map(|i| base + i)
        })
        .collect()
}

/// Byte stride between per-atom uniform slots.
#[must_use]
pub fn uniform_stride(min_alignment: u32) -> u64 {
    let size = size_of::<CameraUniform>() as u64;
    let align = u64::from(min_alignment.max(1));
    size.div_ceil(align) * align
}

/// The cube pipeline and its buffers.
pub struct CubeRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    atom_count: usize,
    stride: u64,
    vertices: Vec<CubeVertex>,
    uniforms: Vec<u8>,
}

impl CubeRenderer {
    /// Compose the shaders and allocate buffers for `atom_count` atoms.
    ///
    /// # Errors
    ///
    /// Returns [`RubikError::Shader`] if either stage fails to compose.
    pub fn new(
        context: &RenderContext,
        composer: &mut ShaderComposer,
        sources: &ShaderSources,
        atom_count: usize,
    ) -> Result<Self, RubikError> {
        let device = &context.device;
        let vertex_shader = composer.compose(
            device,
            "Rubik Vertex Shader",
            &sources.vertex,
            ShaderSources::VERTEX_FILE,
        )?;
        let fragment_shader = composer.compose(
            device,
            "Rubik Fragment Shader",
            &sources.fragment,
            ShaderSources::FRAGMENT_FILE,
        )?;

        let stride =
            uniform_stride(device.limits().min_uniform_buffer_offset_alignment);
        let uniform_size = NonZeroU64::new(size_of::<CameraUniform>() as u64);

        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Atom Camera Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: true,
                        min_binding_size: uniform_size,
                    },
                    count: None,
                }],
            });

        let pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Rubik Pipeline Layout"),
                bind_group_layouts: &[&bind_group_layout],
                push_constant_ranges: &[],
            });

        let pipeline =
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Rubik Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &vertex_shader,
                    entry_point: Some("vs_main"),
                    buffers: &[CubeVertex::layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &fragment_shader,
                    entry_point: Some("fs_main"),
                    targets: &pipeline_util::color_targets(context.format()),
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    cull_mode: None,
                    ..Default::default()
                },
                depth_stencil: Some(pipeline_util::depth_stencil_state()),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            });

        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Atom Vertices"),
            size: (atom_count * VERTICES_PER_ATOM * size_of::<CubeVertex>())
                as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let indices = mesh_indices(atom_count);
        let index_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Atom Indices"),
            size: (indices.len() * size_of::<u32>()) as u64,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        context
            .queue
            .write_buffer(&index_buffer, 0, bytemuck::cast_slice(&indices));

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Atom Cameras"),
            size: stride * atom_count.max(1) as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Atom Camera Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &uniform_buffer,
                    offset: 0,
                    size: uniform_size,
                }),
            }],
        });

        log::debug!(
            "cube renderer ready: {atom_count} atoms, uniform stride {stride}"
        );

        Ok(Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            uniform_buffer,
            bind_group,
            atom_count,
            stride,
            vertices: Vec::with_capacity(atom_count * VERTICES_PER_ATOM),
            uniforms: vec![0; (stride as usize) * atom_count],
        })
    }

    /// Upload the current atom geometry and cameras.
    pub fn prepare(&mut self, queue: &wgpu::Queue, cube: &RubikCube) {
        self.vertices.clear();
        let stride = self.stride as usize;
        let atoms = cube.atoms().iter().take(self.atom_count);
        for (index, atom) in atoms.enumerate() {
            self.vertices.extend_from_slice(&atom_vertices(atom));
            let uniform = atom.camera().to_uniform();
            let slot = index * stride;
            self.uniforms[slot..slot + size_of::<CameraUniform>()]
                .copy_from_slice(bytemuck::bytes_of(&uniform));
        }
        queue.write_buffer(
            &self.vertex_buffer,
            0,
            bytemuck::cast_slice(&self.vertices),
        );
        queue.write_buffer(&self.uniform_buffer, 0, &self.uniforms);
    }

    /// Record one draw per atom.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(
            self.index_buffer.slice(..),
            wgpu::IndexFormat::Uint32,
        );
        let per_atom = INDICES_PER_ATOM as u32;
        for index in 0..self.atom_count as u32 {
            let offset = (u64::from(index) * self.stride) as u32;
            render_pass.set_bind_group(0, &self.bind_group, &[offset]);
            render_pass.draw_indexed(
                index * per_atom..(index + 1) * per_atom,
                0,
                0..1,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn vertex_is_six_floats() {
        assert_eq!(size_of::<CubeVertex>(), 24);
        assert_eq!(CubeVertex::layout().array_stride, 24);
    }

    #[test]
    fn faces_carry_their_colors() {
        let mut atom = AtomCube::new(Vec3::ZERO, Vec3::ONE);
        let colors = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
        ];
        atom.set_colors(colors);
        let vertices = atom_vertices(&atom);
        for (slot, color) in colors.iter().enumerate() {
            for v in &vertices[slot * 4..slot * 4 + 4] {
                assert_eq!(v.color, color.to_array());
            }
        }
        // Top face vertices all sit at y = +0.5.
        let top = Face::Top.index();
        assert!(vertices[top * 4..top * 4 + 4]
            .iter()
            .all(|v| v.position[1] == 0.5));
    }

    #[test]
    fn indices_stay_inside_each_atom() {
        let indices = mesh_indices(26);
        assert_eq!(indices.len(), 26 * INDICES_PER_ATOM);
        for (atom, chunk) in indices.chunks(INDICES_PER_ATOM).enumerate() {
            let first = (atom * VERTICES_PER_ATOM) as u32;
            let last = first + VERTICES_PER_ATOM as u32;
            assert!(chunk.iter().all(|i| (first..last).contains(i)));
        }
        assert_eq!(&indices[..6], &[0, 1, 2, 2, 3, 0]);
        assert_eq!(&indices[6..12], &[4, 5, 6, 6, 7, 4]);
    }

    #[test]
    fn uniform_slots_are_aligned() {
        assert_eq!(uniform_stride(256), 256);
        assert_eq!(uniform_stride(64), 192);
        assert_eq!(uniform_stride(0), 192);
    }
}
