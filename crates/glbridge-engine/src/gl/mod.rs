//! GL API seam.
//!
//! Everything above this module talks to the graphics API through [`GlApi`].
//! On wasm32 it is implemented directly for `web_sys::WebGl2RenderingContext`;
//! tests use [`RecordingGl`], which records each call instead of issuing it.
//!
//! Enum values mirror the WebGL2 constants so raw host arguments can be mapped
//! without pulling in `web-sys`.

use std::fmt;

#[cfg(any(test, feature = "testing"))]
mod recording;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(any(test, feature = "testing"))]
pub use recording::{GlCall, RecordingGl};

/// Returned by `getUniformBlockIndex` when the block does not exist.
pub const INVALID_INDEX: u32 = 0xFFFF_FFFF;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderKind {
    Vertex,
    Fragment,
}

impl ShaderKind {
    pub const fn gl_enum(self) -> u32 {
        match self {
            ShaderKind::Vertex => 0x8B31,
            ShaderKind::Fragment => 0x8B30,
        }
    }
}

impl fmt::Display for ShaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderKind::Vertex => f.write_str("vertex"),
            ShaderKind::Fragment => f.write_str("fragment"),
        }
    }
}

/// Non-indexed buffer binding points.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BufferTarget {
    Array,
    ElementArray,
    Uniform,
}

impl BufferTarget {
    pub const fn gl_enum(self) -> u32 {
        match self {
            BufferTarget::Array => 0x8892,
            BufferTarget::ElementArray => 0x8893,
            BufferTarget::Uniform => 0x8A11,
        }
    }
}

/// Binding points accepted by `bindBufferRange`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum IndexedBufferTarget {
    Uniform,
    TransformFeedback,
}

impl IndexedBufferTarget {
    pub const fn gl_enum(self) -> u32 {
        match self {
            IndexedBufferTarget::Uniform => 0x8A11,
            IndexedBufferTarget::TransformFeedback => 0x8C8E,
        }
    }

    /// Maps a raw GL enum coming from host code.
    pub fn from_gl_enum(value: u32) -> Option<Self> {
        match value {
            0x8A11 => Some(IndexedBufferTarget::Uniform),
            0x8C8E => Some(IndexedBufferTarget::TransformFeedback),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BufferUsage {
    StaticDraw,
    DynamicDraw,
    StreamDraw,
}

impl BufferUsage {
    pub const fn gl_enum(self) -> u32 {
        match self {
            BufferUsage::StaticDraw => 0x88E4,
            BufferUsage::DynamicDraw => 0x88E8,
            BufferUsage::StreamDraw => 0x88E0,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PrimitiveMode {
    Points,
    Lines,
    Triangles,
    TriangleStrip,
}

impl PrimitiveMode {
    pub const fn gl_enum(self) -> u32 {
        match self {
            PrimitiveMode::Points => 0x0000,
            PrimitiveMode::Lines => 0x0001,
            PrimitiveMode::Triangles => 0x0004,
            PrimitiveMode::TriangleStrip => 0x0005,
        }
    }
}

/// The subset of WebGL2 the bridge and the demo renderer issue.
///
/// Object creation returns `None` when the implementation refuses to allocate,
/// which on the web happens after a context loss.
pub trait GlApi {
    type Shader;
    type Program;
    type Buffer;
    type VertexArray;

    fn create_shader(&self, kind: ShaderKind) -> Option<Self::Shader>;
    fn shader_source(&self, shader: &Self::Shader, source: &str);
    fn compile_shader(&self, shader: &Self::Shader);
    fn shader_compile_status(&self, shader: &Self::Shader) -> bool;
    fn shader_info_log(&self, shader: &Self::Shader) -> Option<String>;
    fn delete_shader(&self, shader: &Self::Shader);

    fn create_program(&self) -> Option<Self::Program>;
    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader);
    fn link_program(&self, program: &Self::Program);
    fn program_link_status(&self, program: &Self::Program) -> bool;
    fn program_info_log(&self, program: &Self::Program) -> Option<String>;
    fn delete_program(&self, program: &Self::Program);
    fn use_program(&self, program: Option<&Self::Program>);
    /// `None` when the attribute is inactive or unknown.
    fn attrib_location(&self, program: &Self::Program, name: &str) -> Option<u32>;

    fn create_buffer(&self) -> Option<Self::Buffer>;
    fn bind_buffer(&self, target: BufferTarget, buffer: Option<&Self::Buffer>);
    fn buffer_data(&self, target: BufferTarget, data: &[u8], usage: BufferUsage);
    fn delete_buffer(&self, buffer: &Self::Buffer);

    fn create_vertex_array(&self) -> Option<Self::VertexArray>;
    fn bind_vertex_array(&self, vertex_array: Option<&Self::VertexArray>);
    fn delete_vertex_array(&self, vertex_array: &Self::VertexArray);
    fn enable_vertex_attrib_array(&self, location: u32);
    fn vertex_attrib_pointer_f32(
        &self,
        location: u32,
        components: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
    );

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32);
    fn clear_color_buffer(&self);
    fn draw_arrays(&self, mode: PrimitiveMode, first: i32, count: i32);

    /// Raw `getUniformBlockIndex`; [`INVALID_INDEX`] when not found.
    fn uniform_block_index(&self, program: &Self::Program, name: &str) -> u32;
    /// `ACTIVE_UNIFORM_BLOCKS` for a linked program.
    fn active_uniform_blocks(&self, program: &Self::Program) -> u32;
    fn uniform_block_binding(&self, program: &Self::Program, index: u32, binding: u32);
    fn bind_buffer_range(
        &self,
        target: IndexedBufferTarget,
        index: u32,
        buffer: &Self::Buffer,
        offset: i32,
        size: i32,
    );
}
