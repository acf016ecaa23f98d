use std::cell::{Cell, RefCell};

use super::{
    BufferTarget, BufferUsage, GlApi, INVALID_INDEX, IndexedBufferTarget, PrimitiveMode,
    ShaderKind,
};

/// One recorded GL call. Objects are identified by the ids `RecordingGl` hands out.
#[derive(Debug, Clone, PartialEq)]
pub enum GlCall {
    CreateShader(ShaderKind, u32),
    ShaderSource(u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader { program: u32, shader: u32 },
    LinkProgram(u32),
    DeleteProgram(u32),
    UseProgram(Option<u32>),
    CreateBuffer(u32),
    BindBuffer(BufferTarget, Option<u32>),
    BufferData { target: BufferTarget, len: usize, usage: BufferUsage },
    DeleteBuffer(u32),
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    DeleteVertexArray(u32),
    EnableVertexAttribArray(u32),
    VertexAttribPointer { location: u32, components: i32, stride: i32, offset: i32 },
    Viewport { x: i32, y: i32, width: i32, height: i32 },
    ClearColor([f32; 4]),
    Clear,
    DrawArrays { mode: PrimitiveMode, first: i32, count: i32 },
    UniformBlockBinding { program: u32, index: u32, binding: u32 },
    BindBufferRange { target: IndexedBufferTarget, index: u32, buffer: u32, offset: i32, size: i32 },
}

/// In-memory [`GlApi`] that records calls instead of issuing them.
///
/// Failure modes are opt-in through the `with_*`/`failing_*` builders.
#[derive(Debug)]
pub struct RecordingGl {
    calls: RefCell<Vec<GlCall>>,
    next_id: Cell<u32>,
    fail_compile: Option<ShaderKind>,
    fail_link: bool,
    refuse_objects: bool,
    refuse_vertex_arrays: bool,
    uniform_blocks: Vec<String>,
    attributes: Vec<String>,
}

impl Default for RecordingGl {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingGl {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            fail_compile: None,
            fail_link: false,
            refuse_objects: false,
            refuse_vertex_arrays: false,
            uniform_blocks: Vec::new(),
            attributes: vec!["a_position".to_string()],
        }
    }

    /// Every linked program reports these uniform blocks, indexed in order.
    pub fn with_uniform_blocks(mut self, names: &[&str]) -> Self {
        self.uniform_blocks = names.iter().map(|n| n.to_string()).collect();
        self
    }

    /// Every linked program reports these active attributes, located in order.
    pub fn with_attributes(mut self, names: &[&str]) -> Self {
        self.attributes = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn failing_compile(mut self, kind: ShaderKind) -> Self {
        self.fail_compile = Some(kind);
        self
    }

    pub fn failing_link(mut self) -> Self {
        self.fail_link = true;
        self
    }

    /// Simulates a lost context: every `create_*` returns `None`.
    pub fn refusing_objects(mut self) -> Self {
        self.refuse_objects = true;
        self
    }

    /// Only `create_vertex_array` fails; other objects are still created.
    pub fn refusing_vertex_arrays(mut self) -> Self {
        self.refuse_vertex_arrays = true;
        self
    }

    pub fn calls(&self) -> Vec<GlCall> {
        self.calls.borrow().clone()
    }

    /// Drains the recorded calls.
    pub fn take_calls(&self) -> Vec<GlCall> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    pub fn count(&self, pred: impl Fn(&GlCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: GlCall) {
        self.calls.borrow_mut().push(call);
    }

    fn alloc(&self) -> Option<u32> {
        if self.refuse_objects {
            return None;
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        Some(id)
    }

    fn shader_kind(&self, shader: u32) -> Option<ShaderKind> {
        self.calls.borrow().iter().find_map(|c| match c {
            GlCall::CreateShader(kind, id) if *id == shader => Some(*kind),
            _ => None,
        })
    }
}

impl GlApi for RecordingGl {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type VertexArray = u32;

    fn create_shader(&self, kind: ShaderKind) -> Option<u32> {
        let id = self.alloc()?;
        self.record(GlCall::CreateShader(kind, id));
        Some(id)
    }

    fn shader_source(&self, shader: &u32, _source: &str) {
        self.record(GlCall::ShaderSource(*shader));
    }

    fn compile_shader(&self, shader: &u32) {
        self.record(GlCall::CompileShader(*shader));
    }

    fn shader_compile_status(&self, shader: &u32) -> bool {
        self.fail_compile.is_none() || self.shader_kind(*shader) != self.fail_compile
    }

    fn shader_info_log(&self, shader: &u32) -> Option<String> {
        match self.shader_kind(*shader) {
            Some(kind) if Some(kind) == self.fail_compile => {
                Some(format!("ERROR: 0:1: {kind} shader rejected"))
            }
            _ => None,
        }
    }

    fn delete_shader(&self, shader: &u32) {
        self.record(GlCall::DeleteShader(*shader));
    }

    fn create_program(&self) -> Option<u32> {
        let id = self.alloc()?;
        self.record(GlCall::CreateProgram(id));
        Some(id)
    }

    fn attach_shader(&self, program: &u32, shader: &u32) {
        self.record(GlCall::AttachShader { program: *program, shader: *shader });
    }

    fn link_program(&self, program: &u32) {
        self.record(GlCall::LinkProgram(*program));
    }

    fn program_link_status(&self, _program: &u32) -> bool {
        !self.fail_link
    }

    fn program_info_log(&self, _program: &u32) -> Option<String> {
        self.fail_link.then(|| "ERROR: varying mismatch".to_string())
    }

    fn delete_program(&self, program: &u32) {
        self.record(GlCall::DeleteProgram(*program));
    }

    fn use_program(&self, program: Option<&u32>) {
        self.record(GlCall::UseProgram(program.copied()));
    }

    fn attrib_location(&self, _program: &u32, name: &str) -> Option<u32> {
        self.attributes
            .iter()
            .position(|a| a == name)
            .map(|i| i as u32)
    }

    fn create_buffer(&self) -> Option<u32> {
        let id = self.alloc()?;
        self.record(GlCall::CreateBuffer(id));
        Some(id)
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: Option<&u32>) {
        self.record(GlCall::BindBuffer(target, buffer.copied()));
    }

    fn buffer_data(&self, target: BufferTarget, data: &[u8], usage: BufferUsage) {
        self.record(GlCall::BufferData { target, len: data.len(), usage });
    }

    fn delete_buffer(&self, buffer: &u32) {
        self.record(GlCall::DeleteBuffer(*buffer));
    }

    fn create_vertex_array(&self) -> Option<u32> {
        if self.refuse_vertex_arrays {
            return None;
        }
        let id = self.alloc()?;
        self.record(GlCall::CreateVertexArray(id));
        Some(id)
    }

    fn bind_vertex_array(&self, vertex_array: Option<&u32>) {
        self.record(GlCall::BindVertexArray(vertex_array.copied()));
    }

    fn delete_vertex_array(&self, vertex_array: &u32) {
        self.record(GlCall::DeleteVertexArray(*vertex_array));
    }

    fn enable_vertex_attrib_array(&self, location: u32) {
        self.record(GlCall::EnableVertexAttribArray(location));
    }

    fn vertex_attrib_pointer_f32(
        &self,
        location: u32,
        components: i32,
        _normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        self.record(GlCall::VertexAttribPointer { location, components, stride, offset });
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(GlCall::Viewport { x, y, width, height });
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.record(GlCall::ClearColor([r, g, b, a]));
    }

    fn clear_color_buffer(&self) {
        self.record(GlCall::Clear);
    }

    fn draw_arrays(&self, mode: PrimitiveMode, first: i32, count: i32) {
        self.record(GlCall::DrawArrays { mode, first, count });
    }

    fn uniform_block_index(&self, _program: &u32, name: &str) -> u32 {
        self.uniform_blocks
            .iter()
            .position(|b| b == name)
            .map_or(INVALID_INDEX, |i| i as u32)
    }

    fn active_uniform_blocks(&self, _program: &u32) -> u32 {
        self.uniform_blocks.len() as u32
    }

    fn uniform_block_binding(&self, program: &u32, index: u32, binding: u32) {
        self.record(GlCall::UniformBlockBinding { program: *program, index, binding });
    }

    fn bind_buffer_range(
        &self,
        target: IndexedBufferTarget,
        index: u32,
        buffer: &u32,
        offset: i32,
        size: i32,
    ) {
        self.record(GlCall::BindBufferRange { target, index, buffer: *buffer, offset, size });
    }
}
