use web_sys::{
    WebGl2RenderingContext as Gl, WebGlBuffer, WebGlProgram, WebGlShader, WebGlVertexArrayObject,
};

use super::{BufferTarget, BufferUsage, GlApi, IndexedBufferTarget, PrimitiveMode, ShaderKind};

impl GlApi for Gl {
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;
    type VertexArray = WebGlVertexArrayObject;

    fn create_shader(&self, kind: ShaderKind) -> Option<WebGlShader> {
        Gl::create_shader(self, kind.gl_enum())
    }

    fn shader_source(&self, shader: &WebGlShader, source: &str) {
        Gl::shader_source(self, shader, source);
    }

    fn compile_shader(&self, shader: &WebGlShader) {
        Gl::compile_shader(self, shader);
    }

    fn shader_compile_status(&self, shader: &WebGlShader) -> bool {
        self.get_shader_parameter(shader, Gl::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &WebGlShader) -> Option<String> {
        self.get_shader_info_log(shader)
    }

    fn delete_shader(&self, shader: &WebGlShader) {
        Gl::delete_shader(self, Some(shader));
    }

    fn create_program(&self) -> Option<WebGlProgram> {
        Gl::create_program(self)
    }

    fn attach_shader(&self, program: &WebGlProgram, shader: &WebGlShader) {
        Gl::attach_shader(self, program, shader);
    }

    fn link_program(&self, program: &WebGlProgram) {
        Gl::link_program(self, program);
    }

    fn program_link_status(&self, program: &WebGlProgram) -> bool {
        self.get_program_parameter(program, Gl::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn program_info_log(&self, program: &WebGlProgram) -> Option<String> {
        self.get_program_info_log(program)
    }

    fn delete_program(&self, program: &WebGlProgram) {
        Gl::delete_program(self, Some(program));
    }

    fn use_program(&self, program: Option<&WebGlProgram>) {
        Gl::use_program(self, program);
    }

    fn attrib_location(&self, program: &WebGlProgram, name: &str) -> Option<u32> {
        u32::try_from(self.get_attrib_location(program, name)).ok()
    }

    fn create_buffer(&self) -> Option<WebGlBuffer> {
        Gl::create_buffer(self)
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: Option<&WebGlBuffer>) {
        Gl::bind_buffer(self, target.gl_enum(), buffer);
    }

    fn buffer_data(&self, target: BufferTarget, data: &[u8], usage: BufferUsage) {
        self.buffer_data_with_u8_array(target.gl_enum(), data, usage.gl_enum());
    }

    fn delete_buffer(&self, buffer: &WebGlBuffer) {
        Gl::delete_buffer(self, Some(buffer));
    }

    fn create_vertex_array(&self) -> Option<WebGlVertexArrayObject> {
        Gl::create_vertex_array(self)
    }

    fn bind_vertex_array(&self, vertex_array: Option<&WebGlVertexArrayObject>) {
        Gl::bind_vertex_array(self, vertex_array);
    }

    fn delete_vertex_array(&self, vertex_array: &WebGlVertexArrayObject) {
        Gl::delete_vertex_array(self, Some(vertex_array));
    }

    fn enable_vertex_attrib_array(&self, location: u32) {
        Gl::enable_vertex_attrib_array(self, location);
    }

    fn vertex_attrib_pointer_f32(
        &self,
        location: u32,
        components: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        self.vertex_attrib_pointer_with_i32(location, components, Gl::FLOAT, normalized, stride, offset);
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        Gl::viewport(self, x, y, width, height);
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        Gl::clear_color(self, r, g, b, a);
    }

    fn clear_color_buffer(&self) {
        self.clear(Gl::COLOR_BUFFER_BIT);
    }

    fn draw_arrays(&self, mode: PrimitiveMode, first: i32, count: i32) {
        Gl::draw_arrays(self, mode.gl_enum(), first, count);
    }

    fn uniform_block_index(&self, program: &WebGlProgram, name: &str) -> u32 {
        self.get_uniform_block_index(program, name)
    }

    fn active_uniform_blocks(&self, program: &WebGlProgram) -> u32 {
        self.get_program_parameter(program, Gl::ACTIVE_UNIFORM_BLOCKS)
            .as_f64()
            .map_or(0, |n| n as u32)
    }

    fn uniform_block_binding(&self, program: &WebGlProgram, index: u32, binding: u32) {
        Gl::uniform_block_binding(self, program, index, binding);
    }

    fn bind_buffer_range(
        &self,
        target: IndexedBufferTarget,
        index: u32,
        buffer: &WebGlBuffer,
        offset: i32,
        size: i32,
    ) {
        self.bind_buffer_range_with_i32_and_i32(target.gl_enum(), index, Some(buffer), offset, size);
    }
}
