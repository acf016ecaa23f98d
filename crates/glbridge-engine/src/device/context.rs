use crate::error::{BridgeError, Result, ShaderError, ShaderStage};
use crate::gl::{BufferTarget, BufferUsage, GlApi, ShaderKind};
use crate::handle::{
    BufferHandle, HandleTable, ProgramHandle, ShaderHandle, VertexArrayHandle, to_host_id,
};

/// Owns the GL API object and the handle tables resolved against it.
///
/// This is the explicit replacement for a process-wide context: the host keeps
/// one `GlContext` for the lifetime of its canvas and passes it to every bridge
/// operation. Objects still registered when the context is dropped are
/// released.
pub struct GlContext<G: GlApi> {
    gl: G,
    pub(crate) programs: HandleTable<ProgramHandle, G::Program>,
    pub(crate) shaders: HandleTable<ShaderHandle, G::Shader>,
    pub(crate) buffers: HandleTable<BufferHandle, G::Buffer>,
    pub(crate) vertex_arrays: HandleTable<VertexArrayHandle, G::VertexArray>,
}

impl<G: GlApi> GlContext<G> {
    pub fn new(gl: G) -> Self {
        Self {
            gl,
            programs: HandleTable::new(),
            shaders: HandleTable::new(),
            buffers: HandleTable::new(),
            vertex_arrays: HandleTable::new(),
        }
    }

    /// Returns the underlying API object for calls that take no handles.
    #[inline]
    pub fn gl(&self) -> &G {
        &self.gl
    }

    #[inline]
    pub fn programs(&self) -> &HandleTable<ProgramHandle, G::Program> {
        &self.programs
    }

    #[inline]
    pub fn shaders(&self) -> &HandleTable<ShaderHandle, G::Shader> {
        &self.shaders
    }

    #[inline]
    pub fn buffers(&self) -> &HandleTable<BufferHandle, G::Buffer> {
        &self.buffers
    }

    #[inline]
    pub fn vertex_arrays(&self) -> &HandleTable<VertexArrayHandle, G::VertexArray> {
        &self.vertex_arrays
    }

    // ── shaders & programs ────────────────────────────────────────────────

    /// Compiles one shader and registers it.
    ///
    /// On failure the shader object is deleted and the info log is returned.
    pub fn create_shader(&mut self, kind: ShaderKind, source: &str) -> Result<ShaderHandle> {
        let shader = self
            .gl
            .create_shader(kind)
            .ok_or(BridgeError::ObjectCreation("shader"))?;

        self.gl.shader_source(&shader, source);
        self.gl.compile_shader(&shader);

        if !self.gl.shader_compile_status(&shader) {
            let err = ShaderError::new(ShaderStage::Compile(kind), self.gl.shader_info_log(&shader));
            log::error!("{err}");
            self.gl.delete_shader(&shader);
            return Err(err.into());
        }

        Ok(self.shaders.insert(shader))
    }

    pub fn delete_shader(&mut self, handle: ShaderHandle) -> bool {
        match self.shaders.remove(handle) {
            Some(shader) => {
                self.gl.delete_shader(&shader);
                true
            }
            None => false,
        }
    }

    /// Links a program from two registered shaders.
    ///
    /// On failure the program object is deleted; the shaders stay registered.
    pub fn link_program(
        &mut self,
        vertex: ShaderHandle,
        fragment: ShaderHandle,
    ) -> Result<ProgramHandle> {
        let vs = self.shaders.resolve(vertex)?;
        let fs = self.shaders.resolve(fragment)?;

        let program = self
            .gl
            .create_program()
            .ok_or(BridgeError::ObjectCreation("program"))?;

        self.gl.attach_shader(&program, vs);
        self.gl.attach_shader(&program, fs);
        self.gl.link_program(&program);

        if !self.gl.program_link_status(&program) {
            let err = ShaderError::new(ShaderStage::Link, self.gl.program_info_log(&program));
            log::error!("{err}");
            self.gl.delete_program(&program);
            return Err(err.into());
        }

        let handle = self.programs.insert(program);
        log::debug!("linked program {}", to_host_id(handle));
        Ok(handle)
    }

    /// Compiles both stages, links them and registers the program.
    ///
    /// The intermediate shader objects are released whether or not linking
    /// succeeds.
    pub fn compile_program(
        &mut self,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<ProgramHandle> {
        let vs = self.create_shader(ShaderKind::Vertex, vertex_source)?;
        let fs = match self.create_shader(ShaderKind::Fragment, fragment_source) {
            Ok(fs) => fs,
            Err(err) => {
                self.delete_shader(vs);
                return Err(err);
            }
        };

        let linked = self.link_program(vs, fs);
        self.delete_shader(vs);
        self.delete_shader(fs);
        linked
    }

    pub fn delete_program(&mut self, handle: ProgramHandle) -> bool {
        match self.programs.remove(handle) {
            Some(program) => {
                self.gl.delete_program(&program);
                true
            }
            None => false,
        }
    }

    /// Binds a program, or unbinds with `None`.
    pub fn use_program(&self, handle: Option<ProgramHandle>) -> Result<()> {
        let program = handle.map(|h| self.programs.resolve(h)).transpose()?;
        self.gl.use_program(program);
        Ok(())
    }

    /// Location of a vertex attribute; `None` when the program has no such
    /// active attribute.
    pub fn attrib_location(&self, handle: ProgramHandle, name: &str) -> Result<Option<u32>> {
        let program = self.programs.resolve(handle)?;
        Ok(self.gl.attrib_location(program, name))
    }

    // ── buffers ───────────────────────────────────────────────────────────

    pub fn create_buffer(&mut self) -> Result<BufferHandle> {
        let buffer = self
            .gl
            .create_buffer()
            .ok_or(BridgeError::ObjectCreation("buffer"))?;
        Ok(self.buffers.insert(buffer))
    }

    /// Binds the buffer to `target` and uploads `data`. The buffer stays bound.
    pub fn buffer_data(
        &self,
        handle: BufferHandle,
        target: BufferTarget,
        data: &[u8],
        usage: BufferUsage,
    ) -> Result<()> {
        let buffer = self.buffers.resolve(handle)?;
        self.gl.bind_buffer(target, Some(buffer));
        self.gl.buffer_data(target, data, usage);
        Ok(())
    }

    /// [`buffer_data`](Self::buffer_data) for a slice of plain-old-data values.
    pub fn buffer_data_pod<T: bytemuck::Pod>(
        &self,
        handle: BufferHandle,
        target: BufferTarget,
        data: &[T],
        usage: BufferUsage,
    ) -> Result<()> {
        self.buffer_data(handle, target, bytemuck::cast_slice(data), usage)
    }

    pub fn delete_buffer(&mut self, handle: BufferHandle) -> bool {
        match self.buffers.remove(handle) {
            Some(buffer) => {
                self.gl.delete_buffer(&buffer);
                true
            }
            None => false,
        }
    }

    // ── vertex arrays ─────────────────────────────────────────────────────

    pub fn create_vertex_array(&mut self) -> Result<VertexArrayHandle> {
        let vao = self
            .gl
            .create_vertex_array()
            .ok_or(BridgeError::ObjectCreation("vertex array"))?;
        Ok(self.vertex_arrays.insert(vao))
    }

    pub fn bind_vertex_array(&self, handle: Option<VertexArrayHandle>) -> Result<()> {
        let vao = handle.map(|h| self.vertex_arrays.resolve(h)).transpose()?;
        self.gl.bind_vertex_array(vao);
        Ok(())
    }

    /// Enables `location` on the bound vertex array and points it at the
    /// buffer bound to `ARRAY_BUFFER`, tightly packed `f32` components.
    pub fn vertex_attrib_f32(&self, location: u32, components: i32) {
        self.gl.enable_vertex_attrib_array(location);
        self.gl.vertex_attrib_pointer_f32(location, components, false, 0, 0);
    }

    pub fn delete_vertex_array(&mut self, handle: VertexArrayHandle) -> bool {
        match self.vertex_arrays.remove(handle) {
            Some(vao) => {
                self.gl.delete_vertex_array(&vao);
                true
            }
            None => false,
        }
    }
}

impl<G: GlApi> Drop for GlContext<G> {
    fn drop(&mut self) {
        for (_, program) in self.programs.drain() {
            self.gl.delete_program(&program);
        }
        for (_, shader) in self.shaders.drain() {
            self.gl.delete_shader(&shader);
        }
        for (_, buffer) in self.buffers.drain() {
            self.gl.delete_buffer(&buffer);
        }
        for (_, vao) in self.vertex_arrays.drain() {
            self.gl.delete_vertex_array(&vao);
        }
    }
}
