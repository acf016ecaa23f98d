//! JavaScript-facing bridge.
//!
//! Host code holds one [`HostBridge`] per canvas and passes object handles as
//! `u64` host IDs (BigInt on the JS side). Failures come back as thrown
//! `Error`s carrying the [`BridgeError`](crate::BridgeError) message.

use wasm_bindgen::prelude::*;
use web_sys::WebGl2RenderingContext;

use crate::device::{ContextInit, GlContext, create_webgl2_context};
use crate::gl::{BufferTarget, BufferUsage, INVALID_INDEX};
use crate::handle::{from_host_id, to_host_id};
use crate::logging::{LoggingConfig, init_logging};
use crate::surface::{CanvasSurface, HtmlCanvasSurface, reconcile_backing_store};

#[wasm_bindgen]
pub struct HostBridge {
    gl: GlContext<WebGl2RenderingContext>,
    surface: HtmlCanvasSurface,
}

#[wasm_bindgen]
impl HostBridge {
    /// Creates the WebGL2 context on the canvas with id `canvas_id`.
    #[wasm_bindgen(js_name = initContext)]
    pub fn init_context(canvas_id: &str) -> Result<HostBridge, JsValue> {
        init_logging(LoggingConfig::default());
        let init = ContextInit::default().with_canvas_id(canvas_id);
        let (gl, surface) = create_webgl2_context(&init)?;
        Ok(Self { gl, surface })
    }

    /// Uniform block index, or `0xFFFFFFFF` when the block does not exist.
    #[wasm_bindgen(js_name = getUniformBlockIndex)]
    pub fn get_uniform_block_index(&self, program: u64, name: &str) -> Result<u32, JsValue> {
        let index = self.gl.uniform_block_index(from_host_id(program), name)?;
        Ok(index.unwrap_or(INVALID_INDEX))
    }

    #[wasm_bindgen(js_name = uniformBlockBinding)]
    pub fn uniform_block_binding(&self, program: u64, index: u32, binding: u32) -> Result<(), JsValue> {
        Ok(self.gl.uniform_block_binding(from_host_id(program), index, binding)?)
    }

    #[wasm_bindgen(js_name = bindBufferRange)]
    pub fn bind_buffer_range(
        &self,
        target: u32,
        index: u32,
        buffer: u64,
        offset: i32,
        size: i32,
    ) -> Result<(), JsValue> {
        Ok(self
            .gl
            .bind_buffer_range_raw(target, index, from_host_id(buffer), offset, size)?)
    }

    /// Reconciles the canvas backing store; `true` when it was resized.
    #[wasm_bindgen(js_name = handleResize)]
    pub fn handle_resize(&mut self) -> bool {
        reconcile_backing_store(&mut self.surface).changed()
    }

    #[wasm_bindgen(js_name = backingWidth)]
    pub fn backing_width(&self) -> u32 {
        self.surface.backing_size().width
    }

    #[wasm_bindgen(js_name = backingHeight)]
    pub fn backing_height(&self) -> u32 {
        self.surface.backing_size().height
    }

    #[wasm_bindgen(js_name = createBuffer)]
    pub fn create_buffer(&mut self) -> Result<u64, JsValue> {
        Ok(to_host_id(self.gl.create_buffer()?))
    }

    /// Uploads `data` as a uniform buffer's contents with `DYNAMIC_DRAW` usage.
    #[wasm_bindgen(js_name = uniformBufferData)]
    pub fn uniform_buffer_data(&self, buffer: u64, data: &[u8]) -> Result<(), JsValue> {
        Ok(self.gl.buffer_data(
            from_host_id(buffer),
            BufferTarget::Uniform,
            data,
            BufferUsage::DynamicDraw,
        )?)
    }

    #[wasm_bindgen(js_name = deleteBuffer)]
    pub fn delete_buffer(&mut self, buffer: u64) -> bool {
        self.gl.delete_buffer(from_host_id(buffer))
    }

    /// Compiles and links a program; compile/link failures are thrown with the
    /// info log.
    #[wasm_bindgen(js_name = createProgram)]
    pub fn create_program(&mut self, vertex_source: &str, fragment_source: &str) -> Result<u64, JsValue> {
        Ok(to_host_id(self.gl.compile_program(vertex_source, fragment_source)?))
    }

    #[wasm_bindgen(js_name = deleteProgram)]
    pub fn delete_program(&mut self, program: u64) -> bool {
        self.gl.delete_program(from_host_id(program))
    }
}
