use anyhow::{Context, Result};
use bytemuck::{Pod, Zeroable};
use glbridge_engine::core::{App, AppControl, FrameCtx};
use glbridge_engine::device::GlContext;
use glbridge_engine::gl::{BufferTarget, BufferUsage, GlApi, PrimitiveMode};
use glbridge_engine::handle::{BufferHandle, ProgramHandle, VertexArrayHandle};
use glbridge_engine::surface::BackingSize;

use crate::shaders;

/// 2D clip-space vertex.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
}

/// Right triangle with its corner at the clip-space origin.
pub const TRIANGLE: [Vertex; 3] = [
    Vertex { position: [0.0, 0.0] },
    Vertex { position: [0.0, 1.0] },
    Vertex { position: [1.0, 0.0] },
];

/// Default host callback: draws the bound triangle.
#[derive(Debug, Copy, Clone, Default)]
pub struct DrawTriangle;

impl<G: GlApi> App<G> for DrawTriangle {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, G>) -> AppControl {
        ctx.draw_arrays(PrimitiveMode::Triangles, 0, TRIANGLE.len() as i32);
        AppControl::Continue
    }
}

/// GPU objects for the demo triangle plus the host callback run every frame.
///
/// Each frame binds the program and vertex array, then hands control to
/// `host`.
pub struct TriangleDemo<H> {
    program: ProgramHandle,
    buffer: BufferHandle,
    vertex_array: VertexArrayHandle,
    host: H,
}

impl<H> TriangleDemo<H> {
    /// Compiles the shaders and uploads [`TRIANGLE`].
    ///
    /// A compile or link failure is returned and nothing is left registered
    /// in `gl`; the loop must not be started with a broken program.
    pub fn new<G: GlApi>(gl: &mut GlContext<G>, host: H) -> Result<Self> {
        let program = gl
            .compile_program(shaders::VERTEX, shaders::FRAGMENT)
            .context("failed to build the triangle program")?;

        match Self::upload(gl, program) {
            Ok((buffer, vertex_array)) => {
                log::info!("triangle demo ready");
                Ok(Self {
                    program,
                    buffer,
                    vertex_array,
                    host,
                })
            }
            Err(err) => {
                gl.delete_program(program);
                Err(err)
            }
        }
    }

    fn upload<G: GlApi>(
        gl: &mut GlContext<G>,
        program: ProgramHandle,
    ) -> Result<(BufferHandle, VertexArrayHandle)> {
        let location = gl
            .attrib_location(program, shaders::POSITION_ATTRIBUTE)?
            .with_context(|| format!("`{}` is not an active attribute", shaders::POSITION_ATTRIBUTE))?;

        let buffer = gl.create_buffer()?;
        if let Err(err) = gl.buffer_data_pod(buffer, BufferTarget::Array, &TRIANGLE, BufferUsage::StaticDraw) {
            gl.delete_buffer(buffer);
            return Err(err.into());
        }

        let vertex_array = match gl.create_vertex_array() {
            Ok(vao) => vao,
            Err(err) => {
                gl.delete_buffer(buffer);
                return Err(err.into());
            }
        };
        if let Err(err) = gl.bind_vertex_array(Some(vertex_array)) {
            gl.delete_vertex_array(vertex_array);
            gl.delete_buffer(buffer);
            return Err(err.into());
        }
        gl.vertex_attrib_f32(location, 2);

        Ok((buffer, vertex_array))
    }

    pub fn program(&self) -> ProgramHandle {
        self.program
    }

    pub fn vertex_array(&self) -> VertexArrayHandle {
        self.vertex_array
    }

    /// Deletes the demo's GPU objects.
    pub fn release<G: GlApi>(self, gl: &mut GlContext<G>) -> H {
        gl.delete_vertex_array(self.vertex_array);
        gl.delete_buffer(self.buffer);
        gl.delete_program(self.program);
        self.host
    }
}

impl<G, H> App<G> for TriangleDemo<H>
where
    G: GlApi,
    H: App<G>,
{
    fn on_resize(&mut self, size: BackingSize) {
        log::debug!("canvas resized to {}x{}", size.width, size.height);
        self.host.on_resize(size);
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, G>) -> AppControl {
        let bound = ctx
            .gl
            .use_program(Some(self.program))
            .and_then(|()| ctx.gl.bind_vertex_array(Some(self.vertex_array)));

        if let Err(err) = bound {
            log::error!("triangle objects are gone, stopping: {err}");
            return AppControl::Exit;
        }

        self.host.on_frame(ctx)
    }
}

#[cfg(test)]
mod tests {
    use glbridge_engine::gl::{GlCall, RecordingGl, ShaderKind};
    use glbridge_engine::runtime::FrameDriver;
    use glbridge_engine::surface::FakeCanvas;
    use glbridge_engine::{BridgeError, ShaderError, ShaderStage};

    use super::*;

    #[test]
    fn setup_uploads_triangle_into_vertex_array() {
        let mut gl = GlContext::new(RecordingGl::new());
        let demo = TriangleDemo::new(&mut gl, DrawTriangle).unwrap();

        assert!(gl.programs().contains(demo.program()));
        assert!(gl.vertex_arrays().contains(demo.vertex_array()));

        let calls = gl.gl().calls();
        assert!(calls.contains(&GlCall::BufferData {
            target: BufferTarget::Array,
            len: 24,
            usage: BufferUsage::StaticDraw,
        }));
        assert!(calls.contains(&GlCall::EnableVertexAttribArray(0)));
        assert!(calls.contains(&GlCall::VertexAttribPointer {
            location: 0,
            components: 2,
            stride: 0,
            offset: 0,
        }));
    }

    #[test]
    fn compile_failure_is_returned_with_stage() {
        let mut gl = GlContext::new(RecordingGl::new().failing_compile(ShaderKind::Fragment));
        let err = TriangleDemo::new(&mut gl, DrawTriangle).err().unwrap();

        let bridge = err.downcast_ref::<BridgeError>().unwrap();
        assert!(matches!(
            bridge,
            BridgeError::Shader(ShaderError {
                stage: ShaderStage::Compile(ShaderKind::Fragment),
                ..
            })
        ));
        assert!(gl.programs().is_empty());
    }

    #[test]
    fn link_failure_leaves_nothing_registered() {
        let mut gl = GlContext::new(RecordingGl::new().failing_link());
        assert!(TriangleDemo::new(&mut gl, DrawTriangle).is_err());
        assert!(gl.programs().is_empty());
        assert!(gl.buffers().is_empty());
        assert_eq!(gl.gl().count(|c| matches!(c, GlCall::UseProgram(_))), 0);
    }

    #[test]
    fn missing_position_attribute_releases_program() {
        let mut gl = GlContext::new(RecordingGl::new().with_attributes(&[]));
        let err = TriangleDemo::new(&mut gl, DrawTriangle).err().unwrap();

        assert!(err.to_string().contains("a_position"));
        assert!(gl.programs().is_empty());
    }

    #[test]
    fn failed_vertex_array_leaves_nothing_registered() {
        let mut gl = GlContext::new(RecordingGl::new().refusing_vertex_arrays());
        let err = TriangleDemo::new(&mut gl, DrawTriangle).err().unwrap();

        assert!(matches!(err.downcast_ref::<BridgeError>(), Some(BridgeError::ObjectCreation(_))));
        assert!(gl.programs().is_empty());
        assert!(gl.buffers().is_empty());
        assert!(gl.vertex_arrays().is_empty());
        assert_eq!(gl.gl().count(|c| matches!(c, GlCall::DeleteBuffer(_))), 1);
    }

    #[test]
    fn frame_binds_then_draws() {
        let mut gl = GlContext::new(RecordingGl::new());
        let mut canvas = FakeCanvas::new(300.0, 150.0, 2.0);
        let mut demo = TriangleDemo::new(&mut gl, DrawTriangle).unwrap();
        let mut driver = FrameDriver::default();
        gl.gl().take_calls();

        assert_eq!(driver.frame(&mut gl, &mut canvas, &mut demo), AppControl::Continue);

        let calls = gl.gl().calls();
        assert_eq!(calls.len(), 6);
        assert_eq!(calls[0], GlCall::Viewport { x: 0, y: 0, width: 600, height: 300 });
        assert!(matches!(calls[3], GlCall::UseProgram(Some(_))));
        assert!(matches!(calls[4], GlCall::BindVertexArray(Some(_))));
        assert_eq!(
            calls[5],
            GlCall::DrawArrays { mode: PrimitiveMode::Triangles, first: 0, count: 3 }
        );
    }

    #[test]
    fn released_objects_stop_the_loop() {
        let mut gl = GlContext::new(RecordingGl::new());
        let mut canvas = FakeCanvas::new(10.0, 10.0, 1.0);
        let mut demo = TriangleDemo::new(&mut gl, DrawTriangle).unwrap();
        let mut driver = FrameDriver::default();

        gl.delete_program(demo.program());
        assert_eq!(driver.frame(&mut gl, &mut canvas, &mut demo), AppControl::Exit);
        assert_eq!(gl.gl().count(|c| matches!(c, GlCall::DrawArrays { .. })), 0);
    }

    #[test]
    fn release_deletes_everything() {
        let mut gl = GlContext::new(RecordingGl::new());
        let demo = TriangleDemo::new(&mut gl, DrawTriangle).unwrap();
        demo.release(&mut gl);

        assert!(gl.programs().is_empty());
        assert!(gl.buffers().is_empty());
        assert!(gl.vertex_arrays().is_empty());
    }

    #[test]
    fn clear_pulses_across_frames() {
        let mut gl = GlContext::new(RecordingGl::new());
        let mut canvas = FakeCanvas::new(10.0, 10.0, 1.0);
        let mut demo = TriangleDemo::new(&mut gl, DrawTriangle).unwrap();
        let mut driver = FrameDriver::default();

        for _ in 0..1_000 {
            driver.frame(&mut gl, &mut canvas, &mut demo);
        }

        let levels: Vec<f32> = gl
            .gl()
            .calls()
            .iter()
            .filter_map(|c| match c {
                GlCall::ClearColor([r, ..]) => Some(*r),
                _ => None,
            })
            .collect();
        assert_eq!(levels.len(), 1_000);
        assert!(levels.iter().all(|l| (0.0..=1.0).contains(l)));
        assert!(levels.contains(&1.0));
    }
}
