use crate::device::GlContext;
use crate::error::{BridgeError, Result};
use crate::gl::{GlApi, INVALID_INDEX};
use crate::handle::ProgramHandle;

impl<G: GlApi> GlContext<G> {
    /// Index of the uniform block `name` in `program`, `None` if the program
    /// has no such active block.
    pub fn uniform_block_index(&self, program: ProgramHandle, name: &str) -> Result<Option<u32>> {
        let p = self.programs.resolve(program)?;
        let index = self.gl().uniform_block_index(p, name);
        if index == INVALID_INDEX {
            log::debug!("uniform block `{name}` not found");
            return Ok(None);
        }
        Ok(Some(index))
    }

    /// Assigns uniform block `index` of `program` to binding point `binding`.
    ///
    /// Indices past the program's active block count, including
    /// [`INVALID_INDEX`], are rejected instead of being forwarded.
    pub fn uniform_block_binding(
        &self,
        program: ProgramHandle,
        index: u32,
        binding: u32,
    ) -> Result<()> {
        let p = self.programs.resolve(program)?;
        let active = self.gl().active_uniform_blocks(p);
        if index >= active {
            log::warn!("uniform block index {index} rejected ({active} active)");
            return Err(BridgeError::UniformBlockOutOfRange { index, active });
        }
        self.gl().uniform_block_binding(p, index, binding);
        Ok(())
    }

    /// Looks up `name` and binds it to `binding` in one step.
    ///
    /// A missing block is reported as out of range with the sentinel index.
    pub fn bind_uniform_buffer(
        &self,
        program: ProgramHandle,
        name: &str,
        binding: u32,
    ) -> Result<()> {
        let index = self
            .uniform_block_index(program, name)?
            .unwrap_or(INVALID_INDEX);
        self.uniform_block_binding(program, index, binding)
    }
}
