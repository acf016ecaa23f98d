use crate::device::GlContext;
use crate::error::{BridgeError, Result};
use crate::gl::{GlApi, IndexedBufferTarget};
use crate::handle::BufferHandle;

impl<G: GlApi> GlContext<G> {
    /// Binds `[offset, offset + size)` of `buffer` to indexed binding point
    /// `index` of `target`.
    ///
    /// A negative offset or a non-positive size is rejected.
    pub fn bind_buffer_range(
        &self,
        target: IndexedBufferTarget,
        index: u32,
        buffer: BufferHandle,
        offset: i32,
        size: i32,
    ) -> Result<()> {
        let b = self.buffers.resolve(buffer)?;
        if offset < 0 || size <= 0 || offset.checked_add(size).is_none() {
            log::warn!("buffer range rejected: offset {offset}, size {size}");
            return Err(BridgeError::InvalidRange { offset, size });
        }
        self.gl().bind_buffer_range(target, index, b, offset, size);
        Ok(())
    }

    /// Same as [`bind_buffer_range`](Self::bind_buffer_range) with a raw GL
    /// target enum, as passed by host code.
    pub fn bind_buffer_range_raw(
        &self,
        target: u32,
        index: u32,
        buffer: BufferHandle,
        offset: i32,
        size: i32,
    ) -> Result<()> {
        let target =
            IndexedBufferTarget::from_gl_enum(target).ok_or(BridgeError::UnsupportedTarget(target))?;
        self.bind_buffer_range(target, index, buffer, offset, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::{BufferTarget, GlCall, RecordingGl};

    fn ctx_with_buffer() -> (GlContext<RecordingGl>, BufferHandle) {
        let mut ctx = GlContext::new(RecordingGl::new());
        let buffer = ctx.create_buffer().unwrap();
        ctx.gl().take_calls();
        (ctx, buffer)
    }

    #[test]
    fn binds_requested_range() {
        let (ctx, buffer) = ctx_with_buffer();
        ctx.bind_buffer_range(IndexedBufferTarget::Uniform, 3, buffer, 256, 64)
            .unwrap();

        assert!(matches!(
            ctx.gl().calls()[..],
            [GlCall::BindBufferRange {
                target: IndexedBufferTarget::Uniform,
                index: 3,
                offset: 256,
                size: 64,
                ..
            }]
        ));
    }

    #[test]
    fn empty_and_negative_ranges_are_rejected() {
        let (ctx, buffer) = ctx_with_buffer();
        for (offset, size) in [(0, 0), (0, -4), (-1, 16), (i32::MAX, 1)] {
            let err = ctx
                .bind_buffer_range(IndexedBufferTarget::Uniform, 0, buffer, offset, size)
                .unwrap_err();
            assert!(matches!(err, BridgeError::InvalidRange { .. }));
        }
        assert!(ctx.gl().calls().is_empty());
    }

    #[test]
    fn raw_target_must_be_indexed() {
        let (ctx, buffer) = ctx_with_buffer();
        let array = BufferTarget::Array.gl_enum();
        let err = ctx.bind_buffer_range_raw(array, 0, buffer, 0, 16).unwrap_err();
        assert!(matches!(err, BridgeError::UnsupportedTarget(t) if t == array));
    }

    #[test]
    fn raw_uniform_target_is_accepted() {
        let (ctx, buffer) = ctx_with_buffer();
        ctx.bind_buffer_range_raw(0x8A11, 0, buffer, 0, 16).unwrap();
        assert_eq!(ctx.gl().calls().len(), 1);
    }

    #[test]
    fn removed_buffer_does_not_resolve() {
        let (mut ctx, buffer) = ctx_with_buffer();
        ctx.delete_buffer(buffer);
        let err = ctx
            .bind_buffer_range(IndexedBufferTarget::Uniform, 0, buffer, 0, 16)
            .unwrap_err();
        assert!(matches!(err, BridgeError::StaleHandle { kind: "buffer", .. }));
    }
}
