use core::fmt;
use core::hash::Hash;

/// A typed handle: a per-table serial number tagged with its resource kind.
///
/// Serials start at `1` and are never reissued, so `0` never names an object.
pub trait HandleKind: Copy + Eq + Ord + Hash + fmt::Debug {
    const KIND: &'static str;

    fn from_serial(serial: u64) -> Self;

    fn serial(self) -> u64;
}

macro_rules! handle_kinds {
    ($($(#[$meta:meta])* $name:ident => $kind:literal;)*) => {$(
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u64);

        impl HandleKind for $name {
            const KIND: &'static str = $kind;

            #[inline]
            fn from_serial(serial: u64) -> Self {
                Self(serial)
            }

            #[inline]
            fn serial(self) -> u64 {
                self.0
            }
        }
    )*};
}

handle_kinds! {
    /// Linked shader program.
    ProgramHandle => "program";
    /// Compiled shader object.
    ShaderHandle => "shader";
    /// Buffer object (vertex, index or uniform storage).
    BufferHandle => "buffer";
    /// Vertex array object.
    VertexArrayHandle => "vertex array";
}
