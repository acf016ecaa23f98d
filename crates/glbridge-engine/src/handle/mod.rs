//! Typed handle tables.
//!
//! Host code refers to GPU objects through integer handles. Each resource
//! category gets its own handle type so a buffer handle can never resolve
//! against the program table. Objects sit in a slot arena that reuses freed
//! slots; handles are per-table serial numbers, so they only ever grow and a
//! removed handle stays dead.

mod kinds;
mod table;

pub use kinds::{BufferHandle, HandleKind, ProgramHandle, ShaderHandle, VertexArrayHandle};
pub use table::{HandleTable, from_host_id, to_host_id};
