//! Bridge operations.
//!
//! Each operation resolves the handles it is given against the context's
//! tables, validates what the API would otherwise reject, then issues exactly
//! one GL call. Canvas resize reconciliation lives in [`crate::surface`].

mod buffer_range;
mod uniform_block;
