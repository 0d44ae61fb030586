//! Surface implementations

pub mod memory;
pub mod stdout;

pub use memory::RecordingSurface;
pub use stdout::JsonLinesSurface;
