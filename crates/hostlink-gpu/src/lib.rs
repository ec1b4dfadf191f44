//! Typed access to the host's GPU abstraction layer from inside the module.
//!
//! The host hands over one function table per native subsystem at load time;
//! [`dispatch`] captures them into process-wide state, and the wrapper types
//! here ([`NativeDevice`], [`CommandEncoder`], [`RenderPass`], [`Queue`],
//! [`ShaderModule`], [`PipelineLayout`], [`RenderPipeline`]) route every
//! call through the captured table for their subsystem.
//!
//! No GPU semantics live here: each wrapper is a handle plus the slot calls
//! the ABI fixes for it. Everything is single-thread-only, matching the
//! boundary contract (entry, reload, and application callbacks all run on
//! the host's loader thread).

pub mod device;
pub mod dispatch;
pub mod encoding;
pub mod pipeline;

// Re-export primary types at crate root for convenience.
pub use device::NativeDevice;
pub use encoding::{CommandBuffer, CommandEncoder, Queue, RenderPass};
pub use pipeline::{PipelineLayout, RenderPipeline, ShaderModule};
