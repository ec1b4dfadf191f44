//! Process-wide dispatch state captured from the entry descriptor.
//!
//! Every native call site dereferences this state, not the descriptor: the
//! descriptor is only guaranteed valid for the duration of the entry call,
//! while the captured tables live until process exit. Capture happens
//! exactly once, during the entry handshake, before any native call is
//! attempted.

use hostlink_abi::ffi::{
    EntryDescriptor, NativeCommandEncoderFunctions, NativeDeviceFunctions, NativeDeviceHandle,
    NativePipelineLayoutFunctions, NativeQueueFunctions, NativeRenderPassFunctions,
    NativeRenderPipelineFunctions, NativeShaderModuleFunctions,
};
use once_cell::sync::OnceCell;
use tracing::debug;

/// The seven captured function tables plus the host's device handle.
pub struct Dispatch {
    pub device_functions: NativeDeviceFunctions,
    pub device: NativeDeviceHandle,
    pub command_encoder_functions: NativeCommandEncoderFunctions,
    pub render_pass_functions: NativeRenderPassFunctions,
    pub queue_functions: NativeQueueFunctions,
    pub shader_module_functions: NativeShaderModuleFunctions,
    pub render_pipeline_functions: NativeRenderPipelineFunctions,
    pub pipeline_layout_functions: NativePipelineLayoutFunctions,
}

// SAFETY: the boundary contract serializes entry, reload, and every native
// call on the host's loader thread; the device handle is never dereferenced
// by this crate, only passed back to the host's own functions.
unsafe impl Send for Dispatch {}
unsafe impl Sync for Dispatch {}

static DISPATCH: OnceCell<Dispatch> = OnceCell::new();

/// Capture the native function tables and device handle out of `descriptor`.
///
/// Called once by the module entry point, before script load and application
/// initialization. A second capture is ignored: the state is written exactly
/// once for the process lifetime.
pub fn capture(descriptor: &EntryDescriptor) {
    let captured = DISPATCH
        .set(Dispatch {
            device_functions: descriptor.device_functions,
            device: descriptor.device,
            command_encoder_functions: descriptor.command_encoder_functions,
            render_pass_functions: descriptor.render_pass_functions,
            queue_functions: descriptor.queue_functions,
            shader_module_functions: descriptor.shader_module_functions,
            render_pipeline_functions: descriptor.render_pipeline_functions,
            pipeline_layout_functions: descriptor.pipeline_layout_functions,
        })
        .is_ok();
    debug!(device = ?descriptor.device, captured, "native dispatch state capture");
}

/// Whether the entry handshake has populated the dispatch state.
pub fn is_captured() -> bool {
    DISPATCH.get().is_some()
}

/// The captured dispatch state.
///
/// No call site may run before [`capture`]; the entry point guarantees the
/// ordering, so a miss here is a boundary-contract violation.
pub fn dispatch() -> &'static Dispatch {
    DISPATCH
        .get()
        .expect("native dispatch state read before the entry handshake")
}
