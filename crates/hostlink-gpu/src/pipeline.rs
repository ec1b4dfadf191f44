//! Host-side pipeline objects owned by the module.
//!
//! Unlike the device and queue, these are created at the module's request,
//! so the module is responsible for giving them back: each wrapper releases
//! its host object through the subsystem's delete slot on drop. That is what
//! lets application re-initialization swap render resources across reloads
//! without leaking host memory.

use hostlink_abi::ffi::{
    NativePipelineLayoutHandle, NativeRenderPipelineHandle, NativeShaderModuleHandle,
};
use tracing::trace;

use crate::dispatch::dispatch;

/// A compiled shader module on the host side.
pub struct ShaderModule {
    pub(crate) handle: NativeShaderModuleHandle,
}

impl Drop for ShaderModule {
    fn drop(&mut self) {
        trace!(shader_module = ?self.handle, "shader_module_delete");
        unsafe { (dispatch().shader_module_functions.shader_module_delete)(self.handle) }
    }
}

/// A pipeline layout on the host side.
pub struct PipelineLayout {
    pub(crate) handle: NativePipelineLayoutHandle,
}

impl Drop for PipelineLayout {
    fn drop(&mut self) {
        trace!(pipeline_layout = ?self.handle, "pipeline_layout_delete");
        unsafe { (dispatch().pipeline_layout_functions.pipeline_layout_delete)(self.handle) }
    }
}

/// A render pipeline on the host side.
pub struct RenderPipeline {
    pub(crate) handle: NativeRenderPipelineHandle,
}

impl Drop for RenderPipeline {
    fn drop(&mut self) {
        trace!(render_pipeline = ?self.handle, "render_pipeline_delete");
        unsafe { (dispatch().render_pipeline_functions.render_pipeline_delete)(self.handle) }
    }
}
