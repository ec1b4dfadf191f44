//! The host GPU device, reached through the captured dispatch state.

use std::ffi::CStr;

use tracing::trace;

use crate::dispatch::dispatch;
use crate::encoding::{CommandEncoder, Queue};
use crate::pipeline::{PipelineLayout, RenderPipeline, ShaderModule};

/// Handle to the host's live GPU device instance.
///
/// The host owns the device and keeps it valid for the process lifetime;
/// this type only routes calls through the device function table captured
/// at entry.
pub struct NativeDevice {
    handle: hostlink_abi::ffi::NativeDeviceHandle,
}

impl NativeDevice {
    /// The device handed over in the entry descriptor.
    pub fn global() -> Self {
        Self {
            handle: dispatch().device,
        }
    }

    /// Compile a WGSL source into a host-side shader module.
    pub fn create_shader_module(&self, wgsl_source: &CStr) -> ShaderModule {
        let handle = unsafe {
            (dispatch().device_functions.device_create_shader_module)(
                self.handle,
                wgsl_source.as_ptr(),
            )
        };
        trace!(device = ?self.handle, shader_module = ?handle, "device_create_shader_module");
        ShaderModule { handle }
    }

    /// Create an empty pipeline layout.
    pub fn create_pipeline_layout(&self) -> PipelineLayout {
        let handle =
            unsafe { (dispatch().device_functions.device_create_pipeline_layout)(self.handle) };
        trace!(device = ?self.handle, pipeline_layout = ?handle, "device_create_pipeline_layout");
        PipelineLayout { handle }
    }

    /// Create a render pipeline from a layout and a shader module.
    pub fn create_render_pipeline(
        &self,
        layout: &PipelineLayout,
        shader_module: &ShaderModule,
    ) -> RenderPipeline {
        let handle = unsafe {
            (dispatch().device_functions.device_create_render_pipeline)(
                self.handle,
                layout.handle,
                shader_module.handle,
            )
        };
        trace!(device = ?self.handle, render_pipeline = ?handle, "device_create_render_pipeline");
        RenderPipeline { handle }
    }

    /// Open a command encoder for recording one submission.
    pub fn create_command_encoder(&self) -> CommandEncoder {
        let handle =
            unsafe { (dispatch().device_functions.device_create_command_encoder)(self.handle) };
        trace!(device = ?self.handle, encoder = ?handle, "device_create_command_encoder");
        CommandEncoder { handle }
    }

    /// The device's submission queue.
    pub fn queue(&self) -> Queue {
        let handle = unsafe { (dispatch().device_functions.device_get_queue)(self.handle) };
        trace!(device = ?self.handle, queue = ?handle, "device_get_queue");
        Queue { handle }
    }
}
