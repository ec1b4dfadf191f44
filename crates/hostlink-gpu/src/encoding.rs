//! Command recording and submission through the captured tables.

use hostlink_abi::ffi::{
    NativeCommandBufferHandle, NativeCommandEncoderHandle, NativeQueueHandle,
    NativeRenderPassHandle,
};
use tracing::trace;

use crate::dispatch::dispatch;
use crate::pipeline::RenderPipeline;

/// An open command encoder on the host side.
pub struct CommandEncoder {
    pub(crate) handle: NativeCommandEncoderHandle,
}

impl CommandEncoder {
    /// Begin a render pass on this encoder.
    pub fn begin_render_pass(&self) -> RenderPass {
        let handle = unsafe {
            (dispatch()
                .command_encoder_functions
                .command_encoder_begin_render_pass)(self.handle)
        };
        trace!(encoder = ?self.handle, render_pass = ?handle, "command_encoder_begin_render_pass");
        RenderPass { handle }
    }

    /// Close the encoder and produce a submittable command buffer. The host
    /// consumes the encoder; the handle must not be reused, which is why
    /// this takes `self` by value.
    pub fn finish(self) -> CommandBuffer {
        let handle = unsafe {
            (dispatch().command_encoder_functions.command_encoder_finish)(self.handle)
        };
        trace!(encoder = ?self.handle, command_buffer = ?handle, "command_encoder_finish");
        CommandBuffer { handle }
    }
}

/// A render pass being recorded. Must be ended before the encoder that
/// opened it is finished.
pub struct RenderPass {
    pub(crate) handle: NativeRenderPassHandle,
}

impl RenderPass {
    pub fn set_pipeline(&self, pipeline: &RenderPipeline) {
        trace!(render_pass = ?self.handle, pipeline = ?pipeline.handle, "render_pass_set_pipeline");
        unsafe {
            (dispatch().render_pass_functions.render_pass_set_pipeline)(
                self.handle,
                pipeline.handle,
            )
        }
    }

    pub fn draw(&self, vertex_count: u32, instance_count: u32) {
        trace!(render_pass = ?self.handle, vertex_count, instance_count, "render_pass_draw");
        unsafe {
            (dispatch().render_pass_functions.render_pass_draw)(
                self.handle,
                vertex_count,
                instance_count,
            )
        }
    }

    pub fn end(self) {
        trace!(render_pass = ?self.handle, "render_pass_end");
        unsafe { (dispatch().render_pass_functions.render_pass_end)(self.handle) }
    }
}

/// A finished command buffer awaiting submission.
pub struct CommandBuffer {
    pub(crate) handle: NativeCommandBufferHandle,
}

/// The host device's submission queue.
pub struct Queue {
    pub(crate) handle: NativeQueueHandle,
}

impl Queue {
    /// Submit a finished command buffer. The host consumes the buffer.
    pub fn submit(&self, command_buffer: CommandBuffer) {
        trace!(queue = ?self.handle, command_buffer = ?command_buffer.handle, "queue_submit");
        unsafe { (dispatch().queue_functions.queue_submit)(self.handle, command_buffer.handle) }
    }
}
