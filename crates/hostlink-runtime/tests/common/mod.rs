//! A stub host for driving the entry handshake from tests.
//!
//! Seven no-op native tables whose slots count their invocations, plus the
//! descriptor allocation exactly the way the engine performs it: one
//! descriptor, zeroed storage for the two module-written tables, IN fields
//! populated before the call.

#![allow(dead_code)]

use std::ffi::c_char;
use std::mem::MaybeUninit;
use std::ptr;
use std::sync::atomic::{AtomicU32, Ordering};

use hostlink_abi::ffi::*;

// ---------------------------------------------------------------------------
// Call counters
// ---------------------------------------------------------------------------

pub static SHADER_MODULE_CREATES: AtomicU32 = AtomicU32::new(0);
pub static PIPELINE_LAYOUT_CREATES: AtomicU32 = AtomicU32::new(0);
pub static RENDER_PIPELINE_CREATES: AtomicU32 = AtomicU32::new(0);
pub static COMMAND_ENCODER_CREATES: AtomicU32 = AtomicU32::new(0);
pub static QUEUE_GETS: AtomicU32 = AtomicU32::new(0);
pub static RENDER_PASS_BEGINS: AtomicU32 = AtomicU32::new(0);
pub static COMMAND_ENCODER_FINISHES: AtomicU32 = AtomicU32::new(0);
pub static RENDER_PASS_SET_PIPELINES: AtomicU32 = AtomicU32::new(0);
pub static RENDER_PASS_DRAWS: AtomicU32 = AtomicU32::new(0);
pub static RENDER_PASS_ENDS: AtomicU32 = AtomicU32::new(0);
pub static QUEUE_SUBMITS: AtomicU32 = AtomicU32::new(0);
pub static SHADER_MODULE_DELETES: AtomicU32 = AtomicU32::new(0);
pub static PIPELINE_LAYOUT_DELETES: AtomicU32 = AtomicU32::new(0);
pub static RENDER_PIPELINE_DELETES: AtomicU32 = AtomicU32::new(0);

fn count(counter: &AtomicU32) {
    counter.fetch_add(1, Ordering::SeqCst);
}

// ---------------------------------------------------------------------------
// Stub native objects
// ---------------------------------------------------------------------------
//
// Distinct tag values so a test can tell which handle came back where. They
// are never dereferenced.

pub const SHADER_MODULE_TAG: usize = 0x51;
pub const PIPELINE_LAYOUT_TAG: usize = 0x52;
pub const RENDER_PIPELINE_TAG: usize = 0x53;
pub const COMMAND_ENCODER_TAG: usize = 0x54;
pub const RENDER_PASS_TAG: usize = 0x55;
pub const COMMAND_BUFFER_TAG: usize = 0x56;
pub const QUEUE_TAG: usize = 0x57;

// ---------------------------------------------------------------------------
// Stub slots
// ---------------------------------------------------------------------------

pub unsafe extern "C" fn device_create_shader_module(
    _device: NativeDeviceHandle,
    wgsl_source: *const c_char,
) -> NativeShaderModuleHandle {
    assert!(!wgsl_source.is_null());
    count(&SHADER_MODULE_CREATES);
    SHADER_MODULE_TAG as NativeShaderModuleHandle
}

pub unsafe extern "C" fn device_create_pipeline_layout(
    _device: NativeDeviceHandle,
) -> NativePipelineLayoutHandle {
    count(&PIPELINE_LAYOUT_CREATES);
    PIPELINE_LAYOUT_TAG as NativePipelineLayoutHandle
}

pub unsafe extern "C" fn device_create_render_pipeline(
    _device: NativeDeviceHandle,
    layout: NativePipelineLayoutHandle,
    shader_module: NativeShaderModuleHandle,
) -> NativeRenderPipelineHandle {
    assert_eq!(layout as usize, PIPELINE_LAYOUT_TAG);
    assert_eq!(shader_module as usize, SHADER_MODULE_TAG);
    count(&RENDER_PIPELINE_CREATES);
    RENDER_PIPELINE_TAG as NativeRenderPipelineHandle
}

pub unsafe extern "C" fn device_create_command_encoder(
    _device: NativeDeviceHandle,
) -> NativeCommandEncoderHandle {
    count(&COMMAND_ENCODER_CREATES);
    COMMAND_ENCODER_TAG as NativeCommandEncoderHandle
}

pub unsafe extern "C" fn device_get_queue(_device: NativeDeviceHandle) -> NativeQueueHandle {
    count(&QUEUE_GETS);
    QUEUE_TAG as NativeQueueHandle
}

pub unsafe extern "C" fn command_encoder_begin_render_pass(
    encoder: NativeCommandEncoderHandle,
) -> NativeRenderPassHandle {
    assert_eq!(encoder as usize, COMMAND_ENCODER_TAG);
    count(&RENDER_PASS_BEGINS);
    RENDER_PASS_TAG as NativeRenderPassHandle
}

pub unsafe extern "C" fn command_encoder_finish(
    encoder: NativeCommandEncoderHandle,
) -> NativeCommandBufferHandle {
    assert_eq!(encoder as usize, COMMAND_ENCODER_TAG);
    count(&COMMAND_ENCODER_FINISHES);
    COMMAND_BUFFER_TAG as NativeCommandBufferHandle
}

pub unsafe extern "C" fn render_pass_set_pipeline(
    render_pass: NativeRenderPassHandle,
    pipeline: NativeRenderPipelineHandle,
) {
    assert_eq!(render_pass as usize, RENDER_PASS_TAG);
    assert_eq!(pipeline as usize, RENDER_PIPELINE_TAG);
    count(&RENDER_PASS_SET_PIPELINES);
}

pub unsafe extern "C" fn render_pass_draw(
    render_pass: NativeRenderPassHandle,
    vertex_count: u32,
    instance_count: u32,
) {
    assert_eq!(render_pass as usize, RENDER_PASS_TAG);
    assert!(vertex_count > 0 && instance_count > 0);
    count(&RENDER_PASS_DRAWS);
}

pub unsafe extern "C" fn render_pass_end(render_pass: NativeRenderPassHandle) {
    assert_eq!(render_pass as usize, RENDER_PASS_TAG);
    count(&RENDER_PASS_ENDS);
}

pub unsafe extern "C" fn queue_submit(
    queue: NativeQueueHandle,
    command_buffer: NativeCommandBufferHandle,
) {
    assert_eq!(queue as usize, QUEUE_TAG);
    assert_eq!(command_buffer as usize, COMMAND_BUFFER_TAG);
    count(&QUEUE_SUBMITS);
}

pub unsafe extern "C" fn shader_module_delete(shader_module: NativeShaderModuleHandle) {
    assert_eq!(shader_module as usize, SHADER_MODULE_TAG);
    count(&SHADER_MODULE_DELETES);
}

pub unsafe extern "C" fn pipeline_layout_delete(pipeline_layout: NativePipelineLayoutHandle) {
    assert_eq!(pipeline_layout as usize, PIPELINE_LAYOUT_TAG);
    count(&PIPELINE_LAYOUT_DELETES);
}

pub unsafe extern "C" fn render_pipeline_delete(render_pipeline: NativeRenderPipelineHandle) {
    assert_eq!(render_pipeline as usize, RENDER_PIPELINE_TAG);
    count(&RENDER_PIPELINE_DELETES);
}

// ---------------------------------------------------------------------------
// Descriptor allocation
// ---------------------------------------------------------------------------

/// The host-side allocation for one handshake: the descriptor plus the
/// zeroed storage the module fills with its two tables. Boxed so the
/// addresses the descriptor carries stay put.
pub struct Host {
    pub descriptor: EntryDescriptor,
    pub application_functions: MaybeUninit<RuntimeApplicationFunctions>,
    pub file_watch_functions: MaybeUninit<FileWatchFunctions>,
}

pub fn host(device: NativeDeviceHandle) -> Box<Host> {
    let mut host = Box::new(Host {
        descriptor: EntryDescriptor {
            runtime_application: ptr::null_mut(),
            runtime_application_functions: ptr::null_mut(),
            file_watch_functions: ptr::null_mut(),
            device_functions: NativeDeviceFunctions {
                device_create_shader_module,
                device_create_pipeline_layout,
                device_create_render_pipeline,
                device_create_command_encoder,
                device_get_queue,
            },
            device,
            command_encoder_functions: NativeCommandEncoderFunctions {
                command_encoder_begin_render_pass,
                command_encoder_finish,
            },
            render_pass_functions: NativeRenderPassFunctions {
                render_pass_set_pipeline,
                render_pass_draw,
                render_pass_end,
            },
            queue_functions: NativeQueueFunctions { queue_submit },
            shader_module_functions: NativeShaderModuleFunctions { shader_module_delete },
            render_pipeline_functions: NativeRenderPipelineFunctions { render_pipeline_delete },
            pipeline_layout_functions: NativePipelineLayoutFunctions { pipeline_layout_delete },
        },
        application_functions: MaybeUninit::zeroed(),
        file_watch_functions: MaybeUninit::zeroed(),
    });
    host.descriptor.runtime_application_functions = host.application_functions.as_mut_ptr();
    host.descriptor.file_watch_functions = host.file_watch_functions.as_mut_ptr();
    host
}

/// An opaque device pointer with a recognizable value. Never dereferenced.
pub fn fake_device() -> NativeDeviceHandle {
    0xD0 as NativeDeviceHandle
}
