//! C-repr structs for the load-time handshake between the host engine and
//! the runtime module.
//!
//! Field order here is the binary contract: adding, removing, or reordering
//! a field or a function-pointer slot silently breaks every module built
//! against the old layout. `tests/layout.rs` pins the offsets.

use std::ffi::{c_char, c_void};

// =====================================================================
// Opaque handle types
// =====================================================================
//
// Each alias names which side owns the object behind the pointer. The
// runtime-application handle is module-owned; every `Native*` handle is
// host-owned and must stay valid for the process lifetime once handed over.

pub type RuntimeApplicationHandle = *mut c_void;
pub type NativeDeviceHandle = *mut c_void;
pub type NativeQueueHandle = *mut c_void;
pub type NativeCommandEncoderHandle = *mut c_void;
pub type NativeCommandBufferHandle = *mut c_void;
pub type NativeRenderPassHandle = *mut c_void;
pub type NativeShaderModuleHandle = *mut c_void;
pub type NativePipelineLayoutHandle = *mut c_void;
pub type NativeRenderPipelineHandle = *mut c_void;

// =====================================================================
// Host-supplied native function tables (IN)
// =====================================================================

pub type DeviceCreateShaderModuleFn =
    unsafe extern "C" fn(device: NativeDeviceHandle, wgsl_source: *const c_char) -> NativeShaderModuleHandle;
pub type DeviceCreatePipelineLayoutFn =
    unsafe extern "C" fn(device: NativeDeviceHandle) -> NativePipelineLayoutHandle;
pub type DeviceCreateRenderPipelineFn = unsafe extern "C" fn(
    device: NativeDeviceHandle,
    layout: NativePipelineLayoutHandle,
    shader_module: NativeShaderModuleHandle,
) -> NativeRenderPipelineHandle;
pub type DeviceCreateCommandEncoderFn =
    unsafe extern "C" fn(device: NativeDeviceHandle) -> NativeCommandEncoderHandle;
pub type DeviceGetQueueFn = unsafe extern "C" fn(device: NativeDeviceHandle) -> NativeQueueHandle;

/// Device-level operations of the host's GPU context.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct NativeDeviceFunctions {
    pub device_create_shader_module: DeviceCreateShaderModuleFn,
    pub device_create_pipeline_layout: DeviceCreatePipelineLayoutFn,
    pub device_create_render_pipeline: DeviceCreateRenderPipelineFn,
    pub device_create_command_encoder: DeviceCreateCommandEncoderFn,
    pub device_get_queue: DeviceGetQueueFn,
}

pub type CommandEncoderBeginRenderPassFn =
    unsafe extern "C" fn(encoder: NativeCommandEncoderHandle) -> NativeRenderPassHandle;
pub type CommandEncoderFinishFn =
    unsafe extern "C" fn(encoder: NativeCommandEncoderHandle) -> NativeCommandBufferHandle;

/// Command recording operations. `finish` consumes the encoder on the host
/// side; the handle must not be used afterwards.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct NativeCommandEncoderFunctions {
    pub command_encoder_begin_render_pass: CommandEncoderBeginRenderPassFn,
    pub command_encoder_finish: CommandEncoderFinishFn,
}

pub type RenderPassSetPipelineFn =
    unsafe extern "C" fn(render_pass: NativeRenderPassHandle, pipeline: NativeRenderPipelineHandle);
pub type RenderPassDrawFn =
    unsafe extern "C" fn(render_pass: NativeRenderPassHandle, vertex_count: u32, instance_count: u32);
pub type RenderPassEndFn = unsafe extern "C" fn(render_pass: NativeRenderPassHandle);

/// Render-pass encoding operations.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct NativeRenderPassFunctions {
    pub render_pass_set_pipeline: RenderPassSetPipelineFn,
    pub render_pass_draw: RenderPassDrawFn,
    pub render_pass_end: RenderPassEndFn,
}

pub type QueueSubmitFn =
    unsafe extern "C" fn(queue: NativeQueueHandle, command_buffer: NativeCommandBufferHandle);

/// Submission operations of the host's GPU queue.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct NativeQueueFunctions {
    pub queue_submit: QueueSubmitFn,
}

pub type ShaderModuleDeleteFn = unsafe extern "C" fn(shader_module: NativeShaderModuleHandle);

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct NativeShaderModuleFunctions {
    pub shader_module_delete: ShaderModuleDeleteFn,
}

pub type PipelineLayoutDeleteFn = unsafe extern "C" fn(pipeline_layout: NativePipelineLayoutHandle);

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct NativePipelineLayoutFunctions {
    pub pipeline_layout_delete: PipelineLayoutDeleteFn,
}

pub type RenderPipelineDeleteFn = unsafe extern "C" fn(render_pipeline: NativeRenderPipelineHandle);

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct NativeRenderPipelineFunctions {
    pub render_pipeline_delete: RenderPipelineDeleteFn,
}

// =====================================================================
// Module-supplied function tables (OUT)
// =====================================================================

pub type ApplicationTickFn =
    unsafe extern "C" fn(application: RuntimeApplicationHandle, delta_seconds: f32);
pub type ApplicationWindowResizedFn =
    unsafe extern "C" fn(application: RuntimeApplicationHandle, width: u32, height: u32);

/// Operations the host may invoke on the module's root application object
/// once the entry handshake has completed.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RuntimeApplicationFunctions {
    pub application_tick: ApplicationTickFn,
    pub application_window_resized: ApplicationWindowResizedFn,
}

pub type SourceFileChangedFn = unsafe extern "C" fn();

/// The file-watch callback surface: a single slot the host's watcher invokes
/// when a watched source artifact changes. Must not be invoked concurrently
/// with itself or with the entry point.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct FileWatchFunctions {
    pub runtime_source_file_changed: SourceFileChangedFn,
}

// =====================================================================
// Entry descriptor
// =====================================================================

/// The single aggregate struct exchanged at load time.
///
/// The host allocates one instance (plus the storage behind the two OUT
/// table pointers), populates every IN field, and passes a pointer to the
/// module's exported entry symbol. The module writes every OUT field before
/// the entry symbol returns. The crossing is one atomic handshake: no field
/// is ever partially written across it, and the descriptor is not consulted
/// again afterwards: both sides work from what they captured.
///
/// IN fields must be valid and non-null before the call; OUT fields are
/// non-null after it. Neither side checks; a violation is undefined behavior
/// by design.
#[repr(C)]
#[derive(Debug)]
pub struct EntryDescriptor {
    /// OUT. Opaque handle to the module's root application object.
    pub runtime_application: RuntimeApplicationHandle,
    /// OUT. Host-allocated storage the module fills with the application
    /// function table.
    pub runtime_application_functions: *mut RuntimeApplicationFunctions,
    /// OUT. Host-allocated storage the module fills with the file-watch
    /// function table.
    pub file_watch_functions: *mut FileWatchFunctions,
    /// IN. Device-level operations of the host GPU context.
    pub device_functions: NativeDeviceFunctions,
    /// IN. The host's live GPU device instance.
    pub device: NativeDeviceHandle,
    /// IN.
    pub command_encoder_functions: NativeCommandEncoderFunctions,
    /// IN.
    pub render_pass_functions: NativeRenderPassFunctions,
    /// IN.
    pub queue_functions: NativeQueueFunctions,
    /// IN.
    pub shader_module_functions: NativeShaderModuleFunctions,
    /// IN.
    pub render_pipeline_functions: NativeRenderPipelineFunctions,
    /// IN.
    pub pipeline_layout_functions: NativePipelineLayoutFunctions,
}
