//! The exported boundary symbols and the tables behind them.
//!
//! [`runtime_main`] is the single state transition of the module, Unloaded →
//! Initialized, run exactly once when the host calls it after loading the
//! library. [`runtime_source_file_changed`] is the reload callback the host
//! reaches through the file-watch table (or by symbol name); it may run any
//! number of times afterwards, never concurrently with itself or with entry.

use once_cell::sync::OnceCell;
use tracing::{debug, info};

use hostlink_abi::ffi::{
    EntryDescriptor, FileWatchFunctions, RuntimeApplicationFunctions, RuntimeApplicationHandle,
};
use hostlink_abi::OpaqueHandle;
use hostlink_gpu::dispatch;

use crate::application::Application;
use crate::script::ScriptEngine;

/// Pointers to the leaked process-lifetime singletons, for the reload
/// callback to reach after entry has returned.
struct ModuleState {
    application: *mut Application,
    script_engine: *mut ScriptEngine,
}

// SAFETY: the boundary contract serializes entry, reload, and every
// application callback on the host's loader thread; nothing here is touched
// from a second thread.
unsafe impl Send for ModuleState {}
unsafe impl Sync for ModuleState {}

static MODULE: OnceCell<ModuleState> = OnceCell::new();

// ---------------------------------------------------------------------------
// Module-supplied tables
// ---------------------------------------------------------------------------

unsafe extern "C" fn application_tick(application: RuntimeApplicationHandle, delta_seconds: f32) {
    let application = OpaqueHandle::<Application>::unwrap_raw(application);
    application.tick(delta_seconds);
}

unsafe extern "C" fn application_window_resized(
    application: RuntimeApplicationHandle,
    width: u32,
    height: u32,
) {
    let application = OpaqueHandle::<Application>::unwrap_raw(application);
    application.window_resized(width, height);
}

fn runtime_application_functions() -> RuntimeApplicationFunctions {
    RuntimeApplicationFunctions {
        application_tick,
        application_window_resized,
    }
}

fn file_watch_functions() -> FileWatchFunctions {
    FileWatchFunctions {
        runtime_source_file_changed,
    }
}

// ---------------------------------------------------------------------------
// Exported symbols
// ---------------------------------------------------------------------------

/// The module entry point. The host resolves this symbol by name and calls
/// it exactly once, after populating every IN field of `descriptor`.
///
/// Ordering inside matters: the native tables are captured into dispatch
/// state before the script loads and before application initialization,
/// because initialization already issues native GPU calls.
///
/// There is no error channel; a script-load or initialization failure is
/// fatal to the process.
///
/// # Safety
///
/// `descriptor` must point to a live, fully populated [`EntryDescriptor`],
/// including the host-allocated storage behind the two OUT table pointers.
#[no_mangle]
pub unsafe extern "C" fn runtime_main(descriptor: *mut EntryDescriptor) {
    crate::logging::init();
    let descriptor = &mut *descriptor;
    info!("runtime module entry");

    // 1. Publish the root application object.
    let application = OpaqueHandle::wrap(Application::new());
    descriptor.runtime_application = application.as_opaque();

    // 2. Fill the module-supplied tables in host-allocated storage.
    *descriptor.runtime_application_functions = runtime_application_functions();
    *descriptor.file_watch_functions = file_watch_functions();

    // 3. Capture the native tables; every later native call reads these
    //    globals, not the descriptor.
    dispatch::capture(descriptor);

    // 4. Boot the script engine and load the user script.
    let mut script_engine = ScriptEngine::new();
    script_engine.reload().expect("initial script load failed");

    // 5. Bind the script object onto the application.
    let app = &mut *application.as_raw();
    app.user_script = script_engine.user_script();

    // 6. Initialize the application; this may already talk to the device.
    app.initialize().expect("application initialization failed");

    let _ = MODULE.set(ModuleState {
        application: application.as_raw(),
        script_engine: Box::into_raw(Box::new(script_engine)),
    });
    info!("runtime module is running");
}

/// The reload callback. Re-runs script loading, rebinds the fresh script
/// object onto the existing application (the published handle does not
/// change), and re-runs application initialization.
///
/// # Safety
///
/// Must not run before [`runtime_main`] has returned, nor concurrently with
/// itself; the host's watcher serializes invocations.
#[no_mangle]
pub unsafe extern "C" fn runtime_source_file_changed() {
    let module = MODULE
        .get()
        .expect("reload invoked before the entry handshake");
    let script_engine = &mut *module.script_engine;
    let application = &mut *module.application;

    debug!("watched source changed, reloading user script");
    script_engine.reload().expect("script reload failed");
    application.user_script = script_engine.user_script();
    application
        .initialize()
        .expect("application re-initialization failed");
}
