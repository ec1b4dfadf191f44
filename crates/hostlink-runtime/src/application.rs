//! The module's root application object.
//!
//! Exactly one instance exists per process. The entry point wraps it in an
//! opaque handle and publishes it to the host; the handle (and therefore
//! this object's address) stays valid across any number of script reloads.

use std::ffi::CStr;
use std::rc::Rc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use hostlink_gpu::{NativeDevice, PipelineLayout, RenderPipeline, ShaderModule};

use crate::script::UserScript;

/// Shader backing the user script's draw path. A fullscreen triangle keeps
/// the pipeline self-contained: no vertex buffers to negotiate with the
/// host.
const USER_SHADER: &CStr = c"@vertex
fn vs_main(@builtin(vertex_index) index: u32) -> @builtin(position) vec4<f32> {
    let x = f32(i32(index / 2u) * 4 - 1);
    let y = f32(i32(index & 1u) * 4 - 1);
    return vec4<f32>(x, y, 0.0, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(0.15, 0.18, 0.24, 1.0);
}";

/// Render resources built against the host device. Replacing them releases
/// the previous host objects through the delete slots.
struct RenderResources {
    _shader: ShaderModule,
    _layout: PipelineLayout,
    pipeline: RenderPipeline,
}

/// The root application object.
pub struct Application {
    /// The currently bound user script; rebound by the entry point and by
    /// every reload.
    pub user_script: Option<Rc<UserScript>>,
    viewport: (u32, u32),
    render: Option<RenderResources>,
    init_count: u64,
}

impl Application {
    pub fn new() -> Self {
        Self {
            user_script: None,
            viewport: (0, 0),
            render: None,
            init_count: 0,
        }
    }

    /// Wire the bound script's callbacks and (re)build the render resources
    /// through the native device.
    ///
    /// Runs once at entry and again after every script reload; the native
    /// dispatch state must already be captured when this is called.
    pub fn initialize(&mut self) -> Result<()> {
        let script = self.user_script.as_ref().context("no user script bound")?;
        script.on_init();

        let device = NativeDevice::global();
        let shader = device.create_shader_module(USER_SHADER);
        let layout = device.create_pipeline_layout();
        let pipeline = device.create_render_pipeline(&layout, &shader);
        self.render = Some(RenderResources {
            _shader: shader,
            _layout: layout,
            pipeline,
        });

        self.init_count += 1;
        info!(
            init_count = self.init_count,
            script = %script.name,
            "application initialized"
        );
        Ok(())
    }

    /// One host-driven frame: run the script's tick hook, then record and
    /// submit the draw.
    pub fn tick(&mut self, delta_seconds: f32) {
        if let Some(script) = &self.user_script {
            script.on_tick(delta_seconds);
        }

        let render = match &self.render {
            Some(render) => render,
            None => return,
        };

        let device = NativeDevice::global();
        let encoder = device.create_command_encoder();
        let pass = encoder.begin_render_pass();
        pass.set_pipeline(&render.pipeline);
        pass.draw(3, 1);
        pass.end();
        device.queue().submit(encoder.finish());
    }

    pub fn window_resized(&mut self, width: u32, height: u32) {
        debug!(width, height, "window resized");
        self.viewport = (width, height);
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// How many times `initialize` has completed (1 after entry, +1 per
    /// reload).
    pub fn init_count(&self) -> u64 {
        self.init_count
    }
}
